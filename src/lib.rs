//! # escpos-builder - ESC/POS Command Builder
//!
//! escpos-builder composes byte payloads for thermal receipt printers that
//! speak the ESC/POS command protocol. It provides:
//!
//! - **Protocol implementation**: one pure builder per ESC/POS command
//! - **Character sets**: the printer's code page table and host-side text
//!   transcoding into the matching legacy encoding
//! - **Job builder**: an ordered command buffer with a fluent API
//!
//! Getting the bytes to the printer (serial, USB, network) is left to the
//! caller.
//!
//! ## Quick Start
//!
//! ```
//! use escpos_builder::{
//!     printer::Printer,
//!     protocol::charset::CharacterSet,
//! };
//!
//! let mut printer = Printer::new(CharacterSet::Pc437Usa);
//! printer
//!     .initialize()
//!     .set_character_set(CharacterSet::Pc437Usa)
//!     .text("A")?
//!     .cut();
//!
//! assert_eq!(
//!     printer.data(),
//!     vec![0x1B, 0x40, 0x1B, 0x74, 0x00, 0x41, 0x1D, 0x56, 0x30]
//! );
//! # Ok::<(), escpos_builder::EscPosError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders and code page tables |
//! | [`printer`] | Job builder and printer configurations |
//! | [`error`] | Error types |

pub mod error;
pub mod printer;
pub mod protocol;

// Re-exports for convenience
pub use error::EscPosError;
pub use printer::{Printer, PrinterConfig};
pub use protocol::charset::CharacterSet;
