//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS protocol
//! spoken by most thermal receipt printers.
//!
//! ## Module Structure
//!
//! - [`commands`]: Printer control (init, cut, cash drawer, invert)
//! - [`text`]: Text styling (alignment, fonts, bold, underline, size)
//! - [`charset`]: Character sets, code page selection and text transcoding
//!
//! Every builder is a pure function returning the command bytes; composing
//! them into a job is the job of [`crate::printer::Printer`].
//!
//! ## Usage Example
//!
//! ```
//! use escpos_builder::protocol::{charset, commands, text};
//! use escpos_builder::protocol::charset::CharacterSet;
//!
//! let mut data = Vec::new();
//! data.extend(commands::init());
//! data.extend(charset::character_set(CharacterSet::Pc437Usa));
//! data.extend(text::text_bold(1));
//! data.extend(charset::encode_text(CharacterSet::Pc437Usa, "RECEIPT")?);
//! data.push(commands::LF);
//! data.extend(commands::cut(48, None));
//!
//! assert_eq!(&data[..5], &[0x1B, 0x40, 0x1B, 0x74, 0x00]);
//! # Ok::<(), escpos_builder::EscPosError>(())
//! ```
//!
//! ## Protocol Reference
//!
//! Epson ESC/POS Command Reference,
//! <https://reference.epson-biz.com/modules/ref_escpos/>.

pub mod charset;
pub mod commands;
pub mod text;
