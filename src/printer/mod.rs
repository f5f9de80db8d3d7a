//! # Printer Module
//!
//! The [`Printer`] builder composes a print job: each call encodes one
//! command and appends it to an ordered buffer, and [`Printer::data`]
//! concatenates the buffer into the payload for the transport.
//!
//! ## Modules
//!
//! - [`config`]: Per-printer defaults (starting character set, drawer pulse)
//! - [`command`]: Buffered command record
//!
//! ## Example
//!
//! ```
//! use escpos_builder::printer::Printer;
//! use escpos_builder::protocol::charset::CharacterSet;
//! use escpos_builder::protocol::text::Align;
//!
//! let mut printer = Printer::new(CharacterSet::Pc437Usa);
//! printer
//!     .initialize()
//!     .set_align(Align::Center)
//!     .set_text_bold(true)
//!     .text_line("RECEIPT")?
//!     .set_text_bold(false)
//!     .cut();
//!
//! let bytes = printer.data();
//! assert_eq!(&bytes[..2], &[0x1B, 0x40]);
//! # Ok::<(), escpos_builder::EscPosError>(())
//! ```

pub mod command;
pub mod config;

use std::io::Write;

use tracing::{debug, trace};

pub use command::{Arg, Cmd};
pub use config::PrinterConfig;

use crate::error::EscPosError;
use crate::protocol::charset::{self, CharacterSet};
use crate::protocol::commands::{self, CashDrawerPin, CutMode, LF};
use crate::protocol::text::{self, Align, TextFont, TextSize, TextUnderline};

/// ESC/POS job builder
///
/// Holds the ordered command buffer and the active character set, which
/// decides how [`Printer::text`] encodes strings. All builder methods return
/// `&mut Self` for chaining; `text` returns a `Result` since transcoding can
/// fail.
#[derive(Debug, Clone)]
pub struct Printer {
    cmds: Vec<Cmd>,
    character_set: CharacterSet,
    config: PrinterConfig,
}

impl Printer {
    /// Create a builder whose text starts out encoded for `character_set`.
    pub fn new(character_set: CharacterSet) -> Self {
        Self::with_config(PrinterConfig::GENERIC.with_character_set(character_set))
    }

    pub fn with_config(config: PrinterConfig) -> Self {
        Self {
            cmds: Vec::new(),
            character_set: config.character_set,
            config,
        }
    }

    fn push(&mut self, cmd: Cmd) -> &mut Self {
        trace!(command = cmd.name, bytes = cmd.data.len(), "queued command");
        self.cmds.push(cmd);
        self
    }

    // ========== Printer Control ==========

    /// Select a character set and make it the encoding for later text.
    pub fn set_character_set(&mut self, set: CharacterSet) -> &mut Self {
        self.character_set = set;
        self.push(Cmd::with_args(
            "SetCharacterSet",
            vec![set.name().into()],
            charset::character_set(set),
        ))
    }

    pub fn initialize(&mut self) -> &mut Self {
        self.push(Cmd::new("Initialize", commands::init()))
    }

    /// Full cut at the current position (`GS V 48`)
    pub fn cut(&mut self) -> &mut Self {
        self.push(Cmd::new("Cut", commands::cut(CutMode::Full.m(), None)))
    }

    /// Cut with an explicit cut function
    pub fn cut_with(&mut self, mode: CutMode) -> &mut Self {
        let mut args = vec![Arg::Byte(mode.m())];
        args.extend(mode.n().map(Arg::Byte));
        self.push(Cmd::with_args(
            "Cut",
            args,
            commands::cut(mode.m(), mode.n()),
        ))
    }

    /// Pulse the cash drawer on `pin` with the configured timings.
    pub fn cashdraw(&mut self, pin: CashDrawerPin) -> &mut Self {
        let data = commands::cashdraw(pin as u8, self.config.pulse_on, self.config.pulse_off);
        self.push(Cmd::with_args(
            "Cashdraw",
            vec![format!("{pin:?}").into()],
            data,
        ))
    }

    // ========== Content ==========

    /// Append `data` encoded in the active character set.
    ///
    /// # Errors
    ///
    /// Returns [`EscPosError::Unencodable`] if `data` holds a character the
    /// active encoding cannot represent. Nothing is appended in that case.
    pub fn text(&mut self, data: &str) -> Result<&mut Self, EscPosError> {
        let bytes = charset::encode_text(self.character_set, data)?;
        Ok(self.push(Cmd::with_args("Text", vec![data.into()], bytes)))
    }

    /// [`Printer::text`] followed by [`Printer::new_line`]
    ///
    /// # Errors
    ///
    /// Same as [`Printer::text`].
    pub fn text_line(&mut self, data: &str) -> Result<&mut Self, EscPosError> {
        Ok(self.text(data)?.new_line())
    }

    pub fn new_line(&mut self) -> &mut Self {
        self.push(Cmd::new("NewLine", vec![LF]))
    }

    /// Append bytes verbatim, bypassing all encoding.
    pub fn raw(&mut self, data: &[u8]) -> &mut Self {
        let args = data.iter().copied().map(Arg::Byte).collect();
        self.push(Cmd::with_args("Raw", args, data.to_vec()))
    }

    // ========== Style Changes ==========

    pub fn set_text_font(&mut self, font: TextFont) -> &mut Self {
        self.push(Cmd::with_args(
            "SetTextFont",
            vec![font.name().into()],
            text::text_font(font.byte()),
        ))
    }

    pub fn set_text_bold(&mut self, bold: bool) -> &mut Self {
        self.push(Cmd::with_args(
            "SetTextBold",
            vec![bold.into()],
            text::text_bold(u8::from(bold)),
        ))
    }

    pub fn set_text_underline(&mut self, underline: TextUnderline) -> &mut Self {
        self.push(Cmd::with_args(
            "SetTextUnderline",
            vec![format!("{underline:?}").into()],
            text::text_underline(underline as u8),
        ))
    }

    /// Set character magnification; `GS ! n` with
    /// `n = (width - 1) * 16 + (height - 1)`.
    pub fn set_text_size(&mut self, width: TextSize, height: TextSize) -> &mut Self {
        self.push(Cmd::with_args(
            "SetTextSize",
            vec![Arg::Byte(width as u8), Arg::Byte(height as u8)],
            text::text_size(text::size_byte(width, height)),
        ))
    }

    /// Clear all print mode bits (`ESC ! 0`)
    pub fn set_text_normal(&mut self) -> &mut Self {
        self.push(Cmd::new("SetTextNormal", text::text_mode(0)))
    }

    pub fn set_align(&mut self, align: Align) -> &mut Self {
        self.push(Cmd::with_args(
            "SetAlign",
            vec![format!("{align:?}").into()],
            text::alignment(align as u8),
        ))
    }

    /// White-on-black printing
    pub fn invert(&mut self, enabled: bool) -> &mut Self {
        self.push(Cmd::with_args(
            "Invert",
            vec![enabled.into()],
            commands::invert(u8::from(enabled)),
        ))
    }

    // ========== Buffer ==========

    /// Concatenate every buffered command's bytes, in order.
    ///
    /// The buffer is left untouched, so repeated calls return the same bytes.
    pub fn data(&self) -> Vec<u8> {
        self.cmds.iter().flat_map(|cmd| cmd.data.iter().copied()).collect()
    }

    /// Stream the same bytes as [`Printer::data`] into `out`.
    ///
    /// # Errors
    ///
    /// Propagates the writer's I/O errors.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<(), EscPosError> {
        for cmd in &self.cmds {
            out.write_all(&cmd.data)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Empty the buffer. The active character set is kept.
    pub fn clear(&mut self) -> &mut Self {
        self.cmds.clear();
        self
    }

    /// Log every buffered command at DEBUG level.
    pub fn debug(&mut self) -> &mut Self {
        for (index, cmd) in self.cmds.iter().enumerate() {
            debug!(index, command = %cmd, data = ?cmd.data, "buffered command");
        }
        self
    }

    pub fn commands(&self) -> &[Cmd] {
        &self.cmds
    }

    pub fn character_set(&self) -> CharacterSet {
        self.character_set
    }

    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::with_config(PrinterConfig::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================
