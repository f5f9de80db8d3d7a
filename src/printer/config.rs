//! # Printer Configuration
//!
//! This module defines per-printer defaults that the builder needs but the
//! protocol leaves to the device: the character set active at power-on and
//! the cash drawer pulse timings.
//!
//! ## Presets
//!
//! | Preset | Character set | Pulse on | Pulse off |
//! |--------|---------------|----------|-----------|
//! | `GENERIC` | PC437_USA | 0x19 (50ms) | 0x78 (240ms) |
//! | `GENERIC_1252` | WPC1252 | 0x19 | 0x78 |
//! | `GENERIC_JAPAN` | JAPAN | 0x19 | 0x78 |
//!
//! ## Usage
//!
//! ```
//! use escpos_builder::printer::{Printer, PrinterConfig};
//!
//! let config = PrinterConfig::by_name("generic-1252").unwrap();
//! let printer = Printer::with_config(config);
//! assert_eq!(printer.character_set().name(), "WPC1252");
//! ```

use crate::error::EscPosError;
use crate::protocol::charset::CharacterSet;

/// # Printer Configuration
///
/// ## Pulse Timing
///
/// `pulse_on` and `pulse_off` are the `t1`/`t2` bytes of `ESC p m t1 t2`,
/// both in 2ms units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterConfig {
    /// Preset name, as accepted by [`PrinterConfig::by_name`]
    pub name: &'static str,

    /// Character set the printer starts in
    pub character_set: CharacterSet,

    /// Cash drawer pulse ON time (2ms units)
    pub pulse_on: u8,

    /// Cash drawer pulse OFF time (2ms units)
    pub pulse_off: u8,
}

impl PrinterConfig {
    /// Plain ESC/POS printer in its factory code page (PC437)
    pub const GENERIC: Self = Self {
        name: "generic",
        character_set: CharacterSet::Pc437Usa,
        pulse_on: 0x19,
        pulse_off: 0x78,
    };

    /// Western European printer set to Windows-1252
    pub const GENERIC_1252: Self = Self {
        name: "generic-1252",
        character_set: CharacterSet::Wpc1252,
        ..Self::GENERIC
    };

    /// Japanese-market printer using EUC-JP text
    pub const GENERIC_JAPAN: Self = Self {
        name: "generic-japan",
        character_set: CharacterSet::Japan,
        ..Self::GENERIC
    };

    pub const PRESETS: [Self; 3] = [Self::GENERIC, Self::GENERIC_1252, Self::GENERIC_JAPAN];

    /// Look up a preset by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`EscPosError::Unrecognized`] for unknown names.
    pub fn by_name(name: &str) -> Result<Self, EscPosError> {
        Self::PRESETS
            .into_iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| EscPosError::unrecognized("printer preset", name))
    }

    /// Same preset with a different starting character set
    pub const fn with_character_set(self, character_set: CharacterSet) -> Self {
        Self {
            character_set,
            ..self
        }
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::GENERIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_defaults() {
        let config = PrinterConfig::default();
        assert_eq!(config.character_set, CharacterSet::Pc437Usa);
        assert_eq!((config.pulse_on, config.pulse_off), (0x19, 0x78));
    }

    #[test]
    fn test_by_name() {
        assert_eq!(PrinterConfig::by_name("GENERIC-JAPAN").unwrap(), PrinterConfig::GENERIC_JAPAN);
        assert!(PrinterConfig::by_name("tsp650").is_err());
    }

    #[test]
    fn test_every_preset_resolves_by_name() {
        for preset in PrinterConfig::PRESETS {
            assert_eq!(PrinterConfig::by_name(preset.name).unwrap(), preset);
        }
        assert_eq!(
            PrinterConfig::by_name("generic-1252").unwrap().character_set,
            CharacterSet::Wpc1252
        );
    }

    #[test]
    fn test_with_character_set() {
        let config = PrinterConfig::GENERIC.with_character_set(CharacterSet::Korea);
        assert_eq!(config.character_set, CharacterSet::Korea);
        assert_eq!(config.pulse_on, PrinterConfig::GENERIC.pulse_on);
    }
}
