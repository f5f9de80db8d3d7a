//! # ESC/POS Printer Control Commands
//!
//! This module implements the device-control half of the ESC/POS command set:
//! initialization, paper cutting, cash drawer pulses and inverted printing.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Single byte: `LF`
//! - Two bytes: `ESC @`
//! - Multi-byte with parameters: `ESC p m t1 t2`, `GS V m [n]`
//!
//! Every function here is pure: it takes already-resolved parameter bytes and
//! returns the exact bytes the printer expects. No range checking is done;
//! that happens where enums are resolved to bytes.
//!
//! ## Reference
//!
//! Based on the Epson ESC/POS Command Reference
//! (<https://reference.epson-biz.com/modules/ref_escpos/>).

use crate::error::EscPosError;

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Hex: 0x1B, Decimal: 27
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Used for cutting, character size and inverted printing.
/// Hex: 0x1D, Decimal: 29
pub const GS: u8 = 0x1D;

/// LF (Line Feed) - Print and advance one line
pub const LF: u8 = 0x0A;

// ============================================================================
// INITIALIZATION COMMANDS
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Clears the print buffer and resets the printer to its power-on modes.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
/// | Decimal | 27 64 |
///
/// ## Example
///
/// ```
/// use escpos_builder::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

// ============================================================================
// CASH DRAWER
// ============================================================================

/// Cash drawer kick-out connector pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum CashDrawerPin {
    /// Drawer kick-out connector pin 2
    #[default]
    Pin2 = 0,
    /// Drawer kick-out connector pin 5
    Pin5 = 1,
}

impl TryFrom<u8> for CashDrawerPin {
    type Error = EscPosError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Pin2),
            1 => Ok(Self::Pin5),
            _ => Err(EscPosError::unrecognized("cash drawer pin", value)),
        }
    }
}

/// # Generate Pulse (ESC p m t1 t2)
///
/// Outputs a pulse on the drawer kick-out connector to open a cash drawer.
///
/// ## Protocol Details
///
/// | Format  | Bytes             |
/// |---------|-------------------|
/// | ASCII   | ESC p m t1 t2     |
/// | Hex     | 1B 70 m t1 t2     |
/// | Decimal | 27 112 m t1 t2    |
///
/// ## Parameters
///
/// - `m`: connector pin (0 = pin 2, 1 = pin 5)
/// - `t1`: pulse ON time, in 2ms units
/// - `t2`: pulse OFF time, in 2ms units
///
/// ## Example
///
/// ```
/// use escpos_builder::protocol::commands;
///
/// let kick = commands::cashdraw(0, 0x19, 0x78);
/// assert_eq!(kick, vec![0x1B, 0x70, 0x00, 0x19, 0x78]);
/// ```
#[inline]
pub fn cashdraw(m: u8, t1: u8, t2: u8) -> Vec<u8> {
    vec![ESC, b'p', m, t1, t2]
}

// ============================================================================
// CUTTER CONTROL COMMANDS
// ============================================================================

/// Paper cut functions supported by `GS V`
///
/// Function A (`Full`, `Partial`) cuts at the current position and takes no
/// extra parameter. Function B (`FeedFull`, `FeedPartial`) first feeds the
/// paper to the cutting position plus `n` motion units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutMode {
    #[default]
    Full,
    Partial,
    FeedFull(u8),
    FeedPartial(u8),
}

impl CutMode {
    /// The `m` parameter byte for this cut function
    pub fn m(self) -> u8 {
        match self {
            Self::Full => 48,
            Self::Partial => 49,
            Self::FeedFull(_) => 65,
            Self::FeedPartial(_) => 66,
        }
    }

    /// The optional `n` parameter byte (Function B only)
    pub fn n(self) -> Option<u8> {
        match self {
            Self::Full | Self::Partial => None,
            Self::FeedFull(n) | Self::FeedPartial(n) => Some(n),
        }
    }
}

/// # Select Cut Mode and Cut Paper (GS V m [n])
///
/// ## Protocol Details
///
/// Function A:
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V m   |
/// | Hex     | 1D 56 m  |
/// | Decimal | 29 86 m  |
///
/// Function B, C, D:
///
/// | Format  | Bytes      |
/// |---------|------------|
/// | ASCII   | GS V m n   |
/// | Hex     | 1D 56 m n  |
/// | Decimal | 29 86 m n  |
///
/// The `n` byte is appended only when present.
///
/// ## Example
///
/// ```
/// use escpos_builder::protocol::commands;
///
/// assert_eq!(commands::cut(48, None), vec![0x1D, 0x56, 0x30]);
/// assert_eq!(commands::cut(65, Some(3)), vec![0x1D, 0x56, 0x41, 0x03]);
/// ```
pub fn cut(m: u8, n: Option<u8>) -> Vec<u8> {
    let mut cmd = vec![GS, b'V', m];
    if let Some(n) = n {
        cmd.push(n);
    }
    cmd
}

// ============================================================================
// INVERTED PRINTING
// ============================================================================

/// # Turn White/Black Reverse Printing On/Off (GS B n)
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS B n   |
/// | Hex     | 1D 42 n  |
/// | Decimal | 29 66 n  |
///
/// - `n = 0`: reverse printing off
/// - `n = 1`: reverse printing on
#[inline]
pub fn invert(n: u8) -> Vec<u8> {
    vec![GS, b'B', n]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_cashdraw() {
        assert_eq!(cashdraw(1, 0x19, 0x78), vec![0x1B, 0x70, 0x01, 0x19, 0x78]);
    }

    #[test]
    fn test_cut_without_n() {
        assert_eq!(cut(48, None), vec![0x1D, 0x56, 0x30]);
        assert_eq!(cut(49, None), vec![0x1D, 0x56, 0x31]);
    }

    #[test]
    fn test_cut_with_n_appends_one_byte() {
        let plain = cut(66, None);
        let with_n = cut(66, Some(0x10));
        assert_eq!(with_n.len(), plain.len() + 1);
        assert_eq!(with_n, vec![0x1D, 0x56, 0x42, 0x10]);
    }

    #[test]
    fn test_cut_mode_params() {
        assert_eq!(CutMode::default(), CutMode::Full);
        assert_eq!((CutMode::Full.m(), CutMode::Full.n()), (48, None));
        assert_eq!((CutMode::Partial.m(), CutMode::Partial.n()), (49, None));
        assert_eq!(CutMode::FeedFull(5).m(), 65);
        assert_eq!(CutMode::FeedPartial(7).n(), Some(7));
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert(0), vec![0x1D, 0x42, 0x00]);
        assert_eq!(invert(1), vec![0x1D, 0x42, 0x01]);
    }

    #[test]
    fn test_cash_drawer_pin_try_from() {
        assert_eq!(CashDrawerPin::try_from(0).unwrap(), CashDrawerPin::Pin2);
        assert_eq!(CashDrawerPin::try_from(1).unwrap(), CashDrawerPin::Pin5);
        assert!(CashDrawerPin::try_from(2).is_err());
    }
}
