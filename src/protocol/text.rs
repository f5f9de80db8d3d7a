//! # ESC/POS Text Styling Commands
//!
//! This module implements text formatting commands: alignment, fonts,
//! emphasis, underline, print mode and character size.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Alignment | ESC a n | Left / center / right |
//! | Bold | ESC E n | **Emphasized** text |
//! | Font | ESC M n | Font A-E, special fonts |
//! | Print mode | ESC ! n | Combined mode bits (0 = normal) |
//! | Size | GS ! n | 1x-8x width and height |
//! | Underline | ESC - n | 0, 1 or 2 dot underline |
//!
//! The enums in this module carry their protocol byte directly, except for
//! [`TextFont`] whose special fonts do not follow the ordinal.

use std::str::FromStr;

use super::commands::{ESC, GS};
use crate::error::EscPosError;

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Align {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

impl TryFrom<u8> for Align {
    type Error = EscPosError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Center),
            2 => Ok(Self::Right),
            _ => Err(EscPosError::unrecognized("alignment", value)),
        }
    }
}

/// # Select Justification (ESC a n)
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC a n  |
/// | Hex     | 1B 61 n  |
/// | Decimal | 27 97 n  |
///
/// - `n = 0`: left
/// - `n = 1`: center
/// - `n = 2`: right
///
/// ## Example
///
/// ```
/// use escpos_builder::protocol::text::{alignment, Align};
///
/// assert_eq!(alignment(Align::Center as u8), vec![0x1B, 0x61, 0x01]);
/// ```
#[inline]
pub fn alignment(n: u8) -> Vec<u8> {
    vec![ESC, b'a', n]
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Character fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFont {
    #[default]
    A,
    B,
    C,
    D,
    E,
    SpecialA,
    SpecialB,
}

impl TextFont {
    pub const ALL: [TextFont; 7] = [
        TextFont::A,
        TextFont::B,
        TextFont::C,
        TextFont::D,
        TextFont::E,
        TextFont::SpecialA,
        TextFont::SpecialB,
    ];

    /// Protocol byte for `ESC M n`
    pub fn byte(self) -> u8 {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
            Self::E => 4,
            Self::SpecialA => 97,
            Self::SpecialB => 98,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::SpecialA => "SpecialA",
            Self::SpecialB => "SpecialB",
        }
    }
}

impl TryFrom<u8> for TextFont {
    type Error = EscPosError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|font| font.byte() == value)
            .ok_or_else(|| EscPosError::unrecognized("text font", value))
    }
}

impl FromStr for TextFont {
    type Err = EscPosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|font| font.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EscPosError::unrecognized("text font", s))
    }
}

/// # Select Character Font (ESC M n)
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC M n  |
/// | Hex     | 1B 4D n  |
/// | Decimal | 27 77 n  |
#[inline]
pub fn text_font(n: u8) -> Vec<u8> {
    vec![ESC, b'M', n]
}

// ============================================================================
// EMPHASIS AND PRINT MODE
// ============================================================================

/// # Turn Emphasized Mode On/Off (ESC E n)
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC E n  |
/// | Hex     | 1B 45 n  |
/// | Decimal | 27 69 n  |
///
/// ## Example
///
/// ```
/// use escpos_builder::protocol::text::text_bold;
///
/// assert_eq!(text_bold(1), vec![0x1B, 0x45, 0x01]);
/// ```
#[inline]
pub fn text_bold(n: u8) -> Vec<u8> {
    vec![ESC, b'E', n]
}

/// # Select Print Mode(s) (ESC ! n)
///
/// `n` is a bit field (font B, emphasized, double height, double width,
/// underline). `n = 0` restores normal printing.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC ! n  |
/// | Hex     | 1B 21 n  |
/// | Decimal | 27 33 n  |
#[inline]
pub fn text_mode(n: u8) -> Vec<u8> {
    vec![ESC, b'!', n]
}

// ============================================================================
// UNDERLINE
// ============================================================================

/// Underline modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TextUnderline {
    #[default]
    Off = 0,
    /// 1 dot thick
    OneDot = 1,
    /// 2 dots thick
    TwoDots = 2,
}

impl TryFrom<u8> for TextUnderline {
    type Error = EscPosError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Off),
            1 => Ok(Self::OneDot),
            2 => Ok(Self::TwoDots),
            _ => Err(EscPosError::unrecognized("underline mode", value)),
        }
    }
}

/// # Turn Underline Mode On/Off (ESC - n)
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC - n  |
/// | Hex     | 1B 2D n  |
/// | Decimal | 27 45 n  |
#[inline]
pub fn text_underline(n: u8) -> Vec<u8> {
    vec![ESC, b'-', n]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// Character magnification, 1x through 8x
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum TextSize {
    #[default]
    Normal = 1,
    Double = 2,
    Triple = 3,
    Quadruple = 4,
    Quintuple = 5,
    Sextuple = 6,
    Septuple = 7,
    Octuple = 8,
}

impl TryFrom<u8> for TextSize {
    type Error = EscPosError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Normal),
            2 => Ok(Self::Double),
            3 => Ok(Self::Triple),
            4 => Ok(Self::Quadruple),
            5 => Ok(Self::Quintuple),
            6 => Ok(Self::Sextuple),
            7 => Ok(Self::Septuple),
            8 => Ok(Self::Octuple),
            _ => Err(EscPosError::unrecognized("text size", value)),
        }
    }
}

/// Combine width and height multipliers into the `GS !` parameter byte.
///
/// Width occupies the high nibble, height the low nibble, each stored as
/// `scale - 1`.
///
/// ```
/// use escpos_builder::protocol::text::{size_byte, TextSize};
///
/// assert_eq!(size_byte(TextSize::Double, TextSize::Triple), 18);
/// ```
#[inline]
pub fn size_byte(width: TextSize, height: TextSize) -> u8 {
    (width as u8 - 1) * 16 + (height as u8 - 1)
}

/// # Select Character Size (GS ! n)
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS ! n   |
/// | Hex     | 1D 21 n  |
/// | Decimal | 29 33 n  |
///
/// See [`size_byte`] for building `n`.
#[inline]
pub fn text_size(n: u8) -> Vec<u8> {
    vec![GS, b'!', n]
}

// ============================================================================
// TESTS
// ============================================================================
