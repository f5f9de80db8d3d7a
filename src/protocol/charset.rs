//! # Character Sets and Code Pages
//!
//! Maps each [`CharacterSet`] to the three things the printer and the host
//! need to agree on:
//!
//! 1. the text encoding used to turn Unicode text into bytes,
//! 2. the protocol byte sent with the select command,
//! 3. whether that select command is `ESC R` (international character set)
//!    or `ESC t` (character code table).
//!
//! ## Code Page Table
//!
//! | Character set | Encoding | n | Command |
//! |---------------|----------|---|---------|
//! | PC437_USA | CP437 | 0 | ESC t |
//! | PC850_MULTILINGUAL | CP850 | 2 | ESC t |
//! | PC852_LATIN2, SLOVENIA | CP852 | 18 | ESC t |
//! | WPC1252 | CP1252 | 16 | ESC t |
//! | KZ1048_KAZAKHSTAN | RK1048 | 53 | ESC t |
//! | JAPAN | EUC-JP | 8 | ESC R |
//! | KOREA | EUC-KR | 13 | ESC R |
//! | CHINA | EUC-CN | 15 | ESC R |
//! | HK_TW | Big5-HKSCS | 0 | ESC R |
//!
//! The full table lives in [`CharacterSet::encoding`] and
//! [`CharacterSet::byte`]. Values follow the vendor's code page numbering
//! and must not be renumbered.
//!
//! ## Transcoding
//!
//! DOS code pages go through `oem_cp`, Windows/ISO/East-Asian encodings
//! through `encoding_rs`. CP1125 and RK1048 are patched variants of CP866
//! and windows-1251. Characters the target cannot represent are an error;
//! nothing is substituted.

use std::fmt;
use std::str::FromStr;

use encoding_rs::{EncoderResult, Encoding};
use oem_cp::code_table::ENCODING_TABLE_CP_MAP;

use super::commands::ESC;
use crate::error::EscPosError;

// ============================================================================
// CHARACTER SET ENUM
// ============================================================================

/// Printer character sets
///
/// `Slovenia` and `Pc852Latin2` are the same code page on the device, as are
/// the encodings of `Pc851Greek` and `Pc860Portuguese`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterSet {
    #[default]
    Pc437Usa,
    Pc850Multilingual,
    Pc860Portuguese,
    Pc863CanadianFrench,
    Pc865Nordic,
    Pc851Greek,
    Pc857Turkish,
    Pc737Greek,
    Iso8859_7Greek,
    Wpc1252,
    Pc866Cyrillic2,
    Pc852Latin2,
    Slovenia,
    Pc858Euro,
    Wpc775BalticRim,
    Pc855Cyrillic,
    Pc861Icelandic,
    Pc862Hebrew,
    Pc864Arabic,
    Pc869Greek,
    Iso8859_2Latin2,
    Iso8859_15Latin9,
    Pc1125Ukrainian,
    Wpc1250Latin2,
    Wpc1251Cyrillic,
    Wpc1253Greek,
    Wpc1254Turkish,
    Wpc1255Hebrew,
    Wpc1256Arabic,
    Wpc1257BalticRim,
    Wpc1258Vietnamese,
    Kz1048Kazakhstan,
    Japan,
    Korea,
    China,
    /// Hong Kong / Taiwan. Text is encoded with the Big5 core table;
    /// HKSCS-only characters fail to encode.
    HkTw,
}

impl CharacterSet {
    /// Every character set, in table order
    pub const ALL: [CharacterSet; 36] = [
        Self::Pc437Usa,
        Self::Pc850Multilingual,
        Self::Pc860Portuguese,
        Self::Pc863CanadianFrench,
        Self::Pc865Nordic,
        Self::Pc851Greek,
        Self::Pc857Turkish,
        Self::Pc737Greek,
        Self::Iso8859_7Greek,
        Self::Wpc1252,
        Self::Pc866Cyrillic2,
        Self::Pc852Latin2,
        Self::Slovenia,
        Self::Pc858Euro,
        Self::Wpc775BalticRim,
        Self::Pc855Cyrillic,
        Self::Pc861Icelandic,
        Self::Pc862Hebrew,
        Self::Pc864Arabic,
        Self::Pc869Greek,
        Self::Iso8859_2Latin2,
        Self::Iso8859_15Latin9,
        Self::Pc1125Ukrainian,
        Self::Wpc1250Latin2,
        Self::Wpc1251Cyrillic,
        Self::Wpc1253Greek,
        Self::Wpc1254Turkish,
        Self::Wpc1255Hebrew,
        Self::Wpc1256Arabic,
        Self::Wpc1257BalticRim,
        Self::Wpc1258Vietnamese,
        Self::Kz1048Kazakhstan,
        Self::Japan,
        Self::Korea,
        Self::China,
        Self::HkTw,
    ];

    /// Protocol name, as printed in the vendor's code page tables
    pub fn name(self) -> &'static str {
        match self {
            Self::Pc437Usa => "PC437_USA",
            Self::Pc850Multilingual => "PC850_MULTILINGUAL",
            Self::Pc860Portuguese => "PC860_PORTUGUESE",
            Self::Pc863CanadianFrench => "PC863_CANADIAN_FRENCH",
            Self::Pc865Nordic => "PC865_NORDIC",
            Self::Pc851Greek => "PC851_GREEK",
            Self::Pc857Turkish => "PC857_TURKISH",
            Self::Pc737Greek => "PC737_GREEK",
            Self::Iso8859_7Greek => "ISO8859_7_GREEK",
            Self::Wpc1252 => "WPC1252",
            Self::Pc866Cyrillic2 => "PC866_CYRILLIC2",
            Self::Pc852Latin2 => "PC852_LATIN2",
            Self::Slovenia => "SLOVENIA",
            Self::Pc858Euro => "PC858_EURO",
            Self::Wpc775BalticRim => "WPC775_BALTIC_RIM",
            Self::Pc855Cyrillic => "PC855_CYRILLIC",
            Self::Pc861Icelandic => "PC861_ICELANDIC",
            Self::Pc862Hebrew => "PC862_HEBREW",
            Self::Pc864Arabic => "PC864_ARABIC",
            Self::Pc869Greek => "PC869_GREEK",
            Self::Iso8859_2Latin2 => "ISO8859_2_LATIN2",
            Self::Iso8859_15Latin9 => "ISO8859_15_LATIN9",
            Self::Pc1125Ukrainian => "PC1125_UKRAINIAN",
            Self::Wpc1250Latin2 => "WPC1250_LATIN2",
            Self::Wpc1251Cyrillic => "WPC1251_CYRILLIC",
            Self::Wpc1253Greek => "WPC1253_GREEK",
            Self::Wpc1254Turkish => "WPC1254_TURKISH",
            Self::Wpc1255Hebrew => "WPC1255_HEBREW",
            Self::Wpc1256Arabic => "WPC1256_ARABIC",
            Self::Wpc1257BalticRim => "WPC1257_BALTIC_RIM",
            Self::Wpc1258Vietnamese => "WPC1258_VIETNAMESE",
            Self::Kz1048Kazakhstan => "KZ1048_KAZAKHSTAN",
            Self::Japan => "JAPAN",
            Self::Korea => "KOREA",
            Self::China => "CHINA",
            Self::HkTw => "HK_TW",
        }
    }

    /// Host-side text encoding name used to transcode text for this set
    pub fn encoding(self) -> &'static str {
        match self {
            Self::Pc437Usa => "CP437",
            Self::Pc850Multilingual => "CP850",
            Self::Pc860Portuguese => "CP860",
            Self::Pc863CanadianFrench => "CP863",
            Self::Pc865Nordic => "CP865",
            // Kept as the device table lists it.
            Self::Pc851Greek => "CP860",
            Self::Pc857Turkish => "CP857",
            Self::Pc737Greek => "CP737",
            Self::Iso8859_7Greek => "ISO-8859-7",
            Self::Wpc1252 => "CP1252",
            Self::Pc866Cyrillic2 => "CP866",
            Self::Pc852Latin2 | Self::Slovenia => "CP852",
            Self::Pc858Euro => "CP858",
            Self::Wpc775BalticRim => "CP775",
            Self::Pc855Cyrillic => "CP855",
            Self::Pc861Icelandic => "CP861",
            Self::Pc862Hebrew => "CP862",
            Self::Pc864Arabic => "CP864",
            Self::Pc869Greek => "CP869",
            Self::Iso8859_2Latin2 => "ISO-8859-2",
            Self::Iso8859_15Latin9 => "ISO-8859-15",
            Self::Pc1125Ukrainian => "CP1125",
            Self::Wpc1250Latin2 => "WIN1250",
            Self::Wpc1251Cyrillic => "WIN1251",
            Self::Wpc1253Greek => "WIN1253",
            Self::Wpc1254Turkish => "WIN1254",
            Self::Wpc1255Hebrew => "WIN1255",
            Self::Wpc1256Arabic => "WIN1256",
            Self::Wpc1257BalticRim => "WIN1257",
            Self::Wpc1258Vietnamese => "WIN1258",
            Self::Kz1048Kazakhstan => "RK1048",
            Self::Japan => "EUC-JP",
            Self::Korea => "EUC-KR",
            Self::China => "EUC-CN",
            Self::HkTw => "Big5-HKSCS",
        }
    }

    /// Protocol byte `n` for `ESC t n` or `ESC R n`
    pub fn byte(self) -> u8 {
        match self {
            Self::Pc437Usa => 0,
            Self::Pc850Multilingual => 2,
            Self::Pc860Portuguese => 3,
            Self::Pc863CanadianFrench => 4,
            Self::Pc865Nordic => 5,
            Self::Pc851Greek => 11,
            Self::Pc857Turkish => 12,
            Self::Pc737Greek => 14,
            Self::Iso8859_7Greek => 15,
            Self::Wpc1252 => 16,
            Self::Pc866Cyrillic2 => 17,
            Self::Pc852Latin2 | Self::Slovenia => 18,
            Self::Pc858Euro => 19,
            Self::Wpc775BalticRim => 33,
            Self::Pc855Cyrillic => 34,
            Self::Pc861Icelandic => 35,
            Self::Pc862Hebrew => 36,
            Self::Pc864Arabic => 37,
            Self::Pc869Greek => 38,
            Self::Iso8859_2Latin2 => 39,
            Self::Iso8859_15Latin9 => 40,
            Self::Pc1125Ukrainian => 44,
            Self::Wpc1250Latin2 => 45,
            Self::Wpc1251Cyrillic => 46,
            Self::Wpc1253Greek => 47,
            Self::Wpc1254Turkish => 48,
            Self::Wpc1255Hebrew => 49,
            Self::Wpc1256Arabic => 50,
            Self::Wpc1257BalticRim => 51,
            Self::Wpc1258Vietnamese => 52,
            Self::Kz1048Kazakhstan => 53,
            Self::Japan => 0x08,
            Self::Korea => 0x0D,
            Self::China => 0x0F,
            Self::HkTw => 0x00,
        }
    }

    /// True when the set is selected with `ESC R` instead of `ESC t`
    pub fn is_international(self) -> bool {
        matches!(self, Self::Japan | Self::Korea | Self::China | Self::HkTw)
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CharacterSet {
    type Err = EscPosError;

    /// Parse a protocol name such as `"PC437_USA"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|set| set.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EscPosError::unrecognized("character set", s))
    }
}

// ============================================================================
// SELECT COMMANDS
// ============================================================================

/// # Select Character Code Table (ESC t n)
///
/// ## Protocol Details
///
/// | Format  | Bytes     |
/// |---------|-----------|
/// | ASCII   | ESC t n   |
/// | Hex     | 1B 74 n   |
/// | Decimal | 27 116 n  |
#[inline]
pub fn character_code_table(n: u8) -> Vec<u8> {
    vec![ESC, b't', n]
}

/// # Select International Character Set (ESC R n)
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC R n  |
/// | Hex     | 1B 52 n  |
/// | Decimal | 27 82 n  |
#[inline]
pub fn international_character_set(n: u8) -> Vec<u8> {
    vec![ESC, b'R', n]
}

/// Select a character set with whichever command the set requires.
///
/// ## Example
///
/// ```
/// use escpos_builder::protocol::charset::{character_set, CharacterSet};
///
/// assert_eq!(character_set(CharacterSet::Japan), vec![0x1B, 0x52, 0x08]);
/// assert_eq!(character_set(CharacterSet::Pc437Usa), vec![0x1B, 0x74, 0x00]);
/// ```
pub fn character_set(set: CharacterSet) -> Vec<u8> {
    let n = set.byte();
    if set.is_international() {
        international_character_set(n)
    } else {
        character_code_table(n)
    }
}

// ============================================================================
// TRANSCODING
// ============================================================================

/// CP1125 is CP866 with Ukrainian letters at 0xF2-0xF9.
const CP1125_OVERRIDES: &[(char, u8)] = &[
    ('Ґ', 0xF2),
    ('ґ', 0xF3),
    ('Є', 0xF4),
    ('є', 0xF5),
    ('І', 0xF6),
    ('і', 0xF7),
    ('Ї', 0xF8),
    ('ї', 0xF9),
];

/// RK1048 is windows-1251 with Kazakh letters in place of Serbian,
/// Macedonian and Ukrainian ones.
const RK1048_OVERRIDES: &[(char, u8)] = &[
    ('Қ', 0x8D),
    ('Һ', 0x8E),
    ('қ', 0x9D),
    ('һ', 0x9E),
    ('Ұ', 0xA1),
    ('ұ', 0xA2),
    ('Ә', 0xA3),
    ('Ө', 0xA5),
    ('Ғ', 0xAA),
    ('Ү', 0xAF),
    ('ө', 0xB4),
    ('ғ', 0xBA),
    ('ә', 0xBC),
    ('Ң', 0xBD),
    ('ң', 0xBE),
    ('ү', 0xBF),
];

#[derive(Debug, Clone, Copy)]
enum Base {
    /// DOS code page number, looked up in `oem_cp`
    Oem(u16),
    Whatwg(&'static Encoding),
}

impl Base {
    /// Encode a non-ASCII char to a single byte, if the base has one for it.
    fn single_byte(self, ch: char) -> Option<u8> {
        match self {
            Self::Oem(cp) => ENCODING_TABLE_CP_MAP.get(&cp)?.get(&ch).copied(),
            Self::Whatwg(encoding) => {
                let mut utf8 = [0u8; 4];
                let mut out = [0u8; 4];
                let (result, _, written) = encoding
                    .new_encoder()
                    .encode_from_utf8_without_replacement(ch.encode_utf8(&mut utf8), &mut out, true);
                match (result, written) {
                    (EncoderResult::InputEmpty, 1) => Some(out[0]),
                    _ => None,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Codec {
    Direct(Base),
    Patched(Base, &'static [(char, u8)]),
    /// GBK restricted to the two-byte GB 2312 range (0xA1-0xFE)
    EucCn,
}

impl Codec {
    fn for_encoding(name: &str) -> Option<Self> {
        let base = match name {
            "CP1125" => return Some(Self::Patched(Base::Oem(866), CP1125_OVERRIDES)),
            "RK1048" => {
                return Some(Self::Patched(
                    Base::Whatwg(encoding_rs::WINDOWS_1251),
                    RK1048_OVERRIDES,
                ));
            }
            "CP1252" => Base::Whatwg(encoding_rs::WINDOWS_1252),
            "WIN1250" => Base::Whatwg(encoding_rs::WINDOWS_1250),
            "WIN1251" => Base::Whatwg(encoding_rs::WINDOWS_1251),
            "WIN1253" => Base::Whatwg(encoding_rs::WINDOWS_1253),
            "WIN1254" => Base::Whatwg(encoding_rs::WINDOWS_1254),
            "WIN1255" => Base::Whatwg(encoding_rs::WINDOWS_1255),
            "WIN1256" => Base::Whatwg(encoding_rs::WINDOWS_1256),
            "WIN1257" => Base::Whatwg(encoding_rs::WINDOWS_1257),
            "WIN1258" => Base::Whatwg(encoding_rs::WINDOWS_1258),
            "ISO-8859-2" => Base::Whatwg(encoding_rs::ISO_8859_2),
            "ISO-8859-7" => Base::Whatwg(encoding_rs::ISO_8859_7),
            "ISO-8859-15" => Base::Whatwg(encoding_rs::ISO_8859_15),
            "EUC-JP" => Base::Whatwg(encoding_rs::EUC_JP),
            "EUC-KR" => Base::Whatwg(encoding_rs::EUC_KR),
            "EUC-CN" => return Some(Self::EucCn),
            "Big5-HKSCS" => Base::Whatwg(encoding_rs::BIG5),
            other => Base::Oem(other.strip_prefix("CP")?.parse().ok()?),
        };
        Some(Self::Direct(base))
    }

    fn encode(self, name: &'static str, text: &str) -> Result<Vec<u8>, EscPosError> {
        let unencodable = |character| EscPosError::Unencodable {
            encoding: name,
            character,
        };

        match self {
            Self::Direct(Base::Whatwg(encoding)) => encode_whatwg(encoding, name, text),
            Self::Direct(Base::Oem(cp)) => {
                let table = ENCODING_TABLE_CP_MAP
                    .get(&cp)
                    .ok_or(EscPosError::UnsupportedEncoding(name))?;
                text.chars()
                    .map(|ch| {
                        let byte = if ch.is_ascii() {
                            Some(ch as u8)
                        } else {
                            table.get(&ch).copied()
                        };
                        byte.ok_or_else(|| unencodable(ch))
                    })
                    .collect()
            }
            Self::Patched(base, overrides) => text
                .chars()
                .map(|ch| {
                    if ch.is_ascii() {
                        return Ok(ch as u8);
                    }
                    if let Some(&(_, byte)) = overrides.iter().find(|(c, _)| *c == ch) {
                        return Ok(byte);
                    }
                    // Positions taken over by the overrides are gone from the base.
                    base.single_byte(ch)
                        .filter(|byte| !overrides.iter().any(|(_, b)| b == byte))
                        .ok_or_else(|| unencodable(ch))
                })
                .collect(),
            Self::EucCn => {
                let mut out = Vec::with_capacity(text.len());
                for ch in text.chars() {
                    if ch.is_ascii() {
                        out.push(ch as u8);
                        continue;
                    }
                    let mut utf8 = [0u8; 4];
                    let mut buf = [0u8; 4];
                    let (result, _, written) = encoding_rs::GBK
                        .new_encoder()
                        .encode_from_utf8_without_replacement(ch.encode_utf8(&mut utf8), &mut buf, true);
                    match (result, &buf[..written]) {
                        (EncoderResult::InputEmpty, &[lead, trail])
                            if (0xA1..=0xFE).contains(&lead) && (0xA1..=0xFE).contains(&trail) =>
                        {
                            out.extend([lead, trail]);
                        }
                        // GBK-only code points (single 0x80, GBK/3-5 rows) are not EUC-CN
                        _ => return Err(unencodable(ch)),
                    }
                }
                Ok(out)
            }
        }
    }
}

fn encode_whatwg(
    encoding: &'static Encoding,
    name: &'static str,
    text: &str,
) -> Result<Vec<u8>, EscPosError> {
    let mut encoder = encoding.new_encoder();
    let capacity = encoder
        .max_buffer_length_from_utf8_without_replacement(text.len())
        .ok_or(EscPosError::UnsupportedEncoding(name))?;
    let mut out = vec![0u8; capacity];

    let (result, _, written) = encoder.encode_from_utf8_without_replacement(text, &mut out, true);
    match result {
        EncoderResult::InputEmpty => {
            out.truncate(written);
            Ok(out)
        }
        EncoderResult::Unmappable(character) => Err(EscPosError::Unencodable {
            encoding: name,
            character,
        }),
        EncoderResult::OutputFull => Err(EscPosError::UnsupportedEncoding(name)),
    }
}

/// Transcode `text` into the byte encoding of `set`.
///
/// Fails with [`EscPosError::Unencodable`] on the first character the
/// encoding cannot represent.
///
/// ## East-Asian Limits
///
/// - `EUC-CN` accepts only characters that GBK places in the two-byte
///   GB 2312 range; GBK extensions such as `€` (0x80) are rejected.
/// - `Big5-HKSCS` encodes the Big5 core table only. HKSCS supplementary
///   characters (e.g. `𨋢`) are rejected rather than substituted.
///
/// ## Example
///
/// ```
/// use escpos_builder::protocol::charset::{encode_text, CharacterSet};
///
/// assert_eq!(encode_text(CharacterSet::Pc437Usa, "Año").unwrap(), vec![0x41, 0xA4, 0x6F]);
/// assert!(encode_text(CharacterSet::Pc437Usa, "★").is_err());
/// ```
pub fn encode_text(set: CharacterSet, text: &str) -> Result<Vec<u8>, EscPosError> {
    let name = set.encoding();
    Codec::for_encoding(name)
        .ok_or(EscPosError::UnsupportedEncoding(name))?
        .encode(name, text)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_set_has_a_table_entry() {
        assert_eq!(CharacterSet::ALL.len(), 36);
        for set in CharacterSet::ALL {
            assert!(!set.encoding().is_empty(), "{set} has no encoding");
            assert!(Codec::for_encoding(set.encoding()).is_some(), "{set} has no codec");
        }
    }

    #[test]
    fn test_names_round_trip_through_from_str() {
        for set in CharacterSet::ALL {
            assert_eq!(set.name().parse::<CharacterSet>().unwrap(), set);
        }
        assert_eq!("pc437_usa".parse::<CharacterSet>().unwrap(), CharacterSet::Pc437Usa);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "PC999_NOWHERE".parse::<CharacterSet>().unwrap_err();
        assert!(matches!(err, EscPosError::Unrecognized { kind: "character set", .. }));
        // Only the corrected spelling exists
        assert!("PC1125_UKRANIAN".parse::<CharacterSet>().is_err());
    }

    #[test]
    fn test_codepage_ids() {
        assert_eq!(CharacterSet::Pc437Usa.byte(), 0);
        assert_eq!(CharacterSet::Wpc1252.byte(), 16);
        assert_eq!(CharacterSet::Pc858Euro.byte(), 19);
        assert_eq!(CharacterSet::Pc1125Ukrainian.byte(), 44);
        assert_eq!(CharacterSet::Kz1048Kazakhstan.byte(), 53);
        assert_eq!(CharacterSet::Korea.byte(), 0x0D);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(CharacterSet::Slovenia.byte(), CharacterSet::Pc852Latin2.byte());
        assert_eq!(CharacterSet::Slovenia.encoding(), CharacterSet::Pc852Latin2.encoding());
        assert_eq!(CharacterSet::Pc851Greek.encoding(), "CP860");
    }

    #[test]
    fn test_international_sets() {
        let international: Vec<_> = CharacterSet::ALL
            .into_iter()
            .filter(|set| set.is_international())
            .collect();
        assert_eq!(
            international,
            vec![
                CharacterSet::Japan,
                CharacterSet::Korea,
                CharacterSet::China,
                CharacterSet::HkTw
            ]
        );
    }

    #[test]
    fn test_select_commands() {
        assert_eq!(character_code_table(16), vec![0x1B, 0x74, 0x10]);
        assert_eq!(international_character_set(8), vec![0x1B, 0x52, 0x08]);
    }

    #[test]
    fn test_character_set_dispatch() {
        for set in CharacterSet::ALL {
            let expected = if set.is_international() {
                international_character_set(set.byte())
            } else {
                character_code_table(set.byte())
            };
            assert_eq!(character_set(set), expected, "{set}");
        }
        assert_eq!(character_set(CharacterSet::Japan), vec![0x1B, 0x52, 0x08]);
        assert_eq!(character_set(CharacterSet::Pc437Usa), vec![0x1B, 0x74, 0x00]);
    }

    #[test]
    fn test_ascii_passes_through_every_encoding() {
        for set in CharacterSet::ALL {
            assert_eq!(encode_text(set, "Total 12.50").unwrap(), b"Total 12.50", "{set}");
            assert_eq!(encode_text(set, "").unwrap(), b"", "{set}");
        }
    }

    #[test]
    fn test_dos_codepages() {
        assert_eq!(encode_text(CharacterSet::Pc437Usa, "┌─┐").unwrap(), vec![0xDA, 0xC4, 0xBF]);
        assert_eq!(encode_text(CharacterSet::Pc858Euro, "€").unwrap(), vec![0xD5]);
        assert_eq!(encode_text(CharacterSet::Pc866Cyrillic2, "Ж").unwrap(), vec![0x86]);
        assert_eq!(encode_text(CharacterSet::Pc851Greek, "ã").unwrap(), vec![0x84]);
    }

    #[test]
    fn test_windows_and_iso_codepages() {
        assert_eq!(encode_text(CharacterSet::Wpc1252, "€").unwrap(), vec![0x80]);
        assert_eq!(encode_text(CharacterSet::Wpc1251Cyrillic, "Ж").unwrap(), vec![0xC6]);
        assert_eq!(encode_text(CharacterSet::Iso8859_7Greek, "Ω").unwrap(), vec![0xD9]);
        assert_eq!(encode_text(CharacterSet::Iso8859_15Latin9, "€").unwrap(), vec![0xA4]);
    }

    #[test]
    fn test_east_asian_encodings() {
        assert_eq!(encode_text(CharacterSet::Japan, "あ").unwrap(), vec![0xA4, 0xA2]);
        assert_eq!(encode_text(CharacterSet::Korea, "가").unwrap(), vec![0xB0, 0xA1]);
        assert_eq!(encode_text(CharacterSet::China, "中").unwrap(), vec![0xD6, 0xD0]);
        assert_eq!(encode_text(CharacterSet::HkTw, "中").unwrap(), vec![0xA4, 0xA4]);
    }

    #[test]
    fn test_euc_cn_stays_in_gb2312_range() {
        assert_eq!(encode_text(CharacterSet::China, "中国").unwrap(), vec![0xD6, 0xD0, 0xB9, 0xFA]);
        assert!(matches!(
            encode_text(CharacterSet::China, "€"),
            Err(EscPosError::Unencodable { encoding: "EUC-CN", character: '€' })
        ));
    }

    #[test]
    fn test_big5_rejects_hkscs_only_characters() {
        assert!(matches!(
            encode_text(CharacterSet::HkTw, "𨋢"),
            Err(EscPosError::Unencodable { encoding: "Big5-HKSCS", character: '𨋢' })
        ));
    }

    #[test]
    fn test_cp1125_patches_cp866() {
        assert_eq!(encode_text(CharacterSet::Pc1125Ukrainian, "Ґ").unwrap(), vec![0xF2]);
        assert_eq!(encode_text(CharacterSet::Pc1125Ukrainian, "ї").unwrap(), vec![0xF9]);
        assert_eq!(encode_text(CharacterSet::Pc1125Ukrainian, "Ж").unwrap(), vec![0x86]);
        // Ў sits at 0xF6 in CP866, which CP1125 gives to І
        assert!(encode_text(CharacterSet::Pc1125Ukrainian, "Ў").is_err());
    }

    #[test]
    fn test_rk1048_patches_windows_1251() {
        assert_eq!(encode_text(CharacterSet::Kz1048Kazakhstan, "Қ").unwrap(), vec![0x8D]);
        assert_eq!(encode_text(CharacterSet::Kz1048Kazakhstan, "Ж").unwrap(), vec![0xC6]);
        assert!(encode_text(CharacterSet::Kz1048Kazakhstan, "Ќ").is_err());
    }

    #[test]
    fn test_unencodable_reports_character() {
        match encode_text(CharacterSet::Pc437Usa, "ok ★") {
            Err(EscPosError::Unencodable { encoding, character }) => {
                assert_eq!(encoding, "CP437");
                assert_eq!(character, '★');
            }
            other => panic!("expected Unencodable, got {other:?}"),
        }
        assert!(matches!(
            encode_text(CharacterSet::Wpc1252, "日本"),
            Err(EscPosError::Unencodable { character: '日', .. })
        ));
    }
}
