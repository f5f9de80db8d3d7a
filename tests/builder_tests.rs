//! # Builder Tests
//!
//! End-to-end checks of the job builder: composed calls must serialize to
//! byte-exact ESC/POS payloads.
//!
//! ## Test Coverage
//!
//! - Full job sequences against hand-assembled expected bytes
//! - Buffer semantics (`data` idempotence, `clear`)
//! - Character set state carried between calls

use escpos_builder::protocol::charset::{self, CharacterSet};
use escpos_builder::protocol::commands::{CashDrawerPin, CutMode};
use escpos_builder::protocol::text::{Align, TextFont, TextSize, TextUnderline};
use escpos_builder::{EscPosError, Printer, PrinterConfig};
use pretty_assertions::assert_eq;

// ============================================================================
// JOB SEQUENCES
// ============================================================================

#[test]
fn test_minimal_job() {
    let mut printer = Printer::new(CharacterSet::Pc437Usa);
    printer
        .initialize()
        .set_character_set(CharacterSet::Pc437Usa)
        .text("A")
        .unwrap()
        .cut();

    assert_eq!(
        printer.data(),
        vec![0x1B, 0x40, 0x1B, 0x74, 0x00, 0x41, 0x1D, 0x56, 0x30]
    );
}

#[test]
fn test_styled_receipt() {
    let mut printer = Printer::default();
    printer
        .initialize()
        .set_align(Align::Center)
        .set_text_size(TextSize::Double, TextSize::Triple)
        .text_line("SHOP")
        .unwrap()
        .set_text_normal()
        .set_align(Align::Left)
        .set_text_font(TextFont::B)
        .set_text_underline(TextUnderline::OneDot)
        .text("x")
        .unwrap()
        .set_text_underline(TextUnderline::Off)
        .invert(true)
        .raw(&[0x07])
        .invert(false)
        .cashdraw(CashDrawerPin::Pin2)
        .cut_with(CutMode::FeedFull(3));

    let mut expected = vec![0x1B, 0x40];
    expected.extend([0x1B, 0x61, 0x01]);
    expected.extend([0x1D, 0x21, 18]);
    expected.extend(b"SHOP\n");
    expected.extend([0x1B, 0x21, 0x00]);
    expected.extend([0x1B, 0x61, 0x00]);
    expected.extend([0x1B, 0x4D, 0x01]);
    expected.extend([0x1B, 0x2D, 0x01]);
    expected.extend(b"x");
    expected.extend([0x1B, 0x2D, 0x00]);
    expected.extend([0x1D, 0x42, 0x01]);
    expected.extend([0x07]);
    expected.extend([0x1D, 0x42, 0x00]);
    expected.extend([0x1B, 0x70, 0x00, 0x19, 0x78]);
    expected.extend([0x1D, 0x56, 0x41, 0x03]);

    assert_eq!(printer.data(), expected);
}

#[test]
fn test_text_size_byte() {
    let mut printer = Printer::default();
    printer.set_text_size(TextSize::Double, TextSize::Triple);
    assert_eq!(printer.data(), vec![0x1D, 0x21, 18]);
}

#[test]
fn test_bold_and_cut() {
    let mut printer = Printer::default();
    printer.set_text_bold(true).set_text_bold(false).cut();
    assert_eq!(
        printer.data(),
        vec![0x1B, 0x45, 0x01, 0x1B, 0x45, 0x00, 0x1D, 0x56, 0x30]
    );
}

// ============================================================================
// CHARACTER SET STATE
// ============================================================================

#[test]
fn test_text_uses_constructor_character_set() {
    let mut printer = Printer::new(CharacterSet::Pc866Cyrillic2);
    printer.text("Ж").unwrap();
    assert_eq!(printer.data(), vec![0x86]);
}

#[test]
fn test_set_character_set_switches_encoding() {
    let mut printer = Printer::new(CharacterSet::Pc437Usa);
    printer
        .text("é")
        .unwrap()
        .set_character_set(CharacterSet::Japan)
        .text("あ")
        .unwrap();

    assert_eq!(
        printer.data(),
        vec![0x82, 0x1B, 0x52, 0x08, 0xA4, 0xA2]
    );
}

#[test]
fn test_international_select_matches_encoder() {
    for set in CharacterSet::ALL {
        let mut printer = Printer::default();
        printer.set_character_set(set);
        assert_eq!(printer.data(), charset::character_set(set), "{set}");
    }
}

#[test]
fn test_unencodable_text_is_an_error() {
    let mut printer = Printer::new(CharacterSet::Wpc1252);
    printer.initialize();
    let err = printer.text("Привет").unwrap_err();
    assert!(matches!(err, EscPosError::Unencodable { character: 'П', .. }));
    // Nothing partial was queued
    assert_eq!(printer.data(), vec![0x1B, 0x40]);
}

#[test]
fn test_clear_keeps_character_set() {
    let mut printer = Printer::new(CharacterSet::Pc437Usa);
    printer.set_character_set(CharacterSet::Wpc1252).text("€").unwrap();
    printer.clear();

    assert!(printer.data().is_empty());
    assert_eq!(printer.character_set(), CharacterSet::Wpc1252);

    printer.text("€").unwrap();
    assert_eq!(printer.data(), vec![0x80]);
}

// ============================================================================
// BUFFER SEMANTICS
// ============================================================================

#[test]
fn test_data_is_idempotent() {
    let mut printer = Printer::default();
    printer.initialize().text_line("hello").unwrap().cut();
    let first = printer.data();
    let second = printer.data();
    assert_eq!(first, second);
    assert_eq!(printer.len(), 4);
}

#[test]
fn test_empty_builder() {
    let printer = Printer::default();
    assert!(printer.is_empty());
    assert!(printer.data().is_empty());
}

#[test]
fn test_preset_config() {
    let mut printer = Printer::with_config(PrinterConfig::GENERIC_JAPAN);
    printer.text("日本").unwrap();
    assert_eq!(printer.data(), vec![0xC6, 0xFC, 0xCB, 0xDC]);
}

#[test]
fn test_command_names_in_order() {
    let mut printer = Printer::default();
    printer
        .initialize()
        .set_character_set(CharacterSet::Korea)
        .text("a")
        .unwrap()
        .new_line()
        .cut();

    let names: Vec<&str> = printer.commands().iter().map(|cmd| cmd.name).collect();
    assert_eq!(
        names,
        vec!["Initialize", "SetCharacterSet", "Text", "NewLine", "Cut"]
    );
}
