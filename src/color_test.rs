#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{BLACK, PALETTE, RED};

// =============================================================
// Hex parsing
// =============================================================

#[test]
fn parse_six_digit_hex() {
    assert_eq!(Rgba::parse("#e74c3c").unwrap(), RED);
}

#[test]
fn parse_hex_is_case_insensitive() {
    assert_eq!(Rgba::parse("#E74C3C").unwrap(), Rgba::parse("#e74c3c").unwrap());
}

#[test]
fn parse_three_digit_hex_expands_nibbles() {
    assert_eq!(Rgba::parse("#f80").unwrap(), Rgba::rgb(0xff, 0x88, 0x00));
}

#[test]
fn parse_four_digit_hex_has_alpha() {
    assert_eq!(Rgba::parse("#0008").unwrap(), Rgba { r: 0, g: 0, b: 0, a: 0x88 });
}

#[test]
fn parse_eight_digit_hex_has_alpha() {
    assert_eq!(
        Rgba::parse("#00000000").unwrap(),
        Rgba { r: 0, g: 0, b: 0, a: 0 }
    );
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(Rgba::parse("  #2c3e50 ").unwrap(), BLACK);
}

#[test]
fn palette_hex_forms_parse_back() {
    for c in PALETTE {
        assert_eq!(Rgba::parse(&c.to_string()).unwrap(), c);
    }
}

#[test]
fn parse_hex_wrong_length_fails() {
    assert_eq!(
        Rgba::parse("#12345").unwrap_err(),
        ColorError::InvalidHex("#12345".into())
    );
}

#[test]
fn parse_hex_non_digit_fails() {
    assert!(matches!(Rgba::parse("#zzzzzz"), Err(ColorError::InvalidHex(_))));
}

#[test]
fn parse_bare_hash_fails() {
    assert!(matches!(Rgba::parse("#"), Err(ColorError::InvalidHex(_))));
}

// =============================================================
// Functional notation
// =============================================================

#[test]
fn parse_rgb_function() {
    assert_eq!(Rgba::parse("rgb(52, 152, 219)").unwrap(), Rgba::rgb(52, 152, 219));
}

#[test]
fn parse_rgba_function() {
    let c = Rgba::parse("RGBA(0, 0, 0, 0.5)").unwrap();
    assert_eq!(c, Rgba { r: 0, g: 0, b: 0, a: 128 });
}

#[test]
fn parse_rgb_channel_out_of_range_fails() {
    assert!(matches!(
        Rgba::parse("rgb(256, 0, 0)"),
        Err(ColorError::InvalidFunction(_))
    ));
}

#[test]
fn parse_rgba_alpha_out_of_range_fails() {
    assert!(matches!(
        Rgba::parse("rgba(0, 0, 0, 1.5)"),
        Err(ColorError::InvalidFunction(_))
    ));
}

#[test]
fn parse_rgb_wrong_arity_fails() {
    assert!(matches!(
        Rgba::parse("rgb(1, 2)"),
        Err(ColorError::InvalidFunction(_))
    ));
    assert!(matches!(
        Rgba::parse("rgb(1, 2, 3, 0.5)"),
        Err(ColorError::InvalidFunction(_))
    ));
}

#[test]
fn parse_rgb_missing_paren_fails() {
    assert!(matches!(
        Rgba::parse("rgb(1, 2, 3"),
        Err(ColorError::InvalidFunction(_))
    ));
}

// =============================================================
// Names and empty input
// =============================================================

#[test]
fn parse_named_colors() {
    assert_eq!(Rgba::parse("black").unwrap(), Rgba::rgb(0, 0, 0));
    assert_eq!(Rgba::parse("White").unwrap(), Rgba::rgb(255, 255, 255));
    assert_eq!(Rgba::parse("transparent").unwrap().a, 0);
}

#[test]
fn parse_unknown_name_fails() {
    assert_eq!(
        Rgba::parse("chartreuse").unwrap_err(),
        ColorError::UnknownName("chartreuse".into())
    );
}

#[test]
fn parse_empty_fails() {
    assert_eq!(Rgba::parse("").unwrap_err(), ColorError::Empty);
    assert_eq!(Rgba::parse("   ").unwrap_err(), ColorError::Empty);
}

#[test]
fn from_str_matches_parse() {
    let c: Rgba = "#3498db".parse().unwrap();
    assert_eq!(c, Rgba::rgb(0x34, 0x98, 0xdb));
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn display_opaque_is_six_digit_hex() {
    assert_eq!(Rgba::rgb(0xe7, 0x4c, 0x3c).to_string(), "#e74c3c");
}

#[test]
fn display_translucent_includes_alpha() {
    assert_eq!(Rgba { r: 1, g: 2, b: 3, a: 0x80 }.to_string(), "#01020380");
}

#[test]
fn css_form_uses_fractional_alpha() {
    assert_eq!(Rgba::rgb(1, 2, 3).to_css(), "rgba(1, 2, 3, 1)");
    assert_eq!(Rgba { r: 0, g: 0, b: 0, a: 128 }.to_css(), "rgba(0, 0, 0, 0.502)");
}

#[test]
fn rgb_array_drops_alpha() {
    assert_eq!(Rgba { r: 9, g: 8, b: 7, a: 6 }.to_rgb_array(), [9, 8, 7]);
}

#[test]
fn alpha_fraction() {
    assert_eq!(Rgba::rgb(0, 0, 0).alpha(), 1.0);
    assert_eq!(Rgba { r: 0, g: 0, b: 0, a: 0 }.alpha(), 0.0);
}

// =============================================================
// Serde
// =============================================================

#[test]
fn serializes_as_hex_string() {
    let json = serde_json::to_string(&Rgba::rgb(0x2c, 0x3e, 0x50)).unwrap();
    assert_eq!(json, "\"#2c3e50\"");
}

#[test]
fn deserializes_any_supported_notation() {
    let c: Rgba = serde_json::from_str("\"rgb(44, 62, 80)\"").unwrap();
    assert_eq!(c, Rgba::rgb(0x2c, 0x3e, 0x50));
}

#[test]
fn deserialize_invalid_color_is_an_error() {
    let result: Result<Rgba, _> = serde_json::from_str("\"not-a-color\"");
    assert!(result.is_err());
}
