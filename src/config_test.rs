#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{BLACK, RED};
use crate::style::StrokeStyle;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_is_valid() {
    assert!(DrawingConfig::default().validate().is_ok());
}

#[test]
fn default_config_builds_default_options() {
    let options = DrawingConfig::default().style_options().unwrap();
    assert_eq!(options, StyleOptions::default());
    assert_eq!(options.current(), StrokeStyle::default());
}

#[test]
fn default_palette_is_hex_strings() {
    let config = DrawingConfig::default();
    assert_eq!(config.palette.len(), 8);
    assert_eq!(config.palette[0], "#3498db");
    assert_eq!(config.default_color, BLACK.to_string());
    assert_eq!(config.width_scale, 10.0);
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_empty_object_uses_defaults() {
    let config = DrawingConfig::load("{}").unwrap();
    assert_eq!(config, DrawingConfig::default());
}

#[test]
fn load_partial_override() {
    let config = DrawingConfig::load(
        r##"{
            "palette": ["#e74c3c", "black"],
            "default_color": "#e74c3c",
            "effects": ["basic", "dash"],
            "width_scale": 4
        }"##,
    )
    .unwrap();
    assert_eq!(config.effects, vec![Effect::Plain, Effect::Dashed]);
    assert_eq!(config.width_scale, 4.0);

    let options = config.style_options().unwrap();
    assert_eq!(*options.color.selected(), RED);
    assert_eq!(options.color.items().len(), 2);
    assert_eq!(options.effect.items(), &[Effect::Plain, Effect::Dashed]);
}

#[test]
fn load_malformed_json_fails() {
    let err = DrawingConfig::load("{ palette: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_wrong_type_fails() {
    let err = DrawingConfig::load(r#"{ "widths": "thin" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_unknown_effect_fails() {
    let err = DrawingConfig::load(r#"{ "effects": ["sparkle"] }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn invalid_palette_color_is_reported() {
    let config = DrawingConfig {
        palette: vec!["#3498db".into(), "#nope".into()],
        ..DrawingConfig::default()
    };
    match config.validate().unwrap_err() {
        ConfigError::InvalidColor { value, source } => {
            assert_eq!(value, "#nope");
            assert_eq!(source, ColorError::InvalidHex("#nope".into()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_default_color_is_reported() {
    let config = DrawingConfig { default_color: "mauve".into(), ..DrawingConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidColor { .. })));
}

#[test]
fn empty_option_lists_are_rejected() {
    let config = DrawingConfig { palette: vec![], ..DrawingConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::EmptyOptions(OptionKind::Color))));

    let config = DrawingConfig { effects: vec![], ..DrawingConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::EmptyOptions(OptionKind::Effect))));
}

#[test]
fn default_must_be_offered() {
    let config = DrawingConfig { default_width: 3.0, ..DrawingConfig::default() };
    match config.validate().unwrap_err() {
        ConfigError::DefaultNotOffered { option, value } => {
            assert_eq!(option, OptionKind::Width);
            assert_eq!(value, "3");
        }
        other => panic!("unexpected error: {other}"),
    }

    let config = DrawingConfig { default_color: "#ffffff".into(), ..DrawingConfig::default() };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::DefaultNotOffered { option: OptionKind::Color, .. })
    ));

    let config = DrawingConfig {
        effects: vec![Effect::Glow],
        ..DrawingConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::DefaultNotOffered { option: OptionKind::Effect, .. })
    ));
}

#[test]
fn widths_must_be_positive() {
    let config = DrawingConfig { widths: vec![1.0, 0.0], ..DrawingConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::NonPositiveWidth(w)) if w == 0.0));

    let config = DrawingConfig { widths: vec![1.0, f64::NAN], ..DrawingConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::NonPositiveWidth(_))));
}

#[test]
fn widths_must_be_finite() {
    let config = DrawingConfig { widths: vec![1.0, f64::INFINITY], ..DrawingConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::NonPositiveWidth(w)) if w.is_infinite()));
}

#[test]
fn opacities_must_be_fractions() {
    let config = DrawingConfig { opacities: vec![1.0, 1.5], ..DrawingConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::OpacityOutOfRange(o)) if o == 1.5));

    let config = DrawingConfig { opacities: vec![0.0, 1.0], ..DrawingConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::OpacityOutOfRange(o)) if o == 0.0));
}

#[test]
fn width_scale_must_be_positive() {
    let config = DrawingConfig { width_scale: 0.0, ..DrawingConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::NonPositiveScale(_))));

    let config = DrawingConfig { width_scale: f64::INFINITY, ..DrawingConfig::default() };
    assert!(matches!(config.validate(), Err(ConfigError::NonPositiveScale(_))));
}

#[test]
fn error_messages() {
    assert_eq!(
        ConfigError::EmptyOptions(OptionKind::Opacity).to_string(),
        "no opacity options configured"
    );
    assert_eq!(
        ConfigError::NonPositiveWidth(-1.0).to_string(),
        "stroke width must be positive, got -1"
    );
}

#[test]
fn config_serde_roundtrip() {
    let config = DrawingConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(DrawingConfig::load(&json).unwrap(), config);
}
