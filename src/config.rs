//! Drawing configuration: option sets, defaults, and the paint width scale.
//!
//! Every field has a default matching the built-in palette and option
//! lists, so a host may supply a partial JSON document. [`DrawingConfig::load`]
//! parses and validates in one step; [`DrawingConfig::style_options`] turns a
//! valid config into pickers.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{ColorError, Rgba};
use crate::consts::{DEFAULT_COLOR, DEFAULT_EFFECT, DEFAULT_OPACITY, DEFAULT_WIDTH, OPACITIES, PALETTE, STROKE_WIDTHS, WIDTH_SCALE};
use crate::picker::{OptionKind, Picker, PickerError, StyleOptions};
use crate::style::Effect;

/// Error returned when a configuration cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON for [`DrawingConfig`].
    #[error("failed to parse drawing config: {0}")]
    Parse(#[from] serde_json::Error),
    /// An option list is empty.
    #[error("no {0} options configured")]
    EmptyOptions(OptionKind),
    /// A palette entry or the default color is not a color.
    #[error("invalid color {value:?}: {source}")]
    InvalidColor { value: String, source: ColorError },
    /// A default value is missing from its option list.
    #[error("default {option} {value} is not among the configured options")]
    DefaultNotOffered { option: OptionKind, value: String },
    /// Widths must be positive and finite.
    #[error("stroke width must be positive, got {0}")]
    NonPositiveWidth(f64),
    /// Opacities must be in `(0, 1]`.
    #[error("opacity must be in (0, 1], got {0}")]
    OpacityOutOfRange(f64),
    /// The width scale must be positive and finite.
    #[error("width scale must be positive, got {0}")]
    NonPositiveScale(f64),
}

/// Configurable option sets and defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingConfig {
    /// Color strings offered by the color picker.
    pub palette: Vec<String>,
    /// Stroke widths in style units.
    pub widths: Vec<f64>,
    pub opacities: Vec<f64>,
    pub effects: Vec<Effect>,
    pub default_color: String,
    pub default_width: f64,
    pub default_opacity: f64,
    pub default_effect: Effect,
    /// Pixels per style width unit.
    pub width_scale: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            palette: PALETTE.iter().map(ToString::to_string).collect(),
            widths: STROKE_WIDTHS.to_vec(),
            opacities: OPACITIES.to_vec(),
            effects: Effect::ALL.to_vec(),
            default_color: DEFAULT_COLOR.to_string(),
            default_width: DEFAULT_WIDTH,
            default_opacity: DEFAULT_OPACITY,
            default_effect: DEFAULT_EFFECT,
            width_scale: WIDTH_SCALE,
        }
    }
}

impl DrawingConfig {
    /// Parse a JSON document and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and any error from
    /// [`DrawingConfig::validate`].
    pub fn load(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        debug!(
            colors = config.palette.len(),
            widths = config.widths.len(),
            opacities = config.opacities.len(),
            effects = config.effects.len(),
            "drawing config loaded"
        );
        Ok(config)
    }

    /// Check option lists, defaults, and the width scale.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.style_options().map(|_| ())
    }

    /// Build the pickers described by this config.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the config is invalid.
    pub fn style_options(&self) -> Result<StyleOptions, ConfigError> {
        if !positive(self.width_scale) {
            return Err(ConfigError::NonPositiveScale(self.width_scale));
        }

        let palette = self
            .palette
            .iter()
            .map(|c| parse_color(c))
            .collect::<Result<Vec<_>, _>>()?;
        let default_color = parse_color(&self.default_color)?;

        if let Some(&w) = self.widths.iter().find(|w| !positive(**w)) {
            return Err(ConfigError::NonPositiveWidth(w));
        }
        if let Some(&o) = self.opacities.iter().find(|o| !positive(**o) || **o > 1.0) {
            return Err(ConfigError::OpacityOutOfRange(o));
        }

        Ok(StyleOptions {
            color: picker(OptionKind::Color, palette, default_color)?,
            width: picker(OptionKind::Width, self.widths.clone(), self.default_width)?,
            opacity: picker(OptionKind::Opacity, self.opacities.clone(), self.default_opacity)?,
            effect: picker(OptionKind::Effect, self.effects.clone(), self.default_effect)?,
        })
    }
}

fn parse_color(value: &str) -> Result<Rgba, ConfigError> {
    Rgba::parse(value).map_err(|source| ConfigError::InvalidColor { value: value.to_owned(), source })
}

fn picker<T>(option: OptionKind, items: Vec<T>, default: T) -> Result<Picker<T>, ConfigError>
where
    T: Clone + PartialEq + fmt::Display,
{
    let value = default.to_string();
    Picker::new(items, default).map_err(|err| match err {
        PickerError::Empty => ConfigError::EmptyOptions(option),
        PickerError::NotOffered => ConfigError::DefaultNotOffered { option, value },
    })
}

/// `false` for zero, negatives, infinities, and NaN.
fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
