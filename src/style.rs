//! Stroke styling: the visual effect enumeration and the style snapshot a
//! stroke carries for its whole life.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::consts::{DEFAULT_COLOR, DEFAULT_EFFECT, DEFAULT_OPACITY, DEFAULT_WIDTH};

/// Visual effect applied when a stroke is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// A single solid pass.
    #[default]
    #[serde(alias = "basic")]
    Plain,
    /// Blurred halo layers under a solid core.
    Glow,
    /// Dash pattern with dash and gap equal to the stroke width.
    #[serde(alias = "dash")]
    Dashed,
}

impl Effect {
    /// Every effect, in picker order.
    pub const ALL: [Effect; 3] = [Effect::Plain, Effect::Glow, Effect::Dashed];

    /// Lowercase name as used in config files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Glow => "glow",
            Self::Dashed => "dashed",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The style values a stroke is drawn with.
///
/// Copied by value into a stroke at gesture start; later picker changes
/// never reach strokes that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Rgba,
    /// Width in style units (scaled to pixels when painting).
    pub width: f64,
    pub opacity: f64,
    pub effect: Effect,
}

impl StrokeStyle {
    #[must_use]
    pub fn new(color: Rgba, width: f64, opacity: f64, effect: Effect) -> Self {
        Self { color, width, opacity, effect }
    }

    #[must_use]
    pub fn with_color(self, color: Rgba) -> Self {
        Self { color, ..self }
    }

    #[must_use]
    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }

    #[must_use]
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    #[must_use]
    pub fn with_effect(self, effect: Effect) -> Self {
        Self { effect, ..self }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            width: DEFAULT_WIDTH,
            opacity: DEFAULT_OPACITY,
            effect: DEFAULT_EFFECT,
        }
    }
}
