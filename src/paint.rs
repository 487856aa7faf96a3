//! Paint plan: how a stroke's style becomes stroking passes.
//!
//! This is the backend-agnostic half of rendering. [`layers`] maps a stroke
//! to an ordered list of [`PaintLayer`]s (bottom first); [`crate::render`]
//! replays them on a Canvas2D context.

#[cfg(test)]
#[path = "paint_test.rs"]
mod paint_test;

use crate::color::Rgba;
use crate::consts::{GLOW_MIDDLE_ALPHA, GLOW_MIDDLE_WIDTH, GLOW_OUTER_ALPHA, GLOW_OUTER_WIDTH};
use crate::style::{Effect, StrokeStyle};

/// One stroking pass over a stroke's path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintLayer {
    pub color: Rgba,
    /// Line width in pixels.
    pub width: f64,
    /// Layer opacity in `[0, 1]`.
    pub alpha: f64,
    /// Blur radius in pixels.
    pub blur: Option<f64>,
    /// Dash and gap lengths in pixels.
    pub dash: Option<[f64; 2]>,
}

impl PaintLayer {
    fn solid(color: Rgba, width: f64, alpha: f64) -> Self {
        Self { color, width, alpha, blur: None, dash: None }
    }
}

/// Layers for `style`, bottom first. `width_scale` converts style width
/// units to pixels.
#[must_use]
pub fn layers(style: &StrokeStyle, width_scale: f64) -> Vec<PaintLayer> {
    let w = style.width * width_scale;
    let alpha = style.opacity.clamp(0.0, 1.0);
    let color = style.color;
    match style.effect {
        Effect::Plain => vec![PaintLayer::solid(color, w, alpha)],
        Effect::Glow => vec![
            PaintLayer {
                blur: Some(w),
                ..PaintLayer::solid(color, w * GLOW_OUTER_WIDTH, alpha * GLOW_OUTER_ALPHA)
            },
            PaintLayer {
                blur: Some(w / 2.0),
                ..PaintLayer::solid(color, w * GLOW_MIDDLE_WIDTH, alpha * GLOW_MIDDLE_ALPHA)
            },
            PaintLayer::solid(color, w, alpha),
        ],
        Effect::Dashed => vec![PaintLayer {
            dash: Some([w, w]),
            ..PaintLayer::solid(color, w, alpha)
        }],
    }
}
