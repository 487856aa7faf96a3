//! Shared constants for the drawing crate.

use crate::color::Rgba;
use crate::style::Effect;

// ── Palette ─────────────────────────────────────────────────────

pub const BLUE: Rgba = Rgba::rgb(0x34, 0x98, 0xdb);
pub const GREEN: Rgba = Rgba::rgb(0x2e, 0xcc, 0x71);
pub const YELLOW: Rgba = Rgba::rgb(0xf1, 0xc4, 0x0f);
pub const ORANGE: Rgba = Rgba::rgb(0xe6, 0x7e, 0x22);
pub const RED: Rgba = Rgba::rgb(0xe7, 0x4c, 0x3c);
pub const PURPLE: Rgba = Rgba::rgb(0x9b, 0x59, 0xb6);
pub const BLACK: Rgba = Rgba::rgb(0x2c, 0x3e, 0x50);
pub const GREY: Rgba = Rgba::rgb(0x95, 0xa5, 0xa6);

/// Colors offered by the color picker, in display order.
pub const PALETTE: [Rgba; 8] = [BLUE, GREEN, YELLOW, ORANGE, RED, PURPLE, BLACK, GREY];

// ── Option sets ─────────────────────────────────────────────────

/// Stroke widths offered by the width picker, in style units.
pub const STROKE_WIDTHS: [f64; 7] = [0.25, 0.5, 0.75, 1.0, 1.5, 1.75, 2.0];

/// Opacities offered by the opacity picker.
pub const OPACITIES: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

// ── Defaults ────────────────────────────────────────────────────

pub const DEFAULT_COLOR: Rgba = BLACK;
pub const DEFAULT_WIDTH: f64 = 1.0;
pub const DEFAULT_OPACITY: f64 = 1.0;
pub const DEFAULT_EFFECT: Effect = Effect::Plain;

// ── Paint ───────────────────────────────────────────────────────

/// Pixels per style width unit.
pub const WIDTH_SCALE: f64 = 10.0;

/// Glow outer layer: width factor and alpha factor.
pub const GLOW_OUTER_WIDTH: f64 = 4.0;
pub const GLOW_OUTER_ALPHA: f64 = 0.3;

/// Glow middle layer: width factor and alpha factor.
pub const GLOW_MIDDLE_WIDTH: f64 = 2.0;
pub const GLOW_MIDDLE_ALPHA: f64 = 0.5;
