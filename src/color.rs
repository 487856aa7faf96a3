//! Color values: parsing picker input into RGBA and formatting it for the
//! renderer.
//!
//! Pickers hand over color strings (`"#e74c3c"`, `"rgba(0, 0, 0, 0.5)"`,
//! `"black"`). A string that does not parse is a programming error in the
//! picker configuration, so conversion fails loudly with a [`ColorError`]
//! instead of falling back to some default color.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a color string cannot be converted to [`Rgba`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// The input was empty or whitespace.
    #[error("empty color value")]
    Empty,
    /// A `#` color with the wrong length or non-hex digits.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    /// A malformed `rgb(...)` / `rgba(...)` expression.
    #[error("invalid color function: {0}")]
    InvalidFunction(String),
    /// A bare word that is not a supported color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),
}

/// An 8-bit-per-channel color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Named colors understood by [`Rgba::parse`].
const NAMED: [(&str, Rgba); 9] = [
    ("black", Rgba::rgb(0, 0, 0)),
    ("white", Rgba::rgb(255, 255, 255)),
    ("red", Rgba::rgb(255, 0, 0)),
    ("green", Rgba::rgb(0, 128, 0)),
    ("blue", Rgba::rgb(0, 0, 255)),
    ("yellow", Rgba::rgb(255, 255, 0)),
    ("gray", Rgba::rgb(128, 128, 128)),
    ("grey", Rgba::rgb(128, 128, 128)),
    ("transparent", Rgba { r: 0, g: 0, b: 0, a: 0 }),
];

impl Rgba {
    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse a color string.
    ///
    /// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
    /// `rgba(r, g, b, a)` with `a` in `[0, 1]`, and a few CSS names.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] describing why the input is not a color.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorError::Empty);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorError::InvalidHex(s.to_owned()));
        }
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("rgb") {
            return parse_function(&lower);
        }
        NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, color)| *color)
            .ok_or_else(|| ColorError::UnknownName(s.to_owned()))
    }

    /// Alpha as a fraction in `[0, 1]`, rounded to three decimals.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        (f64::from(self.a) / 255.0 * 1000.0).round() / 1000.0
    }

    /// The color channels without alpha, as used by opacity swatches.
    #[must_use]
    pub fn to_rgb_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// CSS `rgba(...)` form for the Canvas2D API.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha())
    }
}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let digits: Vec<u8> = hex.bytes().map(hex_digit).collect::<Option<_>>()?;
    match digits.as_slice() {
        [r, g, b] => Some(Rgba::rgb(r * 17, g * 17, b * 17)),
        [r, g, b, a] => Some(Rgba { r: r * 17, g: g * 17, b: b * 17, a: a * 17 }),
        [r1, r0, g1, g0, b1, b0] => Some(Rgba::rgb(r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0)),
        [r1, r0, g1, g0, b1, b0, a1, a0] => Some(Rgba {
            r: r1 * 16 + r0,
            g: g1 * 16 + g0,
            b: b1 * 16 + b0,
            a: a1 * 16 + a0,
        }),
        _ => None,
    }
}

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`. `s` must already be lowercase.
fn parse_function(s: &str) -> Result<Rgba, ColorError> {
    let invalid = || ColorError::InvalidFunction(s.to_owned());
    let (name, rest) = s.split_once('(').ok_or_else(invalid)?;
    let args = rest.strip_suffix(')').ok_or_else(invalid)?;
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |p: &&str| p.parse::<u8>().map_err(|_| invalid());
    match (name.trim(), parts.as_slice()) {
        ("rgb", [r, g, b]) => Ok(Rgba::rgb(channel(r)?, channel(g)?, channel(b)?)),
        ("rgba", [r, g, b, a]) => Ok(Rgba {
            r: channel(r)?,
            g: channel(g)?,
            b: channel(b)?,
            a: alpha_byte(a).ok_or_else(invalid)?,
        }),
        _ => Err(invalid()),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn alpha_byte(s: &str) -> Option<u8> {
    match s.parse::<f64>() {
        Ok(a) if (0.0..=1.0).contains(&a) => Some((a * 255.0).round() as u8),
        _ => None,
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}
