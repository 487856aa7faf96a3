//! Option pickers: closed option sets with a current value and a setter.
//!
//! [`Picker`] is one selector (the palette, the width list, ...).
//! [`StyleOptions`] groups the four pickers and produces the
//! [`StrokeStyle`] snapshot consulted at gesture start. [`OptionsPanel`] is
//! the only record of which picker's option row is open; the host animates
//! the transitions and reports back when a close has finished.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::color::{ColorError, Rgba};
use crate::consts::{DEFAULT_COLOR, DEFAULT_EFFECT, DEFAULT_OPACITY, DEFAULT_WIDTH, OPACITIES, PALETTE, STROKE_WIDTHS};
use crate::style::{Effect, StrokeStyle};

/// Which style option a picker controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    Color,
    Width,
    Opacity,
    Effect,
}

impl OptionKind {
    /// Every option kind, in toolbar order.
    pub const ALL: [OptionKind; 4] = [Self::Color, Self::Width, Self::Opacity, Self::Effect];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Width => "width",
            Self::Opacity => "opacity",
            Self::Effect => "effect",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the [`StyleOptions`] setters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StyleError {
    /// The color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorError),
    /// The value is well-formed but not one of the picker's options.
    #[error("{option} value {value} is not offered")]
    NotOffered { option: OptionKind, value: String },
}

/// Error returned by [`Picker::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PickerError {
    #[error("option list is empty")]
    Empty,
    #[error("selected value is not among the options")]
    NotOffered,
}

/// A selector over a fixed, non-empty list of options.
#[derive(Debug, Clone, PartialEq)]
pub struct Picker<T> {
    items: Vec<T>,
    selected: T,
}

impl<T: Clone + PartialEq> Picker<T> {
    /// Create a picker with `selected` as the current option.
    ///
    /// # Errors
    ///
    /// [`PickerError::Empty`] if `items` is empty, [`PickerError::NotOffered`]
    /// if `selected` is not one of `items`.
    pub fn new(items: Vec<T>, selected: T) -> Result<Self, PickerError> {
        if items.is_empty() {
            return Err(PickerError::Empty);
        }
        if !items.contains(&selected) {
            return Err(PickerError::NotOffered);
        }
        Ok(Self { items, selected })
    }

    /// Built-in option tables, which always contain their default.
    fn builtin(items: &[T], selected: T) -> Self {
        debug_assert!(items.contains(&selected));
        Self { items: items.to_vec(), selected }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn selected(&self) -> &T {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, value: &T) -> bool {
        self.selected == *value
    }

    /// Select `value` if it is offered.
    pub fn select(&mut self, value: &T) -> bool {
        if !self.items.contains(value) {
            return false;
        }
        self.selected = value.clone();
        true
    }

    /// Select the option at `index`.
    pub fn select_index(&mut self, index: usize) -> bool {
        let Some(value) = self.items.get(index) else {
            return false;
        };
        self.selected = value.clone();
        true
    }
}

/// The four style pickers and the current style they describe.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleOptions {
    pub color: Picker<Rgba>,
    pub width: Picker<f64>,
    pub opacity: Picker<f64>,
    pub effect: Picker<Effect>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            color: Picker::builtin(&PALETTE, DEFAULT_COLOR),
            width: Picker::builtin(&STROKE_WIDTHS, DEFAULT_WIDTH),
            opacity: Picker::builtin(&OPACITIES, DEFAULT_OPACITY),
            effect: Picker::builtin(&Effect::ALL, DEFAULT_EFFECT),
        }
    }
}

impl StyleOptions {
    /// Snapshot of the currently selected values.
    #[must_use]
    pub fn current(&self) -> StrokeStyle {
        StrokeStyle::new(
            *self.color.selected(),
            *self.width.selected(),
            *self.opacity.selected(),
            *self.effect.selected(),
        )
    }

    /// Parse `value` and select it in the color picker.
    ///
    /// # Errors
    ///
    /// [`StyleError::InvalidColor`] if `value` is not a color,
    /// [`StyleError::NotOffered`] if it is not in the palette.
    pub fn select_color(&mut self, value: &str) -> Result<Rgba, StyleError> {
        let color = Rgba::parse(value)?;
        if !self.color.select(&color) {
            return Err(rejected(OptionKind::Color, color));
        }
        debug!(%color, "color selected");
        Ok(color)
    }

    /// # Errors
    ///
    /// [`StyleError::NotOffered`] if `width` is not in the width list.
    pub fn select_width(&mut self, width: f64) -> Result<(), StyleError> {
        if !self.width.select(&width) {
            return Err(rejected(OptionKind::Width, width));
        }
        debug!(width, "width selected");
        Ok(())
    }

    /// # Errors
    ///
    /// [`StyleError::NotOffered`] if `opacity` is not in the opacity list.
    pub fn select_opacity(&mut self, opacity: f64) -> Result<(), StyleError> {
        if !self.opacity.select(&opacity) {
            return Err(rejected(OptionKind::Opacity, opacity));
        }
        debug!(opacity, "opacity selected");
        Ok(())
    }

    /// # Errors
    ///
    /// [`StyleError::NotOffered`] if `effect` was left out of the configured
    /// effects.
    pub fn select_effect(&mut self, effect: Effect) -> Result<(), StyleError> {
        if !self.effect.select(&effect) {
            return Err(rejected(OptionKind::Effect, effect));
        }
        debug!(%effect, "effect selected");
        Ok(())
    }
}

fn rejected(option: OptionKind, value: impl fmt::Display) -> StyleError {
    let value = value.to_string();
    warn!(%option, %value, "rejected value outside option set");
    StyleError::NotOffered { option, value }
}

/// What the host should animate after an [`OptionsPanel`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTransition {
    /// Nothing to animate.
    None,
    /// Show the option row for this kind.
    Opening(OptionKind),
    /// Hide the option row for this kind, then call
    /// [`OptionsPanel::transition_finished`].
    Closing(OptionKind),
}

/// Which option row is open above the toolbar.
///
/// Only one row is open at a time. Switching rows closes the current one
/// first and opens the requested one once the host reports the close is
/// done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionsPanel {
    active: Option<OptionKind>,
    pending: Option<OptionKind>,
    closing: bool,
}

impl OptionsPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The row currently shown (including one that is closing).
    #[must_use]
    pub fn active(&self) -> Option<OptionKind> {
        self.active
    }

    /// Whether `kind` is open and not on its way out.
    #[must_use]
    pub fn is_open(&self, kind: OptionKind) -> bool {
        !self.closing && self.active == Some(kind)
    }

    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// The toolbar button for `kind` was pressed.
    pub fn press(&mut self, kind: OptionKind) -> PanelTransition {
        if self.closing {
            // The latest press wins once the close finishes.
            self.pending = (self.active != Some(kind)).then_some(kind);
            return PanelTransition::None;
        }
        match self.active {
            None => {
                self.active = Some(kind);
                PanelTransition::Opening(kind)
            }
            Some(open) => {
                self.closing = true;
                self.pending = (open != kind).then_some(kind);
                PanelTransition::Closing(open)
            }
        }
    }

    /// Close whatever is open without opening anything else.
    pub fn dismiss(&mut self) -> PanelTransition {
        self.pending = None;
        match self.active {
            Some(open) if !self.closing => {
                self.closing = true;
                PanelTransition::Closing(open)
            }
            _ => PanelTransition::None,
        }
    }

    /// The host finished animating a close.
    pub fn transition_finished(&mut self) -> PanelTransition {
        if !self.closing {
            return PanelTransition::None;
        }
        self.closing = false;
        self.active = self.pending.take();
        match self.active {
            Some(next) => PanelTransition::Opening(next),
            None => PanelTransition::None,
        }
    }
}
