use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::capture::{Capture, Release};
use crate::config::{ConfigError, DrawingConfig};
use crate::consts::WIDTH_SCALE;
use crate::geom::{CanvasOffset, Point};
use crate::history::{Change, History};
use crate::picker::{OptionKind, OptionsPanel, PanelTransition, StyleError, StyleOptions};
use crate::render;
use crate::stroke::{Stroke, StrokeId};
use crate::style::{Effect, StrokeStyle};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    StrokeStarted(StrokeId),
    StrokeCommitted(Rc<Stroke>),
    StrokeDiscarded(StrokeId),
    ControlsChanged { can_undo: bool, can_redo: bool },
    StyleChanged(StrokeStyle),
    RenderNeeded,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub history: History,
    pub capture: Capture,
    pub options: StyleOptions,
    pub panel: OptionsPanel,
    pub width_scale: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    /// Last `(can_undo, can_redo)` reported to the host.
    controls: (bool, bool),
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            history: History::new(),
            capture: Capture::new(),
            options: StyleOptions::default(),
            panel: OptionsPanel::new(),
            width_scale: WIDTH_SCALE,
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            controls: (false, false),
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine whose pickers and width scale come from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` does not validate.
    pub fn with_config(config: &DrawingConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            options: config.style_options()?,
            width_scale: config.width_scale,
            ..Self::default()
        })
    }

    // --- Layout ---

    /// Record where the canvas sits on screen.
    pub fn set_canvas_offset(&mut self, offset: CanvasOffset) {
        self.capture.set_offset(offset);
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
        vec![Action::RenderNeeded]
    }

    // --- Gestures ---

    /// Touch-down: open a stroke with the currently selected style.
    pub fn on_gesture_start(&mut self) -> Vec<Action> {
        let style = self.options.current();
        let previous = self.capture.begin(style);
        let mut actions = self.absorb(previous);
        self.history.discard_redo();
        if let Some(stroke) = self.capture.current() {
            actions.push(Action::StrokeStarted(stroke.id()));
        }
        self.sync_controls(&mut actions);
        actions
    }

    /// Drag: extend the open stroke with a screen-space position.
    pub fn on_gesture_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.capture.move_to(screen_pt) {
            actions.push(Action::RenderNeeded);
        }
        self.sync_controls(&mut actions);
        actions
    }

    /// Release: commit the open stroke, or drop it if it is a bare tap.
    pub fn on_gesture_end(&mut self) -> Vec<Action> {
        let release = self.capture.end();
        let mut actions = self.absorb(release);
        self.sync_controls(&mut actions);
        actions
    }

    // --- History controls ---

    pub fn undo(&mut self) -> Vec<Action> {
        let mut actions = self.release_open_gesture();
        if self.history.undo().is_some() {
            actions.push(Action::RenderNeeded);
        }
        self.sync_controls(&mut actions);
        actions
    }

    pub fn redo(&mut self) -> Vec<Action> {
        let mut actions = self.release_open_gesture();
        if self.history.redo().is_some() {
            actions.push(Action::RenderNeeded);
        }
        self.sync_controls(&mut actions);
        actions
    }

    /// Wipe the canvas and both history stacks.
    pub fn clear(&mut self) -> Vec<Action> {
        let mut actions = self.release_open_gesture();
        let had_strokes = !self.history.committed().is_empty();
        self.history.clear();
        if had_strokes {
            actions.push(Action::RenderNeeded);
        }
        self.sync_controls(&mut actions);
        actions
    }

    /// Register a listener for history changes.
    pub fn subscribe(&mut self, listener: impl FnMut(Change) + 'static) {
        self.history.subscribe(listener);
    }

    // --- Style ---

    /// # Errors
    ///
    /// See [`StyleOptions::select_color`].
    pub fn select_color(&mut self, value: &str) -> Result<Vec<Action>, StyleError> {
        self.options.select_color(value)?;
        Ok(vec![Action::StyleChanged(self.style())])
    }

    /// # Errors
    ///
    /// See [`StyleOptions::select_width`].
    pub fn select_width(&mut self, width: f64) -> Result<Vec<Action>, StyleError> {
        self.options.select_width(width)?;
        Ok(vec![Action::StyleChanged(self.style())])
    }

    /// # Errors
    ///
    /// See [`StyleOptions::select_opacity`].
    pub fn select_opacity(&mut self, opacity: f64) -> Result<Vec<Action>, StyleError> {
        self.options.select_opacity(opacity)?;
        Ok(vec![Action::StyleChanged(self.style())])
    }

    /// # Errors
    ///
    /// See [`StyleOptions::select_effect`].
    pub fn select_effect(&mut self, effect: Effect) -> Result<Vec<Action>, StyleError> {
        self.options.select_effect(effect)?;
        Ok(vec![Action::StyleChanged(self.style())])
    }

    /// A toolbar option button was pressed.
    pub fn press_option(&mut self, kind: OptionKind) -> PanelTransition {
        self.panel.press(kind)
    }

    /// Close the open option row, if any.
    pub fn dismiss_options(&mut self) -> PanelTransition {
        self.panel.dismiss()
    }

    /// The host finished the close animation of an option row.
    pub fn option_transition_finished(&mut self) -> PanelTransition {
        self.panel.transition_finished()
    }

    // --- Queries ---

    /// The style the next stroke will be drawn with.
    #[must_use]
    pub fn style(&self) -> StrokeStyle {
        self.options.current()
    }

    /// Everything to draw, oldest first: committed strokes, then the
    /// stroke being drawn.
    #[must_use]
    pub fn strokes(&self) -> Vec<&Stroke> {
        self.history
            .committed()
            .iter()
            .map(|stroke| &**stroke)
            .chain(self.capture.current())
            .collect()
    }

    /// Whether the undo control should be enabled.
    ///
    /// An open stroke counts once it has a visible segment, so the control
    /// does not flicker on a bare tap.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo() || self.capture.current().is_some_and(Stroke::is_visible)
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Internals ---

    fn release_open_gesture(&mut self) -> Vec<Action> {
        if !self.capture.is_drawing() {
            return Vec::new();
        }
        debug!("history control used mid-gesture; releasing open stroke");
        let release = self.capture.end();
        self.absorb(release)
    }

    fn absorb(&mut self, release: Release) -> Vec<Action> {
        match release {
            Release::Idle => Vec::new(),
            Release::Discarded(id) => vec![Action::StrokeDiscarded(id), Action::RenderNeeded],
            Release::Finished(stroke) => {
                let stroke = Rc::new(stroke);
                self.history.append(Rc::clone(&stroke));
                vec![Action::StrokeCommitted(stroke), Action::RenderNeeded]
            }
        }
    }

    fn sync_controls(&mut self, actions: &mut Vec<Action>) {
        let now = (self.can_undo(), self.can_redo());
        if now != self.controls {
            self.controls = now;
            actions.push(Action::ControlsChanged { can_undo: now.0, can_redo: now.1 });
        }
    }
}

/// The full drawing engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` does not validate.
    pub fn with_config(canvas: HtmlCanvasElement, config: &DrawingConfig) -> Result<Self, ConfigError> {
        Ok(Self { canvas, core: EngineCore::with_config(config)? })
    }

    // --- Delegated layout ---

    pub fn set_canvas_offset(&mut self, offset: CanvasOffset) {
        self.core.set_canvas_offset(offset);
    }

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        self.core.set_viewport(width_css, height_css, dpr)
    }

    // --- Delegated input ---

    pub fn on_gesture_start(&mut self) -> Vec<Action> {
        self.core.on_gesture_start()
    }

    pub fn on_gesture_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_gesture_move(screen_pt)
    }

    pub fn on_gesture_end(&mut self) -> Vec<Action> {
        self.core.on_gesture_end()
    }

    pub fn undo(&mut self) -> Vec<Action> {
        self.core.undo()
    }

    pub fn redo(&mut self) -> Vec<Action> {
        self.core.redo()
    }

    pub fn clear(&mut self) -> Vec<Action> {
        self.core.clear()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(Change) + 'static) {
        self.core.subscribe(listener);
    }

    // --- Delegated style ---

    /// # Errors
    ///
    /// See [`StyleOptions::select_color`].
    pub fn select_color(&mut self, value: &str) -> Result<Vec<Action>, StyleError> {
        self.core.select_color(value)
    }

    /// # Errors
    ///
    /// See [`StyleOptions::select_width`].
    pub fn select_width(&mut self, width: f64) -> Result<Vec<Action>, StyleError> {
        self.core.select_width(width)
    }

    /// # Errors
    ///
    /// See [`StyleOptions::select_opacity`].
    pub fn select_opacity(&mut self, opacity: f64) -> Result<Vec<Action>, StyleError> {
        self.core.select_opacity(opacity)
    }

    /// # Errors
    ///
    /// See [`StyleOptions::select_effect`].
    pub fn select_effect(&mut self, effect: Effect) -> Result<Vec<Action>, StyleError> {
        self.core.select_effect(effect)
    }

    pub fn press_option(&mut self, kind: OptionKind) -> PanelTransition {
        self.core.press_option(kind)
    }

    pub fn dismiss_options(&mut self) -> PanelTransition {
        self.core.dismiss_options()
    }

    pub fn option_transition_finished(&mut self) -> PanelTransition {
        self.core.option_transition_finished()
    }

    // --- Render ---

    /// Draw all visible strokes to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a Canvas2D call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        render::draw(
            &ctx,
            self.core.strokes(),
            self.core.width_scale,
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.core.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.core.can_redo()
    }

    #[must_use]
    pub fn style(&self) -> StrokeStyle {
        self.core.style()
    }
}
