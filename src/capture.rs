//! Stroke capture: the gesture state machine that turns a drag into a stroke.
//!
//! A gesture runs `begin` → zero or more `move_to` → `end`. While
//! [`CaptureState::Drawing`] the open stroke is owned here and mutated in
//! place; `end` hands it out as a finished value (or drops it if it never
//! got past a single point). Style is taken by value at `begin` and never
//! consulted again for that stroke.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use tracing::{debug, trace, warn};

use crate::geom::{CanvasOffset, Point};
use crate::stroke::{Stroke, StrokeId};
use crate::style::StrokeStyle;

/// Internal state for the capture state machine.
#[derive(Debug, Clone, Default)]
pub enum CaptureState {
    /// No gesture in progress; waiting for the next gesture-start.
    #[default]
    Idle,
    /// A gesture is in progress and points are being collected.
    Drawing {
        /// The open stroke, owned exclusively until release.
        stroke: Stroke,
    },
}

/// Outcome of releasing a gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum Release {
    /// No gesture was in progress.
    Idle,
    /// The stroke had one point or none and was dropped.
    Discarded(StrokeId),
    /// The stroke is finished and ready to be committed.
    Finished(Stroke),
}

/// Gesture-to-stroke state machine plus the canvas offset it reads.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    state: CaptureState,
    offset: CanvasOffset,
}

impl Capture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The canvas offset currently used for coordinate conversion.
    #[must_use]
    pub fn offset(&self) -> CanvasOffset {
        self.offset
    }

    /// Record the canvas's on-screen position. Affects subsequent moves only.
    pub fn set_offset(&mut self, offset: CanvasOffset) {
        self.offset = offset;
    }

    #[must_use]
    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, CaptureState::Drawing { .. })
    }

    /// The stroke being drawn, if a gesture is in progress.
    #[must_use]
    pub fn current(&self) -> Option<&Stroke> {
        match &self.state {
            CaptureState::Idle => None,
            CaptureState::Drawing { stroke } => Some(stroke),
        }
    }

    /// Gesture-start: open a new stroke with `style`.
    ///
    /// A gesture that is still open is released first; its outcome is
    /// returned so the caller can commit or drop it.
    pub fn begin(&mut self, style: StrokeStyle) -> Release {
        let previous = if self.is_drawing() {
            warn!("gesture started while another was open; releasing it first");
            self.end()
        } else {
            Release::Idle
        };
        let stroke = Stroke::new(style);
        debug!(id = %stroke.id(), effect = %style.effect, "stroke started");
        self.state = CaptureState::Drawing { stroke };
        previous
    }

    /// Gesture-move: add the canvas-local position of `screen` to the open
    /// stroke.
    ///
    /// Returns `true` if a point was appended. Moves while idle and moves
    /// that land on the previous point are ignored.
    pub fn move_to(&mut self, screen: Point) -> bool {
        let CaptureState::Drawing { stroke } = &mut self.state else {
            return false;
        };
        let local = self.offset.to_local(screen);
        let added = stroke.push_point(local);
        if added {
            trace!(x = local.x, y = local.y, points = stroke.len(), "point appended");
        }
        added
    }

    /// Gesture-end: close the open stroke.
    pub fn end(&mut self) -> Release {
        match std::mem::take(&mut self.state) {
            CaptureState::Idle => Release::Idle,
            CaptureState::Drawing { stroke } if stroke.is_visible() => {
                debug!(id = %stroke.id(), points = stroke.len(), "stroke finished");
                Release::Finished(stroke)
            }
            CaptureState::Drawing { stroke } => {
                debug!(id = %stroke.id(), points = stroke.len(), "stroke discarded");
                Release::Discarded(stroke.id())
            }
        }
    }
}
