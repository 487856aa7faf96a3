//! The stroke entity: one continuous line with a fixed style.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::Point;
use crate::style::StrokeStyle;

/// Unique identifier for a stroke; stable across undo/redo.
pub type StrokeId = Uuid;

/// One continuous drawn line.
///
/// Points are only appended while the owning gesture is in progress (see
/// [`crate::capture`]); once the gesture ends the stroke is handed to the
/// history behind an `Rc` and never mutated again. The style is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Point>,
    style: StrokeStyle,
}

impl Stroke {
    /// Start an empty stroke with the given style snapshot.
    #[must_use]
    pub fn new(style: StrokeStyle) -> Self {
        Self { id: Uuid::new_v4(), points: Vec::new(), style }
    }

    #[must_use]
    pub fn id(&self) -> StrokeId {
        self.id
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Whether the stroke has enough points to draw a visible segment.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.points.len() > 1
    }

    /// Append `point` unless it equals the previous point.
    ///
    /// Returns `true` if the point was added.
    pub(crate) fn push_point(&mut self, point: Point) -> bool {
        if self.last_point() == Some(point) {
            return false;
        }
        self.points.push(point);
        true
    }
}
