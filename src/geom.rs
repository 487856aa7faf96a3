#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or canvas-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// On-screen position of the drawing surface.
///
/// Written by the host after layout (last write wins) and read on every
/// gesture-move to convert screen coordinates to canvas-local ones.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CanvasOffset {
    pub left: f64,
    pub top: f64,
}

impl CanvasOffset {
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Convert a screen-space point to canvas-local coordinates.
    #[must_use]
    pub fn to_local(&self, screen: Point) -> Point {
        Point {
            x: screen.x - self.left,
            y: screen.y - self.top,
        }
    }
}
