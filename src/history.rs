//! Stroke history: the committed and undone stacks.
//!
//! `committed` is what is on the canvas, oldest first. `undone` holds
//! strokes removed by [`History::undo`], most recently undone last. A stroke
//! lives in at most one of the two at a time. Strokes are shared as
//! `Rc<Stroke>` so redo restores the very same stroke, not a copy.
//!
//! Presentation layers subscribe with [`History::subscribe`] and receive one
//! [`Change`] per effective mutation. No-ops (undo on an empty history,
//! clearing an empty history) notify nobody.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::stroke::{Stroke, StrokeId};

/// A mutation that happened to the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// A stroke was pushed onto `committed`.
    Appended(StrokeId),
    /// A stroke moved from `committed` to `undone`.
    Undone(StrokeId),
    /// A stroke moved from `undone` back to `committed`.
    Redone(StrokeId),
    /// Both stacks were emptied.
    Cleared,
    /// The redo branch was dropped without touching `committed`.
    RedoDiscarded,
}

/// Callback invoked after each effective history mutation.
pub type Listener = Box<dyn FnMut(Change)>;

/// Committed/undone stroke stacks.
#[derive(Default)]
pub struct History {
    committed: Vec<Rc<Stroke>>,
    undone: Vec<Rc<Stroke>>,
    listeners: Vec<Listener>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change listener. Listeners are called in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(Change) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Push a finished stroke and invalidate the redo branch.
    pub fn append(&mut self, stroke: impl Into<Rc<Stroke>>) {
        let stroke = stroke.into();
        let id = stroke.id();
        self.undone.clear();
        self.committed.push(stroke);
        debug!(%id, committed = self.committed.len(), "stroke appended");
        self.notify(Change::Appended(id));
    }

    /// Move the most recent committed stroke to the undone stack.
    ///
    /// Returns the moved stroke, or `None` if nothing was committed.
    pub fn undo(&mut self) -> Option<Rc<Stroke>> {
        let stroke = self.committed.pop()?;
        self.undone.push(Rc::clone(&stroke));
        debug!(id = %stroke.id(), undone = self.undone.len(), "undo");
        self.notify(Change::Undone(stroke.id()));
        Some(stroke)
    }

    /// Move the most recently undone stroke back onto `committed`.
    ///
    /// Returns the restored stroke, or `None` if there was nothing to redo.
    pub fn redo(&mut self) -> Option<Rc<Stroke>> {
        let stroke = self.undone.pop()?;
        self.committed.push(Rc::clone(&stroke));
        debug!(id = %stroke.id(), committed = self.committed.len(), "redo");
        self.notify(Change::Redone(stroke.id()));
        Some(stroke)
    }

    /// Empty both stacks. A clear cannot itself be undone.
    pub fn clear(&mut self) {
        if !self.has_history() {
            return;
        }
        debug!(
            committed = self.committed.len(),
            undone = self.undone.len(),
            "history cleared"
        );
        self.committed.clear();
        self.undone.clear();
        self.notify(Change::Cleared);
    }

    /// Drop the redo branch. Called when a new stroke starts.
    pub fn discard_redo(&mut self) {
        if self.undone.is_empty() {
            return;
        }
        debug!(dropped = self.undone.len(), "redo branch discarded");
        self.undone.clear();
        self.notify(Change::RedoDiscarded);
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Visible strokes, oldest first.
    #[must_use]
    pub fn committed(&self) -> &[Rc<Stroke>] {
        &self.committed
    }

    /// Undone strokes, most recently undone last.
    #[must_use]
    pub fn undone(&self) -> &[Rc<Stroke>] {
        &self.undone
    }

    /// Number of committed strokes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Returns `true` if nothing is committed. Undone strokes are not counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Returns `true` if either stack holds a stroke.
    #[must_use]
    pub fn has_history(&self) -> bool {
        !self.committed.is_empty() || !self.undone.is_empty()
    }

    fn notify(&mut self, change: Change) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("committed", &self.committed)
            .field("undone", &self.undone)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
