//! Input model: pointer kinds, cancellation reasons, and the drag state machine.
//!
//! A drag session lives between a press on a control point and the end of the
//! gesture. The gesture ends either normally (release) or abnormally (the page
//! loses focus or visibility, or the platform cancels the touch); both paths
//! land back in [`DragState::Idle`] through the same cleanup.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;

/// Which family of DOM events drove a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Mouse events (`mousedown` / `mousemove` / `mouseup`).
    Mouse,
    /// Touch events (`touchstart` / `touchmove` / `touchend`).
    Touch,
}

/// Why a gesture ended without a release event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The window lost focus mid-drag.
    Blur,
    /// The document became hidden (tab switch, minimize).
    Hidden,
    /// The platform cancelled the touch sequence.
    TouchCancel,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blur => "window blur",
            Self::Hidden => "document hidden",
            Self::TouchCancel => "touch cancel",
        })
    }
}

/// Drag controller state. At most one session is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for a press on a control point.
    #[default]
    Idle,
    /// A control point is being dragged.
    Dragging {
        /// Axis whose control point was pressed.
        axis: usize,
        /// Event family that started the session.
        kind: PointerKind,
    },
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Axis being dragged, if any.
    #[must_use]
    pub fn axis(&self) -> Option<usize> {
        match self {
            Self::Idle => None,
            Self::Dragging { axis, .. } => Some(*axis),
        }
    }
}
