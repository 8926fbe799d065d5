//! Interaction state definitions.

use crate::dispatcher::ListenerId;
use crate::geometry::Boundary;
use kurbo::Point;

/// Where a controller is in its pointer lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// No pointer is held.
    #[default]
    Idle,
    /// Between pointer-down and pointer-up.
    Dragging(DragSession),
    /// Torn down; every event is ignored.
    Disposed,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn is_disposed(&self) -> bool {
        matches!(self, Self::Disposed)
    }

    /// The active session, if dragging.
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            _ => None,
        }
    }
}

/// Values captured at pointer-down for the duration of one drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Pointer position at pointer-down (client coordinates).
    pub start_pointer: Point,
    /// Element `left`/`top` at pointer-down.
    pub start_position: Point,
    /// Limits computed at pointer-down, when boundary clamping is on.
    pub boundary: Option<Boundary>,
    pub move_listener: ListenerId,
    pub up_listener: ListenerId,
}

impl DragSession {
    /// Unclamped, unsnapped position for a pointer at `pointer`.
    pub fn candidate(&self, pointer: Point, scale_ratio: f64) -> Point {
        self.start_position + (pointer - self.start_pointer) / scale_ratio
    }
}
