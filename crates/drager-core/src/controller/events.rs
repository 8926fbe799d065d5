//! Lifecycle notifications emitted by a controller.

use crate::geometry::DragData;
use serde::{Deserialize, Serialize};

/// Drag lifecycle notification carrying a geometry snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum DragEvent {
    /// Pointer went down on an enabled element.
    DragStart(DragData),
    /// Position committed during a drag.
    Drag(DragData),
    /// Pointer released.
    DragEnd(DragData),
}

impl DragEvent {
    /// Event name as hosts know it (`drag-start`, `drag`, `drag-end`).
    pub fn name(&self) -> &'static str {
        match self {
            DragEvent::DragStart(_) => "drag-start",
            DragEvent::Drag(_) => "drag",
            DragEvent::DragEnd(_) => "drag-end",
        }
    }

    /// The snapshot carried by the event.
    pub fn data(&self) -> &DragData {
        match self {
            DragEvent::DragStart(data) | DragEvent::Drag(data) | DragEvent::DragEnd(data) => data,
        }
    }
}
