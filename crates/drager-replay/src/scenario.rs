//! Scenario file format.
//!
//! ```json
//! {
//!   "root": { "width": 500, "height": 300 },
//!   "elements": [
//!     { "name": "box", "data": { "width": 100, "height": 50 }, "config": { "boundary": true } }
//!   ],
//!   "events": [
//!     { "type": "down", "target": "box", "x": 0, "y": 0 },
//!     { "type": "move", "x": 450, "y": 10 },
//!     { "type": "up", "x": 450, "y": 10 },
//!     { "type": "key", "key": "ArrowLeft" },
//!     { "type": "click" }
//!   ]
//! }
//! ```

use drager_core::{DragConfig, DragData, KeyEvent, PointerEvent};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// A full replay script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Root container size, used for elements without a parent.
    pub root: Size,
    #[serde(default)]
    pub elements: Vec<ElementDef>,
    #[serde(default)]
    pub events: Vec<ScriptedEvent>,
}

/// An element mounted before the events run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementDef {
    pub name: String,
    #[serde(default)]
    pub data: DragData,
    #[serde(default)]
    pub config: DragConfig,
    /// Parent container size; the root is used when absent.
    #[serde(default)]
    pub parent: Option<Size>,
}

/// One input step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptedEvent {
    Down { target: String, x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Key { key: String },
    Click,
    Unmount { target: String },
}

impl ScriptedEvent {
    /// Pointer event for pointer steps.
    pub fn pointer_event(&self) -> Option<PointerEvent> {
        match *self {
            ScriptedEvent::Down { x, y, .. } => Some(PointerEvent::Down { position: Point::new(x, y) }),
            ScriptedEvent::Move { x, y } => Some(PointerEvent::Move { position: Point::new(x, y) }),
            ScriptedEvent::Up { x, y } => Some(PointerEvent::Up { position: Point::new(x, y) }),
            _ => None,
        }
    }

    /// Key event for key steps.
    pub fn key_event(&self) -> Option<KeyEvent> {
        match self {
            ScriptedEvent::Key { key } => Some(KeyEvent::pressed(key)),
            _ => None,
        }
    }
}
