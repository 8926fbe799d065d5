//! Pointer and keyboard events fed into drag controllers.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Pointer event type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    /// Client coordinates carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => position,
        }
    }

    /// Offset of this event from an earlier pointer position.
    pub fn delta_from(&self, origin: Point) -> Vec2 {
        self.position() - origin
    }
}

/// Key identifier, following DOM `KeyboardEvent.key` naming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Other(String),
}

impl Key {
    /// Parse a key identifier such as `"ArrowLeft"`.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            other => Key::Other(other.to_string()),
        }
    }

    /// The DOM-style identifier.
    pub fn identifier(&self) -> &str {
        match self {
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::Other(s) => s,
        }
    }

    pub fn is_arrow(&self) -> bool {
        !matches!(self, Key::Other(_))
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::from_identifier(&s)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.identifier().to_string()
    }
}

/// Key-down event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key }
    }

    /// Build from a DOM-style identifier.
    pub fn pressed(identifier: &str) -> Self {
        Self::new(Key::from_identifier(identifier))
    }
}
