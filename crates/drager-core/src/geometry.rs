//! Geometry record and boundary clamping for draggable elements.

use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Default element width (matches the component's prop default).
pub const DEFAULT_WIDTH: f64 = 100.0;
/// Default element height.
pub const DEFAULT_HEIGHT: f64 = 100.0;

/// Identifier of a draggable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new random element id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing uuid.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying uuid.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Position, size and rotation of a draggable element.
///
/// `left`/`top` are in the element's own (unscaled) coordinate space.
/// `angle` is carried through untouched; nothing in the drag path rotates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragData {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
    pub angle: f64,
}

impl Default for DragData {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            left: 0.0,
            top: 0.0,
            angle: 0.0,
        }
    }
}

impl DragData {
    /// Create a record with the given size at the origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Builder-style position setter.
    pub fn at(mut self, left: f64, top: f64) -> Self {
        self.left = left;
        self.top = top;
        self
    }

    /// Top-left corner as a point.
    pub fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Move the top-left corner.
    pub fn set_position(&mut self, position: Point) {
        self.left = position.x;
        self.top = position.y;
    }

    /// Width and height.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Maximum reachable top-left position inside a parent container.
///
/// The minimum is always the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub max_x: f64,
    pub max_y: f64,
}

impl Boundary {
    /// Compute the limits for an element of `size` inside `parent`.
    ///
    /// The parent is measured in screen units, so it is divided by
    /// `scale_ratio` before the element size is subtracted.
    pub fn from_parent(parent: Size, size: Size, scale_ratio: f64) -> Self {
        Self {
            max_x: parent.width / scale_ratio - size.width,
            max_y: parent.height / scale_ratio - size.height,
        }
    }

    /// Clamp a position into `[0, max_x] x [0, max_y]`.
    ///
    /// The lower bound is applied first, so when the element is larger than
    /// its parent the result is pinned to the (negative) maximum.
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(clamp_axis(point.x, self.max_x), clamp_axis(point.y, self.max_y))
    }

    /// Check whether a position already lies inside the limits.
    pub fn contains(&self, point: Point) -> bool {
        (0.0..=self.max_x).contains(&point.x) && (0.0..=self.max_y).contains(&point.y)
    }
}

fn clamp_axis(value: f64, max: f64) -> f64 {
    let value = if value < 0.0 { 0.0 } else { value };
    if value > max { max } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_from_parent() {
        let boundary = Boundary::from_parent(Size::new(500.0, 300.0), Size::new(100.0, 50.0), 1.0);
        assert_eq!(boundary.max_x, 400.0);
        assert_eq!(boundary.max_y, 250.0);
    }

    #[test]
    fn test_boundary_scaled_parent() {
        // At scale 2 the parent is half as large in element space.
        let boundary = Boundary::from_parent(Size::new(500.0, 300.0), Size::new(100.0, 50.0), 2.0);
        assert_eq!(boundary.max_x, 150.0);
        assert_eq!(boundary.max_y, 100.0);
    }

    #[test]
    fn test_clamp() {
        let boundary = Boundary { max_x: 400.0, max_y: 250.0 };
        assert_eq!(boundary.clamp(Point::new(450.0, 10.0)), Point::new(400.0, 10.0));
        assert_eq!(boundary.clamp(Point::new(-5.0, 300.0)), Point::new(0.0, 250.0));
        assert_eq!(boundary.clamp(Point::new(12.5, 7.0)), Point::new(12.5, 7.0));
    }

    #[test]
    fn test_clamp_element_larger_than_parent() {
        let boundary = Boundary::from_parent(Size::new(50.0, 50.0), Size::new(100.0, 100.0), 1.0);
        assert_eq!(boundary.clamp(Point::new(10.0, 0.0)), Point::new(-50.0, -50.0));
    }

    #[test]
    fn test_contains() {
        let boundary = Boundary { max_x: 10.0, max_y: 10.0 };
        assert!(boundary.contains(Point::new(0.0, 10.0)));
        assert!(!boundary.contains(Point::new(-0.1, 5.0)));
    }

    #[test]
    fn test_drag_data_defaults_from_json() {
        let data: DragData = serde_json::from_str(r#"{ "left": 20 }"#).unwrap();
        assert_eq!(data.left, 20.0);
        assert_eq!(data.width, DEFAULT_WIDTH);
        assert_eq!(data.height, DEFAULT_HEIGHT);
        assert_eq!(data.angle, 0.0);
    }

    #[test]
    fn test_position_roundtrip() {
        let mut data = DragData::new(100.0, 50.0).at(3.0, 4.0);
        assert_eq!(data.position(), Point::new(3.0, 4.0));
        data.set_position(Point::new(8.0, 9.0));
        assert_eq!((data.left, data.top), (8.0, 9.0));
        assert_eq!(data.size(), Size::new(100.0, 50.0));
    }
}
