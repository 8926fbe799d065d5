//! Grid snapping with hysteresis, and keyboard nudge steps.

use crate::config::DragConfig;
use crate::input::Key;
use kurbo::{Point, Vec2};

/// Result of a snap operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// Whether the X coordinate moved to a new grid step.
    pub snapped_x: bool,
    /// Whether the Y coordinate moved to a new grid step.
    pub snapped_y: bool,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped_x: false,
            snapped_y: false,
        }
    }

    /// Check if any axis stepped.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Snap one axis relative to the current position.
///
/// Moves by exactly one `grid` step in the direction of `diff` once the
/// pointer has travelled more than half a cell, otherwise stays at `current`.
pub fn snap_axis(diff: f64, grid: f64, current: f64) -> f64 {
    if diff.abs() > grid / 2.0 {
        if diff > 0.0 { current + grid } else { current - grid }
    } else {
        current
    }
}

/// Snap a candidate position against the current one, axis by axis.
pub fn snap_with_hysteresis(candidate: Point, current: Point, grid: Vec2) -> SnapResult {
    let x = snap_axis(candidate.x - current.x, grid.x, current.x);
    let y = snap_axis(candidate.y - current.y, grid.y, current.y);

    SnapResult {
        point: Point::new(x, y),
        snapped_x: x != current.x,
        snapped_y: y != current.y,
    }
}

/// Offset applied by an arrow key; `None` for keys that do not nudge.
pub fn nudge_step(key: &Key, config: &DragConfig) -> Option<Vec2> {
    let (step_x, step_y) = if config.snap_to_grid {
        (config.grid_x, config.grid_y)
    } else {
        (1.0, 1.0)
    };

    match key {
        Key::ArrowLeft => Some(Vec2::new(-step_x, 0.0)),
        Key::ArrowRight => Some(Vec2::new(step_x, 0.0)),
        Key::ArrowUp => Some(Vec2::new(0.0, -step_y)),
        Key::ArrowDown => Some(Vec2::new(0.0, step_y)),
        Key::Other(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_axis_holds_within_half_cell() {
        assert_eq!(snap_axis(5.0, 10.0, 30.0), 30.0);
        assert_eq!(snap_axis(-5.0, 10.0, 30.0), 30.0);
        assert_eq!(snap_axis(0.0, 10.0, 30.0), 30.0);
    }

    #[test]
    fn test_snap_axis_steps_one_cell() {
        assert_eq!(snap_axis(5.1, 10.0, 30.0), 40.0);
        assert_eq!(snap_axis(-5.1, 10.0, 30.0), 20.0);
        // Large jumps still move a single cell per update.
        assert_eq!(snap_axis(95.0, 10.0, 30.0), 40.0);
    }

    #[test]
    fn test_snap_with_hysteresis_per_axis() {
        let result = snap_with_hysteresis(
            Point::new(26.0, 2.0),
            Point::new(0.0, 0.0),
            Vec2::new(50.0, 20.0),
        );
        assert_eq!(result.point, Point::new(50.0, 0.0));
        assert!(result.snapped_x);
        assert!(!result.snapped_y);
        assert!(result.is_snapped());
    }

    #[test]
    fn test_snap_result_none() {
        let result = SnapResult::none(Point::new(1.0, 2.0));
        assert!(!result.is_snapped());
    }

    #[test]
    fn test_nudge_step_unit() {
        let config = DragConfig::default();
        assert_eq!(nudge_step(&Key::ArrowLeft, &config), Some(Vec2::new(-1.0, 0.0)));
        assert_eq!(nudge_step(&Key::ArrowDown, &config), Some(Vec2::new(0.0, 1.0)));
        assert_eq!(nudge_step(&Key::Other("a".to_string()), &config), None);
    }

    #[test]
    fn test_nudge_step_grid() {
        let config = DragConfig {
            snap_to_grid: true,
            grid_x: 25.0,
            grid_y: 10.0,
            ..DragConfig::default()
        };
        assert_eq!(nudge_step(&Key::ArrowRight, &config), Some(Vec2::new(25.0, 0.0)));
        assert_eq!(nudge_step(&Key::ArrowUp, &config), Some(Vec2::new(0.0, -10.0)));
    }
}
