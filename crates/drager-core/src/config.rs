//! Per-element drag configuration.

use kurbo::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default grid cell size (matches the component's prop default).
pub const DEFAULT_GRID: f64 = 50.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("scale ratio must be positive and finite, got {0}")]
    InvalidScaleRatio(f64),
    #[error("grid size must be positive when snapping, got {0}x{1}")]
    InvalidGrid(f64, f64),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Read-only drag behavior for one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragConfig {
    /// Ignore pointer-down entirely.
    pub disabled: bool,
    /// Pointer deltas are divided by this before being applied.
    pub scale_ratio: f64,
    /// Clamp the element inside its parent.
    pub boundary: bool,
    pub snap_to_grid: bool,
    pub grid_x: f64,
    pub grid_y: f64,
    /// Never register keyboard nudging.
    pub disabled_key_event: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            scale_ratio: 1.0,
            boundary: false,
            snap_to_grid: false,
            grid_x: DEFAULT_GRID,
            grid_y: DEFAULT_GRID,
            disabled_key_event: false,
        }
    }
}

impl DragConfig {
    /// Parse a config from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Grid cell size as a vector.
    pub fn grid(&self) -> Vec2 {
        Vec2::new(self.grid_x, self.grid_y)
    }

    /// Check values the controller would otherwise misbehave on.
    ///
    /// Controllers never call this; hosts that accept configs from outside
    /// should.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.scale_ratio.is_finite() || self.scale_ratio <= 0.0 {
            return Err(ConfigError::InvalidScaleRatio(self.scale_ratio));
        }
        if self.snap_to_grid && !(self.grid_x > 0.0 && self.grid_y > 0.0) {
            return Err(ConfigError::InvalidGrid(self.grid_x, self.grid_y));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DragConfig::default();
        assert_eq!(config.scale_ratio, 1.0);
        assert_eq!(config.grid(), Vec2::new(50.0, 50.0));
        assert!(!config.boundary);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_camel_case() {
        let config = DragConfig::from_json(r#"{ "snapToGrid": true, "gridX": 20, "scaleRatio": 2 }"#).unwrap();
        assert!(config.snap_to_grid);
        assert_eq!(config.grid_x, 20.0);
        assert_eq!(config.grid_y, DEFAULT_GRID);
        assert_eq!(config.scale_ratio, 2.0);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            DragConfig::from_json("{ not json"),
            Err(ConfigError::Serialization(_))
        ));
    }

    #[test]
    fn test_validate_scale_ratio() {
        let config = DragConfig { scale_ratio: 0.0, ..DragConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidScaleRatio(_))));

        let config = DragConfig { scale_ratio: f64::NAN, ..DragConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_grid_only_when_snapping() {
        let config = DragConfig { grid_x: -1.0, ..DragConfig::default() };
        assert!(config.validate().is_ok());

        let config = DragConfig { grid_x: -1.0, snap_to_grid: true, ..DragConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidGrid(..))));
    }
}
