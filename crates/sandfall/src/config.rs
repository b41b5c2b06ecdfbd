//! Startup configuration.
//!
//! Loaded from JSON; every field has a default so a partial file is fine.
//! Anything invalid is rejected before the world is built.

use std::path::Path;
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cell::CellType;
use crate::layout::WallLayout;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("frame rate must be a positive finite number with a timeable period, got {0}")]
    InvalidFrameRate(f32),
    #[error("spawn interval must be at least one tick")]
    InvalidSpawnInterval,
    #[error("brush must cover 1..={height} rows, got {brush}")]
    InvalidBrush { brush: usize, height: usize },
    #[error("spawned material must be sand or water, got {0}")]
    InvalidSpawnKind(CellType),
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Grid width in cells; also the display width in pixels.
    pub width: usize,
    /// Grid height in cells; also the display height in pixels.
    pub height: usize,
    /// Target frames per second. One tick per frame.
    pub frame_rate: f32,
    /// Ticks per spawn.
    pub spawn_interval: u32,
    /// Rows filled from the top of the spawn column on each spawn.
    pub brush: usize,
    pub spawn_kind: CellType,
    pub layout: WallLayout,
    pub seed: u64,
    /// Hold the simulation until the crank first moves.
    pub start_paused: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 240,
            frame_rate: 50.0,
            spawn_interval: 1,
            brush: 1,
            spawn_kind: CellType::Sand,
            layout: WallLayout::Floor,
            seed: 0,
            start_paused: false,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    /// Malformed JSON or any value rejected by [`SimConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    ///
    /// # Errors
    /// I/O failure, malformed JSON, or an invalid value.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// # Errors
    /// The first invalid value found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.frame_rate.is_finite()
            || self.frame_rate <= 0.0
            || Duration::try_from_secs_f32(1.0 / self.frame_rate).is_err()
        {
            return Err(ConfigError::InvalidFrameRate(self.frame_rate));
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::InvalidSpawnInterval);
        }
        if self.brush == 0 || self.brush > self.height {
            return Err(ConfigError::InvalidBrush {
                brush: self.brush,
                height: self.height,
            });
        }
        if !self.spawn_kind.is_particle() {
            return Err(ConfigError::InvalidSpawnKind(self.spawn_kind));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_device() {
        let config = SimConfig::default();
        assert_eq!((config.width, config.height), (400, 240));
        assert!((config.frame_rate - 50.0).abs() < f32::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = SimConfig::from_json(r#"{ "width": 64, "seed": 9, "layout": "border" }"#).unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 240);
        assert_eq!(config.seed, 9);
        assert_eq!(config.layout, WallLayout::Border);
        assert_eq!(config.spawn_kind, CellType::Sand);
        assert!(!config.start_paused);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let err = SimConfig::from_json(r#"{ "height": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDimensions { width: 400, height: 0 }));
    }

    #[test]
    fn rejects_bad_frame_rates() {
        // 1e-20 fps is positive but its frame period overflows a Duration.
        for rate in [0.0, -30.0, f32::NAN, f32::INFINITY, 1e-20] {
            let config = SimConfig {
                frame_rate: rate,
                ..SimConfig::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::InvalidFrameRate(_))));
        }
    }

    #[test]
    fn accepts_slow_frame_rates() {
        let config = SimConfig {
            frame_rate: 0.5,
            ..SimConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_spawn_interval() {
        let err = SimConfig::from_json(r#"{ "spawn_interval": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpawnInterval));
    }

    #[test]
    fn rejects_brush_outside_grid() {
        let config = SimConfig {
            height: 4,
            brush: 5,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBrush { brush: 5, height: 4 })
        ));
    }

    #[test]
    fn rejects_static_spawn_kinds() {
        let err = SimConfig::from_json(r#"{ "spawn_kind": "wall" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpawnKind(CellType::Wall)));
        assert_eq!(err.to_string(), "spawned material must be sand or water, got Wall");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SimConfig::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SimConfig::load("/nonexistent/sandfall.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
