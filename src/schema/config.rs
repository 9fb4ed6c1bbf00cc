//! Configuration types for visualizer runs.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Algorithm;

/// Smallest array size offered by the reference UI.
pub const MIN_ARRAY_SIZE: usize = 10;
/// Largest array size offered by the reference UI.
pub const MAX_ARRAY_SIZE: usize = 100;
/// Slowest speed setting.
pub const MIN_SPEED: u32 = 1;
/// Fastest speed setting.
pub const MAX_SPEED: u32 = 100;

fn default_array_size() -> usize {
    50
}

fn default_speed() -> u32 {
    50
}

/// Top-level visualizer configuration.
///
/// Everything the presentation shell would otherwise keep as loose UI state
/// lives here and is handed to the playback controller explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    /// Number of bars. The core accepts any size >= 1.
    #[serde(default = "default_array_size")]
    pub array_size: usize,
    /// Playback speed (1-100). Higher is faster.
    #[serde(default = "default_speed")]
    pub speed: u32,
    /// Sorting algorithm to animate.
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Range random bar heights are drawn from.
    #[serde(default)]
    pub values: ValueRange,
    /// Fixed seed for reproducible arrays (None = entropy).
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            array_size: default_array_size(),
            speed: default_speed(),
            algorithm: Algorithm::default(),
            values: ValueRange::default(),
            random_seed: None,
        }
    }
}

/// Inclusive range of generated bar heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 10, max: 409 }
    }
}

impl ValueRange {
    /// Check if `value` falls inside the range.
    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Check the range is non-empty and strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max {
            return Err(ConfigError::InvalidValueRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Convert a 1-100 speed setting into the delay between frames.
///
/// Out-of-range speeds are clamped, so the pace is always 1-100 ms.
#[inline]
pub fn pace_for_speed(speed: u32) -> Duration {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    Duration::from_millis(u64::from(MAX_SPEED + 1 - speed))
}

impl VisualizerConfig {
    /// Delay between frame advances for the configured speed.
    #[inline]
    pub fn pace(&self) -> Duration {
        pace_for_speed(self.speed)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.array_size == 0 {
            return Err(ConfigError::InvalidArraySize);
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.speed) {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        self.values.validate()
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Array size must be non-zero")]
    InvalidArraySize,
    #[error("Speed {0} is outside 1-100")]
    InvalidSpeed(u32),
    #[error("Value range {min}..={max} must be non-empty and positive")]
    InvalidValueRange { min: u32, max: u32 },
    #[error("Unknown algorithm '{0}' (expected bubble, insertion or selection)")]
    UnknownAlgorithm(String),
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
