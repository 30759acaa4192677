//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::domain::{KnobRange, KnobSpec};
use crate::error::ConfigError;
use crate::gesture::TwoDimensionalDrag;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Drag gesture settings
    pub drag: DragConfig,
    /// Value animation settings
    pub animation: AnimationConfig,
    /// Bulk reset settings
    pub reset: ResetConfig,
    /// Knobs to mount, in display order
    pub knobs: Vec<KnobConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            drag: DragConfig::default(),
            animation: AnimationConfig::default(),
            reset: ResetConfig::default(),
            knobs: (1..=4)
                .map(|i| KnobConfig::new(format!("Knob {}", i)))
                .collect(),
        }
    }
}

impl Config {
    /// Validate every knob entry into a spec and its initial value
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first bad entry
    pub fn knob_entries(&self) -> Result<Vec<(KnobSpec, f32)>, ConfigError> {
        self.knobs
            .iter()
            .enumerate()
            .map(|(i, knob)| knob.to_entry(i))
            .collect()
    }

    /// Validated knob specs
    pub fn knob_specs(&self) -> Result<Vec<KnobSpec>, ConfigError> {
        Ok(self
            .knob_entries()?
            .into_iter()
            .map(|(spec, _)| spec)
            .collect())
    }

    /// Validated drag mapper
    pub fn drag_mapper(&self) -> Result<TwoDimensionalDrag, ConfigError> {
        self.drag.to_mapper()
    }
}

/// Drag gesture configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Horizontal sensitivity
    pub x_sensitivity: f32,
    /// Vertical sensitivity
    pub y_sensitivity: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            x_sensitivity: TwoDimensionalDrag::DEFAULT_SENSITIVITY,
            y_sensitivity: TwoDimensionalDrag::DEFAULT_SENSITIVITY,
        }
    }
}

impl DragConfig {
    /// Convert to a drag mapper
    pub fn to_mapper(&self) -> Result<TwoDimensionalDrag, ConfigError> {
        TwoDimensionalDrag::new(self.x_sensitivity, self.y_sensitivity).map_err(|e| {
            ConfigError::InvalidValue {
                key: "drag".to_string(),
                message: e.to_string(),
            }
        })
    }
}

/// Value animation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Transition length in milliseconds (0 disables animation)
    pub duration_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self { duration_ms: 150 }
    }
}

impl AnimationConfig {
    /// Transition length
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Bulk reset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResetConfig {
    /// Value every knob is reset to
    pub value: f32,
}

/// Single knob configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnobConfig {
    /// Display label
    pub label: String,
    /// Value range as `[lower, upper]`
    #[serde(default = "default_range")]
    pub range: [f32; 2],
    /// Arc origin
    #[serde(default)]
    pub origin: f32,
    /// Initial value
    #[serde(default)]
    pub initial: f32,
}

fn default_range() -> [f32; 2] {
    KnobRange::default().into()
}

impl KnobConfig {
    /// Knob with default range, origin and initial value
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            range: default_range(),
            origin: 0.0,
            initial: 0.0,
        }
    }

    /// Convert to a knob spec plus initial value
    fn to_entry(&self, index: usize) -> Result<(KnobSpec, f32), ConfigError> {
        let invalid = |e: crate::error::DomainError| ConfigError::InvalidValue {
            key: format!("knobs[{}]", index),
            message: e.to_string(),
        };

        let range = KnobRange::try_from(self.range).map_err(invalid)?;
        let spec = KnobSpec::new(self.label.clone())
            .with_range(range)
            .with_origin(self.origin)
            .map_err(invalid)?;

        if !range.contains(self.initial) {
            log::warn!(
                "Initial value {} for knob '{}' is outside {}, clamping",
                self.initial,
                self.label,
                range
            );
        }

        Ok((spec, range.clamp(self.initial)))
    }
}
