//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path that fails to load falls back to defaults with a
    /// warning; without a path the default locations are searched.
    pub fn with_file(mut self, path: Option<&str>) -> Self {
        let file_config = if let Some(path) = path {
            match ConfigFile::load(path) {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    log::warn!("{}, using defaults", e);
                    None
                }
            }
        } else {
            ConfigFile::load_default()
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        self
    }

    /// Override both drag sensitivities
    pub fn with_sensitivity(mut self, sensitivity: Option<f32>) -> Self {
        if let Some(s) = sensitivity {
            self.config.drag.x_sensitivity = s;
            self.config.drag.y_sensitivity = s;
        }
        self
    }

    /// Override the animation length
    pub fn with_animation_ms(mut self, duration_ms: Option<u64>) -> Self {
        if let Some(ms) = duration_ms {
            self.config.animation.duration_ms = ms;
        }
        self
    }

    /// Override the reset value
    pub fn with_reset_value(mut self, value: Option<f32>) -> Self {
        if let Some(v) = value {
            self.config.reset.value = v;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
