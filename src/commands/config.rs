//! Config command implementation
//!
//! Prints the effective configuration after file and CLI merging, and
//! optionally writes it out.

use crate::config::{Config, ConfigFile};
use crate::error::{ConfigError, Result};
use std::path::Path;

/// Execute the config command
///
/// The configuration is validated first so a broken file is reported
/// instead of echoed back.
pub fn run_config(config: &Config, save: Option<&Path>) -> Result<()> {
    let text = render_config(config)?;
    println!("{}", text.trim_end());

    if let Some(path) = save {
        ConfigFile::save(config, path)?;
        eprintln!("Configuration written to {}", path.display());
    }
    Ok(())
}

/// Validate and serialize a configuration as TOML
fn render_config(config: &Config) -> Result<String> {
    config.knob_specs()?;
    config.drag_mapper()?;
    Ok(toml::to_string_pretty(config).map_err(ConfigError::from)?)
}
