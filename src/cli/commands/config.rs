//! Config Command
//!
//! Shows the merged configuration, prints config file paths, and writes a
//! default project config file.

use crate::config::{Config, ConfigLoader};
use crate::types::{BriefError, Result};

/// Print the merged configuration as TOML.
pub fn show(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| BriefError::Config(format!("Failed to render config: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}

/// Print config file locations with existence markers.
pub fn path() {
    println!("Configuration paths:");
    if let Some(global) = ConfigLoader::global_config_path() {
        let marker = if global.exists() { "✓" } else { "✗" };
        println!("  Global:  {} {}", marker, global.display());
    } else {
        println!("  Global:  (not available)");
    }
    let project = ConfigLoader::project_config_path();
    let marker = if project.exists() { "✓" } else { "✗" };
    println!("  Project: {} {}", marker, project.display());
}

/// Write a default project config file.
pub fn init(force: bool) -> Result<()> {
    let path = ConfigLoader::project_config_path();
    ConfigLoader::init_file(&path, force)?;
    println!("Wrote {}", path.display());
    Ok(())
}
