//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/briefwiki/config.toml)
//! 3. Project config (./briefwiki.toml)
//! 4. Environment variables (BRIEFWIKI_* prefix, `__` as section separator)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::types::{BriefError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain:
    /// defaults -> global -> project -> env vars.
    pub fn load() -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // e.g. BRIEFWIKI_LLM__MODEL -> llm.model
        figment = figment.merge(Env::prefixed("BRIEFWIKI_").split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| BriefError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file only.
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| BriefError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Path to the global config file (~/.config/briefwiki/config.toml).
    pub fn global_config_path() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join("briefwiki").join("config.toml"))
    }

    /// Path to the project config file.
    pub fn project_config_path() -> PathBuf {
        PathBuf::from("briefwiki.toml")
    }

    /// Write a default config file at the given path.
    pub fn init_file(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            return Err(BriefError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        let rendered = toml::to_string_pretty(&Config::default())
            .map_err(|e| BriefError::Config(format!("Failed to serialize defaults: {}", e)))?;
        fs::write(path, rendered)?;
        Ok(())
    }
}
