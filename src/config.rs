//! Configuration System
//!
//! Runtime configuration for a scaffold run: the base directory and the
//! logging settings. Layered with the `config` crate: built-in defaults, then
//! an optional TOML file. CLI flags are applied over the loaded value by the
//! binary. The layout itself is never read from configuration.

use crate::error::ScaffoldError;
use crate::logging::LoggingConfig;
use crate::manifest::BUILTIN_BASE_DIR;
use config::{Config, ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Directory under which the skeleton is created
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(BUILTIN_BASE_DIR)
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ScaffoldConfig {
    pub fn validate(&self) -> Result<(), ScaffoldError> {
        if self.base_dir.as_os_str().is_empty() {
            return Err(ScaffoldError::Config(
                "base_dir cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads [`ScaffoldConfig`] from defaults and an optional file
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults only.
    pub fn load_default() -> Result<ScaffoldConfig, ScaffoldError> {
        Self::finish(builder_with_defaults()?)
    }

    /// Defaults overlaid with the TOML file at `path`. The file must exist.
    pub fn load_from_file(path: &Path) -> Result<ScaffoldConfig, ScaffoldError> {
        if !path.is_file() {
            return Err(ScaffoldError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder =
            builder_with_defaults()?.add_source(File::from(path).format(FileFormat::Toml));
        Self::finish(builder)
    }

    /// `load_from_file` when a path is given, otherwise `load_default`.
    pub fn load(path: Option<&Path>) -> Result<ScaffoldConfig, ScaffoldError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load_default(),
        }
    }

    fn finish(
        builder: ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<ScaffoldConfig, ScaffoldError> {
        let config: ScaffoldConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

/// Config builder with defaults applied.
fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ScaffoldError> {
    Ok(Config::builder().set_default("base_dir", BUILTIN_BASE_DIR)?)
}
