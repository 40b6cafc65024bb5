//! Error types for the scaffolder.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration or materializing the skeleton
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ScaffoldError {
    /// True for directory/file creation failures (permission, invalid name,
    /// exhausted storage, path-type conflict).
    pub fn is_filesystem_failure(&self) -> bool {
        matches!(
            self,
            ScaffoldError::CreateDirectory { .. } | ScaffoldError::CreateFile { .. }
        )
    }

    /// Path the failing filesystem operation targeted, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ScaffoldError::CreateDirectory { path, .. } | ScaffoldError::CreateFile { path, .. } => {
                Some(path.as_path())
            }
            _ => None,
        }
    }
}

impl From<config::ConfigError> for ScaffoldError {
    fn from(err: config::ConfigError) -> Self {
        ScaffoldError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for ScaffoldError {
    fn from(err: serde_json::Error) -> Self {
        ScaffoldError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ScaffoldError {
    fn from(err: toml::ser::Error) -> Self {
        ScaffoldError::Serialization(err.to_string())
    }
}
