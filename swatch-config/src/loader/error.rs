use super::super::validation::ConfigGuardRailError;

use std::path::PathBuf;
use thiserror::Error;

/// Failures while assembling a [`ConfigLoad`](super::ConfigLoad).
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// An explicitly requested config file does not exist
    #[error("config file {path} not found")]
    MissingConfig {
        /// The requested path
        path: PathBuf,
    },
    /// The config could not be read or parsed
    #[error("failed to load picker configuration: {0}")]
    Picker(#[source] anyhow::Error),
    /// The config parsed but is unusable
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    /// The `.env` file exists but is malformed
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
