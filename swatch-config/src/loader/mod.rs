pub mod error;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use self::error::ConfigLoadError;
use super::models::{PickerConfig, PickerConfigSource};
use super::validation::{self, ConfigWarnings};

/// Knobs for [`ConfigLoader`]
#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    /// Config file to use instead of the environment and default locations
    pub config_path: Option<PathBuf>,
    /// `.env` file to load; `.env` in the working directory when unset
    pub env_file: Option<PathBuf>,
    /// Directory searched for default config files
    pub search_root: Option<PathBuf>,
}

/// Loads `.env`, resolves the picker config and validates it
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

/// A loaded and validated configuration
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    /// The configuration
    pub config: PickerConfig,
    /// Where it came from
    pub source: PickerConfigSource,
    /// Whether a `.env` file was read
    pub env_file_loaded: bool,
    /// Non-fatal findings
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    /// Loader with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader with explicit options
    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    /// Use this config file
    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    /// Load this `.env` file
    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Search default config files under `root`
    pub fn with_search_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.options.search_root = Some(root.into());
        self
    }

    /// Load `.env`, then the config, then validate it
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        self.load_with(|key| std::env::var(key).ok(), env_file_loaded)
    }

    /// Resolve and validate using `lookup` for environment variables.
    /// `.env` handling is left to the caller.
    pub fn load_with<F>(
        &self,
        lookup: F,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, source) = match &self.options.config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigLoadError::MissingConfig {
                        path: path.clone(),
                    });
                }
                let config = PickerConfig::load_from_file(path)
                    .map_err(ConfigLoadError::Picker)?;
                (config, PickerConfigSource::Explicit(path.clone()))
            }
            None => {
                let root = self
                    .options
                    .search_root
                    .as_deref()
                    .unwrap_or(Path::new("."));
                PickerConfig::load_with(lookup, root)
                    .map_err(ConfigLoadError::Picker)?
            }
        };

        let warnings = validation::validate(&config)?;
        for warning in &warnings.items {
            match &warning.hint {
                Some(hint) => warn!(%hint, "{}", warning.message),
                None => warn!("{}", warning.message),
            }
        }
        debug!(?source, env_file_loaded, "picker configuration loaded");

        Ok(ConfigLoad {
            config,
            source,
            env_file_loaded,
            warnings,
        })
    }
}
