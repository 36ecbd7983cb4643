//! Configuration for the swatch picker.
//!
//! Settings come from, in order: an explicit file, the file named by
//! `SWATCH_PICKER_CONFIG_PATH`, inline JSON in `SWATCH_PICKER_CONFIG_JSON`,
//! `swatch-picker.toml` (or `.json`, optionally under `config/`), and finally
//! built-in defaults. A `.env` file is loaded first when present.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{
    ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError,
};
pub use models::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, PickerConfig, PickerConfigSource,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
