use std::fmt;

use swatch_model::ColorParseError;
use thiserror::Error;

/// Identifies one [`SwatchPicker`](crate::SwatchPicker) instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PickerId(pub(crate) usize);

impl fmt::Display for PickerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "picker#{}", self.0)
    }
}

/// Errors surfaced by the picker and its sub-components
#[derive(Error, Debug)]
pub enum SwatchError {
    /// A color string could not be parsed
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(#[from] ColorParseError),

    /// No storage backend is reachable
    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    /// A sub-component was driven with a picker other than the one it was
    /// created for
    #[error(
        "{component} components must be used with the SwatchPicker they were created for (bound to {expected}, got {found})"
    )]
    Misuse {
        /// Sub-component name
        component: &'static str,
        /// Picker the component is bound to
        expected: PickerId,
        /// Picker it was called with
        found: PickerId,
    },

    /// The storage backend failed
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Errors produced by [`KeyValueStore`](crate::store::KeyValueStore)
/// backends
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend cannot be used in this environment
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    /// Reading or writing the backing file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing data is not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for picker operations
pub type Result<T> = std::result::Result<T, SwatchError>;
