//! Saved swatch persistence
//!
//! The picker keeps its saved swatch list under a single key of a
//! string key-value store (the browser's local storage plays this role on the
//! web). [`SavedSwatchStore`] is the gateway: it reads the list once at
//! startup and rewrites it after every change.
//!
//! Storage failures are never fatal. A missing backend behaves like an empty
//! list, malformed entries are dropped one by one, and failed writes are
//! logged and swallowed.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use swatch_model::{
    InternalSwatch, SAVED_SWATCHES_KEY, Swatch, SwatchMode, to_external,
};
use tracing::{debug, warn};

use crate::error::{Result, StoreError, SwatchError};

/// String key-value backend
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> std::result::Result<(), StoreError>;
}

/// Gateway between the picker and its storage backend
#[derive(Clone)]
pub struct SavedSwatchStore {
    backend: Option<Arc<dyn KeyValueStore>>,
    key: String,
}

impl fmt::Debug for SavedSwatchStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SavedSwatchStore")
            .field("available", &self.backend.is_some())
            .field("key", &self.key)
            .finish()
    }
}

impl SavedSwatchStore {
    /// Gateway over `backend` using [`SAVED_SWATCHES_KEY`]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend: Some(backend),
            key: SAVED_SWATCHES_KEY.to_string(),
        }
    }

    /// Gateway with no backend; saved swatches live only in memory
    pub fn unavailable() -> Self {
        Self {
            backend: None,
            key: SAVED_SWATCHES_KEY.to_string(),
        }
    }

    /// Use a different storage key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Storage key holding the list
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether a backend is attached
    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    fn backend(&self) -> Result<&Arc<dyn KeyValueStore>> {
        self.backend.as_ref().ok_or_else(|| {
            SwatchError::PersistenceUnavailable(
                "no storage backend configured".to_string(),
            )
        })
    }

    fn read_raw(&self) -> Result<Option<String>> {
        match self.backend()?.get(&self.key) {
            Ok(raw) => Ok(raw),
            Err(StoreError::Unavailable(reason)) => {
                Err(SwatchError::PersistenceUnavailable(reason))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Read and parse the saved list.
    ///
    /// Entries that are not valid swatches are skipped; only backend failures
    /// are reported.
    pub fn try_load(&self) -> Result<Vec<InternalSwatch>> {
        let Some(raw) = self.read_raw()? else {
            return Ok(Vec::new());
        };

        let parsed: Value = serde_json::from_str(&raw).map_err(StoreError::from)?;
        let Value::Array(entries) = parsed else {
            warn!(key = %self.key, "saved swatches are not a JSON array, ignoring");
            return Ok(Vec::new());
        };

        let total = entries.len();
        let swatches: Vec<InternalSwatch> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| parse_entry(index, entry))
            .collect();

        if swatches.len() < total {
            warn!(
                key = %self.key,
                dropped = total - swatches.len(),
                kept = swatches.len(),
                "dropped invalid saved swatches"
            );
        }
        Ok(swatches)
    }

    /// Read the saved list, degrading to an empty list on any failure
    pub fn load(&self) -> Vec<InternalSwatch> {
        match self.try_load() {
            Ok(swatches) => swatches,
            Err(SwatchError::PersistenceUnavailable(reason)) => {
                debug!(%reason, "saved swatches unavailable, starting empty");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, "error reading saved swatches");
                Vec::new()
            }
        }
    }

    /// Serialize and write the list
    pub fn try_persist(&self, swatches: &[InternalSwatch]) -> Result<()> {
        let backend = self.backend()?;
        let external: Vec<Swatch> = swatches.iter().map(to_external).collect();
        let raw = serde_json::to_string(&external).map_err(StoreError::from)?;
        match backend.set(&self.key, &raw) {
            Ok(()) => Ok(()),
            Err(StoreError::Unavailable(reason)) => {
                Err(SwatchError::PersistenceUnavailable(reason))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Write the list, logging instead of returning failures
    pub fn persist(&self, swatches: &[InternalSwatch]) {
        match self.try_persist(swatches) {
            Ok(()) => {
                debug!(key = %self.key, count = swatches.len(), "saved swatches persisted");
            }
            Err(SwatchError::PersistenceUnavailable(_)) => {}
            Err(err) => warn!(error = %err, "error saving swatches"),
        }
    }

    /// Mode of the most recently saved entry, without parsing its colors
    pub fn last_saved_mode(&self) -> Option<SwatchMode> {
        let raw = match self.read_raw() {
            Ok(Some(raw)) => raw,
            Ok(None) | Err(SwatchError::PersistenceUnavailable(_)) => {
                return None;
            }
            Err(err) => {
                warn!(error = %err, "error reading last mode from saved swatches");
                return None;
            }
        };

        let parsed: Value = serde_json::from_str(&raw).ok()?;
        let first = parsed.as_array()?.first()?;
        serde_json::from_value(first.get("mode")?.clone()).ok()
    }
}

fn parse_entry(index: usize, entry: Value) -> Option<InternalSwatch> {
    let swatch: Swatch = match serde_json::from_value(entry) {
        Ok(swatch) => swatch,
        Err(err) => {
            debug!(index, error = %err, "skipping malformed saved swatch");
            return None;
        }
    };
    match swatch.to_internal() {
        Ok(internal) => Some(internal),
        Err(err) => {
            debug!(index, error = %err, "skipping saved swatch with invalid color");
            None
        }
    }
}
