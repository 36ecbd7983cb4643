use thiserror::Error;

use super::models::PickerConfig;

const MAX_REASONABLE_THROTTLE_MS: u64 = 250;
const MAX_REASONABLE_SAVED_LIMIT: usize = 100;

/// Settings that would leave the picker unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigGuardRailError {
    #[error("saved_swatches_limit must be at least 1")]
    /// Nothing could ever be saved
    ZeroSavedSwatchesLimit,
    #[error("storage_key must not be empty")]
    /// The saved list would be written under an empty key
    EmptyStorageKey,
}

/// A setting that works but is probably not what was intended
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// What looks off
    pub message: String,
    /// How to fix it
    pub hint: Option<String>,
}

/// Warnings collected while validating
#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    /// Collected warnings
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    /// Add a warning without a hint
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    /// Add a warning with a hint
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// Whether nothing was flagged
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reject unusable settings and flag odd ones.
pub fn validate(
    config: &PickerConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    if config.saved_swatches_limit == 0 {
        return Err(ConfigGuardRailError::ZeroSavedSwatchesLimit);
    }
    if config.storage_key.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyStorageKey);
    }

    let mut warnings = ConfigWarnings::default();
    if config.throttle_window_ms == 0 {
        warnings.push_with_hint(
            "throttle_window_ms is 0; every pointer move updates the swatch",
            "Use the default of 20 ms unless the host already rate-limits input",
        );
    } else if config.throttle_window_ms > MAX_REASONABLE_THROTTLE_MS {
        warnings.push(format!(
            "throttle_window_ms of {} ms makes dragging visibly lag",
            config.throttle_window_ms
        ));
    }
    if config.saved_swatches_limit > MAX_REASONABLE_SAVED_LIMIT {
        warnings.push(format!(
            "saved_swatches_limit of {} is unusually large",
            config.saved_swatches_limit
        ));
    }
    Ok(warnings)
}
