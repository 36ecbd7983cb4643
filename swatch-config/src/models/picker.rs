use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};
use swatch_core::{JsonFileStore, PickerOptions, SavedSwatchStore};
use swatch_model::{
    DEFAULT_SAVED_SWATCHES_LIMIT, HueLinkPolicy, SAVED_SWATCHES_KEY, Swatch,
};

/// Environment variable pointing at a config file.
pub const CONFIG_PATH_ENV: &str = "SWATCH_PICKER_CONFIG_PATH";

/// Environment variable holding an inline JSON config.
pub const CONFIG_JSON_ENV: &str = "SWATCH_PICKER_CONFIG_JSON";

const DEFAULT_THROTTLE_WINDOW_MS: u64 = 20;

/// Source that produced the picker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PickerConfigSource {
    /// Built-in defaults
    #[default]
    Default,
    /// File named by [`CONFIG_PATH_ENV`]
    EnvPath(PathBuf),
    /// JSON from [`CONFIG_JSON_ENV`]
    EnvInline,
    /// File passed explicitly by the caller
    Explicit(PathBuf),
    /// File found in a default location
    File(PathBuf),
}

/// Picker settings. Every field is optional in the file; missing fields
/// take the defaults below.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Bound on the saved swatch list. Older entries are evicted first.
    pub saved_swatches_limit: usize,
    /// Minimum spacing (ms) between wheel color updates while dragging.
    /// Lower values track the pointer more closely at the cost of more
    /// change notifications.
    pub throttle_window_ms: u64,
    /// Whether external gradients keep a +/-120 degree offset between stops
    /// (`preserve`) or always get +120 degrees (`reset`).
    pub hue_link: HueLinkPolicy,
    /// Key the saved list is stored under.
    pub storage_key: String,
    /// JSON file holding saved swatches. Defaults to the user data dir.
    pub storage_path: Option<PathBuf>,
    /// Start with interaction disabled.
    pub disabled: bool,
    /// Initial swatch for uncontrolled pickers. Random when absent.
    pub default_swatch: Option<Swatch>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            saved_swatches_limit: DEFAULT_SAVED_SWATCHES_LIMIT,
            throttle_window_ms: DEFAULT_THROTTLE_WINDOW_MS,
            hue_link: HueLinkPolicy::default(),
            storage_key: SAVED_SWATCHES_KEY.to_string(),
            storage_path: None,
            disabled: false,
            default_swatch: None,
        }
    }
}

impl PickerConfig {
    /// Resolve the config from the process environment and the working
    /// directory.
    pub fn load_from_env() -> anyhow::Result<(Self, PickerConfigSource)> {
        Self::load_with(|key| std::env::var(key).ok(), Path::new("."))
    }

    /// Resolve the config using `lookup` for environment variables and
    /// searching default file names under `root`.
    ///
    /// Order: [`CONFIG_PATH_ENV`], [`CONFIG_JSON_ENV`], default files,
    /// built-in defaults.
    pub fn load_with<F>(
        lookup: F,
        root: &Path,
    ) -> anyhow::Result<(Self, PickerConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = Self::load_from_file(&path)?;
            return Ok((config, PickerConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, PickerConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(root) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, PickerConfigSource::File(path)));
        }

        Ok((Self::default(), PickerConfigSource::Default))
    }

    /// Read a TOML or JSON file, picking the format from the extension
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read picker config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid picker config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!(
                        "invalid picker config {}: {}",
                        path.display(),
                        err
                    )
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parse TOML, falling back to JSON
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse picker config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    /// Parse a JSON config
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid picker config json: {err}"))
    }

    fn find_default_file(root: &Path) -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "swatch-picker.toml",
            "swatch-picker.json",
            "config/swatch-picker.toml",
            "config/swatch-picker.json",
        ];

        CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }

    /// Throttle window for wheel moves
    pub fn throttle_window(&self) -> Duration {
        Duration::from_millis(self.throttle_window_ms)
    }

    /// Where saved swatches live: the configured path, else
    /// `<data dir>/swatch-picker/saved-swatches.json`
    pub fn resolved_storage_path(&self) -> Option<PathBuf> {
        self.storage_path.clone().or_else(|| {
            dirs::data_dir().map(|dir| {
                dir.join("swatch-picker").join("saved-swatches.json")
            })
        })
    }

    /// Persistence gateway for the resolved storage path. Without a usable
    /// path the picker runs with an ephemeral saved list.
    pub fn saved_swatch_store(&self) -> SavedSwatchStore {
        match self.resolved_storage_path() {
            Some(path) => {
                SavedSwatchStore::new(Arc::new(JsonFileStore::new(path)))
                    .with_key(self.storage_key.clone())
            }
            None => SavedSwatchStore::unavailable(),
        }
    }

    /// Picker options; `swatch` makes the picker controlled
    pub fn picker_options(&self, swatch: Option<Swatch>) -> PickerOptions {
        PickerOptions {
            swatch,
            default_swatch: self.default_swatch.clone(),
            saved_swatches_limit: self.saved_swatches_limit,
            disabled: self.disabled,
            hue_link: self.hue_link,
        }
    }
}
