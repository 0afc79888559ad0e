use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchableError};
use crate::search::debounce::DEFAULT_QUIET_PERIOD;
use crate::suggestions::DEFAULT_SHORT_QUERY_THRESHOLD;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

impl Config {
    /// Defaults, then the global file (or the explicit path / `SEARCHABLE_CONFIG`
    /// when given), then environment overrides.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("SEARCHABLE_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                SearchableError::MissingConfig(format!("config file {}", path.display()))
            })?;
            config.merge_patch(patch);
        } else if let Some(global) = Self::load_global()? {
            config.merge_patch(global);
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parse a config file on top of the defaults, without env overrides.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        if let Some(patch) = Self::load_patch(path)? {
            config.merge_patch(patch);
        }
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("searchable/config.toml"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::global_path() {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path).map_err(|err| {
            SearchableError::Config(format!("read config {}: {err}", path.display()))
        })?;
        let patch = toml::from_str(&raw).map_err(|err| {
            SearchableError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
        if let Some(patch) = patch.view {
            self.view.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_u64("SEARCHABLE_DEBOUNCE_MS")? {
            self.search.debounce_ms = value;
        }
        if let Some(value) = env_usize("SEARCHABLE_SHORT_QUERY_THRESHOLD")? {
            self.search.short_query_threshold = value;
        }
        if let Some(value) = env_string("SEARCHABLE_TITLE") {
            self.view.title = value;
        }
        if let Some(value) = env_string("SEARCHABLE_PROMPT") {
            self.view.prompt = value;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.search.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(SearchableError::Config(format!(
                "search.debounce_ms {} exceeds {MAX_DEBOUNCE_MS}",
                self.search.debounce_ms
            )));
        }
        Ok(())
    }
}

/// Upper bound on the quiet period; anything longer reads as a hang.
const MAX_DEBOUNCE_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_short_query_threshold")]
    pub short_query_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            short_query_threshold: default_short_query_threshold(),
        }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.debounce_ms {
            self.debounce_ms = value;
        }
        if let Some(value) = patch.short_query_threshold {
            self.short_query_threshold = value;
        }
    }
}

fn default_debounce_ms() -> u64 {
    u64::try_from(DEFAULT_QUIET_PERIOD.as_millis()).unwrap_or(300)
}

const fn default_short_query_threshold() -> usize {
    DEFAULT_SHORT_QUERY_THRESHOLD
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            prompt: default_prompt(),
        }
    }
}

impl ViewConfig {
    fn merge(&mut self, patch: ViewPatch) {
        if let Some(value) = patch.title {
            self.title = value;
        }
        if let Some(value) = patch.prompt {
            self.prompt = value;
        }
    }
}

fn default_title() -> String {
    "Restaurants".to_string()
}

fn default_prompt() -> String {
    "Search restaurants...".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub search: Option<SearchPatch>,
    pub view: Option<ViewPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub debounce_ms: Option<u64>,
    pub short_query_threshold: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ViewPatch {
    pub title: Option<String>,
    pub prompt: Option<String>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse::<u64>().map(Some).map_err(|err| {
            SearchableError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value.trim().parse::<usize>().map(Some).map_err(|err| {
            SearchableError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}
