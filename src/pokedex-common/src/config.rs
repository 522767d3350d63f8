//! Configuration file loading.
//!
//! The config file is TOML. Lookup order:
//! 1. an explicit path (the `--config` flag)
//! 2. `POKEDEX_CONFIG`
//! 3. `<pokedex home>/config.toml`
//!
//! A missing file yields defaults. Environment overrides are applied on top
//! of whatever was loaded.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::dirs::default_config_file;

/// Public Pokémon API root.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Debounce window applied before an evolution chain load starts.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Environment variable for a custom config file path.
pub const POKEDEX_CONFIG_ENV: &str = "POKEDEX_CONFIG";

/// Environment variable overriding `api_base_url`.
pub const POKEDEX_API_URL_ENV: &str = "POKEDEX_API_URL";

/// Environment variable overriding `debounce_ms`.
pub const POKEDEX_DEBOUNCE_MS_ENV: &str = "POKEDEX_DEBOUNCE_MS";

/// Result type for config operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Sprite display flags stored in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prefer shiny sprites
    #[serde(default)]
    pub shiny: bool,
    /// Prefer back-facing sprites
    #[serde(default)]
    pub back: bool,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexConfig {
    /// Base URL of the Pokémon API, without a trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Debounce window for evolution chain loads, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Per-request HTTP timeout, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Log level used when neither the CLI nor the environment sets one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            debounce_ms: default_debounce_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            log_level: None,
            display: DisplayConfig::default(),
        }
    }
}

impl PokedexConfig {
    /// Load configuration following the documented lookup order and apply
    /// environment overrides.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        let path = Self::resolve_path(explicit);

        let mut config = match path {
            // An explicitly requested file must exist.
            Some(path) if explicit.is_some() => Self::from_file(&path)?,
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(path = %path.display(), "No config file, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// The config file `load` reads: `explicit`, then `POKEDEX_CONFIG`, then
    /// `config.toml` in the Pokedex home. The file need not exist.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| {
                std::env::var(POKEDEX_CONFIG_ENV)
                    .ok()
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(default_config_file)
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        config.api_base_url = normalize_base_url(&config.api_base_url);
        Ok(config)
    }

    /// Apply `POKEDEX_API_URL` and `POKEDEX_DEBOUNCE_MS`.
    pub fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        if let Ok(url) = std::env::var(POKEDEX_API_URL_ENV) {
            if !url.is_empty() {
                self.api_base_url = normalize_base_url(&url);
            }
        }

        if let Ok(value) = std::env::var(POKEDEX_DEBOUNCE_MS_ENV) {
            self.debounce_ms = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnv {
                    var: POKEDEX_DEBOUNCE_MS_ENV,
                    value,
                })?;
        }

        Ok(())
    }

    /// Set the API base URL, normalising the trailing slash.
    pub fn set_api_base_url(&mut self, url: &str) {
        self.api_base_url = normalize_base_url(url);
    }

    /// Debounce window as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// HTTP request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
