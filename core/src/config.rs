//! Configuration
//!
//! TOML configuration file with environment overrides. Everything has a
//! default, so the application runs with no config file at all.
//!
//! Search order per field: config file value, then `HERODEX_*` environment
//! variable, then the built-in default.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Default service endpoint.
const DEFAULT_API_BASE: &str = "https://www.superheroapi.com/api";

/// Default API token for the public Superhero API.
const DEFAULT_API_TOKEN: &str = "91e2e541450bf6936653103a81dacd0e";

/// Default passphrase for the password gate.
const DEFAULT_PASSPHRASE: &str = "kronos";

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Service base URL, without trailing slash.
    pub api_base: String,
    /// API key embedded in the URL path.
    pub api_token: String,
    /// Passphrase for the password gate.
    pub passphrase: String,
    /// Directory PDF exports default into.
    pub export_dir: PathBuf,
    /// Optional ASCII-art banner file for the menu screen.
    pub banner: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_token: DEFAULT_API_TOKEN.to_string(),
            passphrase: DEFAULT_PASSPHRASE.to_string(),
            export_dir: default_export_dir(),
            banner: None,
        }
    }
}

impl AppConfig {
    /// Whether `input` matches the configured passphrase.
    ///
    /// Comparison is case-insensitive with all whitespace stripped, so the
    /// spaced-out echo of the password entry never changes the answer.
    #[must_use]
    pub fn passphrase_matches(&self, input: &str) -> bool {
        let strip = |s: &str| {
            s.chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_lowercase()
        };
        strip(input) == strip(&self.passphrase)
    }

    /// Apply `HERODEX_*` environment overrides on top of `self`.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = std::env::var("HERODEX_API_BASE") {
            self.api_base = v;
        }
        if let Ok(v) = std::env::var("HERODEX_API_TOKEN") {
            self.api_token = v;
        }
        if let Ok(v) = std::env::var("HERODEX_PASSPHRASE") {
            self.passphrase = v;
        }
        if let Ok(v) = std::env::var("HERODEX_EXPORT_DIR") {
            self.export_dir = PathBuf::from(v);
        }
        if let Ok(v) = std::env::var("HERODEX_BANNER") {
            self.banner = Some(PathBuf::from(v));
        }
        self
    }
}

/// On-disk config shape; every field optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_base: Option<String>,
    api_token: Option<String>,
    passphrase: Option<String>,
    export_dir: Option<PathBuf>,
    banner: Option<PathBuf>,
}

impl ConfigFile {
    fn merge_into(self, mut config: AppConfig) -> AppConfig {
        if let Some(v) = self.api_base {
            config.api_base = v;
        }
        if let Some(v) = self.api_token {
            config.api_token = v;
        }
        if let Some(v) = self.passphrase {
            config.passphrase = v;
        }
        if let Some(v) = self.export_dir {
            config.export_dir = v;
        }
        if let Some(v) = self.banner {
            config.banner = Some(v);
        }
        config
    }
}

/// Default config file location: `$XDG_CONFIG_HOME/herodex/config.toml`.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("herodex").join("config.toml"))
}

/// Default export directory: `~/Documents/HerodexExports`.
fn default_export_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("HerodexExports")
}

/// Load configuration from the default location plus env overrides.
///
/// A missing config file is not an error; defaults apply.
///
/// # Errors
///
/// Returns [`ConfigError`] when a config file exists but cannot be read or
/// parsed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let config = match default_config_path() {
        Some(path) if path.exists() => load_config_from_path(&path)?,
        _ => AppConfig::default(),
    };
    Ok(config.with_env_overrides())
}

/// Load configuration from an explicit path, merged over defaults.
///
/// Environment overrides are *not* applied here; tests rely on this being
/// deterministic.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file cannot be read or parsed.
pub fn load_config_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ConfigFile = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.merge_into(AppConfig::default()))
}
