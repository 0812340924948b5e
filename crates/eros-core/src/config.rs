//! Configuration management for Eros.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration.
///
/// This is loaded from `~/.config/eros/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General application settings
    pub general: GeneralConfig,
    /// Company registry lookup settings
    pub registry: RegistryConfig,
    /// Embedded contact section settings
    pub lead: LeadConfig,
    /// Exit-intent popup settings
    pub popup: PopupConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// if the file does not exist.
    pub fn load_from(config_path: &Path) -> ConfigResult<Self> {
        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(config_path)?;
            let config: Self = toml::from_str(&contents)?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `EROS_REGISTRY_URL`: Override the registry base URL
    /// - `EROS_REGISTRY_TIMEOUT_SECS`: Override the lookup timeout (0 = transport default)
    /// - `EROS_POPUP_ENABLED`: Override exit-intent popup (true/false)
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Apply `EROS_*` environment overrides on top of the current values.
    ///
    /// Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("EROS_REGISTRY_URL") {
            tracing::debug!("Override registry.base_url from env: {}", url);
            self.registry.base_url = url;
        }

        if let Ok(val) = std::env::var("EROS_REGISTRY_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse() {
                self.registry.timeout_secs = secs;
                tracing::debug!("Override registry.timeout_secs from env: {}", secs);
            }
        }

        if let Ok(val) = std::env::var("EROS_POPUP_ENABLED") {
            if let Ok(enabled) = val.parse() {
                self.popup.enabled = enabled;
                tracing::debug!("Override popup.enabled from env: {}", enabled);
            }
        }
    }

    /// Check values that serde alone cannot constrain.
    pub fn validate(&self) -> ConfigResult<()> {
        let url = self.registry.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "registry.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "registry.base_url".to_string(),
                reason: format!("must be an http(s) URL, got '{url}'"),
            });
        }
        Ok(())
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path.
    pub fn save_to(&self, config_path: &Path) -> ConfigResult<()> {
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/eros/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("br", "eros", "eros").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_filter: "info,eros=debug".to_string(),
        }
    }
}

/// Company registry lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Base URL of the public CNPJ registry; the digits are appended as a path segment
    pub base_url: String,
    /// Request timeout in seconds (0 = leave it to the transport)
    pub timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.opencnpj.org".to_string(),
            timeout_secs: 0,
            user_agent: concat!("eros/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Embedded contact section settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadConfig {
    /// Whether the contact section offers the lookup form
    pub contact_section_enabled: bool,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            contact_section_enabled: true,
        }
    }
}

/// Exit-intent popup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    /// Whether the popup may open at all
    pub enabled: bool,
    /// Distance in pixels from the right edge that still counts as leaving
    pub edge_tolerance_px: u32,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            edge_tolerance_px: 1,
        }
    }
}
