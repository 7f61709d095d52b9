/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed application configuration
[POS]:    Configuration layer - API endpoint, display zone, storage
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use todo_adapter::ClientConfig;

use crate::deadline::{DEFAULT_OFFSET_MINUTES, DEFAULT_ZONE_LABEL, DisplayZone};
use crate::state::storage::TOKEN_KEY;

/// Top-level configuration for the add-task client
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Remote API settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL; `/api/task/create` is appended
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout; absent means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Zone used to read deadlines and render previews
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Offset from UTC in minutes (330 = UTC+05:30)
    #[serde(default = "default_offset_minutes")]
    pub offset_minutes: i32,
    #[serde(default = "default_zone_label")]
    pub label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            offset_minutes: default_offset_minutes(),
            label: default_zone_label(),
        }
    }
}

/// Where the access token lives
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Storage file; defaults to the platform data directory
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            token_key: default_token_key(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_offset_minutes() -> i32 {
    DEFAULT_OFFSET_MINUTES
}

fn default_zone_label() -> String {
    DEFAULT_ZONE_LABEL.to_string()
}

fn default_token_key() -> String {
    TOKEN_KEY.to_string()
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, else the default location if it exists,
    /// else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api.base_url.trim().is_empty() {
            bail!("api.base_url must not be empty");
        }
        if self.api.connect_timeout_secs == 0 {
            bail!("api.connect_timeout_secs must be greater than 0");
        }
        if self.api.timeout_secs == Some(0) {
            bail!("api.timeout_secs must be greater than 0 when set");
        }
        if self.storage.token_key.trim().is_empty() {
            bail!("storage.token_key must not be empty");
        }
        self.display_zone()?;
        Ok(())
    }

    pub fn display_zone(&self) -> anyhow::Result<DisplayZone> {
        DisplayZone::new(self.display.offset_minutes, self.display.label.clone())
            .context("invalid display.offset_minutes")
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.api.timeout_secs.map(Duration::from_secs),
            connect_timeout: Duration::from_secs(self.api.connect_timeout_secs),
        }
    }
}

/// `<config_dir>/todo-form/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("todo-form").join("config.yaml"))
}
