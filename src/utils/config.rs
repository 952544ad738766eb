//! Application configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Value shipped in example configs; treated the same as no key at all.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_YOUTUBE_API_KEY";

/// Environment variable that overrides the key from the settings file.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// YouTube Data API key
    pub api_key: Option<String>,

    /// Base URL of the metadata service
    pub api_base_url: String,

    /// Per-request timeout; transport default when unset
    pub request_timeout_secs: Option<u64>,

    /// How long error notices stay on screen
    pub notice_duration_secs: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
            notice_duration_secs: 5,
        }
    }
}

impl AppSettings {
    /// Load settings from `path`, falling back to defaults when the file is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: AppSettings = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;

        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// A non-blank env value replaces whatever the file said.
    pub fn apply_env_override(&mut self, value: Option<String>) {
        if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
            debug!("Using API key from {}", API_KEY_ENV);
            self.api_key = Some(key);
        }
    }

    /// The configured credential, with blank and placeholder values treated as absent.
    pub fn credential(&self) -> Option<String> {
        normalize_credential(self.api_key.as_deref())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_duration_secs)
    }
}

/// Map a raw configured key to `Some` only when it is usable.
pub fn normalize_credential(raw: Option<&str>) -> Option<String> {
    let key = raw?.trim();
    if key.is_empty() || key == API_KEY_PLACEHOLDER {
        None
    } else {
        Some(key.to_string())
    }
}

/// `<config dir>/fetchflicks/settings.json`
pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fetchflicks")
        .join("settings.json")
}
