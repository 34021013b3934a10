// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration management.
//!
//! Configuration is stored in `$XDG_CONFIG_HOME/hustlehub/config.toml`
//! (overridable with `HH_CONFIG` or `--config`) and includes:
//! - `offline`: Never try the network; every posting becomes a draft
//! - `[api]`: Backend base URL, bearer token and request timeout
//! - `[connectivity]`: How often and how patiently to probe the backend
//! - `[drafts]`: Where the draft store lives
//!
//! A missing file means defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "hustlehub";
const CONFIG_FILE_NAME: &str = "config.toml";
const DRAFTS_FILE_NAME: &str = "drafts.jsonl";
/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = crate::env::vars::HH_CONFIG;

/// Client configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Treat the device as offline regardless of the network.
    #[serde(default)]
    pub offline: bool,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
    #[serde(default)]
    pub drafts: DraftsConfig,
}

/// Backend API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend (default: `http://127.0.0.1:8000`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Host and port of the backend, for reachability probes. IPv6 hosts
    /// come back without their URL brackets.
    pub fn host_port(&self) -> Result<(String, u16)> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid api.base_url '{}': {e}", self.base_url)))?;
        let host = url
            .host_str()
            .ok_or_else(|| Error::Config(format!("api.base_url '{}' has no host", self.base_url)))?;
        let port = url.port_or_known_default().ok_or_else(|| {
            Error::Config(format!("api.base_url '{}' has no port", self.base_url))
        })?;
        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);
        Ok((host.to_string(), port))
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Connectivity probe settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityConfig {
    /// Delay between probes in milliseconds (default: 5000).
    #[serde(default = "default_probe_interval_ms")]
    pub probe_interval_ms: u64,
    /// Max time to wait for a probe in milliseconds (default: 2000).
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        ConnectivityConfig {
            probe_interval_ms: default_probe_interval_ms(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

impl ConnectivityConfig {
    pub fn probe_interval(&self) -> Duration {
        Duration::from_millis(self.probe_interval_ms)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

fn default_probe_interval_ms() -> u64 {
    5_000
}

fn default_probe_timeout_ms() -> u64 {
    2_000
}

/// Draft store settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftsConfig {
    /// Path of the drafts file (default: `$XDG_DATA_HOME/hustlehub/drafts.jsonl`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from `path`, falling back to defaults if the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let config: Config = toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Checks values serde cannot.
    pub fn validate(&self) -> Result<()> {
        let url = &self.api.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "invalid api.base_url '{}': must start with http:// or https://",
                url
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(Error::Config("api.timeout_secs must be at least 1".to_string()));
        }
        if self.connectivity.probe_interval_ms == 0 {
            return Err(Error::Config(
                "connectivity.probe_interval_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Path of the drafts file.
    pub fn drafts_path(&self) -> PathBuf {
        self.drafts.path.clone().unwrap_or_else(default_drafts_path)
    }
}

/// Resolve the config file path: explicit flag, then `HH_CONFIG`, then the
/// user config directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = crate::env::config_path() {
        return path;
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Default location of the drafts file.
pub fn default_drafts_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(DRAFTS_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
