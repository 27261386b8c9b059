/// Application configuration
///
/// Loaded once at startup and read-only afterwards. Sources, in order:
/// - Built-in defaults
/// - `config.json` in the user's config directory:
///   - Linux: ~/.config/vmware-index/config.json
///   - macOS: ~/Library/Application Support/vmware-index/config.json
///   - Windows: %APPDATA%\vmware-index\config.json
/// - `VMWARE_INDEX_API_BASE` environment variable

use log::{info, warn};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::error::ConfigError;

/// Environment variable overriding the API base URL
pub const API_BASE_ENV: &str = "VMWARE_INDEX_API_BASE";

const DEFAULT_API_BASE: &str = "http://localhost:3000/";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Origin serving `/api/getProductVersions` and `/api/download-details`
    pub api_base: String,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Parse from a JSON config document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the config file at `path`, or defaults if it does not exist
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// API base as a URL, always ending in `/`
    pub fn api_base_url(&self) -> Result<Url, ConfigError> {
        let mut base = self.api_base.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base).map_err(|source| ConfigError::InvalidApiBase {
            url: self.api_base.clone(),
            source,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Path of the config file, if a config directory can be determined
pub fn config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("vmware-index");
    path.push("config.json");
    Some(path)
}

fn load() -> Result<AppConfig, ConfigError> {
    let mut config = match config_path() {
        Some(path) => AppConfig::from_file(&path)?,
        None => AppConfig::default(),
    };

    if let Ok(base) = std::env::var(API_BASE_ENV) {
        if !base.trim().is_empty() {
            config.api_base = base;
        }
    }

    // Reject an unusable base now rather than on the first request
    config.api_base_url()?;
    Ok(config)
}

/// Process-wide configuration, loaded on first access.
///
/// A broken config file or base URL is logged and replaced by defaults.
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(|| match load() {
        Ok(config) => {
            info!("⚙️  Using API at {}", config.api_base);
            config
        }
        Err(e) => {
            warn!("{} - falling back to defaults", e);
            AppConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"api_base": "https://vmw.example.org"}"#).unwrap();
        assert_eq!(config.api_base, "https://vmw.example.org");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            AppConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_api_base_gets_trailing_slash() {
        let config = AppConfig {
            api_base: "https://vmw.example.org/index".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(
            config.api_base_url().unwrap().as_str(),
            "https://vmw.example.org/index/"
        );
    }

    #[test]
    fn test_invalid_api_base() {
        let config = AppConfig {
            api_base: "not a url".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            config.api_base_url(),
            Err(ConfigError::InvalidApiBase { .. })
        ));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::from_file(Path::new("/nonexistent/vmware-index/config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
