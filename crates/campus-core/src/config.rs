use crate::{CampusError, CampusResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_PER_PAGE: u32 = 10;
const DEFAULT_DASHBOARD_URL: &str = "/dashboard";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the list endpoint used when none is given explicitly.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub per_page: Option<u32>,
    /// Whether the backend counts pages from zero.
    #[serde(default)]
    pub zero_indexed: Option<bool>,
    #[serde(default)]
    pub dashboard_url: Option<String>,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/campus/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("campus/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("campus\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user configuration, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: impl AsRef<Path>) -> CampusResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| CampusError::Config(e.to_string()))
    }

    pub fn effective_per_page(&self) -> u32 {
        self.per_page
            .filter(|per_page| *per_page > 0)
            .unwrap_or(DEFAULT_PER_PAGE)
    }

    pub fn effective_zero_indexed(&self) -> bool {
        self.zero_indexed.unwrap_or(false)
    }

    pub fn effective_dashboard_url(&self) -> &str {
        self.dashboard_url.as_deref().unwrap_or(DEFAULT_DASHBOARD_URL)
    }

    pub fn effective_request_timeout_secs(&self) -> u64 {
        self.request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.effective_per_page(), 10);
        assert!(!config.effective_zero_indexed());
        assert_eq!(config.effective_dashboard_url(), "/dashboard");
        assert_eq!(config.effective_request_timeout_secs(), 30);
    }

    #[test]
    fn test_zero_per_page_falls_back_to_default() {
        let config = ClientConfig {
            per_page: Some(0),
            ..Default::default()
        };
        assert_eq!(config.effective_per_page(), 10);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
base_url = "https://learn.example.org/api/v1/teams/"
per_page = 25
zero_indexed = true
dashboard_url = "/home"
"#,
        )
        .unwrap();

        let config = ClientConfig::load_from(&path).unwrap();
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://learn.example.org/api/v1/teams/")
        );
        assert_eq!(config.effective_per_page(), 25);
        assert!(config.effective_zero_indexed());
        assert_eq!(config.effective_dashboard_url(), "/home");
        assert_eq!(config.effective_request_timeout_secs(), 30);
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "per_page = \"many\"").unwrap();

        let err = ClientConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, CampusError::Config(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        let err = ClientConfig::load_from(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CampusError::Io(_)));
    }
}
