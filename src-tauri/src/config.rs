//! App configuration
//!
//! Read from `pantry.config.json` in the app config dir. Environment
//! variables override the file.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE: &str = "pantry.config.json";

pub const ENV_SCAN_ENDPOINT: &str = "PANTRY_SCAN_ENDPOINT";
pub const ENV_SCAN_TIMEOUT: &str = "PANTRY_SCAN_TIMEOUT_SECS";
pub const ENV_SCAN_UPLOAD: &str = "PANTRY_SCAN_UPLOAD";

const DEFAULT_SCAN_ENDPOINT: &str = "https://script.googleusercontent.com/macros/echo?user_content_key=TVmXEL6UfGrmMwH5gb-bV4COiAhlxkAe0IDEqn-oybVgzjzT4vg12oWQ63yKdpw6bC4Pz0jds-gkPnyE95U-8xQ59--2EH9Sm5_BxDlH2jW0nuo2oDemN9CCS2h10ox_1xSncGQajx_ryfhECjZEnLhN3ZPGFKja603uLLSPSPj0bxhZwS0nRUwqbhvF08wvmTT569xVBR8TmW0KLtCRsdn4LGr5rupaM04eywO1lh-gfUKMdbOdNw&lib=Mvg4JKV_v-rjtjdFGiNcZ6IGwgBN3B_WD";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    /// POST the picked image instead of a bare GET
    pub upload_image: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SCAN_ENDPOINT.to_string(),
            timeout_secs: 20,
            upload_image: false,
        }
    }
}

impl ScanConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub max_file_bytes: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 5 * 1024 * 1024,
            max_files: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub scan: ScanConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Missing file → defaults. Env overrides are applied separately so
    /// rejected values can be logged once the logger is up.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Apply env overrides. Returns the `(variable, value)` pairs that
    /// could not be parsed and were ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<(&'static str, String)> {
        let mut ignored = Vec::new();
        if let Some(endpoint) = lookup(ENV_SCAN_ENDPOINT) {
            if endpoint.trim().is_empty() {
                ignored.push((ENV_SCAN_ENDPOINT, endpoint));
            } else {
                self.scan.endpoint = endpoint.trim().to_string();
            }
        }
        if let Some(raw) = lookup(ENV_SCAN_TIMEOUT) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.scan.timeout_secs = secs,
                _ => ignored.push((ENV_SCAN_TIMEOUT, raw)),
            }
        }
        if let Some(raw) = lookup(ENV_SCAN_UPLOAD) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.scan.upload_image = true,
                "0" | "false" | "no" | "off" => self.scan.upload_image = false,
                _ => ignored.push((ENV_SCAN_UPLOAD, raw)),
            }
        }
        ignored
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_file(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.scan.timeout_secs, 20);
        assert!(!config.scan.upload_image);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "scan": { "endpoint": "http://localhost:9000/scan" } }"#).unwrap();

        let config = AppConfig::load_file(&path).unwrap();
        assert_eq!(config.scan.endpoint, "http://localhost:9000/scan");
        assert_eq!(config.scan.timeout_secs, 20);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(AppConfig::load_file(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = AppConfig::default();
        config.scan.upload_image = true;
        config.log.max_files = 2;
        config.save(&path).unwrap();
        assert_eq!(AppConfig::load_file(&path).unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        let ignored = config.apply_env(env(&[
            (ENV_SCAN_ENDPOINT, " http://127.0.0.1:8080/items "),
            (ENV_SCAN_TIMEOUT, "5"),
            (ENV_SCAN_UPLOAD, "TRUE"),
        ]));
        assert!(ignored.is_empty());
        assert_eq!(config.scan.endpoint, "http://127.0.0.1:8080/items");
        assert_eq!(config.scan.timeout(), Duration::from_secs(5));
        assert!(config.scan.upload_image);
    }

    #[test]
    fn test_bad_env_values_ignored() {
        let mut config = AppConfig::default();
        let ignored = config.apply_env(env(&[
            (ENV_SCAN_ENDPOINT, "  "),
            (ENV_SCAN_TIMEOUT, "soon"),
            (ENV_SCAN_UPLOAD, "maybe"),
        ]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(
            ignored,
            vec![
                (ENV_SCAN_ENDPOINT, "  ".to_string()),
                (ENV_SCAN_TIMEOUT, "soon".to_string()),
                (ENV_SCAN_UPLOAD, "maybe".to_string()),
            ]
        );
    }
}
