use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Environment override for the backend address.
pub const API_URL_ENV: &str = "OBRAS_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_true")]
    pub camera_enabled: bool,
    #[serde(default = "default_true")]
    pub location_enabled: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}
fn default_true() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            camera_enabled: true,
            location_enabled: true,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.obras`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".obras")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("obras.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &std::path::Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Resolve the backend address once: flag > env > file > default.
    pub fn resolve_api_url(&mut self, flag: Option<&str>) {
        if let Some(url) = flag {
            self.api_url = url.to_string();
        } else if let Ok(url) = env::var(API_URL_ENV)
            && !url.trim().is_empty()
        {
            self.api_url = url;
        }
    }

    /// Problems that would prevent the client from working.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        match reqwest::Url::parse(&self.api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => problems.push(format!(
                "api_url: unsupported scheme '{}' (use http or https)",
                url.scheme()
            )),
            Err(e) => problems.push(format!("api_url: {e}")),
        }

        if self.log_level.parse::<LevelFilter>().is_err() {
            problems.push(format!(
                "log_level: '{}' is not one of off, error, warn, info, debug, trace",
                self.log_level
            ));
        }

        problems
    }

    /// Write the configuration file, creating the directory if needed
    pub fn save(&self) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("cannot serialize config: {e}")))?;
        let path = Self::config_file();
        fs::write(&path, yaml)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("api_url: http://10.0.0.2:5000\n").unwrap();
        assert_eq!(cfg.api_url, "http://10.0.0.2:5000");
        assert!(cfg.camera_enabled);
        assert_eq!(cfg.log_level, "warn");
    }

    #[test]
    fn flag_wins_over_file() {
        let mut cfg = Config::default();
        cfg.resolve_api_url(Some("http://backend:5000"));
        assert_eq!(cfg.api_url, "http://backend:5000");
    }

    #[test]
    fn validate_flags_bad_url_and_level() {
        let cfg = Config {
            api_url: "ftp://x".into(),
            log_level: "loud".into(),
            ..Config::default()
        };
        let problems = cfg.validate();
        assert_eq!(problems.len(), 2, "{problems:?}");
        assert!(Config::default().validate().is_empty());
    }
}
