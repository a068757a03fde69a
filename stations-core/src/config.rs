use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Base URL of the OpenWeather station API.
pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/3.0";

/// Default listen address for the GraphQL server.
pub const DEFAULT_LISTEN: &str = "0.0.0.0:4000";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// base_url = "http://api.openweathermap.org/data/3.0"
/// listen = "0.0.0.0:4000"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeather API key, sent as the `appid` query parameter.
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Address the GraphQL server binds to.
    #[serde(default = "default_listen")]
    pub listen: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_listen() -> String {
    DEFAULT_LISTEN.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            listen: default_listen(),
        }
    }
}

impl Config {
    /// Return the API key, or a helpful error if none is configured.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No OpenWeather API key configured.\n\
                 Hint: set `api_key` in {}.",
                Self::config_file_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "the config file".to_string())
            )
        })
    }

    /// Load config from the platform config directory, or return defaults
    /// if the file doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    /// Load config from an explicit path (used by the `--config` flag).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-stations", "stations-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::default();

        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.listen, DEFAULT_LISTEN);
    }

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No OpenWeather API key configured"));
        assert!(err.to_string().contains("Hint:"));
    }

    #[test]
    fn parse_applies_serde_defaults() {
        let cfg: Config = toml::from_str(r#"api_key = "KEY""#).expect("minimal config must parse");

        assert_eq!(cfg.api_key().unwrap(), "KEY");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.listen, DEFAULT_LISTEN);
    }

    #[test]
    fn parse_full_config() {
        let cfg: Config = toml::from_str(
            r#"
            api_key = "KEY"
            base_url = "http://localhost:9999/data/3.0"
            listen = "127.0.0.1:8080"
            "#,
        )
        .expect("full config must parse");

        assert_eq!(cfg.base_url, "http://localhost:9999/data/3.0");
        assert_eq!(cfg.listen, "127.0.0.1:8080");
    }

    #[test]
    fn load_from_missing_file_returns_defaults() {
        let cfg = Config::load_from(Path::new("/nonexistent/stations/config.toml"))
            .expect("missing file should fall back to defaults");

        assert!(cfg.api_key.is_none());
    }
}
