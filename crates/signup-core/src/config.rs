//! Configuration management.
//!
//! Loads configuration from ${SIGNUP_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Returns the default config template with comments.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for configuration and data files.
    //!
    //! SIGNUP_HOME resolution order:
    //! 1. SIGNUP_HOME environment variable (if set)
    //! 2. ~/.config/signup (default)
    //! 3. ./.signup when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the signup home directory.
    pub fn signup_home() -> PathBuf {
        if let Ok(home) = std::env::var("SIGNUP_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".signup"),
            |h| h.join(".config").join("signup"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        signup_home().join("config.toml")
    }

    /// Returns the path to the cookie jar.
    pub fn cookies_path() -> PathBuf {
        signup_home().join("cookies.json")
    }

    /// Returns the directory for TUI log files.
    pub fn logs_dir() -> PathBuf {
        signup_home().join("logs")
    }
}

/// How long transient notices stay on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Login/logout notices, in seconds.
    pub login_secs: u64,
    /// Signup/unregister notices, in seconds.
    pub registration_secs: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            login_secs: 3,
            registration_secs: 5,
        }
    }
}

impl NoticeConfig {
    pub fn login(&self) -> Duration {
        Duration::from_secs(self.login_secs)
    }

    pub fn registration(&self) -> Duration {
        Duration::from_secs(self.registration_secs)
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the sign-up service.
    pub base_url: String,

    /// Notice timings.
    pub notices: NoticeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            notices: NoticeConfig::default(),
        }
    }
}

impl Config {
    pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
    pub const BASE_URL_ENV: &str = "SIGNUP_BASE_URL";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the base URL with precedence: flag > env > config.
    ///
    /// # Errors
    /// Returns an error if the winning value is not a valid URL.
    pub fn resolve_base_url(&self, flag: Option<&str>) -> Result<String> {
        let env = std::env::var(Self::BASE_URL_ENV).ok();
        let candidate = [flag, env.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or_else(|| self.base_url.trim());

        url::Url::parse(candidate)
            .with_context(|| format!("Invalid base URL: {candidate}"))?;
        Ok(candidate.to_string())
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    ///
    /// # Errors
    /// Returns an error if the file exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nonexistent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.notices.login(), Duration::from_secs(3));
        assert_eq!(config.notices.registration(), Duration::from_secs(5));
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[notices]\nregistration_secs = 8\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.base_url, Config::DEFAULT_BASE_URL);
        assert_eq!(config.notices.login_secs, 3);
        assert_eq!(config.notices.registration_secs, 8);
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "base_url = [").unwrap();
        assert!(Config::load_from(&config_path).is_err());
    }

    #[test]
    fn test_default_template_matches_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("base_url = \"http://localhost:8000\""));
        assert!(contents.contains("registration_secs = 5"));
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();
        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_flag_wins_over_config() {
        let config = Config {
            base_url: "http://config.example".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config
                .resolve_base_url(Some("http://flag.example"))
                .unwrap(),
            "http://flag.example"
        );
    }

    #[test]
    fn test_invalid_flag_url_fails() {
        let config = Config::default();
        assert!(config.resolve_base_url(Some("not a url")).is_err());
    }
}
