// src/config.rs

//! Client configuration
//!
//! Settings are resolved in this order, later sources winning:
//!
//! 1. built-in defaults
//! 2. the config file (`--config PATH`, or `<config dir>/receitas/config.toml`)
//! 3. the `RECEITAS_API_URL` environment variable
//! 4. the `--api-url` flag
//!
//! # Example config.toml
//!
//! ```toml
//! [api]
//! url = "http://localhost:3000"
//! timeout_secs = 10
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Deployment the client talks to unless told otherwise
pub const DEFAULT_API_URL: &str = "https://receitasapi-b-2025.vercel.app";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "RECEITAS_API_URL";

/// On-disk layout of config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub api: ApiSection,
}

/// `[api]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiSection {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Resolved client settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the recipe service
    pub api_url: String,

    /// Request timeout; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Default config file location
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("receitas").join("config.toml"))
}

/// Parse config.toml contents
pub fn parse_config_str(contents: &str) -> Result<ConfigFile> {
    toml::from_str(contents).map_err(|e| Error::Config(format!("Invalid config file: {e}")))
}

/// Read and parse a config file
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {e}", path.display()))
    })?;
    parse_config_str(&contents)
}

impl ClientConfig {
    /// Resolve settings from every source
    ///
    /// An explicit `config_path` must exist; the default location is only
    /// read when present. `env` looks up environment variables.
    pub fn resolve(
        api_url_flag: Option<&str>,
        config_path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config = ClientConfig::default();

        let file = match config_path {
            Some(path) => Some(load_config_file(path)?),
            None => match default_config_path() {
                Some(path) if path.exists() => {
                    debug!("Loading config from {}", path.display());
                    Some(load_config_file(&path)?)
                }
                _ => None,
            },
        };
        if let Some(file) = file {
            config.apply_file(file);
        }

        if let Some(url) = env(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
            debug!("Using API URL from {}", API_URL_ENV);
            config.api_url = url;
        }
        if let Some(url) = api_url_flag {
            config.api_url = url.to_string();
        }

        config.base_url()?;
        Ok(config)
    }

    /// Resolve using the process environment
    pub fn from_env(api_url_flag: Option<&str>, config_path: Option<&Path>) -> Result<Self> {
        Self::resolve(api_url_flag, config_path, |key| std::env::var(key).ok())
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(url) = file.api.url {
            self.api_url = url;
        }
        if file.api.timeout_secs.is_some() {
            self.timeout_secs = file.api.timeout_secs;
        }
    }

    /// Validated base URL, always ending in `/` so endpoints join beneath it
    pub fn base_url(&self) -> Result<Url> {
        let raw = self.api_url.trim();
        let with_slash = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{raw}/")
        };

        let url = Url::parse(&with_slash).map_err(|e| Error::InvalidUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::InvalidUrl {
                url: raw.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(url)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout(), None);
        assert_eq!(
            config.base_url().unwrap().as_str(),
            "https://receitasapi-b-2025.vercel.app/"
        );
    }

    #[test]
    fn test_parse_config() {
        let file = parse_config_str(
            r#"
[api]
url = "http://localhost:3000"
timeout_secs = 10
"#,
        )
        .unwrap();
        assert_eq!(file.api.url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(file.api.timeout_secs, Some(10));

        assert_eq!(parse_config_str("").unwrap(), ConfigFile::default());
        assert!(matches!(parse_config_str("[api\n"), Err(Error::Config(_))));
    }

    #[test]
    fn test_file_then_env_then_flag() {
        let file = write_config("[api]\nurl = \"http://file.example\"\ntimeout_secs = 5\n");

        let config = ClientConfig::resolve(None, Some(file.path()), no_env).unwrap();
        assert_eq!(config.api_url, "http://file.example");
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));

        let env = |key: &str| (key == API_URL_ENV).then(|| "http://env.example".to_string());
        let config = ClientConfig::resolve(None, Some(file.path()), env).unwrap();
        assert_eq!(config.api_url, "http://env.example");
        assert_eq!(config.timeout_secs, Some(5));

        let config =
            ClientConfig::resolve(Some("http://flag.example"), Some(file.path()), env).unwrap();
        assert_eq!(config.api_url, "http://flag.example");
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = ClientConfig::resolve(None, Some(&missing), no_env);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = ClientConfig::resolve(Some("not a url"), None, no_env);
        assert!(matches!(result, Err(Error::InvalidUrl { .. })));

        let result = ClientConfig::resolve(Some("ftp://example.com"), None, no_env);
        assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig {
            api_url: "http://localhost:3000/api".to_string(),
            timeout_secs: None,
        };
        assert_eq!(config.base_url().unwrap().as_str(), "http://localhost:3000/api/");
    }
}
