//! API configuration
//!
//! The base URL comes from, in order: the `--api-base` flag, the
//! `MEAPI_API_BASE` environment variable, then `apiBase` in a JSON config
//! file. A missing base is not an error here - views report it themselves.

use std::path::Path;

use meapi_domain::API_BASE_SETTING;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("API base URL '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk config format (`meapi.json`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// Base URL of the portfolio API, e.g. `http://127.0.0.1:8000/api`
    #[serde(default)]
    pub api_base: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Resolved API configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Option<String>,
}

impl ApiConfig {
    /// Build from a raw base value; blank values count as unset
    pub fn from_base(raw: Option<&str>) -> Result<Self, ConfigError> {
        let Some(base) = raw.map(normalize_base).filter(|base| !base.is_empty()) else {
            return Ok(Self::default());
        };

        let parsed = Url::parse(&base).map_err(|source| ConfigError::InvalidBaseUrl {
            value: base.clone(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(base));
        }

        Ok(Self {
            base_url: Some(base),
        })
    }

    /// Resolve from flag, environment and config file, in that order
    pub fn resolve(
        flag: Option<&str>,
        config_file: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let env = std::env::var(API_BASE_SETTING).ok();
        let file = config_file.map(ConfigFile::from_file).transpose()?;
        Self::layered(flag, env.as_deref(), file.as_ref())
    }

    fn layered(
        flag: Option<&str>,
        env: Option<&str>,
        file: Option<&ConfigFile>,
    ) -> Result<Self, ConfigError> {
        let chosen = [flag, env, file.and_then(|f| f.api_base.as_deref())]
            .into_iter()
            .flatten()
            .find(|value| !value.trim().is_empty());
        Self::from_base(chosen)
    }

    /// Base URL without trailing slashes, if configured
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn is_configured(&self) -> bool {
        self.base_url.is_some()
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_trailing_slashes_are_removed() {
        let config = ApiConfig::from_base(Some("http://localhost:8000/api///")).unwrap();
        assert_eq!(config.base_url(), Some("http://localhost:8000/api"));
    }

    #[test]
    fn test_blank_base_is_unconfigured() {
        assert!(!ApiConfig::from_base(None).unwrap().is_configured());
        assert!(!ApiConfig::from_base(Some("   ")).unwrap().is_configured());
        assert!(!ApiConfig::from_base(Some("/")).unwrap().is_configured());
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        let err = ApiConfig::from_base(Some("not a url")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let err = ApiConfig::from_base(Some("ftp://example.com")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme(_)));
    }

    #[test]
    fn test_flag_wins_over_env_and_file() {
        let file = ConfigFile {
            api_base: Some("http://file.example".to_string()),
        };
        let config = ApiConfig::layered(
            Some("http://flag.example"),
            Some("http://env.example"),
            Some(&file),
        )
        .unwrap();
        assert_eq!(config.base_url(), Some("http://flag.example"));
    }

    #[test]
    fn test_env_wins_over_file() {
        let file = ConfigFile {
            api_base: Some("http://file.example".to_string()),
        };
        let config = ApiConfig::layered(None, Some("http://env.example/"), Some(&file)).unwrap();
        assert_eq!(config.base_url(), Some("http://env.example"));
    }

    #[test]
    fn test_blank_env_falls_through_to_file() {
        let file = ConfigFile {
            api_base: Some("http://file.example".to_string()),
        };
        let config = ApiConfig::layered(None, Some(""), Some(&file)).unwrap();
        assert_eq!(config.base_url(), Some("http://file.example"));
    }

    #[test]
    fn test_config_file_parse() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "apiBase": "https://me-api.example/api/" }}"#).unwrap();

        let parsed = ConfigFile::from_file(file.path()).unwrap();
        assert_eq!(parsed.api_base.as_deref(), Some("https://me-api.example/api/"));
    }

    #[test]
    fn test_config_file_without_base() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();

        let parsed = ConfigFile::from_file(file.path()).unwrap();
        assert!(parsed.api_base.is_none());
    }

    #[test]
    fn test_config_file_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "apiBase = nope").unwrap();

        let err = ConfigFile::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn test_config_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigFile::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
