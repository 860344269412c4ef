//! Configuration file for the trivia server
//!
//! Loaded from `~/.trivia/config.toml` unless a path is given. A missing
//! file is not an error: every section has defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::db::pool::DEFAULT_MAX_CONNECTIONS;
use crate::http::ServerConfig;
use crate::models::{DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path} (invalid TOML): {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config file {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Whole-file configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
}

/// `[database]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Postgres URL. `DATABASE_URL` and `--database-url` take precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// `[api]` section, handed to the query layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Page size of the question listing, 1 to 100
    pub questions_per_page: u32,
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=MAX_PER_PAGE).contains(&self.questions_per_page) {
            return Err(format!(
                "api.questions_per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, self.questions_per_page
            ));
        }
        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            questions_per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl TriviaConfig {
    /// Default config path: `~/.trivia/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".trivia/config.toml")
    }

    /// The explicit path if given, the default path otherwise.
    pub fn resolve_path(path: Option<&Path>) -> PathBuf {
        path.map(Path::to_path_buf)
            .unwrap_or_else(Self::default_path)
    }

    /// Load from `path` (or the default path). Missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = Self::resolve_path(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        config
            .api
            .validate()
            .map_err(|reason| ConfigError::Invalid {
                path: path.clone(),
                reason,
            })?;

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TriviaConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, TriviaConfig::default());
        assert_eq!(config.api.questions_per_page, 10);
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nquestions_per_page = 7\n\n[database]\nurl = \"postgres://localhost/trivia_test\""
        )
        .unwrap();

        let config = TriviaConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.api.questions_per_page, 7);
        assert_eq!(
            config.database.url.as_deref(),
            Some("postgres://localhost/trivia_test")
        );
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nquestions_per_page = ").unwrap();

        let err = TriviaConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn oversized_page_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nquestions_per_page = 250").unwrap();

        let err = TriviaConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
        assert!(err.to_string().contains("between 1 and 100"));
    }

    #[test]
    fn zero_page_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nquestions_per_page = 0").unwrap();

        assert!(matches!(
            TriviaConfig::load(Some(file.path())),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn server_section_parses_bind_address() {
        let config: TriviaConfig =
            toml::from_str("[server]\nbind = \"0.0.0.0:8080\"\ncors_permissive = false").unwrap();
        assert_eq!(config.server.bind_addr.port(), 8080);
        assert!(!config.server.cors_permissive);
    }
}
