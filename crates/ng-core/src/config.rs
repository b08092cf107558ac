//! newsgraph Configuration Management
//!
//! Handles configuration from environment variables and TOML config files
//! with sensible defaults for development.

use crate::Scope;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Extraction engine configuration
    pub extraction: ExtractionConfig,

    /// Digest artifact location
    pub digest: DigestConfig,

    /// Feed source store
    pub feeds: FeedsConfig,

    /// External batch pipeline
    pub pipeline: PipelineConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_override()
    }

    /// Load from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }

    /// Load an optional file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_override()
    }

    /// Merge with environment variables (env takes precedence)
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server
        if let Some(host) = lookup("API_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("API_PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "API_PORT".to_string(),
                value: port,
            })?;
        }
        // CORS origins (comma-separated)
        if let Some(origins) = lookup("CORS_ORIGINS") {
            self.server.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(dir) = lookup("STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }

        // Extraction
        if let Some(scope) = lookup("EXTRACTION_SCOPE") {
            self.extraction.scope = scope.parse().map_err(|_| ConfigError::InvalidValue {
                key: "EXTRACTION_SCOPE".to_string(),
                value: scope,
            })?;
        }
        if let Some(path) = lookup("GAZETTEER_PATH") {
            self.extraction.gazetteer_path = Some(PathBuf::from(path));
        }

        // Collaborators
        if let Some(dir) = lookup("DIGEST_DIR") {
            self.digest.output_dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup("FEEDS_PATH") {
            self.feeds.path = PathBuf::from(path);
        }
        if let Some(command) = lookup("PIPELINE_COMMAND") {
            self.pipeline.command = command;
        }
        if let Some(secs) = lookup("PIPELINE_TIMEOUT_SECS") {
            self.pipeline.timeout_secs = secs.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PIPELINE_TIMEOUT_SECS".to_string(),
                value: secs,
            })?;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(self)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed origins for CORS (empty allows any origin)
    pub cors_origins: Vec<String>,

    /// Directory holding the graph page and its assets
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: vec![],
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Extraction engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Default co-occurrence window
    pub scope: Scope,

    /// Relation label attached to every derived triple
    pub relation: String,

    /// Extra gazetteer entries (YAML)
    pub gazetteer_path: Option<PathBuf>,

    /// Text used by the graph endpoint when no digest is available
    pub fallback_text: Option<String>,

    /// Escape entity text in generated graph statements
    pub escape_statements: bool,

    /// Node label used in generated graph statements
    pub node_label: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            scope: Scope::Sentence,
            relation: crate::CO_OCCURS_WITH.to_string(),
            gazetteer_path: None,
            fallback_text: None,
            escape_statements: true,
            node_label: "Entity".to_string(),
        }
    }
}

/// Digest artifact location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    /// Directory the batch pipeline writes digests into
    pub output_dir: PathBuf,

    /// File name prefix, followed by the run date and `.json`
    pub file_prefix: String,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            file_prefix: "news_digest_".to_string(),
        }
    }
}

/// Feed source store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedsConfig {
    /// YAML file holding the configured feeds
    pub path: PathBuf,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("config/feeds.yaml"),
        }
    }
}

/// External batch pipeline (scrape, translate, summarize, write digest)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Program to execute
    pub command: String,

    /// Program arguments
    pub args: Vec<String>,

    /// Working directory (defaults to the current directory)
    pub working_dir: Option<PathBuf>,

    /// Hard limit on a single run
    pub timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            command: "python".to_string(),
            args: vec!["pipeline.py".to_string()],
            working_dir: None,
            timeout_secs: 900,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// JSON format for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.extraction.scope, Scope::Sentence);
        assert_eq!(config.extraction.relation, "co_occurs_with");
        assert!(config.extraction.escape_statements);
        assert_eq!(config.digest.file_prefix, "news_digest_");
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::default()
            .apply_overrides(lookup_from(&[
                ("API_PORT", "9090"),
                ("CORS_ORIGINS", "http://a.test, ,http://b.test"),
                ("EXTRACTION_SCOPE", "paragraph"),
                ("DIGEST_DIR", "/tmp/digests"),
            ]))
            .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.extraction.scope, Scope::Paragraph);
        assert_eq!(config.digest.output_dir, PathBuf::from("/tmp/digests"));
    }

    #[test]
    fn test_invalid_overrides() {
        let err = AppConfig::default()
            .apply_overrides(lookup_from(&[("API_PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "API_PORT"));

        let err = AppConfig::default()
            .apply_overrides(lookup_from(&[("EXTRACTION_SCOPE", "document")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref value, .. } if value == "document"));
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nport = 3000\n\n[extraction]\nscope = \"paragraph\"\nfallback_text = \"Alice met Bob.\""
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.extraction.scope, Scope::Paragraph);
        assert_eq!(config.extraction.fallback_text.as_deref(), Some("Alice met Bob."));
        assert_eq!(config.pipeline.timeout_secs, 900);
    }

    #[test]
    fn test_from_file_errors() {
        let missing = AppConfig::from_file("/nonexistent/newsgraph.toml");
        assert!(matches!(missing, Err(ConfigError::FileReadError { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        let broken = AppConfig::from_file(file.path());
        assert!(matches!(broken, Err(ConfigError::ParseError { .. })));
    }
}
