//! Lingo Configuration Management
//!
//! Handles configuration from environment variables and config files
//! with sensible defaults for development.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Sentence parser service
    pub parser: ParserConfig,

    /// Lexical data files
    pub lexicon: LexiconConfig,

    /// Word lookup cache
    pub cache: CacheConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Server
        if let Ok(host) = std::env::var("API_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("API_PORT") {
            config.server.port = parse_var("API_PORT", port)?;
        }

        // CORS origins from environment variable (comma-separated)
        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.server.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Parser
        if let Ok(url) = std::env::var("PARSER_URL") {
            config.parser.url = url;
        }
        if let Ok(model) = std::env::var("PARSER_MODEL") {
            config.parser.model = model;
        }

        // Lexicon
        if let Ok(path) = std::env::var("LEXICON_PATH") {
            config.lexicon.wordnet_path = path.into();
        }
        if let Ok(path) = std::env::var("SPELLING_PATH") {
            config.lexicon.spelling_path = path.into();
        }
        if let Ok(path) = std::env::var("SENTIMENT_PATH") {
            config.lexicon.sentiment_path = path.into();
        }

        // Cache
        if let Ok(capacity) = std::env::var("WORD_CACHE_CAPACITY") {
            config.cache.word_max_capacity = Some(parse_var("WORD_CACHE_CAPACITY", capacity)?);
        }
        if let Ok(ttl) = std::env::var("WORD_CACHE_TTL_SECS") {
            config.cache.word_ttl_secs = Some(parse_var("WORD_CACHE_TTL_SECS", ttl)?);
        }

        // Logging
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
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

    /// Merge with environment variables (env takes precedence)
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        let env_config = Self::from_env()?;
        let defaults = Self::default();

        // Only override if env values differ from defaults
        if env_config.server.host != defaults.server.host {
            self.server.host = env_config.server.host;
        }
        if env_config.server.port != defaults.server.port {
            self.server.port = env_config.server.port;
        }
        if !env_config.server.cors_origins.is_empty() {
            self.server.cors_origins = env_config.server.cors_origins;
        }
        if env_config.parser.url != defaults.parser.url {
            self.parser.url = env_config.parser.url;
        }
        if env_config.parser.model != defaults.parser.model {
            self.parser.model = env_config.parser.model;
        }
        if env_config.lexicon.wordnet_path != defaults.lexicon.wordnet_path {
            self.lexicon.wordnet_path = env_config.lexicon.wordnet_path;
        }
        if env_config.lexicon.spelling_path != defaults.lexicon.spelling_path {
            self.lexicon.spelling_path = env_config.lexicon.spelling_path;
        }
        if env_config.lexicon.sentiment_path != defaults.lexicon.sentiment_path {
            self.lexicon.sentiment_path = env_config.lexicon.sentiment_path;
        }
        if env_config.cache.word_max_capacity.is_some() {
            self.cache.word_max_capacity = env_config.cache.word_max_capacity;
        }
        if env_config.cache.word_ttl_secs.is_some() {
            self.cache.word_ttl_secs = env_config.cache.word_ttl_secs;
        }
        if env_config.logging.level != defaults.logging.level {
            self.logging.level = env_config.logging.level;
        }

        Ok(self)
    }

    /// Load an optional TOML file, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path)?.with_env_override(),
            None => Self::from_env(),
        }
    }

    /// Server bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: String) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value,
    })
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Allowed origins for CORS
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            request_timeout_secs: 30,
            // Empty by default for security - set via CORS_ORIGINS env var
            cors_origins: vec![],
        }
    }
}

/// Sentence parser service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Base URL of the parser service
    pub url: String,

    /// Language model the service should load
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8081".to_string(),
            model: "en_core_web_sm".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Lexical data file locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// WordNet-style synset file (JSON)
    pub wordnet_path: PathBuf,

    /// Word frequency list for spelling correction
    pub spelling_path: PathBuf,

    /// Sentiment lexicon (TSV)
    pub sentiment_path: PathBuf,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            wordnet_path: PathBuf::from("data/wordnet.json"),
            spelling_path: PathBuf::from("data/spelling.txt"),
            sentiment_path: PathBuf::from("data/sentiment.tsv"),
        }
    }
}

/// Word lookup cache configuration
///
/// Both bounds unset means entries are kept for the process lifetime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached lookups
    pub word_max_capacity: Option<u64>,

    /// Time-to-live for cached lookups (in seconds)
    pub word_ttl_secs: Option<u64>,
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

impl From<ConfigError> for crate::LingoError {
    fn from(err: ConfigError) -> Self {
        crate::LingoError::ConfigError(err.to_string())
    }
}
