//! Parser service client
//!
//! The service answers `POST /parse` with a [`WireDocument`] and
//! `GET /health` with any success status.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use lingo_core::{Document, LingoError, ParserConfig, Result, SentenceParser, WireDocument};

#[derive(Debug, Serialize)]
struct ParseRequest<'a> {
    text: &'a str,
    model: &'a str,
}

/// HTTP client for the dependency-parser service
#[derive(Debug, Clone)]
pub struct RemoteParser {
    client: Client,
    base_url: String,
    model: String,
}

impl RemoteParser {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LingoError::ParserError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        })
    }

    /// Create from config
    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        Self::new(
            config.url.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Create from config and make sure the service is reachable
    pub async fn connect(config: &ParserConfig) -> Result<Self> {
        let parser = Self::from_config(config)?;
        parser.health_check().await?;
        info!("Connected to parser at {} (model {})", parser.base_url, parser.model);
        Ok(parser)
    }

    pub async fn health_check(&self) -> Result<()> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|e| {
                LingoError::ParserError(format!("Parser unreachable at {}: {e}", self.base_url))
            })?;

        if !response.status().is_success() {
            return Err(LingoError::ParserError(format!(
                "Parser health check failed: {}",
                response.status()
            )));
        }
        Ok(())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl SentenceParser for RemoteParser {
    async fn parse(&self, text: &str) -> Result<Document> {
        debug!("Parsing {} bytes with {}", text.len(), self.model);

        let request = ParseRequest {
            text,
            model: &self.model,
        };

        let response = self
            .client
            .post(format!("{}/parse", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| LingoError::ParserError(format!("Parse request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(LingoError::ParserError(format!(
                "Parser returned {status}: {error_text}"
            )));
        }

        let wire: WireDocument = response
            .json()
            .await
            .map_err(|e| LingoError::ParserError(format!("Failed to decode parse: {e}")))?;

        Document::try_from(wire)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
