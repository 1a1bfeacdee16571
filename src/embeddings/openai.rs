// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OpenAI embeddings provider
//!
//! Sends one `POST {base_url}/embeddings` per call with the fixed
//! `text-embedding-3-small` model and validates that the response carries a
//! vector at `data[0].embedding`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::provider::EmbeddingProvider;
use super::types::{Embedding, ProviderError};
use crate::config::OpenAiConfig;

pub const OPENAI_PROVIDER: &str = "openai";
pub const OPENAI_DISPLAY_NAME: &str = "OpenAI";
pub const OPENAI_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: &'a str,
}

/// Only the first entry of `data` is inspected, so the rest stay untyped.
#[derive(Debug, Deserialize)]
struct EmbeddingsEnvelope {
    data: Vec<serde_json::Value>,
}

/// Elements are passed through untyped; only the array shape is checked.
#[derive(Debug, Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<serde_json::Value>,
}

/// Client for the OpenAI embeddings endpoint
pub struct OpenAiEmbeddingProvider {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiEmbeddingProvider {
    /// Create a new provider
    ///
    /// The credential is not checked here; `embed` checks its presence on
    /// every call so a missing key never blocks startup.
    pub fn new(config: OpenAiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(crate::version::user_agent())
            .build()
            .map_err(ProviderError::transport)?;

        Ok(Self { client, config })
    }

    /// Full URL of the embeddings endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/embeddings", self.config.base_url.trim_end_matches('/'))
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::MissingApiKey {
                provider: OPENAI_DISPLAY_NAME,
                env_var: OPENAI_API_KEY_VAR,
            })
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddingProvider {
    async fn embed(&self, input: &str) -> Result<Embedding, ProviderError> {
        let api_key = self.api_key()?;

        let request = EmbeddingsRequest {
            model: OPENAI_EMBEDDING_MODEL,
            input,
        };

        debug!(
            "Requesting {} embedding ({} chars)",
            OPENAI_EMBEDDING_MODEL,
            input.chars().count()
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(ProviderError::transport)?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.map_err(ProviderError::transport)?;
            warn!("OpenAI rejected embedding request: {}", status);
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let payload: serde_json::Value =
            response.json().await.map_err(ProviderError::transport)?;

        let values = extract_embedding(payload)?;
        debug!("OpenAI returned {} dimensions", values.len());

        Ok(Embedding::new(values))
    }

    fn name(&self) -> &'static str {
        OPENAI_PROVIDER
    }

    fn display_name(&self) -> &'static str {
        OPENAI_DISPLAY_NAME
    }

    fn model(&self) -> &'static str {
        OPENAI_EMBEDDING_MODEL
    }
}

/// Pull `data[0].embedding` out of a decoded response body
fn extract_embedding(
    payload: serde_json::Value,
) -> Result<Vec<serde_json::Value>, ProviderError> {
    let invalid = |reason: String| ProviderError::InvalidResponse {
        provider: OPENAI_DISPLAY_NAME,
        reason,
    };

    let envelope: EmbeddingsEnvelope =
        serde_json::from_value(payload).map_err(|e| invalid(e.to_string()))?;

    let first = envelope
        .data
        .into_iter()
        .next()
        .ok_or_else(|| invalid("data is empty".to_string()))?;

    let datum: EmbeddingDatum =
        serde_json::from_value(first).map_err(|e| invalid(format!("data[0]: {}", e)))?;

    Ok(datum.embedding)
}
