// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the upstream OpenAI embeddings provider

use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Upstream provider settings
#[derive(Clone)]
pub struct OpenAiConfig {
    /// Bearer credential; `None` when `OPENAI_API_KEY` is unset or empty
    pub api_key: Option<String>,
    /// API base URL, without the `/embeddings` suffix
    pub base_url: String,
    /// Deadline for the single outbound call
    pub request_timeout: Duration,
}

impl OpenAiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            api_key: env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            base_url: env::var("OPENAI_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(super::parse_env_value(
                "UPSTREAM_TIMEOUT_SECS",
                env::var("UPSTREAM_TIMEOUT_SECS").ok(),
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )?),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid OPENAI_BASE_URL '{}': {}", self.base_url, e))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(format!(
                "OPENAI_BASE_URL must use http or https, got '{}'",
                url.scheme()
            ));
        }
        if self.request_timeout.is_zero() {
            return Err("Upstream timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }
}

// The credential never reaches log output.
impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
