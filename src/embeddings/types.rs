// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for upstream embedding providers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A single embedding vector returned by an upstream provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    /// Vector components, in provider order and exactly as the provider
    /// sent them
    pub values: Vec<Value>,
}

impl Embedding {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Number of components in the vector
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }
}

/// Errors that can occur while calling an upstream embedding provider
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No credential configured for the provider
    #[error("Missing {env_var} env var for {provider} provider")]
    MissingApiKey {
        /// Display name of the provider (e.g., "OpenAI")
        provider: &'static str,
        /// Environment variable that holds the credential
        env_var: &'static str,
    },

    /// Provider answered with a non-success HTTP status
    #[error("{body}")]
    Upstream {
        /// HTTP status code returned by the provider
        status: u16,
        /// Raw response body text
        body: String,
    },

    /// Provider answered 2xx but the body did not carry a usable vector
    #[error("Invalid embedding response from {provider}")]
    InvalidResponse {
        /// Display name of the provider
        provider: &'static str,
        /// Which part of the response failed validation
        reason: String,
    },

    /// Network failure, timeout, or an undecodable body
    #[error("{0}")]
    Transport(String),
}

impl From<Vec<f64>> for Embedding {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values.into_iter().map(Value::from).collect())
    }
}

impl ProviderError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ProviderError::Transport(err.to_string())
    }
}
