// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::embeddings::ProviderError;

pub const UNKNOWN_SERVER_ERROR: &str = "Unknown server error";

/// JSON error body: a single human-readable `error` string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid input: expected non-empty string")]
    InvalidInput,
    #[error("Not found")]
    NotFound,
    /// Server-side misconfiguration detected before any upstream call
    #[error("{0}")]
    Configuration(String),
    /// Upstream rejected the request; its status is forwarded as-is
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error("{0}")]
    BadGateway(String),
    #[error("{0}")]
    InternalError(String),
}

impl ApiError {
    /// Internal error with the fallback message for empty descriptions
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            ApiError::InternalError(UNKNOWN_SERVER_ERROR.to_string())
        } else {
            ApiError::InternalError(message)
        }
    }

    /// Map a provider failure onto the client-facing error
    ///
    /// `provider` is the display name used as the message prefix
    /// (e.g., "OpenAI error: ...").
    pub fn from_provider(provider: &str, err: ProviderError) -> Self {
        match err {
            ProviderError::MissingApiKey { .. } => ApiError::Configuration(err.to_string()),
            ProviderError::Upstream { status, body } => ApiError::Upstream {
                status,
                message: format!("{} error: {}", provider, body),
            },
            ProviderError::InvalidResponse { .. } => ApiError::BadGateway(err.to_string()),
            ProviderError::Transport(msg) => {
                ApiError::InternalError(format!("{} error: {}", provider, msg))
            }
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.to_string())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MethodNotAllowed => 405,
            ApiError::InvalidInput => 400,
            ApiError::NotFound => 404,
            ApiError::Configuration(_) | ApiError::InternalError(_) => 500,
            ApiError::Upstream { status, .. } => *status,
            ApiError::BadGateway(_) => 502,
        }
    }
}
