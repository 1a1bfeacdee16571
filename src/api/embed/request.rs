// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! EmbeddingRequest type for POST /api/embeddings
//!
//! Validation is done against the raw JSON body rather than a derived
//! deserializer, so that a missing field, a non-string value and a blank
//! string all collapse into the same 400 response.

use crate::api::ApiError;
use serde::{Deserialize, Serialize};

/// Request body for POST /api/embeddings
///
/// # Example
/// ```json
/// { "input": "Hello world" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRequest {
    /// Text to embed, forwarded upstream verbatim
    pub input: String,
}

impl EmbeddingRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Extract and validate a request from an optional JSON body
    ///
    /// Fails with `ApiError::InvalidInput` when the body is absent, is not an
    /// object, has no `input`, has a non-string `input`, or `input` is blank.
    /// The accepted input keeps its original whitespace.
    pub fn from_body(body: Option<&serde_json::Value>) -> Result<Self, ApiError> {
        let input = body
            .and_then(|value| value.get("input"))
            .and_then(serde_json::Value::as_str)
            .ok_or(ApiError::InvalidInput)?;

        let request = Self::new(input);
        request.validate()?;
        Ok(request)
    }

    /// Validates the request
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.input.trim().is_empty() {
            return Err(ApiError::InvalidInput);
        }
        Ok(())
    }
}
