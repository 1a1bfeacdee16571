// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Response types for POST /api/embeddings

use crate::api::ErrorResponse;
use crate::embeddings::Embedding;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success body for POST /api/embeddings
///
/// # Example
/// ```json
/// {
///   "embedding": [0.1, 0.2, 0.3],
///   "provider": "openai",
///   "model": "text-embedding-3-small",
///   "dimensions": 3
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// The embedding vector
    pub embedding: Vec<Value>,

    /// Provider identifier (e.g., "openai")
    pub provider: String,

    /// Model that produced the vector
    pub model: String,

    /// Always equal to `embedding.len()`
    pub dimensions: usize,
}

impl EmbeddingResponse {
    pub fn new(embedding: Embedding, provider: &str, model: &str) -> Self {
        let dimensions = embedding.dimensions();
        Self {
            embedding: embedding.values,
            provider: provider.to_string(),
            model: model.to_string(),
            dimensions,
        }
    }
}

/// Body of any reply from the embeddings route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbedReply {
    Success(EmbeddingResponse),
    Error(ErrorResponse),
}

impl EmbedReply {
    pub fn is_success(&self) -> bool {
        matches!(self, EmbedReply::Success(_))
    }
}
