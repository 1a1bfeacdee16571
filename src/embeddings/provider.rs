// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Embedding provider trait definition

use async_trait::async_trait;

use super::types::{Embedding, ProviderError};

/// Trait for upstream embedding providers
///
/// The request handler only talks to this trait, so provider specifics
/// (endpoint, model, auth header format) stay inside the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single input string
    ///
    /// Implementations perform exactly one outbound call and never retry.
    /// The input is sent verbatim.
    async fn embed(&self, input: &str) -> Result<Embedding, ProviderError>;

    /// Provider identifier reported to clients (e.g., "openai")
    fn name(&self) -> &'static str;

    /// Human-readable provider name used in error messages (e.g., "OpenAI")
    fn display_name(&self) -> &'static str;

    /// Model identifier reported to clients
    fn model(&self) -> &'static str;
}
