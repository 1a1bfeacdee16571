// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Upstream embedding providers
//!
//! The proxy never computes embeddings itself. This module holds the
//! provider trait, the shared result/error types, and the OpenAI client.

pub mod openai;
pub mod provider;
pub mod types;

pub use openai::{OpenAiEmbeddingProvider, OPENAI_EMBEDDING_MODEL, OPENAI_PROVIDER};
pub use provider::EmbeddingProvider;
pub use types::{Embedding, ProviderError};

#[cfg(test)]
pub use provider::MockEmbeddingProvider;
