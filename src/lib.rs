// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod config;
pub mod embeddings;
pub mod version;

pub use api::{create_app, AppState, EmbedHandler};
pub use config::{OpenAiConfig, ProxyConfig};
pub use embeddings::{EmbeddingProvider, OpenAiEmbeddingProvider};
