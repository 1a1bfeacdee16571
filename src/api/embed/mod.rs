// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Embedding API Module
//!
//! Provides the transport-independent handler behind POST /api/embeddings.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{EmbedHandler, InboundRequest, Responder};
pub use request::EmbeddingRequest;
pub use response::{EmbedReply, EmbeddingResponse};
