// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Embedding request handler shared by every transport binding
//!
//! Bindings adapt their native request type to [`InboundRequest`] and their
//! native reply type to [`Responder`]; the method check, validation, upstream
//! call and outcome mapping all live here.

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use tracing::{debug, info, warn};

use super::request::EmbeddingRequest;
use super::response::{EmbedReply, EmbeddingResponse};
use crate::api::ApiError;
use crate::embeddings::EmbeddingProvider;

/// Read side of a transport request
pub trait InboundRequest {
    /// Request method; `None` if the transport delivered an unparseable one
    fn method(&self) -> Option<&Method>;

    /// Decoded JSON body
    ///
    /// `Ok(None)` means no body was sent. A body that cannot be decoded is an
    /// `Err`, reported to the caller as a 500.
    fn json_body(&self) -> Result<Option<serde_json::Value>, ApiError>;
}

/// Write side of a transport request
pub trait Responder {
    type Output;

    fn respond(self, status: StatusCode, body: EmbedReply) -> Self::Output;
}

/// Handles POST /api/embeddings for any transport
pub struct EmbedHandler {
    provider: Arc<dyn EmbeddingProvider>,
}

impl EmbedHandler {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self { provider }
    }

    /// Process one request and hand exactly one reply to `responder`
    pub async fn handle<R, S>(&self, request: &R, responder: S) -> S::Output
    where
        R: InboundRequest + ?Sized,
        S: Responder,
    {
        match self.process(request).await {
            Ok(response) => {
                info!(
                    "Embedding generated: provider={}, model={}, dimensions={}",
                    response.provider, response.model, response.dimensions
                );
                responder.respond(StatusCode::OK, EmbedReply::Success(response))
            }
            Err(e) => {
                let status = StatusCode::from_u16(e.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                warn!("Embedding request failed ({}): {}", status.as_u16(), e);
                responder.respond(status, EmbedReply::Error(e.to_response()))
            }
        }
    }

    /// Run the request through method check, validation and the provider
    pub async fn process<R>(&self, request: &R) -> Result<EmbeddingResponse, ApiError>
    where
        R: InboundRequest + ?Sized,
    {
        if request.method() != Some(&Method::POST) {
            return Err(ApiError::MethodNotAllowed);
        }

        let body = request.json_body()?;
        let request = EmbeddingRequest::from_body(body.as_ref())?;

        debug!(
            "Forwarding embedding request to {} ({} chars)",
            self.provider.display_name(),
            request.input.chars().count()
        );

        let embedding = self
            .provider
            .embed(&request.input)
            .await
            .map_err(|e| ApiError::from_provider(self.provider.display_name(), e))?;

        Ok(EmbeddingResponse::new(
            embedding,
            self.provider.name(),
            self.provider.model(),
        ))
    }
}
