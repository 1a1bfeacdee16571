// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Persistent HTTP server binding
//!
//! Routes:
//! - `GET /health`
//! - `/api/embeddings` (every method reaches the shared handler, which
//!   answers 405 for anything but POST)

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use super::embed::{EmbedHandler, EmbedReply, InboundRequest, Responder};
use super::handlers::health_handler;
use super::ApiError;
use crate::config::ProxyConfig;
use crate::embeddings::{EmbeddingProvider, OpenAiEmbeddingProvider};

#[derive(Clone)]
pub struct AppState {
    pub embed_handler: Arc<EmbedHandler>,
}

impl AppState {
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            embed_handler: Arc::new(EmbedHandler::new(provider)),
        }
    }

    /// Wire the OpenAI provider from configuration
    pub fn from_config(config: &ProxyConfig) -> Result<Self> {
        let provider = OpenAiEmbeddingProvider::new(config.openai.clone())?;
        Ok(Self::new(Arc::new(provider)))
    }
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/embeddings", any(embeddings_handler))
        .fallback(not_found_handler)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn start_server(config: ProxyConfig) -> Result<()> {
    let state = AppState::from_config(&config)?;

    if !config.openai.has_api_key() {
        warn!("OPENAI_API_KEY is not set; embedding requests will fail with 500");
    }

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let addr = listener.local_addr()?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, create_app(Arc::new(state)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

async fn embeddings_handler(
    State(state): State<Arc<AppState>>,
    method: Method,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let request = match body {
        Ok(body) => HttpRequest::new(method, &headers, body),
        Err(rejection) => {
            warn!("Failed to read request body: {}", rejection.body_text());
            HttpRequest::unreadable(method, ApiError::internal(rejection.body_text()))
        }
    };
    state.embed_handler.handle(&request, HttpResponder).await
}

async fn not_found_handler() -> Response {
    let error = ApiError::NotFound;
    (StatusCode::NOT_FOUND, Json(error.to_response())).into_response()
}

/// Inbound HTTP request as seen by the shared handler
struct HttpRequest {
    method: Method,
    /// `None` unless the body is non-empty and declared as JSON; `Err` if
    /// it could not be read at all (e.g. over the size limit)
    body: Result<Option<Bytes>, ApiError>,
}

impl HttpRequest {
    fn new(method: Method, headers: &HeaderMap, body: Bytes) -> Self {
        let body = (is_json_content_type(headers) && !body.iter().all(u8::is_ascii_whitespace))
            .then_some(body);
        Self {
            method,
            body: Ok(body),
        }
    }

    /// Request whose body was rejected before it reached the handler
    fn unreadable(method: Method, error: ApiError) -> Self {
        Self {
            method,
            body: Err(error),
        }
    }
}

impl InboundRequest for HttpRequest {
    fn method(&self) -> Option<&Method> {
        Some(&self.method)
    }

    fn json_body(&self) -> Result<Option<serde_json::Value>, ApiError> {
        match &self.body {
            Err(error) => Err(error.clone()),
            Ok(None) => Ok(None),
            Ok(Some(bytes)) => serde_json::from_slice(bytes)
                .map(Some)
                .map_err(|e| ApiError::internal(e.to_string())),
        }
    }
}

struct HttpResponder;

impl Responder for HttpResponder {
    type Output = Response;

    fn respond(self, status: StatusCode, body: EmbedReply) -> Response {
        (status, Json(body)).into_response()
    }
}

/// `application/json` or any `+json` media type
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}
