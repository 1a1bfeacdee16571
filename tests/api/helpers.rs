// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Shared setup for API tests: a wiremock upstream and an app wired to it

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use embeddings_proxy::{
    api::{create_app, AppState},
    config::{OpenAiConfig, ProxyConfig},
};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tower::ServiceExt; // for `oneshot`
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "sk-test-key";

/// Config pointing the OpenAI client at the mock upstream
pub fn config_for(upstream: &MockServer, api_key: Option<&str>) -> ProxyConfig {
    ProxyConfig {
        openai: OpenAiConfig {
            api_key: api_key.map(str::to_string),
            base_url: format!("{}/v1", upstream.uri()),
            request_timeout: Duration::from_secs(5),
        },
        ..Default::default()
    }
}

pub fn state_for(config: &ProxyConfig) -> AppState {
    AppState::from_config(config).expect("Failed to build app state")
}

pub fn app_for(config: &ProxyConfig) -> Router {
    create_app(Arc::new(state_for(config)))
}

/// Send one request through the router and decode the JSON reply
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body should be JSON")
    };

    (status, json)
}

/// POST a JSON body to /api/embeddings
pub async fn post_embeddings(app: Router, body: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/embeddings",
        Some("application/json"),
        body,
    )
    .await
}
