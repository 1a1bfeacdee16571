// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! GET /health, routing fallbacks and CORS on the persistent server binding

use super::helpers::{app_for, config_for, send, TEST_API_KEY};
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use embeddings_proxy::config::{OpenAiConfig, ProxyConfig};
use serde_json::json;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::MockServer;

#[tokio::test]
async fn test_health_ok_without_credential() {
    let upstream = MockServer::start().await;
    let app = app_for(&config_for(&upstream, None));

    let (status, body) = send(app, Method::GET, "/health", None, "").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK", "message": "Server is running"}));
}

#[tokio::test]
async fn test_health_ok_with_unreachable_upstream() {
    let config = ProxyConfig {
        openai: OpenAiConfig {
            api_key: Some(TEST_API_KEY.to_string()),
            base_url: "http://127.0.0.1:59999/v1".to_string(),
            request_timeout: Duration::from_secs(1),
        },
        ..Default::default()
    };

    let (status, _) = send(app_for(&config), Method::GET, "/health", None, "").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let upstream = MockServer::start().await;
    let app = app_for(&config_for(&upstream, Some(TEST_API_KEY)));

    let (status, body) = send(app, Method::GET, "/api/unknown", None, "").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Not found"}));
}

#[tokio::test]
async fn test_cors_headers_on_responses() {
    let upstream = MockServer::start().await;
    let app = app_for(&config_for(&upstream, Some(TEST_API_KEY)));

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/embeddings")
        .header("origin", "http://localhost:3000")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"input": ""}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_cors_preflight_answered() {
    let upstream = MockServer::start().await;
    let app = app_for(&config_for(&upstream, Some(TEST_API_KEY)));

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/embeddings")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_success());
    assert!(response
        .headers()
        .contains_key("access-control-allow-methods"));
}
