// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "OK".to_string(),
            message: "Server is running".to_string(),
        }
    }
}

/// GET /health
///
/// Liveness only: answers 200 whether or not the upstream or the credential
/// is usable.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
