// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Single-invocation function binding
//!
//! A serverless platform hands over one request event and expects one result
//! back. The event body is usually already-parsed JSON; a string body is
//! treated as JSON text.

use std::collections::{BTreeMap, HashMap};

use axum::http::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::embed::{EmbedHandler, EmbedReply, InboundRequest, Responder};
use super::ApiError;

/// One invocation of the function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionEvent {
    /// Missing means empty, which the method check rejects with 405
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: Option<Value>,
}

impl FunctionEvent {
    pub fn post(body: Value) -> Self {
        Self {
            method: "POST".to_string(),
            headers: HashMap::new(),
            body: Some(body),
        }
    }
}

/// The reply for one invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResult {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: EmbedReply,
}

impl FunctionResult {
    pub fn new(status: StatusCode, body: EmbedReply) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self {
            status_code: status.as_u16(),
            headers,
            body,
        }
    }

    /// Result for an event that could not even be decoded
    pub fn from_error(error: &ApiError) -> Self {
        let status =
            StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, EmbedReply::Error(error.to_response()))
    }
}

struct FunctionRequest {
    method: Option<Method>,
    body: Option<Value>,
}

impl From<FunctionEvent> for FunctionRequest {
    fn from(event: FunctionEvent) -> Self {
        let method = Method::from_bytes(event.method.trim().to_ascii_uppercase().as_bytes()).ok();
        Self {
            method,
            body: event.body,
        }
    }
}

impl InboundRequest for FunctionRequest {
    fn method(&self) -> Option<&Method> {
        self.method.as_ref()
    }

    fn json_body(&self) -> Result<Option<Value>, ApiError> {
        match &self.body {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
            Some(Value::String(text)) => serde_json::from_str(text)
                .map(Some)
                .map_err(|e| ApiError::internal(e.to_string())),
            Some(value) => Ok(Some(value.clone())),
        }
    }
}

struct FunctionResponder;

impl Responder for FunctionResponder {
    type Output = FunctionResult;

    fn respond(self, status: StatusCode, body: EmbedReply) -> FunctionResult {
        FunctionResult::new(status, body)
    }
}

/// Handle one function invocation
pub async fn handle_event(handler: &EmbedHandler, event: FunctionEvent) -> FunctionResult {
    let request = FunctionRequest::from(event);
    handler.handle(&request, FunctionResponder).await
}

/// Decode a raw event and handle it
///
/// An undecodable event still yields a result (500) so the caller always
/// has exactly one reply to emit.
pub async fn handle_raw_event(handler: &EmbedHandler, raw: &str) -> FunctionResult {
    match serde_json::from_str::<FunctionEvent>(raw) {
        Ok(event) => handle_event(handler, event).await,
        Err(e) => FunctionResult::from_error(&ApiError::internal(e.to_string())),
    }
}
