// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod embed;
pub mod errors;
pub mod function;
pub mod handlers;
pub mod http_server;

pub use embed::{
    EmbedHandler, EmbedReply, EmbeddingRequest, EmbeddingResponse, InboundRequest, Responder,
};
pub use errors::{ApiError, ErrorResponse};
pub use function::{handle_event, handle_raw_event, FunctionEvent, FunctionResult};
pub use handlers::{health_handler, HealthResponse};
pub use http_server::{create_app, start_server, AppState};
