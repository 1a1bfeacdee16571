// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
// Version information for the embeddings proxy

/// Semantic version number
pub const VERSION_NUMBER: &str = env!("CARGO_PKG_VERSION");

/// Service name used in logs and the outbound User-Agent
pub const SERVICE_NAME: &str = "embeddings-proxy";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "openai-embeddings",
    "http-server-binding",
    "function-binding",
    "upstream-timeout",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Embeddings Proxy {}", VERSION_NUMBER)
}

/// User-Agent header sent to upstream providers
pub fn user_agent() -> String {
    format!("{}/{}", SERVICE_NAME, VERSION_NUMBER)
}
