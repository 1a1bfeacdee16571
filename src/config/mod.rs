// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Proxy configuration
//!
//! Built once from the environment at startup and passed explicitly into the
//! handler and provider constructors.

pub mod provider;

pub use provider::OpenAiConfig;

use anyhow::{anyhow, Result};
use std::env;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;

/// Top-level configuration for both transport bindings
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Bind address for the persistent server
    pub host: String,
    /// Listen port for the persistent server
    pub port: u16,
    /// Upstream provider settings
    pub openai: OpenAiConfig,
}

impl ProxyConfig {
    /// Load configuration from environment variables
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    /// A set but unparseable `PORT` is an error, matching the CLI.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_env_value("PORT", env::var("PORT").ok(), DEFAULT_PORT)?,
            openai: OpenAiConfig::from_env()?,
        })
    }

    /// `host:port` string suitable for `TcpListener::bind`
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate the configuration
    ///
    /// A missing credential is not a validation failure: the proxy starts
    /// anyway and answers embedding requests with a configuration error.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }
        self.openai.validate()
    }
}

/// Parse a numeric environment value, falling back to `default` when unset
pub(crate) fn parse_env_value<T>(name: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|e| anyhow!("Invalid {} '{}': {}", name, value, e)),
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            openai: OpenAiConfig::default(),
        }
    }
}
