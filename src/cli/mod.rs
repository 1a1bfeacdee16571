// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use clap::Parser;

use crate::config::{ProxyConfig, DEFAULT_HOST, DEFAULT_PORT};

/// Embeddings proxy server
#[derive(Parser, Debug)]
#[command(name = "embeddings-proxy")]
#[command(version)]
#[command(about = "HTTP proxy that forwards text to the OpenAI embeddings API", long_about = None)]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerArgs {
    /// Overlay command-line values onto an environment-derived config
    pub fn apply(&self, mut config: ProxyConfig) -> ProxyConfig {
        config.host = self.host.clone();
        config.port = self.port;
        config
    }
}
