// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::Parser;
use embeddings_proxy::{api::start_server, cli::ServerArgs, config::ProxyConfig, version};
use std::env;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    let dotenv_loaded = dotenv::dotenv().is_ok();

    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("Starting {}", version::get_version_string());
    info!("Features: {}", version::FEATURES.join(", "));
    if !dotenv_loaded {
        warn!("No .env file found, using system environment variables");
    }

    let args = ServerArgs::parse();
    let config = args.apply(ProxyConfig::from_env()?);
    config.validate().map_err(|e| anyhow!(e))?;

    info!(
        "Upstream: {} (timeout {:?}, credential {})",
        config.openai.base_url,
        config.openai.request_timeout,
        if config.openai.has_api_key() { "set" } else { "missing" }
    );

    start_server(config).await
}
