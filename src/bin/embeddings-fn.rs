// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Function binding runner: reads one event as JSON on stdin, writes one
//! result as JSON on stdout. Logs go to stderr.

use anyhow::{anyhow, Result};
use embeddings_proxy::{
    api::{handle_raw_event, AppState},
    config::ProxyConfig,
    version,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!("{} function invocation", version::get_version_string());

    let config = ProxyConfig::from_env()?;
    config.validate().map_err(|e| anyhow!(e))?;
    let state = AppState::from_config(&config)?;

    let mut raw = String::new();
    tokio::io::stdin().read_to_string(&mut raw).await?;

    let result = handle_raw_event(&state.embed_handler, &raw).await;

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(serde_json::to_string(&result)?.as_bytes())
        .await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    Ok(())
}
