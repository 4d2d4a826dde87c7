//! CORS Forwarding Proxy (monitor-proxy)
//!
//! A small forwarding proxy built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                 MONITOR PROXY                   │
//!                    │                                                 │
//!   Client Request   │  ┌─────────┐   ┌──────────────┐                │
//!   ─────────────────┼─▶│  http   │──▶│ /api/{*path} │── fixed origin │
//!                    │  │ server  │   │  forwarder   │                │
//!                    │  └─────────┘   ├──────────────┤                │
//!                    │                │ /rss-proxy   │── caller URL   │
//!                    │                │  forwarder   │                │
//!                    │                └──────┬───────┘                │
//!                    │                       │                        │
//!                    │                ┌──────▼───────┐                │
//!   Client Response  │                │ bounded      │                │
//!   ◀────────────────┼────────────────│ upstream     │◀── Upstream    │
//!                    │                │ fetch        │                │
//!                    │                └──────────────┘                │
//!                    └────────────────────────────────────────────────┘
//! ```
//!
//! Every response, success or failure, carries `Access-Control-Allow-Origin: *`;
//! the proxy exists to put browser-hostile upstreams behind a permissive origin.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use monitor_proxy::config::{self, ProxyConfig};
use monitor_proxy::http::HttpServer;
use monitor_proxy::lifecycle::{signals, Shutdown};
use monitor_proxy::observability::logging;

/// CORS forwarding proxy for the WorldMonitor API and third-party feeds.
#[derive(Debug, Parser)]
#[command(name = "monitor-proxy", version)]
struct Args {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("monitor_proxy=debug,tower_http=debug");

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => config::loader::load_config(path)?,
        None => ProxyConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        api_origin = %config.api.origin,
        api_timeout_secs = config.api.timeout_secs,
        feed_timeout_secs = config.feed.timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_interrupt(shutdown));

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
