//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with both forwarder routes
//! - Wire up middleware (tracing, request ID, outer timeout guard)
//! - Share the outbound client and parsed origin with handlers
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{any, get};
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use url::Url;

use crate::config::ProxyConfig;
use crate::http::request::RequestIdLayer;
use crate::proxy::api::api_proxy;
use crate::proxy::feed::feed_proxy;
use crate::proxy::fetch::UpstreamClient;

/// Application state injected into handlers.
///
/// Everything here is immutable per-process; requests share nothing
/// mutable with one another.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
    /// API origin, parsed once at startup.
    pub api_origin: Arc<Url>,
    pub api_deadline: Duration,
    pub feed_deadline: Duration,
    pub max_body_bytes: usize,
}

/// Error constructing the server from a configuration.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid api.origin: {0}")]
    Origin(#[from] url::ParseError),

    #[error("failed to build outbound HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// HTTP server for the forwarding proxy.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Result<Self, ServerError> {
        let state = AppState {
            upstream: UpstreamClient::new()?,
            api_origin: Arc::new(Url::parse(&config.api.origin)?),
            api_deadline: Duration::from_secs(config.api.timeout_secs),
            feed_deadline: Duration::from_secs(config.feed.timeout_secs),
            max_body_bytes: config.api.max_body_bytes,
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        Router::new()
            // The wildcard route needs at least one segment; the bare and
            // trailing-slash forms land in the handler's missing-path branch.
            .route("/api", any(api_proxy))
            .route("/api/", any(api_proxy))
            .route("/api/{*path}", any(api_proxy))
            .route("/rss-proxy", any(feed_proxy))
            .route("/healthz", get(healthz))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Liveness probe.
async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
