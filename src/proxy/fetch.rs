//! Bounded outbound fetch primitive shared by both forwarders.
//!
//! # Responsibilities
//! - Own the single outbound `reqwest::Client` (connection pool, UA, redirects)
//! - Enforce a hard wall-clock deadline on every outbound call
//! - Keep deadline expiry distinct from other transport failures
//!
//! # Design Decisions
//! - The deadline races the whole send; losing the race drops the request
//!   future, which aborts the in-flight connection
//! - One attempt per inbound request; the deadline is the entire
//!   resilience policy

use std::time::Duration;

use axum::http::Method;
use reqwest::redirect::Policy;
use reqwest::{RequestBuilder, Response};
use thiserror::Error;
use url::Url;

/// Fixed descriptive User-Agent sent on every outbound call.
pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; WorldMonitor/1.0)";

/// Failure of a single bounded outbound call.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The wall-clock deadline elapsed; the in-flight call was cancelled.
    #[error("upstream call exceeded its deadline")]
    DeadlineExceeded,

    /// Any other transport-level failure (connect, TLS, protocol).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Shared outbound HTTP client.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .redirect(Policy::limited(10))
            .build()?;
        Ok(Self { http })
    }

    /// Start building an outbound request.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Dispatch a request with a hard deadline.
    ///
    /// The deadline covers connection establishment through response
    /// headers; body reads happen after this returns and are bounded by
    /// the server's outer request guard.
    pub async fn send(
        &self,
        request: RequestBuilder,
        deadline: Duration,
    ) -> Result<Response, FetchError> {
        match tokio::time::timeout(deadline, request.send()).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(error)) => Err(FetchError::Transport(error)),
            Err(_elapsed) => Err(FetchError::DeadlineExceeded),
        }
    }
}
