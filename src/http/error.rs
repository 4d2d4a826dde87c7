//! Request-terminal error taxonomy.
//!
//! Every failure a handler can hit maps to exactly one variant here, and
//! every variant maps to a fixed status plus a short JSON body shaped
//! `{"error": <message>}`. Errors are never retried or escalated beyond
//! the request that produced them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::http::cors::apply_cors;

/// Terminal error for a proxied request.
///
/// The API and feed routes keep distinct timeout/transport messages, so
/// those taxonomy entries appear once per route.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProxyError {
    #[error("Missing API path")]
    MissingApiPath,

    #[error("Missing url parameter")]
    MissingUrlParameter,

    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Invalid URL protocol")]
    InvalidUrlProtocol,

    /// Upstream answered outside 2xx; its status is mirrored.
    #[error("Upstream returned {0}")]
    UpstreamStatus(u16),

    #[error("Request timed out")]
    ApiTimeout,

    #[error("Failed to fetch from upstream")]
    ApiUnreachable,

    #[error("Feed request timed out")]
    FeedTimeout,

    #[error("Failed to fetch feed")]
    FeedUnreachable,

    #[error("Request body too large")]
    BodyTooLarge,
}

impl ProxyError {
    /// HTTP status emitted for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingApiPath
            | Self::MissingUrlParameter
            | Self::InvalidUrl
            | Self::InvalidUrlProtocol => StatusCode::BAD_REQUEST,
            Self::UpstreamStatus(status) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::ApiTimeout | Self::FeedTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::ApiUnreachable | Self::FeedUnreachable => StatusCode::BAD_GATEWAY,
            Self::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let mut response =
            (self.status(), Json(json!({ "error": self.to_string() }))).into_response();
        apply_cors(response.headers_mut());
        response
    }
}
