//! Forwarding proxy handlers.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → preflight short-circuit (cors.rs)
//!     → target URL construction (api.rs / feed.rs)
//!     → bounded outbound fetch (fetch.rs)
//!     → success relay or error mapping (error.rs)
//! ```
//!
//! # Design Decisions
//! - The two routes share the fetch primitive and the success relay but keep
//!   their own validation, deadlines, cache policy, and error messages
//! - Upstream bodies pass through as text, unparsed and untransformed

pub mod api;
pub mod feed;
pub mod fetch;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::http::cors::apply_cors;
use crate::http::error::ProxyError;

/// Relay a 2xx upstream response to the client.
///
/// Mirrors the upstream content-type (or substitutes the route default),
/// stamps the route's advisory cache directives plus the CORS header, and
/// emits the raw body. Non-2xx statuses are mirrored with a JSON error
/// body instead. The success status is a literal 200 regardless of the
/// exact upstream 2xx code; see DESIGN.md.
pub(crate) async fn relay_success(
    upstream: reqwest::Response,
    default_content_type: &'static str,
    cache_control: &'static str,
    read_failure: ProxyError,
) -> Response {
    let status = upstream.status();
    if !status.is_success() {
        return ProxyError::UpstreamStatus(status.as_u16()).into_response();
    }

    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(default_content_type));

    let body = match upstream.text().await {
        Ok(text) => text,
        Err(error) => {
            tracing::error!(error = %error, "Failed to read upstream body");
            return read_failure.into_response();
        }
    };

    let mut response = (StatusCode::OK, body).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, content_type);
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_control),
    );
    apply_cors(headers);
    response
}
