//! CORS policy shared by both proxy routes.
//!
//! # Responsibilities
//! - Answer preflight `OPTIONS` requests (204, no body, policy headers)
//! - Stamp `Access-Control-Allow-Origin: *` on every other response
//!
//! # Design Decisions
//! - The allow-origin header is applied unconditionally, validation
//!   failures included, so browsers can always read the error body
//! - Each route supplies its own allowed-methods list; everything else
//!   about the policy is identical between routes

use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

/// Allowed verbs for the generic API forwarder.
pub const API_METHODS: &str = "GET, POST, OPTIONS";

/// Allowed verbs for the feed forwarder.
pub const FEED_METHODS: &str = "GET, OPTIONS";

/// Set the permissive allow-origin header on an outgoing response.
pub fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
}

/// Answer a CORS preflight request.
///
/// Runs before any parameter validation and terminates handling; no
/// upstream call is made.
pub fn preflight(allowed_methods: &'static str) -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    let headers = response.headers_mut();
    apply_cors(headers);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(allowed_methods),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
