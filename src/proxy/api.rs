//! Generic API forwarder.
//!
//! Rebuilds the upstream path from the catch-all wildcard segments,
//! filters the query string, and relays the upstream response under a
//! permissive CORS policy.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Method, Request};
use axum::response::{IntoResponse, Response};
use url::form_urlencoded;
use url::Url;

use crate::http::cors::{self, API_METHODS};
use crate::http::error::ProxyError;
use crate::http::request::RequestIdExt;
use crate::http::server::AppState;
use crate::proxy::fetch::FetchError;
use crate::proxy::relay_success;

const ACCEPT: &str = "application/json, */*";
const CACHE_CONTROL: &str = "s-maxage=120, stale-while-revalidate=300";

/// Query key that carries wildcard path segments on some hosting
/// platforms. Never forwarded upstream.
const ROUTING_KEY: &str = "path";

/// Handler for `/api` and everything beneath it.
pub async fn api_proxy(State(state): State<AppState>, request: Request<Body>) -> Response {
    if request.method() == Method::OPTIONS {
        return cors::preflight(API_METHODS);
    }

    let request_id = request.request_id().to_owned();
    let method = request.method().clone();
    let (parts, body) = request.into_parts();

    let remainder = parts.uri.path().strip_prefix("/api").unwrap_or("");
    let target = match build_upstream_url(&state.api_origin, remainder, parts.uri.query()) {
        Ok(target) => target,
        Err(error) => {
            tracing::warn!(request_id = %request_id, path = %parts.uri.path(), "Missing API path");
            return error.into_response();
        }
    };

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        target = %target,
        "Forwarding API request"
    );

    let mut outbound = state
        .upstream
        .request(method.clone(), target)
        .header(header::ACCEPT, ACCEPT);

    if method == Method::POST {
        let bytes = match axum::body::to_bytes(body, state.max_body_bytes).await {
            Ok(bytes) => bytes,
            Err(_) => return ProxyError::BodyTooLarge.into_response(),
        };
        if !bytes.is_empty() {
            outbound = outbound
                .header(header::CONTENT_TYPE, "application/json")
                .body(bytes);
        }
    }

    match state.upstream.send(outbound, state.api_deadline).await {
        Ok(upstream) => {
            relay_success(
                upstream,
                "application/json",
                CACHE_CONTROL,
                ProxyError::ApiUnreachable,
            )
            .await
        }
        Err(FetchError::DeadlineExceeded) => {
            tracing::warn!(request_id = %request_id, "API request hit its deadline");
            ProxyError::ApiTimeout.into_response()
        }
        Err(FetchError::Transport(error)) => {
            tracing::error!(request_id = %request_id, error = %error, "API request failed");
            ProxyError::ApiUnreachable.into_response()
        }
    }
}

/// Build the upstream URL from the wildcard remainder and inbound query.
///
/// The forwarded query keeps every inbound pair except the routing key;
/// repeated keys keep only their first value.
fn build_upstream_url(
    origin: &Url,
    remainder: &str,
    query: Option<&str>,
) -> Result<Url, ProxyError> {
    let segments: Vec<&str> = remainder.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return Err(ProxyError::MissingApiPath);
    }

    let mut target = origin.clone();
    target.set_path(&format!("/api/{}", segments.join("/")));

    let mut forwarded: Vec<(String, String)> = Vec::new();
    if let Some(query) = query {
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if key == ROUTING_KEY {
                continue;
            }
            if forwarded.iter().any(|(seen, _)| *seen == key) {
                continue;
            }
            forwarded.push((key.into_owned(), value.into_owned()));
        }
    }

    if forwarded.is_empty() {
        target.set_query(None);
    } else {
        target
            .query_pairs_mut()
            .clear()
            .extend_pairs(forwarded.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    Ok(target)
}
