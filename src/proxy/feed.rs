//! Feed forwarder.
//!
//! Fetches a caller-supplied RSS/Atom/XML feed URL and relays the bytes
//! unparsed. The only validation is on the URL itself; feed content is
//! never inspected.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Method, Request};
use axum::response::{IntoResponse, Response};
use url::form_urlencoded;
use url::Url;

use crate::http::cors::{self, FEED_METHODS};
use crate::http::error::ProxyError;
use crate::http::request::RequestIdExt;
use crate::http::server::AppState;
use crate::proxy::fetch::FetchError;
use crate::proxy::relay_success;

const ACCEPT: &str = "application/rss+xml, application/xml, text/xml, application/atom+xml, */*";
const CACHE_CONTROL: &str = "s-maxage=300, stale-while-revalidate=600";
const DEFAULT_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Handler for `/rss-proxy?url=…`.
pub async fn feed_proxy(State(state): State<AppState>, request: Request<Body>) -> Response {
    if request.method() == Method::OPTIONS {
        return cors::preflight(FEED_METHODS);
    }

    let request_id = request.request_id().to_owned();

    let target = match feed_target(request.uri().query()) {
        Ok(target) => target,
        Err(error) => {
            tracing::warn!(request_id = %request_id, reason = %error, "Rejected feed URL");
            return error.into_response();
        }
    };

    tracing::debug!(request_id = %request_id, target = %target, "Forwarding feed request");

    // The upstream call is always a GET, whatever verb the client used.
    let outbound = state
        .upstream
        .request(Method::GET, target)
        .header(header::ACCEPT, ACCEPT);

    match state.upstream.send(outbound, state.feed_deadline).await {
        Ok(upstream) => {
            relay_success(
                upstream,
                DEFAULT_CONTENT_TYPE,
                CACHE_CONTROL,
                ProxyError::FeedUnreachable,
            )
            .await
        }
        Err(FetchError::DeadlineExceeded) => {
            tracing::warn!(request_id = %request_id, "Feed request hit its deadline");
            ProxyError::FeedTimeout.into_response()
        }
        Err(FetchError::Transport(error)) => {
            tracing::error!(request_id = %request_id, error = %error, "Feed request failed");
            ProxyError::FeedUnreachable.into_response()
        }
    }
}

/// Extract and validate the `url` parameter. Runs before any network I/O.
fn feed_target(query: Option<&str>) -> Result<Url, ProxyError> {
    let raw = query
        .and_then(|query| {
            form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "url")
                .map(|(_, value)| value.into_owned())
        })
        .ok_or(ProxyError::MissingUrlParameter)?;

    let parsed = Url::parse(&raw).map_err(|_| ProxyError::InvalidUrl)?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(ProxyError::InvalidUrlProtocol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter() {
        assert_eq!(feed_target(None), Err(ProxyError::MissingUrlParameter));
        assert_eq!(
            feed_target(Some("other=1")),
            Err(ProxyError::MissingUrlParameter)
        );
    }

    #[test]
    fn unparseable_url() {
        assert_eq!(
            feed_target(Some("url=not%20a%20url")),
            Err(ProxyError::InvalidUrl)
        );
    }

    #[test]
    fn disallowed_schemes() {
        assert_eq!(
            feed_target(Some("url=ftp%3A%2F%2Fexample.com%2Ffeed.xml")),
            Err(ProxyError::InvalidUrlProtocol)
        );
        assert_eq!(
            feed_target(Some("url=javascript%3Aalert(1)")),
            Err(ProxyError::InvalidUrlProtocol)
        );
    }

    #[test]
    fn http_and_https_pass() {
        let target = feed_target(Some("url=https%3A%2F%2Fexample.com%2Ffeed.xml")).unwrap();
        assert_eq!(target.as_str(), "https://example.com/feed.xml");
        assert!(feed_target(Some("url=http%3A%2F%2Fexample.com%2Frss")).is_ok());
    }

    #[test]
    fn first_url_value_wins() {
        let target =
            feed_target(Some("url=https%3A%2F%2Fa.example%2F&url=https%3A%2F%2Fb.example%2F"))
                .unwrap();
        assert_eq!(target.host_str(), Some("a.example"));
    }
}
