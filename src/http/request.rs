//! Request identity middleware.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) as early as possible
//! - Respect an inbound `x-request-id` if the caller already set one
//! - Expose the ID to handlers via a request extension
//!
//! # Design Decisions
//! - The ID is stamped onto the request headers and extensions, not the
//!   response; handlers decide what to surface
//! - The service is transparent: response and error types pass through

use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{HeaderValue, Request};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header used to carry the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Request ID attached to every inbound request.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// Layer that installs [`RequestIdService`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Middleware that assigns a request ID if none is present.
#[derive(Clone, Debug)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for RequestIdService<S>
where
    S: Service<Request<Body>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let id = req
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        if let Ok(value) = HeaderValue::from_str(&id) {
            req.headers_mut().insert(X_REQUEST_ID, value);
        }
        req.extensions_mut().insert(RequestId(id));

        self.inner.call(req)
    }
}

/// Convenience accessor for handlers working with raw requests.
pub trait RequestIdExt {
    /// The request ID assigned by [`RequestIdLayer`], or "unknown".
    fn request_id(&self) -> &str;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> &str {
        self.extensions()
            .get::<RequestId>()
            .map(|id| id.0.as_str())
            .unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_reads_as_unknown() {
        let req = Request::new(Body::empty());
        assert_eq!(req.request_id(), "unknown");
    }

    #[test]
    fn extension_id_is_exposed() {
        let mut req = Request::new(Body::empty());
        req.extensions_mut().insert(RequestId("abc-123".into()));
        assert_eq!(req.request_id(), "abc-123");
    }
}
