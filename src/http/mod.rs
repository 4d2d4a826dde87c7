//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (add request ID)
//!     → proxy handlers (preflight / forward)
//!     → cors.rs + error.rs (response shaping)
//!     → Send to client
//! ```

pub mod cors;
pub mod error;
pub mod request;
pub mod server;

pub use error::ProxyError;
pub use request::{RequestId, RequestIdExt, RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
