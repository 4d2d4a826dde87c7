//! CORS Forwarding Proxy Library
//!
//! A thin forwarding layer between browser clients and two upstream kinds:
//! the fixed WorldMonitor API origin (catch-all path proxy) and arbitrary
//! third-party RSS/Atom feeds (URL-parameterized proxy).

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
