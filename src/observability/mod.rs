//! Observability subsystem.
//!
//! Structured logging only; the proxy deliberately carries no metrics
//! exporter or tracing backend.

pub mod logging;
