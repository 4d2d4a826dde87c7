//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the forwarding proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Generic API forwarder settings.
    pub api: ApiProxyConfig,

    /// Feed forwarder settings.
    pub feed: FeedProxyConfig,

    /// Whole-request timeout guard.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Generic API forwarder configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiProxyConfig {
    /// Fixed upstream origin the wildcard path is resolved against.
    pub origin: String,

    /// Hard deadline for the outbound call, in seconds.
    pub timeout_secs: u64,

    /// Maximum accepted POST body size, in bytes.
    pub max_body_bytes: usize,
}

impl Default for ApiProxyConfig {
    fn default() -> Self {
        Self {
            origin: "https://worldmonitor.app".to_string(),
            timeout_secs: 25,
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Feed forwarder configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedProxyConfig {
    /// Hard deadline for the outbound call, in seconds.
    pub timeout_secs: u64,
}

impl Default for FeedProxyConfig {
    fn default() -> Self {
        Self { timeout_secs: 15 }
    }
}

/// Timeout configuration for the inbound side.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed for an inbound request/response exchange, in
    /// seconds. Must exceed the outbound deadlines so the per-route
    /// timeout mapping (504 + JSON body) wins over the generic guard.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 60 }
    }
}
