//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parseable)
//! - Check the upstream origin is an absolute http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    BindAddress(String),

    #[error("api.origin {0:?} is not an absolute http(s) URL")]
    ApiOrigin(String),

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("timeouts.request_secs must exceed both outbound deadlines")]
    GuardTooTight,
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.api.origin) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::ApiOrigin(config.api.origin.clone())),
    }

    if config.api.timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration("api.timeout_secs"));
    }
    if config.feed.timeout_secs == 0 {
        errors.push(ValidationError::ZeroDuration("feed.timeout_secs"));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroDuration("timeouts.request_secs"));
    } else if config.timeouts.request_secs <= config.api.timeout_secs.max(config.feed.timeout_secs)
    {
        errors.push(ValidationError::GuardTooTight);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
