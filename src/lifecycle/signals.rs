//! OS signal handling.

use crate::lifecycle::Shutdown;

/// Wait for Ctrl+C and trigger the shutdown coordinator.
pub async fn shutdown_on_interrupt(shutdown: Shutdown) {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
    shutdown.trigger();
}
