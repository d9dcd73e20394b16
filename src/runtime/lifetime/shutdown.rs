use tokio::signal;
use tracing::{info, warn};

use crate::storage::UrlIndex;

/// Wait for Ctrl+C
pub async fn listen_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, stopping server...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }
}

/// Final report once the server has stopped; the index is dropped after this
pub fn report_shutdown(index: &UrlIndex) {
    info!(
        "Server stopped, discarding {} in-memory link(s)",
        index.len()
    );
}
