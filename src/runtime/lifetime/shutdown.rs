use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

use crate::session::Session;

/// Waits for Ctrl+C, then ends the operator session
pub async fn listen_for_shutdown(session: Arc<Session>) {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }

    if session.logout() {
        info!("Active session closed on shutdown");
    }
}
