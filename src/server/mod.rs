//! Partsguard HTTP sidecar.
//!
//! Exposes the classifier to backends written in other languages:
//! - Text checks (check, censor, wrap)
//! - Registration validation (username, e-mail)
//! - Listing validation
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use partsguard::server::{run, AppState, ServerConfig};
//!
//! let config = ServerConfig::default().with_port(8080);
//! run(Arc::new(AppState::new(config))).await?;
//! ```

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use tokio::net::TcpListener;

pub use config::ServerConfig;
pub use handlers::{create_router, health_check};
pub use state::{AppState, ClassifierStats, StatsSummary};

use crate::error::{GuardError, Result};

/// Bind the configured address and serve until Ctrl-C.
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let addr = state.config.addr;
    let app = create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| GuardError::Server(format!("Failed to bind to {addr}: {e}")))?;

    tracing::info!("Partsguard server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| GuardError::Server(format!("Server error: {e}")))?;

    tracing::info!("Partsguard server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
