//! Static Site Server
//!
//! Serves the page, its assets and its data documents over HTTP. The page
//! loads its JSON by relative path, which browsers only allow from an HTTP
//! origin.

use axum::Router;
use std::path::Path;
use thiserror::Error;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::ServerConfig;

/// Errors that can stop the server
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Site directory not found: {0}")]
    MissingRoot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the router serving `root`, with `index.html` for directories
pub fn build_router(root: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(root).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
}

/// Serve `root` until Ctrl+C or SIGTERM
pub async fn serve(root: &Path, config: &ServerConfig) -> Result<(), ServeError> {
    if !root.is_dir() {
        return Err(ServeError::MissingRoot(root.display().to_string()));
    }

    let router = build_router(root);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Serving {} on http://{}", root.display(), addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
