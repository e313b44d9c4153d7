//! # HTTP Server
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         HTTP Routes                                     │
//! │                                                                         │
//! │  GET /        ──► 200 text/html         static form page               │
//! │  GET /calc    ──► 200 application/json  {"a", "b", "operation", "result"}
//! │               └─► 400 text/plain        bad a / b / op, division by 0  │
//! │  GET /health  ──► 200 application/json  {"status": "ok", "service"}    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Shared state is read-only configuration. Engines are created inside the
//! `/calc` handler, one per request.

pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::AppState;

/// Builds the router with all routes and request tracing.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/calc", get(handlers::calc))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the listener and serves until Ctrl+C / SIGTERM.
///
/// ## Errors
/// [`AppError::Bind`] when the address cannot be bound; the caller exits
/// with a failure status.
pub async fn run(config: ServerConfig) -> Result<(), AppError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;

    let local = listener.local_addr().map_err(AppError::Serve)?;
    info!(%local, service = %config.service_name, "Server running at http://localhost:{}", local.port());

    let state = Arc::new(AppState { config });
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Serve)?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to install Ctrl+C handler");
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
                error!(?e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received, starting graceful shutdown...");
}
