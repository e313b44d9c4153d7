//! # Shell Error Type
//!
//! Unified error type for the CLI and the HTTP server.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Service Shell                      │
//! │                                                                         │
//! │  Input                 AppError                  Surface                │
//! │  ─────                 ────────                  ───────                │
//! │  a=x            ──► InvalidParameter("a")  ──► 400 "Invalid parameter 'a'"
//! │  op=pow         ──► UnknownOperation       ──► 400 "Invalid operation"  │
//! │                                             └─► stderr + exit 1 (CLI)   │
//! │  b=0, op=div    ──► Core(DivisionByZero)   ──► 400 error text           │
//! │                                             └─► stderr + exit 1 (CLI)   │
//! │  port in use    ──► Bind                   ──► stderr + exit 1          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use calc_core::CoreError;

use crate::config::ConfigError;

/// Shell errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or unparseable numeric query parameter.
    #[error("Invalid parameter '{0}'")]
    InvalidParameter(&'static str),

    /// Selector outside the supported set.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidParameter(_) | AppError::UnknownOperation(_) | AppError::Core(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Config(_)
            | AppError::Bind { .. }
            | AppError::Serve(_)
            | AppError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body sent to HTTP callers.
    fn http_message(&self) -> String {
        match self {
            AppError::UnknownOperation(_) => "Invalid operation".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "rejected request");
        }
        (status, format!("{}\n", self.http_message())).into_response()
    }
}
