//! # Calculator Service Shell
//!
//! Translates command-line flags or HTTP requests into calls on the
//! [`calc_core::Engine`] and formats the results.
//!
//! ## Module Organization
//! ```text
//! calculator/
//! ├── lib.rs          ◄─── You are here (exports, shared state)
//! ├── main.rs         ◄─── Mode selection, exit status
//! ├── args.rs         ◄─── clap flags
//! ├── config.rs       ◄─── ServerConfig
//! ├── selector.rs     ◄─── add/sub/mul/div → OperationKind
//! ├── operand.rs      ◄─── a / b parsing (rejects overflow)
//! ├── calculate.rs    ◄─── CLI mode
//! ├── json.rs         ◄─── "key": value bodies, %g numbers
//! ├── logging.rs      ◄─── tracing subscriber
//! ├── error.rs        ◄─── AppError (exit code / HTTP status)
//! └── server/
//!     ├── mod.rs      ◄─── Router, listener, graceful shutdown
//!     └── handlers.rs ◄─── /, /calc, /health
//! ```

pub mod args;
pub mod calculate;
pub mod config;
pub mod error;
pub mod json;
pub mod logging;
pub mod operand;
pub mod selector;
pub mod server;

// Re-exports
pub use args::Args;
pub use config::ServerConfig;
pub use error::AppError;

/// Banner printed on startup in both modes.
pub const BANNER: &str = "🧮 Calculator\n=============";

/// Shared application state.
///
/// Read-only; holds no engine.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ServerConfig,
}
