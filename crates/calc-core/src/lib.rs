//! # calc-core: Pure Arithmetic Engine
//!
//! This crate is the **heart** of the calculator. It contains the
//! arithmetic operations and the operation log, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Calculator Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────┐   ┌─────────────────────────────────┐ │
//! │  │   CLI mode                  │   │   HTTP server mode              │ │
//! │  │   --a --b --op              │   │   GET /calc?a=&b=&op=           │ │
//! │  └──────────────┬──────────────┘   └───────────────┬─────────────────┘ │
//! │                 │   one fresh Engine per call      │                   │
//! │  ┌──────────────▼──────────────────────────────────▼────────────────┐  │
//! │  │               ★ calc-core (THIS CRATE) ★                         │  │
//! │  │                                                                   │  │
//! │  │   ┌───────────┐  ┌───────────────┐  ┌───────────┐                │  │
//! │  │   │  engine   │  │     types     │  │   error   │                │  │
//! │  │   │  Engine   │  │ OperationKind │  │ CoreError │                │  │
//! │  │   │  history  │  │   Operation   │  │           │                │  │
//! │  │   └───────────┘  └───────────────┘  └───────────┘                │  │
//! │  │                                                                   │  │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS + IN-MEMORY LOG            │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The `Engine` and its operation log
//! - [`types`] - `OperationKind` catalogue and the `Operation` record
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use calc_core::{Engine, OperationKind};
//!
//! let mut engine = Engine::new();
//! assert_eq!(engine.add(5.0, 3.0), 8.0);
//! assert!(engine.divide(1.0, 0.0).is_err());
//!
//! let last = engine.last_operation().unwrap();
//! assert_eq!(last.operation, OperationKind::Add);
//! assert_eq!(engine.history().len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::Engine;
pub use error::{CoreError, CoreResult};
pub use types::{Arity, Operation, OperationKind};
