//! # Error Types
//!
//! Domain-specific error types for calc-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  calc-core errors (this file)                                          │
//! │  └── CoreError        - Domain errors (division by zero, sqrt(-x))     │
//! │                                                                         │
//! │  calculator errors (app crate)                                         │
//! │  ├── ConfigError      - Invalid server configuration                   │
//! │  └── AppError         - What the CLI / HTTP caller sees                │
//! │                                                                         │
//! │  Flow: CoreError → AppError → stderr + exit 1  |  HTTP 400 body        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are values returned from the engine, never panics. A failed
//! operation leaves the operation log untouched.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Arithmetic domain errors.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoreError {
    /// Division with a zero divisor.
    #[error("division by zero is not allowed")]
    DivisionByZero,

    /// Square root of a negative radicand.
    ///
    /// ## When This Occurs
    /// ```text
    /// sqrt(-4)
    ///      │
    ///      ▼
    /// InvalidDomain { value: -4.0 }
    ///      │
    ///      ▼
    /// Caller sees: "square root of negative number is not allowed"
    /// ```
    #[error("square root of negative number is not allowed")]
    InvalidDomain { value: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
