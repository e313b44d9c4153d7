//! # Domain Types
//!
//! The closed catalogue of operations and the record logged for each one.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  OperationKind  │   │    Operation    │   │      Arity      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Add            │   │  a              │   │  Unary (sqrt)   │       │
//! │  │  Subtract       │   │  b (0 if unary) │   │  Binary         │       │
//! │  │  Multiply       │   │  operation      │   └─────────────────┘       │
//! │  │  Divide         │   │  result         │                             │
//! │  │  Power          │   └─────────────────┘                             │
//! │  │  Sqrt           │                                                   │
//! │  │  Percentage     │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Operation Kind
// =============================================================================

/// Number of operands an operation consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Only `a` is used; `b` is logged as 0.
    Unary,
    /// Both `a` and `b` are used.
    Binary,
}

/// Every operation the engine supports.
///
/// Serialized as its lowercase log tag (`"add"`, `"subtract"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Percentage,
}

impl OperationKind {
    /// All operations, in declaration order.
    pub const ALL: [OperationKind; 7] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
        OperationKind::Power,
        OperationKind::Sqrt,
        OperationKind::Percentage,
    ];

    /// Tag recorded in the operation log.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Subtract => "subtract",
            OperationKind::Multiply => "multiply",
            OperationKind::Divide => "divide",
            OperationKind::Power => "power",
            OperationKind::Sqrt => "sqrt",
            OperationKind::Percentage => "percentage",
        }
    }

    /// Looks up an operation by its log tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }

    /// Symbol used when printing `a <symbol> b = result`.
    pub const fn symbol(&self) -> &'static str {
        match self {
            OperationKind::Add => "+",
            OperationKind::Subtract => "-",
            OperationKind::Multiply => "*",
            OperationKind::Divide => "/",
            OperationKind::Power => "^",
            OperationKind::Sqrt => "√",
            OperationKind::Percentage => "%",
        }
    }

    #[inline]
    pub const fn arity(&self) -> Arity {
        match self {
            OperationKind::Sqrt => Arity::Unary,
            _ => Arity::Binary,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Operation Record
// =============================================================================

/// One completed calculation, as stored in the engine's log.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// First operand (the value, for percentage).
    pub a: f64,

    /// Second operand; 0 for unary operations.
    pub b: f64,

    /// Which function was applied.
    pub operation: OperationKind,

    /// Computed output.
    pub result: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
