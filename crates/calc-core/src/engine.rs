//! # Engine
//!
//! Stateless arithmetic plus an append-only log of completed operations.
//!
//! ## Log Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Operation Log                                     │
//! │                                                                         │
//! │  add(5, 3)       ──► Ok   ──► push {5, 3, add, 8}                       │
//! │  divide(1, 0)    ──► Err  ──► (nothing appended)                        │
//! │  multiply(2, 4)  ──► Ok   ──► push {2, 4, multiply, 8}                  │
//! │                                                                         │
//! │  history()        = [add, multiply]   (earliest first)                  │
//! │  last_operation() = multiply                                            │
//! │  clear_history()  = []                (idempotent)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An `Engine` is created per CLI invocation or per HTTP request and is
//! never shared.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::{Operation, OperationKind};

/// Arithmetic engine owning its operation log.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    history: Vec<Operation>,
}

impl Engine {
    /// Creates an engine with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing addition");
        self.record(a, b, OperationKind::Add, a + b)
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing subtraction");
        self.record(a, b, OperationKind::Subtract, a - b)
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing multiplication");
        self.record(a, b, OperationKind::Multiply, a * b)
    }

    /// Divides `a` by `b`.
    ///
    /// ## Errors
    /// [`CoreError::DivisionByZero`] when `b` is zero (either sign).
    pub fn divide(&mut self, a: f64, b: f64) -> CoreResult<f64> {
        debug!(a, b, "performing division");
        if b == 0.0 {
            return Err(CoreError::DivisionByZero);
        }
        Ok(self.record(a, b, OperationKind::Divide, a / b))
    }

    /// Raises `a` to the power `b` with IEEE 754 `pow` semantics.
    pub fn power(&mut self, a: f64, b: f64) -> f64 {
        debug!(a, b, "performing exponentiation");
        self.record(a, b, OperationKind::Power, a.powf(b))
    }

    /// Non-negative square root of `a`. Logged with `b = 0`.
    ///
    /// ## Errors
    /// [`CoreError::InvalidDomain`] when `a < 0`.
    pub fn sqrt(&mut self, a: f64) -> CoreResult<f64> {
        debug!(a, "performing square root");
        if a < 0.0 {
            return Err(CoreError::InvalidDomain { value: a });
        }
        Ok(self.record(a, 0.0, OperationKind::Sqrt, a.sqrt()))
    }

    /// `percentage` percent of `value`.
    pub fn percentage(&mut self, value: f64, percentage: f64) -> f64 {
        debug!(value, percentage, "performing percentage");
        self.record(
            value,
            percentage,
            OperationKind::Percentage,
            value * (percentage / 100.0),
        )
    }

    /// Dispatches `kind` to the matching operation.
    ///
    /// This is the single place where an [`OperationKind`] is bound to its
    /// function. `b` is ignored for unary operations.
    pub fn apply(&mut self, kind: OperationKind, a: f64, b: f64) -> CoreResult<f64> {
        match kind {
            OperationKind::Add => Ok(self.add(a, b)),
            OperationKind::Subtract => Ok(self.subtract(a, b)),
            OperationKind::Multiply => Ok(self.multiply(a, b)),
            OperationKind::Divide => self.divide(a, b),
            OperationKind::Power => Ok(self.power(a, b)),
            OperationKind::Sqrt => self.sqrt(a),
            OperationKind::Percentage => Ok(self.percentage(a, b)),
        }
    }

    // =========================================================================
    // Log Access
    // =========================================================================

    /// All recorded operations, earliest first.
    pub fn history(&self) -> &[Operation] {
        &self.history
    }

    /// Empties the log.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Most recently recorded operation, if any.
    pub fn last_operation(&self) -> Option<&Operation> {
        self.history.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    fn record(&mut self, a: f64, b: f64, operation: OperationKind, result: f64) -> f64 {
        self.history.push(Operation {
            a,
            b,
            operation,
            result,
        });
        result
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let mut engine = Engine::new();
        assert_eq!(engine.add(2.5, 3.5), 6.0);
        assert_eq!(engine.add(-2.5, -3.5), -6.0);
        assert_eq!(engine.add(-2.5, 3.5), 1.0);
        assert_eq!(engine.add(5.0, 0.0), 5.0);
    }

    #[test]
    fn test_subtract() {
        let mut engine = Engine::new();
        assert_eq!(engine.subtract(10.0, 3.0), 7.0);
        assert_eq!(engine.subtract(3.0, 10.0), -7.0);
        assert_eq!(engine.subtract(-5.0, -3.0), -2.0);
    }

    #[test]
    fn test_multiply() {
        let mut engine = Engine::new();
        assert_eq!(engine.multiply(4.0, 3.0), 12.0);
        assert_eq!(engine.multiply(5.0, 0.0), 0.0);
        assert_eq!(engine.multiply(-4.0, 3.0), -12.0);
        assert_eq!(engine.multiply(2.5, 4.0), 10.0);
    }

    #[test]
    fn test_native_float_semantics() {
        let mut engine = Engine::new();
        assert_eq!(engine.add(0.1, 0.2), 0.1 + 0.2);
        assert_eq!(engine.subtract(1e308, -1e308), f64::INFINITY);
    }

    #[test]
    fn test_divide() {
        let mut engine = Engine::new();
        assert_eq!(engine.divide(10.0, 2.0), Ok(5.0));
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn test_divide_by_zero_leaves_log_unchanged() {
        let mut engine = Engine::new();
        engine.add(1.0, 1.0);

        assert_eq!(engine.divide(10.0, 0.0), Err(CoreError::DivisionByZero));
        assert_eq!(engine.divide(10.0, -0.0), Err(CoreError::DivisionByZero));
        assert_eq!(engine.len(), 1);
        assert_eq!(engine.last_operation().unwrap().operation, OperationKind::Add);
    }

    #[test]
    fn test_power() {
        let mut engine = Engine::new();
        assert_eq!(engine.power(3.0, 2.0), 9.0);
        assert_eq!(engine.power(2.0, 3.0), 8.0);
        assert_eq!(engine.power(5.0, 0.0), 1.0);
        assert_eq!(engine.power(7.0, 1.0), 7.0);
        assert_eq!(engine.power(4.0, 0.5), 2.0);
        assert_eq!(engine.power(2.0, -1.0), 0.5);
        assert!(engine.power(-8.0, 1.0 / 3.0).is_nan());
    }

    #[test]
    fn test_sqrt() {
        let mut engine = Engine::new();
        assert_eq!(engine.sqrt(9.0), Ok(3.0));
        assert_eq!(engine.sqrt(0.0), Ok(0.0));

        let last = engine.last_operation().unwrap();
        assert_eq!(last.operation, OperationKind::Sqrt);
        assert_eq!(last.b, 0.0);
    }

    #[test]
    fn test_sqrt_negative_leaves_log_unchanged() {
        let mut engine = Engine::new();
        let err = engine.sqrt(-1.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDomain { .. }));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_percentage() {
        let mut engine = Engine::new();
        let cases = [(100.0, 10.0, 10.0), (200.0, 25.0, 50.0), (80.0, 50.0, 40.0)];
        for (value, pct, expected) in cases {
            let result = engine.percentage(value, pct);
            assert!(
                ((result - expected) / expected).abs() < 1e-9,
                "percentage({value}, {pct}) = {result}, want {expected}"
            );
        }
    }

    #[test]
    fn test_history_order() {
        let mut engine = Engine::new();
        engine.add(5.0, 3.0);
        engine.multiply(2.0, 4.0);

        let history = engine.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].operation, OperationKind::Add);
        assert_eq!(history[1].operation, OperationKind::Multiply);

        let last = engine.last_operation().unwrap();
        assert_eq!(
            *last,
            Operation {
                a: 2.0,
                b: 4.0,
                operation: OperationKind::Multiply,
                result: 8.0,
            }
        );
    }

    #[test]
    fn test_history_read_is_idempotent() {
        let mut engine = Engine::new();
        engine.power(2.0, 10.0);
        let first = engine.history().to_vec();
        let second = engine.history().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_clear_history() {
        let mut engine = Engine::new();
        engine.clear_history();
        assert!(engine.history().is_empty());

        engine.add(1.0, 2.0);
        engine.subtract(1.0, 2.0);
        engine.clear_history();
        assert!(engine.history().is_empty());
        assert!(engine.last_operation().is_none());

        engine.clear_history();
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_apply_matches_direct_calls() {
        for kind in OperationKind::ALL {
            let mut via_apply = Engine::new();
            let mut direct = Engine::new();

            let applied = via_apply.apply(kind, 9.0, 4.0);
            let expected = match kind {
                OperationKind::Add => Ok(direct.add(9.0, 4.0)),
                OperationKind::Subtract => Ok(direct.subtract(9.0, 4.0)),
                OperationKind::Multiply => Ok(direct.multiply(9.0, 4.0)),
                OperationKind::Divide => direct.divide(9.0, 4.0),
                OperationKind::Power => Ok(direct.power(9.0, 4.0)),
                OperationKind::Sqrt => direct.sqrt(9.0),
                OperationKind::Percentage => Ok(direct.percentage(9.0, 4.0)),
            };

            assert_eq!(applied, expected, "{kind}");
            assert_eq!(via_apply.history(), direct.history(), "{kind}");
        }
    }

    #[test]
    fn test_apply_propagates_errors() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.apply(OperationKind::Divide, 1.0, 0.0),
            Err(CoreError::DivisionByZero)
        );
        assert!(engine.apply(OperationKind::Sqrt, -4.0, 0.0).is_err());
        assert!(engine.is_empty());
    }
}
