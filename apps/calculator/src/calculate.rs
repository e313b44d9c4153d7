//! One-shot CLI calculation.

use calc_core::Engine;
use tracing::debug;

use crate::error::AppError;
use crate::selector::parse_selector;

/// Runs a single calculation and returns the printable result line,
/// `"<a> <symbol> <b> = <result>"` with two decimals.
///
/// ## Errors
/// - [`AppError::UnknownOperation`] for a selector outside add/sub/mul/div
/// - [`AppError::Core`] for division by zero
pub fn run_calculation(a: f64, b: f64, op: &str) -> Result<String, AppError> {
    let kind = parse_selector(op).ok_or_else(|| AppError::UnknownOperation(op.to_string()))?;

    let mut engine = Engine::new();
    let result = engine.apply(kind, a, b)?;
    debug!(operation = %kind, result, "calculation complete");

    Ok(format!("{a:.2} {} {b:.2} = {result:.2}", kind.symbol()))
}
