//! Numeric operand parsing shared by the `--a`/`--b` flags and the `a`/`b`
//! query parameters.
//!
//! `str::parse::<f64>` saturates out-of-range input such as `1e400` to
//! infinity. Those values are rejected here; only an explicit `inf`,
//! `infinity` or `nan` spelling may produce a non-finite operand.

use thiserror::Error;

/// Spellings that legitimately parse to a non-finite value.
const NON_FINITE_SPELLINGS: [&str; 3] = ["inf", "infinity", "nan"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    #[error("invalid number: {0:?}")]
    Invalid(String),

    #[error("value out of range: {0:?}")]
    OutOfRange(String),
}

/// Parses one operand.
///
/// ## Errors
/// - [`OperandError::Invalid`] when `text` is not a number
/// - [`OperandError::OutOfRange`] when a finite literal overflows `f64`
pub fn parse_operand(text: &str) -> Result<f64, OperandError> {
    let value = text
        .parse::<f64>()
        .map_err(|_| OperandError::Invalid(text.to_string()))?;

    if !value.is_finite() && !is_non_finite_spelling(text) {
        return Err(OperandError::OutOfRange(text.to_string()));
    }
    Ok(value)
}

fn is_non_finite_spelling(text: &str) -> bool {
    let unsigned = text
        .strip_prefix(['+', '-'])
        .unwrap_or(text)
        .to_ascii_lowercase();
    NON_FINITE_SPELLINGS.contains(&unsigned.as_str())
}
