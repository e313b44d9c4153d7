//! Operation selectors accepted by the CLI `--op` flag and the `op` query
//! parameter.
//!
//! The shell exposes only the four basic operations. Each selector maps to
//! exactly one [`OperationKind`]; anything else is an unknown operation.

use calc_core::OperationKind;

/// Selector → engine operation.
pub const SELECTORS: [(&str, OperationKind); 4] = [
    ("add", OperationKind::Add),
    ("sub", OperationKind::Subtract),
    ("mul", OperationKind::Multiply),
    ("div", OperationKind::Divide),
];

/// Resolves a selector. Matching is exact and case-sensitive.
pub fn parse_selector(selector: &str) -> Option<OperationKind> {
    SELECTORS
        .iter()
        .find(|(name, _)| *name == selector)
        .map(|(_, kind)| *kind)
}

/// `"add, sub, mul, div"`
pub fn selector_list() -> String {
    SELECTORS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}
