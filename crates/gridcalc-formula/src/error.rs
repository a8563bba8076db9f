//! Formula error types

use gridcalc_core::CellAddress;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormulaError {
    /// Reference text does not decode to a cell
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Malformed operator or parenthesis structure
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// Function name other than a supported aggregate
    #[error("Unsupported function: {0}")]
    UnsupportedFunction(String),

    /// Malformed or undecodable range bounds
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Right operand of `/` was zero
    #[error("Division by zero")]
    DivisionByZero,

    /// A formula's reference chain came back to a cell being resolved
    #[error("Circular reference detected involving cell {0}")]
    CycleDetected(CellAddress),

    /// The reference chain grew past the configured limit
    #[error("Reference chain deeper than {0} cells")]
    DepthExceeded(usize),
}
