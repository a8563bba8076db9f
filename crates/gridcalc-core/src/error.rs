//! Error types for gridcalc-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gridcalc-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Reference text does not decode to a coordinate
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Range text does not decode to two corners
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row index outside the grid
    #[error("Row index {0} out of bounds (rows: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index outside the grid
    #[error("Column index {0} out of bounds (cols: {1})")]
    ColumnOutOfBounds(u32, u32),
}
