//! # gridcalc-core
//!
//! Core data structures for the gridcalc spreadsheet engine.
//!
//! This crate provides the fundamental types used throughout gridcalc:
//! - [`Grid`] - A fixed-size store of raw cell text
//! - [`CellContent`] - Cell text classified as literal or formula
//! - [`CellAddress`] and [`CellRange`] - Cell labels and rectangles
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::{CellAddress, CellContent, Grid};
//!
//! let mut grid = Grid::new(10, 10);
//!
//! // Using row/column indices (0-based)
//! grid.set(0, 0, "5").unwrap();
//!
//! // Or using labels: letters pick the row, digits the column
//! let addr = CellAddress::parse("B1").unwrap();
//! grid.set_at(addr, "=A1+3").unwrap();
//!
//! assert_eq!(grid.content(1, 0), CellContent::Formula("A1+3"));
//! ```

pub mod cell;
pub mod error;
pub mod grid;

// Re-exports for convenience
pub use cell::{row_label, Cell, CellAddress, CellContent, CellRange, CellRangeIterator};
pub use error::{Error, Result};
pub use grid::Grid;
