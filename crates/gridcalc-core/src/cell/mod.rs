//! Cell-related types and utilities
//!
//! This module contains:
//! - [`Cell`] - The raw text stored at one coordinate
//! - [`CellContent`] - A cell's text classified as literal or formula
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A rectangle of cells (e.g., "A1:B10")

mod address;
mod content;

pub use address::{row_label, CellAddress, CellRange, CellRangeIterator};
pub use content::{Cell, CellContent};
