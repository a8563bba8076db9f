//! # gridcalc
//!
//! A grid-of-cells spreadsheet whose cells hold literals or formulas.
//!
//! Formulas start with `=` and combine numbers and cell references with
//! `+ - * /` and parentheses, or aggregate a rectangle with `SUM(A1:B3)`.
//! A reference is a row label (A, B, ..., Z, AA, ...) followed by a 1-based
//! column number. Values are computed on demand, from scratch, each time.
//!
//! ## Example
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let mut sheet = Spreadsheet::new(10, 10);
//!
//! sheet.set_cell("A1", "5").unwrap();
//! sheet.set_cell("A2", "=A1+3").unwrap();
//! sheet.set_cell("A3", "=SUM(A1:A2)").unwrap();
//!
//! assert_eq!(sheet.cell_value("A2").unwrap(), 8.0);
//! assert_eq!(sheet.get_cell_value(0, 2).unwrap(), 13.0);
//! assert_eq!(sheet.evaluate("(2+3)*4").unwrap(), 20.0);
//!
//! println!("{}", sheet.render());
//! ```
//!
//! ## Errors
//!
//! Evaluation fails loudly: invalid references, malformed expressions,
//! unsupported functions, bad ranges, division by zero and circular
//! references each produce a [`FormulaError`]. The one silent default is
//! literal cell text that is not a number, which reads as 0.

pub mod prelude;
pub mod render;
pub mod spreadsheet;

pub use render::{format_number, RenderOptions};
pub use spreadsheet::Spreadsheet;

// Re-export core types
pub use gridcalc_core::{
    row_label, Cell, CellAddress, CellContent, CellRange, Error, Grid, Result,
};

// Re-export formula types
pub use gridcalc_formula::{
    evaluate, evaluate_cell, evaluate_postfix, infix_to_postfix, EvaluationContext,
    EvaluationOptions, FormulaError, FormulaResult, Operator, Postfix, Token, DEFAULT_MAX_DEPTH,
};
