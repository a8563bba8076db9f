//! # gridcalc-formula
//!
//! Formula parser and evaluator for gridcalc.
//!
//! This crate provides:
//! - Infix to postfix conversion (shunting-yard)
//! - Postfix evaluation on a value stack, with recursive cell resolution
//! - The `SUM` range aggregate
//! - Circular reference detection along the resolution path
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::Grid;
//! use gridcalc_formula::{evaluate, infix_to_postfix, EvaluationContext};
//!
//! assert_eq!(infix_to_postfix("2+3*4")?.to_string(), "2 3 4 * +");
//!
//! let grid = Grid::new(5, 5);
//! let ctx = EvaluationContext::new(&grid);
//! assert_eq!(evaluate("(2+3)*4", &ctx)?, 20.0);
//! # Ok::<(), gridcalc_formula::FormulaError>(())
//! ```

pub mod error;
pub mod evaluator;
pub mod functions;
pub mod parser;
pub mod token;

pub use error::{FormulaError, FormulaResult};
pub use evaluator::{
    evaluate, evaluate_cell, evaluate_postfix, EvaluationContext, EvaluationOptions,
    ResolutionPath, DEFAULT_MAX_DEPTH,
};
pub use functions::FunctionCall;
pub use parser::infix_to_postfix;
pub use token::{parse_number, Operator, Postfix, Token};
