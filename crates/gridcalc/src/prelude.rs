//! Prelude module - common imports for gridcalc users
//!
//! ```rust
//! use gridcalc::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellAddress,
    CellContent,
    CellRange,

    // Error types
    Error,
    // Evaluation types
    EvaluationOptions,
    FormulaError,
    FormulaResult,
    Grid,

    RenderOptions,
    Result,

    // Main types
    Spreadsheet,
};
