//! Spreadsheet document
//!
//! Ties a [`Grid`] of raw cell text to the formula engine. Nothing is cached:
//! every value request evaluates from scratch.

use crate::render::{render, RenderOptions};
use gridcalc_core::{CellAddress, Grid, Result};
use gridcalc_formula::{
    evaluate, evaluate_cell, EvaluationContext, EvaluationOptions, FormulaError, FormulaResult,
};
use std::fmt;

/// A fixed-size sheet of cells holding literals or `=` formulas
#[derive(Debug, Clone)]
pub struct Spreadsheet {
    grid: Grid,
    options: EvaluationOptions,
}

impl Spreadsheet {
    /// Create a sheet of `rows × cols` empty cells
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            options: EvaluationOptions::default(),
        }
    }

    /// Replace the evaluation options
    pub fn with_options(mut self, options: EvaluationOptions) -> Self {
        self.options = options;
        self
    }

    /// The underlying grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The evaluation options
    pub fn options(&self) -> &EvaluationOptions {
        &self.options
    }

    /// Evaluation context reading from this sheet
    pub fn context(&self) -> EvaluationContext<'_> {
        EvaluationContext::new(&self.grid).with_options(self.options.clone())
    }

    // === Index-based access ===

    /// Store raw text in a cell
    ///
    /// Formula syntax is not checked here. Fails when the coordinate lies
    /// outside the sheet; the sheet is left unchanged in that case.
    pub fn set_cell_content<S: Into<String>>(&mut self, row: u32, col: u32, text: S) -> Result<()> {
        self.grid.set(row, col, text)
    }

    /// Raw text of a cell, unchanged (empty outside the sheet)
    pub fn get_cell_content(&self, row: u32, col: u32) -> &str {
        self.grid.get(row, col)
    }

    /// Numeric value of a cell
    ///
    /// Formulas are evaluated; literal text that is not a number reads as 0.
    pub fn get_cell_value(&self, row: u32, col: u32) -> FormulaResult<f64> {
        evaluate_cell(CellAddress::new(row, col), &self.context())
    }

    /// Evaluate an expression against this sheet
    ///
    /// A leading `=` is accepted and ignored.
    pub fn evaluate(&self, expression: &str) -> FormulaResult<f64> {
        let expression = expression.trim_start();
        let expression = expression.strip_prefix('=').unwrap_or(expression);
        evaluate(expression, &self.context())
    }

    // === Label-based access ===

    /// Store raw text in the cell named by `label` (e.g. "B3")
    pub fn set_cell<S: Into<String>>(&mut self, label: &str, text: S) -> Result<()> {
        let addr = CellAddress::parse(label)?;
        self.grid.set_at(addr, text)
    }

    /// Raw text of the cell named by `label`
    pub fn cell_content(&self, label: &str) -> Result<&str> {
        let addr = CellAddress::parse(label)?;
        Ok(self.grid.get_at(addr))
    }

    /// Numeric value of the cell named by `label`
    pub fn cell_value(&self, label: &str) -> FormulaResult<f64> {
        let addr = CellAddress::parse(label)
            .map_err(|e| FormulaError::InvalidReference(format!("'{}': {}", label, e)))?;
        evaluate_cell(addr, &self.context())
    }

    // === Display ===

    /// Render the sheet as a labelled text table with default options
    pub fn render(&self) -> String {
        self.render_with(&RenderOptions::default())
    }

    /// Render the sheet as a labelled text table
    pub fn render_with(&self, options: &RenderOptions) -> String {
        render(&self.grid, &self.context(), options)
    }
}

impl fmt::Display for Spreadsheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcalc_core::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_content_round_trip() {
        let mut sheet = Spreadsheet::new(3, 3);
        sheet.set_cell_content(0, 0, "=A2+1").unwrap();
        sheet.set_cell("C3", "hello").unwrap();

        assert_eq!(sheet.get_cell_content(0, 0), "=A2+1");
        assert_eq!(sheet.cell_content("A1").unwrap(), "=A2+1");
        assert_eq!(sheet.get_cell_content(2, 2), "hello");
    }

    #[test]
    fn test_out_of_range_access() {
        let mut sheet = Spreadsheet::new(2, 2);

        assert_eq!(
            sheet.set_cell_content(5, 0, "1"),
            Err(Error::RowOutOfBounds(5, 2))
        );
        assert!(sheet.set_cell("C1", "1").is_err());
        assert!(matches!(sheet.set_cell("1A", "1"), Err(Error::InvalidAddress(_))));

        assert_eq!(sheet.get_cell_content(5, 5), "");
        assert_eq!(sheet.get_cell_value(5, 5).unwrap(), 0.0);
    }

    #[test]
    fn test_evaluate_accepts_leading_equals() {
        let sheet = Spreadsheet::new(1, 1);
        assert_eq!(sheet.evaluate("=2+3*4").unwrap(), 14.0);
        assert_eq!(sheet.evaluate("2+3*4").unwrap(), 14.0);
    }

    #[test]
    fn test_cell_value_rejects_bad_label() {
        let sheet = Spreadsheet::new(1, 1);
        assert!(matches!(
            sheet.cell_value("A0"),
            Err(FormulaError::InvalidReference(_))
        ));
    }

    #[test]
    fn test_options_reach_evaluation() {
        let mut sheet =
            Spreadsheet::new(3, 1).with_options(EvaluationOptions { max_depth: 1 });
        sheet.set_cell("A1", "1").unwrap();
        sheet.set_cell("B1", "=A1").unwrap();
        sheet.set_cell("C1", "=B1").unwrap();

        assert_eq!(sheet.cell_value("B1").unwrap(), 1.0);
        assert_eq!(
            sheet.cell_value("C1"),
            Err(FormulaError::DepthExceeded(1))
        );
    }
}
