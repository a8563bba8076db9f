//! Formula evaluator
//!
//! Runs postfix token streams on a value stack, resolving cell references
//! against a [`Grid`]. A referenced cell holding a formula is evaluated
//! recursively; the cells currently being resolved are tracked on a
//! [`ResolutionPath`] so a reference chain that loops back fails instead of
//! recursing forever.

use crate::error::{FormulaError, FormulaResult};
use crate::functions::{self, FunctionCall};
use crate::parser::infix_to_postfix;
use crate::token::{parse_number, Postfix, Token};
use ahash::AHashSet;
use gridcalc_core::{CellAddress, CellContent, CellRange, Grid};

/// Default limit on nested formula resolution
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for formula evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationOptions {
    /// Maximum number of formula cells resolved inside one another
    /// (default: 512)
    pub max_depth: usize,
}

impl Default for EvaluationOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Context for formula evaluation
#[derive(Debug, Clone)]
pub struct EvaluationContext<'a> {
    /// Grid for cell lookups
    pub grid: Option<&'a Grid>,
    /// Evaluation limits
    pub options: EvaluationOptions,
}

impl<'a> EvaluationContext<'a> {
    /// Create a context that reads cells from `grid`
    pub fn new(grid: &'a Grid) -> Self {
        Self {
            grid: Some(grid),
            options: EvaluationOptions::default(),
        }
    }

    /// Create a simple context without a grid (every reference reads as empty)
    pub fn simple() -> Self {
        Self {
            grid: None,
            options: EvaluationOptions::default(),
        }
    }

    /// Replace the evaluation options
    pub fn with_options(mut self, options: EvaluationOptions) -> Self {
        self.options = options;
        self
    }

    /// Get a cell's content; cells outside the grid read as empty
    pub fn cell_content(&self, addr: CellAddress) -> CellContent<'a> {
        match self.grid {
            Some(grid) => grid.content(addr.row, addr.col),
            None => CellContent::Literal(""),
        }
    }

    /// Clip a range to the part that lies inside the grid
    ///
    /// Cells outside the grid always read as empty, so aggregates only need
    /// to visit the clipped rectangle. Returns `None` when nothing remains.
    pub fn clip_range(&self, range: CellRange) -> Option<CellRange> {
        let grid = self.grid?;
        if range.is_backwards() || grid.rows() == 0 || grid.cols() == 0 {
            return None;
        }
        if range.start.row >= grid.rows() || range.start.col >= grid.cols() {
            return None;
        }

        let end = CellAddress::new(
            range.end.row.min(grid.rows() - 1),
            range.end.col.min(grid.cols() - 1),
        );
        Some(CellRange::new(range.start, end))
    }
}

/// Cells whose formulas are being resolved, innermost last
#[derive(Debug, Default)]
pub struct ResolutionPath {
    visiting: AHashSet<CellAddress>,
}

impl ResolutionPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of formula cells currently being resolved
    pub fn depth(&self) -> usize {
        self.visiting.len()
    }

    fn enter(&mut self, addr: CellAddress, max_depth: usize) -> FormulaResult<()> {
        if self.visiting.contains(&addr) {
            tracing::warn!(cell = %addr, "circular reference detected");
            return Err(FormulaError::CycleDetected(addr));
        }
        if self.visiting.len() >= max_depth {
            tracing::warn!(cell = %addr, max_depth, "reference chain too deep");
            return Err(FormulaError::DepthExceeded(max_depth));
        }
        self.visiting.insert(addr);
        Ok(())
    }

    fn leave(&mut self, addr: CellAddress) {
        self.visiting.remove(&addr);
    }
}

/// Evaluate an expression (without the leading `=`)
///
/// # Example
/// ```rust
/// use gridcalc_core::Grid;
/// use gridcalc_formula::{evaluate, EvaluationContext};
///
/// let mut grid = Grid::new(3, 3);
/// grid.set(0, 0, "5").unwrap();
/// grid.set(1, 0, "=A1+3").unwrap();
///
/// let ctx = EvaluationContext::new(&grid);
/// assert_eq!(evaluate("B1*2", &ctx).unwrap(), 16.0);
/// assert_eq!(evaluate("SUM(A1:B1)", &ctx).unwrap(), 13.0);
/// ```
pub fn evaluate(expression: &str, ctx: &EvaluationContext) -> FormulaResult<f64> {
    evaluate_with_path(expression, ctx, &mut ResolutionPath::new())
}

/// Resolve the numeric value of one cell
///
/// Literal text that is not a plain decimal number (including an empty cell)
/// is 0.
pub fn evaluate_cell(addr: CellAddress, ctx: &EvaluationContext) -> FormulaResult<f64> {
    resolve_cell(addr, ctx, &mut ResolutionPath::new())
}

/// Evaluate an already converted postfix token stream
pub fn evaluate_postfix(postfix: &Postfix, ctx: &EvaluationContext) -> FormulaResult<f64> {
    run_postfix(postfix, ctx, &mut ResolutionPath::new())
}

/// Evaluate an expression while continuing an existing resolution path
pub fn evaluate_with_path(
    expression: &str,
    ctx: &EvaluationContext,
    path: &mut ResolutionPath,
) -> FormulaResult<f64> {
    if let Some(call) = FunctionCall::parse(expression)? {
        tracing::debug!(function = call.name, argument = call.argument, "evaluating function call");
        return functions::evaluate_function(&call, ctx, path);
    }

    tracing::debug!(expression, depth = path.depth(), "evaluating expression");
    let postfix = infix_to_postfix(expression)?;
    run_postfix(&postfix, ctx, path)
}

/// Resolve a cell while continuing an existing resolution path
pub fn resolve_cell(
    addr: CellAddress,
    ctx: &EvaluationContext,
    path: &mut ResolutionPath,
) -> FormulaResult<f64> {
    match ctx.cell_content(addr) {
        CellContent::Literal(text) => Ok(parse_number(text).unwrap_or(0.0)),
        CellContent::Formula(expression) => {
            path.enter(addr, ctx.options.max_depth)?;
            let result = evaluate_with_path(expression, ctx, path);
            path.leave(addr);
            result
        }
    }
}

fn run_postfix(
    postfix: &Postfix,
    ctx: &EvaluationContext,
    path: &mut ResolutionPath,
) -> FormulaResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix.tokens() {
        match token {
            Token::Number(n) => stack.push(*n),

            Token::Reference(text) => {
                let addr = CellAddress::parse(text).map_err(|e| {
                    FormulaError::InvalidReference(format!("'{}': {}", text, e))
                })?;
                let value = resolve_cell(addr, ctx, path)?;
                tracing::trace!(cell = %addr, value, "resolved reference");
                stack.push(value);
            }

            Token::Operator(op) => {
                let missing =
                    || FormulaError::Syntax(format!("missing operand for '{}'", op.symbol()));
                let b = stack.pop().ok_or_else(missing)?;
                let a = stack.pop().ok_or_else(missing)?;
                stack.push(op.apply(a, b)?);
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        [] => Err(FormulaError::Syntax("empty expression".into())),
        values => Err(FormulaError::Syntax(format!(
            "expression leaves {} values instead of one",
            values.len()
        ))),
    }
}
