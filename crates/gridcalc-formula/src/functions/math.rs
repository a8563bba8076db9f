//! Math functions

use crate::error::FormulaResult;
use crate::evaluator::{resolve_cell, EvaluationContext, ResolutionPath};
use gridcalc_core::CellRange;

/// SUM function
///
/// Adds every cell of the range row by row, resolving formula cells along
/// the way. Corners are not reordered, so a backwards range sums to 0.
pub fn fn_sum(
    range: CellRange,
    ctx: &EvaluationContext,
    path: &mut ResolutionPath,
) -> FormulaResult<f64> {
    // Cells outside the grid contribute nothing
    let range = match ctx.clip_range(range) {
        Some(range) => range,
        None => return Ok(0.0),
    };

    let mut sum = 0.0;
    for addr in range.cells() {
        sum += resolve_cell(addr, ctx, path)?;
    }

    Ok(sum)
}
