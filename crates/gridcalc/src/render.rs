//! Text rendering of a sheet
//!
//! Column headers are 1-based numbers, row headers are letter labels. Formula
//! cells show their computed value, or an error marker when evaluation fails.

use gridcalc_core::{row_label, CellAddress, CellContent, Grid};
use gridcalc_formula::{evaluate_cell, EvaluationContext};
use std::fmt::Write;

/// Options for rendering a sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width of every value column in characters (default: 8)
    pub cell_width: usize,
    /// Text shown for a formula that fails to evaluate (default: "ERR")
    pub error_marker: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_width: 8,
            error_marker: "ERR".to_string(),
        }
    }
}

/// Format a number without a trailing `.0` for integral values
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// Text shown for one cell
pub fn display_value(
    addr: CellAddress,
    grid: &Grid,
    ctx: &EvaluationContext,
    options: &RenderOptions,
) -> String {
    match grid.content(addr.row, addr.col) {
        CellContent::Literal(text) => text.to_string(),
        CellContent::Formula(_) => match evaluate_cell(addr, ctx) {
            Ok(value) => format_number(value),
            Err(e) => {
                tracing::debug!(cell = %addr, error = %e, "formula failed during render");
                options.error_marker.clone()
            }
        },
    }
}

/// Render the grid as a text table
pub fn render(grid: &Grid, ctx: &EvaluationContext, options: &RenderOptions) -> String {
    let width = options.cell_width.max(1);
    let label_width = if grid.rows() == 0 {
        1
    } else {
        row_label(grid.rows() - 1).len()
    };

    let mut out = String::new();

    // Column headers
    let _ = write!(out, "{:label_width$} |", "");
    for col in 1..=u64::from(grid.cols()) {
        let _ = write!(out, " {:>width$} |", col);
    }
    out.push('\n');

    // Separator
    out.push_str(&"-".repeat(label_width + 1));
    out.push('+');
    for _ in 0..grid.cols() {
        out.push_str(&"-".repeat(width + 2));
        out.push('+');
    }
    out.push('\n');

    for row in 0..grid.rows() {
        let _ = write!(out, "{:>label_width$} |", row_label(row));
        for col in 0..grid.cols() {
            let text = display_value(CellAddress::new(row, col), grid, ctx, options);
            let text: String = text.chars().take(width).collect();
            let _ = write!(out, " {:>width$} |", text);
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_render_table() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, "5").unwrap();
        grid.set(0, 1, "=A1*2").unwrap();
        grid.set(1, 0, "note").unwrap();
        grid.set(1, 1, "=1/0").unwrap();

        let ctx = EvaluationContext::new(&grid);
        let options = RenderOptions {
            cell_width: 4,
            ..Default::default()
        };

        let expected = concat!(
            "  |    1 |    2 |\n",
            "--+------+------+\n",
            "A |    5 |   10 |\n",
            "B | note |  ERR |\n",
        );
        assert_eq!(render(&grid, &ctx, &options), expected);
    }

    #[test]
    fn test_render_truncates_long_text() {
        let mut grid = Grid::new(1, 1);
        grid.set(0, 0, "a very long note").unwrap();

        let ctx = EvaluationContext::new(&grid);
        let options = RenderOptions {
            cell_width: 6,
            error_marker: "#ERR".into(),
        };
        let table = render(&grid, &ctx, &options);
        assert!(table.contains("A | a very |"));
    }
}
