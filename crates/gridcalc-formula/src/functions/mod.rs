//! Built-in range functions
//!
//! A function call has the shape `NAME(A1:B2)` and must make up the whole
//! expression. Its single argument is a range given by two corner labels.

pub mod math;

use crate::error::{FormulaError, FormulaResult};
use crate::evaluator::{EvaluationContext, ResolutionPath};
use gridcalc_core::{CellRange, Error as CoreError};
use lazy_regex::regex_captures;

/// Function implementation signature
pub type FunctionImpl =
    fn(CellRange, &EvaluationContext, &mut ResolutionPath) -> FormulaResult<f64>;

/// Function definition
pub struct FunctionDef {
    /// Function name (uppercase)
    pub name: &'static str,
    /// Implementation
    pub implementation: FunctionImpl,
}

/// Every supported function
pub const FUNCTIONS: &[FunctionDef] = &[FunctionDef {
    name: "SUM",
    implementation: math::fn_sum,
}];

/// Look up a function by name (case-insensitive)
pub fn lookup(name: &str) -> Option<&'static FunctionDef> {
    FUNCTIONS
        .iter()
        .find(|def| def.name.eq_ignore_ascii_case(name))
}

/// A recognized `NAME(argument)` expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionCall<'a> {
    /// Function name as written
    pub name: &'a str,
    /// Text between the parentheses
    pub argument: &'a str,
}

impl<'a> FunctionCall<'a> {
    /// Recognize a function call at the start of an expression
    ///
    /// Returns `Ok(None)` when the expression does not start with letters
    /// immediately followed by `(`. An unknown name is reported before the
    /// shape of the rest is checked. The argument ends at the first `)`, which
    /// must also end the expression.
    pub fn parse(expression: &'a str) -> FormulaResult<Option<Self>> {
        let expression = expression.trim();
        let (name, rest) = match regex_captures!(r"^([A-Za-z]+)\(([\s\S]*)$", expression) {
            Some((_, name, rest)) => (name, rest),
            None => return Ok(None),
        };

        if lookup(name).is_none() {
            return Err(FormulaError::UnsupportedFunction(name.to_string()));
        }

        let (argument, trailing) = rest.split_once(')').ok_or_else(|| {
            FormulaError::Syntax(format!("missing ')' in '{}'", expression))
        })?;

        let trailing = trailing.trim();
        if !trailing.is_empty() {
            return Err(FormulaError::Syntax(format!(
                "unexpected '{}' after {}(...)",
                trailing, name
            )));
        }

        Ok(Some(Self { name, argument }))
    }
}

/// Evaluate a recognized function call
pub fn evaluate_function(
    call: &FunctionCall,
    ctx: &EvaluationContext,
    path: &mut ResolutionPath,
) -> FormulaResult<f64> {
    let def = lookup(call.name)
        .ok_or_else(|| FormulaError::UnsupportedFunction(call.name.to_string()))?;

    let range = parse_range_argument(call.argument)?;
    (def.implementation)(range, ctx, path)
}

fn parse_range_argument(argument: &str) -> FormulaResult<CellRange> {
    CellRange::parse(argument).map_err(|e| match e {
        CoreError::InvalidRange(msg) => FormulaError::InvalidRange(msg),
        other => FormulaError::InvalidRange(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::{evaluate, EvaluationContext};
    use gridcalc_core::{CellAddress, Grid};
    use pretty_assertions::assert_eq;

    fn grid_with(cells: &[(&str, &str)]) -> Grid {
        let mut grid = Grid::new(5, 5);
        for (label, text) in cells {
            grid.set_at(CellAddress::parse(label).unwrap(), *text).unwrap();
        }
        grid
    }

    #[test]
    fn test_function_call_parse() {
        assert_eq!(
            FunctionCall::parse("SUM(A1:A3)").unwrap(),
            Some(FunctionCall {
                name: "SUM",
                argument: "A1:A3"
            })
        );
        assert_eq!(
            FunctionCall::parse(" sum( A1 : B2 ) ").unwrap(),
            Some(FunctionCall {
                name: "sum",
                argument: " A1 : B2 "
            })
        );

        // Not a function call
        assert_eq!(FunctionCall::parse("A1+2").unwrap(), None);
        assert_eq!(FunctionCall::parse("(1+2)*3").unwrap(), None);
        assert_eq!(FunctionCall::parse("A1*(2+3)").unwrap(), None);

        assert!(matches!(
            FunctionCall::parse("SUM(A1:A3"),
            Err(FormulaError::Syntax(_))
        ));
        assert!(matches!(
            FunctionCall::parse("SUM(A1:A3)+1"),
            Err(FormulaError::Syntax(_))
        ));

        // The name is checked before any trailing text
        assert_eq!(
            FunctionCall::parse("FOO(A1)+1"),
            Err(FormulaError::UnsupportedFunction("FOO".into()))
        );
        assert_eq!(
            FunctionCall::parse("max(A1:A2"),
            Err(FormulaError::UnsupportedFunction("max".into()))
        );
    }

    #[test]
    fn test_sum_range() {
        let grid = grid_with(&[("A1", "1"), ("A2", "2"), ("A3", "=1+1")]);
        let ctx = EvaluationContext::new(&grid);

        assert_eq!(evaluate("SUM(A1:A3)", &ctx).unwrap(), 5.0);
        assert_eq!(evaluate("sum(a1:a3)", &ctx).unwrap(), 5.0);
        assert_eq!(evaluate("SUM(A1:A1)", &ctx).unwrap(), 1.0);
    }

    #[test]
    fn test_sum_rectangle() {
        let grid = grid_with(&[
            ("A1", "1"),
            ("A2", "2"),
            ("B1", "10"),
            ("B2", "=A2*10"),
            ("C1", "100"),
        ]);
        let ctx = EvaluationContext::new(&grid);

        assert_eq!(evaluate("SUM(A1:B2)", &ctx).unwrap(), 33.0);
        assert_eq!(evaluate("SUM(A1:C1)", &ctx).unwrap(), 111.0);
    }

    #[test]
    fn test_sum_backwards_range_is_zero() {
        let grid = grid_with(&[("A1", "1"), ("A2", "2"), ("A3", "3")]);
        let ctx = EvaluationContext::new(&grid);

        assert_eq!(evaluate("SUM(A3:A1)", &ctx).unwrap(), 0.0);
        assert_eq!(evaluate("SUM(C1:A1)", &ctx).unwrap(), 0.0);
    }

    #[test]
    fn test_sum_past_grid_edge() {
        let grid = grid_with(&[("E5", "4"), ("A1", "1")]);
        let ctx = EvaluationContext::new(&grid);

        assert_eq!(evaluate("SUM(A1:ZZ999)", &ctx).unwrap(), 5.0);
        assert_eq!(evaluate("SUM(Z1:ZZ9)", &ctx).unwrap(), 0.0);
    }

    #[test]
    fn test_sum_errors() {
        let grid = grid_with(&[("A1", "=1/0"), ("B1", "=SUM(B1:B2)")]);
        let ctx = EvaluationContext::new(&grid);

        assert!(matches!(
            evaluate("SUM(A1)", &ctx),
            Err(FormulaError::InvalidRange(_))
        ));
        assert!(matches!(
            evaluate("SUM(A1:)", &ctx),
            Err(FormulaError::InvalidRange(_))
        ));
        assert!(matches!(
            evaluate("SUM(1:A2)", &ctx),
            Err(FormulaError::InvalidRange(_))
        ));
        assert_eq!(
            evaluate("AVERAGE(A1:A2)", &ctx),
            Err(FormulaError::UnsupportedFunction("AVERAGE".into()))
        );
        assert_eq!(evaluate("SUM(A1:A2)", &ctx), Err(FormulaError::DivisionByZero));
        assert_eq!(
            evaluate("B1", &ctx),
            Err(FormulaError::CycleDetected(CellAddress::new(1, 0)))
        );
    }
}
