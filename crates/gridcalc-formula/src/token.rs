//! Formula token types

use crate::error::{FormulaError, FormulaResult};
use lazy_regex::regex_is_match;
use std::fmt;
use std::str::FromStr;

/// Parse plain decimal text (`12`, `-3.5`, `.25`)
///
/// Exponents, `inf` and `NaN` are not numbers here.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if !regex_is_match!(r"^[+-]?(?:\d+\.?\d*|\.\d+)$", text) {
        return None;
    }
    text.parse().ok()
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Any other character in operator position
    Other(char),
}

impl Operator {
    /// Map an operator character
    pub fn from_char(c: char) -> Self {
        match c {
            '+' => Operator::Add,
            '-' => Operator::Subtract,
            '*' => Operator::Multiply,
            '/' => Operator::Divide,
            other => Operator::Other(other),
        }
    }

    /// The operator's character
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Other(c) => *c,
        }
    }

    /// Binding strength; unknown operators bind weakest
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Multiply | Operator::Divide => 2,
            Operator::Add | Operator::Subtract => 1,
            Operator::Other(_) => 0,
        }
    }

    /// Apply the operator to `a` (pushed first) and `b`
    pub fn apply(&self, a: f64, b: f64) -> FormulaResult<f64> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Subtract => Ok(a - b),
            Operator::Multiply => Ok(a * b),
            Operator::Divide => {
                if b == 0.0 {
                    Err(FormulaError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
            Operator::Other(c) => Err(FormulaError::Syntax(format!("unknown operator '{}'", c))),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single postfix token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Cell reference text, decoded at evaluation time
    Reference(String),
    /// Binary operator
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Reference(text) => write!(f, "{}", text),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Tokens in postfix (operators-after-operands) order
///
/// Displays as space-separated text, e.g. `2 3 4 * +`. The same text form
/// parses back with [`FromStr`], where a token such as `-4` is a negative
/// literal rather than an operator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    /// Wrap an already ordered token list
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// The tokens in evaluation order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if there are no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<Token>> for Postfix {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl FromStr for Postfix {
    type Err = FormulaError;

    fn from_str(s: &str) -> FormulaResult<Self> {
        s.split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                let first = chars.next().unwrap_or(' ');
                let second = chars.next();

                let numeric = first.is_ascii_digit()
                    || first == '.'
                    || (first == '-' && second.map_or(false, |c| c.is_ascii_digit()));

                if numeric {
                    parse_number(word)
                        .map(Token::Number)
                        .ok_or_else(|| FormulaError::Syntax(format!("invalid number '{}'", word)))
                } else if first.is_ascii_alphabetic() {
                    Ok(Token::Reference(word.to_string()))
                } else if second.is_none() {
                    Ok(Token::Operator(Operator::from_char(first)))
                } else {
                    Err(FormulaError::Syntax(format!("unexpected token '{}'", word)))
                }
            })
            .collect::<FormulaResult<Vec<_>>>()
            .map(Postfix::new)
    }
}
