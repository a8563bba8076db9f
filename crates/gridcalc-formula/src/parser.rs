//! Formula parser
//!
//! Converts infix arithmetic to postfix with the shunting-yard algorithm.
//! The grammar is four left-associative binary operators, parentheses,
//! numeric literals and cell references. There is no unary minus and no
//! exponent notation.

use crate::error::{FormulaError, FormulaResult};
use crate::token::{parse_number, Operator, Postfix, Token};

/// Convert an infix expression (without a leading `=`) to postfix
///
/// # Example
/// ```rust
/// use gridcalc_formula::infix_to_postfix;
///
/// let postfix = infix_to_postfix("2+3*4").unwrap();
/// assert_eq!(postfix.to_string(), "2 3 4 * +");
///
/// let postfix = infix_to_postfix("(A1+B2)/2").unwrap();
/// assert_eq!(postfix.to_string(), "A1 B2 + 2 /");
/// ```
pub fn infix_to_postfix(expression: &str) -> FormulaResult<Postfix> {
    let mut parser = ShuntingYard::new(expression);
    parser.scan()?;
    let postfix = parser.finish()?;

    tracing::trace!(expression, postfix = %postfix, "converted to postfix");
    Ok(postfix)
}

/// Entry on the operator stack
#[derive(Debug, Clone, Copy, PartialEq)]
enum StackItem {
    LeftParen,
    Operator(Operator),
}

struct ShuntingYard<'a> {
    input: &'a str,
    pos: usize,
    output: Vec<Token>,
    stack: Vec<StackItem>,
}

impl<'a> ShuntingYard<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            output: Vec::new(),
            stack: Vec::new(),
        }
    }

    fn scan(&mut self) -> FormulaResult<()> {
        loop {
            self.skip_whitespace();
            let c = match self.peek_char() {
                Some(c) => c,
                None => return Ok(()),
            };

            if c.is_ascii_digit() || c == '.' {
                let token = self.scan_number()?;
                self.output.push(token);
            } else if c.is_ascii_alphabetic() {
                let token = self.scan_reference();
                self.output.push(token);
            } else if c == '(' {
                self.advance();
                self.stack.push(StackItem::LeftParen);
            } else if c == ')' {
                self.advance();
                self.close_paren()?;
            } else {
                self.advance();
                self.push_operator(Operator::from_char(c));
            }
        }
    }

    // === Token scanning ===

    fn scan_number(&mut self) -> FormulaResult<Token> {
        let start = self.pos;
        while self
            .peek_char()
            .map_or(false, |c| c.is_ascii_digit() || c == '.')
        {
            self.advance();
        }

        let text = &self.input[start..self.pos];
        parse_number(text)
            .map(Token::Number)
            .ok_or_else(|| FormulaError::Syntax(format!("invalid number '{}'", text)))
    }

    fn scan_reference(&mut self) -> Token {
        let start = self.pos;
        while self.peek_char().map_or(false, |c| c.is_ascii_alphanumeric()) {
            self.advance();
        }
        Token::Reference(self.input[start..self.pos].to_string())
    }

    // === Operator stack ===

    fn push_operator(&mut self, op: Operator) {
        while let Some(StackItem::Operator(top)) = self.stack.last().copied() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.stack.pop();
            self.output.push(Token::Operator(top));
        }
        self.stack.push(StackItem::Operator(op));
    }

    fn close_paren(&mut self) -> FormulaResult<()> {
        loop {
            match self.stack.pop() {
                Some(StackItem::Operator(op)) => self.output.push(Token::Operator(op)),
                Some(StackItem::LeftParen) => return Ok(()),
                None => {
                    return Err(FormulaError::Syntax(format!(
                        "unmatched ')' at position {}",
                        self.pos - 1
                    )))
                }
            }
        }
    }

    fn finish(mut self) -> FormulaResult<Postfix> {
        while let Some(item) = self.stack.pop() {
            match item {
                StackItem::Operator(op) => self.output.push(Token::Operator(op)),
                StackItem::LeftParen => {
                    return Err(FormulaError::Syntax(format!(
                        "unclosed '(' in '{}'",
                        self.input
                    )))
                }
            }
        }
        Ok(Postfix::new(self.output))
    }

    // === Helper methods ===

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().map_or(false, |c| c.is_whitespace()) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn postfix(expression: &str) -> String {
        infix_to_postfix(expression).unwrap().to_string()
    }

    #[test]
    fn test_literals_and_references() {
        assert_eq!(postfix("42"), "42");
        assert_eq!(postfix("3.25"), "3.25");
        assert_eq!(postfix(".5"), "0.5");
        assert_eq!(postfix("AB12"), "AB12");
    }

    #[test]
    fn test_precedence() {
        assert_eq!(postfix("2+3*4"), "2 3 4 * +");
        assert_eq!(postfix("2*3+4"), "2 3 * 4 +");
        assert_eq!(postfix("8/4/2"), "8 4 / 2 /");
        assert_eq!(postfix("8-4+2"), "8 4 - 2 +");
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(postfix("(2+3)*4"), "2 3 + 4 *");
        assert_eq!(postfix("2*(3+(4-1))"), "2 3 4 1 - + *");
        assert_eq!(postfix("((A1))"), "A1");
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(postfix(" A1 +  B2 * 2 "), "A1 B2 2 * +");
    }

    #[test]
    fn test_multichar_tokens_stay_whole() {
        assert_eq!(postfix("AA10*12.5"), "AA10 12.5 *");

        // An alphanumeric run is one token even if it is not a valid label
        let tokens = infix_to_postfix("A1B2+1").unwrap();
        assert_eq!(tokens.tokens()[0], Token::Reference("A1B2".into()));
    }

    #[test]
    fn test_unknown_operator_binds_weakest() {
        assert_eq!(postfix("1+2%3"), "1 2 + 3 %");
        assert_eq!(
            infix_to_postfix("2^3").unwrap().tokens()[2],
            Token::Operator(Operator::Other('^'))
        );
    }

    #[test]
    fn test_no_unary_minus() {
        // A leading '-' is an operator, not part of the literal
        assert_eq!(postfix("-5"), "5 -");
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert!(matches!(
            infix_to_postfix("1+2)"),
            Err(FormulaError::Syntax(_))
        ));
        assert!(matches!(
            infix_to_postfix("(1+2"),
            Err(FormulaError::Syntax(_))
        ));
        assert!(matches!(infix_to_postfix(")("), Err(FormulaError::Syntax(_))));
    }

    #[test]
    fn test_invalid_number() {
        assert!(matches!(
            infix_to_postfix("1.2.3+4"),
            Err(FormulaError::Syntax(_))
        ));
        assert!(matches!(infix_to_postfix("."), Err(FormulaError::Syntax(_))));
    }

    #[test]
    fn test_empty_expression() {
        assert!(infix_to_postfix("").unwrap().is_empty());
        assert!(infix_to_postfix("   ").unwrap().is_empty());
    }
}
