//! Cell content types

/// Raw content of a single cell
///
/// No type tag is kept; whether the text is a literal or a formula is decided
/// when it is read through [`Cell::classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    content: String,
}

impl Cell {
    /// Create a cell holding the given text
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The stored text, unchanged
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the stored text
    pub fn set_content<S: Into<String>>(&mut self, content: S) {
        self.content = content.into();
    }

    /// Check if the cell holds no text
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Classify the stored text
    pub fn classify(&self) -> CellContent<'_> {
        CellContent::classify(&self.content)
    }
}

/// A cell's text as seen by the evaluator
///
/// Text starting with `=` is a formula; the variant carries the expression
/// with the `=` already stripped. Everything else, including the empty
/// string, is a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellContent<'a> {
    /// Plain text or number
    Literal(&'a str),
    /// Formula expression, without the leading `=`
    Formula(&'a str),
}

impl<'a> CellContent<'a> {
    /// Classify raw cell text by its first character
    pub fn classify(text: &'a str) -> Self {
        match text.strip_prefix('=') {
            Some(expr) => CellContent::Formula(expr),
            None => CellContent::Literal(text),
        }
    }

    /// Check if this is a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, CellContent::Formula(_))
    }

    /// The text carried by either variant
    pub fn text(&self) -> &'a str {
        match self {
            CellContent::Literal(text) | CellContent::Formula(text) => text,
        }
    }
}
