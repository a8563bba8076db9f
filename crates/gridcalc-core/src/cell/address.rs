//! Cell address and range types

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "AB12")
///
/// The leading letters name the row (A = first row, Z = 26th, AA = 27th, ...)
/// and the trailing digits name the column (1-based). Both indices are stored
/// 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row index (0-based, A=0, B=1, ..., AA=26)
    pub row: u32,
    /// Column index (0-based internally, 1-based in display)
    pub col: u32,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from its textual label
    ///
    /// # Examples
    /// ```
    /// use gridcalc_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("A1").unwrap();
    /// assert_eq!(addr.row, 0);
    /// assert_eq!(addr.col, 0);
    ///
    /// let addr = CellAddress::parse("ab12").unwrap();
    /// assert_eq!(addr.row, 27);
    /// assert_eq!(addr.col, 11);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        // Maximal leading alphabetic run is the row label
        let split = s
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(s.len());
        let (letters, digits) = s.split_at(split);

        if letters.is_empty() {
            return Err(Error::InvalidAddress(format!("no row letters in '{}'", s)));
        }
        if digits.is_empty() {
            return Err(Error::InvalidAddress(format!(
                "no column number in '{}'",
                s
            )));
        }

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAddress(format!(
                "invalid column number in '{}'",
                s
            )));
        }

        let row = Self::letters_to_row(letters)?;

        let col: u64 = digits
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("column number too large in '{}'", s)))?;

        // Columns are 1-based in labels
        if col < 1 {
            return Err(Error::InvalidAddress(format!(
                "column number must be >= 1 in '{}'",
                s
            )));
        }

        let col = u32::try_from(col - 1)
            .map_err(|_| Error::InvalidAddress(format!("column number too large in '{}'", s)))?;

        Ok(Self { row, col })
    }

    /// Convert row letters to index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_row(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty row letters".into()));
        }

        let mut row: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid row letter '{}'",
                    c
                )));
            }
            let value = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
            row = row
                .checked_mul(26)
                .and_then(|r| r.checked_add(value))
                .ok_or_else(|| Error::InvalidAddress(format!("row label '{}' too long", letters)))?;
        }

        // Bijective numbering starts at 1
        Ok(row - 1)
    }

    /// Format as a label string (row letters followed by the 1-based column)
    pub fn to_label(&self) -> String {
        format!("{}{}", row_label(self.row), u64::from(self.col) + 1)
    }

    /// Create a range from this address to another
    pub fn to(&self, other: CellAddress) -> CellRange {
        CellRange::new(*self, other)
    }
}

/// Convert a 0-based row index to its letter label (0 = A, 25 = Z, 26 = AA, etc.)
pub fn row_label(index: u32) -> String {
    let mut label = String::new();
    let mut n = i64::from(index);

    while n >= 0 {
        let c = ((n % 26) as u8 + b'A') as char;
        label.insert(0, c);
        n = n / 26 - 1;
    }

    label
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_label())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangle of cells given by two corners (e.g., "A1:B10")
///
/// Corners are kept exactly as written. A range whose start lies below or to
/// the right of its end covers no cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self { start, end }
    }

    /// Create a single-cell range
    pub fn single(addr: CellAddress) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Parse a range from `A1:B10` notation, splitting on the first `:`
    pub fn parse(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidRange(format!("missing ':' in '{}'", s.trim())))?;

        let start = CellAddress::parse(start)
            .map_err(|e| Error::InvalidRange(format!("bad start of '{}': {}", s.trim(), e)))?;
        let end = CellAddress::parse(end)
            .map_err(|e| Error::InvalidRange(format!("bad end of '{}': {}", s.trim(), e)))?;

        Ok(Self::new(start, end))
    }

    /// True when the corners are swapped on either axis
    pub fn is_backwards(&self) -> bool {
        self.start.row > self.end.row || self.start.col > self.end.col
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u64 {
        if self.is_backwards() {
            return 0;
        }
        u64::from(self.end.row - self.start.row) + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u64 {
        if self.is_backwards() {
            return 0;
        }
        u64::from(self.end.col - self.start.col) + 1
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count().saturating_mul(self.col_count())
    }

    /// Iterate over all cell addresses in the range (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            range: *self,
            current: (!self.is_backwards()).then_some(self.start),
            remaining: self.cell_count(),
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
pub struct CellRangeIterator {
    range: CellRange,
    current: Option<CellAddress>,
    remaining: u64,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        let addr = self.current?;

        // Move to next cell
        self.current = if addr.col < self.range.end.col {
            Some(CellAddress::new(addr.row, addr.col + 1))
        } else if addr.row < self.range.end.row {
            Some(CellAddress::new(addr.row + 1, self.range.start.col))
        } else {
            None
        };
        self.remaining = self.remaining.saturating_sub(1);

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for CellRangeIterator {}
