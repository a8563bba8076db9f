//! Grid type
//!
//! A fixed-size rectangle of [`Cell`]s, sized once at construction.

use crate::cell::{Cell, CellAddress, CellContent};
use crate::error::{Error, Result};

/// A `rows × cols` grid of cells
///
/// Storage is dense and row-major. Reads outside the grid yield empty text;
/// writes outside the grid fail with an out-of-bounds error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of empty cells
    pub fn new(rows: u32, cols: u32) -> Self {
        let len = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); len],
        }
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Check whether a coordinate lies inside the grid
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }

    fn index(&self, row: u32, col: u32) -> Option<usize> {
        self.contains(row, col)
            .then(|| row as usize * self.cols as usize + col as usize)
    }

    fn check_bounds(&self, row: u32, col: u32) -> Result<usize> {
        if row >= self.rows {
            return Err(Error::RowOutOfBounds(row, self.rows));
        }
        if col >= self.cols {
            return Err(Error::ColumnOutOfBounds(col, self.cols));
        }
        Ok(row as usize * self.cols as usize + col as usize)
    }

    /// Get a cell, if the coordinate is inside the grid
    pub fn cell(&self, row: u32, col: u32) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Get the raw text of a cell (empty when out of range)
    pub fn get(&self, row: u32, col: u32) -> &str {
        self.cell(row, col).map_or("", Cell::content)
    }

    /// Get the raw text of a cell by address
    pub fn get_at(&self, addr: CellAddress) -> &str {
        self.get(addr.row, addr.col)
    }

    /// Set the raw text of a cell
    ///
    /// No formula validation happens here; the text is stored as given.
    pub fn set<S: Into<String>>(&mut self, row: u32, col: u32, text: S) -> Result<()> {
        let i = self.check_bounds(row, col)?;
        self.cells[i].set_content(text);
        Ok(())
    }

    /// Set the raw text of a cell by address
    pub fn set_at<S: Into<String>>(&mut self, addr: CellAddress, text: S) -> Result<()> {
        self.set(addr.row, addr.col, text)
    }

    /// Reset a cell to empty text
    pub fn clear(&mut self, row: u32, col: u32) -> Result<()> {
        self.set(row, col, String::new())
    }

    /// Get a cell's text classified as literal or formula
    pub fn content(&self, row: u32, col: u32) -> CellContent<'_> {
        CellContent::classify(self.get(row, col))
    }

    /// Iterate over all cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (CellAddress, &Cell)> + '_ {
        let cols = self.cols as usize;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let addr = CellAddress::new((i / cols) as u32, (i % cols) as u32);
            (addr, cell)
        })
    }

    /// Iterate over non-empty cells in row-major order
    pub fn used_cells(&self) -> impl Iterator<Item = (CellAddress, &Cell)> + '_ {
        self.iter().filter(|(_, cell)| !cell.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.iter().count(), 12);
        assert_eq!(grid.used_cells().count(), 0);
        assert_eq!(grid.get(2, 3), "");
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 1, "42").unwrap();
        grid.set_at(CellAddress::new(1, 0), "=A2*2").unwrap();

        assert_eq!(grid.get(0, 1), "42");
        assert_eq!(grid.get_at(CellAddress::new(1, 0)), "=A2*2");
        assert_eq!(grid.content(1, 0), CellContent::Formula("A2*2"));
        assert_eq!(grid.content(0, 1), CellContent::Literal("42"));

        let used: Vec<_> = grid.used_cells().map(|(addr, _)| addr).collect();
        assert_eq!(used, vec![CellAddress::new(0, 1), CellAddress::new(1, 0)]);

        grid.clear(0, 1).unwrap();
        assert_eq!(grid.get(0, 1), "");
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = Grid::new(2, 3);

        assert_eq!(grid.set(2, 0, "x"), Err(Error::RowOutOfBounds(2, 2)));
        assert_eq!(grid.set(0, 3, "x"), Err(Error::ColumnOutOfBounds(3, 3)));
        assert_eq!(grid.get(5, 5), "");
        assert!(grid.cell(0, 3).is_none());
        assert_eq!(grid.content(9, 9), CellContent::Literal(""));

        // Nothing was written
        assert_eq!(grid.used_cells().count(), 0);
    }

    #[test]
    fn test_zero_sized_grid() {
        let grid = Grid::new(0, 0);
        assert_eq!(grid.iter().count(), 0);
        assert_eq!(grid.get(0, 0), "");
    }
}
