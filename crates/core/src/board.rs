//! Board module - manages the game grid
//!
//! The board is an N x N grid where each cell is either empty (0) or holds a
//! power-of-two tile. Uses a flat vector in row-major order for cache
//! locality; the size is fixed when the board is created.
//! Coordinates: (row, col) where row 0 is the top edge and col 0 the left edge.

use std::fmt;

use crate::types::{Cell, GameError, MIN_SIZE};

/// The game board - `size` rows of `size` cells using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// Returns `InvalidConfiguration` when `size` is below [`MIN_SIZE`].
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < MIN_SIZE {
            return Err(GameError::InvalidConfiguration(format!(
                "board size {} is below the minimum of {}",
                size, MIN_SIZE
            )));
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Build a board from explicit rows.
    ///
    /// Rows must form a square of side at least [`MIN_SIZE`] and every cell
    /// must be 0 or a power of two no smaller than 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
    /// assert_eq!(board.get(1, 0), Some(4));
    ///
    /// assert!(Board::from_rows(vec![vec![3, 0], vec![0, 0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GameError> {
        let size = rows.len();
        let mut board = Self::new(size)?;
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(GameError::InvalidConfiguration(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    values.len(),
                    size
                )));
            }
            for (col, value) in values.into_iter().enumerate() {
                if !is_tile_value(value) {
                    return Err(GameError::InvalidConfiguration(format!(
                        "cell ({}, {}) holds {}, which is not a power of two",
                        row, col, value
                    )));
                }
                board.cells[row * size + col] = value;
            }
        }
        Ok(board)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position (row, col)
    /// Returns false if out of bounds
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Borrow one row; panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [Cell] {
        let start = row * self.size;
        &mut self.cells[start..start + self.size]
    }

    /// Copy the board out as nested rows.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks_exact(self.size)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All empty positions as (row, col), in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn has_empty_cells(&self) -> bool {
        self.cells.iter().any(|&v| v == 0)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == 0)
    }

    /// Check whether two horizontally or vertically adjacent tiles can merge
    ///
    /// Empty cells never pair with each other, and neither do the largest
    /// representable tiles.
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let v = self.cells[row * n + col];
                if col + 1 < n && merged_value(v, self.cells[row * n + col + 1]).is_some() {
                    return true;
                }
                if row + 1 < n && merged_value(v, self.cells[(row + 1) * n + col]).is_some() {
                    return true;
                }
            }
        }
        false
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn max_tile(&self) -> Cell {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Mirror the board across its main diagonal
    pub(crate) fn transpose(&mut self) {
        let n = self.size;
        for row in 0..n {
            for col in (row + 1)..n {
                self.cells.swap(row * n + col, col * n + row);
            }
        }
    }

    /// Reverse every row in place
    pub(crate) fn reverse_rows(&mut self) {
        for row in self.cells.chunks_exact_mut(self.size) {
            row.reverse();
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }
}

impl fmt::Display for Board {
    /// Tab-separated grid, one board row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks_exact(self.size) {
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Whether `value` may appear in a cell: 0 (empty) or a power of two >= 2
pub fn is_tile_value(value: Cell) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Value produced by merging `a` into `b`.
///
/// `None` when the cells differ, are empty, or the doubled value does not fit
/// in a [`Cell`].
pub fn merged_value(a: Cell, b: Cell) -> Option<Cell> {
    if a == 0 || a != b {
        return None;
    }
    a.checked_mul(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(0, 3), Some(3));
        assert_eq!(board.index(1, 0), Some(4));
        assert_eq!(board.index(3, 3), Some(15));
        assert_eq!(board.index(4, 0), None);
        assert_eq!(board.index(0, 4), None);
    }

    #[test]
    fn test_board_rejects_small_sizes() {
        assert!(matches!(
            Board::new(1),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            Board::new(0),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(Board::new(2).is_ok());
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new(4).unwrap();

        board.set(0, 0, 2);
        board.set(2, 1, 8);

        assert_eq!(board.get(0, 0), Some(2));
        assert_eq!(board.get(2, 1), Some(8));

        assert_eq!(board.cells[0], 2);
        assert_eq!(board.cells[2 * 4 + 1], 8);
    }

    #[test]
    fn test_board_from_rows_roundtrip() {
        let rows = vec![vec![0, 2, 0], vec![4, 0, 0], vec![0, 0, 2048]];
        let board = Board::from_rows(rows.clone()).unwrap();
        assert_eq!(board.rows(), rows);
    }

    #[test]
    fn test_from_rows_rejects_ragged_rows() {
        let err = Board::from_rows(vec![vec![0, 2], vec![4]]).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_from_rows_rejects_non_tiles() {
        for bad in [1, 3, 6, 100] {
            let err = Board::from_rows(vec![vec![bad, 0], vec![0, 0]]).unwrap_err();
            assert!(matches!(err, GameError::InvalidConfiguration(_)), "{}", bad);
        }
    }

    #[test]
    fn test_transpose() {
        let mut board = Board::from_rows(vec![vec![2, 4], vec![8, 16]]).unwrap();
        board.transpose();
        assert_eq!(board.rows(), vec![vec![2, 8], vec![4, 16]]);
    }

    #[test]
    fn test_reverse_rows() {
        let mut board =
            Board::from_rows(vec![vec![2, 4, 8], vec![0, 0, 16], vec![0, 0, 0]]).unwrap();
        board.reverse_rows();
        assert_eq!(
            board.rows(),
            vec![vec![8, 4, 2], vec![16, 0, 0], vec![0, 0, 0]]
        );
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_rows(vec![vec![2, 0], vec![0, 4]]).unwrap();
        assert_eq!(board.empty_cells(), vec![(0, 1), (1, 0)]);
        assert_eq!(board.empty_count(), 2);
    }

    #[test]
    fn test_has_adjacent_pair() {
        let locked = Board::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
        assert!(!locked.has_adjacent_pair());

        let horizontal = Board::from_rows(vec![vec![2, 2], vec![4, 8]]).unwrap();
        assert!(horizontal.has_adjacent_pair());

        let vertical = Board::from_rows(vec![vec![2, 4], vec![2, 8]]).unwrap();
        assert!(vertical.has_adjacent_pair());

        let empty = Board::new(3).unwrap();
        assert!(!empty.has_adjacent_pair());

        let top: Cell = 1 << 31;
        let capped = Board::from_rows(vec![vec![top, top], vec![2, 4]]).unwrap();
        assert!(!capped.has_adjacent_pair());
    }

    #[test]
    fn test_merged_value() {
        assert_eq!(merged_value(2, 2), Some(4));
        assert_eq!(merged_value(2, 4), None);
        assert_eq!(merged_value(0, 0), None);
        assert_eq!(merged_value(1 << 30, 1 << 30), Some(1 << 31));
        assert_eq!(merged_value(1 << 31, 1 << 31), None);
    }

    #[test]
    fn test_display_is_tab_separated() {
        let board = Board::from_rows(vec![vec![2, 0], vec![0, 16]]).unwrap();
        assert_eq!(board.to_string(), "2\t0\n0\t16\n");
    }
}
