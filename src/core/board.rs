//! Board module - the settled cell grid.
//!
//! A 13x6 grid where each cell is empty or holds a settled gem color.
//! Flat array storage for cache locality and zero allocation.
//! Coordinates: (row, col) with row 0 at the top, row 12 at the bottom.

use crate::types::{Cell, GemColor, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board.
const BOARD_SIZE: usize = (BOARD_ROWS * BOARD_COLS) as usize;

/// The settled board - 13 rows x 6 columns in a flat row-major array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col).
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col), or `None` when out of bounds.
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn cols(&self) -> u8 {
        BOARD_COLS
    }

    /// Get the cell at (row, col).
    /// Returns `None` if out of bounds, `Some(cell)` otherwise.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the cell at (row, col).
    /// Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty.
    pub fn is_empty(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// In bounds and holding a gem.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Set every cell to empty. Used on session reset.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Count of non-empty cells, all columns combined.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Write the grid into a u8 matrix for snapshots (0 = empty, 1-5 = color).
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_COLS as usize]; BOARD_ROWS as usize]) {
        for row in 0..BOARD_ROWS as usize {
            for col in 0..BOARD_COLS as usize {
                out[row][col] = match self.cells[row * BOARD_COLS as usize + col] {
                    Some(color) => color.cell_code(),
                    None => 0,
                };
            }
        }
    }

    /// Raw view of the cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a board from a 2D vector (rows of cells). Test convenience.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        assert_eq!(rows.len(), BOARD_ROWS as usize);
        assert!(rows.iter().all(|row| row.len() == BOARD_COLS as usize));

        let mut flat = [None; BOARD_SIZE];
        for (row, cells) in rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                flat[row * BOARD_COLS as usize + col] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to a 2D vector of rows. Test convenience.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        let cols = BOARD_COLS as usize;
        (0..BOARD_ROWS as usize)
            .map(|row| self.cells[row * cols..(row + 1) * cols].to_vec())
            .collect()
    }

    /// Multiset of colors in one column, top to bottom, empties skipped.
    /// Gravity preserves this per column; tests lean on it.
    pub fn column_colors(&self, col: i8) -> Vec<GemColor> {
        (0..BOARD_ROWS as i8)
            .filter_map(|row| self.get(row, col).flatten())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
