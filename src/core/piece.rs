//! Piece module - the falling 3-gem column.
//!
//! `row` is the piece's lowest (leading) cell; the other two gems sit at
//! `row - 1` and `row - 2`. Cells above row 0 are tracked but not drawn.

use crate::types::{GemColor, BOARD_COLS, PIECE_LEN};

/// Column the piece spawns in (middle of the board, rounded down).
pub const SPAWN_COL: i8 = (BOARD_COLS / 2) as i8;

/// Row of the leading cell at spawn.
pub const SPAWN_ROW: i8 = 0;

/// The active falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    /// Row of the leading (lowest) cell.
    pub row: i8,
    /// Column the whole piece occupies.
    pub col: i8,
    /// Colors bottom-up: `colors[0]` is the leading cell.
    pub colors: [GemColor; PIECE_LEN],
}

impl Piece {
    /// Create a piece at the spawn cell with the given colors.
    pub fn new(colors: [GemColor; PIECE_LEN]) -> Self {
        Self {
            row: SPAWN_ROW,
            col: SPAWN_COL,
            colors,
        }
    }

    /// The (row, color) pairs the piece occupies, leading cell first.
    /// Rows may be negative while the piece is still entering the board.
    pub fn cells(&self) -> [(i8, GemColor); PIECE_LEN] {
        [
            (self.row, self.colors[0]),
            (self.row - 1, self.colors[1]),
            (self.row - 2, self.colors[2]),
        ]
    }

    /// Cyclic left shift of the color sequence: `[a, b, c]` becomes
    /// `[b, c, a]`. Purely a reassignment; the occupied cells do not change,
    /// so no collision check is needed.
    pub fn rotate_colors(&mut self) {
        self.colors.rotate_left(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb() -> [GemColor; PIECE_LEN] {
        [GemColor::Red, GemColor::Green, GemColor::Blue]
    }

    #[test]
    fn spawns_at_board_center_top() {
        let piece = Piece::new(rgb());
        assert_eq!(piece.row, 0);
        assert_eq!(piece.col, 3);
    }

    #[test]
    fn cells_stack_upward_from_leading_row() {
        let mut piece = Piece::new(rgb());
        piece.row = 5;
        assert_eq!(
            piece.cells(),
            [
                (5, GemColor::Red),
                (4, GemColor::Green),
                (3, GemColor::Blue)
            ]
        );
    }

    #[test]
    fn rotate_cycles_left_and_has_period_three() {
        let mut piece = Piece::new(rgb());

        piece.rotate_colors();
        assert_eq!(
            piece.colors,
            [GemColor::Green, GemColor::Blue, GemColor::Red]
        );

        piece.rotate_colors();
        piece.rotate_colors();
        assert_eq!(piece.colors, rgb());
    }
}
