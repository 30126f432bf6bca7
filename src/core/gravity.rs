//! Gravity module - compacts settled gems downward after clears.
//!
//! `settle` is a single pass; callers iterate it to a fixed point. Each pass
//! moves every floating gem at most one row, so a stack above a gap of k
//! rows needs k passes. The fixed point is reached within ROWS passes.

use crate::core::Board;
use crate::types::{BOARD_COLS, BOARD_ROWS};

/// One compaction pass, scanning rows bottom-but-one upward.
///
/// Every gem with an empty cell directly below swaps down one row. Returns
/// whether anything moved.
pub fn settle(board: &mut Board) -> bool {
    let mut moved = false;

    for row in (0..BOARD_ROWS as i8 - 1).rev() {
        for col in 0..BOARD_COLS as i8 {
            if let Some(Some(color)) = board.get(row, col) {
                if board.is_empty(row + 1, col) {
                    board.set(row + 1, col, Some(color));
                    board.set(row, col, None);
                    moved = true;
                }
            }
        }
    }

    moved
}

/// Run [`settle`] to a fixed point. Returns the number of passes that moved
/// something.
pub fn settle_fully(board: &mut Board) -> u32 {
    let mut passes = 0;
    while settle(board) {
        passes += 1;
    }
    passes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GemColor;

    #[test]
    fn settled_board_reports_no_movement() {
        let mut board = Board::new();
        board.set(12, 2, Some(GemColor::Red));
        assert!(!settle(&mut board));
    }

    #[test]
    fn floating_gem_falls_one_row_per_pass() {
        let mut board = Board::new();
        board.set(5, 0, Some(GemColor::Green));

        assert!(settle(&mut board));
        assert!(board.is_empty(5, 0));
        assert!(board.is_occupied(6, 0));
    }

    #[test]
    fn contiguous_stack_shifts_together_within_one_pass() {
        // Bottom-up scan: the lower gem vacates its cell before the upper
        // one is examined, so the whole stack moves in a single pass.
        let mut board = Board::new();
        board.set(8, 4, Some(GemColor::Red));
        board.set(9, 4, Some(GemColor::Blue));

        assert!(settle(&mut board));
        assert_eq!(board.get(10, 4), Some(Some(GemColor::Blue)));
        assert_eq!(board.get(9, 4), Some(Some(GemColor::Red)));
        assert!(board.is_empty(8, 4));
    }

    #[test]
    fn settle_fully_leaves_no_internal_gaps_and_keeps_columns() {
        let mut board = Board::new();
        board.set(0, 1, Some(GemColor::Red));
        board.set(4, 1, Some(GemColor::Green));
        board.set(9, 1, Some(GemColor::Blue));
        let before = board.column_colors(1);

        let passes = settle_fully(&mut board);
        assert!(passes > 0);
        assert!(passes <= 13);

        // No cell with an empty cell beneath a gem.
        for row in 0..12 {
            for col in 0..6 {
                if board.is_occupied(row, col) {
                    assert!(
                        board.is_occupied(row + 1, col),
                        "gap under ({}, {})",
                        row,
                        col
                    );
                }
            }
        }

        // Order within the column is preserved, only shifted down.
        assert_eq!(board.column_colors(1), before);
        assert_eq!(board.get(12, 1), Some(Some(GemColor::Blue)));
        assert_eq!(board.get(11, 1), Some(Some(GemColor::Green)));
        assert_eq!(board.get(10, 1), Some(Some(GemColor::Red)));
    }
}
