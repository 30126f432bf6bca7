//! Movement module - collision checks and piece motion against the board.
//!
//! All functions are total: an impossible move is a no-op result, never an
//! error. Only the leading cell's target is checked when dropping, because
//! the column is vertically contiguous above its own just-vacated cells.

use crate::core::{Board, Piece};
use crate::types::BOARD_ROWS;

/// Result of one gravity step on the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row and keeps falling.
    Moved,
    /// The piece could not move and was committed into the board.
    Landed,
}

/// Whether the piece can fall one more row.
pub fn can_move_down(piece: &Piece, board: &Board) -> bool {
    if piece.row + 1 >= BOARD_ROWS as i8 {
        return false;
    }
    board.is_empty(piece.row + 1, piece.col)
}

/// Shift the piece one column in `dir` (-1 left, +1 right).
///
/// Succeeds iff the target column is in bounds and the cell beside the
/// leading cell is empty; returns false and leaves the piece untouched
/// otherwise.
pub fn move_horizontal(piece: &mut Piece, board: &Board, dir: i8) -> bool {
    let target = piece.col + dir;
    if !board.is_empty(piece.row, target) {
        return false;
    }
    piece.col = target;
    true
}

/// Advance the piece one gravity step.
///
/// Moves the piece down when possible; otherwise commits its three gems into
/// the board at `row`, `row - 1`, `row - 2` (rows above the top are
/// discarded) and reports [`DropOutcome::Landed`].
pub fn drop_one_step(piece: &mut Piece, board: &mut Board) -> DropOutcome {
    if can_move_down(piece, board) {
        piece.row += 1;
        return DropOutcome::Moved;
    }

    for (row, color) in piece.cells() {
        if row >= 0 {
            board.set(row, piece.col, Some(color));
        }
    }
    DropOutcome::Landed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GemColor;

    fn test_piece() -> Piece {
        Piece::new([GemColor::Red, GemColor::Green, GemColor::Blue])
    }

    #[test]
    fn can_move_down_blocked_by_floor_and_gems() {
        let mut board = Board::new();
        let mut piece = test_piece();

        assert!(can_move_down(&piece, &board));

        piece.row = (BOARD_ROWS - 1) as i8;
        assert!(!can_move_down(&piece, &board));

        piece.row = 4;
        board.set(5, piece.col, Some(GemColor::Purple));
        assert!(!can_move_down(&piece, &board));
    }

    #[test]
    fn horizontal_move_is_a_no_op_at_walls() {
        let board = Board::new();
        let mut piece = test_piece();
        piece.col = 0;

        assert!(!move_horizontal(&mut piece, &board, -1));
        assert_eq!(piece.col, 0);

        assert!(move_horizontal(&mut piece, &board, 1));
        assert_eq!(piece.col, 1);
    }

    #[test]
    fn horizontal_move_blocked_by_occupied_cell() {
        let mut board = Board::new();
        let mut piece = test_piece();
        piece.row = 6;
        board.set(6, piece.col + 1, Some(GemColor::Yellow));

        assert!(!move_horizontal(&mut piece, &board, 1));
        assert_eq!(piece.col, 3);
    }

    #[test]
    fn landing_commits_colors_bottom_up() {
        let mut board = Board::new();
        let mut piece = test_piece();
        piece.row = (BOARD_ROWS - 1) as i8;

        assert_eq!(drop_one_step(&mut piece, &mut board), DropOutcome::Landed);
        assert_eq!(board.get(12, 3), Some(Some(GemColor::Red)));
        assert_eq!(board.get(11, 3), Some(Some(GemColor::Green)));
        assert_eq!(board.get(10, 3), Some(Some(GemColor::Blue)));
    }

    #[test]
    fn landing_near_top_discards_off_board_rows() {
        let mut board = Board::new();
        board.set(1, 3, Some(GemColor::Purple));

        // Leading cell at row 0; the cells at rows -1 and -2 are dropped.
        let mut piece = test_piece();
        assert_eq!(drop_one_step(&mut piece, &mut board), DropOutcome::Landed);
        assert_eq!(board.get(0, 3), Some(Some(GemColor::Red)));
        assert_eq!(board.get(1, 3), Some(Some(GemColor::Purple)));
    }
}
