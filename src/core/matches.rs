//! Match module - detects and clears runs of 3 equal colors.
//!
//! One sweep walks every vertical triple start, then every horizontal triple
//! start, clearing each detected run in place as it goes. Because cleared
//! cells are empty by the time later starts are examined, a physical cell is
//! credited at most once per sweep, and the caller can award a flat score
//! per returned run.

use arrayvec::ArrayVec;

use crate::core::Board;
use crate::types::{BOARD_COLS, BOARD_ROWS, MATCH_LEN};

/// Each run clears 3 previously occupied cells, so a single sweep can award
/// at most (ROWS * COLS) / 3 runs.
pub const MAX_RUNS_PER_SWEEP: usize = (BOARD_ROWS as usize * BOARD_COLS as usize) / MATCH_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOrientation {
    Vertical,
    Horizontal,
}

/// A cleared triple, identified by its start cell (topmost for vertical,
/// leftmost for horizontal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearedRun {
    pub row: i8,
    pub col: i8,
    pub orientation: RunOrientation,
}

/// Scan the board for triples of equal non-empty colors and clear them.
///
/// Vertical starts are examined first, then horizontal, both in reading
/// order; cells are emptied the moment their run is detected. Returns the
/// cleared runs (empty when the board is stable).
pub fn find_and_clear_matches(board: &mut Board) -> ArrayVec<ClearedRun, MAX_RUNS_PER_SWEEP> {
    let mut cleared = ArrayVec::new();

    // Vertical triples: start row 0..ROWS-2 in each column.
    for row in 0..(BOARD_ROWS as i8 - 2) {
        for col in 0..BOARD_COLS as i8 {
            let cell = board.get(row, col).flatten();
            let Some(color) = cell else {
                continue;
            };
            if board.get(row + 1, col).flatten() == Some(color)
                && board.get(row + 2, col).flatten() == Some(color)
            {
                board.set(row, col, None);
                board.set(row + 1, col, None);
                board.set(row + 2, col, None);
                cleared.push(ClearedRun {
                    row,
                    col,
                    orientation: RunOrientation::Vertical,
                });
            }
        }
    }

    // Horizontal triples: start col 0..COLS-2 in each row.
    for row in 0..BOARD_ROWS as i8 {
        for col in 0..(BOARD_COLS as i8 - 2) {
            let cell = board.get(row, col).flatten();
            let Some(color) = cell else {
                continue;
            };
            if board.get(row, col + 1).flatten() == Some(color)
                && board.get(row, col + 2).flatten() == Some(color)
            {
                board.set(row, col, None);
                board.set(row, col + 1, None);
                board.set(row, col + 2, None);
                cleared.push(ClearedRun {
                    row,
                    col,
                    orientation: RunOrientation::Horizontal,
                });
            }
        }
    }

    cleared
}
