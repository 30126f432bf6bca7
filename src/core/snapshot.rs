//! Read-only render snapshot of a session.
//!
//! The display layer pulls one of these after any state change; the core
//! never pushes to a renderer. The board is exported as u8 codes
//! (0 = empty, 1-5 = gem color) for cheap copying and hashing.

use crate::core::Piece;
use crate::types::{GemColor, SessionPhase, BOARD_COLS, BOARD_ROWS, PIECE_LEN};

/// The active piece as seen by the render sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub row: i8,
    pub col: i8,
    pub colors: [GemColor; PIECE_LEN],
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            row: value.row,
            col: value.col,
            colors: value.colors,
        }
    }
}

impl PieceSnapshot {
    /// The (row, color) pairs the piece occupies, leading cell first.
    pub fn cells(&self) -> [(i8, GemColor); PIECE_LEN] {
        [
            (self.row, self.colors[0]),
            (self.row - 1, self.colors[1]),
            (self.row - 2, self.colors[2]),
        ]
    }
}

/// Full per-frame view of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Settled cells, 0 = empty, 1-5 = [`GemColor::cell_code`].
    pub board: [[u8; BOARD_COLS as usize]; BOARD_ROWS as usize],
    pub active: Option<PieceSnapshot>,
    pub phase: SessionPhase,
    pub score: u32,
    pub high_score: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; BOARD_COLS as usize]; BOARD_ROWS as usize];
        self.active = None;
        self.phase = SessionPhase::Running;
        self.score = 0;
        self.high_score = 0;
        self.seed = 0;
    }

    /// Color of a settled cell, decoded from the u8 grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<GemColor> {
        GemColor::from_cell_code(self.board[row][col])
    }

    pub fn playable(&self) -> bool {
        self.phase == SessionPhase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut snapshot = Self {
            board: [[0u8; BOARD_COLS as usize]; BOARD_ROWS as usize],
            active: None,
            phase: SessionPhase::Running,
            score: 0,
            high_score: 0,
            seed: 0,
        };
        snapshot.clear();
        snapshot
    }
}
