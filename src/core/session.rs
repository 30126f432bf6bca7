//! Session module - the top-level game state machine.
//!
//! Owns the board, the falling piece, scoring, and the Running/Paused/
//! GameOver phase. The runner feeds it elapsed-ms ticks and commands; the
//! session resolves landings (match sweep + gravity cascade) synchronously
//! before the next piece spawns.

use crate::core::{
    drop_one_step, find_and_clear_matches, move_horizontal,
    piece::{SPAWN_COL, SPAWN_ROW},
    settle_fully,
    snapshot::{GameSnapshot, PieceSnapshot},
    Board, ColorWell, DropOutcome, Piece,
};
use crate::types::{GameCommand, LandingEvent, SessionPhase, DROP_INTERVAL_MS, MATCH_SCORE};

/// Complete game session state.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<Piece>,
    colors: ColorWell,
    phase: SessionPhase,
    score: u32,
    /// High-water mark across games; seeded from the store by the runner.
    high_score: u32,
    drop_timer_ms: u32,
    /// Last landing outcome (consumed by the runner and tests).
    last_event: Option<LandingEvent>,
    started: bool,
}

impl GameSession {
    /// Create a new session with the given RNG seed. The first piece spawns
    /// on [`start`](Self::start).
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            colors: ColorWell::new(seed),
            phase: SessionPhase::Running,
            score: 0,
            high_score: 0,
            drop_timer_ms: 0,
            last_event: None,
            started: false,
        }
    }

    /// Spawn the first piece. Idempotent.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == SessionPhase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Seed the high-water mark from the persisted value. The session keeps
    /// `high_score >= score` from then on.
    pub fn set_high_score(&mut self, stored: u32) {
        self.high_score = stored.max(self.score);
    }

    pub fn seed(&self) -> u32 {
        self.colors.seed()
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for tests and scenario setup.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<LandingEvent> {
        self.last_event.take()
    }

    /// Spawn a piece at the fixed spawn cell.
    ///
    /// A blocked spawn cell is the sole game-over trigger: the phase flips to
    /// GameOver and no piece is created.
    pub fn spawn_piece(&mut self) -> bool {
        if self.board.is_occupied(SPAWN_ROW, SPAWN_COL) {
            self.phase = SessionPhase::GameOver;
            self.active = None;
            return false;
        }

        self.active = Some(Piece::new(self.colors.draw_piece_colors()));
        true
    }

    /// Advance timers by `elapsed_ms`; drops the piece one row every
    /// [`DROP_INTERVAL_MS`]. Returns whether the board changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != SessionPhase::Running || !self.started {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        if self.drop_timer_ms < DROP_INTERVAL_MS {
            return false;
        }
        self.drop_timer_ms = 0;
        self.step_drop()
    }

    /// One gravity step for the falling piece; resolves the landing when the
    /// piece cannot move.
    fn step_drop(&mut self) -> bool {
        let Some(mut piece) = self.active else {
            return false;
        };

        match drop_one_step(&mut piece, &mut self.board) {
            DropOutcome::Moved => {
                self.active = Some(piece);
            }
            DropOutcome::Landed => {
                self.active = None;
                self.resolve_landing();
            }
        }
        true
    }

    /// Run the full cascade after a landing, then respawn.
    ///
    /// Sweep matches; while any run cleared, award score and settle the
    /// board to a fixed point before re-scanning. Terminates because every
    /// round clears at least three cells (bounded by the board size).
    fn resolve_landing(&mut self) {
        let mut triples: u32 = 0;
        let mut depth: u32 = 0;

        loop {
            let runs = find_and_clear_matches(&mut self.board);
            if runs.is_empty() {
                break;
            }
            triples += runs.len() as u32;
            self.award(runs.len() as u32 * MATCH_SCORE);
            settle_fully(&mut self.board);
            depth += 1;
        }

        let spawned = self.spawn_piece();
        if !spawned {
            // Merge the final score into the high-water mark at game over.
            self.high_score = self.high_score.max(self.score);
        }

        self.last_event = Some(LandingEvent {
            triples_cleared: triples,
            points_awarded: triples * MATCH_SCORE,
            cascade_depth: depth,
            game_over: !spawned,
        });
    }

    fn award(&mut self, points: u32) {
        self.score += points;
        self.high_score = self.high_score.max(self.score);
    }

    /// Apply an input command, validated against the current phase.
    ///
    /// Commands that do not apply (wrong phase, blocked move) are silent
    /// no-ops; the return value only reports whether state changed.
    pub fn apply_command(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::NewGame => {
                self.reset();
                true
            }
            GameCommand::TogglePause => match self.phase {
                SessionPhase::Running => {
                    self.phase = SessionPhase::Paused;
                    true
                }
                SessionPhase::Paused => {
                    self.phase = SessionPhase::Running;
                    true
                }
                SessionPhase::GameOver => false,
            },
            GameCommand::MoveLeft | GameCommand::MoveRight => {
                if self.phase != SessionPhase::Running {
                    return false;
                }
                let dir = if command == GameCommand::MoveLeft { -1 } else { 1 };
                let Some(mut piece) = self.active else {
                    return false;
                };
                let moved = move_horizontal(&mut piece, &self.board, dir);
                if moved {
                    self.active = Some(piece);
                }
                moved
            }
            GameCommand::RotatePiece => {
                if self.phase != SessionPhase::Running {
                    return false;
                }
                let Some(mut piece) = self.active else {
                    return false;
                };
                piece.rotate_colors();
                self.active = Some(piece);
                true
            }
            GameCommand::SoftDrop => {
                if self.phase != SessionPhase::Running {
                    return false;
                }
                self.step_drop()
            }
        }
    }

    /// Reset to a fresh game: board cleared, score zeroed, piece respawned.
    /// The high-water mark and RNG state carry over.
    fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.drop_timer_ms = 0;
        self.last_event = None;
        self.phase = SessionPhase::Running;
        self.started = true;
        self.spawn_piece();
    }

    /// Fill a snapshot for the render sink without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(PieceSnapshot::from);
        out.phase = self.phase;
        out.score = self.score;
        out.high_score = self.high_score;
        out.seed = self.colors.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
