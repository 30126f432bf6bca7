//! Core module - pure game rules with no I/O dependencies.
//!
//! Board storage, piece movement, match detection, gravity, and the session
//! state machine all live here. Nothing in this module touches the terminal,
//! timers, or the filesystem.

pub mod board;
pub mod gravity;
pub mod matches;
pub mod movement;
pub mod piece;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use board::Board;
pub use gravity::{settle, settle_fully};
pub use matches::{find_and_clear_matches, ClearedRun, RunOrientation};
pub use movement::{can_move_down, drop_one_step, move_horizontal, DropOutcome};
pub use piece::Piece;
pub use rng::{ColorWell, SimpleRng};
pub use session::GameSession;
pub use snapshot::{GameSnapshot, PieceSnapshot};
