//! Shared data types and constants.
//!
//! Pure data with no dependencies, usable from the core logic, the terminal
//! view, and tests alike.
//!
//! # Board Dimensions
//!
//! - **Rows**: 13 (indexed 0 at the top, 12 at the bottom)
//! - **Columns**: 6 (indexed 0-5, left to right)
//! - **Spawn cell**: (row 0, col 3), the falling piece's leading cell
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep for the runner loop |
//! | `DROP_INTERVAL_MS` | 700 | Gravity interval for the falling piece |

/// Board height in cells (13 rows).
pub const BOARD_ROWS: u8 = 13;

/// Board width in cells (6 columns).
pub const BOARD_COLS: u8 = 6;

/// Number of cells in the falling piece (a vertical column of 3).
pub const PIECE_LEN: usize = 3;

/// Length of a scoring run (3 equal colors in a row or column).
pub const MATCH_LEN: usize = 3;

/// Points awarded per cleared triple.
pub const MATCH_SCORE: u32 = 100;

/// Fixed timestep for the runner loop in milliseconds.
pub const TICK_MS: u32 = 16;

/// Interval between automatic one-row drops of the falling piece.
pub const DROP_INTERVAL_MS: u32 = 700;

/// The five gem colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GemColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

/// All gem colors in draw order.
pub const GEM_COLORS: [GemColor; 5] = [
    GemColor::Red,
    GemColor::Green,
    GemColor::Blue,
    GemColor::Yellow,
    GemColor::Purple,
];

impl GemColor {
    /// Parse a gem color from its name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_columns::types::GemColor;
    ///
    /// assert_eq!(GemColor::from_str("red"), Some(GemColor::Red));
    /// assert_eq!(GemColor::from_str("Purple"), Some(GemColor::Purple));
    /// assert_eq!(GemColor::from_str("cyan"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(GemColor::Red),
            "green" => Some(GemColor::Green),
            "blue" => Some(GemColor::Blue),
            "yellow" => Some(GemColor::Yellow),
            "purple" => Some(GemColor::Purple),
            _ => None,
        }
    }

    /// Lowercase name of the color.
    pub fn as_str(&self) -> &'static str {
        match self {
            GemColor::Red => "red",
            GemColor::Green => "green",
            GemColor::Blue => "blue",
            GemColor::Yellow => "yellow",
            GemColor::Purple => "purple",
        }
    }

    /// Snapshot cell code: 1-5. Code 0 is reserved for an empty cell.
    pub fn cell_code(&self) -> u8 {
        match self {
            GemColor::Red => 1,
            GemColor::Green => 2,
            GemColor::Blue => 3,
            GemColor::Yellow => 4,
            GemColor::Purple => 5,
        }
    }

    /// Inverse of [`cell_code`](Self::cell_code); 0 and unknown codes map to `None`.
    pub fn from_cell_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(GemColor::Red),
            2 => Some(GemColor::Green),
            3 => Some(GemColor::Blue),
            4 => Some(GemColor::Yellow),
            5 => Some(GemColor::Purple),
            _ => None,
        }
    }
}

/// A board cell: empty or holding a settled gem.
pub type Cell = Option<GemColor>;

/// Commands delivered by the input layer to the session.
///
/// The session validates each command against its current phase and silently
/// ignores the ones that do not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Move the falling piece one column left.
    MoveLeft,
    /// Move the falling piece one column right.
    MoveRight,
    /// Cycle the piece's color order (bottom color moves to the top).
    RotatePiece,
    /// Drop the piece one row immediately.
    SoftDrop,
    /// Toggle between Running and Paused.
    TogglePause,
    /// Reset the session to a fresh game.
    NewGame,
}

impl GameCommand {
    /// Parse a command from its camelCase name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_columns::types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
    /// assert_eq!(GameCommand::from_str("newGame"), Some(GameCommand::NewGame));
    /// assert_eq!(GameCommand::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "rotatepiece" => Some(GameCommand::RotatePiece),
            "softdrop" => Some(GameCommand::SoftDrop),
            "togglepause" => Some(GameCommand::TogglePause),
            "newgame" => Some(GameCommand::NewGame),
            _ => None,
        }
    }

    /// camelCase name of the command.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::RotatePiece => "rotatePiece",
            GameCommand::SoftDrop => "softDrop",
            GameCommand::TogglePause => "togglePause",
            GameCommand::NewGame => "newGame",
        }
    }
}

/// Session lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Piece falling, commands accepted.
    Running,
    /// Tick suspended, board and piece frozen.
    Paused,
    /// Spawn cell was blocked; only NewGame applies.
    GameOver,
}

/// Event emitted after a piece lands and the cascade resolves.
///
/// Consumed by the runner (high-score persistence) and by tests via
/// `GameSession::take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingEvent {
    /// Total triples cleared across the whole cascade.
    pub triples_cleared: u32,
    /// Points awarded by this landing (100 per triple).
    pub points_awarded: u32,
    /// Number of sweep/settle rounds the cascade took.
    pub cascade_depth: u32,
    /// Whether the respawn after this landing was blocked.
    pub game_over: bool,
}
