//! Terminal presentation layer.
//!
//! Renders the game into a styled-character framebuffer which is then
//! flushed to the terminal. `game_view` is pure (snapshot in, framebuffer
//! out) and unit-testable; only `renderer` touches the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
