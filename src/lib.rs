//! Terminal Columns: a color-matching falling-block puzzle.
//!
//! A 3-gem vertical piece falls on a 13x6 board. Landing commits the piece;
//! runs of 3+ equal colors clear for points and trigger a gravity cascade.
//! `core` is pure game logic with no I/O; `term` and `input` adapt it to a
//! crossterm terminal; `persist` stores the high score.

pub mod core;
pub mod input;
pub mod persist;
pub mod term;
pub mod types;
