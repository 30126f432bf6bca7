//! Terminal Columns runner.
//!
//! Drives the session with a fixed timestep, maps crossterm key events to
//! game commands, and persists the high score after every landing.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_columns::core::{GameSession, GameSnapshot};
use tui_columns::input::{map_key_event, should_quit};
use tui_columns::persist::{merge_high_score, HighScoreStore, JsonFileStore};
use tui_columns::term::{GameView, TerminalRenderer, Viewport};
use tui_columns::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1);

    let mut store = JsonFileStore::default();
    let mut session = GameSession::new(seed);
    session.set_high_score(store.get_high_score());
    session.start();

    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snapshot);
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key_event(key) {
                        session.apply_command(command);
                        persist_score(&mut store, &mut session)?;
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
            persist_score(&mut store, &mut session)?;
        }
    }
}

/// Push the high-water mark to the store after any landing.
fn persist_score(store: &mut dyn HighScoreStore, session: &mut GameSession) -> Result<()> {
    if let Some(event) = session.take_last_event() {
        if event.points_awarded > 0 || event.game_over {
            merge_high_score(store, session.score())?;
        }
    }
    Ok(())
}
