//! Game view tests - pure snapshot-to-framebuffer rendering.

use tui_columns::core::{GameSession, GameSnapshot, PieceSnapshot};
use tui_columns::term::{GameView, Viewport};
use tui_columns::types::{GemColor, SessionPhase, BOARD_COLS, BOARD_ROWS};

const VIEW_W: u16 = 80;
const VIEW_H: u16 = 24;

fn find_text(fb: &tui_columns::term::FrameBuffer, text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    for y in 0..fb.height() {
        for x in 0..fb.width().saturating_sub(chars.len() as u16 - 1) {
            if (0..chars.len()).all(|i| {
                fb.get(x + i as u16, y).map(|g| g.ch) == Some(chars[i])
            }) {
                return true;
            }
        }
    }
    false
}

#[test]
fn test_board_frame_fits_the_viewport() {
    let view = GameView::default();
    let snapshot = GameSnapshot::default();
    let fb = view.render(&snapshot, Viewport::new(VIEW_W, VIEW_H));

    assert_eq!(fb.width(), VIEW_W);
    assert_eq!(fb.height(), VIEW_H);
    // Border corners present somewhere in the frame.
    assert!(find_text(&fb, "┌"));
    assert!(find_text(&fb, "└"));
}

#[test]
fn test_settled_gem_is_drawn_as_a_block() {
    let mut snapshot = GameSnapshot::default();
    snapshot.board[BOARD_ROWS as usize - 1][0] = GemColor::Red.cell_code();

    let view = GameView::default();
    let fb = view.render(&snapshot, Viewport::new(VIEW_W, VIEW_H));

    // With a 2x1 cell, frame starts centered: column 0, bottom row.
    let frame_w = BOARD_COLS as u16 * 2 + 2;
    let frame_h = BOARD_ROWS as u16 + 2;
    let start_x = (VIEW_W - frame_w) / 2;
    let start_y = (VIEW_H - frame_h) / 2;
    let px = start_x + 1;
    let py = start_y + 1 + (BOARD_ROWS as u16 - 1);

    assert_eq!(fb.get(px, py).unwrap().ch, '█');
    assert_eq!(fb.get(px + 1, py).unwrap().ch, '█');
}

#[test]
fn test_active_piece_rows_above_the_well_are_hidden() {
    let mut snapshot = GameSnapshot::default();
    snapshot.active = Some(PieceSnapshot {
        row: 0,
        col: 2,
        colors: [GemColor::Blue, GemColor::Green, GemColor::Red],
    });

    let view = GameView::default();
    let fb = view.render(&snapshot, Viewport::new(VIEW_W, VIEW_H));

    let frame_w = BOARD_COLS as u16 * 2 + 2;
    let frame_h = BOARD_ROWS as u16 + 2;
    let start_x = (VIEW_W - frame_w) / 2;
    let start_y = (VIEW_H - frame_h) / 2;

    // Leading cell at row 0 is drawn; the cells at rows -1/-2 are not,
    // so the border above the well is intact.
    let px = start_x + 1 + 2 * 2;
    assert_eq!(fb.get(px, start_y + 1).unwrap().ch, '█');
    assert_eq!(fb.get(px, start_y).unwrap().ch, '─');
}

#[test]
fn test_header_shows_score_and_best() {
    let mut snapshot = GameSnapshot::default();
    snapshot.score = 300;
    snapshot.high_score = 1200;

    let view = GameView::default();
    let fb = view.render(&snapshot, Viewport::new(VIEW_W, VIEW_H));

    assert!(find_text(&fb, "Score 300"));
    assert!(find_text(&fb, "Best 1200"));
}

#[test]
fn test_phase_overlays() {
    let view = GameView::default();

    let mut snapshot = GameSnapshot::default();
    snapshot.phase = SessionPhase::Paused;
    let fb = view.render(&snapshot, Viewport::new(VIEW_W, VIEW_H));
    assert!(find_text(&fb, "PAUSED"));

    snapshot.phase = SessionPhase::GameOver;
    let fb = view.render(&snapshot, Viewport::new(VIEW_W, VIEW_H));
    assert!(find_text(&fb, "GAME OVER"));

    snapshot.phase = SessionPhase::Running;
    let fb = view.render(&snapshot, Viewport::new(VIEW_W, VIEW_H));
    assert!(!find_text(&fb, "PAUSED"));
    assert!(!find_text(&fb, "GAME OVER"));
}

#[test]
fn test_render_from_a_live_session() {
    let mut session = GameSession::new(9);
    session.start();

    let view = GameView::default();
    let fb = view.render(&session.snapshot(), Viewport::new(VIEW_W, VIEW_H));

    // The spawned piece's leading cell appears at the top of column 3.
    let frame_w = BOARD_COLS as u16 * 2 + 2;
    let frame_h = BOARD_ROWS as u16 + 2;
    let start_x = (VIEW_W - frame_w) / 2;
    let start_y = (VIEW_H - frame_h) / 2;
    let px = start_x + 1 + 3 * 2;
    assert_eq!(fb.get(px, start_y + 1).unwrap().ch, '█');
}
