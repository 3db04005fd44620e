//! Keyboard input dispatch.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use ticklab_core::domain::Direction;

use crate::app::App;

/// Handle one key event. `now`/`now_ms` come from the loop so start/stop
/// share the clock with `advance`.
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant, now_ms: u64) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,

        KeyCode::Char(' ') => app.toggle_session(now, now_ms),

        KeyCode::Char('b') => app.open_trade(Direction::Long),
        KeyCode::Char('s') => app.open_trade(Direction::Short),
        KeyCode::Char('c') => app.close_trade(),

        KeyCode::Char('+') | KeyCode::Char('=') => app.bump_contracts(true),
        KeyCode::Char('-') => app.bump_contracts(false),
        KeyCode::Char(']') => app.bump_bars(true),
        KeyCode::Char('[') => app.bump_bars(false),
        KeyCode::Char('p') => app.cycle_periodicity(),

        _ => {}
    }
}
