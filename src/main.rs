//! Terminal runner (default binary).
//!
//! Owns everything the engine does not: the crossterm terminal session,
//! input polling, and the fixed 100 ms gravity tick. Each loop iteration
//! renders a frame, forwards at most one action per key event, and ticks
//! the engine when the interval elapses.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Game;
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{BOARD_COLS, BOARD_ROWS, GAME_OVER_HOLD_MS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Seed the piece sequence from the wall clock; the engine itself only
/// ever sees the injected seed.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = Game::new(BOARD_ROWS, BOARD_COLS, clock_seed());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Leave the final frame (with the banner) up, then exit.
        if !game.is_active() {
            hold_final_frame()?;
            return Ok(());
        }

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
            }
        }

        // Gravity.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick();
        }
    }
}

/// Keep the game-over frame visible, quitting early on any key press.
fn hold_final_frame() -> Result<()> {
    let deadline = Instant::now() + Duration::from_millis(GAME_OVER_HOLD_MS);
    loop {
        let now = Instant::now();
        if now >= deadline {
            return Ok(());
        }
        if event::poll(deadline - now)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }
}
