//! Terminal blockfall runner (default binary).
//!
//! Owns the wall clock and the poll/advance/draw loop; the engine itself
//! only ever sees elapsed milliseconds and per-tick input frames.

use std::time::{Duration, Instant, SystemTime};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Game;
use blockfall::input::{should_quit, InputHandler};
use blockfall::term::Screen;
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(1);
    let mut game = Game::new(seed);
    let mut input = InputHandler::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        screen.draw(&game.snapshot())?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        input.handle_key_press(key.code);
                    }
                    KeyEventKind::Repeat => input.handle_key_repeat(key.code),
                    KeyEventKind::Release => input.handle_key_release(key.code),
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            // After game over the engine is inert; the loop keeps drawing
            // the final frame until a quit key arrives.
            game.advance(TICK_MS, input.take_frame());

            if game.take_rows_cleared().is_some() {
                screen.bell()?;
            }
        }
    }
}
