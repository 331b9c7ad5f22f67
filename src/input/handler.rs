//! Input handler for terminal environments.
//!
//! Collects key events between ticks and drains them into one [`TickInput`]
//! frame per tick. Rotate is edge-triggered (one pulse per discrete press,
//! auto-repeat ignored); the horizontal moves repeat with the terminal's own
//! auto-repeat; soft drop is level-triggered, with a timeout fallback for
//! terminals that never emit key release events.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::TickInput;

// Without release events, a held Down key is visible only as repeated
// press/repeat events; if none arrive for this long, treat the key as
// released so a single tap cannot stick into a permanent soft drop.
const DEFAULT_RELEASE_TIMEOUT_MS: u32 = 150;

/// Accumulates key events into per-tick input frames.
#[derive(Debug, Clone)]
pub struct InputHandler {
    left_pending: bool,
    right_pending: bool,
    rotate_pending: bool,
    soft_drop_held: bool,
    last_down_event: Instant,
    release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            left_pending: false,
            right_pending: false,
            rotate_pending: false,
            soft_drop_held: false,
            last_down_event: Instant::now(),
            release_timeout_ms: DEFAULT_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    /// Record a discrete key press.
    pub fn handle_key_press(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.left_pending = true;
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.right_pending = true;
            }
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                self.rotate_pending = true;
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.soft_drop_held = true;
                self.last_down_event = Instant::now();
            }
            _ => {}
        }
    }

    /// Record a terminal auto-repeat event.
    ///
    /// Repeats re-arm the movement keys (the original feel: holding left
    /// keeps moving) and refresh the soft-drop hold, but never rotate.
    pub fn handle_key_repeat(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                self.left_pending = true;
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                self.right_pending = true;
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
                self.soft_drop_held = true;
                self.last_down_event = Instant::now();
            }
            _ => {}
        }
    }

    /// Record a key release (terminals with the enhanced protocol).
    pub fn handle_key_release(&mut self, code: KeyCode) {
        if matches!(
            code,
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S')
        ) {
            self.soft_drop_held = false;
        }
    }

    /// Drain the accumulated events into one input frame.
    ///
    /// Edge signals are consumed; the soft-drop level survives across frames
    /// until released or timed out.
    pub fn take_frame(&mut self) -> TickInput {
        if self.soft_drop_held
            && self.last_down_event.elapsed().as_millis() as u32 > self.release_timeout_ms
        {
            self.soft_drop_held = false;
        }

        let frame = TickInput {
            move_left: self.left_pending,
            move_right: self.right_pending,
            rotate: self.rotate_pending,
            soft_drop: self.soft_drop_held,
        };

        self.left_pending = false;
        self.right_pending = false;
        self.rotate_pending = false;

        frame
    }

    pub fn reset(&mut self) {
        self.left_pending = false;
        self.right_pending = false;
        self.rotate_pending = false;
        self.soft_drop_held = false;
        self.last_down_event = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Quit keys: Esc, q, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
