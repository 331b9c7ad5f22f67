//! Input module - turns terminal key events into per-tick input frames.

pub mod handler;

pub use handler::{should_quit, InputHandler};
