//! Terminal module - the presentation adapter.
//!
//! Reads snapshots, draws them, and consumes the rows-cleared cue. The core
//! never depends on anything in here.

pub mod screen;

pub use screen::Screen;
