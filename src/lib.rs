//! blockfall - a falling-block puzzle engine with a terminal front end.
//!
//! The interesting part lives in [`core`]: a pure, tick-driven simulation
//! that consumes input frames and elapsed time and exposes snapshots plus a
//! rows-cleared event. [`input`] and [`term`] are the thin collaborators
//! around it; the binary owns the clock and the frame loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
