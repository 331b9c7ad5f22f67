//! Core module - pure game logic with no external dependencies.
//!
//! Everything here is a closed, deterministic simulation: no I/O, no clock,
//! no global RNG. The frame driver feeds elapsed time and input frames in;
//! snapshots and the rows-cleared event come out.

pub mod engine;
pub mod field;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use engine::{Game, Piece};
pub use field::Field;
pub use pieces::{rotate_about, translated, Shape, PIVOT_INDEX};
pub use rng::{PieceRng, PieceSource, SimpleRng};
pub use snapshot::{GameSnapshot, PieceSnapshot};
