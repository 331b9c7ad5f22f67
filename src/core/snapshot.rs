//! Read-only view of the game state for the presentation layer.
//!
//! The renderer pulls one of these per frame instead of borrowing the live
//! state; the engine stays the only writer of the grid.

use crate::types::{BlockColor, Point, FIELD_COLS, FIELD_LINES};

/// Four cells and a color, for the falling piece and the lookahead preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub cells: [Point; 4],
    pub color: BlockColor,
}

/// Everything the render contract exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Landed cells as color indices, 0 = empty.
    pub field: [[u8; FIELD_COLS as usize]; FIELD_LINES as usize],
    pub active: PieceSnapshot,
    /// Lookahead piece at its generated offsets (not on the field yet).
    pub next: PieceSnapshot,
    pub score: u32,
    pub game_over: bool,
}
