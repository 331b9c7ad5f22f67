//! Engine module - the per-tick game state machine.
//!
//! One `advance` call per frame applies, in order: the requested horizontal
//! move, at most one rotation, then gravity. A blocked descent locks the
//! piece, clears completed rows, scores them, checks for game over, and
//! promotes the lookahead piece. Every invalid transform silently reverts;
//! the only terminal condition is game over, after which `advance` is a
//! no-op.
//!
//! The engine owns the field exclusively and never reads a clock or an RNG
//! of its own: time arrives as elapsed milliseconds, pieces from the
//! injected [`PieceSource`].

use crate::core::field::Field;
use crate::core::pieces::{rotate_about, translated, Shape, PIVOT_INDEX};
use crate::core::rng::{PieceRng, PieceSource};
use crate::core::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{
    BlockColor, Point, TickInput, FIELD_COLS, FIELD_LINES, GRAVITY_DELAY_MS, POINTS_PER_ROW,
    SOFT_DROP_DELAY_MS,
};

/// A falling (or queued) piece: four absolute field points and a color.
///
/// Shape identity is dropped at spawn; rotation works on the points alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub points: [Point; 4],
    pub color: BlockColor,
}

impl Piece {
    /// A freshly generated piece at its spawn position (top-left, the
    /// catalog offsets used as-is).
    pub fn spawn(shape: Shape, color: BlockColor) -> Self {
        Self {
            points: shape.cells(),
            color,
        }
    }
}

/// Complete game state, driven by an external frame loop.
#[derive(Debug, Clone)]
pub struct Game<R: PieceSource = PieceRng> {
    field: Field,
    active: Piece,
    next: Piece,
    score: u32,
    game_over: bool,
    /// Elapsed time since the last forced descent.
    drop_timer_ms: u32,
    /// Rows cleared by the most recent locking tick (consumed by the
    /// presentation layer, e.g. for a sound cue).
    rows_cleared: Option<u32>,
    source: R,
}

impl Game<PieceRng> {
    /// Create a new game with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self::with_source(PieceRng::new(seed))
    }
}

impl<R: PieceSource> Game<R> {
    /// Create a new game drawing pieces from `source`.
    ///
    /// The first piece is spawned immediately; the second becomes the
    /// lookahead.
    pub fn with_source(mut source: R) -> Self {
        let (shape, color) = source.next_piece();
        let active = Piece::spawn(shape, color);
        let (shape, color) = source.next_piece();
        let next = Piece::spawn(shape, color);

        Self {
            field: Field::new(),
            active,
            next,
            score: 0,
            game_over: false,
            drop_timer_ms: 0,
            rows_cleared: None,
            source,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The falling piece.
    pub fn active(&self) -> &Piece {
        &self.active
    }

    /// The lookahead piece, still at its generated offsets.
    pub fn next_preview(&self) -> &Piece {
        &self.next
    }

    #[cfg(test)]
    pub fn field_mut(&mut self) -> &mut Field {
        &mut self.field
    }

    /// Take and clear the rows-cleared notification from the last tick.
    ///
    /// Present at most once per tick in which at least one row was cleared,
    /// carrying the count.
    pub fn take_rows_cleared(&mut self) -> Option<u32> {
        self.rows_cleared.take()
    }

    /// Advance the simulation by one tick.
    ///
    /// `elapsed_ms` is the time since the previous call, supplied by the
    /// frame driver; the engine never reads a clock. Not reentrant. After
    /// game over this is a no-op.
    pub fn advance(&mut self, elapsed_ms: u32, input: TickInput) {
        if self.game_over {
            return;
        }

        // Order matters: move, then rotate, then gravity.
        if input.move_left != input.move_right {
            let dx = if input.move_left { -1 } else { 1 };
            self.try_shift(dx);
        }

        if input.rotate {
            self.try_rotate();
        }

        self.apply_gravity(elapsed_ms, input.soft_drop);
    }

    /// Collision predicate: all four points in bounds and on empty cells.
    fn fits(&self, points: &[Point; 4]) -> bool {
        points.iter().all(|p| self.field.is_open(p.x, p.y))
    }

    /// Translate the active piece by `dx` columns; revert if invalid.
    pub(crate) fn try_shift(&mut self, dx: i8) -> bool {
        let moved = translated(&self.active.points, dx, 0);
        if self.fits(&moved) {
            self.active.points = moved;
            true
        } else {
            false
        }
    }

    /// Rotate the active piece a quarter turn about point index 2; revert
    /// if invalid.
    pub(crate) fn try_rotate(&mut self) -> bool {
        let rotated = rotate_about(&self.active.points, self.active.points[PIVOT_INDEX]);
        if self.fits(&rotated) {
            self.active.points = rotated;
            true
        } else {
            false
        }
    }

    /// Accumulate elapsed time and force a descent once the delay is
    /// strictly exceeded. A blocked descent locks the piece.
    fn apply_gravity(&mut self, elapsed_ms: u32, soft_drop: bool) {
        let delay = if soft_drop {
            SOFT_DROP_DELAY_MS
        } else {
            GRAVITY_DELAY_MS
        };

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= delay {
            return;
        }
        self.drop_timer_ms = 0;

        let dropped = translated(&self.active.points, 0, 1);
        if self.fits(&dropped) {
            self.active.points = dropped;
        } else {
            self.lock_and_respawn();
        }
    }

    /// Lock the active piece, clear completed rows, score them, check the
    /// game-over probe, and promote the lookahead piece.
    fn lock_and_respawn(&mut self) {
        self.field.commit(&self.active.points, self.active.color);

        let cleared = self.field.clear_full_rows();
        if !cleared.is_empty() {
            self.score += POINTS_PER_ROW * cleared.len() as u32;
            self.rows_cleared = Some(cleared.len() as u32);
        }

        // Row-0 occupancy after lock + clear is the sole game-over trigger.
        // The promotion below still runs so the snapshot keeps a coherent
        // active piece, but the engine is inert from here on.
        if self.field.top_row_occupied() {
            self.game_over = true;
        }

        self.active = self.next;
        let (shape, color) = self.source.next_piece();
        self.next = Piece::spawn(shape, color);
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut field = [[0u8; FIELD_COLS as usize]; FIELD_LINES as usize];
        self.field.write_u8_grid(&mut field);

        GameSnapshot {
            field,
            active: PieceSnapshot {
                cells: self.active.points,
                color: self.active.color,
            },
            next: PieceSnapshot {
                cells: self.next.points,
                color: self.next.color,
            },
            score: self.score,
            game_over: self.game_over,
        }
    }
}
