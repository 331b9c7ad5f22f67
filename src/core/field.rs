//! Field module - the fixed 10x20 playing grid.
//!
//! Holds permanently landed blocks only; the falling piece lives in the
//! engine until it locks. Uses a flat array for cache locality.
//! Coordinates: (x, y) with x in 0..10 left to right, y in 0..20 top to
//! bottom. Row 0 is the top row, which doubles as the game-over probe.

use arrayvec::ArrayVec;

use crate::types::{BlockColor, Cell, Point, FIELD_COLS, FIELD_LINES};

/// Total number of cells on the field.
const FIELD_SIZE: usize = (FIELD_COLS as usize) * (FIELD_LINES as usize);

/// The playing field - 10 columns x 20 rows using flat array storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Flat array of cells, row-major order (y * FIELD_COLS + x).
    cells: [Cell; FIELD_SIZE],
}

impl Field {
    /// Create a new empty field.
    pub fn new() -> Self {
        Self {
            cells: [None; FIELD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates.
    ///
    /// `None` for anything outside the field, including negative rows: the
    /// reference behavior never needs to read above row 0, so out-of-range
    /// always reads as blocked rather than indexing past the array.
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= FIELD_COLS as i8 || y < 0 || y >= FIELD_LINES as i8 {
            return None;
        }
        Some((y as usize) * (FIELD_COLS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        FIELD_COLS
    }

    pub fn height(&self) -> u8 {
        FIELD_LINES
    }

    /// Get cell at (x, y); `None` if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// True iff (x, y) is inside the field and empty.
    ///
    /// This is the cell-level half of the collision predicate: every
    /// attempted move, rotation, and descent checks all four piece points
    /// against it and reverts on the first failure.
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// True iff (x, y) is inside the field and holds a landed block.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Write a locked piece's four cells at its resting position.
    ///
    /// This may complete rows; resolving them is the engine's job, which
    /// runs the clear pass immediately after every commit.
    pub fn commit(&mut self, points: &[Point; 4], color: BlockColor) {
        for p in points {
            if let Some(idx) = Self::index(p.x, p.y) {
                self.cells[idx] = Some(color);
            }
        }
    }

    /// Check if a row is completely filled.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= FIELD_LINES as usize {
            return false;
        }
        let start = y * FIELD_COLS as usize;
        let end = start + FIELD_COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return their indices (bottom to top).
    ///
    /// Two-pointer compaction in a single bottom-up pass: incomplete rows
    /// are moved down to the write cursor, complete rows are skipped, and
    /// whatever remains at the top is emptied. The write cursor never passes
    /// the read cursor, so a shifted row is never read again.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = FIELD_COLS as usize;
        let mut write_y = FIELD_LINES as usize;

        for read_y in (0..FIELD_LINES as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // One empty row enters at the top per cleared row.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// True iff any cell in row 0 holds a landed block.
    ///
    /// The sole game-over trigger: checked by the engine after every
    /// lock + clear, before the next piece is promoted.
    pub fn top_row_occupied(&self) -> bool {
        self.cells[..FIELD_COLS as usize]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Get a reference to the internal cells array.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Export the grid as color indices (0 = empty) for the render snapshot.
    pub fn write_u8_grid(&self, out: &mut [[u8; FIELD_COLS as usize]; FIELD_LINES as usize]) {
        for y in 0..FIELD_LINES as usize {
            for x in 0..FIELD_COLS as usize {
                out[y][x] = match self.cells[y * FIELD_COLS as usize + x] {
                    Some(color) => color.index(),
                    None => 0,
                };
            }
        }
    }

    /// Set a single cell; `false` if out of bounds.
    ///
    /// Gameplay only mutates the field through `commit` and
    /// `clear_full_rows`; this exists for building scenarios in tests and
    /// tools.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
