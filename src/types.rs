//! Core types shared across the application.
//! This module contains pure data types with no external dependencies.

/// Field dimensions (columns x rows).
pub const FIELD_COLS: u8 = 10;
pub const FIELD_LINES: u8 = 20;

/// Frame-loop tick length (milliseconds).
pub const TICK_MS: u32 = 16;

/// Gravity: forced descent once the accumulator exceeds this delay.
pub const GRAVITY_DELAY_MS: u32 = 300;
/// Gravity delay while soft drop is held.
pub const SOFT_DROP_DELAY_MS: u32 = 50;

/// Points awarded per cleared row.
pub const POINTS_PER_ROW: u32 = 10;

/// A cell position in field coordinates (x right, y down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// Color index of a landed or falling block, always in `1..=7`.
///
/// Colors are picked independently of shape, so this is an index into the
/// block palette rather than a piece identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockColor(u8);

impl BlockColor {
    /// All seven palette entries, in index order.
    pub const ALL: [BlockColor; 7] = [
        BlockColor(1),
        BlockColor(2),
        BlockColor(3),
        BlockColor(4),
        BlockColor(5),
        BlockColor(6),
        BlockColor(7),
    ];

    /// Build from a raw index; `None` unless `raw` is in `1..=7`.
    pub const fn new(raw: u8) -> Option<Self> {
        if raw >= 1 && raw <= 7 {
            Some(BlockColor(raw))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Cell of the field (`None` = empty, `Some` = permanently landed block).
pub type Cell = Option<BlockColor>;

/// Input signals consumed by the engine, one frame per tick.
///
/// `rotate` and the horizontal moves are edge signals (one discrete pulse per
/// press — the input layer is responsible for that); `soft_drop` is
/// level-triggered and reflects whether the key is currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub rotate: bool,
    pub soft_drop: bool,
}

impl TickInput {
    /// A frame with no input requested.
    pub const fn idle() -> Self {
        Self {
            move_left: false,
            move_right: false,
            rotate: false,
            soft_drop: false,
        }
    }
}
