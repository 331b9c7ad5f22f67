//! Pieces module - the tetromino catalog and its rotation geometry.
//!
//! Each shape is four cell offsets inside a conceptual 4x4 bounding box,
//! stored as row-major indices 0-15 and decoded with `x = i % 4, y = i / 4`.
//! Rotation is not a rotation-state table: the active piece is four absolute
//! points, and rotating maps each point around a pivot. The pivot is always
//! point index 2, and the catalog entries are ordered so that index 2 is the
//! correct pivot for all seven shapes. The O piece stays a 2x2 square under
//! this transform but nudges one row down per turn (its pivot is a corner,
//! not the square's center) - a quirk of the encoding this engine keeps.

use crate::types::Point;

/// The seven tetromino shapes, in catalog order (selector 0..7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

/// Cell offsets per shape, as row-major indices into the 4x4 box.
///
/// The point order within each entry is load-bearing: index 2 is the
/// rotation pivot. Do not reorder.
const FIGURES: [[u8; 4]; 7] = [
    [0, 1, 2, 3], // I
    [0, 4, 5, 6], // J
    [2, 6, 5, 4], // L
    [1, 2, 5, 6], // O
    [2, 1, 5, 4], // S
    [1, 4, 5, 6], // T
    [0, 1, 5, 6], // Z
];

/// Which of the four piece points anchors a rotation.
pub const PIVOT_INDEX: usize = 2;

impl Shape {
    /// All shapes, indexable by the catalog selector.
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::J,
        Shape::L,
        Shape::O,
        Shape::S,
        Shape::T,
        Shape::Z,
    ];

    /// The shape's four cells decoded to (x, y) offsets.
    ///
    /// These double as the spawn position: pieces enter the field at the
    /// top-left with x in 0..4, exactly as generated.
    pub fn cells(self) -> [Point; 4] {
        let figure = &FIGURES[self as usize];
        let mut points = [Point::default(); 4];
        for (point, &idx) in points.iter_mut().zip(figure.iter()) {
            *point = Point::new((idx % 4) as i8, (idx / 4) as i8);
        }
        points
    }
}

/// Rotate four points 90 degrees around a pivot.
///
/// For each point: `dx = p.y - pivot.y`, `dy = p.x - pivot.x`, new position
/// `(pivot.x - dx, pivot.y + dy)`. Pure transform; validity is the caller's
/// problem. Four applications return the original point set.
pub fn rotate_about(points: &[Point; 4], pivot: Point) -> [Point; 4] {
    let mut rotated = [Point::default(); 4];
    for (out, p) in rotated.iter_mut().zip(points.iter()) {
        let dx = p.y - pivot.y;
        let dy = p.x - pivot.x;
        *out = Point::new(pivot.x - dx, pivot.y + dy);
    }
    rotated
}

/// Translate four points by (dx, dy).
pub fn translated(points: &[Point; 4], dx: i8, dy: i8) -> [Point; 4] {
    let mut moved = *points;
    for p in &mut moved {
        p.x += dx;
        p.y += dy;
    }
    moved
}
