//! Constant tables describing the 3x3x3 cube.
//!
//! Corner slots, in order: URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB.
//!
//! Edge slots, in order: UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR.

use crate::Face::{self, B, D, F, L, R, U};

/// Number of corner cubies.
pub const CORNER_COUNT: usize = 8;
/// Number of edge cubies.
pub const EDGE_COUNT: usize = 12;

/// Effect of a clockwise quarter turn of one face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MoveTable {
    /// Corner slot that each corner slot receives its cubie from.
    pub cp: [u8; CORNER_COUNT],
    /// Twist added to each corner slot.
    pub co: [u8; CORNER_COUNT],
    /// Edge slot that each edge slot receives its cubie from.
    pub ep: [u8; EDGE_COUNT],
    /// Flip added to each edge slot.
    pub eo: [u8; EDGE_COUNT],
}

/// Move tables, indexed by [`Face::index()`].
pub const MOVE_TABLES: [MoveTable; Face::COUNT] = [
    // U
    MoveTable {
        cp: [3, 0, 1, 2, 4, 5, 6, 7],
        co: [0; 8],
        ep: [3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11],
        eo: [0; 12],
    },
    // R
    MoveTable {
        cp: [4, 1, 2, 0, 7, 5, 6, 3],
        co: [2, 0, 0, 1, 1, 0, 0, 2],
        ep: [8, 1, 2, 3, 11, 5, 6, 7, 4, 9, 10, 0],
        eo: [0; 12],
    },
    // F
    MoveTable {
        cp: [1, 5, 2, 3, 0, 4, 6, 7],
        co: [1, 2, 0, 0, 2, 1, 0, 0],
        ep: [0, 9, 2, 3, 4, 8, 6, 7, 1, 5, 10, 11],
        eo: [0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0],
    },
    // D
    MoveTable {
        cp: [0, 1, 2, 3, 5, 6, 7, 4],
        co: [0; 8],
        ep: [0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11],
        eo: [0; 12],
    },
    // L
    MoveTable {
        cp: [0, 2, 6, 3, 4, 1, 5, 7],
        co: [0, 1, 2, 0, 0, 2, 1, 0],
        ep: [0, 1, 10, 3, 4, 5, 9, 7, 8, 2, 6, 11],
        eo: [0; 12],
    },
    // B
    MoveTable {
        cp: [0, 1, 3, 7, 4, 5, 2, 6],
        co: [0, 0, 1, 2, 0, 0, 2, 1],
        ep: [0, 1, 2, 11, 4, 5, 6, 10, 8, 9, 3, 7],
        eo: [0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1],
    },
];

/// Sticker positions `(face, index)` of each corner slot, starting with the
/// U or D sticker and proceeding clockwise around the corner.
pub const CORNER_FACELETS: [[(Face, usize); 3]; CORNER_COUNT] = [
    [(U, 8), (R, 0), (F, 2)],
    [(U, 6), (F, 0), (L, 2)],
    [(U, 0), (L, 0), (B, 2)],
    [(U, 2), (B, 0), (R, 2)],
    [(D, 2), (F, 8), (R, 6)],
    [(D, 0), (L, 8), (F, 6)],
    [(D, 6), (B, 8), (L, 6)],
    [(D, 8), (R, 8), (B, 6)],
];

/// Home faces of each corner cubie, in the same order as
/// [`CORNER_FACELETS`].
pub const CORNER_COLORS: [[Face; 3]; CORNER_COUNT] = [
    [U, R, F],
    [U, F, L],
    [U, L, B],
    [U, B, R],
    [D, F, R],
    [D, L, F],
    [D, B, L],
    [D, R, B],
];

/// Sticker positions `(face, index)` of each edge slot, starting with the U/D
/// sticker (or the F/B sticker for middle-layer edges).
pub const EDGE_FACELETS: [[(Face, usize); 2]; EDGE_COUNT] = [
    [(U, 5), (R, 1)],
    [(U, 7), (F, 1)],
    [(U, 3), (L, 1)],
    [(U, 1), (B, 1)],
    [(D, 5), (R, 7)],
    [(D, 1), (F, 7)],
    [(D, 3), (L, 7)],
    [(D, 7), (B, 7)],
    [(F, 5), (R, 3)],
    [(F, 3), (L, 5)],
    [(B, 5), (L, 3)],
    [(B, 3), (R, 5)],
];

/// Home faces of each edge cubie, in the same order as [`EDGE_FACELETS`].
pub const EDGE_COLORS: [[Face; 2]; EDGE_COUNT] = [
    [U, R],
    [U, F],
    [U, L],
    [U, B],
    [D, R],
    [D, F],
    [D, L],
    [D, B],
    [F, R],
    [F, L],
    [B, L],
    [B, R],
];
