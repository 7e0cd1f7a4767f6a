//! Grid rotation and ring cycling for the facelet model.
//!
//! Each face grid is stored row-major. Viewed from outside the cube, the
//! rows and columns of each face run in these directions:
//!
//! | Face | row 0 nearest | column 0 nearest |
//! |------|---------------|------------------|
//! | U    | B             | L                |
//! | R    | U             | F                |
//! | F    | U             | L                |
//! | D    | F             | L                |
//! | L    | U             | B                |
//! | B    | U             | R                |

use smallvec::SmallVec;

use crate::Face::{self, B, D, F, L, R, U};

/// Whether a ring member is a row or a column of its face.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum Strip {
    Row,
    Col,
}

/// Whether a ring member's row or column index counts from the near side of
/// the turned layer or from the far side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum Depth {
    /// Index is `slice_index`.
    First,
    /// Index is `N - 1 - slice_index`.
    Last,
}

/// One of the four strips of stickers that move when a layer is turned.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct RingMember {
    pub face: Face,
    pub strip: Strip,
    pub depth: Depth,
    /// Whether the strip is traversed in reverse relative to its row or
    /// column order.
    pub reversed: bool,
}

const fn m(face: Face, strip: Strip, depth: Depth, reversed: bool) -> RingMember {
    RingMember {
        face,
        strip,
        depth,
        reversed,
    }
}

use Depth::{First, Last};
use Strip::{Col, Row};

/// Ring members for a turn of each face, indexed by [`Face::index()`]. A
/// clockwise turn moves the strip of member `i` into member `i + 1`.
pub(super) const RINGS: [[RingMember; 4]; Face::COUNT] = [
    // U
    [
        m(F, Row, First, false),
        m(L, Row, First, false),
        m(B, Row, First, false),
        m(R, Row, First, false),
    ],
    // R
    [
        m(U, Col, Last, false),
        m(B, Col, First, true),
        m(D, Col, Last, false),
        m(F, Col, Last, false),
    ],
    // F
    [
        m(U, Row, Last, false),
        m(R, Col, First, false),
        m(D, Row, First, true),
        m(L, Col, Last, true),
    ],
    // D
    [
        m(F, Row, Last, false),
        m(R, Row, Last, false),
        m(B, Row, Last, false),
        m(L, Row, Last, false),
    ],
    // L
    [
        m(U, Col, First, false),
        m(F, Col, First, false),
        m(D, Col, First, false),
        m(B, Col, Last, true),
    ],
    // B
    [
        m(U, Row, First, false),
        m(L, Col, First, true),
        m(D, Row, Last, true),
        m(R, Col, Last, false),
    ],
];

impl RingMember {
    /// Returns the grid indices of the strip, in traversal order.
    pub fn indices(self, n: usize, slice_index: usize) -> impl Iterator<Item = usize> {
        let k = match self.depth {
            First => slice_index,
            Last => n - 1 - slice_index,
        };
        let strip = self.strip;
        let reversed = self.reversed;
        (0..n)
            .map(move |i| if reversed { n - 1 - i } else { i })
            .map(move |i| match strip {
                Row => k * n + i,
                Col => i * n + k,
            })
    }
}

/// Returns the ring members for turning a layer measured from `face`.
pub(super) fn ring(face: Face) -> [RingMember; 4] {
    RINGS[face.index()]
}

/// Rotates an `n`x`n` row-major grid by 90 degrees.
pub(super) fn rotate_grid<T: Copy>(grid: &mut [T], n: usize, clockwise: bool) {
    let old: SmallVec<[T; 64]> = SmallVec::from_slice(grid);
    for row in 0..n {
        for col in 0..n {
            let (new_row, new_col) = match clockwise {
                true => (col, n - 1 - row),
                false => (n - 1 - col, row),
            };
            grid[new_row * n + new_col] = old[row * n + col];
        }
    }
}
