//! Proptest strategies shared by unit tests.

use proptest::prelude::*;

use crate::{CubeSize, Face, Move, NotatedMove};

/// Sequence of up to `max_len` outer-layer moves drawn from the 18 standard
/// tokens.
pub fn arb_outer_sequence(max_len: usize) -> impl Strategy<Value = Vec<NotatedMove>> {
    prop::collection::vec(arb_outer_move(), 0..=max_len)
}

/// One of the 18 standard outer-layer tokens.
pub fn arb_outer_move() -> impl Strategy<Value = NotatedMove> {
    (0..6_usize, any::<bool>(), 1..=2_u8).prop_map(|(face, clockwise, repeat)| {
        NotatedMove::new(Move::outer(Face::ALL[face], clockwise), repeat)
    })
}

/// Quarter turn of any layer of a cube of the given size.
pub fn arb_move(size: CubeSize) -> impl Strategy<Value = Move> {
    (0..6_usize, 0..size.get(), any::<bool>())
        .prop_map(|(face, slice_index, clockwise)| Move::new(Face::ALL[face], slice_index, clockwise))
}

/// Cube size from 2 to 7 inclusive.
pub fn arb_size() -> impl Strategy<Value = CubeSize> {
    (2..=7_u8).prop_filter_map("cube size", CubeSize::new)
}
