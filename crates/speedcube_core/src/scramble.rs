use std::fmt;

use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::{CubeState, Face, Move, MoveError, NotatedMove, notation};

/// Default number of moves in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Random sequence of outer-layer moves, reproducible from its seed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    /// Seed used to generate the moves.
    pub seed: u64,
    /// Generated moves.
    pub moves: Vec<NotatedMove>,
}

impl Scramble {
    /// Generates a scramble from a random seed.
    pub fn new(length: usize) -> Self {
        let seed = rand::rng().random();
        log::info!("generating scramble of length {length} with seed {seed}");
        Self::from_seed(seed, length)
    }

    /// Generates a scramble deterministically. Each move is drawn uniformly,
    /// with replacement, from the 18 outer-layer tokens.
    pub fn from_seed(seed: u64, length: usize) -> Self {
        let mut rng = rand_chacha::ChaCha12Rng::seed_from_u64(seed);
        let moves = std::iter::repeat_with(|| {
            let face = Face::ALL[rng.random_range(0..Face::COUNT)];
            match rng.random_range(0..3) {
                0 => NotatedMove::from(Move::outer(face, true)),
                1 => NotatedMove::from(Move::outer(face, false)),
                _ => NotatedMove::half(face),
            }
        })
        .take(length)
        .collect();
        Self { seed, moves }
    }

    /// Applies the scramble to a state.
    pub fn apply_to<S: CubeState>(&self, state: &S) -> Result<S, MoveError> {
        state.apply_moves(&self.moves)
    }

    /// Returns the sequence that undoes the scramble.
    pub fn inverse(&self) -> Vec<NotatedMove> {
        notation::invert_sequence(&self.moves)
    }
}

impl fmt::Display for Scramble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&notation::format_moves(self.moves.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{CubeSize, FaceletState, NotationFeatures, PermutationState};

    #[test]
    fn test_scramble_length() {
        assert_eq!(DEFAULT_SCRAMBLE_LENGTH, Scramble::new(DEFAULT_SCRAMBLE_LENGTH).moves.len());
        assert_eq!(0, Scramble::new(0).moves.len());
        assert_eq!("", Scramble::from_seed(7, 0).to_string());
    }

    #[test]
    fn test_scramble_uses_outer_tokens() {
        let scramble = Scramble::from_seed(12345, 500);
        for m in &scramble.moves {
            assert_eq!(0, m.mv.slice_index);
            assert!(m.repeat == 1 || (m.repeat == 2 && m.mv.clockwise));
        }
        let text = scramble.to_string();
        assert_eq!(500, text.split_whitespace().count());
        let parsed = notation::parse_sequence(&text, NotationFeatures::STRICT).unwrap();
        assert_eq!(scramble.moves, parsed);

        // Every face appears somewhere in a long scramble.
        for face in Face::iter() {
            assert!(scramble.moves.iter().any(|m| m.mv.face == face), "{face}");
        }
    }

    proptest! {
        #[test]
        fn proptest_seed_is_reproducible(seed: u64, length in 0..50_usize) {
            prop_assert_eq!(Scramble::from_seed(seed, length), Scramble::from_seed(seed, length));
        }

        #[test]
        fn proptest_scramble_then_inverse_is_solved(seed: u64) {
            let scramble = Scramble::from_seed(seed, DEFAULT_SCRAMBLE_LENGTH);

            let grid = scramble.apply_to(&FaceletState::new_solved(CubeSize::THREE)).unwrap();
            prop_assert!(grid.apply_moves(&scramble.inverse()).unwrap().is_solved());

            let perm = scramble.apply_to(&PermutationState::default()).unwrap();
            prop_assert_eq!(perm.facelets(), grid);
            prop_assert!(perm.verify().is_ok());
        }
    }
}
