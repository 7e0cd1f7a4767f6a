use std::fmt;

use crate::notation::{self, NotationFeatures};
use crate::{Color, CubeSize, FaceletState, Move, MoveError, NotatedMove};

/// Instance of a cube with a particular state.
///
/// Applying a move never mutates the state; it returns a new one.
pub trait CubeState: 'static + fmt::Debug + Clone + Send + Sync {
    /// Returns the number of layers.
    fn size(&self) -> CubeSize;

    /// Returns an error if `mv` cannot be applied to this state.
    fn check_move(&self, mv: Move) -> Result<(), MoveError> {
        mv.validate(self.size())
    }

    /// Applies a quarter turn and returns the new state.
    fn apply_move(&self, mv: Move) -> Result<Self, MoveError>;

    /// Applies a quarter or half turn and returns the new state.
    fn apply_notated(&self, m: NotatedMove) -> Result<Self, MoveError> {
        m.quarter_turns()
            .try_fold(self.clone(), |state, mv| state.apply_move(mv))
    }

    /// Applies a sequence of moves and returns the new state. Every move is
    /// checked before any is applied, so either all moves are applied or none
    /// are.
    fn apply_moves(&self, moves: &[NotatedMove]) -> Result<Self, MoveError> {
        for m in moves {
            self.check_move(m.mv)?;
        }
        moves
            .iter()
            .try_fold(self.clone(), |state, &m| state.apply_notated(m))
    }

    /// Returns whether the cube is solved.
    fn is_solved(&self) -> bool;

    /// Returns the stickers of the cube.
    fn facelets(&self) -> FaceletState<Color>;

    /// Returns the stickers of the cube as a string of face letters.
    fn to_facelet_string(&self) -> String {
        self.facelets().to_string()
    }
}

/// Parses a move sequence and applies it to `state`. If any token is illegal
/// or any move is invalid for the state, returns an error without applying
/// anything.
pub fn apply_notation<S: CubeState>(
    state: &S,
    s: &str,
    features: NotationFeatures,
) -> Result<S, MoveError> {
    let moves = notation::parse_sequence(s, features)?;
    state.apply_moves(&moves)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::test_util::arb_outer_sequence;
    use crate::{Face, NotationError, PermutationState};

    const SOLVED_3X3: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    fn both_models() -> (PermutationState, FaceletState) {
        (
            PermutationState::default(),
            FaceletState::new_solved(CubeSize::THREE),
        )
    }

    #[test]
    fn test_r_then_r_prime_is_solved() {
        let (perm, grid) = both_models();
        let perm = apply_notation(&perm, "R R'", NotationFeatures::STRICT).unwrap();
        let grid = apply_notation(&grid, "R R'", NotationFeatures::STRICT).unwrap();
        assert_eq!(SOLVED_3X3, perm.to_facelet_string());
        assert_eq!(SOLVED_3X3, grid.to_facelet_string());
        assert!(perm.is_solved() && grid.is_solved());
    }

    #[test]
    fn test_illegal_token_leaves_state_untouched() {
        let (_, grid) = both_models();
        let start = apply_notation(&grid, "F U", NotationFeatures::STRICT).unwrap();
        let err = apply_notation(&start, "R U R' Q U'", NotationFeatures::STRICT).unwrap_err();
        assert_eq!(
            MoveError::Notation(NotationError::IllegalToken {
                token: "Q".to_string(),
                position: 3,
            }),
            err,
        );
    }

    #[test]
    fn test_out_of_range_layer_rejects_batch() {
        let grid = FaceletState::new_solved(CubeSize::new(4).unwrap());
        assert_eq!(
            Err(MoveError::SliceOutOfRange {
                slice_index: 4,
                size: grid.size(),
            }),
            apply_notation(&grid, "R 2U 5F", NotationFeatures::LAYERED),
        );
    }

    #[test]
    fn test_half_turn_equivalence() {
        let (_, grid) = both_models();
        let r2 = apply_notation(&grid, "R2", NotationFeatures::STRICT).unwrap();
        let rr = apply_notation(&grid, "R R", NotationFeatures::STRICT).unwrap();
        assert_eq!(r2, rr);
        assert_eq!(grid, apply_notation(&r2, "R2", NotationFeatures::STRICT).unwrap());
    }

    proptest! {
        #[test]
        fn proptest_cross_model_equivalence(moves in arb_outer_sequence(40)) {
            let (perm, grid) = both_models();
            let perm = perm.apply_moves(&moves).unwrap();
            let grid = grid.apply_moves(&moves).unwrap();
            prop_assert_eq!(perm.facelets(), grid.clone());
            prop_assert_eq!(perm.is_solved(), grid.is_solved());
        }

        #[test]
        fn proptest_inverse_sequence(moves in arb_outer_sequence(30)) {
            let (perm, grid) = both_models();
            let undo = notation::invert_sequence(&moves);
            let scrambled = grid.apply_moves(&moves).unwrap();
            prop_assert!(scrambled.apply_moves(&undo).unwrap().is_solved());
            let scrambled = perm.apply_moves(&moves).unwrap();
            prop_assert!(scrambled.apply_moves(&undo).unwrap().is_solved());
        }

        #[test]
        fn proptest_order_four_any_state(moves in arb_outer_sequence(20), face_index in 0..6_usize) {
            let (_, grid) = both_models();
            let s = grid.apply_moves(&moves).unwrap();
            let quarter = NotatedMove::from(Move::outer(Face::ALL[face_index], true));
            let t = s.apply_moves(&[quarter; 4]).unwrap();
            prop_assert_eq!(s, t);
        }
    }
}
