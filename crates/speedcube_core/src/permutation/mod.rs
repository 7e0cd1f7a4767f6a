//! Corner and edge permutation model of a 3x3x3 cube.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub mod tables;

use tables::{
    CORNER_COLORS, CORNER_COUNT, CORNER_FACELETS, EDGE_COLORS, EDGE_COUNT, EDGE_FACELETS,
    MOVE_TABLES, MoveTable,
};

use crate::{Color, CubeSize, CubeState, Face, FaceletState, Move, MoveError, PerFace};

const MODEL_NAME: &str = "3x3x3 permutation model";

/// Error constructing a [`PermutationState`].
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    #[error("expected a 3x3x3 cube, got {0}")]
    WrongSize(CubeSize),
    #[error("center of face {0} is not its home color")]
    BadCenter(Face),
    #[error("stickers in corner slot {0} do not form a corner")]
    BadCorner(usize),
    #[error("stickers in edge slot {0} do not form an edge")]
    BadEdge(usize),
    #[error("{0} permutation is not a bijection")]
    NotBijective(&'static str),
    #[error("{0} orientation is out of range")]
    BadOrientation(&'static str),
    #[error("corner twist does not sum to zero")]
    CornerTwist,
    #[error("edge flip does not sum to zero")]
    EdgeFlip,
    #[error("corner and edge permutations have different parity")]
    ParityMismatch,
}

/// State of a 3x3x3 cube as a permutation and orientation of its corners and
/// edges. Centers are fixed.
///
/// Slot `i` of `cp` holds the index of the corner cubie currently in corner
/// slot `i`, and `co[i]` is that cubie's twist. `ep` and `eo` are the same for
/// edges.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "RawPermutationState")]
pub struct PermutationState {
    cp: [u8; CORNER_COUNT],
    co: [u8; CORNER_COUNT],
    ep: [u8; EDGE_COUNT],
    eo: [u8; EDGE_COUNT],
}
/// Deserialized arrays that have not been checked yet.
#[derive(Deserialize)]
struct RawPermutationState {
    cp: [u8; CORNER_COUNT],
    co: [u8; CORNER_COUNT],
    ep: [u8; EDGE_COUNT],
    eo: [u8; EDGE_COUNT],
}
impl TryFrom<RawPermutationState> for PermutationState {
    type Error = PermutationError;

    fn try_from(raw: RawPermutationState) -> Result<Self, Self::Error> {
        Self::from_arrays(raw.cp, raw.co, raw.ep, raw.eo)
    }
}

impl Default for PermutationState {
    fn default() -> Self {
        Self::SOLVED
    }
}
impl PermutationState {
    /// Solved state.
    pub const SOLVED: Self = Self {
        cp: [0, 1, 2, 3, 4, 5, 6, 7],
        co: [0; CORNER_COUNT],
        ep: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        eo: [0; EDGE_COUNT],
    };

    /// Constructs a state from its arrays, checking that it is reachable by
    /// legal moves.
    pub fn from_arrays(
        cp: [u8; CORNER_COUNT],
        co: [u8; CORNER_COUNT],
        ep: [u8; EDGE_COUNT],
        eo: [u8; EDGE_COUNT],
    ) -> Result<Self, PermutationError> {
        let ret = Self { cp, co, ep, eo };
        ret.verify()?;
        Ok(ret)
    }

    /// Returns the corner permutation.
    pub fn corner_permutation(&self) -> &[u8; CORNER_COUNT] {
        &self.cp
    }
    /// Returns the corner orientations.
    pub fn corner_orientation(&self) -> &[u8; CORNER_COUNT] {
        &self.co
    }
    /// Returns the edge permutation.
    pub fn edge_permutation(&self) -> &[u8; EDGE_COUNT] {
        &self.ep
    }
    /// Returns the edge orientations.
    pub fn edge_orientation(&self) -> &[u8; EDGE_COUNT] {
        &self.eo
    }

    /// Applies a move table once.
    #[must_use]
    pub fn apply_table(&self, table: &MoveTable) -> Self {
        let mut ret = *self;
        for i in 0..CORNER_COUNT {
            let src = table.cp[i] as usize;
            ret.cp[i] = self.cp[src];
            ret.co[i] = (self.co[src] + table.co[i]) % 3;
        }
        for i in 0..EDGE_COUNT {
            let src = table.ep[i] as usize;
            ret.ep[i] = self.ep[src];
            ret.eo[i] = (self.eo[src] + table.eo[i]) % 2;
        }
        ret
    }

    /// Turns the outer layer of `face` clockwise `quarter_turns` times.
    #[must_use]
    pub fn turn_face(&self, face: Face, quarter_turns: u8) -> Self {
        let table = &MOVE_TABLES[face.index()];
        (0..quarter_turns % 4).fold(*self, |state, _| state.apply_table(table))
    }

    /// Checks that the permutations are bijections, that orientations are in
    /// range and sum to zero, and that corner and edge parity agree.
    pub fn verify(&self) -> Result<(), PermutationError> {
        if !is_bijection(&self.cp) {
            return Err(PermutationError::NotBijective("corner"));
        }
        if !is_bijection(&self.ep) {
            return Err(PermutationError::NotBijective("edge"));
        }
        if self.co.iter().any(|&o| o >= 3) {
            return Err(PermutationError::BadOrientation("corner"));
        }
        if self.eo.iter().any(|&o| o >= 2) {
            return Err(PermutationError::BadOrientation("edge"));
        }
        if !self.co.iter().map(|&o| o as u32).sum::<u32>().is_multiple_of(3) {
            return Err(PermutationError::CornerTwist);
        }
        if !self.eo.iter().map(|&o| o as u32).sum::<u32>().is_multiple_of(2) {
            return Err(PermutationError::EdgeFlip);
        }
        if parity(&self.cp) != parity(&self.ep) {
            return Err(PermutationError::ParityMismatch);
        }
        Ok(())
    }

    /// Returns the stickers of the cube.
    pub fn to_facelets(&self) -> FaceletState<Color> {
        let mut faces = PerFace::from_fn(|face| [face.home_color(); 9]);
        for (slot, (&cubie, &ori)) in self.cp.iter().zip(&self.co).enumerate() {
            for n in 0..3 {
                let (face, index) = CORNER_FACELETS[slot][(n + ori as usize) % 3];
                faces[face][index] = CORNER_COLORS[cubie as usize][n].home_color();
            }
        }
        for (slot, (&cubie, &ori)) in self.ep.iter().zip(&self.eo).enumerate() {
            for n in 0..2 {
                let (face, index) = EDGE_FACELETS[slot][(n + ori as usize) % 2];
                faces[face][index] = EDGE_COLORS[cubie as usize][n].home_color();
            }
        }
        FaceletState::from_fn(CubeSize::THREE, |face, index| faces[face][index])
    }

    /// Reconstructs a permutation state from the stickers of a 3x3x3 cube and
    /// checks that it is reachable by legal moves.
    pub fn from_facelets(facelets: &FaceletState<Color>) -> Result<Self, PermutationError> {
        if facelets.size() != CubeSize::THREE {
            return Err(PermutationError::WrongSize(facelets.size()));
        }
        let sticker = |(face, index): (Face, usize)| facelets.face(face)[index].home_face();

        if let Some(face) = Face::iter().find(|&f| sticker((f, 4)) != f) {
            return Err(PermutationError::BadCenter(face));
        }

        let mut ret = Self::SOLVED;
        for slot in 0..CORNER_COUNT {
            let colors = CORNER_FACELETS[slot].map(sticker);
            let ori = (0..3)
                .find(|&o| matches!(colors[o], Face::U | Face::D))
                .ok_or(PermutationError::BadCorner(slot))?;
            let rotated = [0, 1, 2].map(|n| colors[(n + ori) % 3]);
            let cubie = CORNER_COLORS
                .iter()
                .position(|&home| home == rotated)
                .ok_or(PermutationError::BadCorner(slot))?;
            ret.cp[slot] = cubie as u8;
            ret.co[slot] = ori as u8;
        }
        for slot in 0..EDGE_COUNT {
            let [a, b] = EDGE_FACELETS[slot].map(sticker);
            let (cubie, ori) = EDGE_COLORS
                .iter()
                .enumerate()
                .find_map(|(j, &home)| {
                    if home == [a, b] {
                        Some((j, 0))
                    } else if home == [b, a] {
                        Some((j, 1))
                    } else {
                        None
                    }
                })
                .ok_or(PermutationError::BadEdge(slot))?;
            ret.ep[slot] = cubie as u8;
            ret.eo[slot] = ori;
        }

        ret.verify()?;
        Ok(ret)
    }
}

impl CubeState for PermutationState {
    fn size(&self) -> CubeSize {
        CubeSize::THREE
    }

    fn check_move(&self, mv: Move) -> Result<(), MoveError> {
        mv.validate(CubeSize::THREE)?;
        let canonical = mv.canonical(CubeSize::THREE);
        if canonical.slice_index != 0 {
            return Err(MoveError::UnsupportedSlice {
                slice_index: mv.slice_index,
                model: MODEL_NAME,
            });
        }
        Ok(())
    }

    fn apply_move(&self, mv: Move) -> Result<Self, MoveError> {
        self.check_move(mv)?;
        let Move {
            face, clockwise, ..
        } = mv.canonical(CubeSize::THREE);
        Ok(self.turn_face(face, if clockwise { 1 } else { 3 }))
    }

    fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    fn facelets(&self) -> FaceletState<Color> {
        self.to_facelets()
    }
}

fn is_bijection<const N: usize>(perm: &[u8; N]) -> bool {
    let mut seen = [false; N];
    for &i in perm {
        match seen.get_mut(i as usize) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }
    true
}

/// Returns `true` for odd permutations.
fn parity(perm: &[u8]) -> bool {
    perm.iter()
        .tuple_combinations()
        .filter(|(a, b)| a > b)
        .count()
        % 2
        == 1
}
