//! Rubik's cube state and move engine.
//!
//! Two independent state representations are provided:
//!
//! - [`PermutationState`] tracks corner and edge permutation and orientation
//!   of a 3x3x3 cube.
//! - [`FaceletState`] stores an NxN grid of stickers per face and supports
//!   any cube size and any slice depth.
//!
//! Both implement [`CubeState`], so move sequences, scrambles, and solved
//! checks work the same way on either.

#[macro_use]
extern crate lazy_static;

mod color;
mod face;
pub mod facelet;
pub mod geometry;
mod moves;
pub mod notation;
pub mod permutation;
mod scramble;
mod sign;
mod solver;
mod state;
#[cfg(test)]
mod test_util;

pub use color::Color;
pub use face::{Axis, Face, PerFace};
pub use facelet::{FaceletParseError, FaceletState, FaceletStringStyle};
pub use geometry::{SliceGeometry, SliceQuery};
pub use moves::{CubeSize, Move, MoveError, NotatedMove};
pub use notation::{NotationError, NotationFeatures};
pub use permutation::{PermutationError, PermutationState};
pub use scramble::{DEFAULT_SCRAMBLE_LENGTH, Scramble};
pub use sign::Sign;
pub use solver::SolveRequest;
pub use state::{CubeState, apply_notation};
