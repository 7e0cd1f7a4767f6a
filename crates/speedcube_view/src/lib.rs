//! Animated execution of moves on a cube.
//!
//! A [`RotationController`] owns the logical state of one cube. Each accepted
//! move is animated by repeatedly calling [`RotationController::tick()`] from
//! a render loop, and the state is updated when the animation finishes.

mod animations;
mod completion;
mod controller;

pub use completion::{MoveCompletion, MoveOutcome};
pub use controller::{ActiveRotation, Phase, RotationController};
