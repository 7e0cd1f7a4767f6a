use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Face, NotationError};

/// Number of layers along each edge of a cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct CubeSize(u8);
impl Default for CubeSize {
    fn default() -> Self {
        Self::THREE
    }
}
impl fmt::Display for CubeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        write!(f, "{n}x{n}x{n}")
    }
}
impl TryFrom<u8> for CubeSize {
    type Error = MoveError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(MoveError::InvalidSize(n))
    }
}
impl From<CubeSize> for u8 {
    fn from(size: CubeSize) -> Self {
        size.0
    }
}
impl CubeSize {
    /// Smallest supported cube.
    pub const MIN: CubeSize = CubeSize(2);
    /// Standard 3x3x3 cube.
    pub const THREE: CubeSize = CubeSize(3);

    /// Returns a cube size, or `None` if `n` is less than 2.
    pub const fn new(n: u8) -> Option<Self> {
        if n >= Self::MIN.0 { Some(Self(n)) } else { None }
    }

    /// Returns the number of layers.
    pub const fn get(self) -> u8 {
        self.0
    }
    /// Returns the number of layers as a `usize`.
    pub const fn layers(self) -> usize {
        self.0 as usize
    }
    /// Returns the largest valid slice index.
    pub const fn max_slice(self) -> u8 {
        self.0 - 1
    }
    /// Returns the number of stickers on one face.
    pub const fn facelets_per_face(self) -> usize {
        self.layers() * self.layers()
    }
}

/// Error applying a move to a cube state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum MoveError {
    #[error("cube size must be at least 2, got {0}")]
    InvalidSize(u8),
    #[error("slice index {slice_index} is out of range for a {size} cube")]
    SliceOutOfRange { slice_index: u8, size: CubeSize },
    #[error("slice index {slice_index} cannot be turned on a {model}")]
    UnsupportedSlice { slice_index: u8, model: &'static str },
    #[error("expected a {expected} cube, got {actual}")]
    SizeMismatch { expected: CubeSize, actual: CubeSize },
    #[error(transparent)]
    Notation(#[from] NotationError),
}

/// Quarter turn of one layer of a cube.
///
/// `slice_index` counts layers inward from `face`, so 0 is the layer flush
/// with `face` and `N-1` is the layer flush with the opposite face.
/// `clockwise` is as seen when looking at `face` from outside the cube.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// Face that the layer is measured from.
    pub face: Face,
    /// Depth of the layer, starting at 0.
    pub slice_index: u8,
    /// Whether the turn is clockwise as seen from `face`.
    pub clockwise: bool,
    /// Duration of the turn animation, if different from the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<NonZeroU32>,
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&NotatedMove::new(*self, 1), f)
    }
}
impl Move {
    /// Constructs a move with the default duration.
    pub const fn new(face: Face, slice_index: u8, clockwise: bool) -> Self {
        Self {
            face,
            slice_index,
            clockwise,
            duration_ms: None,
        }
    }
    /// Constructs a move of the outer layer on `face`.
    pub const fn outer(face: Face, clockwise: bool) -> Self {
        Self::new(face, 0, clockwise)
    }

    /// Returns the move with its animation duration overridden. A zero
    /// duration resets it to the default.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        self.duration_ms = NonZeroU32::new(ms);
        self
    }
    /// Returns the animation duration, if overridden.
    pub fn duration(self) -> Option<Duration> {
        self.duration_ms
            .map(|ms| Duration::from_millis(ms.get().into()))
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            clockwise: !self.clockwise,
            ..self
        }
    }

    /// Returns an error if the slice index is out of range for `size`.
    pub fn validate(self, size: CubeSize) -> Result<(), MoveError> {
        if self.slice_index > size.max_slice() {
            return Err(MoveError::SliceOutOfRange {
                slice_index: self.slice_index,
                size,
            });
        }
        Ok(())
    }

    /// Returns whether the move turns a layer on the surface of the cube.
    pub fn is_outer(self, size: CubeSize) -> bool {
        self.slice_index == 0 || self.slice_index == size.max_slice()
    }

    /// Returns the same physical turn measured from whichever face is closer
    /// to the layer. Ties (the middle layer of an odd cube) keep the original
    /// face.
    #[must_use]
    pub fn canonical(self, size: CubeSize) -> Self {
        let far = size.max_slice().saturating_sub(self.slice_index);
        if far < self.slice_index {
            Self {
                face: self.face.opposite(),
                slice_index: far,
                clockwise: !self.clockwise,
                duration_ms: self.duration_ms,
            }
        } else {
            self
        }
    }
}

/// Move with a repeat count, as written in notation.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NotatedMove {
    /// Quarter turn to repeat.
    pub mv: Move,
    /// Number of times to apply `mv`: 1 for a quarter turn or 2 for a half
    /// turn.
    pub repeat: u8,
}
impl fmt::Display for NotatedMove {
    /// Writes the move in the form the parser accepts. Repeats are reduced to
    /// a net number of clockwise quarter turns, so a counter-clockwise half
    /// turn is written `R2` and three clockwise quarter turns `R'`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_layer(f: &mut fmt::Formatter<'_>, mv: Move) -> fmt::Result {
            if mv.slice_index > 0 {
                write!(f, "{}", u32::from(mv.slice_index) + 1)?;
            }
            write!(f, "{}", mv.face)
        }

        write_layer(f, self.mv)?;
        match self.net_clockwise_quarter_turns() {
            1 => Ok(()),
            2 => write!(f, "2"),
            3 => write!(f, "'"),
            // Identity; two half turns.
            _ => {
                write!(f, "2 ")?;
                write_layer(f, self.mv)?;
                write!(f, "2")
            }
        }
    }
}
impl From<Move> for NotatedMove {
    fn from(mv: Move) -> Self {
        Self::new(mv, 1)
    }
}
impl NotatedMove {
    /// Constructs a notated move.
    pub const fn new(mv: Move, repeat: u8) -> Self {
        Self { mv, repeat }
    }
    /// Constructs a half turn of the outer layer on `face`.
    pub const fn half(face: Face) -> Self {
        Self::new(Move::outer(face, true), 2)
    }

    /// Returns the number of clockwise quarter turns, from 0 to 3, that this
    /// move amounts to.
    pub fn net_clockwise_quarter_turns(self) -> u8 {
        let n = self.repeat % 4;
        if self.mv.clockwise { n } else { (4 - n) % 4 }
    }

    /// Returns the quarter turns that this expands to.
    pub fn quarter_turns(self) -> impl Iterator<Item = Move> {
        std::iter::repeat_n(self.mv, self.repeat.into())
    }

    /// Returns the notated move that undoes this one. Half turns are their own
    /// inverse and are left unchanged.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self.repeat {
            2 => self,
            _ => Self::new(self.mv.inverse(), self.repeat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_size_bounds() {
        assert_eq!(None, CubeSize::new(0));
        assert_eq!(None, CubeSize::new(1));
        assert_eq!(Some(2), CubeSize::new(2).map(CubeSize::get));
        assert_eq!(Err(MoveError::InvalidSize(1)), CubeSize::try_from(1));
        assert_eq!(2, CubeSize::THREE.max_slice());
    }

    #[test]
    fn test_move_validate() {
        let size = CubeSize::THREE;
        assert_eq!(Ok(()), Move::new(Face::R, 2, true).validate(size));
        assert_eq!(
            Err(MoveError::SliceOutOfRange {
                slice_index: 3,
                size,
            }),
            Move::new(Face::R, 3, true).validate(size),
        );
    }

    #[test]
    fn test_move_canonical() {
        let size = CubeSize::THREE;
        assert_eq!(
            Move::outer(Face::L, false),
            Move::new(Face::R, 2, true).canonical(size),
        );
        assert_eq!(
            Move::new(Face::R, 1, true),
            Move::new(Face::R, 1, true).canonical(size),
        );
        let four = CubeSize::new(4).unwrap();
        assert_eq!(
            Move::new(Face::D, 1, true),
            Move::new(Face::U, 2, false).canonical(four),
        );
    }

    #[test]
    fn test_notated_move_display() {
        let r = Move::outer(Face::R, true);
        assert_eq!("R", NotatedMove::new(r, 1).to_string());
        assert_eq!("R'", NotatedMove::new(r.inverse(), 1).to_string());
        assert_eq!("R2", NotatedMove::half(Face::R).to_string());
        assert_eq!("3U'", Move::new(Face::U, 2, false).to_string());
        assert_eq!(NotatedMove::half(Face::F), NotatedMove::half(Face::F).inverse());
    }

    #[test]
    fn test_notated_move_display_is_parseable() {
        let r = Move::outer(Face::R, true);
        assert_eq!("R2", NotatedMove::new(r.inverse(), 2).to_string());
        assert_eq!("R'", NotatedMove::new(r, 3).to_string());
        assert_eq!("R", NotatedMove::new(r.inverse(), 3).to_string());
        assert_eq!("R2 R2", NotatedMove::new(r, 4).to_string());
        assert_eq!("2F'", NotatedMove::new(Move::new(Face::F, 1, true), 7).to_string());

        let features = crate::NotationFeatures { layer_prefix: true };
        for repeat in 0..=8 {
            for mv in [r, r.inverse(), Move::new(Face::U, 2, false)] {
                let notated = NotatedMove::new(mv, repeat);
                let reparsed = crate::notation::parse_sequence(&notated.to_string(), features)
                    .unwrap_or_else(|e| panic!("{notated:?} printed as unparseable: {e}"));
                let total: u8 = reparsed.iter().map(|m| m.net_clockwise_quarter_turns()).sum();
                assert_eq!(notated.net_clockwise_quarter_turns(), total % 4);
            }
        }
    }

    #[test]
    fn test_move_duration() {
        let mv = Move::new(Face::F, 1, false).with_duration(Duration::from_millis(100));
        assert_eq!(Some(Duration::from_millis(100)), mv.duration());
        assert_eq!(None, mv.with_duration(Duration::ZERO).duration());
        assert_eq!(mv.inverse().duration(), mv.duration());
    }
}
