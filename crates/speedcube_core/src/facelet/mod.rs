//! Sticker-grid model of a cube of any size.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

mod ring;
#[cfg(test)]
mod tests;

use crate::{Color, CubeSize, CubeState, Face, Move, MoveError, PerFace};

/// Alphabet used to write a facelet string.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FaceletStringStyle {
    /// Home face of each sticker's color (`URFDLB`).
    #[default]
    FaceLetters,
    /// Color letters (`WRGYOB`).
    ColorLetters,
}

/// Error parsing a facelet string.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceletParseError {
    #[error("facelet string has length {0}, which is not 6*N*N for any N from 2 to 255")]
    BadLength(usize),
    #[error("unknown facelet {ch:?} at index {index}")]
    BadChar { ch: char, index: usize },
    #[error("expected {expected} facelets of color {color:?}, found {count}")]
    WrongColorCount {
        color: Color,
        count: usize,
        expected: usize,
    },
    #[error("face {face} has {len} facelets, expected {expected}")]
    WrongFaceLength {
        face: Face,
        len: usize,
        expected: usize,
    },
}

/// Stickers of a cube with any number of layers.
///
/// Each face holds `N*N` values in row-major order. See the `ring` module for
/// the orientation of each face's rows and columns. `T` is the sticker color,
/// which may be replaced by unique labels to track individual stickers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(
    try_from = "RawFaceletState<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct FaceletState<T = Color> {
    size: CubeSize,
    faces: PerFace<Vec<T>>,
}

/// Deserialized stickers whose face lengths have not been checked yet.
#[derive(Deserialize)]
struct RawFaceletState<T> {
    size: CubeSize,
    faces: PerFace<Vec<T>>,
}
impl<T> TryFrom<RawFaceletState<T>> for FaceletState<T> {
    type Error = FaceletParseError;

    fn try_from(raw: RawFaceletState<T>) -> Result<Self, Self::Error> {
        let expected = raw.size.facelets_per_face();
        if let Some((face, stickers)) = raw.faces.iter().find(|(_, v)| v.len() != expected) {
            return Err(FaceletParseError::WrongFaceLength {
                face,
                len: stickers.len(),
                expected,
            });
        }
        Ok(Self {
            size: raw.size,
            faces: raw.faces,
        })
    }
}

impl<T> FaceletState<T> {
    /// Constructs a state by calling `f(face, index)` for every sticker.
    pub fn from_fn(size: CubeSize, mut f: impl FnMut(Face, usize) -> T) -> Self {
        let faces = PerFace::from_fn(|face| {
            (0..size.facelets_per_face())
                .map(|index| f(face, index))
                .collect()
        });
        Self { size, faces }
    }

    /// Returns the number of layers.
    pub fn size(&self) -> CubeSize {
        self.size
    }
    /// Returns the stickers of one face in row-major order.
    pub fn face(&self, face: Face) -> &[T] {
        &self.faces[face]
    }
    /// Returns the stickers of one face in row-major order.
    pub fn face_mut(&mut self, face: Face) -> &mut [T] {
        &mut self.faces[face]
    }
    /// Returns the sticker at `row` and `col` of `face`.
    pub fn get(&self, face: Face, row: usize, col: usize) -> Option<&T> {
        let n = self.size.layers();
        if row < n && col < n {
            self.faces[face].get(row * n + col)
        } else {
            None
        }
    }
    /// Returns an iterator over every sticker with its face and index.
    pub fn iter(&self) -> impl Iterator<Item = (Face, usize, &T)> {
        self.faces
            .iter()
            .flat_map(|(face, stickers)| stickers.iter().enumerate().map(move |(i, t)| (face, i, t)))
    }

    /// Returns a state with each sticker replaced.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> FaceletState<U> {
        FaceletState {
            size: self.size,
            faces: PerFace::from_fn(|face| self.faces[face].iter().map(&mut f).collect()),
        }
    }
}

impl<T: PartialEq> FaceletState<T> {
    /// Returns whether every face is a single color.
    pub fn is_monochromatic(&self) -> bool {
        self.faces
            .iter()
            .all(|(_, stickers)| stickers.iter().all(|t| *t == stickers[0]))
    }

    /// Returns the stickers that differ between two states of the same size.
    pub fn diff(&self, other: &Self) -> Vec<(Face, usize)> {
        self.iter()
            .zip(other.iter())
            .filter(|((_, _, a), (_, _, b))| a != b)
            .map(|((face, index, _), _)| (face, index))
            .collect()
    }
}

impl<T: Copy> FaceletState<T> {
    /// Returns the state after a quarter turn.
    pub fn turn(&self, mv: Move) -> Result<Self, MoveError> {
        mv.validate(self.size)?;
        let mut ret = self.clone();
        ret.turn_in_place(mv);
        Ok(ret)
    }

    /// Turns a layer that has already been validated.
    fn turn_in_place(&mut self, mv: Move) {
        let n = self.size.layers();
        let slice = mv.slice_index as usize;

        if slice == 0 {
            ring::rotate_grid(&mut self.faces[mv.face], n, mv.clockwise);
        } else if slice == n - 1 {
            ring::rotate_grid(&mut self.faces[mv.face.opposite()], n, !mv.clockwise);
        }

        let members = ring::ring(mv.face);
        let strips: [SmallVec<[T; 8]>; 4] = members.map(|member| {
            let face = &self.faces[member.face];
            member.indices(n, slice).map(|i| face[i]).collect()
        });
        for (i, member) in members.iter().enumerate() {
            let src = match mv.clockwise {
                true => (i + 3) % 4,
                false => (i + 1) % 4,
            };
            let face = &mut self.faces[member.face];
            for (dst, &t) in member.indices(n, slice).zip(&strips[src]) {
                face[dst] = t;
            }
        }
    }
}

impl FaceletState<Color> {
    /// Returns a solved cube.
    pub fn new_solved(size: CubeSize) -> Self {
        Self::from_fn(size, |face, _| face.home_color())
    }

    /// Returns the stickers as a string of `6*N*N` letters, in the face order
    /// U, R, F, D, L, B.
    pub fn to_string_with(&self, style: FaceletStringStyle) -> String {
        self.iter()
            .map(|(_, _, &color)| match style {
                FaceletStringStyle::FaceLetters => color.home_face().symbol(),
                FaceletStringStyle::ColorLetters => color.letter(),
            })
            .collect()
    }

    /// Checks that each color appears exactly `N*N` times.
    pub fn check_color_counts(&self) -> Result<(), FaceletParseError> {
        let expected = self.size.facelets_per_face();
        for face in Face::iter() {
            let color = face.home_color();
            let count = self.iter().filter(|(_, _, c)| **c == color).count();
            if count != expected {
                return Err(FaceletParseError::WrongColorCount {
                    color,
                    count,
                    expected,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for FaceletState<Color> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(FaceletStringStyle::FaceLetters))
    }
}

impl FromStr for FaceletState<Color> {
    type Err = FaceletParseError;

    /// Parses a facelet string in either alphabet. The cube size is inferred
    /// from the length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        let size = size_from_len(chars.len()).ok_or(FaceletParseError::BadLength(chars.len()))?;
        let colors = chars
            .iter()
            .enumerate()
            .map(|(index, &ch)| {
                Face::from_symbol(ch)
                    .map(Face::home_color)
                    .or_else(|| Color::from_letter(ch))
                    .ok_or(FaceletParseError::BadChar { ch, index })
            })
            .collect::<Result<Vec<Color>, _>>()?;
        let per_face = size.facelets_per_face();
        Ok(Self::from_fn(size, |face, index| {
            colors[face.index() * per_face + index]
        }))
    }
}

fn size_from_len(len: usize) -> Option<CubeSize> {
    if !len.is_multiple_of(Face::COUNT) {
        return None;
    }
    let per_face = len / Face::COUNT;
    let n = (2..=u8::MAX).find(|&n| n as usize * n as usize >= per_face)?;
    (n as usize * n as usize == per_face)
        .then_some(n)
        .and_then(CubeSize::new)
}

impl CubeState for FaceletState<Color> {
    fn size(&self) -> CubeSize {
        self.size
    }

    fn apply_move(&self, mv: Move) -> Result<Self, MoveError> {
        self.turn(mv)
    }

    fn is_solved(&self) -> bool {
        self.is_monochromatic()
    }

    fn facelets(&self) -> FaceletState<Color> {
        self.clone()
    }
}
