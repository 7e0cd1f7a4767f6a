use std::ops::{Index, IndexMut};

use cgmath::Vector3;
use serde::{Deserialize, Serialize};

use crate::{Color, Sign};

/// Face of a cube, in the canonical order used for serialization.
#[derive(
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
)]
#[repr(u8)]
pub enum Face {
    /// Up
    #[default]
    U = 0,
    /// Right
    R = 1,
    /// Front
    F = 2,
    /// Down
    D = 3,
    /// Left
    L = 4,
    /// Back
    B = 5,
}
impl Face {
    /// Number of faces on a cube.
    pub const COUNT: usize = 6;
    /// All faces in canonical order.
    pub const ALL: [Face; Face::COUNT] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// Returns an iterator over all faces in canonical order.
    pub fn iter() -> impl Clone + Iterator<Item = Face> {
        Face::ALL.into_iter()
    }

    /// Returns the position of the face in canonical order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the axis perpendicular to the face.
    pub fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }
    /// Returns which side of the origin the face is on along its axis.
    pub fn sign(self) -> Sign {
        use Face::*;

        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }
    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        use Face::*;

        match self {
            U => D,
            R => L,
            F => B,
            D => U,
            L => R,
            B => F,
        }
    }
    /// Returns the face on the given axis and side.
    pub fn from_axis(axis: Axis, sign: Sign) -> Option<Self> {
        Face::iter().find(|f| f.axis() == axis && f.sign() == sign)
    }

    /// Returns the single-letter symbol for the face.
    pub fn symbol(self) -> char {
        use Face::*;

        match self {
            U => 'U',
            R => 'R',
            F => 'F',
            D => 'D',
            L => 'L',
            B => 'B',
        }
    }
    /// Parses a single-letter face symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        Face::iter().find(|f| f.symbol() == c)
    }
    /// Returns the human-friendly name of the face.
    pub fn name(self) -> &'static str {
        use Face::*;

        match self {
            U => "Up",
            R => "Right",
            F => "Front",
            D => "Down",
            L => "Left",
            B => "Back",
        }
    }

    /// Returns the color of the face's stickers on a solved cube.
    pub fn home_color(self) -> Color {
        use Face::*;

        match self {
            U => Color::White,
            R => Color::Red,
            F => Color::Green,
            D => Color::Yellow,
            L => Color::Orange,
            B => Color::Blue,
        }
    }

    /// Returns the outward unit normal of the face.
    pub fn normal(self) -> Vector3<f32> {
        self.axis().unit_vec3() * self.sign().float()
    }
}

/// 3-dimensional axis.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// Returns the component of a point or vector along this axis.
    pub fn component(self, v: impl Into<[f32; 3]>) -> f32 {
        v.into()[self as usize]
    }

    /// Returns the unit vector along this axis.
    pub fn unit_vec3(self) -> Vector3<f32> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
}

/// One value for each face of a cube, indexable by [`Face`].
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct PerFace<T>(pub [T; Face::COUNT]);
impl<T> Index<Face> for PerFace<T> {
    type Output = T;

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face.index()]
    }
}
impl<T> IndexMut<Face> for PerFace<T> {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.0[face.index()]
    }
}
impl<T> PerFace<T> {
    /// Constructs a value for each face using a function.
    pub fn from_fn(f: impl FnMut(Face) -> T) -> Self {
        Self(Face::ALL.map(f))
    }
    /// Returns an iterator over faces and their values, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::iter().zip(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_faces() {
        for face in Face::iter() {
            assert_ne!(face, face.opposite());
            assert_eq!(face, face.opposite().opposite());
            assert_eq!(face.axis(), face.opposite().axis());
            assert_eq!(face.sign(), -face.opposite().sign());
            assert_eq!(Some(face), Face::from_axis(face.axis(), face.sign()));
        }
    }

    #[test]
    fn test_face_symbols() {
        let symbols: String = Face::iter().map(Face::symbol).collect();
        assert_eq!(symbols, "URFDLB");
        for face in Face::iter() {
            assert_eq!(Ok(face), face.to_string().parse());
            assert_eq!(Some(face), Face::from_symbol(face.symbol()));
        }
        assert!("X".parse::<Face>().is_err());
        assert!("UR".parse::<Face>().is_err());
    }
}
