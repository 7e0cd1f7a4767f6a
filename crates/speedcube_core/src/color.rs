use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::Face;

/// Sticker color. Each color is the home color of exactly one face.
#[derive(
    Serialize, Deserialize, EnumIter, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Home color of [`Face::U`].
    #[default]
    White,
    /// Home color of [`Face::R`].
    Red,
    /// Home color of [`Face::F`].
    Green,
    /// Home color of [`Face::D`].
    Yellow,
    /// Home color of [`Face::L`].
    Orange,
    /// Home color of [`Face::B`].
    Blue,
}
impl Color {
    /// Returns the face whose stickers have this color on a solved cube.
    pub fn home_face(self) -> Face {
        match self {
            Color::White => Face::U,
            Color::Red => Face::R,
            Color::Green => Face::F,
            Color::Yellow => Face::D,
            Color::Orange => Face::L,
            Color::Blue => Face::B,
        }
    }
    /// Returns the color whose home is `face`.
    pub fn of_face(face: Face) -> Self {
        face.home_color()
    }

    /// Returns the single-letter color code.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Blue => 'B',
        }
    }
    /// Parses a single-letter color code.
    pub fn from_letter(c: char) -> Option<Self> {
        use strum::IntoEnumIterator;

        Color::iter().find(|color| color.letter() == c)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_home_colors_are_distinct() {
        for color in Color::iter() {
            assert_eq!(color, color.home_face().home_color());
            assert_eq!(Some(color), Color::from_letter(color.letter()));
        }
        let letters: String = Face::iter().map(|f| f.home_color().letter()).collect();
        assert_eq!(letters, "WRGYOB");
    }
}
