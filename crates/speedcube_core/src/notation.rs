//! Parsing and formatting of move notation such as `R U R' U2`.

use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Face, Move, NotatedMove};

/// Optional notation extensions.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct NotationFeatures {
    /// Whether a token may start with a 1-based layer number, such as `2R`
    /// for the slice just inside `R`.
    pub layer_prefix: bool,
}
impl NotationFeatures {
    /// Only the 18 outer-layer tokens.
    pub const STRICT: Self = Self {
        layer_prefix: false,
    };
    /// Outer-layer tokens plus layer prefixes.
    pub const LAYERED: Self = Self { layer_prefix: true };
}

/// Error encountered while parsing a move sequence.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("illegal move {token:?} at position {position}")]
    IllegalToken { token: String, position: usize },
    #[error("bad layer number in move {token:?} at position {position}")]
    BadLayer { token: String, position: usize },
    #[error("layer prefixes are not enabled (move {token:?} at position {position})")]
    LayerPrefixDisabled { token: String, position: usize },
}
impl NotationError {
    /// Returns the offending token.
    pub fn token(&self) -> &str {
        match self {
            Self::IllegalToken { token, .. }
            | Self::BadLayer { token, .. }
            | Self::LayerPrefixDisabled { token, .. } => token,
        }
    }
    /// Returns the index of the offending token within its sequence.
    pub fn position(&self) -> usize {
        match self {
            Self::IllegalToken { position, .. }
            | Self::BadLayer { position, .. }
            | Self::LayerPrefixDisabled { position, .. } => *position,
        }
    }
}

/// Formats a sequence of moves as a string.
pub fn format_moves(moves: impl IntoIterator<Item = NotatedMove>) -> String {
    moves.into_iter().join(" ")
}

/// Returns the sequence that undoes `moves`.
pub fn invert_sequence(moves: &[NotatedMove]) -> Vec<NotatedMove> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}

/// Parses a whitespace-separated move sequence. If any token is illegal,
/// returns an error for the first one and no moves.
pub fn parse_sequence(s: &str, features: NotationFeatures) -> Result<Vec<NotatedMove>, NotationError> {
    parse_moves(s, features).collect()
}

/// Parses each token of a whitespace-separated move sequence.
pub fn parse_moves(
    s: &str,
    features: NotationFeatures,
) -> impl '_ + Iterator<Item = Result<NotatedMove, NotationError>> {
    s.split_whitespace()
        .enumerate()
        .map(move |(position, token)| parse_token(token, position, features))
}

/// Parses a single move token.
pub fn parse_move(s: &str, features: NotationFeatures) -> Result<NotatedMove, NotationError> {
    parse_token(s.trim(), 0, features)
}

fn parse_token(
    token: &str,
    position: usize,
    features: NotationFeatures,
) -> Result<NotatedMove, NotationError> {
    const MOVE_PATTERN: &str = r"^(\d+)?([URFDLB])(['2])?$";
    // match the whole string     ^             $
    // optional layer number       (\d+)?
    // face letter                       ([URFDLB])
    // optional suffix                             (['2])?

    lazy_static! {
        static ref MOVE_REGEX: Regex = Regex::new(MOVE_PATTERN).expect("bad regex");
    }

    let owned_token = || token.to_owned();

    let captures = MOVE_REGEX
        .captures(token)
        .ok_or_else(|| NotationError::IllegalToken {
            token: owned_token(),
            position,
        })?;

    let slice_index = match captures.get(1) {
        None => 0,
        Some(_) if !features.layer_prefix => {
            return Err(NotationError::LayerPrefixDisabled {
                token: owned_token(),
                position,
            });
        }
        Some(layer) => layer
            .as_str()
            .parse::<u8>()
            .ok()
            .and_then(|layer| layer.checked_sub(1))
            .ok_or_else(|| NotationError::BadLayer {
                token: owned_token(),
                position,
            })?,
    };

    let face = captures
        .get(2)
        .and_then(|m| m.as_str().parse::<Face>().ok())
        .ok_or_else(|| NotationError::IllegalToken {
            token: owned_token(),
            position,
        })?;

    let (clockwise, repeat) = match captures.get(3).map(|m| m.as_str()) {
        None => (true, 1),
        Some("'") => (false, 1),
        Some(_) => (true, 2),
    };

    Ok(NotatedMove::new(Move::new(face, slice_index, clockwise), repeat))
}
