//! The 18-symbol face-turn alphabet and move sequences.

use std::{
    fmt::Display,
    ops::{Deref, DerefMut},
    str::FromStr,
};

use strum_macros::EnumString;

use crate::{CubeError, cube::CubeFace};

/// The letter naming which face a move turns.
///
/// - U: top face
/// - D: bottom face
/// - L: left face
/// - R: right face
/// - F: front face
/// - B: back face
#[derive(PartialEq, Eq, EnumString, Debug, Clone, Copy, Hash)]
pub enum BaseMove {
    U,
    D,
    L,
    R,
    F,
    B,
}

impl BaseMove {
    /// The face this letter turns.
    pub const fn face(self) -> CubeFace {
        match self {
            BaseMove::U => CubeFace::Up,
            BaseMove::D => CubeFace::Down,
            BaseMove::L => CubeFace::Left,
            BaseMove::R => CubeFace::Right,
            BaseMove::F => CubeFace::Front,
            BaseMove::B => CubeFace::Back,
        }
    }
}

impl Display for BaseMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Represents the direction which to turn a face. `Prime` represents
/// a counter-clockwise rotation of a face, and `Double` represents
/// a 180 degree rotation of a face.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Direction {
    Normal,
    Prime,
    Double,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Normal => write!(f, ""),
            Direction::Prime => write!(f, "'"),
            Direction::Double => write!(f, "2"),
        }
    }
}

/// A base move equipped with a direction, e.g. `R`, `U'`, or `F2`.
///
/// A move is stateless; applying it to a [`CubeState`](crate::CubeState)
/// is a pure transformation.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Move {
    pub base: BaseMove,
    pub dir: Direction,
}

impl Move {
    pub const fn new(base: BaseMove, dir: Direction) -> Self {
        Self { base, dir }
    }

    pub const fn invert(self) -> Self {
        Self {
            base: self.base,
            dir: match self.dir {
                Direction::Normal => Direction::Prime,
                Direction::Prime => Direction::Normal,
                Direction::Double => Direction::Double,
            },
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.base, self.dir)
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, dir) = if let Some(rest) = s.strip_suffix('\'') {
            (rest, Direction::Prime)
        } else if let Some(rest) = s.strip_suffix('2') {
            (rest, Direction::Double)
        } else {
            (s, Direction::Normal)
        };
        let base =
            BaseMove::from_str(base).map_err(|_| CubeError::InvalidMove(s.to_string()))?;
        Ok(Move::new(base, dir))
    }
}

/// A shorthand macro for constructing [`Move`]s.
///
/// ```
/// use cube_model::{Move, cube_move};
///
/// let r_prime: Move = cube_move!(R, Prime);
/// let u2: Move = cube_move!(U, Double);
/// ```
#[macro_export]
macro_rules! cube_move {
    ($base:ident, $dir:ident) => {{
        $crate::moves::Move {
            base: $crate::moves::BaseMove::$base,
            dir: $crate::moves::Direction::$dir,
        }
    }};
}

/// An ordered sequence of moves, used for representing scramble
/// sequences and solution sequences. May be empty.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MoveSequence(pub(crate) Vec<Move>);

impl MoveSequence {
    /// The element-wise reverse-and-invert of this sequence. Applying a
    /// sequence and then its inverse returns the cube to where it started.
    pub fn invert(&self) -> Self {
        MoveSequence(self.iter().rev().map(|m| m.invert()).collect())
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut strs = vec![];
        for m in self.iter() {
            strs.push(m.to_string());
        }
        write!(f, "{}", strs.join(" "))
    }
}

impl FromStr for MoveSequence {
    type Err = CubeError;

    /// Parses whitespace-separated move tokens, e.g. a scramble string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .map(Move::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map(MoveSequence)
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// All 18 allowed moves on the cube.
pub const ALL_MOVES: [Move; 18] = [
    cube_move!(U, Normal),
    cube_move!(U, Prime),
    cube_move!(U, Double),
    cube_move!(D, Normal),
    cube_move!(D, Prime),
    cube_move!(D, Double),
    cube_move!(L, Normal),
    cube_move!(L, Prime),
    cube_move!(L, Double),
    cube_move!(R, Normal),
    cube_move!(R, Prime),
    cube_move!(R, Double),
    cube_move!(F, Normal),
    cube_move!(F, Prime),
    cube_move!(F, Double),
    cube_move!(B, Normal),
    cube_move!(B, Prime),
    cube_move!(B, Double),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_round_trips() {
        for mv in ALL_MOVES {
            let token = mv.to_string();
            assert_eq!(token.parse::<Move>(), Ok(mv));
        }
    }

    #[test]
    fn bad_tokens_are_rejected() {
        for token in ["X", "U3", "u", "R2'", "2", "'", ""] {
            assert_eq!(
                token.parse::<Move>(),
                Err(CubeError::InvalidMove(token.to_string()))
            );
        }
    }

    #[test]
    fn invert_is_an_involution() {
        for mv in ALL_MOVES {
            assert_eq!(mv.invert().invert(), mv);
        }
    }

    #[test]
    fn sequence_parses_and_displays() {
        let seq: MoveSequence = "F2 L' U2 F U F U L' B U' F' U D2 L F2 B'".parse().unwrap();
        assert_eq!(seq.len(), 16);
        assert_eq!(seq.to_string(), "F2 L' U2 F U F U L' B U' F' U D2 L F2 B'");
    }

    #[test]
    fn sequence_invert_reverses_order() {
        let seq: MoveSequence = "R U R' U'".parse().unwrap();
        assert_eq!(seq.invert().to_string(), "U R U' R'");
    }

    #[test]
    fn sequence_with_bad_token_is_rejected() {
        assert_eq!(
            "R U Q' F2".parse::<MoveSequence>(),
            Err(CubeError::InvalidMove("Q'".to_string()))
        );
    }
}
