//! A facelet-level model of the 3x3 Rubik's Cube.
//!
//! The state of the cube is represented directly as the 54 colored
//! stickers, grouped into six 3x3 faces. Face turns are implemented as
//! grid rotations of the turned face combined with a cyclic permutation
//! of the three-sticker strips on the four bordering faces. This
//! representation is deliberately close to what a camera or a UI sees,
//! which makes it the natural exchange format with color-detection
//! front ends and with facelet-string solvers.

use thiserror::Error;

pub mod cube;
pub mod moves;

pub use cube::{Color, CubeFace, CubeState, Face};
pub use moves::{ALL_MOVES, BaseMove, Direction, Move, MoveSequence};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("unknown face name: {0:?}")]
    InvalidFaceId(String),
    #[error("a face takes exactly 9 stickers, got {0}")]
    InvalidFaceLength(usize),
    #[error("unknown move token: {0:?}")]
    InvalidMove(String),
    #[error("unknown color code: {0:?}")]
    InvalidColor(char),
}
