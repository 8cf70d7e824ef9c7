//! The facelet grid and the face-turn engine.
//!
//! A turn of a face is two composed effects: the 3x3 grid of the turned
//! face rotates 90 degrees, and the three-sticker strips on the four
//! bordering faces cycle around the turned face. The bordering-strip
//! cycles are hand-specified per face in `adjacency`; strips whose
//! bordering edges are traversed in opposite reading directions on the
//! two faces carry a reversal in their orientation.

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::{
    CubeError,
    moves::{BaseMove, Direction, Move, MoveSequence},
};

/// Stickers per face.
pub const FACE_STICKERS: usize = 9;

/// One of the six sticker colors, identified at I/O boundaries by a
/// single-letter code.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Blue,
    Green,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Red,
        Color::Orange,
        Color::Blue,
        Color::Green,
    ];

    /// The single-letter code used by UIs and color detectors.
    pub const fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }

    pub const fn from_code(code: char) -> Result<Color, CubeError> {
        match code {
            'W' => Ok(Color::White),
            'Y' => Ok(Color::Yellow),
            'R' => Ok(Color::Red),
            'O' => Ok(Color::Orange),
            'B' => Ok(Color::Blue),
            'G' => Ok(Color::Green),
            _ => Err(CubeError::InvalidColor(code)),
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One of the six faces of the cube.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum CubeFace {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::Up,
        CubeFace::Down,
        CubeFace::Front,
        CubeFace::Back,
        CubeFace::Left,
        CubeFace::Right,
    ];

    const fn name(self) -> &'static str {
        match self {
            CubeFace::Up => "up",
            CubeFace::Down => "down",
            CubeFace::Front => "front",
            CubeFace::Back => "back",
            CubeFace::Left => "left",
            CubeFace::Right => "right",
        }
    }
}

impl Display for CubeFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CubeFace {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(CubeFace::Up),
            "down" => Ok(CubeFace::Down),
            "front" => Ok(CubeFace::Front),
            "back" => Ok(CubeFace::Back),
            "left" => Ok(CubeFace::Left),
            "right" => Ok(CubeFace::Right),
            _ => Err(CubeError::InvalidFaceId(s.to_string())),
        }
    }
}

/// A 3x3 grid of sticker colors, indexed `[row][col]`. Row 0 is the top
/// edge as viewed facing the face, column 0 the left edge.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Face([[Color; 3]; 3]);

impl Face {
    const fn solid(color: Color) -> Self {
        Face([[color; 3]; 3])
    }

    /// The center sticker, which defines the face's color identity.
    pub const fn center(&self) -> Color {
        self.0[1][1]
    }

    /// The 9 stickers in row-major reading order, the canonical flat
    /// serialization used at every I/O boundary.
    pub fn flat(&self) -> [Color; FACE_STICKERS] {
        std::array::from_fn(|i| self.0[i / 3][i % 3])
    }

    fn from_flat(stickers: &[Color]) -> Self {
        Face(std::array::from_fn(|r| {
            std::array::from_fn(|c| stickers[r * 3 + c])
        }))
    }

    fn rotated_cw(&self) -> Self {
        Face(std::array::from_fn(|i| {
            std::array::from_fn(|j| self.0[2 - j][i])
        }))
    }

    fn rotated_ccw(&self) -> Self {
        Face(std::array::from_fn(|i| {
            std::array::from_fn(|j| self.0[j][2 - i])
        }))
    }
}

/// A three-sticker strip of one face, with an explicit reading
/// orientation. The `Rev` variants read and write back-to-front.
#[derive(Clone, Copy)]
enum Strip {
    Row(usize),
    RowRev(usize),
    Col(usize),
    ColRev(usize),
}

#[derive(Clone, Copy)]
struct StripLoc {
    face: CubeFace,
    strip: Strip,
}

const fn at(face: CubeFace, strip: Strip) -> StripLoc {
    StripLoc { face, strip }
}

/// The bordering-strip cycle of a clockwise quarter turn: the contents
/// of entry `i` are carried into entry `i + 1` (mod 4). A prime turn
/// runs the same cycle backwards.
const fn adjacency(base: BaseMove) -> [StripLoc; 4] {
    use CubeFace::{Back, Down, Front, Left, Right, Up};
    use Strip::{Col, ColRev, Row, RowRev};

    match base {
        BaseMove::U => [
            at(Front, Row(0)),
            at(Left, Row(0)),
            at(Back, Row(0)),
            at(Right, Row(0)),
        ],
        BaseMove::D => [
            at(Front, Row(2)),
            at(Right, Row(2)),
            at(Back, Row(2)),
            at(Left, Row(2)),
        ],
        BaseMove::R => [
            at(Front, Col(2)),
            at(Up, Col(2)),
            at(Back, ColRev(0)),
            at(Down, Col(2)),
        ],
        BaseMove::L => [
            at(Front, Col(0)),
            at(Down, Col(0)),
            at(Back, ColRev(2)),
            at(Up, Col(0)),
        ],
        BaseMove::F => [
            at(Up, Row(2)),
            at(Right, Col(0)),
            at(Down, RowRev(0)),
            at(Left, ColRev(2)),
        ],
        BaseMove::B => [
            at(Up, Row(0)),
            at(Left, ColRev(0)),
            at(Down, RowRev(2)),
            at(Right, Col(2)),
        ],
    }
}

/// The full sticker state of a 3x3 cube: six faces of nine stickers,
/// indexed by [`CubeFace`].
///
/// `Clone` is a deep value copy; mutating a clone never affects the
/// original.
#[derive(PartialEq, Eq, Debug, Clone, Hash)]
pub struct CubeState {
    faces: [Face; 6],
}

impl Default for CubeState {
    /// The canonical solved cube: up white, down yellow, front red,
    /// back orange, left green, right blue.
    fn default() -> CubeState {
        CubeState {
            faces: [
                Face::solid(Color::White),
                Face::solid(Color::Yellow),
                Face::solid(Color::Red),
                Face::solid(Color::Orange),
                Face::solid(Color::Green),
                Face::solid(Color::Blue),
            ],
        }
    }
}

impl CubeState {
    pub fn new() -> CubeState {
        CubeState::default()
    }

    pub const fn face(&self, face: CubeFace) -> &Face {
        &self.faces[face as usize]
    }

    /// Overwrites the named face's 9 stickers in row-major order.
    ///
    /// # Errors
    ///
    /// Fails without mutating when `stickers` is not exactly 9 entries.
    pub fn set_face(&mut self, face: CubeFace, stickers: &[Color]) -> Result<(), CubeError> {
        if stickers.len() != FACE_STICKERS {
            return Err(CubeError::InvalidFaceLength(stickers.len()));
        }
        self.faces[face as usize] = Face::from_flat(stickers);
        Ok(())
    }

    /// Overwrites one face from a string of single-letter color codes,
    /// the shape delivered by manual input or a color detector.
    ///
    /// # Errors
    ///
    /// Fails without mutating on an unknown letter or a wrong length,
    /// so a failed or partial capture never makes it into the cube.
    pub fn set_face_codes(&mut self, face: CubeFace, codes: &str) -> Result<(), CubeError> {
        let stickers = codes
            .chars()
            .map(Color::from_code)
            .collect::<Result<Vec<_>, _>>()?;
        self.set_face(face, &stickers)
    }

    /// The named face's 9 stickers in row-major order.
    pub fn get_face_flat(&self, face: CubeFace) -> [Color; FACE_STICKERS] {
        self.faces[face as usize].flat()
    }

    /// Whether every sticker on every face matches that face's center.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|face| {
            let center = face.center();
            face.flat().iter().all(|&sticker| sticker == center)
        })
    }

    /// Whether the configuration is structurally legal: each of the six
    /// colors appears exactly 9 times and the six centers are pairwise
    /// distinct.
    ///
    /// This check is deliberately incomplete. It does not verify edge
    /// and corner permutation or orientation parity, so a subset of
    /// configurations it accepts are physically unreachable. Downstream
    /// consumers (notably the external solver) may still reject them.
    pub fn is_valid(&self) -> bool {
        let counts = self.faces.iter().flat_map(Face::flat).counts();
        Color::ALL
            .iter()
            .all(|color| counts.get(color) == Some(&FACE_STICKERS))
            && self.faces.iter().map(Face::center).all_unique()
    }

    fn strip(&self, loc: StripLoc) -> [Color; 3] {
        let grid = &self.faces[loc.face as usize].0;
        match loc.strip {
            Strip::Row(r) => grid[r],
            Strip::RowRev(r) => [grid[r][2], grid[r][1], grid[r][0]],
            Strip::Col(c) => [grid[0][c], grid[1][c], grid[2][c]],
            Strip::ColRev(c) => [grid[2][c], grid[1][c], grid[0][c]],
        }
    }

    fn set_strip(&mut self, loc: StripLoc, stickers: [Color; 3]) {
        let grid = &mut self.faces[loc.face as usize].0;
        match loc.strip {
            Strip::Row(r) => grid[r] = stickers,
            Strip::RowRev(r) => grid[r] = [stickers[2], stickers[1], stickers[0]],
            Strip::Col(c) => {
                for i in 0..3 {
                    grid[i][c] = stickers[i];
                }
            }
            Strip::ColRev(c) => {
                for i in 0..3 {
                    grid[2 - i][c] = stickers[i];
                }
            }
        }
    }

    /// One quarter turn of `base`'s face, as a pure function. All four
    /// bordering strips are read from the old state before any write.
    fn turned(&self, base: BaseMove, clockwise: bool) -> Self {
        let face = base.face();
        let mut next = self.clone();
        next.faces[face as usize] = if clockwise {
            self.faces[face as usize].rotated_cw()
        } else {
            self.faces[face as usize].rotated_ccw()
        };
        let cycle = adjacency(base);
        let strips = cycle.map(|loc| self.strip(loc));
        for (i, strip) in strips.into_iter().enumerate() {
            let dest = if clockwise { (i + 1) % 4 } else { (i + 3) % 4 };
            next.set_strip(cycle[dest], strip);
        }
        next
    }

    /// Applies one move in place. A double move is the literal double
    /// application of the clockwise quarter turn.
    pub fn apply_move(&mut self, mv: Move) {
        match mv.dir {
            Direction::Normal => *self = self.turned(mv.base, true),
            Direction::Prime => *self = self.turned(mv.base, false),
            Direction::Double => {
                *self = self.turned(mv.base, true);
                *self = self.turned(mv.base, true);
            }
        }
    }

    /// Applies a sequence of moves, in order.
    pub fn apply_moves(&mut self, moves: &MoveSequence) {
        for &mv in moves.iter() {
            self.apply_move(mv);
        }
    }
}

impl Display for CubeState {
    /// A per-face debug dump, one `name: codes` line per face.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for face in CubeFace::ALL {
            let codes: String = self.get_face_flat(face).iter().map(|c| c.code()).collect();
            writeln!(f, "{face}: {codes}")?;
        }
        Ok(())
    }
}
