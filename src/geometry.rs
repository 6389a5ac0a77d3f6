//! 3D sticker identities and quarter-turn rotations.
//!
//! Every colored square on the cube is identified by the cubie it sits on
//! (a position with components in -1..=1) together with the outward normal of
//! the face it points out of. Turning a layer is then a plain rotation of both
//! vectors about the turned face's axis; no 2D adjacency is ever reasoned about.
//!
//! Axes: +X points at Right, +Y at Upper, +Z at Front. The system is right-handed.

use std::sync::LazyLock;

use log::debug;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::layout::{Cell, Face, COLS, FACE_SIZE, ROWS, STICKER_COUNT};

/// An integer 3D vector.
pub type Coord = (i32, i32, i32);

/// Canonical identity of one sticker: the cubie it is on and the direction it faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sticker {
    pub position: Coord,
    pub normal: Coord,
}

/// Invariant violations found while building the geometric tables.
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Sticker {sticker:?} is produced by both {first:?} and {second:?}")]
    DuplicateSticker {
        sticker: Sticker,
        first: Cell,
        second: Cell,
    },
    #[error("Expected 54 distinct stickers but got {0}")]
    StickerCount(usize),
    #[error(
        "Turning {face:?} (clockwise: {clockwise}) moves {origin:?} to {target:?}, which is not a boundary strip cell"
    )]
    UnmappedTarget {
        face: Face,
        clockwise: bool,
        origin: Cell,
        target: Cell,
    },
    #[error("Boundary strip cell {1:?} of {0:?} is not covered by any face")]
    EmptyStripCell(Face, Cell),
    #[error("Turning {face:?} moves the sticker at {origin:?} off the cube")]
    LostSticker { face: Face, origin: Cell },
}

/// Quarter turns about the coordinate axes, indexed by `[axis][direction]`.
///
/// Axis 0 is X, 1 is Y, 2 is Z. Direction 0 is -90 degrees and direction 1 is
/// +90 degrees, both measured counter-clockwise looking down the positive axis.
pub const QUARTER_TURNS: [[fn(Coord) -> Coord; 2]; 3] = [
    [
        |(x, y, z)| (x, z, -y), // -90 about X
        |(x, y, z)| (x, -z, y), // +90 about X
    ],
    [
        |(x, y, z)| (-z, y, x), // -90 about Y
        |(x, y, z)| (z, y, -x), // +90 about Y
    ],
    [
        |(x, y, z)| (y, -x, z), // -90 about Z
        |(x, y, z)| (-y, x, z), // +90 about Z
    ],
];

/// Outward normal of a face.
pub const fn normal_of(face: Face) -> Coord {
    match face {
        Face::Front => (0, 0, 1),
        Face::Back => (0, 0, -1),
        Face::Upper => (0, 1, 0),
        Face::Down => (0, -1, 0),
        Face::Right => (1, 0, 0),
        Face::Left => (-1, 0, 0),
    }
}

/// Returns the axis index of a face and the sign of its normal along that axis.
const fn axis_of(face: Face) -> (usize, i32) {
    match normal_of(face) {
        (x, 0, 0) => (0, x),
        (0, y, 0) => (1, y),
        (_, _, z) => (2, z),
    }
}

#[inline(always)]
const fn component(vector: Coord, axis: usize) -> i32 {
    match axis {
        0 => vector.0,
        1 => vector.1,
        _ => vector.2,
    }
}

/// Returns true if the sticker is on a cubie in the outer layer next to `face`.
#[inline]
pub const fn in_moving_layer(sticker: Sticker, face: Face) -> bool {
    let (axis, sign) = axis_of(face);
    component(sticker.position, axis) == sign
}

/// Rotates a sticker a quarter turn about the outward axis of `face`.
///
/// Clockwise is as seen from outside the cube looking at `face`, i.e. -90
/// degrees about the face normal. A face whose normal points down a negative
/// axis flips the direction about the positive axis.
#[inline]
pub fn rotate(sticker: Sticker, face: Face, clockwise: bool) -> Sticker {
    let (axis, sign) = axis_of(face);
    let direction = (if clockwise { -1 } else { 1 }) * sign;
    let turn = QUARTER_TURNS[axis][usize::from(direction > 0)];
    Sticker {
        position: turn(sticker.position),
        normal: turn(sticker.normal),
    }
}

/// Rotates a sticker a half turn about the axis of `face`.
///
/// A half turn has no direction: both components off the axis change sign.
pub const fn rotate_half(sticker: Sticker, face: Face) -> Sticker {
    const fn flip((x, y, z): Coord, axis: usize) -> Coord {
        match axis {
            0 => (x, -y, -z),
            1 => (-x, y, -z),
            _ => (-x, -y, z),
        }
    }
    let (axis, _) = axis_of(face);
    Sticker {
        position: flip(sticker.position, axis),
        normal: flip(sticker.normal, axis),
    }
}

/// Maps a face and a local (row, col) in its block to a cubie position.
pub type CubieFormula = fn(Face, usize, usize) -> Coord;

/// Cubie position of the sticker drawn at local (row, col) of a face block.
///
/// Each formula reflects how that face is unfolded into the net, viewed from
/// outside the cube.
pub const fn cubie_position(face: Face, local_row: usize, local_col: usize) -> Coord {
    let row = local_row as i32;
    let col = local_col as i32;
    match face {
        Face::Front => (-1 + col, 1 - row, 1),
        Face::Back => (1 - col, 1 - row, -1),
        Face::Upper => (-1 + col, 1, -1 + row),
        Face::Down => (-1 + col, -1, 1 - row),
        Face::Right => (1, 1 - row, 1 - col),
        Face::Left => (-1, 1 - row, -1 + col),
    }
}

/// The bijection between occupied net cells and sticker identities.
pub struct StickerMap {
    cell_to_sticker: [[Option<Sticker>; COLS]; ROWS],
    sticker_to_cell: FxHashMap<Sticker, Cell>,
}

impl StickerMap {
    /// Builds the map from the net layout and the per-face cubie formulas.
    pub fn build() -> Result<Self, GeometryError> {
        Self::from_formula(&Face::ALL, cubie_position)
    }

    /// Builds the map over the blocks of `faces`, placing stickers with `formula`.
    ///
    /// Fails if two cells produce the same sticker or the result does not hold
    /// exactly 54 stickers.
    pub fn from_formula(faces: &[Face], formula: CubieFormula) -> Result<Self, GeometryError> {
        let mut cell_to_sticker = [[None; COLS]; ROWS];
        let mut sticker_to_cell: FxHashMap<Sticker, Cell> = FxHashMap::default();

        for &face in faces {
            let normal = normal_of(face);
            for local_row in 0..FACE_SIZE {
                for local_col in 0..FACE_SIZE {
                    let cell = face.cell(local_row, local_col);
                    let sticker = Sticker {
                        position: formula(face, local_row, local_col),
                        normal,
                    };

                    if let Some(&first) = sticker_to_cell.get(&sticker) {
                        return Err(GeometryError::DuplicateSticker {
                            sticker,
                            first,
                            second: cell,
                        });
                    }
                    sticker_to_cell.insert(sticker, cell);
                    cell_to_sticker[cell.row][cell.col] = Some(sticker);
                }
            }
        }

        if sticker_to_cell.len() != STICKER_COUNT {
            return Err(GeometryError::StickerCount(sticker_to_cell.len()));
        }

        debug!("built sticker map with {} stickers", sticker_to_cell.len());
        Ok(Self {
            cell_to_sticker,
            sticker_to_cell,
        })
    }

    /// Sticker drawn at `cell`, or `None` for cells outside every face.
    #[inline]
    pub fn sticker(&self, cell: Cell) -> Option<Sticker> {
        self.cell_to_sticker
            .get(cell.row)
            .and_then(|row| row.get(cell.col))
            .copied()
            .flatten()
    }

    /// Cell where `sticker` is drawn, or `None` if it is not one of the 54 stickers.
    #[inline]
    pub fn cell(&self, sticker: Sticker) -> Option<Cell> {
        self.sticker_to_cell.get(&sticker).copied()
    }
}

static STICKERS: LazyLock<StickerMap> = LazyLock::new(|| {
    StickerMap::build().unwrap_or_else(|err| panic!("inconsistent net geometry: {err}"))
});

/// The process-wide sticker map.
pub fn stickers() -> &'static StickerMap {
    &STICKERS
}

/// Sticker drawn at `cell`. Asking for an empty cell returns `None`.
#[inline]
pub fn sticker_of(cell: Cell) -> Option<Sticker> {
    STICKERS.sticker(cell)
}

/// Cell where `sticker` is drawn.
#[inline]
pub fn cell_of(sticker: Sticker) -> Option<Cell> {
    STICKERS.cell(sticker)
}
