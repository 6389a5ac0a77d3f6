//! Net layout: where each face sits in the unfolded grid and what color it starts with.
//!
//! The net is a 9x12 grid. Upper and Down sit above and below Front, and the
//! four side faces run left to right as Left, Front, Right, Back:
//!
//! ```text
//!        U
//!     L  F  R  B
//!        D
//! ```
//!
//! Every face is drawn as seen from outside the cube, so Back appears mirrored
//! relative to Front.

/// Number of rows in the net grid.
pub const ROWS: usize = 9;
/// Number of columns in the net grid.
pub const COLS: usize = 12;
/// Side length of one face.
pub const FACE_SIZE: usize = 3;
/// Number of stickers on the whole cube.
pub const STICKER_COUNT: usize = 54;

/// Contents of one grid cell.
///
/// The discriminants are the integers sent to a client renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Fill {
    /// Not covered by any face.
    #[default]
    None = 0,
    Orange = 1,
    White = 2,
    Green = 3,
    Yellow = 4,
    Red = 5,
    Blue = 6,
}

impl Fill {
    /// Decodes a serialized fill value.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Fill::None),
            1 => Some(Fill::Orange),
            2 => Some(Fill::White),
            3 => Some(Fill::Green),
            4 => Some(Fill::Yellow),
            5 => Some(Fill::Red),
            6 => Some(Fill::Blue),
            _ => None,
        }
    }

    /// Single character used when printing a grid.
    pub const fn symbol(self) -> char {
        match self {
            Fill::None => '.',
            Fill::Orange => 'O',
            Fill::White => 'W',
            Fill::Green => 'G',
            Fill::Yellow => 'Y',
            Fill::Red => 'R',
            Fill::Blue => 'B',
        }
    }
}

/// A (row, column) coordinate into the net grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One of the six cube faces.
///
/// The discriminants follow [`Face::ALL`] and index per-face tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Face {
    #[value(alias = "l")]
    Left,
    #[value(alias = "u")]
    Upper,
    #[value(alias = "f")]
    Front,
    #[value(alias = "d")]
    Down,
    #[value(alias = "r")]
    Right,
    #[value(alias = "b")]
    Back,
}

impl Face {
    /// All faces, in the order their blocks are enumerated.
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Upper,
        Face::Front,
        Face::Down,
        Face::Right,
        Face::Back,
    ];

    /// Top-left cell of this face's 3x3 block.
    pub const fn origin(self) -> Cell {
        match self {
            Face::Upper => Cell::new(0, 3),
            Face::Left => Cell::new(3, 0),
            Face::Front => Cell::new(3, 3),
            Face::Right => Cell::new(3, 6),
            Face::Back => Cell::new(3, 9),
            Face::Down => Cell::new(6, 3),
        }
    }

    /// Color of this face in the solved state.
    pub const fn color(self) -> Fill {
        match self {
            Face::Left => Fill::Orange,
            Face::Upper => Fill::White,
            Face::Front => Fill::Green,
            Face::Down => Fill::Yellow,
            Face::Right => Fill::Red,
            Face::Back => Fill::Blue,
        }
    }

    /// Standard single-letter name (F, R, U, B, L, D).
    pub const fn letter(self) -> char {
        match self {
            Face::Left => 'L',
            Face::Upper => 'U',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Right => 'R',
            Face::Back => 'B',
        }
    }

    /// Grid cell at local (row, col) inside this face's block.
    #[inline]
    pub const fn cell(self, local_row: usize, local_col: usize) -> Cell {
        let origin = self.origin();
        Cell::new(origin.row + local_row, origin.col + local_col)
    }

    /// The nine cells of this face's block in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..FACE_SIZE).flat_map(move |local_row| {
            (0..FACE_SIZE).map(move |local_col| self.cell(local_row, local_col))
        })
    }

    /// Returns true if `cell` lies inside this face's block.
    pub const fn contains(self, cell: Cell) -> bool {
        let origin = self.origin();
        cell.row >= origin.row
            && cell.row < origin.row + FACE_SIZE
            && cell.col >= origin.col
            && cell.col < origin.col + FACE_SIZE
    }

    /// The face whose block covers `cell`, if any.
    pub fn at(cell: Cell) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.contains(cell))
    }
}

/// Four strips of three cells that move with a face turn, excluding the face itself.
pub type BoundaryStrips = [[Cell; FACE_SIZE]; 4];

/// The boundary strips touching each face.
///
/// Only the set of cells is configured here. Where each cell moves to is
/// derived from the 3D model in [`crate::lookup`].
pub const fn boundary_strips(face: Face) -> BoundaryStrips {
    const fn row(row: usize, first_col: usize) -> [Cell; FACE_SIZE] {
        [
            Cell::new(row, first_col),
            Cell::new(row, first_col + 1),
            Cell::new(row, first_col + 2),
        ]
    }
    const fn col(first_row: usize, col: usize) -> [Cell; FACE_SIZE] {
        [
            Cell::new(first_row, col),
            Cell::new(first_row + 1, col),
            Cell::new(first_row + 2, col),
        ]
    }

    match face {
        Face::Front => [row(2, 3), col(3, 6), row(6, 3), col(3, 2)],
        Face::Right => [col(0, 5), col(3, 9), col(6, 5), col(3, 5)],
        Face::Upper => [row(3, 9), row(3, 6), row(3, 3), row(3, 0)],
        Face::Back => [row(0, 3), col(3, 8), row(8, 3), col(3, 0)],
        Face::Left => [col(0, 3), col(3, 3), col(6, 3), col(3, 11)],
        Face::Down => [row(5, 3), row(5, 6), row(5, 9), row(5, 0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_blocks_are_disjoint_and_cover_54_cells() {
        let mut seen = [[false; COLS]; ROWS];
        let mut count = 0;
        for face in Face::ALL {
            for cell in face.cells() {
                assert!(cell.row < ROWS && cell.col < COLS, "{face:?} leaves the grid at {cell:?}");
                assert!(!seen[cell.row][cell.col], "{face:?} overlaps another face at {cell:?}");
                seen[cell.row][cell.col] = true;
                count += 1;
            }
        }
        assert_eq!(count, STICKER_COUNT);
    }

    #[test]
    fn test_face_at_finds_owner() {
        for face in Face::ALL {
            for cell in face.cells() {
                assert_eq!(Face::at(cell), Some(face));
            }
        }
        assert_eq!(Face::at(Cell::new(0, 0)), None);
        assert_eq!(Face::at(Cell::new(8, 11)), None);
    }

    #[test]
    fn test_boundary_strips_lie_outside_their_face() {
        for face in Face::ALL {
            for strip in boundary_strips(face) {
                for cell in strip {
                    let owner = Face::at(cell);
                    assert!(owner.is_some(), "strip cell {cell:?} of {face:?} is empty");
                    assert_ne!(owner, Some(face), "strip cell {cell:?} is inside {face:?}");
                }
            }
        }
    }

    #[test]
    fn test_fill_roundtrip() {
        for value in 0..=6u8 {
            let fill = Fill::from_u8(value).unwrap();
            assert_eq!(fill as u8, value);
        }
        assert_eq!(Fill::from_u8(7), None);
    }
}
