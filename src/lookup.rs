//! Precomputed strip permutations for fast layer turns.
//!
//! For every face and direction, each of the twelve boundary strip cells is
//! rotated once through the 3D model and the strip slot it lands on is
//! recorded. A turn then becomes a 3x3 block rotation plus twelve table
//! lookups, with no geometry at move time.

use std::sync::LazyLock;

use log::debug;

use crate::geometry::{self, GeometryError, StickerMap};
use crate::grid::{self, rotate_face_block, Grid};
use crate::layout::{boundary_strips, BoundaryStrips, Cell, Face, FACE_SIZE};

/// Position of a cell within a face's boundary strips.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StripSlot {
    /// Which of the four strips (0..4).
    pub strip: u8,
    /// Index inside the strip (0..3).
    pub index: u8,
}

/// Strip permutation for one face turned in one direction.
#[derive(Clone, Copy, Debug, Default)]
pub struct EdgeTable {
    /// The configured strip cells.
    pub strips: BoundaryStrips,
    /// `targets[strip][index]` is where the value at `strips[strip][index]` goes.
    pub targets: [[StripSlot; FACE_SIZE]; 4],
}

impl EdgeTable {
    fn build(stickers: &StickerMap, face: Face, clockwise: bool) -> Result<Self, GeometryError> {
        Self::build_with(stickers, boundary_strips(face), face, clockwise)
    }

    /// Derives the permutation of `strips` under a turn of `face`.
    ///
    /// Every strip cell must hold a sticker, and the turn must carry each one
    /// onto another cell of `strips`.
    pub fn build_with(
        stickers: &StickerMap,
        strips: BoundaryStrips,
        face: Face,
        clockwise: bool,
    ) -> Result<Self, GeometryError> {
        let mut targets = [[StripSlot::default(); FACE_SIZE]; 4];

        for (strip, cells) in strips.iter().enumerate() {
            for (index, &origin) in cells.iter().enumerate() {
                let sticker = stickers
                    .sticker(origin)
                    .ok_or(GeometryError::EmptyStripCell(face, origin))?;
                let moved = geometry::rotate(sticker, face, clockwise);
                let target = stickers
                    .cell(moved)
                    .ok_or(GeometryError::LostSticker { face, origin })?;

                targets[strip][index] =
                    find_slot(&strips, target).ok_or(GeometryError::UnmappedTarget {
                        face,
                        clockwise,
                        origin,
                        target,
                    })?;
            }
        }

        Ok(Self { strips, targets })
    }

    /// Target cell for the strip cell at (`strip`, `index`).
    #[inline]
    pub fn target(&self, strip: usize, index: usize) -> Cell {
        let slot = self.targets[strip][index];
        self.strips[slot.strip as usize][slot.index as usize]
    }
}

/// Finds which strip slot holds `cell`.
fn find_slot(strips: &BoundaryStrips, cell: Cell) -> Option<StripSlot> {
    strips.iter().enumerate().find_map(|(strip, cells)| {
        cells.iter().position(|&c| c == cell).map(|index| StripSlot {
            strip: strip as u8,
            index: index as u8,
        })
    })
}

/// Edge tables for every face, indexed by `Face as usize` then direction.
pub struct LookupTables {
    /// `tables[face][0]` is counter-clockwise, `tables[face][1]` clockwise.
    tables: [[EdgeTable; 2]; 6],
}

impl LookupTables {
    /// Derives all twelve edge tables from the sticker model.
    ///
    /// Fails if any turn sends a strip cell outside the configured strips.
    pub fn build(stickers: &StickerMap) -> Result<Self, GeometryError> {
        let mut tables = [[EdgeTable::default(); 2]; 6];
        for face in Face::ALL {
            tables[face as usize] = [
                EdgeTable::build(stickers, face, false)?,
                EdgeTable::build(stickers, face, true)?,
            ];
        }

        debug!("built edge lookup tables for {} faces", tables.len());
        Ok(Self { tables })
    }

    /// The edge table for a face and direction.
    #[inline]
    pub fn table(&self, face: Face, clockwise: bool) -> &EdgeTable {
        &self.tables[face as usize][usize::from(clockwise)]
    }
}

static TABLES: LazyLock<LookupTables> = LazyLock::new(|| {
    LookupTables::build(geometry::stickers())
        .unwrap_or_else(|err| panic!("inconsistent edge lookup tables: {err}"))
});

/// The process-wide lookup tables.
pub fn tables() -> &'static LookupTables {
    &TABLES
}

/// Turns the outer layer of `face` using the precomputed tables.
///
/// Produces the same grid as [`crate::rotation::rotate_layer`].
pub fn rotate_layer_cached<T: Copy>(grid: &Grid<T>, face: Face, clockwise: bool) -> Grid<T> {
    rotate_layer_with(tables(), grid, face, clockwise)
}

/// Same as [`rotate_layer_cached`], using explicit tables.
pub fn rotate_layer_with<T: Copy>(
    tables: &LookupTables,
    grid: &Grid<T>,
    face: Face,
    clockwise: bool,
) -> Grid<T> {
    let mut rotated = *grid;
    rotate_face_block(grid, &mut rotated, face, clockwise);

    let table = tables.table(face, clockwise);
    for (strip, cells) in table.strips.iter().enumerate() {
        for (index, &origin) in cells.iter().enumerate() {
            grid::set(&mut rotated, table.target(strip, index), grid::get(grid, origin));
        }
    }

    rotated
}
