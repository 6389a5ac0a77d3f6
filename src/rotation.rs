//! Layer rotation computed directly from the 3D sticker model.
//!
//! Every occupied cell is lifted to its sticker, the stickers in the moving
//! layer are rotated about the face axis, and each value is written to the
//! cell its rotated sticker maps back to. Reads come only from the input grid
//! and writes go only to a fresh copy, so no cell is read after being
//! overwritten.

use crate::geometry::{self, in_moving_layer, StickerMap};
use crate::grid::{self, occupied_cells, Grid};
use crate::layout::Face;

/// Turns the outer layer of `face` a quarter turn and returns the new grid.
///
/// The input is left untouched. Only the 21 cells of the moving layer can
/// differ between input and output.
pub fn rotate_layer<T: Copy>(grid: &Grid<T>, face: Face, clockwise: bool) -> Grid<T> {
    rotate_layer_with(geometry::stickers(), grid, face, clockwise)
}

/// Same as [`rotate_layer`], using an explicit sticker map.
pub fn rotate_layer_with<T: Copy>(
    stickers: &StickerMap,
    grid: &Grid<T>,
    face: Face,
    clockwise: bool,
) -> Grid<T> {
    let mut rotated = *grid;

    for source_cell in occupied_cells() {
        let Some(sticker) = stickers.sticker(source_cell) else {
            continue;
        };
        if !in_moving_layer(sticker, face) {
            continue;
        }

        let moved = geometry::rotate(sticker, face, clockwise);
        let target_cell = stickers
            .cell(moved)
            .expect("a layer turn maps every sticker onto another sticker");
        grid::set(&mut rotated, target_cell, grid::get(grid, source_cell));
    }

    rotated
}
