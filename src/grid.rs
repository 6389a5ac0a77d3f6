//! Grid representation and helpers for the unfolded cube net.
//!
//! A grid is a fixed `ROWS x COLS` array. Cells covered by a face hold a
//! sticker value; all other cells hold the empty value and never change.

use crate::layout::{Cell, Face, Fill, COLS, FACE_SIZE, ROWS};

/// The unfolded net, generic over what each cell stores.
///
/// Production code stores [`Fill`] colors. Tests use unique labels so that
/// permutations can be told apart.
pub type Grid<T = Fill> = [[T; COLS]; ROWS];

/// Builds the solved grid: each face block filled with its color.
pub fn solved_grid() -> Grid {
    let mut grid = [[Fill::None; COLS]; ROWS];
    for face in Face::ALL {
        for cell in face.cells() {
            grid[cell.row][cell.col] = face.color();
        }
    }
    grid
}

/// Builds a grid where every occupied cell carries a distinct nonzero label.
///
/// The label of a cell is `row * COLS + col + 1`; empty cells hold 0.
pub fn labelled_grid() -> Grid<u16> {
    let mut grid = [[0u16; COLS]; ROWS];
    for cell in occupied_cells() {
        grid[cell.row][cell.col] = (cell.row * COLS + cell.col + 1) as u16;
    }
    grid
}

/// All 54 occupied cells, face by face in row-major order.
pub fn occupied_cells() -> impl Iterator<Item = Cell> {
    Face::ALL.into_iter().flat_map(Face::cells)
}

/// Reads a cell.
#[inline(always)]
pub fn get<T: Copy>(grid: &Grid<T>, cell: Cell) -> T {
    grid[cell.row][cell.col]
}

/// Writes a cell.
#[inline(always)]
pub fn set<T>(grid: &mut Grid<T>, cell: Cell, value: T) {
    grid[cell.row][cell.col] = value;
}

/// Writes the 3x3 block of `face` into `target`, rotated from `source`.
///
/// Clockwise is transpose then reverse each row; counter-clockwise is the
/// reverse. Faces are drawn as seen from outside, so this matches the 3D turn.
pub fn rotate_face_block<T: Copy>(
    source: &Grid<T>,
    target: &mut Grid<T>,
    face: Face,
    clockwise: bool,
) {
    const LAST: usize = FACE_SIZE - 1;
    for row in 0..FACE_SIZE {
        for col in 0..FACE_SIZE {
            let from = if clockwise {
                face.cell(LAST - col, row)
            } else {
                face.cell(col, LAST - row)
            };
            set(target, face.cell(row, col), get(source, from));
        }
    }
}

/// Returns true if every face block holds a single color.
pub fn is_solved(grid: &Grid) -> bool {
    Face::ALL.into_iter().all(|face| {
        let center = get(grid, face.cell(1, 1));
        center != Fill::None && face.cells().all(|cell| get(grid, cell) == center)
    })
}

/// Converts a grid to the integer matrix sent to a client renderer.
///
/// Each cell becomes its [`Fill`] discriminant, so 0 means empty.
pub fn to_int_rows(grid: &Grid) -> Vec<Vec<u8>> {
    grid.iter()
        .map(|row| row.iter().map(|&fill| fill as u8).collect())
        .collect()
}

/// Formats a grid as text, one line per row.
///
/// Empty cells show as '.', stickers as the initial of their color.
pub fn format_grid(grid: &Grid) -> String {
    let mut output = String::with_capacity(ROWS * (COLS + 1));
    for row in grid {
        output.extend(row.iter().map(|fill| fill.symbol()));
        output.push('\n');
    }
    output
}

/// Formats a grid as a JavaScript array literal of fill integers.
pub fn format_js(grid: &Grid) -> String {
    let rows: Vec<String> = to_int_rows(grid)
        .iter()
        .map(|row| {
            let values: Vec<String> = row.iter().map(u8::to_string).collect();
            format!("  [{}]", values.join(", "))
        })
        .collect();
    format!("const MATRIX = [\n{}\n];\n", rows.join(",\n"))
}
