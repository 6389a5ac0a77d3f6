//! File I/O for saving and resuming a cube between runs.
//!
//! Binary format for `cube.bin` (little endian):
//! - u32: row count
//! - u32: column count
//! - repeat per cell, row-major: 1 byte fill value (0 = empty)
//!
//! `cube.txt` holds the same grid rendered by [`format_grid`] for reading.

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::grid::{format_grid, Grid};
use crate::layout::{Fill, COLS, ROWS};

const CUBE_BIN: &str = "cube.bin";
const CUBE_TXT: &str = "cube.txt";

/// Saves the grid to both binary and text files in `dir`.
pub fn save(dir: &Path, grid: &Grid) -> std::io::Result<()> {
    save_text(dir, grid)?;
    save_binary(dir, grid)?;
    Ok(())
}

/// Saves the grid in human-readable text format.
fn save_text(dir: &Path, grid: &Grid) -> std::io::Result<()> {
    let mut file = File::create(dir.join(CUBE_TXT))?;
    write!(file, "{}", format_grid(grid))?;
    Ok(())
}

/// Saves the grid in compact binary format for resuming.
fn save_binary(dir: &Path, grid: &Grid) -> std::io::Result<()> {
    let mut file = File::create(saved_path(dir))?;

    file.write_all(&(ROWS as u32).to_le_bytes())?;
    file.write_all(&(COLS as u32).to_le_bytes())?;
    for row in grid {
        let bytes: Vec<u8> = row.iter().map(|&fill| fill as u8).collect();
        file.write_all(&bytes)?;
    }

    Ok(())
}

/// Path of the binary save file in `dir`.
pub fn saved_path(dir: &Path) -> PathBuf {
    dir.join(CUBE_BIN)
}

/// Loads the grid saved in `dir`.
///
/// Returns `None` if there is no saved cube, the dimensions do not match this
/// net, or any cell holds an unknown fill value.
pub fn load(dir: &Path) -> Option<Grid> {
    let mut file = File::open(saved_path(dir)).ok()?;
    let mut u32_buffer = [0u8; 4];

    file.read_exact(&mut u32_buffer).ok()?;
    let rows = u32::from_le_bytes(u32_buffer) as usize;
    file.read_exact(&mut u32_buffer).ok()?;
    let cols = u32::from_le_bytes(u32_buffer) as usize;
    if rows != ROWS || cols != COLS {
        return None;
    }

    let mut grid = [[Fill::None; COLS]; ROWS];
    let mut row_buffer = [0u8; COLS];
    for row in grid.iter_mut() {
        file.read_exact(&mut row_buffer).ok()?;
        for (cell, &byte) in row.iter_mut().zip(&row_buffer) {
            *cell = Fill::from_u8(byte)?;
        }
    }

    Some(grid)
}

/// Removes any saved cube from `dir`.
pub fn clear(dir: &Path) -> std::io::Result<()> {
    for name in [CUBE_BIN, CUBE_TXT] {
        match std::fs::remove_file(dir.join(name)) {
            Err(err) if err.kind() != std::io::ErrorKind::NotFound => return Err(err),
            _ => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Cube;
    use crate::notation::parse_moves;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("cubenet-{}-{}", name, std::process::id()));
        // a panicking run can leave its directory behind
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch_dir("save");
        let mut cube = Cube::new();
        cube.apply_all(&parse_moves("F R' U2 D").unwrap());

        save(&dir, cube.grid()).unwrap();
        assert_eq!(load(&dir), Some(*cube.grid()));

        let text = std::fs::read_to_string(dir.join(CUBE_TXT)).unwrap();
        assert_eq!(text, format_grid(cube.grid()));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = scratch_dir("missing");
        assert_eq!(load(&dir), None);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_rejects_bad_data() {
        let dir = scratch_dir("bad");

        let mut wrong_size = Vec::new();
        wrong_size.extend_from_slice(&3u32.to_le_bytes());
        wrong_size.extend_from_slice(&3u32.to_le_bytes());
        wrong_size.extend_from_slice(&[1; 9]);
        std::fs::write(dir.join(CUBE_BIN), &wrong_size).unwrap();
        assert_eq!(load(&dir), None);

        let mut bad_fill = Vec::new();
        bad_fill.extend_from_slice(&(ROWS as u32).to_le_bytes());
        bad_fill.extend_from_slice(&(COLS as u32).to_le_bytes());
        bad_fill.extend_from_slice(&[9; ROWS * COLS]);
        std::fs::write(dir.join(CUBE_BIN), &bad_fill).unwrap();
        assert_eq!(load(&dir), None);

        let mut truncated = Vec::new();
        truncated.extend_from_slice(&(ROWS as u32).to_le_bytes());
        truncated.extend_from_slice(&(COLS as u32).to_le_bytes());
        truncated.extend_from_slice(&[0; COLS]);
        std::fs::write(dir.join(CUBE_BIN), &truncated).unwrap();
        assert_eq!(load(&dir), None);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_scratch_dir_starts_empty() {
        let dir = scratch_dir("stale");
        save(&dir, Cube::new().grid()).unwrap();
        let dir = scratch_dir("stale");
        assert_eq!(load(&dir), None);
        assert!(!saved_path(&dir).exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_clear_removes_saved_cube() {
        let dir = scratch_dir("clear");
        save(&dir, Cube::new().grid()).unwrap();
        clear(&dir).unwrap();
        assert_eq!(load(&dir), None);
        // clearing twice is fine
        clear(&dir).unwrap();
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
