//! Rubik's Cube Net Library
//!
//! Simulates a 3x3 cube drawn as an unfolded net and turns its faces. Each
//! net cell is lifted to a 3D sticker identity, rotated about the turned
//! face's axis, and projected back, so no per-face 2D adjacency is hand-coded.

pub mod cube;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod lookup;
pub mod notation;
pub mod persistence;
pub mod rotation;

pub use cube::{Cube, Engine};
pub use grid::Grid;
pub use layout::{Cell, Face, Fill};
pub use notation::{Move, Turn};
