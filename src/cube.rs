//! Cube state: one net grid plus the engine used to turn it.

use log::trace;

use crate::grid::{self, solved_grid, Grid};
use crate::layout::Face;
use crate::lookup::rotate_layer_cached;
use crate::notation::Move;
use crate::rotation::rotate_layer;

/// Which implementation computes layer turns.
///
/// Both produce identical grids; `Lookup` replays precomputed tables while
/// `Geometric` rotates every sticker through the 3D model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Engine {
    Geometric,
    #[default]
    Lookup,
}

impl Engine {
    /// Turns one layer of `grid` and returns the result.
    #[inline]
    pub fn rotate<T: Copy>(self, grid: &Grid<T>, face: Face, clockwise: bool) -> Grid<T> {
        match self {
            Engine::Geometric => rotate_layer(grid, face, clockwise),
            Engine::Lookup => rotate_layer_cached(grid, face, clockwise),
        }
    }
}

/// A 3x3 cube drawn as an unfolded net.
///
/// Not internally synchronized: callers sharing one cube must serialize turns.
#[derive(Clone, Debug)]
pub struct Cube {
    grid: Grid,
    engine: Engine,
}

impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}

impl Cube {
    /// A solved cube using the lookup engine.
    pub fn new() -> Self {
        Self::with_engine(Engine::default())
    }

    /// A solved cube using the given engine.
    pub fn with_engine(engine: Engine) -> Self {
        Self::from_grid(solved_grid(), engine)
    }

    /// A cube resumed from an existing grid.
    pub fn from_grid(grid: Grid, engine: Engine) -> Self {
        Self { grid, engine }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    /// Turns `face` a quarter turn and returns the new grid.
    pub fn rotate(&mut self, face: Face, clockwise: bool) -> &Grid {
        trace!("turning {face:?} clockwise={clockwise} with {:?}", self.engine);
        self.grid = self.engine.rotate(&self.grid, face, clockwise);
        &self.grid
    }

    pub fn rotate_front(&mut self, clockwise: bool) -> &Grid {
        self.rotate(Face::Front, clockwise)
    }

    pub fn rotate_right(&mut self, clockwise: bool) -> &Grid {
        self.rotate(Face::Right, clockwise)
    }

    pub fn rotate_upper(&mut self, clockwise: bool) -> &Grid {
        self.rotate(Face::Upper, clockwise)
    }

    pub fn rotate_back(&mut self, clockwise: bool) -> &Grid {
        self.rotate(Face::Back, clockwise)
    }

    pub fn rotate_left(&mut self, clockwise: bool) -> &Grid {
        self.rotate(Face::Left, clockwise)
    }

    pub fn rotate_down(&mut self, clockwise: bool) -> &Grid {
        self.rotate(Face::Down, clockwise)
    }

    /// Applies one move from notation.
    pub fn apply(&mut self, mv: Move) -> &Grid {
        for &clockwise in mv.turn.quarter_turns() {
            self.rotate(mv.face, clockwise);
        }
        &self.grid
    }

    /// Applies a sequence of moves in order.
    pub fn apply_all(&mut self, moves: &[Move]) -> &Grid {
        for &mv in moves {
            self.apply(mv);
        }
        &self.grid
    }

    /// Restores the solved grid.
    pub fn reset(&mut self) -> &Grid {
        self.grid = solved_grid();
        &self.grid
    }

    /// Returns true if every face shows a single color.
    pub fn is_solved(&self) -> bool {
        grid::is_solved(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::{invert, parse_moves};

    const ENGINES: [Engine; 2] = [Engine::Geometric, Engine::Lookup];

    #[test]
    fn test_new_cube_is_solved() {
        let cube = Cube::new();
        assert!(cube.is_solved());
        assert_eq!(cube.grid(), &solved_grid());
    }

    #[test]
    fn test_every_named_rotation_changes_the_grid() {
        let turns: [fn(&mut Cube, bool) -> &Grid; 6] = [
            Cube::rotate_front,
            Cube::rotate_right,
            Cube::rotate_upper,
            Cube::rotate_back,
            Cube::rotate_left,
            Cube::rotate_down,
        ];
        for turn in turns {
            for clockwise in [true, false] {
                let mut cube = Cube::new();
                assert_ne!(turn(&mut cube, clockwise), &solved_grid());
                assert!(!cube.is_solved());
            }
        }
    }

    #[test]
    fn test_scramble_then_inverse_restores() {
        for engine in ENGINES {
            let mut cube = Cube::with_engine(engine);
            cube.rotate_front(true);
            cube.rotate_right(false);
            cube.rotate_upper(true);
            cube.rotate_back(false);
            cube.rotate_left(true);
            cube.rotate_down(false);
            assert!(!cube.is_solved());

            cube.rotate_down(true);
            cube.rotate_left(false);
            cube.rotate_back(true);
            cube.rotate_upper(false);
            cube.rotate_right(true);
            cube.rotate_front(false);
            assert_eq!(cube.grid(), &solved_grid(), "{engine:?}");
        }
    }

    #[test]
    fn test_each_face_four_times_restores() {
        for engine in ENGINES {
            let mut cube = Cube::with_engine(engine);
            for face in [Face::Front, Face::Right, Face::Upper, Face::Back, Face::Left, Face::Down] {
                for _ in 0..4 {
                    cube.rotate(face, true);
                }
            }
            assert_eq!(cube.grid(), &solved_grid(), "{engine:?}");
        }
    }

    #[test]
    fn test_notation_sequence_and_inverse() {
        let moves = parse_moves("F R' U2 B' L D' F2 R").unwrap();
        for engine in ENGINES {
            let mut cube = Cube::with_engine(engine);
            cube.apply_all(&moves);
            assert!(!cube.is_solved());
            cube.apply_all(&invert(&moves));
            assert!(cube.is_solved(), "{engine:?}");
        }
    }

    #[test]
    fn test_engines_agree_on_long_sequence() {
        let moves = parse_moves("R U R' U' F2 D B' L2 U D' R2 F B L'").unwrap();
        let mut geometric = Cube::with_engine(Engine::Geometric);
        let mut lookup = Cube::with_engine(Engine::Lookup);
        for mv in moves {
            assert_eq!(geometric.apply(mv), lookup.apply(mv), "after {mv}");
        }
    }

    #[test]
    fn test_sexy_move_has_order_six() {
        let moves = parse_moves("R U R' U'").unwrap();
        let mut cube = Cube::new();
        for _ in 0..6 {
            cube.apply_all(&moves);
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn test_reset_restores_solved() {
        let mut cube = Cube::new();
        cube.apply_all(&parse_moves("F R U").unwrap());
        assert!(!cube.is_solved());
        assert_eq!(cube.reset(), &solved_grid());
    }

    #[test]
    fn test_from_grid_keeps_state() {
        let mut scrambled = Cube::new();
        scrambled.rotate_front(true);
        let resumed = Cube::from_grid(*scrambled.grid(), Engine::Geometric);
        assert_eq!(resumed.grid(), scrambled.grid());
        assert_eq!(resumed.engine(), Engine::Geometric);
    }
}
