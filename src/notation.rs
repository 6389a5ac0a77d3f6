//! Face-turn notation: `F`, `R'`, `U2` and sequences of them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::layout::Face;

/// How far a face is turned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Half,
}

impl Turn {
    /// The turn that undoes this one.
    pub const fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Half => Turn::Half,
        }
    }

    /// The quarter turns this turn is made of, as clockwise flags.
    pub const fn quarter_turns(self) -> &'static [bool] {
        match self {
            Turn::Clockwise => &[true],
            Turn::CounterClockwise => &[false],
            Turn::Half => &[true, true],
        }
    }
}

/// A single face turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// A quarter turn in the given direction.
    pub const fn quarter(face: Face, clockwise: bool) -> Self {
        let turn = if clockwise {
            Turn::Clockwise
        } else {
            Turn::CounterClockwise
        };
        Self { face, turn }
    }

    pub const fn inverse(self) -> Self {
        Self {
            face: self.face,
            turn: self.turn.inverse(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotationError {
    #[error("No moves given")]
    Empty,
    #[error("Unknown face {0:?}, expected one of L U F D R B")]
    UnknownFace(String),
    #[error("Unknown modifier in {0:?}, expected nothing, ' or 2")]
    UnknownSuffix(String),
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let face = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('L') => Face::Left,
            Some('U') => Face::Upper,
            Some('F') => Face::Front,
            Some('D') => Face::Down,
            Some('R') => Face::Right,
            Some('B') => Face::Back,
            Some(_) => return Err(NotationError::UnknownFace(token.to_string())),
            None => return Err(NotationError::Empty),
        };
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" | "\u{2019}" => Turn::CounterClockwise,
            "2" => Turn::Half,
            _ => return Err(NotationError::UnknownSuffix(token.to_string())),
        };
        Ok(Move { face, turn })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let suffix = match self.turn {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Half => "2",
        };
        write!(f, "{}{}", self.face.letter(), suffix)
    }
}

/// Parses a whitespace separated move sequence such as `"F R' U2"`.
pub fn parse_moves(input: &str) -> Result<Vec<Move>, NotationError> {
    let moves = input
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<Move>, _>>()?;
    if moves.is_empty() {
        return Err(NotationError::Empty);
    }
    Ok(moves)
}

/// The sequence that undoes `moves`: each move inverted, in reverse order.
pub fn invert(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}

/// Formats a sequence back into notation.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_moves() {
        assert_eq!("F".parse::<Move>(), Ok(Move::new(Face::Front, Turn::Clockwise)));
        assert_eq!("r'".parse::<Move>(), Ok(Move::new(Face::Right, Turn::CounterClockwise)));
        assert_eq!("U2".parse::<Move>(), Ok(Move::new(Face::Upper, Turn::Half)));
        assert_eq!("b".parse::<Move>(), Ok(Move::new(Face::Back, Turn::Clockwise)));
    }

    #[test]
    fn test_parse_sequence() {
        let moves = parse_moves("  F R'\tU2 B' L D'  ").unwrap();
        assert_eq!(moves.len(), 6);
        assert_eq!(format_moves(&moves), "F R' U2 B' L D'");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("X".parse::<Move>(), Err(NotationError::UnknownFace("X".to_string())));
        assert_eq!("F3".parse::<Move>(), Err(NotationError::UnknownSuffix("F3".to_string())));
        assert_eq!(parse_moves("   "), Err(NotationError::Empty));
        assert!(parse_moves("F Q").is_err());
    }

    #[test]
    fn test_invert_reverses_and_flips() {
        let moves = parse_moves("F R' U2").unwrap();
        assert_eq!(format_moves(&invert(&moves)), "U2 R F'");
    }

    #[test]
    fn test_quarter_turns() {
        assert_eq!(Turn::Half.quarter_turns(), &[true, true]);
        assert_eq!(Move::quarter(Face::Down, false).turn, Turn::CounterClockwise);
    }
}
