//! Standard face-turn notation.
//!
//! A sequence is a whitespace-separated list of tokens. Each token is one of
//! the six face letters, optionally followed by `'` (counter-clockwise) or
//! `2` (half turn). Half turns expand into two identical quarter-turn
//! [`Move`]s so that every intermediate state can be stepped through.

use std::fmt;

use thiserror::Error;

use crate::geometry::Axis;

/// A single quarter turn of one layer.
///
/// `clockwise` is as seen from the positive end of `axis` looking toward the
/// origin, which is not always the direction named by the face letter (see
/// [`Face::quarter_turn`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub axis: Axis,
    pub layer: usize,
    pub clockwise: bool,
}

impl Move {
    pub const fn new(axis: Axis, layer: usize, clockwise: bool) -> Self {
        Self {
            axis,
            layer,
            clockwise,
        }
    }

    /// The quarter turn that undoes this one.
    pub const fn inverse(self) -> Self {
        Self {
            clockwise: !self.clockwise,
            ..self
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Face::from_move_slot(self.axis, self.layer) {
            Some(face) => {
                write!(f, "{}", face.to_char())?;
                if self.clockwise != face.quarter_turn().clockwise {
                    f.write_str("'")?;
                }
                Ok(())
            }
            // inner slices have no face letter
            None => {
                write!(f, "{}{}", self.axis, self.layer)?;
                if !self.clockwise {
                    f.write_str("'")?;
                }
                Ok(())
            }
        }
    }
}

/// One of the six outer faces of the standard cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    R,
    L,
    U,
    D,
    F,
    B,
}

/// Face table: letter, axis, layer and the axis-relative direction of a
/// plain (clockwise-as-seen-from-the-face) turn.
///
/// Faces on the negative side of an axis look at the cube from the other end,
/// so their clockwise turn is counter-clockwise about the positive axis.
const FACES: [(Face, char, Axis, usize, bool); 6] = [
    (Face::R, 'R', Axis::X, 2, true),
    (Face::L, 'L', Axis::X, 0, false),
    (Face::U, 'U', Axis::Y, 2, true),
    (Face::D, 'D', Axis::Y, 0, false),
    (Face::F, 'F', Axis::Z, 2, true),
    (Face::B, 'B', Axis::Z, 0, false),
];

impl Face {
    /// All six faces in table order.
    pub const ALL: [Face; 6] = [Face::R, Face::L, Face::U, Face::D, Face::F, Face::B];

    fn entry(self) -> (Face, char, Axis, usize, bool) {
        FACES[self as usize]
    }

    pub fn from_char(letter: char) -> Option<Self> {
        FACES
            .iter()
            .find(|&&(_, c, ..)| c == letter)
            .map(|&(face, ..)| face)
    }

    pub fn to_char(self) -> char {
        self.entry().1
    }

    /// The clockwise quarter turn of this face.
    pub fn quarter_turn(self) -> Move {
        let (_, _, axis, layer, clockwise) = self.entry();
        Move::new(axis, layer, clockwise)
    }

    /// The face whose turns move the given slice, if it is an outer one.
    pub fn from_move_slot(axis: Axis, layer: usize) -> Option<Self> {
        FACES
            .iter()
            .find(|&&(_, _, a, l, _)| a == axis && l == layer)
            .map(|&(face, ..)| face)
    }
}

/// Error produced when parsing a move sequence.
///
/// `index` is the 0-based position of the offending token in the sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Token does not start with one of `F B U D L R`.
    #[error("unknown face in token {index} ({token:?})")]
    UnknownFace { token: String, index: usize },
    /// Face letter is followed by something other than a single `'` or `2`.
    #[error("invalid modifier in token {index} ({token:?})")]
    InvalidModifier { token: String, index: usize },
    /// Sequence contains no tokens.
    #[error("move sequence is empty")]
    EmptySequence,
}

/// Parses a move sequence into quarter-turn moves.
///
/// Either the whole sequence parses or an error is returned; there is no
/// partial result.
pub fn parse(sequence: &str) -> Result<Vec<Move>, ParseError> {
    let mut moves = Vec::new();

    for (index, token) in sequence.split_whitespace().enumerate() {
        let mut chars = token.chars();
        let face = chars
            .next()
            .and_then(Face::from_char)
            .ok_or_else(|| ParseError::UnknownFace {
                token: token.to_owned(),
                index,
            })?;
        let turn = face.quarter_turn();

        let invalid = || ParseError::InvalidModifier {
            token: token.to_owned(),
            index,
        };
        let modifier = chars.next();
        if chars.next().is_some() {
            return Err(invalid());
        }

        match modifier {
            None => moves.push(turn),
            Some('\'') => moves.push(turn.inverse()),
            Some('2') => moves.extend([turn, turn]),
            Some(_) => return Err(invalid()),
        }
    }

    if moves.is_empty() {
        return Err(ParseError::EmptySequence);
    }
    Ok(moves)
}

/// Computes the sequence that undoes `moves`: reversed order, each move
/// flipped.
pub fn inverse(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

/// Formats moves back into notation, one quarter turn per token.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|mv| mv.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
