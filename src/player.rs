//! Step-by-step playback of a move sequence.
//!
//! The player owns a [`CubeGrid`] and a cursor into a fixed sequence of
//! quarter turns. Stepping forward applies the move under the cursor;
//! stepping backward applies the precomputed inverse of the move before it.

use thiserror::Error;
use tracing::{debug, info};

use crate::grid::CubeGrid;
use crate::notation::{self, Move, ParseError};

/// A step that ran into one end of the sequence.
///
/// These are boundaries rather than failures: the caller simply has no more
/// moves in that direction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    #[error("already at the start of the sequence")]
    AtStart,
    #[error("already at the end of the sequence")]
    AtEnd,
}

/// Replays a move sequence forward and backward on its own cube.
#[derive(Debug, Clone)]
pub struct MoveSequencePlayer {
    forward_moves: Vec<Move>,
    /// Inverse sequence: `inverse_moves[len - 1 - k]` undoes `forward_moves[k]`.
    inverse_moves: Vec<Move>,
    /// Number of forward moves currently applied to `grid`.
    cursor: usize,
    grid: CubeGrid,
}

impl MoveSequencePlayer {
    /// Creates a player over `moves` with a solved standard cube and the
    /// cursor at the start.
    pub fn new(moves: Vec<Move>) -> Self {
        let inverse_moves = notation::inverse(&moves);
        Self {
            forward_moves: moves,
            inverse_moves,
            cursor: 0,
            grid: CubeGrid::standard(),
        }
    }

    /// Parses `sequence` and creates a player over it.
    pub fn from_notation(sequence: &str) -> Result<Self, ParseError> {
        Ok(Self::new(notation::parse(sequence)?))
    }

    /// Loads `sequence` and scrambles the cube with its inverse.
    ///
    /// The grid is reset to solved, the cursor is placed at the end and every
    /// move is stepped back, leaving the cursor at 0 and the cube in the state
    /// that `sequence` solves. On a parse error nothing changes.
    pub fn load_and_apply_all(&mut self, sequence: &str) -> Result<(), ParseError> {
        let moves = notation::parse(sequence)?;
        info!(moves = moves.len(), "loading sequence");

        *self = Self::new(moves);
        self.cursor = self.forward_moves.len();
        while self.step_backward().is_ok() {}
        Ok(())
    }

    /// Applies the next forward move and returns it.
    pub fn step_forward(&mut self) -> Result<Move, PlayerError> {
        let mv = *self
            .forward_moves
            .get(self.cursor)
            .ok_or(PlayerError::AtEnd)?;
        self.grid.apply(mv);
        self.cursor += 1;
        debug!(cursor = self.cursor, %mv, "stepped forward");
        Ok(mv)
    }

    /// Undoes the most recent forward move and returns the move applied.
    pub fn step_backward(&mut self) -> Result<Move, PlayerError> {
        if self.cursor == 0 {
            return Err(PlayerError::AtStart);
        }
        self.cursor -= 1;
        let mv = self.inverse_moves[self.forward_moves.len() - 1 - self.cursor];
        debug_assert_eq!(mv, self.forward_moves[self.cursor].inverse());
        self.grid.apply(mv);
        debug!(cursor = self.cursor, %mv, "stepped backward");
        Ok(mv)
    }

    /// Steps one move at a time until the cursor reaches `target` (clamped to
    /// the sequence length). Returns the number of steps taken.
    pub fn seek(&mut self, target: usize) -> usize {
        let target = target.min(self.len());
        let mut steps = 0;
        while self.cursor < target && self.step_forward().is_ok() {
            steps += 1;
        }
        while self.cursor > target && self.step_backward().is_ok() {
            steps += 1;
        }
        steps
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of quarter turns in the sequence.
    pub fn len(&self) -> usize {
        self.forward_moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward_moves.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor == self.len()
    }

    /// The move [`Self::step_forward`] would apply.
    pub fn next_move(&self) -> Option<Move> {
        self.forward_moves.get(self.cursor).copied()
    }

    /// The forward move [`Self::step_backward`] would undo.
    pub fn previous_move(&self) -> Option<Move> {
        self.cursor
            .checked_sub(1)
            .map(|index| self.forward_moves[index])
    }

    pub fn forward_moves(&self) -> &[Move] {
        &self.forward_moves
    }

    pub fn inverse_moves(&self) -> &[Move] {
        &self.inverse_moves
    }

    pub fn grid(&self) -> &CubeGrid {
        &self.grid
    }
}
