//! Rubik's Cube Move Engine
//!
//! Provides the logical cube state and the machinery to drive it: a grid of
//! sub-cubes with per-axis layer rotation, standard face-turn notation, and a
//! player that steps forward and backward through a move sequence.

pub mod facelets;
pub mod geometry;
pub mod grid;
pub mod notation;
pub mod player;

pub use geometry::{Axis, Orientation};
pub use grid::{Cell, CubeGrid};
pub use notation::{parse, Face, Move, ParseError};
pub use player::{MoveSequencePlayer, PlayerError};
