//! Sticker colours seen on the outside of the cube.
//!
//! Cells carry no colour of their own. A sticker's colour is found by rotating
//! the outward direction back into the cell's home frame and looking up which
//! face of the solved cube points that way.

use std::fmt;

use crate::geometry::Coord;
use crate::grid::CubeGrid;
use crate::notation::Face;

/// Sticker colour of a solved cube face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    White,
    Red,
    Green,
    Orange,
    Blue,
    Yellow,
}

impl Colour {
    pub fn letter(self) -> char {
        match self {
            Colour::White => 'W',
            Colour::Red => 'R',
            Colour::Green => 'G',
            Colour::Orange => 'O',
            Colour::Blue => 'B',
            Colour::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Outward unit normal of a face.
pub fn face_normal(face: Face) -> Coord {
    match face {
        Face::R => (1, 0, 0),
        Face::L => (-1, 0, 0),
        Face::U => (0, 1, 0),
        Face::D => (0, -1, 0),
        Face::F => (0, 0, 1),
        Face::B => (0, 0, -1),
    }
}

/// Colour of the face that points along `direction` on a solved cube.
pub fn home_colour(direction: Coord) -> Colour {
    match direction {
        (0, 0, 1) => Colour::White,
        (1, 0, 0) => Colour::Red,
        (0, 0, -1) => Colour::Green,
        (-1, 0, 0) => Colour::Orange,
        (0, 1, 0) => Colour::Blue,
        (0, -1, 0) => Colour::Yellow,
        _ => unreachable!("{direction:?} is not an axis direction"),
    }
}

/// Grid coordinate of the sticker at `(row, col)` on `face`.
///
/// Rows and columns follow the usual cube-net layout: F, R, B and L are seen
/// head-on with U above them, U is seen from above with F at the bottom and
/// D from below with F at the top.
fn sticker_coord(n: usize, face: Face, row: usize, col: usize) -> (usize, usize, usize) {
    let last = n - 1;
    match face {
        Face::U => (col, last, row),
        Face::D => (col, 0, last - row),
        Face::F => (col, last - row, last),
        Face::B => (last - col, last - row, 0),
        Face::R => (last, last - row, last - col),
        Face::L => (0, last - row, col),
    }
}

/// Returns the n×n sticker colours of one face, row by row.
pub fn face_stickers(grid: &CubeGrid, face: Face) -> Vec<Vec<Colour>> {
    let n = grid.size();
    let normal = face_normal(face);
    (0..n)
        .map(|row| {
            (0..n)
                .map(|col| {
                    let (x, y, z) = sticker_coord(n, face, row, col);
                    let cell = grid.cell_at(x, y, z);
                    home_colour(cell.orientation.transpose().apply(normal))
                })
                .collect()
        })
        .collect()
}

/// Returns true if every face shows a single colour.
pub fn faces_uniform(grid: &CubeGrid) -> bool {
    Face::ALL.iter().all(|&face| {
        let stickers = face_stickers(grid, face);
        let first = stickers[0][0];
        stickers.iter().flatten().all(|&colour| colour == first)
    })
}

/// Renders the cube as an unfolded net of colour letters.
///
/// ```text
///     U
///   L F R B
///     D
/// ```
pub fn format_net(grid: &CubeGrid) -> String {
    let n = grid.size();
    let row_text = |face: Face, row: usize| -> String {
        face_stickers(grid, face)[row]
            .iter()
            .map(|colour| colour.letter())
            .collect()
    };
    let indent = " ".repeat(n + 1);

    let mut output = String::new();
    for row in 0..n {
        output.push_str(&indent);
        output.push_str(&row_text(Face::U, row));
        output.push('\n');
    }
    for row in 0..n {
        let belt: Vec<String> = [Face::L, Face::F, Face::R, Face::B]
            .iter()
            .map(|&face| row_text(face, row))
            .collect();
        output.push_str(&belt.join(" "));
        output.push('\n');
    }
    for row in 0..n {
        output.push_str(&indent);
        output.push_str(&row_text(Face::D, row));
        output.push('\n');
    }
    output
}
