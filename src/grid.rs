//! Grid representation and layer rotation for an n×n×n cube.
//!
//! The grid is stored as a flat x-major array of cells. A cell's slot is its
//! logical position; its orientation records how the sub-cube has been turned
//! since the grid was built. Layer turns permute slots and rotate
//! orientations together, so the two never disagree.

use std::fmt::Write;

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::geometry::{rotate_slice_coord, Axis, Coord, Orientation};
use crate::notation::Move;

/// Edge length of the standard cube.
pub const STANDARD_SIZE: usize = 3;

/// Converts (x, y, z) coordinates to a linear cell index.
///
/// Index order is x-major: `idx = x * n * n + y * n + z`.
#[inline(always)]
pub const fn coord_to_idx(n: usize, x: usize, y: usize, z: usize) -> usize {
    x * n * n + y * n + z
}

/// Converts a linear cell index to (x, y, z) coordinates.
#[inline(always)]
pub const fn idx_to_coord(n: usize, cell_index: usize) -> (usize, usize, usize) {
    (cell_index / (n * n), (cell_index / n) % n, cell_index % n)
}

/// Offset of a grid coordinate from the cube centre, doubled so that even
/// sizes stay on integers.
#[inline]
pub fn centred_offset(n: usize, (x, y, z): (usize, usize, usize)) -> Coord {
    let centre = n as i32 - 1;
    (
        2 * x as i32 - centre,
        2 * y as i32 - centre,
        2 * z as i32 - centre,
    )
}

/// A single sub-cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Home slot index of this cell; for debugging only.
    pub id: usize,
    /// Rotation applied to this cell since the grid was built.
    pub orientation: Orientation,
}

/// An n×n×n arrangement of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeGrid {
    size: usize,
    cells: Vec<Cell>,
}

impl CubeGrid {
    /// Creates a solved grid with edge length `size`.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        let cells = (0..size * size * size)
            .map(|id| Cell {
                id,
                orientation: Orientation::IDENTITY,
            })
            .collect();
        Self { size, cells }
    }

    /// Creates a solved 3×3×3 grid.
    pub fn standard() -> Self {
        Self::new(STANDARD_SIZE)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns a copy of the cell currently at `(x, y, z)`.
    pub fn cell_at(&self, x: usize, y: usize, z: usize) -> Cell {
        let n = self.size;
        assert!(x < n && y < n && z < n, "({x}, {y}, {z}) is outside a {n}x{n}x{n} grid");
        self.cells[coord_to_idx(n, x, y, z)]
    }

    /// Iterates over every slot together with the cell occupying it.
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize, usize), &Cell)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, cell)| (idx_to_coord(n, idx), cell))
    }

    /// Finds the current position of the cell with the given id.
    pub fn position_of(&self, id: usize) -> Option<(usize, usize, usize)> {
        self.cells
            .iter()
            .position(|cell| cell.id == id)
            .map(|idx| idx_to_coord(self.size, idx))
    }

    /// Returns true if every cell is home and unrotated.
    pub fn is_solved(&self) -> bool {
        self.cells
            .iter()
            .enumerate()
            .all(|(idx, cell)| cell.id == idx && cell.orientation.is_identity())
    }

    /// Returns true if every cell id appears in exactly one slot.
    pub fn is_bijection(&self) -> bool {
        let total = self.cells.len();
        let mut seen: FxHashSet<usize> = FxHashSet::default();
        self.cells
            .iter()
            .all(|cell| cell.id < total && seen.insert(cell.id))
            && seen.len() == total
    }

    /// Applies a single quarter-turn move.
    pub fn apply(&mut self, mv: Move) {
        self.rotate_layer(mv.axis, mv.layer, mv.clockwise);
    }

    /// Turns the slice perpendicular to `axis` at index `layer` by a quarter
    /// turn.
    ///
    /// Clockwise is as seen from the positive end of `axis`. The new
    /// arrangement is computed from a snapshot of the old one and swapped in.
    ///
    /// # Panics
    ///
    /// Panics if `layer` is not below the grid size.
    pub fn rotate_layer(&mut self, axis: Axis, layer: usize, clockwise: bool) {
        let n = self.size;
        assert!(layer < n, "layer {layer} out of range for a grid of size {n}");
        trace!(%axis, layer, clockwise, "rotating layer");

        let turn = Orientation::quarter_turn(axis, clockwise);
        let (u, v) = axis.plane();
        let a = axis.index();

        let snapshot = &self.cells;
        let mut next = snapshot.clone();
        for i in 0..n {
            for j in 0..n {
                let mut source = [0usize; 3];
                source[a] = layer;
                source[u] = i;
                source[v] = j;

                let (ni, nj) = rotate_slice_coord(i, j, n, clockwise);
                let mut dest = source;
                dest[u] = ni;
                dest[v] = nj;

                let moved = snapshot[coord_to_idx(n, source[0], source[1], source[2])];
                next[coord_to_idx(n, dest[0], dest[1], dest[2])] = Cell {
                    id: moved.id,
                    orientation: turn * moved.orientation,
                };
            }
        }
        self.cells = next;
    }
}

impl Default for CubeGrid {
    fn default() -> Self {
        Self::standard()
    }
}

/// Formats the grid as cell ids, one z-slice per column block.
///
/// Rows go from the top layer (y = n-1) down; within a row x grows to the
/// right. Useful for eyeballing a permutation.
pub fn format_grid(grid: &CubeGrid) -> String {
    let n = grid.size();
    let id_width = (n * n * n - 1).to_string().len();
    let slice_width = n * (id_width + 1) - 1;

    // header: z=0, z=1, ..., z=n-1
    let mut output = String::new();
    for z in 0..n {
        if z > 0 {
            output.push_str("  ");
        }
        let label = format!("z={z}");
        if z + 1 < n {
            let _ = write!(output, "{label:<slice_width$}");
        } else {
            output.push_str(&label);
        }
    }
    output.push('\n');

    for y in (0..n).rev() {
        for z in 0..n {
            if z > 0 {
                output.push_str("  ");
            }
            for x in 0..n {
                if x > 0 {
                    output.push(' ');
                }
                let id = grid.cell_at(x, y, z).id;
                let _ = write!(output, "{id:>id_width$}");
            }
        }
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every cell's orientation must carry its home offset onto its current
    /// offset.
    fn assert_orientation_tracks_position(grid: &CubeGrid) {
        let n = grid.size();
        for (coord, cell) in grid.cells() {
            let home = centred_offset(n, idx_to_coord(n, cell.id));
            assert_eq!(
                cell.orientation.apply(home),
                centred_offset(n, coord),
                "cell {} at {coord:?} disagrees with its orientation",
                cell.id
            );
        }
    }

    #[test]
    fn test_new_grid_is_solved() {
        for n in 1..=4 {
            let grid = CubeGrid::new(n);
            assert!(grid.is_solved());
            assert!(grid.is_bijection());
            assert_eq!(grid.cells().count(), n * n * n);
        }
    }

    #[test]
    fn test_coordinate_conversion_roundtrip() {
        for n in [3, 4] {
            for idx in 0..n * n * n {
                let (x, y, z) = idx_to_coord(n, idx);
                assert!(x < n && y < n && z < n);
                assert_eq!(coord_to_idx(n, x, y, z), idx, "roundtrip failed for index {idx}");
            }
        }
    }

    #[test]
    fn test_four_turns_restore_grid() {
        for n in [2, 3, 4] {
            for axis in Axis::ALL {
                for layer in 0..n {
                    for clockwise in [true, false] {
                        let mut grid = CubeGrid::new(n);
                        for turn in 0..4 {
                            grid.rotate_layer(axis, layer, clockwise);
                            assert_eq!(grid.is_solved(), turn == 3);
                        }
                        assert!(grid.is_solved(), "n={n} {axis} layer {layer} cw={clockwise}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_rotation_preserves_bijection_and_orientation() {
        let mut grid = CubeGrid::standard();
        for (step, axis) in Axis::ALL.iter().cycle().take(12).enumerate() {
            grid.rotate_layer(*axis, step % 3, step % 2 == 0);
            assert!(grid.is_bijection());
            assert_orientation_tracks_position(&grid);
            for (_, cell) in grid.cells() {
                assert!(cell.orientation.is_proper_rotation());
            }
        }
    }

    #[test]
    fn test_rotation_only_touches_its_layer() {
        let mut grid = CubeGrid::standard();
        grid.rotate_layer(Axis::Y, 2, true);
        for (coord, cell) in grid.cells() {
            if coord.1 != 2 {
                assert_eq!(cell.id, coord_to_idx(3, coord.0, coord.1, coord.2));
                assert!(cell.orientation.is_identity());
            } else {
                assert!(!cell.orientation.is_identity());
            }
        }
    }

    #[test]
    fn test_right_turn_lifts_front_to_top() {
        let mut grid = CubeGrid::standard();
        let front_middle = coord_to_idx(3, 2, 1, 2);
        grid.rotate_layer(Axis::X, 2, true);
        assert_eq!(grid.position_of(front_middle), Some((2, 2, 1)));
        // the centre of the turned face stays put but is rotated
        let centre = grid.cell_at(2, 1, 1);
        assert_eq!(centre.id, coord_to_idx(3, 2, 1, 1));
        assert_eq!(centre.orientation, Orientation::quarter_turn(Axis::X, true));
    }

    #[test]
    fn test_counter_clockwise_undoes_clockwise() {
        let mut grid = CubeGrid::standard();
        grid.rotate_layer(Axis::Z, 0, true);
        grid.rotate_layer(Axis::Z, 0, false);
        assert!(grid.is_solved());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_layer_panics() {
        let mut grid = CubeGrid::standard();
        grid.rotate_layer(Axis::X, 3, true);
    }

    #[test]
    fn test_format_solved_grid() {
        let grid = CubeGrid::standard();
        insta::assert_snapshot!(format_grid(&grid), @r"
        z=0       z=1       z=2
         6 15 24   7 16 25   8 17 26
         3 12 21   4 13 22   5 14 23
         0  9 18   1 10 19   2 11 20
        ");
    }

    #[test]
    fn test_format_after_right_turn() {
        let mut grid = CubeGrid::standard();
        grid.rotate_layer(Axis::X, 2, true);
        insta::assert_snapshot!(format_grid(&grid), @r"
        z=0       z=1       z=2
         6 15 26   7 16 23   8 17 20
         3 12 25   4 13 22   5 14 19
         0  9 24   1 10 21   2 11 18
        ");
    }
}
