//! 3D rotation utilities for layer turns.
//!
//! Every layer turn is a quarter turn about one of the three coordinate axes.
//! Orientations are kept as exact integer matrices so that composing turns
//! never drifts: four quarter turns about the same axis give back the identity
//! bit for bit.

use std::fmt;
use std::ops::Mul;

/// A 3D integer vector: a grid coordinate, a doubled centred offset, or a
/// unit direction.
pub type Coord = (i32, i32, i32);

/// One of the three coordinate axes.
///
/// `X` grows from the L face to the R face, `Y` from D to U and `Z` from B to
/// F, which makes the frame right-handed with F facing the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of this axis into a coordinate triple.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two coordinates a turn about this axis moves, in cyclic order.
    ///
    /// X moves `(y, z)`, Y moves `(z, x)` and Z moves `(x, y)`. With this
    /// ordering the slice rotation in [`rotate_slice_coord`] and the matrix
    /// from [`Orientation::quarter_turn`] describe the same physical turn.
    #[inline]
    pub const fn plane(self) -> (usize, usize) {
        match self {
            Axis::X => (1, 2),
            Axis::Y => (2, 0),
            Axis::Z => (0, 1),
        }
    }

    /// Unit vector pointing along the positive direction of this axis.
    pub const fn unit(self) -> Coord {
        match self {
            Axis::X => (1, 0, 0),
            Axis::Y => (0, 1, 0),
            Axis::Z => (0, 0, 1),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// Rotates a 2D slice coordinate by a quarter turn.
///
/// Clockwise maps `(i, j)` to `(j, n-1-i)`; counter-clockwise maps it to
/// `(n-1-j, i)`. The two are inverses of each other.
#[inline(always)]
pub const fn rotate_slice_coord(i: usize, j: usize, n: usize, clockwise: bool) -> (usize, usize) {
    if clockwise {
        (j, n - 1 - i)
    } else {
        (n - 1 - j, i)
    }
}

/// A proper rotation stored as an integer 3x3 matrix (row-major).
///
/// Only products of quarter turns are ever built, so every entry is -1, 0 or
/// 1 and each row and column has exactly one nonzero entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation(pub [[i32; 3]; 3]);

impl Orientation {
    pub const IDENTITY: Self = Self([[1, 0, 0], [0, 1, 0], [0, 0, 1]]);

    /// Quarter turn about `axis`.
    ///
    /// Clockwise is as seen from the positive end of the axis looking toward
    /// the origin, i.e. a rotation by -90 degrees under the right-hand rule.
    pub const fn quarter_turn(axis: Axis, clockwise: bool) -> Self {
        let (u, v) = axis.plane();
        let a = axis.index();
        let mut m = [[0; 3]; 3];
        m[a][a] = 1;
        // clockwise: u' = v, v' = -u
        if clockwise {
            m[u][v] = 1;
            m[v][u] = -1;
        } else {
            m[u][v] = -1;
            m[v][u] = 1;
        }
        Self(m)
    }

    /// Inverse rotation, which for an orthonormal matrix is its transpose.
    pub fn transpose(&self) -> Self {
        let mut m = [[0; 3]; 3];
        for (row, values) in self.0.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                m[col][row] = value;
            }
        }
        Self(m)
    }

    pub fn determinant(&self) -> i32 {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns true if the matrix is orthonormal with determinant +1.
    pub fn is_proper_rotation(&self) -> bool {
        *self * self.transpose() == Self::IDENTITY && self.determinant() == 1
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Applies this rotation to a vector.
    pub fn apply(&self, (x, y, z): Coord) -> Coord {
        let m = &self.0;
        (
            m[0][0] * x + m[0][1] * y + m[0][2] * z,
            m[1][0] * x + m[1][1] * y + m[1][2] * z,
            m[2][0] * x + m[2][1] * y + m[2][2] * z,
        )
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Orientation {
    type Output = Orientation;

    /// Matrix product: `(a * b).apply(v) == a.apply(b.apply(v))`.
    fn mul(self, rhs: Orientation) -> Orientation {
        let mut m = [[0; 3]; 3];
        for (row, out_row) in m.iter_mut().enumerate() {
            for (col, out) in out_row.iter_mut().enumerate() {
                *out = (0..3).map(|k| self.0[row][k] * rhs.0[k][col]).sum();
            }
        }
        Orientation(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_turns_are_proper_rotations() {
        for axis in Axis::ALL {
            for clockwise in [true, false] {
                let turn = Orientation::quarter_turn(axis, clockwise);
                assert!(
                    turn.is_proper_rotation(),
                    "{axis} clockwise={clockwise} is not a proper rotation"
                );
                assert_eq!(turn.apply(axis.unit()), axis.unit(), "axis must stay fixed");
            }
        }
    }

    #[test]
    fn test_four_quarter_turns_are_identity() {
        for axis in Axis::ALL {
            for clockwise in [true, false] {
                let turn = Orientation::quarter_turn(axis, clockwise);
                let full = turn * turn * turn * turn;
                assert!(full.is_identity(), "{axis} clockwise={clockwise}");
                assert!(!(turn * turn).is_identity());
            }
        }
    }

    #[test]
    fn test_counter_clockwise_undoes_clockwise() {
        for axis in Axis::ALL {
            let cw = Orientation::quarter_turn(axis, true);
            let ccw = Orientation::quarter_turn(axis, false);
            assert!((cw * ccw).is_identity());
            assert_eq!(cw.transpose(), ccw);
        }
    }

    #[test]
    fn test_clockwise_follows_right_hand_rule() {
        // seen from +Z, clockwise carries +Y (up) to +X (right)
        let z = Orientation::quarter_turn(Axis::Z, true);
        assert_eq!(z.apply((0, 1, 0)), (1, 0, 0));
        // seen from +X, clockwise carries +Z (front) to +Y (up)
        let x = Orientation::quarter_turn(Axis::X, true);
        assert_eq!(x.apply((0, 0, 1)), (0, 1, 0));
        // seen from +Y, clockwise carries +Z (front) to -X (left)
        let y = Orientation::quarter_turn(Axis::Y, true);
        assert_eq!(y.apply((0, 0, 1)), (-1, 0, 0));
    }

    #[test]
    fn test_slice_rotation_has_order_four() {
        for n in 1..=5 {
            for i in 0..n {
                for j in 0..n {
                    let mut coord = (i, j);
                    for _ in 0..4 {
                        coord = rotate_slice_coord(coord.0, coord.1, n, true);
                    }
                    assert_eq!(coord, (i, j), "n={n}");

                    let (ci, cj) = rotate_slice_coord(i, j, n, true);
                    assert_eq!(rotate_slice_coord(ci, cj, n, false), (i, j));
                }
            }
        }
    }

    #[test]
    fn test_slice_rotation_matches_matrix() {
        // the 2D slice rotation must agree with the 3D matrix on doubled
        // centred coordinates, for both odd and even sizes
        for n in [2usize, 3, 4] {
            let centre = n as i32 - 1;
            for axis in Axis::ALL {
                let (u, v) = axis.plane();
                for clockwise in [true, false] {
                    let turn = Orientation::quarter_turn(axis, clockwise);
                    for i in 0..n {
                        for j in 0..n {
                            let mut offset = [0i32; 3];
                            offset[u] = 2 * i as i32 - centre;
                            offset[v] = 2 * j as i32 - centre;
                            let (rx, ry, rz) = turn.apply((offset[0], offset[1], offset[2]));
                            let rotated = [rx, ry, rz];

                            let (ni, nj) = rotate_slice_coord(i, j, n, clockwise);
                            assert_eq!(rotated[u], 2 * ni as i32 - centre);
                            assert_eq!(rotated[v], 2 * nj as i32 - centre);
                            assert_eq!(rotated[axis.index()], 0);
                        }
                    }
                }
            }
        }
    }
}
