//! Grid coordinates and the distance metrics used by the controller.

use std::fmt;

/// A cell position on the 2D grid.
///
/// `x` indexes columns and `y` indexes rows; valid cells satisfy
/// `0 <= x < width` and `0 <= y < height`. Coordinates are plain values:
/// agents and the pathfinder pass them around freely and always resolve
/// occupants through the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this coordinate by `(dx, dy)` without bounds checking.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Chebyshev (L-inf) distance: `max(|dx|, |dy|)`.
    ///
    /// Equal to the number of Moore moves between two cells on an open
    /// grid, which makes it the station-distance estimate.
    pub fn chebyshev(self, other: Coord) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }

    /// Manhattan (L1) distance: `|dx| + |dy|`. Used as the A* heuristic.
    pub fn manhattan(self, other: Coord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
