//! 2D square grid with 8-connected (Moore) neighbourhood.

use crate::error::SpaceError;
use crate::grid2d;
use crate::space::Space;
use roomba_core::Coord;
use smallvec::SmallVec;

/// All 8 offsets as `(dx, dy)`: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// A two-dimensional square grid with 8-connected neighbourhood.
///
/// Each cell has coordinate `(x, y)`. Neighbours include the four cardinal
/// directions plus four diagonals. Distance is Chebyshev (L-inf),
/// consistent with Moore moves where a diagonal step costs 1.
///
/// The map is bounded: moves off the edge do not exist, so corner cells
/// have 3 neighbours and other edge cells have 5.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square8 {
    width: u32,
    height: u32,
}

impl Square8 {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a new grid with `width * height` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self { width, height })
    }

    /// Whether `coord` lies on the outermost ring of cells.
    pub fn is_border(&self, coord: Coord) -> bool {
        self.contains(coord)
            && (coord.x == 0
                || coord.y == 0
                || coord.x == self.width as i32 - 1
                || coord.y == self.height as i32 - 1)
    }
}

impl Space for Square8 {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn contains(&self, coord: Coord) -> bool {
        grid2d::canonical_rank_2d(coord, self.width, self.height).is_some()
    }

    fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]> {
        OFFSETS_8
            .iter()
            .map(|&(dx, dy)| coord.offset(dx, dy))
            .filter(|&c| self.contains(c))
            .collect()
    }

    fn distance(&self, a: Coord, b: Coord) -> u32 {
        a.chebyshev(b)
    }

    fn canonical_ordering(&self) -> Vec<Coord> {
        grid2d::canonical_ordering_2d(self.width, self.height)
    }

    fn canonical_rank(&self, coord: Coord) -> Option<usize> {
        grid2d::canonical_rank_2d(coord, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let s = Square8::new(5, 5).unwrap();
        assert_eq!(s.neighbours(c(2, 2)).len(), 8);
        assert!(!s.neighbours(c(2, 2)).contains(&c(2, 2)));
    }

    #[test]
    fn neighbours_corner() {
        let s = Square8::new(5, 5).unwrap();
        let n = s.neighbours(c(0, 0));
        assert_eq!(n.len(), 3);
        assert!(n.contains(&c(1, 0)));
        assert!(n.contains(&c(0, 1)));
        assert!(n.contains(&c(1, 1)));
    }

    #[test]
    fn neighbours_edge() {
        let s = Square8::new(5, 5).unwrap();
        assert_eq!(s.neighbours(c(2, 0)).len(), 5);
    }


    #[test]
    fn neighbour_order_is_stable() {
        let s = Square8::new(5, 5).unwrap();
        let n: Vec<_> = s.neighbours(c(2, 2)).into_iter().collect();
        assert_eq!(n[0], c(2, 1));
        assert_eq!(n[3], c(3, 2));
        assert_eq!(n[7], c(3, 3));
    }

    // ── Distance tests ──────────────────────────────────────────

    #[test]
    fn distance_is_chebyshev() {
        let s = Square8::new(10, 10).unwrap();
        assert_eq!(s.distance(c(0, 0), c(1, 1)), 1);
        assert_eq!(s.distance(c(0, 0), c(3, 4)), 4);
        assert_eq!(s.distance(c(2, 3), c(5, 7)), 4);
    }


    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_dimension_returns_error() {
        assert!(matches!(
            Square8::new(0, 5),
            Err(SpaceError::EmptySpace)
        ));
        assert!(matches!(
            Square8::new(5, 0),
            Err(SpaceError::EmptySpace)
        ));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Square8::new(big, 5),
            Err(SpaceError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            Square8::new(5, big),
            Err(SpaceError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn border_ring() {
        let s = Square8::new(4, 3).unwrap();
        assert!(s.is_border(c(0, 1)));
        assert!(s.is_border(c(3, 2)));
        assert!(!s.is_border(c(1, 1)));
        assert!(!s.is_border(c(4, 1)));
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let s = Square8::new(1, 1).unwrap();
        assert!(s.neighbours(c(0, 0)).is_empty());
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_bounded() {
        let s = Square8::new(6, 5).unwrap();
        compliance::run_full_compliance(&s);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours_symmetric(
            w in 2u32..10,
            h in 2u32..10,
            x in 0i32..10, y in 0i32..10,
        ) {
            let s = Square8::new(w, h).unwrap();
            let coord = c(x % w as i32, y % h as i32);
            for nb in s.neighbours(coord) {
                prop_assert!(
                    s.neighbours(nb).contains(&coord),
                    "neighbour symmetry violated: {} in N({}) but not the reverse",
                    nb, coord,
                );
            }
        }

        #[test]
        fn neighbours_are_one_step_away(
            w in 2u32..10,
            h in 2u32..10,
            x in 0i32..10, y in 0i32..10,
        ) {
            let s = Square8::new(w, h).unwrap();
            let coord = c(x % w as i32, y % h as i32);
            for nb in s.neighbours(coord) {
                prop_assert!(s.contains(nb));
                prop_assert_eq!(s.distance(coord, nb), 1);
            }
        }
    }
}
