//! Shared helpers for 2D lattice backends.

use crate::error::SpaceError;
use roomba_core::Coord;

/// Check that a 2D coordinate is in bounds and return its row-major rank.
pub(crate) fn check_2d_bounds(coord: Coord, width: u32, height: u32) -> Result<usize, SpaceError> {
    canonical_rank_2d(coord, width, height).ok_or_else(|| SpaceError::CoordOutOfBounds {
        coord,
        bounds: format!("[0, {width}) x [0, {height})"),
    })
}

/// Row-major canonical ordering: `(0,0), (1,0), ..., (width-1, height-1)`.
pub(crate) fn canonical_ordering_2d(width: u32, height: u32) -> Vec<Coord> {
    let mut out = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            out.push(Coord::new(x, y));
        }
    }
    out
}

/// Row-major rank of `coord`, or `None` when out of bounds.
pub(crate) fn canonical_rank_2d(coord: Coord, width: u32, height: u32) -> Option<usize> {
    if coord.x < 0 || coord.y < 0 || coord.x >= width as i32 || coord.y >= height as i32 {
        return None;
    }
    Some(coord.y as usize * width as usize + coord.x as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_is_row_major() {
        assert_eq!(canonical_rank_2d(Coord::new(0, 0), 4, 3), Some(0));
        assert_eq!(canonical_rank_2d(Coord::new(3, 0), 4, 3), Some(3));
        assert_eq!(canonical_rank_2d(Coord::new(0, 1), 4, 3), Some(4));
        assert_eq!(canonical_rank_2d(Coord::new(4, 0), 4, 3), None);
        assert_eq!(canonical_rank_2d(Coord::new(0, -1), 4, 3), None);
    }

    #[test]
    fn ordering_matches_rank() {
        let order = canonical_ordering_2d(5, 4);
        for (i, c) in order.iter().enumerate() {
            assert_eq!(canonical_rank_2d(*c, 5, 4), Some(i));
        }
    }

    #[test]
    fn out_of_bounds_error_names_range() {
        let err = check_2d_bounds(Coord::new(9, 0), 3, 3).unwrap_err();
        assert!(err.to_string().contains("[0, 3) x [0, 3)"));
    }
}
