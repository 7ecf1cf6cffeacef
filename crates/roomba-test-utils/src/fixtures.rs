//! Reusable grid fixtures.
//!
//! - [`open_grid`]: no entities at all.
//! - [`walled_grid`]: obstacles on every border cell.
//! - [`enclosed_goal_grid`]: open grid with one cell fully ringed by obstacles.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roomba_core::{Coord, EntityKind};
use roomba_space::{Grid, Space, Square8};

/// Deterministic RNG for tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Empty `width x height` grid.
///
/// # Panics
///
/// Panics on zero dimensions.
pub fn open_grid(width: u32, height: u32) -> Grid {
    Grid::new(Square8::new(width, height).unwrap())
}

/// Grid whose outer ring is filled with obstacles.
pub fn walled_grid(width: u32, height: u32) -> Grid {
    let mut grid = open_grid(width, height);
    let border: Vec<Coord> = grid
        .space()
        .canonical_ordering()
        .into_iter()
        .filter(|c| grid.space().is_border(*c))
        .collect();
    for c in border {
        grid.place(EntityKind::Obstacle, c).unwrap();
    }
    grid
}

/// Open grid with the centre cell enclosed by its eight neighbours.
///
/// Returns the grid and the enclosed coordinate. Needs at least 5x5 so the
/// ring does not touch the corners.
pub fn enclosed_goal_grid(width: u32, height: u32) -> (Grid, Coord) {
    assert!(width >= 5 && height >= 5, "enclosed_goal_grid needs 5x5");
    let mut grid = open_grid(width, height);
    let goal = Coord::new(width as i32 / 2, height as i32 / 2);
    for c in grid.neighbours(goal) {
        grid.place(EntityKind::Obstacle, c).unwrap();
    }
    (grid, goal)
}
