//! The core `Space` trait.

use roomba_core::Coord;
use smallvec::SmallVec;

/// Topology of the simulation map.
///
/// The pathfinder and the controller only ever ask a space three things:
/// which cells exist, which cells touch a given cell, and how far apart
/// two cells are. Occupancy lives in [`Grid`](crate::Grid), not here.
pub trait Space {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// Total number of cells in the space.
    fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Whether `coord` names a cell of this space.
    fn contains(&self, coord: Coord) -> bool;

    /// Enumerate the neighbours of a cell.
    ///
    /// Returns coordinates in a deterministic, backend-defined order. Callers
    /// that pick among neighbours at random rely on this order for
    /// reproducible runs.
    fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 8]>;

    /// Graph-geodesic distance between two cells on an empty map.
    fn distance(&self, a: Coord, b: Coord) -> u32;

    /// All cells in deterministic canonical order.
    fn canonical_ordering(&self) -> Vec<Coord>;

    /// Position of a coordinate in the canonical ordering.
    ///
    /// Returns `None` when the coordinate is outside the space.
    fn canonical_rank(&self, coord: Coord) -> Option<usize>;
}
