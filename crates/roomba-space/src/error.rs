//! Error types for space construction and grid mutation.

use roomba_core::{Coord, EntityId};
use std::fmt;

/// Errors arising from space construction or occupancy updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a space with zero cells.
    EmptySpace,
    /// A dimension exceeds what `i32` coordinates can address.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested size.
        value: u32,
        /// The largest accepted size.
        max: u32,
    },
    /// A coordinate is outside the bounds of the space.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// More distinct empty cells were requested than exist.
    NotEnoughEmptyCells {
        /// Number of cells asked for.
        requested: usize,
        /// Number of empty cells available.
        available: usize,
    },
    /// The handle does not refer to a live entity.
    UnknownEntity {
        /// The stale or foreign handle.
        id: EntityId,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "space must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::NotEnoughEmptyCells {
                requested,
                available,
            } => write!(
                f,
                "requested {requested} empty cells but only {available} are available"
            ),
            Self::UnknownEntity { id } => write!(f, "entity {id} is not on the grid"),
        }
    }
}

impl std::error::Error for SpaceError {}
