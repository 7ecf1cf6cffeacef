//! Tagged entity kinds stored per grid occupant.

use crate::id::AgentId;

/// What occupies a grid cell.
///
/// Occupant filtering is a pattern match on this enum. Ground markers are
/// not entities: the grid tracks the explored flag per cell directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A cleaning robot. The payload links back to the agent roster.
    Roomba(AgentId),
    /// A piece of trash. Removed permanently once cleaned.
    Trash,
    /// A charging station. Stateless; occupancy is derived from the
    /// recharging roombas sharing its cell.
    Station,
    /// A permanent wall. Blocks movement and pathfinding.
    Obstacle,
}

impl EntityKind {
    /// Whether this entity blocks movement into its cell.
    pub fn is_blocking(self) -> bool {
        matches!(self, Self::Obstacle)
    }

    /// The agent id if this is a roomba.
    pub fn agent(self) -> Option<AgentId> {
        match self {
            Self::Roomba(id) => Some(id),
            _ => None,
        }
    }
}
