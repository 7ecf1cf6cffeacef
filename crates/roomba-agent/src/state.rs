//! Controller states.

use std::fmt;

/// State of a roomba's controller.
///
/// `Waiting`, `Communicating` and `Move` are only entered by the
/// multi-agent variant. `Moving`, `Cleaning`, `CheckObstacles`,
/// `Communicating` and `Move` are transient within a single tick; an agent
/// at rest between ticks is in one of the remaining states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RoombaState {
    /// Re-evaluating the battery at the start of a tick.
    #[default]
    Idle,
    /// Heading back to a charging station.
    Returning,
    /// Standing on a free station and charging.
    Recharging,
    /// Free to explore or clean this tick.
    Ready,
    /// Committed to a one-cell move.
    Moving,
    /// Removing trash from the current cell.
    Cleaning,
    /// Choosing an exploration target among neighbours.
    CheckObstacles,
    /// Blocked on an occupied or unreachable station.
    Waiting,
    /// Merging a neighbour's knowledge.
    Communicating,
    /// Leaving `Waiting` for a freed station.
    Move,
}

impl RoombaState {
    /// All states in declaration order.
    pub const ALL: [RoombaState; 10] = [
        Self::Idle,
        Self::Returning,
        Self::Recharging,
        Self::Ready,
        Self::Moving,
        Self::Cleaning,
        Self::CheckObstacles,
        Self::Waiting,
        Self::Communicating,
        Self::Move,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Returning => "returning",
            Self::Recharging => "recharging",
            Self::Ready => "ready",
            Self::Moving => "moving",
            Self::Cleaning => "cleaning",
            Self::CheckObstacles => "check_obstacles",
            Self::Waiting => "waiting",
            Self::Communicating => "communicating",
            Self::Move => "move",
        }
    }

    /// Stable numeric tag, used for state hashing.
    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for RoombaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
