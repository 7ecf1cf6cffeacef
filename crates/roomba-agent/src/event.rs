//! Outcomes reported by a controller step.

use roomba_core::{AgentId, Coord};
use smallvec::SmallVec;

/// Something noteworthy that happened during one agent's step.
///
/// None of these are failures: an unreachable goal or a busy station
/// degrades to a fallback action and is only reported here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentEvent {
    /// Trash at the given cell was removed.
    Cleaned(Coord),
    /// Battery reached full charge.
    RechargeComplete,
    /// Battery check decided to head back to a station.
    ReturnTriggered,
    /// Battery ran out; the agent is gone.
    Depleted,
    /// A path search found no route to `goal`.
    NoPathFound {
        /// The unreachable target.
        goal: Coord,
    },
    /// Every known station is occupied or unreachable.
    NoStationAvailable,
    /// Knowledge was merged from a neighbour.
    Exchanged {
        /// The neighbour read from.
        with: AgentId,
    },
}

/// Events of a single step. Rarely more than a few.
pub type StepEvents = SmallVec<[AgentEvent; 4]>;
