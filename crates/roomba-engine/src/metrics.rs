//! Per-tick summaries for reporting.
//!
//! [`TickSummary`] is what [`Simulation::tick`](crate::Simulation::tick)
//! returns. Formatting and printing are left to the caller.

use crate::simulation::TerminationReason;
use roomba_agent::{AgentEvent, Roomba, RoombaState};
use roomba_core::{AgentId, Coord};

/// Snapshot of one agent after a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentSummary {
    /// Agent id.
    pub id: AgentId,
    /// Current cell.
    pub coord: Coord,
    /// Controller state.
    pub state: RoombaState,
    /// `false` once depleted.
    pub active: bool,
    /// Remaining charge.
    pub battery: u32,
    /// Trash removed so far.
    pub cleaned: u64,
    /// Completed recharges so far.
    pub recharges: u64,
    /// Cells moved so far.
    pub steps: u64,
}

impl AgentSummary {
    /// Summarise an agent.
    pub fn of(roomba: &Roomba) -> Self {
        Self {
            id: roomba.id(),
            coord: roomba.coord(),
            state: roomba.state(),
            active: roomba.is_active(),
            battery: roomba.battery(),
            cleaned: roomba.cleaned(),
            recharges: roomba.recharges(),
            steps: roomba.steps(),
        }
    }

    /// This agent's share of the initial trash, in percent.
    pub fn cleaned_pct(&self, trash_initial: usize) -> f64 {
        if trash_initial == 0 {
            return 100.0;
        }
        self.cleaned as f64 / trash_initial as f64 * 100.0
    }
}

/// Counts of [`AgentEvent`]s raised during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventCounts {
    /// Trash removed.
    pub cleaned: u32,
    /// Recharges completed.
    pub recharges_completed: u32,
    /// Return trips started.
    pub returns_triggered: u32,
    /// Agents depleted.
    pub depleted: u32,
    /// Path searches that failed.
    pub no_path: u32,
    /// Times no station could be used.
    pub no_station: u32,
    /// Knowledge exchanges.
    pub exchanges: u32,
}

impl EventCounts {
    /// Tally one event.
    pub fn record(&mut self, event: &AgentEvent) {
        match event {
            AgentEvent::Cleaned(_) => self.cleaned += 1,
            AgentEvent::RechargeComplete => self.recharges_completed += 1,
            AgentEvent::ReturnTriggered => self.returns_triggered += 1,
            AgentEvent::Depleted => self.depleted += 1,
            AgentEvent::NoPathFound { .. } => self.no_path += 1,
            AgentEvent::NoStationAvailable => self.no_station += 1,
            AgentEvent::Exchanged { .. } => self.exchanges += 1,
        }
    }
}

/// State of the simulation after a tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickSummary {
    /// Ticks executed so far.
    pub ticks_elapsed: u64,
    /// Trash placed at construction.
    pub trash_initial: usize,
    /// Trash still on the grid.
    pub trash_remaining: usize,
    /// Cells explored by any agent.
    pub explored_cells: usize,
    /// Why the run stopped, if it has.
    pub termination: Option<TerminationReason>,
    /// Every agent, depleted ones included, in id order.
    pub agents: Vec<AgentSummary>,
    /// Events raised during the most recent tick.
    pub events: EventCounts,
}

impl TickSummary {
    /// Whether the run has stopped.
    pub fn is_terminated(&self) -> bool {
        self.termination.is_some()
    }

    /// Percentage of the initial trash that has been cleaned.
    pub fn trash_collected_pct(&self) -> f64 {
        if self.trash_initial == 0 {
            return 100.0;
        }
        (self.trash_initial - self.trash_remaining) as f64 / self.trash_initial as f64 * 100.0
    }

    /// Number of agents with charge left.
    pub fn agents_alive(&self) -> usize {
        self.agents.iter().filter(|a| a.active).count()
    }

    /// Mean battery over all agents; depleted agents count as zero.
    pub fn mean_battery(&self) -> f64 {
        self.mean_over_alive(|a| a.battery as f64)
    }

    /// Mean steps taken by surviving agents, averaged over all agents.
    pub fn mean_steps(&self) -> f64 {
        self.mean_over_alive(|a| a.steps as f64)
    }

    /// Mean recharges of surviving agents, averaged over all agents.
    pub fn mean_recharges(&self) -> f64 {
        self.mean_over_alive(|a| a.recharges as f64)
    }

    fn mean_over_alive(&self, value: impl Fn(&AgentSummary) -> f64) -> f64 {
        if self.agents.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.agents.iter().filter(|a| a.active).map(value).sum();
        sum / self.agents.len() as f64
    }
}
