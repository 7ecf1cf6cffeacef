//! The synchronous simulation driver.
//!
//! # Tick order
//!
//! At the start of every tick the active agents are shuffled with the
//! simulation RNG. Each agent then steps to completion before the next one
//! starts, so later agents observe every move, cleanup and state change
//! made earlier in the same tick. Termination is checked once all agents
//! have stepped.

use std::error::Error;
use std::fmt;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roomba_agent::{AgentParams, Roomba, Roster, StepContext};
use roomba_core::{AgentId, TickId};
use roomba_space::{Grid, SpaceError};
use tracing::{info, trace};

use crate::config::{ConfigError, SimConfig};
use crate::hash;
use crate::metrics::{AgentSummary, EventCounts, TickSummary};
use crate::populate::populate;

// ── TerminationReason ──────────────────────────────────────────────

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// No trash is left on the grid.
    TrashExhausted,
    /// The tick budget is spent.
    MaxTicksReached,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrashExhausted => write!(f, "all trash cleaned"),
            Self::MaxTicksReached => write!(f, "maximum tick count reached"),
        }
    }
}

// ── TickError ──────────────────────────────────────────────────────

/// The grid and an agent disagreed during a tick.
///
/// Never raised by a correctly constructed simulation; the tick that
/// produced it is left partially applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickError {
    /// Tick being executed.
    pub tick: TickId,
    /// Agent that was stepping.
    pub agent: AgentId,
    /// Underlying grid failure.
    pub source: SpaceError,
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick {} failed while stepping agent {}: {}",
            self.tick, self.agent, self.source
        )
    }
}

impl Error for TickError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

// ── Simulation ─────────────────────────────────────────────────────

/// A roomba world plus the state needed to advance it.
///
/// # Example
///
/// ```
/// use roomba_engine::{SimConfig, Simulation};
///
/// let mut sim = Simulation::new(SimConfig::single_agent()).unwrap();
/// let summary = sim.run().unwrap();
/// assert!(summary.is_terminated());
/// ```
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    roster: Roster,
    params: AgentParams,
    rng: ChaCha8Rng,
    tick: TickId,
    max_ticks: u64,
    trash_initial: usize,
    last_order: Vec<AgentId>,
    last_events: EventCounts,
    termination: Option<TerminationReason>,
}

impl Simulation {
    /// Validate `config` and populate a random world from it.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let (grid, roster) = populate(&config, &mut rng)?;
        Ok(Self::from_parts(
            grid,
            roster,
            config.params,
            rng,
            config.max_ticks,
        ))
    }

    /// Build a world from bare parameters.
    ///
    /// One agent selects the single-agent rules; more select the
    /// multi-agent rules with their own tunables.
    pub fn create(
        width: u32,
        height: u32,
        obstacle_rate: f64,
        trash_rate: f64,
        agent_count: u32,
        seed: u64,
        max_ticks: u64,
    ) -> Result<Self, ConfigError> {
        let base = if agent_count == 1 {
            SimConfig::single_agent()
        } else {
            SimConfig::multi_agent(agent_count)
        };
        Self::new(SimConfig {
            width,
            height,
            obstacle_rate,
            trash_rate,
            agent_count,
            seed,
            max_ticks,
            ..base
        })
    }

    pub(crate) fn from_parts(
        grid: Grid,
        roster: Roster,
        params: AgentParams,
        rng: ChaCha8Rng,
        max_ticks: u64,
    ) -> Self {
        let trash_initial = grid.trash_count();
        info!(
            agents = roster.len(),
            trash = trash_initial,
            variant = %params.variant,
            "simulation created"
        );
        Self {
            grid,
            roster,
            params,
            rng,
            tick: TickId::default(),
            max_ticks,
            trash_initial,
            last_order: Vec::new(),
            last_events: EventCounts::default(),
            termination: None,
        }
    }

    /// Advance every active agent by one step.
    ///
    /// After termination this is a no-op that returns the current summary.
    pub fn tick(&mut self) -> Result<TickSummary, TickError> {
        if self.termination.is_some() {
            return Ok(self.summary());
        }
        self.tick = self.tick.next();

        let mut order = self.roster.active_ids();
        order.shuffle(&mut self.rng);
        trace!(tick = %self.tick, ?order, "activation order");

        let mut events = EventCounts::default();
        for &id in &order {
            let Some((roomba, peers)) = self.roster.split_for(id) else {
                continue;
            };
            let mut ctx = StepContext::new(&mut self.grid, peers, &mut self.rng, &self.params);
            let step_events = roomba.step(&mut ctx).map_err(|source| TickError {
                tick: self.tick,
                agent: id,
                source,
            })?;
            for e in &step_events {
                events.record(e);
            }
        }
        self.last_order = order;
        self.last_events = events;

        if self.grid.trash_count() == 0 {
            self.termination = Some(TerminationReason::TrashExhausted);
        } else if self.tick.0 >= self.max_ticks {
            self.termination = Some(TerminationReason::MaxTicksReached);
        }
        if let Some(reason) = self.termination {
            info!(tick = %self.tick, %reason, "simulation terminated");
        }
        Ok(self.summary())
    }

    /// Tick until termination.
    pub fn run(&mut self) -> Result<TickSummary, TickError> {
        loop {
            let summary = self.tick()?;
            if summary.is_terminated() {
                return Ok(summary);
            }
        }
    }

    /// Summary of the current state.
    pub fn summary(&self) -> TickSummary {
        TickSummary {
            ticks_elapsed: self.tick.0,
            trash_initial: self.trash_initial,
            trash_remaining: self.grid.trash_count(),
            explored_cells: self.grid.explored_count(),
            termination: self.termination,
            agents: self.roster.iter().map(AgentSummary::of).collect(),
            events: self.last_events,
        }
    }

    /// Whether the run has stopped.
    pub fn is_terminated(&self) -> bool {
        self.termination.is_some()
    }

    /// Why the run stopped, if it has.
    pub fn termination(&self) -> Option<TerminationReason> {
        self.termination
    }

    /// Ticks executed so far.
    pub fn tick_id(&self) -> TickId {
        self.tick
    }

    /// Activation order of the most recent tick.
    pub fn last_order(&self) -> &[AgentId] {
        &self.last_order
    }

    /// The occupancy map.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// One agent.
    pub fn agent(&self, id: AgentId) -> Option<&Roomba> {
        self.roster.get(id)
    }

    /// Every agent in id order.
    pub fn agents(&self) -> impl Iterator<Item = &Roomba> + '_ {
        self.roster.iter()
    }

    /// Agent tunables.
    pub fn params(&self) -> &AgentParams {
        &self.params
    }

    /// FNV-1a hash of the full simulation state.
    pub fn state_hash(&self) -> u64 {
        hash::state_hash(self.tick.0, &self.grid, &self.roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roomba_agent::RoombaState;

    #[test]
    fn create_picks_variant_from_agent_count() {
        let single = Simulation::create(8, 8, 0.1, 0.2, 1, 1, 100).unwrap();
        assert_eq!(single.params().safety_margin, 10);
        let multi = Simulation::create(10, 10, 0.1, 0.2, 3, 1, 100).unwrap();
        assert_eq!(multi.params().safety_margin, 20);
        assert_eq!(multi.agents().count(), 3);
    }

    #[test]
    fn create_rejects_invalid_configuration() {
        assert!(Simulation::create(0, 8, 0.1, 0.2, 1, 1, 100).is_err());
        assert!(Simulation::create(8, 8, 0.9, 0.9, 1, 1, 100).is_err());
        assert!(Simulation::create(8, 8, 0.1, 0.2, 0, 1, 100).is_err());
    }

    #[test]
    fn tick_advances_and_records_order() {
        let mut sim = Simulation::new(SimConfig::multi_agent(3)).unwrap();
        let summary = sim.tick().unwrap();
        assert_eq!(summary.ticks_elapsed, 1);
        assert_eq!(sim.tick_id(), TickId(1));
        let mut order = sim.last_order().to_vec();
        order.sort();
        assert_eq!(order, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn max_ticks_terminates() {
        let config = SimConfig {
            max_ticks: 3,
            trash_rate: 0.5,
            ..SimConfig::single_agent()
        };
        let mut sim = Simulation::new(config).unwrap();
        let summary = sim.run().unwrap();
        assert!(summary.ticks_elapsed <= 3);
        if summary.termination == Some(TerminationReason::MaxTicksReached) {
            assert_eq!(summary.ticks_elapsed, 3);
        }
    }

    #[test]
    fn tick_after_termination_is_noop() {
        let config = SimConfig {
            max_ticks: 1,
            ..SimConfig::single_agent()
        };
        let mut sim = Simulation::new(config).unwrap();
        let first = sim.tick().unwrap();
        assert!(first.is_terminated());
        let hash = sim.state_hash();
        let again = sim.tick().unwrap();
        assert_eq!(first, again);
        assert_eq!(hash, sim.state_hash());
    }

    #[test]
    fn fresh_agents_start_idle() {
        let sim = Simulation::new(SimConfig::multi_agent(2)).unwrap();
        assert!(sim.agents().all(|r| r.state() == RoombaState::Idle));
        assert_eq!(sim.summary().ticks_elapsed, 0);
        assert!(!sim.is_terminated());
        assert_eq!(sim.termination(), None);
    }
}
