//! Execution context passed to a roomba during its step.

use crate::params::AgentParams;
use crate::roster::Peers;
use rand::RngCore;
use roomba_space::Grid;

/// Everything a roomba may touch while it steps.
///
/// The grid is lent mutably because stepping moves the agent, removes
/// trash and marks cells explored. Peers are read-only and reflect every
/// change made by agents that already stepped this tick.
pub struct StepContext<'a> {
    grid: &'a mut Grid,
    peers: Peers<'a>,
    rng: &'a mut dyn RngCore,
    params: &'a AgentParams,
}

impl<'a> StepContext<'a> {
    /// Construct a new step context.
    pub fn new(
        grid: &'a mut Grid,
        peers: Peers<'a>,
        rng: &'a mut dyn RngCore,
        params: &'a AgentParams,
    ) -> Self {
        Self {
            grid,
            peers,
            rng,
            params,
        }
    }

    /// Shared occupancy map.
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Mutable occupancy map.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut *self.grid
    }

    /// Every other agent.
    pub fn peers(&self) -> Peers<'a> {
        self.peers
    }

    /// Simulation RNG.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// Agent tunables.
    pub fn params(&self) -> &'a AgentParams {
        self.params
    }
}
