//! The per-tick state machine.
//!
//! A step runs in a fixed order:
//!
//! 1. `Idle` re-checks the battery; `Waiting` re-scans for a free station.
//! 2. `Returning` follows the return path, `Recharging` charges, `Ready`
//!    exchanges with a peer, cleans, or explores.
//! 3. The exchange cooldown ticks down.
//! 4. The battery drains unless the agent is recharging (or, in the
//!    multi-agent variant, waiting).
//! 5. An empty battery deactivates the agent and removes it from the grid.

use crate::context::StepContext;
use crate::coordination::{
    discover_stations, find_peer, nearest_station, station_in_neighbourhood, station_occupied,
};
use crate::event::{AgentEvent, StepEvents};
use crate::roomba::Roomba;
use crate::state::RoombaState;
use rand::seq::IndexedRandom;
use roomba_core::Coord;
use roomba_path::{find_path, nearest_matching};
use roomba_space::{Grid, SpaceError};
use smallvec::SmallVec;
use tracing::{debug, info};

impl Roomba {
    /// Run one tick of this agent's controller.
    ///
    /// Inactive agents do nothing. Errors only arise if the grid and the
    /// agent disagree about where the agent is, which indicates a bug in
    /// the caller rather than a recoverable condition.
    pub fn step(&mut self, ctx: &mut StepContext<'_>) -> Result<StepEvents, SpaceError> {
        let mut events = StepEvents::new();
        if !self.active {
            return Ok(events);
        }

        match self.state {
            RoombaState::Idle => self.check_battery(ctx, &mut events),
            RoombaState::Waiting => self.check_station(ctx, &mut events)?,
            _ => {}
        }

        match self.state {
            RoombaState::Returning => self.return_step(ctx, &mut events)?,
            RoombaState::Recharging => self.recharge(ctx, &mut events),
            RoombaState::Ready => self.ready_step(ctx, &mut events)?,
            _ => {}
        }

        if self.exchange_cooldown > 0 {
            self.exchange_cooldown -= 1;
            if self.exchange_cooldown == 0 {
                self.recently_exchanged = false;
            }
        }

        let params = ctx.params();
        let holds_charge = self.state == RoombaState::Recharging
            || (params.variant.is_multi() && self.state == RoombaState::Waiting);
        if !holds_charge {
            self.battery = self.battery.saturating_sub(params.drain_per_tick);
        }

        if self.battery == 0 {
            self.active = false;
            ctx.grid_mut().remove_entity(self.entity)?;
            info!(agent = %self.id, coord = %self.coord, "battery depleted");
            events.push(AgentEvent::Depleted);
        }
        Ok(events)
    }

    // ── Phase 1 ─────────────────────────────────────────────────

    fn check_battery(&mut self, ctx: &StepContext<'_>, events: &mut StepEvents) {
        let params = ctx.params();
        let space = ctx.grid().space();
        self.distance_to_station =
            nearest_station(space, self.coord, self.known_stations.iter().copied()).map(|(_, d)| d);
        let must_return = match self.distance_to_station {
            Some(d) => self.battery <= d.saturating_add(params.safety_margin),
            None => true,
        };
        if must_return {
            if !self.has_to_recharge {
                debug!(agent = %self.id, battery = self.battery, "return triggered");
                events.push(AgentEvent::ReturnTriggered);
            }
            self.has_to_recharge = true;
            self.state = RoombaState::Returning;
        } else {
            self.state = RoombaState::Ready;
        }
    }

    fn check_station(
        &mut self,
        ctx: &mut StepContext<'_>,
        events: &mut StepEvents,
    ) -> Result<(), SpaceError> {
        let Some(station) = station_in_neighbourhood(ctx.grid(), self.coord) else {
            return Ok(());
        };
        if station_occupied(ctx.grid(), &ctx.peers(), station) {
            return Ok(());
        }
        self.remember_station(station);
        self.state = RoombaState::Move;
        debug!(agent = %self.id, %station, "station freed");
        self.move_to(station, ctx, events)
    }

    // ── Phase 2 ─────────────────────────────────────────────────

    fn return_step(
        &mut self,
        ctx: &mut StepContext<'_>,
        events: &mut StepEvents,
    ) -> Result<(), SpaceError> {
        if ctx.grid().trash_at(self.coord).is_some() {
            self.remember_trash(self.coord);
        }

        if self.known_stations.contains(&self.coord)
            && !station_occupied(ctx.grid(), &ctx.peers(), self.coord)
        {
            self.pending_path.clear();
            self.start_recharging();
            return Ok(());
        }

        if !self.path_is_fresh(ctx.grid()) {
            self.pending_path.clear();
            self.plan_return(ctx, events);
        }

        match self.pending_path.pop_front() {
            Some(next) => {
                self.state = RoombaState::Moving;
                self.move_to(next, ctx, events)
            }
            None => Ok(()),
        }
    }

    /// A stored path is usable if its next cell is still adjacent and open.
    fn path_is_fresh(&self, grid: &Grid) -> bool {
        self.pending_path
            .front()
            .is_some_and(|next| next.chebyshev(self.coord) == 1 && !grid.has_obstacle(*next))
    }

    fn plan_return(&mut self, ctx: &StepContext<'_>, events: &mut StepEvents) {
        let grid = ctx.grid();
        let peers = ctx.peers();
        let available = self
            .known_stations
            .iter()
            .copied()
            .filter(|s| !station_occupied(grid, &peers, *s));
        let Some((goal, _)) = nearest_station(grid.space(), self.coord, available) else {
            self.stall(ctx, events);
            return;
        };
        let path = find_path(grid.space(), self.coord, goal, |c| grid.has_obstacle(c));
        if path.is_empty() {
            events.push(AgentEvent::NoPathFound { goal });
            self.stall(ctx, events);
            return;
        }
        self.pending_path = path.into();
    }

    /// No station can be reached this tick.
    fn stall(&mut self, ctx: &StepContext<'_>, events: &mut StepEvents) {
        events.push(AgentEvent::NoStationAvailable);
        if ctx.params().variant.is_multi() {
            debug!(agent = %self.id, "waiting for a station");
            self.state = RoombaState::Waiting;
        }
    }

    fn recharge(&mut self, ctx: &StepContext<'_>, events: &mut StepEvents) {
        let params = ctx.params();
        self.battery = self
            .battery
            .saturating_add(params.recharge_rate)
            .min(params.max_battery);
        if self.battery >= params.max_battery {
            self.recharges += 1;
            self.has_to_recharge = false;
            self.state = RoombaState::Idle;
            debug!(agent = %self.id, recharges = self.recharges, "recharge complete");
            events.push(AgentEvent::RechargeComplete);
        }
    }

    fn ready_step(
        &mut self,
        ctx: &mut StepContext<'_>,
        events: &mut StepEvents,
    ) -> Result<(), SpaceError> {
        if ctx.params().variant.is_multi() && !self.recently_exchanged {
            let peers = ctx.peers();
            if let Some(other) = find_peer(ctx.grid(), &peers, self.coord).and_then(|id| peers.get(id)) {
                self.state = RoombaState::Communicating;
                self.absorb(other, ctx.params());
                self.state = RoombaState::Idle;
                debug!(agent = %self.id, with = %other.id(), "exchanged knowledge");
                events.push(AgentEvent::Exchanged { with: other.id() });
                return Ok(());
            }
        }

        if let Some(trash) = ctx.grid().trash_at(self.coord) {
            self.state = RoombaState::Cleaning;
            ctx.grid_mut().remove_entity(trash)?;
            self.cleaned += 1;
            self.known_trash.shift_remove(&self.coord);
            self.state = RoombaState::Idle;
            debug!(agent = %self.id, coord = %self.coord, "cleaned trash");
            events.push(AgentEvent::Cleaned(self.coord));
            return Ok(());
        }

        self.state = RoombaState::CheckObstacles;
        match self.choose_next(ctx, events) {
            Some(next) => {
                self.state = RoombaState::Moving;
                self.move_to(next, ctx, events)
            }
            None => {
                self.state = RoombaState::Idle;
                Ok(())
            }
        }
    }

    /// Pick the next cell to explore.
    ///
    /// Priority: neighbour with trash, remembered trash, unvisited
    /// neighbour, nearest reachable unvisited cell, then (single-agent)
    /// nearest reachable trash, then any open neighbour.
    fn choose_next(&mut self, ctx: &mut StepContext<'_>, events: &mut StepEvents) -> Option<Coord> {
        let grid = ctx.grid();
        let open: SmallVec<[Coord; 8]> = grid
            .neighbours(self.coord)
            .into_iter()
            .filter(|c| !grid.has_obstacle(*c))
            .collect();

        if ctx.params().variant.is_multi() {
            discover_stations(self, grid, &open);
        }

        let with_trash: SmallVec<[Coord; 8]> = open
            .iter()
            .copied()
            .filter(|c| grid.trash_at(*c).is_some())
            .collect();
        if let Some(&next) = with_trash.choose(ctx.rng()) {
            return Some(next);
        }

        if let Some(target) = self.known_trash.pop() {
            let grid = ctx.grid();
            let path = find_path(grid.space(), self.coord, target, |c| grid.has_obstacle(c));
            if let Some(&next) = path.first() {
                return Some(next);
            }
            events.push(AgentEvent::NoPathFound { goal: target });
            return open.choose(ctx.rng()).copied();
        }

        let unvisited: SmallVec<[Coord; 8]> = open
            .iter()
            .copied()
            .filter(|c| !self.visited.contains(c))
            .collect();
        if let Some(&next) = unvisited.choose(ctx.rng()) {
            return Some(next);
        }

        let grid = ctx.grid();
        let blocked = |c: Coord| grid.has_obstacle(c);
        let mut path = nearest_matching(grid.space(), self.coord, blocked, |c| {
            !self.visited.contains(&c)
        });
        if path.is_empty() && !ctx.params().variant.is_multi() {
            path = nearest_matching(grid.space(), self.coord, blocked, |c| {
                grid.trash_at(c).is_some()
            });
        }
        if let Some(&next) = path.first() {
            return Some(next);
        }
        open.choose(ctx.rng()).copied()
    }

    // ── Movement ────────────────────────────────────────────────

    fn move_to(
        &mut self,
        next: Coord,
        ctx: &mut StepContext<'_>,
        events: &mut StepEvents,
    ) -> Result<(), SpaceError> {
        let heading_to_station = self.has_to_recharge && self.known_stations.contains(&next);
        if heading_to_station && station_occupied(ctx.grid(), &ctx.peers(), next) {
            self.state = RoombaState::Waiting;
            debug!(agent = %self.id, station = %next, "station occupied");
            events.push(AgentEvent::NoStationAvailable);
            return Ok(());
        }

        ctx.grid_mut().move_entity(self.entity, next)?;
        self.coord = next;
        self.visited.insert(next);
        self.steps += 1;
        ctx.grid_mut().mark_explored(next);

        if heading_to_station {
            // Nobody can have started recharging here since the check above.
            self.pending_path.clear();
            self.start_recharging();
        } else {
            self.state = RoombaState::Idle;
        }
        Ok(())
    }

    fn start_recharging(&mut self) {
        debug!(agent = %self.id, coord = %self.coord, battery = self.battery, "recharging");
        self.state = RoombaState::Recharging;
    }
}
