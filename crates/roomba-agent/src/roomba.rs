//! Per-agent state and memory.

use crate::params::AgentParams;
use crate::state::RoombaState;
use indexmap::IndexSet;
use roomba_core::{AgentId, Coord, EntityId};
use std::collections::VecDeque;

/// A cleaning robot.
///
/// Memory sets are insertion-ordered so that every scan over them is
/// deterministic. `visited` only grows, except by merging more cells in.
#[derive(Clone, Debug)]
pub struct Roomba {
    pub(crate) id: AgentId,
    pub(crate) entity: EntityId,
    pub(crate) coord: Coord,
    pub(crate) battery: u32,
    pub(crate) state: RoombaState,
    pub(crate) active: bool,
    pub(crate) has_to_recharge: bool,
    pub(crate) visited: IndexSet<Coord>,
    pub(crate) known_trash: IndexSet<Coord>,
    pub(crate) known_stations: IndexSet<Coord>,
    pub(crate) pending_path: VecDeque<Coord>,
    pub(crate) distance_to_station: Option<u32>,
    pub(crate) steps: u64,
    pub(crate) cleaned: u64,
    pub(crate) recharges: u64,
    pub(crate) recently_exchanged: bool,
    pub(crate) exchange_cooldown: u32,
}

impl Roomba {
    /// A fresh roomba at `coord` with a full battery.
    ///
    /// `entity` is the handle of its grid occupant. The start cell counts as
    /// visited; stations are not implied and must be added with
    /// [`remember_station`](Self::remember_station).
    pub fn new(id: AgentId, entity: EntityId, coord: Coord, params: &AgentParams) -> Self {
        let mut visited = IndexSet::new();
        visited.insert(coord);
        Self {
            id,
            entity,
            coord,
            battery: params.max_battery,
            state: RoombaState::Idle,
            active: true,
            has_to_recharge: false,
            visited,
            known_trash: IndexSet::new(),
            known_stations: IndexSet::new(),
            pending_path: VecDeque::new(),
            distance_to_station: None,
            steps: 0,
            cleaned: 0,
            recharges: 0,
            recently_exchanged: false,
            exchange_cooldown: 0,
        }
    }

    /// Override the charge, clamped to `max_battery`.
    pub fn set_battery(&mut self, battery: u32, params: &AgentParams) {
        self.battery = battery.min(params.max_battery);
    }

    /// Add a station to this agent's memory.
    pub fn remember_station(&mut self, coord: Coord) -> bool {
        self.known_stations.insert(coord)
    }

    /// Add a trash location to this agent's memory.
    pub fn remember_trash(&mut self, coord: Coord) -> bool {
        self.known_trash.insert(coord)
    }

    /// Merge another agent's visited cells and stations into this one.
    ///
    /// Only `self` changes. Starts the exchange cooldown.
    pub fn absorb(&mut self, other: &Roomba, params: &AgentParams) {
        self.visited.extend(other.visited.iter().copied());
        self.known_stations
            .extend(other.known_stations.iter().copied());
        self.recently_exchanged = true;
        self.exchange_cooldown = params.exchange_cooldown;
    }

    // ── Accessors ───────────────────────────────────────────────

    /// Agent id.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Grid handle of this agent's occupant.
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Current cell.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Remaining charge.
    pub fn battery(&self) -> u32 {
        self.battery
    }

    /// Current controller state.
    pub fn state(&self) -> RoombaState {
        self.state
    }

    /// `false` once the battery has run out.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the agent is committed to recharging.
    pub fn has_to_recharge(&self) -> bool {
        self.has_to_recharge
    }

    /// Cells this agent has visited or learned about from peers.
    pub fn visited(&self) -> &IndexSet<Coord> {
        &self.visited
    }

    /// Trash seen but not yet cleaned.
    pub fn known_trash(&self) -> &IndexSet<Coord> {
        &self.known_trash
    }

    /// Stations this agent knows about.
    pub fn known_stations(&self) -> &IndexSet<Coord> {
        &self.known_stations
    }

    /// Remaining steps of the current return path.
    pub fn pending_path(&self) -> &VecDeque<Coord> {
        &self.pending_path
    }

    /// Chebyshev distance to the nearest known station, as of the last
    /// battery check. `None` when no station is known.
    pub fn distance_to_station(&self) -> Option<u32> {
        self.distance_to_station
    }

    /// Cells moved.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Trash removed.
    pub fn cleaned(&self) -> u64 {
        self.cleaned
    }

    /// Completed recharges.
    pub fn recharges(&self) -> u64 {
        self.recharges
    }

    /// Whether an exchange happened within the cooldown window.
    pub fn recently_exchanged(&self) -> bool {
        self.recently_exchanged
    }

    /// Ticks left before another exchange is allowed.
    pub fn exchange_cooldown(&self) -> u32 {
        self.exchange_cooldown
    }
}
