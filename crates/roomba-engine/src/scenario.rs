//! Hand-placed worlds for tests and demos.
//!
//! Unlike [`SimConfig`](crate::SimConfig), nothing is random at build time:
//! every obstacle, trash, station and roomba goes exactly where it is
//! asked. The seed only drives tick order and tie-breaks.
//!
//! ```
//! use roomba_core::Coord;
//! use roomba_engine::ScenarioBuilder;
//!
//! let sim = ScenarioBuilder::new(8, 8)
//!     .station(Coord::new(1, 1))
//!     .roomba(Coord::new(1, 1))
//!     .trash(Coord::new(5, 5))
//!     .build()
//!     .unwrap();
//! assert_eq!(sim.summary().trash_remaining, 1);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use roomba_agent::{AgentParams, Roster, Variant};
use roomba_core::{Coord, EntityKind};
use roomba_space::{Grid, Space, Square8};

use crate::config::ConfigError;
use crate::populate::{place_walls, spawn};
use crate::simulation::Simulation;

/// A roomba to be placed by a [`ScenarioBuilder`].
#[derive(Clone, Debug, PartialEq)]
pub struct RoombaSpec {
    /// Start cell.
    pub start: Coord,
    /// Starting charge. `None` means full.
    pub battery: Option<u32>,
    /// Stations known from the start, besides one on `start`.
    pub known_stations: Vec<Coord>,
    /// Trash known from the start.
    pub known_trash: Vec<Coord>,
}

impl RoombaSpec {
    /// A full roomba on `start`.
    pub fn at(start: Coord) -> Self {
        Self {
            start,
            battery: None,
            known_stations: Vec::new(),
            known_trash: Vec::new(),
        }
    }

    /// Override the starting charge.
    pub fn battery(mut self, battery: u32) -> Self {
        self.battery = Some(battery);
        self
    }

    /// Add a station to the roomba's memory.
    pub fn knows_station(mut self, coord: Coord) -> Self {
        self.known_stations.push(coord);
        self
    }

    /// Add a trash location to the roomba's memory.
    pub fn knows_trash(mut self, coord: Coord) -> Self {
        self.known_trash.push(coord);
        self
    }
}

/// Builder for a [`Simulation`] with explicit entity placement.
#[derive(Clone, Debug)]
pub struct ScenarioBuilder {
    width: u32,
    height: u32,
    walled: bool,
    seed: u64,
    max_ticks: u64,
    params: Option<AgentParams>,
    obstacles: Vec<Coord>,
    trash: Vec<Coord>,
    stations: Vec<Coord>,
    roombas: Vec<RoombaSpec>,
}

impl ScenarioBuilder {
    /// An empty, unwalled `width x height` world.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            walled: false,
            seed: 0,
            max_ticks: 1000,
            params: None,
            obstacles: Vec::new(),
            trash: Vec::new(),
            stations: Vec::new(),
            roombas: Vec::new(),
        }
    }

    /// Surround the grid with obstacles.
    pub fn walled(mut self, walled: bool) -> Self {
        self.walled = walled;
        self
    }

    /// RNG seed for tick order and tie-breaks.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Tick budget.
    pub fn max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Agent tunables. Defaults follow the roomba count: one roomba uses
    /// the single-agent rules, more use the multi-agent rules.
    pub fn params(mut self, params: AgentParams) -> Self {
        self.params = Some(params);
        self
    }

    /// Shorthand for [`params`](Self::params) with variant defaults.
    pub fn variant(self, variant: Variant) -> Self {
        self.params(AgentParams::for_variant(variant))
    }

    /// Place an obstacle.
    pub fn obstacle(mut self, coord: Coord) -> Self {
        self.obstacles.push(coord);
        self
    }

    /// Place a trash entity.
    pub fn trash(mut self, coord: Coord) -> Self {
        self.trash.push(coord);
        self
    }

    /// Place a charging station.
    pub fn station(mut self, coord: Coord) -> Self {
        self.stations.push(coord);
        self
    }

    /// Place a full roomba.
    pub fn roomba(self, start: Coord) -> Self {
        self.roomba_spec(RoombaSpec::at(start))
    }

    /// Place a customised roomba.
    pub fn roomba_spec(mut self, spec: RoombaSpec) -> Self {
        self.roombas.push(spec);
        self
    }

    /// Validate placements and build the simulation.
    ///
    /// Roombas receive ids in the order they were added.
    pub fn build(self) -> Result<Simulation, ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.roombas.is_empty() {
            return Err(ConfigError::NoAgents);
        }
        let params = self.params.unwrap_or_else(|| {
            if self.roombas.len() == 1 {
                AgentParams::single()
            } else {
                AgentParams::multi()
            }
        });
        if params.variant == Variant::Single && self.roombas.len() > 1 {
            return Err(ConfigError::TooManyAgents {
                variant: params.variant,
                requested: self.roombas.len() as u32,
            });
        }

        let space = Square8::new(self.width, self.height)?;
        let mut grid = Grid::new(space);
        if self.walled {
            place_walls(&mut grid)?;
        }
        for &c in &self.obstacles {
            grid.place(EntityKind::Obstacle, c)?;
        }
        for &c in &self.stations {
            grid.place(EntityKind::Station, c)?;
        }
        for &c in &self.trash {
            grid.place(EntityKind::Trash, c)?;
        }

        let mut roster = Roster::new();
        for spec in &self.roombas {
            let start = spec.start;
            if !grid.space().contains(start) {
                return Err(ConfigError::StartOutOfBounds { start });
            }
            if grid.has_obstacle(start) || grid.roombas_at(start).next().is_some() {
                return Err(ConfigError::StartOccupied { start });
            }
            let id = spawn(&mut grid, &mut roster, start, &params)?;
            if let Some(roomba) = roster.get_mut(id) {
                if let Some(battery) = spec.battery {
                    roomba.set_battery(battery, &params);
                }
                for &s in &spec.known_stations {
                    roomba.remember_station(s);
                }
                for &t in &spec.known_trash {
                    roomba.remember_trash(t);
                }
            }
        }

        Ok(Simulation::from_parts(
            grid,
            roster,
            params,
            ChaCha8Rng::seed_from_u64(self.seed),
            self.max_ticks,
        ))
    }
}
