//! Roomba: a grid simulation of autonomous cleaning robots.
//!
//! This is the facade crate that re-exports the public API of every
//! sub-crate. Adding `roomba` as a single dependency is enough for most
//! users.
//!
//! # Quick start
//!
//! ```rust
//! use roomba::prelude::*;
//!
//! let mut sim = ScenarioBuilder::new(8, 8)
//!     .station(Coord::new(1, 1))
//!     .roomba(Coord::new(1, 1))
//!     .trash(Coord::new(5, 5))
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! let summary = sim.run().unwrap();
//! assert_eq!(summary.termination, Some(TerminationReason::TrashExhausted));
//! assert_eq!(summary.trash_collected_pct(), 100.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `roomba-core` | Coordinates, ids, entity kinds |
//! | [`space`] | `roomba-space` | Moore lattice and the occupancy grid |
//! | [`path`] | `roomba-path` | A* and nearest-match BFS |
//! | [`agent`] | `roomba-agent` | Controller state machine and coordination |
//! | [`engine`] | `roomba-engine` | Configuration, population and the driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, ids and entity kinds (`roomba-core`).
pub use roomba_core as types;

/// Spatial topology and occupancy (`roomba-space`).
///
/// [`space::Square8`] is the Moore lattice; [`space::Grid`] owns every
/// placed entity.
pub use roomba_space as space;

/// Stateless search (`roomba-path`).
///
/// [`path::find_path`] for point-to-point routes and
/// [`path::nearest_matching`] for "closest cell such that".
pub use roomba_path as path;

/// Per-agent controller and coordination protocol (`roomba-agent`).
pub use roomba_agent as agent;

/// Simulation driver (`roomba-engine`).
///
/// [`engine::Simulation`] runs worlds built from a [`engine::SimConfig`]
/// or an [`engine::ScenarioBuilder`].
pub use roomba_engine as engine;

/// Common imports for typical usage.
///
/// ```rust
/// use roomba::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use roomba_core::{AgentId, Coord, EntityKind, TickId};

    // Space
    pub use roomba_space::{Grid, Space, SpaceError, Square8};

    // Agents
    pub use roomba_agent::{AgentEvent, AgentParams, Roomba, RoombaState, Variant};

    // Engine
    pub use roomba_engine::{
        AgentSummary, ConfigError, RoombaSpec, ScenarioBuilder, SimConfig, Simulation,
        TerminationReason, TickError, TickSummary,
    };
}
