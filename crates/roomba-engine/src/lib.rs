//! Simulation driver for roomba cleaning worlds.
//!
//! [`Simulation`] owns the grid, the roster of agents and the seeded RNG.
//! Each [`tick`](Simulation::tick) shuffles the active agents, steps them
//! one after another against the shared grid, then checks whether all
//! trash is gone or the tick budget is spent.
//!
//! Worlds come from a validated [`SimConfig`] (random population) or a
//! [`ScenarioBuilder`] (hand-placed entities).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod hash;
pub mod metrics;
mod populate;
pub mod scenario;
pub mod simulation;

pub use config::{ConfigError, SimConfig};
pub use metrics::{AgentSummary, EventCounts, TickSummary};
pub use scenario::{RoombaSpec, ScenarioBuilder};
pub use simulation::{Simulation, TerminationReason, TickError};
