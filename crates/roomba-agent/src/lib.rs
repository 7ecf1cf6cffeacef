//! Per-agent decision logic for the roomba simulation.
//!
//! A [`Roomba`] is a finite-state controller. Each global tick the driver
//! calls [`Roomba::step`] once with a [`StepContext`] that lends it the
//! shared [`Grid`](roomba_space::Grid), read access to every other agent
//! through [`Peers`], the simulation RNG and the [`AgentParams`].
//!
//! The multi-agent protocol (station discovery, occupancy arbitration and
//! peer knowledge exchange) lives in [`coordination`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod controller;
pub mod coordination;
pub mod event;
pub mod params;
pub mod roomba;
pub mod roster;
pub mod state;

pub use context::StepContext;
pub use event::{AgentEvent, StepEvents};
pub use params::{AgentParams, Variant};
pub use roomba::Roomba;
pub use roster::{Peers, Roster};
pub use state::RoombaState;
