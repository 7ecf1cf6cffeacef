//! Core types for the roomba simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by every other crate in the
//! workspace: grid coordinates, distance metrics, strongly-typed ids
//! and the tagged entity kind stored per grid occupant.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod entity;
pub mod id;

pub use coord::Coord;
pub use entity::EntityKind;
pub use id::{AgentId, EntityId, TickId};
