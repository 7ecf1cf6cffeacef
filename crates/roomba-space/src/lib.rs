//! Spatial data structures for the roomba simulation.
//!
//! This crate defines the [`Space`] trait, the topology abstraction the
//! pathfinder searches over, the [`Square8`] Moore lattice backend, and
//! the [`Grid`] occupancy index that owns every entity placed on the map.
//!
//! # Ownership
//!
//! The grid is the single authority on who stands where. Agents hold
//! [`EntityId`](roomba_core::EntityId) handles and coordinates, never
//! references into the grid, and every mutation goes through the grid's
//! methods.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
mod grid2d;
pub mod space;
pub mod square8;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use grid::{Entity, Grid};
pub use space::Space;
pub use square8::Square8;
