//! Shared test fixtures for roomba development.
//!
//! Grid constructors for pathfinding and controller tests plus a seeded
//! RNG helper. See [`fixtures`] for the individual builders.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{enclosed_goal_grid, open_grid, seeded_rng, walled_grid};
