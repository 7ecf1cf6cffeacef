//! Stateless grid search for the roomba simulation.
//!
//! Two searches are provided, both generic over any [`Space`](roomba_space::Space)
//! and parameterised by an `is_blocked` predicate so callers decide what
//! counts as an obstacle:
//!
//! - [`find_path`]: A* with uniform step cost and a Manhattan heuristic.
//! - [`nearest_matching`]: breadth-first search for the closest cell that
//!   satisfies a predicate, followed by an A* path to it.
//!
//! Paths exclude the start cell and include the goal. An empty path means
//! either "already there" or "no path"; callers treat both as a signal to
//! fall back to another action.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod bfs;

pub use astar::find_path;
pub use bfs::nearest_matching;
