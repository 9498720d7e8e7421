//! # u-pairing
//!
//! Greedy single-depot vehicle routing: nearest-neighbor construction of
//! depot-rooted half-routes, then nearest-tail pairing of half-routes into
//! one closed tour per vehicle.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Node, Route, Solution)
//! - [`distance`] — Euclidean distance and path length
//! - [`constructive`] — Nearest-neighbor selection, half-route construction, pairing
//! - [`config`] — Fleet size and unmatched half-route policy
//! - [`report`] — Consumers of finished solutions
//! - [`error`] — Error type shared by all fallible operations
//!
//! No local search is applied; results are a construction baseline.

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod models;
pub mod report;
mod solver;

pub use config::{RoutingConfig, UnmatchedPolicy};
pub use error::{Result, RoutingError};
pub use solver::solve;
