//! Greedy construction of closed depot tours.
//!
//! - [`NearestNeighborSelector`] — Nearest eligible candidate to a reference node
//! - [`build_initial_routes`] — Round-robin nearest-neighbor half-routes, O((n + k)·n)
//! - [`merge_routes`] — Nearest-tail pairing of half-routes into tours, O(k²)

mod half_routes;
mod pairing;
mod selector;

pub use half_routes::{build_initial_routes, HalfRoutes, RoutePosition};
pub use pairing::merge_routes;
pub use selector::{Eligibility, NearestNeighborSelector};
