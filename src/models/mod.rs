//! Domain model types for depot-rooted routing.
//!
//! Points in the plane, customer/depot nodes with explicit visit tracking,
//! routes as ordered node sequences, and the final solution.

mod node;
mod point;
mod route;
mod solution;

pub use node::{validate_customers, Node, NodeId, VisitSet, DEPOT_ID};
pub use point::Point;
pub use route::Route;
pub use solution::{RouteSummary, Solution};
