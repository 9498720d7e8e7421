//! Solution and report record types.

use serde::{Deserialize, Serialize};

use super::{NodeId, Route};

/// Per-route record handed to report consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Route label (concatenated half-route labels).
    pub label: String,
    /// Node ids in visiting order, depot occurrences included.
    pub node_ids: Vec<NodeId>,
    /// Total Euclidean length.
    pub length: f64,
}

impl From<&Route> for RouteSummary {
    fn from(route: &Route) -> Self {
        Self {
            label: route.label().to_string(),
            node_ids: route.node_ids(),
            length: route.length(),
        }
    }
}

/// The final closed routes, in the order the pairing step produced them.
///
/// # Examples
///
/// ```
/// use u_pairing::models::{Node, Route, Solution};
///
/// let route = Route::with_nodes(
///     "01",
///     vec![Node::depot(), Node::new(1, 3.0, 4.0), Node::depot()],
/// );
/// let sol = Solution::new(vec![route]);
/// assert_eq!(sol.num_routes(), 1);
/// assert_eq!(sol.num_served(), 1);
/// assert!((sol.total_length() - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Wraps a set of closed routes.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Consumes the solution, returning its routes.
    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }

    /// Returns the number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of customers served (across all routes).
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.customer_ids().len()).sum()
    }

    /// Total length across all routes.
    pub fn total_length(&self) -> f64 {
        self.routes.iter().map(Route::length).sum()
    }

    /// One summary per route, in route order.
    pub fn summaries(&self) -> Vec<RouteSummary> {
        self.routes.iter().map(RouteSummary::from).collect()
    }

    /// Serializes the route summaries as a JSON array.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.summaries())
    }
}
