//! Round-robin nearest-neighbor construction of depot-rooted half-routes.
//!
//! # Algorithm
//!
//! Twice as many half-routes as vehicles are seeded at the depot. In each
//! round every route that is still growing takes the unvisited customer
//! nearest to its current tail. A route that finds nothing left stops for
//! good; the others still get their turn. Taking turns spreads customers
//! roughly evenly over the routes.
//!
//! # Complexity
//!
//! One O(n) selection per assigned customer plus one failed selection per
//! half-route: O((n + k)·n), where n = customers and k = half-routes. At most
//! n rounds.

use std::collections::HashMap;

use super::selector::{Eligibility, NearestNeighborSelector};
use crate::config::validate_fleet;
use crate::error::{Result, RoutingError};
use crate::models::{validate_customers, Node, NodeId, Route, VisitSet};

/// Where a customer sits within a set of half-routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePosition {
    /// Index of the owning route.
    pub route: usize,
    /// Index of the node within that route (0 is the depot).
    pub position: usize,
}

/// Depot-rooted half-routes plus a customer → position index.
///
/// The index is kept in step with the routes as they grow, so finding the
/// route that owns a given endpoint needs no scan.
#[derive(Debug, Clone, Default)]
pub struct HalfRoutes {
    routes: Vec<Route>,
    locator: HashMap<NodeId, RoutePosition>,
}

impl HalfRoutes {
    /// `count` depot-only routes labeled by index.
    fn seeded(count: usize) -> Self {
        Self {
            routes: (0..count)
                .map(|i| Route::from_depot(i.to_string()))
                .collect(),
            locator: HashMap::new(),
        }
    }

    /// Indexes externally built half-routes.
    ///
    /// Each route must start at the depot, visit it nowhere else, and no
    /// customer may appear twice across all routes.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_pairing::constructive::HalfRoutes;
    /// use u_pairing::models::{Node, Route};
    ///
    /// let routes = vec![
    ///     Route::with_nodes("a", vec![Node::depot(), Node::new(1, 1.0, 0.0)]),
    ///     Route::from_depot("b"),
    /// ];
    /// let half = HalfRoutes::from_routes(routes).unwrap();
    /// assert_eq!(half.locate(1).map(|p| p.route), Some(0));
    /// ```
    pub fn from_routes(routes: Vec<Route>) -> Result<Self> {
        let mut locator = HashMap::new();
        for (route_idx, route) in routes.iter().enumerate() {
            if !route.first_node().is_some_and(Node::is_depot) {
                return Err(RoutingError::invalid_input(format!(
                    "half-route '{}' must start at the depot",
                    route.label()
                )));
            }
            for (position, node) in route.nodes().iter().enumerate().skip(1) {
                if node.is_depot() {
                    return Err(RoutingError::invalid_input(format!(
                        "half-route '{}' returns to the depot",
                        route.label()
                    )));
                }
                let slot = RoutePosition {
                    route: route_idx,
                    position,
                };
                if locator.insert(node.id(), slot).is_some() {
                    return Err(RoutingError::invalid_input(format!(
                        "customer {} appears more than once",
                        node.id()
                    )));
                }
            }
        }
        Ok(Self { routes, locator })
    }

    fn push(&mut self, route_idx: usize, node: Node) {
        let route = &mut self.routes[route_idx];
        self.locator.insert(
            node.id(),
            RoutePosition {
                route: route_idx,
                position: route.len(),
            },
        );
        route.push(node);
    }

    fn tail(&self, route_idx: usize) -> Node {
        self.routes[route_idx]
            .last_node()
            .copied()
            .unwrap_or_else(Node::depot)
    }

    /// The half-routes, in creation order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of half-routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if there are no half-routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Position of a customer, if any route holds it.
    pub fn locate(&self, id: NodeId) -> Option<RoutePosition> {
        self.locator.get(&id).copied()
    }

    /// Consumes the set, returning the routes.
    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }
}

/// Builds `2 * vehicle_count` half-routes covering every customer.
///
/// # Errors
///
/// - [`RoutingError::InvalidConfiguration`] for zero vehicles, or a fleet
///   whose half-routes outnumber customers by more than one.
/// - [`RoutingError::InvalidInput`] for a customer using the depot id, a
///   duplicate id, or a non-finite coordinate.
///
/// # Examples
///
/// ```
/// use u_pairing::constructive::build_initial_routes;
/// use u_pairing::models::Node;
///
/// let customers = vec![
///     Node::new(1, 1.0, 0.0),
///     Node::new(2, 2.0, 0.0),
///     Node::new(3, 3.0, 0.0),
/// ];
/// let half = build_initial_routes(&customers, 1).unwrap();
/// assert_eq!(half.len(), 2);
/// assert_eq!(half.routes()[0].node_ids(), vec![0, 1, 3]);
/// assert_eq!(half.routes()[1].node_ids(), vec![0, 2]);
/// ```
pub fn build_initial_routes(customers: &[Node], vehicle_count: usize) -> Result<HalfRoutes> {
    validate_fleet(vehicle_count, customers.len())?;
    validate_customers(customers)?;

    let selector = NearestNeighborSelector::new();
    let mut half_routes = HalfRoutes::seeded(vehicle_count * 2);
    let mut visited = VisitSet::with_capacity(customers.len());
    let mut growing = vec![true; half_routes.len()];
    let mut round = 0usize;

    while visited.len() < customers.len() {
        round += 1;
        let mut progressed = false;

        for route_idx in 0..half_routes.len() {
            if !growing[route_idx] {
                continue;
            }
            let tail = half_routes.tail(route_idx);
            match selector.select(&tail, customers, Eligibility::Unvisited(&visited)) {
                Ok(next) => {
                    let next = *next;
                    visited.mark(next.id());
                    half_routes.push(route_idx, next);
                    progressed = true;
                }
                Err(RoutingError::NoEligibleCandidate { .. }) => growing[route_idx] = false,
                Err(e) => return Err(e),
            }
        }

        log::debug!(
            "construction round {round}: {}/{} customers assigned",
            visited.len(),
            customers.len()
        );

        // A stalled round means every customer is already taken.
        if !progressed {
            break;
        }
    }

    Ok(half_routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cross() -> Vec<Node> {
        vec![
            Node::new(1, 10.0, 0.0),
            Node::new(2, 0.0, 10.0),
            Node::new(3, -10.0, 0.0),
            Node::new(4, 0.0, -10.0),
        ]
    }

    #[test]
    fn test_cross_one_node_per_route() {
        let half = build_initial_routes(&cross(), 2).expect("valid");
        assert_eq!(half.len(), 4);
        let ids: Vec<Vec<NodeId>> = half.routes().iter().map(Route::node_ids).collect();
        assert_eq!(ids, vec![vec![0, 1], vec![0, 2], vec![0, 3], vec![0, 4]]);
        let labels: Vec<&str> = half.routes().iter().map(Route::label).collect();
        assert_eq!(labels, vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn test_round_robin_on_a_line() {
        let customers = vec![
            Node::new(1, 1.0, 0.0),
            Node::new(2, 2.0, 0.0),
            Node::new(3, 3.0, 0.0),
        ];
        let half = build_initial_routes(&customers, 1).expect("valid");
        // Round 1: route 0 takes 1, route 1 takes 2. Round 2: route 0 takes 3.
        assert_eq!(half.routes()[0].node_ids(), vec![0, 1, 3]);
        assert_eq!(half.routes()[1].node_ids(), vec![0, 2]);
    }

    #[test]
    fn test_every_customer_assigned_once() {
        let customers: Vec<Node> = (1..=11)
            .map(|i| Node::new(i, (i * 7 % 5) as f64, (i * 3 % 4) as f64 - 2.0))
            .collect();
        let half = build_initial_routes(&customers, 2).expect("valid");
        let mut ids: Vec<NodeId> = half
            .routes()
            .iter()
            .flat_map(Route::customer_ids)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=11).collect::<Vec<_>>());
        for route in half.routes() {
            assert_eq!(route.first_node().map(Node::id), Some(0));
        }
    }

    #[test]
    fn test_depot_only_half_route_tolerated() {
        let customers = vec![Node::new(1, 3.0, 4.0)];
        let half = build_initial_routes(&customers, 1).expect("valid");
        assert_eq!(half.routes()[0].node_ids(), vec![0, 1]);
        assert!(half.routes()[1].is_depot_only());
    }

    #[test]
    fn test_locator_tracks_growth() {
        let customers = vec![
            Node::new(1, 1.0, 0.0),
            Node::new(2, 2.0, 0.0),
            Node::new(3, 3.0, 0.0),
        ];
        let half = build_initial_routes(&customers, 1).expect("valid");
        assert_eq!(
            half.locate(3),
            Some(RoutePosition {
                route: 0,
                position: 2
            })
        );
        assert_eq!(
            half.locate(2),
            Some(RoutePosition {
                route: 1,
                position: 1
            })
        );
        assert_eq!(half.locate(0), None);
        assert_eq!(half.locate(99), None);
    }

    #[test]
    fn test_invalid_fleet() {
        let err = build_initial_routes(&cross(), 0).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidConfiguration(_)));
        let err = build_initial_routes(&cross(), 5).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidConfiguration(_)));
        let err = build_initial_routes(&[], 1).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_invalid_customers() {
        let customers = vec![Node::new(1, 1.0, 0.0), Node::new(1, 2.0, 0.0)];
        let err = build_initial_routes(&customers, 1).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidInput(_)));
    }

    #[test]
    fn test_from_routes_rejects_bad_shapes() {
        let no_depot = vec![Route::with_nodes("a", vec![Node::new(1, 1.0, 0.0)])];
        assert!(HalfRoutes::from_routes(no_depot).is_err());

        let empty = vec![Route::new("a")];
        assert!(HalfRoutes::from_routes(empty).is_err());

        let closed = vec![Route::with_nodes(
            "a",
            vec![Node::depot(), Node::new(1, 1.0, 0.0), Node::depot()],
        )];
        assert!(HalfRoutes::from_routes(closed).is_err());

        let shared = vec![
            Route::with_nodes("a", vec![Node::depot(), Node::new(1, 1.0, 0.0)]),
            Route::with_nodes("b", vec![Node::depot(), Node::new(1, 1.0, 0.0)]),
        ];
        let err = HalfRoutes::from_routes(shared).unwrap_err();
        assert_eq!(err, RoutingError::invalid_input("customer 1 appears more than once"));
    }
}
