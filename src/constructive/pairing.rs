//! Pairing half-routes into closed depot tours.
//!
//! # Algorithm
//!
//! Half-routes are taken in order. Each unpaired one (the outbound) looks at
//! the tails of all other unpaired half-routes and picks the nearest to its
//! own tail. The closed tour is the outbound as built, followed by the
//! partner (the inbound) reversed, so the tour leaves the depot along one
//! half and returns along the other.
//!
//! # Complexity
//!
//! O(k²) where k = number of half-routes.

use std::collections::BTreeSet;

use super::half_routes::HalfRoutes;
use super::selector::{Eligibility, NearestNeighborSelector};
use crate::config::UnmatchedPolicy;
use crate::error::{Result, RoutingError};
use crate::models::{Node, Route};

/// Pairs half-routes into closed tours, two half-routes per tour.
///
/// The tour label is the outbound label followed by the inbound label. When
/// every remaining partner is still at the depot (a depot-only half-route),
/// the first of them is used. An odd half-route left over at the end is
/// handled according to `unmatched`.
///
/// # Errors
///
/// [`RoutingError::UnmatchedRoute`] under [`UnmatchedPolicy::Reject`] when
/// the half-route count is odd.
///
/// # Examples
///
/// ```
/// use u_pairing::constructive::{build_initial_routes, merge_routes};
/// use u_pairing::models::Node;
/// use u_pairing::UnmatchedPolicy;
///
/// let customers = vec![
///     Node::new(1, 1.0, 0.0),
///     Node::new(2, 2.0, 0.0),
///     Node::new(3, 3.0, 0.0),
/// ];
/// let half = build_initial_routes(&customers, 1).unwrap();
/// let tours = merge_routes(&half, UnmatchedPolicy::Reject).unwrap();
/// assert_eq!(tours.len(), 1);
/// assert_eq!(tours[0].label(), "01");
/// assert_eq!(tours[0].node_ids(), vec![0, 1, 3, 2, 0]);
/// ```
pub fn merge_routes(half_routes: &HalfRoutes, unmatched: UnmatchedPolicy) -> Result<Vec<Route>> {
    let selector = NearestNeighborSelector::new();
    let routes = half_routes.routes();
    let mut unmerged: BTreeSet<usize> = (0..routes.len()).collect();
    let mut tours = Vec::with_capacity(routes.len().div_ceil(2));

    for (outbound_idx, outbound) in routes.iter().enumerate() {
        if !unmerged.remove(&outbound_idx) {
            continue;
        }

        match find_partner(&selector, half_routes, &unmerged, outbound)? {
            Some(inbound_idx) => {
                unmerged.remove(&inbound_idx);
                let tour = splice(outbound, &routes[inbound_idx]);
                log::debug!(
                    "paired half-routes '{}' and '{}' into tour of length {:.3}",
                    outbound.label(),
                    routes[inbound_idx].label(),
                    tour.length()
                );
                tours.push(tour);
            }
            None => match unmatched {
                UnmatchedPolicy::Reject => {
                    return Err(RoutingError::UnmatchedRoute {
                        label: outbound.label().to_string(),
                    });
                }
                UnmatchedPolicy::CloseAlone => {
                    log::warn!(
                        "half-route '{}' has no partner; closing it back to the depot",
                        outbound.label()
                    );
                    tours.push(close_alone(outbound));
                }
            },
        }
    }

    Ok(tours)
}

/// Index of the unmerged half-route whose tail is nearest to `outbound`'s
/// tail, or `None` if no unmerged half-route is left.
fn find_partner(
    selector: &NearestNeighborSelector,
    half_routes: &HalfRoutes,
    unmerged: &BTreeSet<usize>,
    outbound: &Route,
) -> Result<Option<usize>> {
    if unmerged.is_empty() {
        return Ok(None);
    }
    let routes = half_routes.routes();
    let tail = outbound.last_node().copied().unwrap_or_else(Node::depot);
    let endpoints = unmerged.iter().filter_map(|&idx| routes[idx].last_node());

    match selector.select(&tail, endpoints, Eligibility::Any) {
        Ok(endpoint) => half_routes
            .locate(endpoint.id())
            .map(|slot| Some(slot.route))
            .ok_or_else(|| {
                RoutingError::invalid_input(format!(
                    "endpoint {} is not held by any half-route",
                    endpoint.id()
                ))
            }),
        // Only depot tails remain.
        Err(RoutingError::NoEligibleCandidate { .. }) => Ok(unmerged
            .iter()
            .copied()
            .find(|&idx| routes[idx].is_depot_only())),
        Err(e) => Err(e),
    }
}

/// `outbound` followed by `inbound` reversed.
fn splice(outbound: &Route, inbound: &Route) -> Route {
    let mut nodes = Vec::with_capacity(outbound.len() + inbound.len());
    nodes.extend_from_slice(outbound.nodes());
    nodes.extend(inbound.reversed_nodes());
    Route::with_nodes(format!("{}{}", outbound.label(), inbound.label()), nodes)
}

/// `route` closed by a direct leg back to the depot.
fn close_alone(route: &Route) -> Route {
    let mut nodes = route.nodes().to_vec();
    nodes.push(Node::depot());
    Route::with_nodes(route.label(), nodes)
}
