//! End-to-end construction: half-routes, pairing, solution.

use crate::config::RoutingConfig;
use crate::constructive::{build_initial_routes, merge_routes};
use crate::error::Result;
use crate::models::{Node, Solution};

/// Builds one closed depot tour per vehicle covering every customer.
///
/// The depot is implicit at the origin with id 0; `customers` must not
/// contain it. Fleet size and customers are checked by
/// [`build_initial_routes`], which fails before any route is built. Output routes are in pairing order. The same input always
/// yields the same routes.
///
/// # Examples
///
/// ```
/// use u_pairing::models::Node;
/// use u_pairing::{solve, RoutingConfig};
///
/// let customers = vec![Node::new(1, 3.0, 4.0)];
/// let solution = solve(&customers, &RoutingConfig::new(1)).unwrap();
/// assert_eq!(solution.num_routes(), 1);
/// assert_eq!(solution.routes()[0].node_ids(), vec![0, 1, 0]);
/// assert!((solution.total_length() - 10.0).abs() < 1e-9);
/// ```
pub fn solve(customers: &[Node], config: &RoutingConfig) -> Result<Solution> {
    let half_routes = build_initial_routes(customers, config.vehicle_count())?;
    let tours = merge_routes(&half_routes, config.unmatched_policy())?;
    let solution = Solution::new(tours);

    log::info!(
        "built {} tours over {} customers, total length {:.3}",
        solution.num_routes(),
        solution.num_served(),
        solution.total_length()
    );
    Ok(solution)
}
