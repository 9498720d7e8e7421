//! Customer/depot nodes and visit tracking.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Point;
use crate::error::{Result, RoutingError};

/// Node identifier. `0` is reserved for the depot.
pub type NodeId = usize;

/// Identifier of the depot node.
pub const DEPOT_ID: NodeId = 0;

/// A located, identified node: a customer, or the depot.
///
/// Two nodes are equal when their id and both coordinates match.
///
/// # Examples
///
/// ```
/// use u_pairing::models::{Node, DEPOT_ID};
///
/// let depot = Node::depot();
/// assert_eq!(depot.id(), DEPOT_ID);
/// assert!(depot.is_depot());
///
/// let c = Node::new(1, 3.0, 4.0);
/// assert!((c.distance_to(&depot) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    location: Point,
}

impl Node {
    /// Creates a node at `(x, y)`.
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self {
            id,
            location: Point::new(x, y),
        }
    }

    /// The depot: id 0 at the origin.
    pub fn depot() -> Self {
        Self {
            id: DEPOT_ID,
            location: Point::ORIGIN,
        }
    }

    /// Node ID (0 = depot).
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Location of this node.
    pub fn location(&self) -> &Point {
        &self.location
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.location.x()
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.location.y()
    }

    /// Returns `true` for the reserved depot id.
    pub fn is_depot(&self) -> bool {
        self.id == DEPOT_ID
    }

    /// Euclidean distance to another node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        self.location.distance_to(&other.location)
    }
}

/// The set of customers already assigned to some route.
///
/// Ids are inserted once and never removed.
#[derive(Debug, Clone, Default)]
pub struct VisitSet {
    visited: HashSet<NodeId>,
}

impl VisitSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set sized for `capacity` customers.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            visited: HashSet::with_capacity(capacity),
        }
    }

    /// Marks a node visited. Returns `false` if it already was.
    pub fn mark(&mut self, id: NodeId) -> bool {
        self.visited.insert(id)
    }

    /// Returns `true` if the node has been visited.
    pub fn is_visited(&self, id: NodeId) -> bool {
        self.visited.contains(&id)
    }

    /// Number of visited nodes.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Returns `true` if nothing has been visited yet.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}

/// Checks that a customer list is usable as routing input.
///
/// Rejects the reserved depot id, duplicate ids and non-finite coordinates.
pub fn validate_customers(customers: &[Node]) -> Result<()> {
    let mut seen = HashSet::with_capacity(customers.len());
    for node in customers {
        if node.is_depot() {
            return Err(RoutingError::invalid_input(format!(
                "customer id {DEPOT_ID} is reserved for the depot"
            )));
        }
        if !node.location().is_finite() {
            return Err(RoutingError::invalid_input(format!(
                "customer {} has a non-finite coordinate",
                node.id()
            )));
        }
        if !seen.insert(node.id()) {
            return Err(RoutingError::invalid_input(format!(
                "duplicate customer id {}",
                node.id()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depot() {
        let d = Node::depot();
        assert_eq!(d.id(), 0);
        assert_eq!(d.x(), 0.0);
        assert_eq!(d.y(), 0.0);
        assert!(d.is_depot());
        assert!(!Node::new(3, 0.0, 0.0).is_depot());
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Node::new(1, 2.0, 3.0), Node::new(1, 2.0, 3.0));
        assert_ne!(Node::new(1, 2.0, 3.0), Node::new(2, 2.0, 3.0));
        assert_ne!(Node::new(1, 2.0, 3.0), Node::new(1, 2.0, 4.0));
    }

    #[test]
    fn test_visit_set_marks_once() {
        let mut v = VisitSet::new();
        assert!(v.is_empty());
        assert!(v.mark(4));
        assert!(!v.mark(4));
        assert!(v.is_visited(4));
        assert!(!v.is_visited(5));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn test_validate_customers_ok() {
        let customers = vec![Node::new(1, 1.0, 1.0), Node::new(2, -1.0, 1.0)];
        assert!(validate_customers(&customers).is_ok());
        assert!(validate_customers(&[]).is_ok());
    }

    #[test]
    fn test_validate_customers_rejects_depot_id() {
        let err = validate_customers(&[Node::new(0, 1.0, 1.0)]).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidInput(_)));
    }

    #[test]
    fn test_validate_customers_rejects_duplicates() {
        let customers = vec![Node::new(1, 1.0, 1.0), Node::new(1, 5.0, 5.0)];
        let err = validate_customers(&customers).unwrap_err();
        assert_eq!(err, RoutingError::invalid_input("duplicate customer id 1"));
    }

    #[test]
    fn test_validate_customers_rejects_nan() {
        let err = validate_customers(&[Node::new(1, f64::NAN, 0.0)]).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidInput(_)));
    }
}
