//! Route type.

use serde::{Deserialize, Serialize};

use super::{Node, NodeId};
use crate::distance::path_length;

/// An ordered sequence of nodes with a label.
///
/// Half-routes start at the depot and grow outward. Closed routes start and
/// end at the depot. The length is derived from the node order and never
/// cached.
///
/// # Examples
///
/// ```
/// use u_pairing::models::{Node, Route};
///
/// let mut route = Route::from_depot("0");
/// route.push(Node::new(1, 3.0, 4.0));
/// route.push(Node::depot());
/// assert_eq!(route.node_ids(), vec![0, 1, 0]);
/// assert!((route.length() - 10.0).abs() < 1e-10);
/// assert!(route.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    label: String,
    nodes: Vec<Node>,
}

impl Route {
    /// Creates an empty route.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            nodes: Vec::new(),
        }
    }

    /// Creates a route whose only node is the depot.
    pub fn from_depot(label: impl Into<String>) -> Self {
        Self::with_nodes(label, vec![Node::depot()])
    }

    /// Creates a route from an explicit node sequence.
    pub fn with_nodes(label: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            label: label.into(),
            nodes,
        }
    }

    /// Appends a node to the end of this route.
    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Route label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The ordered node sequence.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// First node, if any.
    pub fn first_node(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// Last node, if any.
    pub fn last_node(&self) -> Option<&Node> {
        self.nodes.last()
    }

    /// Number of nodes, depot occurrences included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the route holds no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in order, depot occurrences included.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(Node::id).collect()
    }

    /// Customer ids in order, depot excluded.
    pub fn customer_ids(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| !n.is_depot())
            .map(Node::id)
            .collect()
    }

    /// Returns `true` if every node is the depot.
    pub fn is_depot_only(&self) -> bool {
        self.nodes.iter().all(Node::is_depot)
    }

    /// Returns `true` if the route starts and ends at the depot.
    pub fn is_closed(&self) -> bool {
        self.nodes.len() >= 2
            && self.first_node().is_some_and(Node::is_depot)
            && self.last_node().is_some_and(Node::is_depot)
    }

    /// The node sequence in reverse order. Leaves this route untouched.
    pub fn reversed_nodes(&self) -> Vec<Node> {
        self.nodes.iter().rev().copied().collect()
    }

    /// Total Euclidean length over consecutive nodes.
    pub fn length(&self) -> f64 {
        path_length(&self.nodes)
    }
}
