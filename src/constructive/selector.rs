//! Nearest-neighbor candidate selection.

use crate::error::{Result, RoutingError};
use crate::models::{Node, VisitSet};

/// Which candidates survive the visit filter.
#[derive(Debug, Clone, Copy)]
pub enum Eligibility<'a> {
    /// Visited and unvisited candidates alike.
    Any,
    /// Only candidates not yet in the given set.
    Unvisited(&'a VisitSet),
}

/// Picks the candidate closest to a reference node.
///
/// Candidates are filtered in order: the depot is skipped, a candidate equal
/// to the reference is skipped, and under [`Eligibility::Unvisited`] visited
/// candidates are skipped. Among the survivors the nearest wins; on equal
/// distance the first one in iteration order wins.
///
/// # Examples
///
/// ```
/// use u_pairing::constructive::{Eligibility, NearestNeighborSelector};
/// use u_pairing::models::Node;
///
/// let candidates = vec![
///     Node::depot(),
///     Node::new(1, 10.0, 0.0),
///     Node::new(2, 1.0, 1.0),
/// ];
/// let nearest = NearestNeighborSelector::new()
///     .select(&Node::depot(), &candidates, Eligibility::Any)
///     .unwrap();
/// assert_eq!(nearest.id(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborSelector;

impl NearestNeighborSelector {
    /// Creates a selector.
    pub fn new() -> Self {
        Self
    }

    /// Returns the nearest eligible candidate to `reference`.
    ///
    /// Fails with [`RoutingError::NoEligibleCandidate`] when filtering leaves
    /// nothing.
    pub fn select<'a, I>(
        &self,
        reference: &Node,
        candidates: I,
        eligibility: Eligibility<'_>,
    ) -> Result<&'a Node>
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let mut best: Option<(&'a Node, f64)> = None;
        for candidate in candidates {
            if candidate.is_depot() || candidate == reference {
                continue;
            }
            if let Eligibility::Unvisited(visited) = eligibility {
                if visited.is_visited(candidate.id()) {
                    continue;
                }
            }
            let d = reference.distance_to(candidate);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((candidate, d)),
            }
        }

        best.map(|(node, _)| node)
            .ok_or(RoutingError::NoEligibleCandidate {
                reference: reference.id(),
            })
    }
}
