//! Planar Euclidean distance.

use crate::models::{Node, Point};

/// Straight-line distance between two points.
///
/// # Examples
///
/// ```
/// use u_pairing::distance::euclidean;
/// use u_pairing::models::Point;
///
/// let d = euclidean(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}

/// Sum of distances between consecutive nodes of a path.
///
/// Zero for paths with fewer than two nodes.
pub fn path_length(nodes: &[Node]) -> f64 {
    nodes
        .windows(2)
        .map(|pair| euclidean(pair[0].location(), pair[1].location()))
        .sum()
}
