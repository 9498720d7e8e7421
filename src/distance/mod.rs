//! Distance computations.
//!
//! All routing in this crate is over the plane, so Euclidean distance is the
//! only metric.

mod euclidean;

pub use euclidean::{euclidean, path_length};
