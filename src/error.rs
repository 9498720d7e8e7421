//! Error types for half-route construction and pairing.

use thiserror::Error;

use crate::models::NodeId;

/// Errors reported while building or pairing routes.
///
/// None of these are transient: the algorithm is deterministic, so a failed
/// run fails the same way on retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// Fleet sizing does not fit the input (e.g. zero vehicles).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Customer or half-route data breaks the data model.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Every candidate was filtered out of a nearest-neighbor search.
    #[error("no eligible candidate near node {reference}")]
    NoEligibleCandidate {
        /// Id of the node the search started from.
        reference: NodeId,
    },
    /// A half-route was left over with no partner to pair with.
    #[error("half-route '{label}' has no partner to pair with")]
    UnmatchedRoute {
        /// Label of the leftover half-route.
        label: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;

impl RoutingError {
    /// Builds an [`RoutingError::InvalidConfiguration`].
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Builds an [`RoutingError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
