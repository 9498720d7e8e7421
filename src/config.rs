//! Run configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// What to do with a half-route left without a partner.
///
/// Only reachable when an odd number of half-routes is paired, which
/// [`build_initial_routes`](crate::constructive::build_initial_routes)
/// never produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedPolicy {
    /// Emit the leftover as its own tour, closed straight back to the depot.
    #[default]
    CloseAlone,
    /// Fail with [`RoutingError::UnmatchedRoute`].
    Reject,
}

/// Fleet and pairing settings for [`solve`](crate::solve).
///
/// # Examples
///
/// ```
/// use u_pairing::{RoutingConfig, UnmatchedPolicy};
///
/// let config = RoutingConfig::new(2).with_unmatched_policy(UnmatchedPolicy::Reject);
/// assert_eq!(config.vehicle_count(), 2);
/// assert_eq!(config.initial_route_count(), 4);
/// assert!(config.validate(5).is_ok());
/// assert!(config.validate(1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    vehicle_count: usize,
    unmatched_policy: UnmatchedPolicy,
}

impl RoutingConfig {
    /// Fleet size used when none is given.
    pub const DEFAULT_VEHICLE_COUNT: usize = 3;

    /// Creates a configuration for the given fleet size.
    pub fn new(vehicle_count: usize) -> Self {
        Self {
            vehicle_count,
            unmatched_policy: UnmatchedPolicy::default(),
        }
    }

    /// Sets the fleet size.
    pub fn with_vehicle_count(mut self, vehicle_count: usize) -> Self {
        self.vehicle_count = vehicle_count;
        self
    }

    /// Sets the policy for unpaired half-routes.
    pub fn with_unmatched_policy(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched_policy = policy;
        self
    }

    /// Number of vehicles, one closed tour each.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Policy for unpaired half-routes.
    pub fn unmatched_policy(&self) -> UnmatchedPolicy {
        self.unmatched_policy
    }

    /// Number of half-routes built before pairing (twice the fleet).
    pub fn initial_route_count(&self) -> usize {
        self.vehicle_count.saturating_mul(2)
    }

    /// Checks the fleet size against the number of customers.
    pub fn validate(&self, customer_count: usize) -> Result<()> {
        validate_fleet(self.vehicle_count, customer_count)
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VEHICLE_COUNT)
    }
}

/// Rejects an empty fleet and fleets that would leave more than one
/// half-route at the depot.
///
/// Every customer-bearing half-route pairs with another customer-bearing
/// half-route first, so two depot-only halves end up paired together as an
/// empty tour. A single depot-only half-route (`2 * vehicles == customers + 1`)
/// is allowed; it pairs with a customer-bearing one.
pub(crate) fn validate_fleet(vehicle_count: usize, customer_count: usize) -> Result<()> {
    if vehicle_count == 0 {
        return Err(RoutingError::invalid_configuration(
            "vehicle count must be positive",
        ));
    }
    if vehicle_count.saturating_mul(2) > customer_count.saturating_add(1) {
        return Err(RoutingError::invalid_configuration(format!(
            "{vehicle_count} vehicles for {customer_count} customers leaves idle tours"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let c = RoutingConfig::default();
        assert_eq!(c.vehicle_count(), 3);
        assert_eq!(c.initial_route_count(), 6);
        assert_eq!(c.unmatched_policy(), UnmatchedPolicy::CloseAlone);
    }

    #[test]
    fn test_config_builder() {
        let c = RoutingConfig::default()
            .with_vehicle_count(5)
            .with_unmatched_policy(UnmatchedPolicy::Reject);
        assert_eq!(c.vehicle_count(), 5);
        assert_eq!(c.unmatched_policy(), UnmatchedPolicy::Reject);
    }

    #[test]
    fn test_validate_zero_vehicles() {
        let err = RoutingConfig::new(0).validate(10).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_validate_too_many_vehicles() {
        assert!(RoutingConfig::new(3).validate(6).is_ok());
        assert!(RoutingConfig::new(3).validate(5).is_ok());
        let err = RoutingConfig::new(4).validate(3).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_validate_rejects_two_depot_only_half_routes() {
        // 4 half-routes for 2 customers: two stay home and would pair up.
        let err = RoutingConfig::new(2).validate(2).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidConfiguration(_)));
        let err = RoutingConfig::new(3).validate(4).unwrap_err();
        assert!(matches!(err, RoutingError::InvalidConfiguration(_)));
        assert!(RoutingConfig::new(2).validate(3).is_ok());
    }

    #[test]
    fn test_validate_allows_depot_only_half_routes() {
        // 2 half-routes, 1 customer: one half stays at the depot.
        assert!(RoutingConfig::new(1).validate(1).is_ok());
    }

    #[test]
    fn test_config_deserialize() {
        let c: RoutingConfig =
            serde_json::from_str(r#"{"vehicle_count": 4, "unmatched_policy": "reject"}"#)
                .expect("valid config");
        assert_eq!(c.vehicle_count(), 4);
        assert_eq!(c.unmatched_policy(), UnmatchedPolicy::Reject);

        let c: RoutingConfig = serde_json::from_str("{}").expect("defaults");
        assert_eq!(c, RoutingConfig::default());
    }
}
