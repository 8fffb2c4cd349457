//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from API/IO errors.

use super::{RouteId, StopName};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A named stop is absent from a route's stop sequence
    #[error("stop {stop} is not on route {route}")]
    StopNotOnRoute { route: RouteId, stop: StopName },

    /// Segment time count does not match `stops - 1`
    #[error("route {route} has {times} segment times for {stops} stops")]
    InconsistentSegmentData {
        route: RouteId,
        stops: usize,
        times: usize,
    },

    /// A leg that boards and alights at the same stop
    #[error("leg from {0} to {1} does not move")]
    EmptyLeg(StopName, StopName),

    /// Consecutive legs don't meet at a shared stop
    #[error("legs do not connect: {0} is not {1}")]
    LegsNotConnected(StopName, StopName),

    /// Route failed validation when built from user input
    #[error("invalid route: {0}")]
    InvalidRoute(String),

    /// A stop appears twice within one route
    #[error("stop {0} appears more than once on the route")]
    DuplicateStop(StopName),
}
