//! Planner configuration.

/// Configuration parameters for itinerary planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Minutes added to an itinerary for each change of bus.
    pub transfer_penalty_mins: u32,

    /// Maximum number of itineraries to return.
    pub max_results: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(transfer_penalty_mins: u32, max_results: usize) -> Self {
        Self {
            transfer_penalty_mins,
            max_results,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            transfer_penalty_mins: 3,
            max_results: 5,
        }
    }
}
