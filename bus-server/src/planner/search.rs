//! Query front for itinerary planning.
//!
//! Validates the query, short-circuits trivial queries, and runs
//! enumeration and ranking over a catalog snapshot.

use tracing::debug;

use crate::catalog::RouteCatalog;
use crate::domain::{Itinerary, StopName};

use super::config::PlannerConfig;
use super::enumerate::enumerate;
use super::rank::rank_itineraries;

/// Error from itinerary planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Invalid plan request
    #[error("invalid plan request: {0}")]
    InvalidRequest(String),
}

/// Request for an itinerary between two stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub start: StopName,
    pub end: StopName,
}

impl PlanRequest {
    /// Create a request from raw stop names, trimming whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidRequest`] if either name is blank.
    pub fn new(start: &str, end: &str) -> Result<Self, PlanError> {
        let start = StopName::parse(start)
            .map_err(|_| PlanError::InvalidRequest("start stop is required".to_string()))?;
        let end = StopName::parse(end)
            .map_err(|_| PlanError::InvalidRequest("end stop is required".to_string()))?;
        Ok(Self { start, end })
    }
}

/// Result of planning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanOutcome {
    /// Ranked itineraries, best first.
    Found {
        itineraries: Vec<Itinerary>,
        /// Number of candidates before truncation.
        candidates_considered: usize,
    },
    /// Start and end are the same stop.
    NoTravelNeeded,
    /// No itinerary with at most two transfers exists.
    NoRouteFound,
}

impl PlanOutcome {
    /// The ranked itineraries, or an empty slice.
    pub fn itineraries(&self) -> &[Itinerary] {
        match self {
            PlanOutcome::Found { itineraries, .. } => itineraries,
            PlanOutcome::NoTravelNeeded | PlanOutcome::NoRouteFound => &[],
        }
    }
}

/// Itinerary planner over a catalog snapshot.
///
/// Holds no state between queries: the same catalog and request always
/// give the same outcome.
pub struct Planner<'a> {
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Plan itineraries for a request.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_server::catalog::demo_catalog;
    /// use bus_server::planner::{PlanOutcome, PlanRequest, Planner, PlannerConfig};
    ///
    /// let catalog = demo_catalog();
    /// let config = PlannerConfig::default();
    /// let planner = Planner::new(&config);
    ///
    /// let request = PlanRequest::new("火车站", "图书馆").unwrap();
    /// let outcome = planner.plan(&catalog, &request);
    /// assert_eq!(outcome.itineraries()[0].total_minutes(), 9);
    ///
    /// let request = PlanRequest::new("图书馆", "图书馆").unwrap();
    /// assert_eq!(planner.plan(&catalog, &request), PlanOutcome::NoTravelNeeded);
    /// ```
    pub fn plan(&self, catalog: &RouteCatalog, request: &PlanRequest) -> PlanOutcome {
        if request.start == request.end {
            return PlanOutcome::NoTravelNeeded;
        }

        let candidates = enumerate(
            catalog,
            &request.start,
            &request.end,
            self.config.transfer_penalty_mins,
        );
        let candidates_considered = candidates.len();

        if candidates.is_empty() {
            debug!(start = %request.start, end = %request.end, "No route found");
            return PlanOutcome::NoRouteFound;
        }

        let itineraries = rank_itineraries(candidates, self.config.max_results);
        PlanOutcome::Found {
            itineraries,
            candidates_considered,
        }
    }

    /// Validate raw stop names and plan.
    pub fn plan_stops(
        &self,
        catalog: &RouteCatalog,
        start: &str,
        end: &str,
    ) -> Result<PlanOutcome, PlanError> {
        let request = PlanRequest::new(start, end)?;
        Ok(self.plan(catalog, &request))
    }
}
