//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalog::{ImportSummary, RouteDetail};
use crate::domain::{Route, RouteDraft};
use crate::planner::{ItinerarySummary, LegSummary, PlanOutcome};

/// Query for stop name suggestions.
#[derive(Debug, Deserialize)]
pub struct StopSearchRequest {
    /// Text the stop name must contain
    #[serde(default)]
    pub q: String,

    /// Maximum number of suggestions
    pub limit: Option<usize>,
}

/// Response for stop suggestions.
#[derive(Debug, Serialize, Deserialize)]
pub struct StopSearchResponse {
    pub stops: Vec<String>,
}

/// Query to plan an itinerary.
#[derive(Debug, Deserialize)]
pub struct PlanQuery {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
}

/// Outcome of planning, as a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Found,
    NoTravelNeeded,
    NoRouteFound,
}

/// Response for itinerary planning.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    pub status: PlanStatus,

    /// Itinerary options, best first
    pub itineraries: Vec<ItineraryResult>,

    /// Number of candidates before ranking and truncation
    pub candidates_considered: usize,
}

/// An itinerary option.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItineraryResult {
    /// "direct", "one_transfer" or "two_transfer"
    pub class: String,

    /// Total minutes including transfer penalties
    pub total_minutes: u32,

    /// Stops where the rider changes bus
    pub transfers: Vec<String>,

    pub legs: Vec<LegResult>,
}

/// One leg of an itinerary.
#[derive(Debug, Serialize, Deserialize)]
pub struct LegResult {
    pub route_id: String,
    pub route_name: String,

    /// Stops visited, boarding stop first
    pub path: Vec<String>,

    /// Minutes between consecutive stops of `path`
    pub segment_minutes: Vec<u32>,

    pub minutes: u32,
    pub first_bus: String,
    pub last_bus: String,
}

/// Full detail of one route.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteDetailResult {
    pub id: String,
    pub name: String,
    pub stops: Vec<String>,
    pub travel_times: Vec<u32>,
    pub total_minutes: u32,
    pub first_bus: String,
    pub last_bus: String,

    /// False if the route's segment data is malformed
    pub consistent: bool,
}

/// Response for listing routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteListResponse {
    pub routes: Vec<RouteDetailResult>,
}

/// Body for creating or editing a route.
#[derive(Debug, Deserialize)]
pub struct RouteInput {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stops: Vec<String>,
    #[serde(alias = "travelTimes")]
    pub travel_times: Option<Vec<i64>>,
    #[serde(alias = "firstBus")]
    pub first_bus: Option<String>,
    #[serde(alias = "lastBus")]
    pub last_bus: Option<String>,
}

/// Query for importing routes.
#[derive(Debug, Deserialize)]
pub struct ImportQuery {
    /// "replace" or "append" (the default)
    pub mode: Option<String>,
}

/// Response for importing routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImportResponse {
    pub added: usize,
    pub replaced: usize,

    /// Routes in the catalog after the import
    pub total: usize,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl PlanResponse {
    /// Create from a planning outcome.
    pub fn from_outcome(outcome: &PlanOutcome) -> Self {
        match outcome {
            PlanOutcome::Found {
                itineraries,
                candidates_considered,
            } => Self {
                status: PlanStatus::Found,
                itineraries: itineraries
                    .iter()
                    .map(|i| ItineraryResult::from_summary(&ItinerarySummary::from(i)))
                    .collect(),
                candidates_considered: *candidates_considered,
            },
            PlanOutcome::NoTravelNeeded => Self::empty(PlanStatus::NoTravelNeeded),
            PlanOutcome::NoRouteFound => Self::empty(PlanStatus::NoRouteFound),
        }
    }

    fn empty(status: PlanStatus) -> Self {
        Self {
            status,
            itineraries: Vec::new(),
            candidates_considered: 0,
        }
    }
}

impl ItineraryResult {
    /// Create from an itinerary summary.
    pub fn from_summary(summary: &ItinerarySummary) -> Self {
        Self {
            class: summary.class.as_str().to_string(),
            total_minutes: summary.total_minutes,
            transfers: summary.transfers.iter().map(|s| s.to_string()).collect(),
            legs: summary.legs.iter().map(LegResult::from_summary).collect(),
        }
    }
}

impl LegResult {
    /// Create from a leg summary.
    pub fn from_summary(leg: &LegSummary) -> Self {
        Self {
            route_id: leg.route_id.to_string(),
            route_name: leg.route_name.clone(),
            path: leg.path.iter().map(|s| s.to_string()).collect(),
            segment_minutes: leg.segment_minutes.clone(),
            minutes: leg.minutes,
            first_bus: leg.window.first.to_string(),
            last_bus: leg.window.last.to_string(),
        }
    }
}

impl RouteDetailResult {
    /// Create from a route detail.
    pub fn from_detail(detail: &RouteDetail) -> Self {
        Self {
            id: detail.id.to_string(),
            name: detail.name.clone(),
            stops: detail.stops.iter().map(|s| s.to_string()).collect(),
            travel_times: detail.segment_minutes.clone(),
            total_minutes: detail.total_minutes,
            first_bus: detail.window.first.to_string(),
            last_bus: detail.window.last.to_string(),
            consistent: detail.consistent,
        }
    }

    /// Create from a domain route.
    pub fn from_route(route: &Route) -> Self {
        Self::from_detail(&RouteDetail::from_route(route))
    }
}

impl From<RouteInput> for RouteDraft {
    fn from(input: RouteInput) -> Self {
        RouteDraft {
            id: input.id,
            name: input.name,
            stops: input.stops,
            segment_minutes: input.travel_times,
            first_bus: input.first_bus,
            last_bus: input.last_bus,
        }
    }
}

impl ImportResponse {
    pub fn new(summary: ImportSummary, total: usize) -> Self {
        Self {
            added: summary.added,
            replaced: summary.replaced,
            total,
        }
    }
}
