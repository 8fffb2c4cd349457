//! Askama templates for the web frontend.

use askama::Template;

use crate::catalog::RouteDetail;
use crate::domain::{ItineraryClass, Route};
use crate::planner::{ItinerarySummary, LegSummary, PlanOutcome};

// ============================================================================
// Page Templates
// ============================================================================

/// Home page with the plan form and route list.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub routes: Vec<RouteRowView>,
}

// ============================================================================
// Fragment Templates (AJAX responses)
// ============================================================================

/// Itinerary results fragment.
#[derive(Template)]
#[template(path = "journey_results.html")]
pub struct JourneyResultsTemplate {
    pub start: String,
    pub end: String,
    pub no_travel_needed: bool,
    pub journeys: Vec<JourneyView>,
}

impl JourneyResultsTemplate {
    pub fn from_outcome(start: &str, end: &str, outcome: &PlanOutcome) -> Self {
        Self {
            start: start.to_string(),
            end: end.to_string(),
            no_travel_needed: matches!(outcome, PlanOutcome::NoTravelNeeded),
            journeys: outcome
                .itineraries()
                .iter()
                .map(|i| JourneyView::from_summary(&ItinerarySummary::from(i)))
                .collect(),
        }
    }
}

/// Single route detail fragment.
#[derive(Template)]
#[template(path = "route_detail.html")]
pub struct RouteDetailTemplate {
    pub route: RouteView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A stop along a path, with the time to the next stop.
#[derive(Debug, Clone)]
pub struct StepView {
    pub name: String,
    pub minutes_to_next: Option<u32>,
}

/// Pair each stop with the segment time that follows it.
fn steps(stops: &[String], segment_minutes: &[u32]) -> Vec<StepView> {
    stops
        .iter()
        .enumerate()
        .map(|(i, name)| StepView {
            name: name.clone(),
            minutes_to_next: segment_minutes.get(i).copied().filter(|_| i + 1 < stops.len()),
        })
        .collect()
}

/// Itinerary view model.
#[derive(Debug, Clone)]
pub struct JourneyView {
    pub class_label: String,
    pub total_minutes: u32,
    pub transfers: Vec<String>,
    pub legs: Vec<LegView>,
}

impl JourneyView {
    pub fn from_summary(summary: &ItinerarySummary) -> Self {
        let class_label = match summary.class {
            ItineraryClass::Direct => "Direct",
            ItineraryClass::OneTransfer => "1 transfer",
            ItineraryClass::TwoTransfer => "2 transfers",
        };
        Self {
            class_label: class_label.to_string(),
            total_minutes: summary.total_minutes,
            transfers: summary.transfers.iter().map(|s| s.to_string()).collect(),
            legs: summary.legs.iter().map(LegView::from_summary).collect(),
        }
    }

    pub fn is_direct(&self) -> bool {
        self.transfers.is_empty()
    }
}

/// Leg view model.
#[derive(Debug, Clone)]
pub struct LegView {
    pub route_id: String,
    pub route_name: String,
    pub minutes: u32,
    pub stop_count: usize,
    pub first_bus: String,
    pub last_bus: String,
    pub steps: Vec<StepView>,
}

impl LegView {
    pub fn from_summary(leg: &LegSummary) -> Self {
        let stops: Vec<String> = leg.path.iter().map(|s| s.to_string()).collect();
        Self {
            route_id: leg.route_id.to_string(),
            route_name: leg.route_name.clone(),
            minutes: leg.minutes,
            stop_count: stops.len(),
            first_bus: leg.window.first.to_string(),
            last_bus: leg.window.last.to_string(),
            steps: steps(&stops, &leg.segment_minutes),
        }
    }
}

/// Route detail view model.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub id: String,
    pub name: String,
    pub total_minutes: u32,
    pub first_bus: String,
    pub last_bus: String,
    pub consistent: bool,
    pub steps: Vec<StepView>,
}

impl RouteView {
    pub fn from_detail(detail: &RouteDetail) -> Self {
        let stops: Vec<String> = detail.stops.iter().map(|s| s.to_string()).collect();
        Self {
            id: detail.id.to_string(),
            name: detail.name.clone(),
            total_minutes: detail.total_minutes,
            first_bus: detail.window.first.to_string(),
            last_bus: detail.window.last.to_string(),
            consistent: detail.consistent,
            steps: steps(&stops, &detail.segment_minutes),
        }
    }
}

/// A row in the route list.
#[derive(Debug, Clone)]
pub struct RouteRowView {
    pub id: String,
    pub name: String,
    pub stop_count: usize,
    pub first_stop: String,
    pub last_stop: String,
}

impl RouteRowView {
    pub fn from_route(route: &Route) -> Self {
        let stops = route.stops();
        Self {
            id: route.id().to_string(),
            name: route.name().to_string(),
            stop_count: stops.len(),
            first_stop: stops.first().map(|s| s.to_string()).unwrap_or_default(),
            last_stop: stops.last().map(|s| s.to_string()).unwrap_or_default(),
        }
    }
}
