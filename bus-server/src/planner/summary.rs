//! Display-agnostic itinerary summaries.
//!
//! These flatten an [`Itinerary`] into plain data for whatever presents it:
//! the JSON API, the HTML fragments, or a test.

use crate::domain::{Itinerary, ItineraryClass, Leg, RouteId, ServiceWindow, StopName};

/// One leg of a summarised itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegSummary {
    pub route_id: RouteId,
    pub route_name: String,
    /// Stops visited, boarding stop first
    pub path: Vec<StopName>,
    /// Time between consecutive stops of `path`
    pub segment_minutes: Vec<u32>,
    pub minutes: u32,
    pub window: ServiceWindow,
}

impl From<&Leg> for LegSummary {
    fn from(leg: &Leg) -> Self {
        let route = leg.route();
        Self {
            route_id: route.id().clone(),
            route_name: route.name().to_string(),
            path: leg.path().to_vec(),
            segment_minutes: leg.segment_minutes(),
            minutes: leg.minutes(),
            window: route.window(),
        }
    }
}

/// A summarised itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItinerarySummary {
    pub class: ItineraryClass,
    pub legs: Vec<LegSummary>,
    pub transfers: Vec<StopName>,
    /// Total time including transfer penalties
    pub total_minutes: u32,
}

impl ItinerarySummary {
    pub fn origin(&self) -> Option<&StopName> {
        self.legs.first().and_then(|l| l.path.first())
    }

    pub fn destination(&self) -> Option<&StopName> {
        self.legs.last().and_then(|l| l.path.last())
    }
}

impl From<&Itinerary> for ItinerarySummary {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            class: itinerary.class(),
            legs: itinerary.legs().into_iter().map(LegSummary::from).collect(),
            transfers: itinerary.transfer_stops().into_iter().cloned().collect(),
            total_minutes: itinerary.total_minutes(),
        }
    }
}
