//! The persisted route record.
//!
//! One JSON object per route:
//!
//! ```json
//! {
//!   "id": "D1",
//!   "name": "D1路",
//!   "stops": ["火车站", "人民广场", "市政府"],
//!   "travelTimes": [3, 4],
//!   "firstBus": "06:00",
//!   "lastBus": "22:30"
//! }
//! ```
//!
//! Older files lack `travelTimes`, `firstBus` and `lastBus`; each falls back
//! to its default. A value of the wrong type reads as absent, so one bad
//! field never fails the rest of the file.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::domain::{DEFAULT_SEGMENT_MINUTES, Route, RouteId, ServiceWindow, StopName};

use super::PersistError;

/// What to do with a `travelTimes` list shorter than the route needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortTimes {
    /// Keep it as written. The route then has inconsistent segment data
    /// and never appears in itineraries.
    Keep,
    /// Pad it with the default segment time.
    Pad,
}

/// A route as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stops: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient_times",
        skip_serializing_if = "Option::is_none"
    )]
    pub travel_times: Option<Vec<i64>>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_bus: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_bus: Option<String>,
}

/// `travelTimes` if it is an array, else absent.
///
/// Entries that are not whole numbers read as 0.
fn lenient_times<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<i64>>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(value
        .as_array()
        .map(|times| times.iter().map(whole_minutes).collect()))
}

fn whole_minutes(value: &Value) -> i64 {
    value
        .as_i64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        })
        .unwrap_or(0)
}

/// A string field, or absent if the value is not a string.
fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

impl RouteRecord {
    pub fn from_route(route: &Route) -> Self {
        let window = route.window();
        Self {
            id: route.id().to_string(),
            name: route.name().to_string(),
            stops: route.stops().iter().map(|s| s.to_string()).collect(),
            travel_times: Some(
                route
                    .segment_minutes()
                    .iter()
                    .map(|&m| i64::from(m))
                    .collect(),
            ),
            first_bus: Some(window.first.to_string()),
            last_bus: Some(window.last.to_string()),
        }
    }

    /// Convert to a route, filling in defaults.
    ///
    /// Absent `travelTimes` become 3 minutes per segment and negative times
    /// become 0. Absent or unparsable service times take the default window.
    ///
    /// Blank stop names are dropped, so a file written by older tools that
    /// kept them verbatim loads with fewer stops than it lists.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::InvalidRecord`] if the id is blank.
    pub fn into_route(self, short_times: ShortTimes) -> Result<Route, PersistError> {
        let id = RouteId::parse(&self.id)
            .map_err(|e| PersistError::InvalidRecord(e.to_string()))?;

        let stops: Vec<StopName> = self
            .stops
            .iter()
            .filter_map(|s| StopName::parse(s).ok())
            .collect();
        if stops.len() != self.stops.len() {
            warn!(route = %id, "Dropped blank stop names from route record");
        }

        let segment_count = stops.len().saturating_sub(1);
        let segment_minutes = match self.travel_times {
            None => vec![DEFAULT_SEGMENT_MINUTES; segment_count],
            Some(times) => {
                let mut minutes: Vec<u32> = times
                    .into_iter()
                    .map(|t| u32::try_from(t.max(0)).unwrap_or(u32::MAX))
                    .collect();
                if short_times == ShortTimes::Pad && minutes.len() < segment_count {
                    minutes.resize(segment_count, DEFAULT_SEGMENT_MINUTES);
                }
                minutes
            }
        };

        let window =
            ServiceWindow::from_hhmm_lenient(self.first_bus.as_deref(), self.last_bus.as_deref());

        let route = Route::from_parts(id, self.name, stops, segment_minutes, window);

        if !route.is_consistent() {
            warn!(
                route = %route.id(),
                stops = route.stops().len(),
                times = route.segment_minutes().len(),
                "Route has inconsistent segment times and will not be planned over"
            );
        }
        if let Some(dup) = route.first_duplicate_stop() {
            warn!(route = %route.id(), stop = %dup, "Route visits a stop more than once");
        }

        Ok(route)
    }
}

/// Convert records to routes, skipping the ones that cannot be converted.
pub fn records_to_routes(records: Vec<RouteRecord>, short_times: ShortTimes) -> Vec<Route> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| match record.into_route(short_times) {
            Ok(route) => Some(route),
            Err(e) => {
                warn!(record = idx, error = %e, "Skipping route record");
                None
            }
        })
        .collect()
}

/// Parse a JSON array of route records.
///
/// Only a document that is not an array is an error. Elements that are not
/// route records are skipped with a warning.
pub fn parse_records(json: &str) -> Result<Vec<RouteRecord>, PersistError> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    Ok(records_from_values(values))
}

/// Read each element as a route record, skipping the ones that are not.
pub fn records_from_values(values: Vec<Value>) -> Vec<RouteRecord> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match RouteRecord::deserialize(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(record = idx, error = %e, "Skipping unreadable route record");
                None
            }
        })
        .collect()
}

/// Records for every route, in catalog order.
pub fn routes_to_records<'a>(routes: impl IntoIterator<Item = &'a Route>) -> Vec<RouteRecord> {
    routes.into_iter().map(RouteRecord::from_route).collect()
}
