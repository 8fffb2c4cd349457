//! Itinerary planner using exhaustive transfer enumeration.
//!
//! This module answers: "how do I get from stop A to stop B with at most
//! two changes, and which way is fastest?"
//!
//! Every direct, one-transfer and two-transfer combination over the
//! catalog is enumerated, timed segment by segment, and ranked by total
//! time including a fixed penalty per change.

mod config;
mod enumerate;
mod rank;
mod search;
mod summary;

pub use config::PlannerConfig;
pub use enumerate::enumerate;
pub use rank::rank_itineraries;
pub use search::{PlanError, PlanOutcome, PlanRequest, Planner};
pub use summary::{ItinerarySummary, LegSummary};
