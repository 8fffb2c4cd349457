//! Domain types for the bus route planner.
//!
//! This module contains the core domain model: validated stop names and
//! route identifiers, routes with their segment timing, and the legs and
//! itineraries the planner builds from them. Value types enforce their
//! invariants at construction time.

mod draft;
mod error;
mod itinerary;
mod leg;
mod route;
mod route_id;
mod stop;
mod time;

pub use draft::RouteDraft;
pub use error::DomainError;
pub use itinerary::{Itinerary, ItineraryClass, ItineraryKind};
pub use leg::Leg;
pub use route::{DEFAULT_SEGMENT_MINUTES, Route};
pub use route_id::{InvalidRouteId, RouteId};
pub use stop::{InvalidStopName, StopName};
pub use time::{ServiceTime, ServiceWindow, TimeError};
