//! Web layer for the bus route planner.
//!
//! Provides HTTP endpoints for planning itineraries and maintaining the
//! route catalog.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
