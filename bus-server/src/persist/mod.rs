//! JSON persistence of the route catalog.
//!
//! Reads and writes the routes file, and converts between the on-disk
//! record format and domain routes for import and export.

mod error;
mod record;
mod store;

pub use error::PersistError;
pub use record::{
    RouteRecord, ShortTimes, parse_records, records_from_values, records_to_routes,
    routes_to_records,
};
pub use store::{DEFAULT_ROUTES_FILE, RouteStore, export_json};
