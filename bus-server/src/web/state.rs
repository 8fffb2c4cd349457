//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::{RouteCatalog, SharedCatalog};
use crate::persist::RouteStore;
use crate::planner::PlannerConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Current route catalog
    pub catalog: SharedCatalog,

    /// Itinerary planner configuration
    pub config: Arc<PlannerConfig>,

    /// Where catalog changes are written
    pub store: Arc<RouteStore>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: RouteCatalog, config: PlannerConfig, store: RouteStore) -> Self {
        Self {
            catalog: SharedCatalog::new(catalog),
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }
}
