//! The route catalog.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::warn;

use crate::domain::{Route, RouteId, StopName};

use super::{CatalogError, RouteDetail};

/// Default cap on stop suggestions.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 50;

/// How imported routes combine with the existing catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Discard every existing route first
    Replace,
    /// Keep existing routes; imported routes with a known id replace the
    /// existing one in place, the rest are appended
    #[default]
    Append,
}

/// What an import did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub added: usize,
    pub replaced: usize,
}

/// An ordered collection of routes with unique identifiers.
///
/// Iteration order is insertion order, and the planner's tie-breaking
/// depends on it. Routes are held in `Arc` so snapshots and legs share
/// them without copying.
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    routes: Vec<Arc<Route>>,
}

impl RouteCatalog {
    /// Build a catalog, keeping the first route for each identifier.
    pub fn new(routes: Vec<Route>) -> Self {
        let mut catalog = Self::default();
        for route in routes {
            if catalog.position(route.id().as_str()).is_some() {
                warn!(route = %route.id(), "Skipping route with duplicate id");
                continue;
            }
            catalog.routes.push(Arc::new(route));
        }
        catalog
    }

    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Look up a route by exact identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if no route has this identifier.
    pub fn find_by_id(&self, id: &str) -> Result<&Arc<Route>, CatalogError> {
        self.position(id)
            .map(|idx| &self.routes[idx])
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Full detail of a route, for presentation.
    pub fn detail(&self, id: &str) -> Result<RouteDetail, CatalogError> {
        self.find_by_id(id).map(|r| RouteDetail::from_route(r))
    }

    /// Append a new route.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if the identifier is taken.
    pub fn add(&mut self, route: Route) -> Result<(), CatalogError> {
        if self.position(route.id().as_str()).is_some() {
            return Err(CatalogError::DuplicateId(route.id().clone()));
        }
        self.routes.push(Arc::new(route));
        Ok(())
    }

    /// Replace the route with identifier `id`, keeping its position.
    ///
    /// The replacement may carry a different identifier (an edit that
    /// renames the route), as long as it does not collide with another route.
    pub fn replace(&mut self, id: &str, route: Route) -> Result<Arc<Route>, CatalogError> {
        let idx = self
            .position(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        if let Some(other) = self.position(route.id().as_str())
            && other != idx
        {
            return Err(CatalogError::DuplicateId(route.id().clone()));
        }

        Ok(std::mem::replace(&mut self.routes[idx], Arc::new(route)))
    }

    /// Remove the route with identifier `id`.
    pub fn remove(&mut self, id: &str) -> Result<Arc<Route>, CatalogError> {
        let idx = self
            .position(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        Ok(self.routes.remove(idx))
    }

    /// Merge imported routes into the catalog.
    ///
    /// Within the imported batch, a later route with the same identifier
    /// as an earlier one replaces it.
    pub fn import(&mut self, routes: Vec<Route>, mode: ImportMode) -> ImportSummary {
        if mode == ImportMode::Replace {
            self.routes.clear();
        }

        let mut summary = ImportSummary::default();
        for route in routes {
            match self.position(route.id().as_str()) {
                Some(idx) => {
                    self.routes[idx] = Arc::new(route);
                    summary.replaced += 1;
                }
                None => {
                    self.routes.push(Arc::new(route));
                    summary.added += 1;
                }
            }
        }
        summary
    }

    /// Every stop on every route, sorted and deduplicated.
    pub fn all_stops(&self) -> Vec<StopName> {
        self.routes
            .iter()
            .flat_map(|r| r.stops().iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Stops whose names contain `text`, ignoring case.
    ///
    /// Returns at most `limit` stops in sorted order. Blank text matches
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_server::catalog::demo_catalog;
    ///
    /// let catalog = demo_catalog();
    /// let found = catalog.suggest_stops("火车", 50);
    /// let names: Vec<&str> = found.iter().map(|s| s.as_str()).collect();
    /// assert_eq!(names, vec!["火车东站", "火车站"]);
    /// ```
    pub fn suggest_stops(&self, text: &str, limit: usize) -> Vec<StopName> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.all_stops()
            .into_iter()
            .filter(|s| s.as_str().to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    /// Identifiers of every route, in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &RouteId> {
        self.routes.iter().map(|r| r.id())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.id().as_str() == id)
    }
}
