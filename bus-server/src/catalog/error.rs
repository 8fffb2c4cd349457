//! Catalog error types.

use crate::domain::RouteId;

/// Errors from looking up or mutating the route catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No route has the requested identifier
    #[error("route not found: {0}")]
    NotFound(String),

    /// A route with this identifier already exists
    #[error("route {0} already exists")]
    DuplicateId(RouteId),
}
