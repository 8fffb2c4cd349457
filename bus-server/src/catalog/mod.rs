//! Route catalog: storage, lookup and indexing of routes.
//!
//! The planner reads an immutable [`RouteCatalog`] snapshot per query.
//! Mutation goes through [`SharedCatalog`], which swaps in a new snapshot
//! under a single writer.

mod demo;
mod detail;
mod error;
mod index;
mod routes;
mod shared;

pub use demo::demo_catalog;
pub use detail::RouteDetail;
pub use error::CatalogError;
pub use index::StopIndex;
pub use routes::{DEFAULT_SUGGESTION_LIMIT, ImportMode, ImportSummary, RouteCatalog};
pub use shared::SharedCatalog;
