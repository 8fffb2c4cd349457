//! Shared, swappable catalog snapshots.

use std::sync::Arc;
use tokio::sync::RwLock;

use super::RouteCatalog;

/// Thread-safe handle to the current catalog.
///
/// Readers take an `Arc<RouteCatalog>` snapshot that never changes under
/// them. Writers are serialized: each update clones the current catalog,
/// mutates the clone, and swaps it in.
#[derive(Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Arc<RouteCatalog>>>,
}

impl SharedCatalog {
    pub fn new(catalog: RouteCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// The current catalog.
    pub async fn snapshot(&self) -> Arc<RouteCatalog> {
        let guard = self.inner.read().await;
        Arc::clone(&guard)
    }

    /// Apply a mutation, run `commit` on the result, then publish it.
    ///
    /// Both run under the write lock, so commits happen in the same order
    /// as updates. If either fails, nothing is published and readers keep
    /// the previous catalog.
    pub async fn update_and_commit<T, E>(
        &self,
        mutate: impl FnOnce(&mut RouteCatalog) -> Result<T, E>,
        commit: impl FnOnce(&RouteCatalog) -> Result<(), E>,
    ) -> Result<T, E> {
        let mut guard = self.inner.write().await;
        let mut next = RouteCatalog::clone(&guard);
        let value = mutate(&mut next)?;
        commit(&next)?;
        *guard = Arc::new(next);
        Ok(value)
    }
}
