//! Stop → routes index.
//!
//! Built once per catalog snapshot so the enumerator can ask "which routes
//! serve this stop?" and "does route r serve this stop?" without scanning
//! every route's stop list.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Route, StopName};

use super::RouteCatalog;

/// Index from stop name to the positions, in catalog order, of the routes
/// that serve it.
#[derive(Debug)]
pub struct StopIndex<'a> {
    catalog: &'a RouteCatalog,
    serving: HashMap<&'a StopName, Vec<usize>>,
}

impl<'a> StopIndex<'a> {
    pub fn build(catalog: &'a RouteCatalog) -> Self {
        let mut serving: HashMap<&StopName, Vec<usize>> = HashMap::new();

        for (route_idx, route) in catalog.routes().iter().enumerate() {
            for stop in route.stops() {
                let entry = serving.entry(stop).or_default();
                // A route that repeats a stop is listed once
                if entry.last() != Some(&route_idx) {
                    entry.push(route_idx);
                }
            }
        }

        Self { catalog, serving }
    }

    /// Positions of the routes serving `stop`, ascending.
    pub fn route_indices(&self, stop: &StopName) -> &[usize] {
        self.serving.get(stop).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Routes serving `stop`, in catalog order.
    pub fn routes_serving(&self, stop: &StopName) -> impl Iterator<Item = (usize, &'a Arc<Route>)> + '_ {
        let routes = self.catalog.routes();
        self.route_indices(stop)
            .iter()
            .map(move |&idx| (idx, &routes[idx]))
    }

    /// Returns true if the route at `route_idx` serves `stop`.
    pub fn serves(&self, route_idx: usize, stop: &StopName) -> bool {
        self.route_indices(stop).binary_search(&route_idx).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::demo_catalog;

    fn stop(s: &str) -> StopName {
        StopName::parse(s).unwrap()
    }

    #[test]
    fn routes_serving_in_catalog_order() {
        let catalog = demo_catalog();
        let index = StopIndex::build(&catalog);

        let ids: Vec<&str> = index
            .routes_serving(&stop("人民广场"))
            .map(|(_, r)| r.id().as_str())
            .collect();
        assert_eq!(ids, vec!["D1", "101"]);

        let ids: Vec<&str> = index
            .routes_serving(&stop("软件园"))
            .map(|(_, r)| r.id().as_str())
            .collect();
        assert_eq!(ids, vec!["202", "303"]);
    }

    #[test]
    fn unknown_stop_has_no_routes() {
        let catalog = demo_catalog();
        let index = StopIndex::build(&catalog);
        assert!(index.route_indices(&stop("月球基地")).is_empty());
        assert!(!index.serves(0, &stop("月球基地")));
    }

    #[test]
    fn serves_matches_route_contains() {
        let catalog = demo_catalog();
        let index = StopIndex::build(&catalog);
        for (idx, route) in catalog.routes().iter().enumerate() {
            for s in catalog.all_stops() {
                assert_eq!(index.serves(idx, &s), route.contains(&s));
            }
        }
    }

    #[test]
    fn repeated_stop_listed_once() {
        use crate::domain::{Route, RouteId};
        let catalog = RouteCatalog::new(vec![Route::new(
            RouteId::parse("L").unwrap(),
            "Loop".into(),
            vec![stop("A"), stop("B"), stop("A")],
        )]);
        let index = StopIndex::build(&catalog);
        assert_eq!(index.route_indices(&stop("A")), &[0]);
        assert_eq!(index.route_indices(&stop("B")), &[0]);
    }
}
