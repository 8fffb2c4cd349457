//! Bus leg type.
//!
//! A `Leg` is one continuous ride on a single route. It uses `Arc<Route>`
//! so that the enumerator can build many candidates over the same route
//! without copying stop lists.

use std::sync::Arc;

use super::{DomainError, Route, StopName};

/// One ride on one route, between two different stops.
///
/// # Invariants
///
/// - `path` reads from the boarding stop to the alighting stop and has at
///   least two stops
/// - `minutes > 0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    route: Arc<Route>,
    path: Vec<StopName>,
    minutes: u32,
}

impl Leg {
    /// Construct a leg, computing its path and travel time on `route`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - Either stop is not on the route
    /// - The route's segment data is inconsistent
    /// - The leg takes no time (boarding and alighting at the same stop)
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_server::domain::{Leg, Route, RouteId, StopName};
    /// use std::sync::Arc;
    ///
    /// let stop = |s: &str| StopName::parse(s).unwrap();
    /// let route = Arc::new(Route::new(
    ///     RouteId::parse("D1").unwrap(),
    ///     "D1路".into(),
    ///     vec![stop("火车站"), stop("人民广场"), stop("市政府")],
    /// ));
    ///
    /// let leg = Leg::new(route.clone(), &stop("市政府"), &stop("火车站")).unwrap();
    /// assert_eq!(leg.minutes(), 6);
    /// assert_eq!(leg.board_stop(), &stop("市政府"));
    /// assert_eq!(leg.alight_stop(), &stop("火车站"));
    ///
    /// assert!(Leg::new(route, &stop("市政府"), &stop("市政府")).is_err());
    /// ```
    pub fn new(route: Arc<Route>, from: &StopName, to: &StopName) -> Result<Self, DomainError> {
        let path = route.path_between(from, to);
        if path.is_empty() {
            // Report whichever stop is missing
            let missing = if route.contains(from) { to } else { from };
            return Err(DomainError::StopNotOnRoute {
                route: route.id().clone(),
                stop: missing.clone(),
            });
        }

        let minutes = route.travel_time(from, to)?;
        if minutes == 0 || path.len() < 2 {
            return Err(DomainError::EmptyLeg(from.clone(), to.clone()));
        }

        Ok(Leg {
            route,
            path,
            minutes,
        })
    }

    /// Returns the route this leg rides.
    pub fn route(&self) -> &Arc<Route> {
        &self.route
    }

    /// Returns the stops visited, boarding stop first.
    pub fn path(&self) -> &[StopName] {
        &self.path
    }

    /// Returns the leg's travel time in minutes (always positive).
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns the boarding stop.
    pub fn board_stop(&self) -> &StopName {
        // Safe: path has at least two stops
        &self.path[0]
    }

    /// Returns the alighting stop.
    pub fn alight_stop(&self) -> &StopName {
        &self.path[self.path.len() - 1]
    }

    /// Per-segment times along the path, in travel order.
    ///
    /// Each entry is the time between consecutive stops of [`Leg::path`].
    pub fn segment_minutes(&self) -> Vec<u32> {
        self.path
            .windows(2)
            .map(|w| self.route.travel_time(&w[0], &w[1]).unwrap_or(0))
            .collect()
    }
}
