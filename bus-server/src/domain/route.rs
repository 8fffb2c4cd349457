//! Bus route type.
//!
//! A `Route` is a linear sequence of stops with a travel time for each
//! segment between consecutive stops. Routes are direction-symmetric: a bus
//! can be ridden in either stop order, and each segment costs the same
//! both ways.

use super::{DomainError, RouteId, ServiceWindow, StopName};

/// Segment time used when none is given (minutes).
pub const DEFAULT_SEGMENT_MINUTES: u32 = 3;

/// A bus route.
///
/// # Invariants
///
/// Routes built from user input via [`super::RouteDraft`] always satisfy
/// `segment_minutes.len() == stops.len() - 1` and contain no duplicate stop.
/// Routes loaded from persisted data may not: such routes are kept, and the
/// timing methods report [`DomainError::InconsistentSegmentData`] instead of
/// reading out of bounds. With duplicate stops, lookups use the first
/// occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    id: RouteId,
    name: String,
    stops: Vec<StopName>,
    segment_minutes: Vec<u32>,
    window: ServiceWindow,
}

impl Route {
    /// Create a route with every segment defaulted to 3 minutes and the
    /// default service window.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_server::domain::{Route, RouteId, StopName};
    ///
    /// let stops: Vec<StopName> = ["火车站", "人民广场", "市政府"]
    ///     .iter()
    ///     .map(|s| StopName::parse(s).unwrap())
    ///     .collect();
    /// let route = Route::new(RouteId::parse("D1").unwrap(), "D1路".into(), stops);
    ///
    /// assert_eq!(route.segment_minutes(), &[3, 3]);
    /// assert_eq!(route.total_minutes(), 6);
    /// ```
    pub fn new(id: RouteId, name: String, stops: Vec<StopName>) -> Self {
        let segment_minutes = vec![DEFAULT_SEGMENT_MINUTES; stops.len().saturating_sub(1)];
        Self {
            id,
            name,
            stops,
            segment_minutes,
            window: ServiceWindow::default(),
        }
    }

    /// Create a route from all of its parts, without validation.
    ///
    /// Used for persisted data, which may be inconsistent.
    pub fn from_parts(
        id: RouteId,
        name: String,
        stops: Vec<StopName>,
        segment_minutes: Vec<u32>,
        window: ServiceWindow,
    ) -> Self {
        Self {
            id,
            name,
            stops,
            segment_minutes,
            window,
        }
    }

    /// Replace the service window.
    pub fn with_window(mut self, window: ServiceWindow) -> Self {
        self.window = window;
        self
    }

    /// Replace the per-segment travel times.
    pub fn with_segment_minutes(mut self, segment_minutes: Vec<u32>) -> Self {
        self.segment_minutes = segment_minutes;
        self
    }

    pub fn id(&self) -> &RouteId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stops(&self) -> &[StopName] {
        &self.stops
    }

    pub fn segment_minutes(&self) -> &[u32] {
        &self.segment_minutes
    }

    pub fn window(&self) -> ServiceWindow {
        self.window
    }

    /// Returns the index of the first occurrence of `stop`.
    pub fn index_of(&self, stop: &StopName) -> Option<usize> {
        self.stops.iter().position(|s| s == stop)
    }

    /// Returns true if the route serves `stop`.
    pub fn contains(&self, stop: &StopName) -> bool {
        self.stops.contains(stop)
    }

    /// Returns true if there is exactly one segment time per segment.
    pub fn is_consistent(&self) -> bool {
        self.segment_minutes.len() + 1 == self.stops.len()
    }

    /// Returns the first stop that appears more than once, if any.
    pub fn first_duplicate_stop(&self) -> Option<&StopName> {
        self.stops
            .iter()
            .enumerate()
            .find(|(i, stop)| self.stops[..*i].contains(stop))
            .map(|(_, stop)| stop)
    }

    /// Sum of every segment time on the route.
    ///
    /// Unlike [`Route::travel_time`] this does not require the route to be
    /// consistent: it sums whatever segment times are present.
    pub fn total_minutes(&self) -> u32 {
        self.segment_minutes
            .iter()
            .fold(0u32, |acc, &m| acc.saturating_add(m))
    }

    /// Travel time in minutes between two stops on this route.
    ///
    /// Sums the segment times between the two stops. Segments cost the
    /// same in both directions, so `travel_time(a, b) == travel_time(b, a)`.
    /// Riding from a stop to itself takes 0 minutes, which callers must not
    /// treat as a usable leg.
    ///
    /// # Errors
    ///
    /// - [`DomainError::StopNotOnRoute`] if either stop is absent
    /// - [`DomainError::InconsistentSegmentData`] if the route does not have
    ///   exactly one segment time per segment
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_server::domain::{Route, RouteId, StopName};
    ///
    /// let stop = |s: &str| StopName::parse(s).unwrap();
    /// let route = Route::new(
    ///     RouteId::parse("D1").unwrap(),
    ///     "D1路".into(),
    ///     vec![stop("火车站"), stop("人民广场"), stop("市政府"), stop("图书馆")],
    /// )
    /// .with_segment_minutes(vec![2, 4, 5]);
    ///
    /// assert_eq!(route.travel_time(&stop("火车站"), &stop("图书馆")), Ok(11));
    /// assert_eq!(route.travel_time(&stop("图书馆"), &stop("人民广场")), Ok(9));
    /// assert!(route.travel_time(&stop("火车站"), &stop("机场")).is_err());
    /// ```
    pub fn travel_time(&self, from: &StopName, to: &StopName) -> Result<u32, DomainError> {
        let from_idx = self.require_index(from)?;
        let to_idx = self.require_index(to)?;

        if !self.is_consistent() {
            return Err(DomainError::InconsistentSegmentData {
                route: self.id.clone(),
                stops: self.stops.len(),
                times: self.segment_minutes.len(),
            });
        }

        let (lo, hi) = if from_idx <= to_idx {
            (from_idx, to_idx)
        } else {
            (to_idx, from_idx)
        };

        Ok(self.segment_minutes[lo..hi]
            .iter()
            .fold(0u32, |acc, &m| acc.saturating_add(m)))
    }

    /// The stops visited riding from `from` to `to`, both inclusive.
    ///
    /// The path always reads from `from` to `to`: when `from` comes after
    /// `to` in the route's own order, the sub-sequence is reversed. Returns
    /// an empty path if either stop is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bus_server::domain::{Route, RouteId, StopName};
    ///
    /// let stop = |s: &str| StopName::parse(s).unwrap();
    /// let route = Route::new(
    ///     RouteId::parse("101").unwrap(),
    ///     "101路".into(),
    ///     vec![stop("动物园"), stop("人民广场"), stop("商业街")],
    /// );
    ///
    /// let path = route.path_between(&stop("商业街"), &stop("动物园"));
    /// assert_eq!(path, vec![stop("商业街"), stop("人民广场"), stop("动物园")]);
    ///
    /// assert!(route.path_between(&stop("商业街"), &stop("机场")).is_empty());
    /// ```
    pub fn path_between(&self, from: &StopName, to: &StopName) -> Vec<StopName> {
        let (Some(from_idx), Some(to_idx)) = (self.index_of(from), self.index_of(to)) else {
            return Vec::new();
        };

        if from_idx <= to_idx {
            self.stops[from_idx..=to_idx].to_vec()
        } else {
            self.stops[to_idx..=from_idx].iter().rev().cloned().collect()
        }
    }

    fn require_index(&self, stop: &StopName) -> Result<usize, DomainError> {
        self.index_of(stop).ok_or_else(|| DomainError::StopNotOnRoute {
            route: self.id.clone(),
            stop: stop.clone(),
        })
    }
}
