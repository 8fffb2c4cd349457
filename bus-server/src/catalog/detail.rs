//! Single-route detail for presentation.

use crate::domain::{Route, RouteId, ServiceWindow, StopName};

/// Everything the presentation layer shows about one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDetail {
    pub id: RouteId,
    pub name: String,
    pub stops: Vec<StopName>,
    pub segment_minutes: Vec<u32>,
    /// Sum of all segment times
    pub total_minutes: u32,
    pub window: ServiceWindow,
    /// False if the segment count does not match the stop count, in which
    /// case the route never appears in itineraries.
    pub consistent: bool,
}

impl RouteDetail {
    pub fn from_route(route: &Route) -> Self {
        Self {
            id: route.id().clone(),
            name: route.name().to_string(),
            stops: route.stops().to_vec(),
            segment_minutes: route.segment_minutes().to_vec(),
            total_minutes: route.total_minutes(),
            window: route.window(),
            consistent: route.is_consistent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_sums_all_segments() {
        let stop = |s: &str| StopName::parse(s).unwrap();
        let route = Route::new(
            RouteId::parse("202").unwrap(),
            "202路".into(),
            vec![stop("火车东站"), stop("图书馆"), stop("大学城")],
        )
        .with_segment_minutes(vec![4, 7]);

        let detail = RouteDetail::from_route(&route);
        assert_eq!(detail.id.as_str(), "202");
        assert_eq!(detail.stops.len(), 3);
        assert_eq!(detail.segment_minutes, vec![4, 7]);
        assert_eq!(detail.total_minutes, 11);
        assert!(detail.consistent);
    }

    #[test]
    fn detail_of_inconsistent_route() {
        let stop = |s: &str| StopName::parse(s).unwrap();
        let route = Route::new(
            RouteId::parse("X").unwrap(),
            "X".into(),
            vec![stop("A"), stop("B"), stop("C")],
        )
        .with_segment_minutes(vec![5]);

        let detail = RouteDetail::from_route(&route);
        assert_eq!(detail.total_minutes, 5);
        assert!(!detail.consistent);
    }
}
