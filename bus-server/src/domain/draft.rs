//! Unvalidated route input from the add/edit form.

use super::route::DEFAULT_SEGMENT_MINUTES;
use super::{DomainError, Route, RouteId, ServiceWindow, StopName};

/// A route as submitted for creation or editing, before validation.
///
/// Everything is raw text or raw numbers. [`RouteDraft::into_route`] is the
/// only way to turn a draft into a [`Route`], and it guarantees the result
/// is consistent and free of duplicate stops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDraft {
    pub id: String,
    pub name: String,
    pub stops: Vec<String>,
    pub segment_minutes: Option<Vec<i64>>,
    pub first_bus: Option<String>,
    pub last_bus: Option<String>,
}

impl RouteDraft {
    /// Validate the draft and build a route.
    ///
    /// Blank stops are dropped. Missing or non-positive segment times become
    /// 3 minutes, and the list is padded or truncated to one per segment.
    /// Unparsable service times fall back to the default window.
    ///
    /// # Errors
    ///
    /// - [`DomainError::InvalidRoute`] for a blank id or name, or fewer than
    ///   two stops
    /// - [`DomainError::DuplicateStop`] if a stop appears twice
    pub fn into_route(self) -> Result<Route, DomainError> {
        let id = RouteId::parse(&self.id)
            .map_err(|_| DomainError::InvalidRoute("route id must not be empty".into()))?;

        let name = self.name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidRoute(
                "route name must not be empty".into(),
            ));
        }

        let stops: Vec<StopName> = self
            .stops
            .iter()
            .filter_map(|s| StopName::parse(s).ok())
            .collect();
        if stops.len() < 2 {
            return Err(DomainError::InvalidRoute(
                "at least two stops are required".into(),
            ));
        }

        let segment_count = stops.len() - 1;
        let mut segment_minutes: Vec<u32> = self
            .segment_minutes
            .unwrap_or_default()
            .into_iter()
            .take(segment_count)
            .map(|m| match u32::try_from(m) {
                Ok(m) if m > 0 => m,
                _ => DEFAULT_SEGMENT_MINUTES,
            })
            .collect();
        segment_minutes.resize(segment_count, DEFAULT_SEGMENT_MINUTES);

        let window =
            ServiceWindow::from_hhmm_lenient(self.first_bus.as_deref(), self.last_bus.as_deref());

        let route = Route::from_parts(id, name.to_string(), stops, segment_minutes, window);
        if let Some(dup) = route.first_duplicate_stop() {
            return Err(DomainError::DuplicateStop(dup.clone()));
        }
        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(stops: &[&str]) -> RouteDraft {
        RouteDraft {
            id: "202".into(),
            name: "202路".into(),
            stops: stops.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_draft_uses_defaults() {
        let route = draft(&["医院", "市政府", "公园"]).into_route().unwrap();
        assert_eq!(route.id().as_str(), "202");
        assert_eq!(route.name(), "202路");
        assert_eq!(route.segment_minutes(), &[3, 3]);
        assert_eq!(route.window(), ServiceWindow::default());
        assert!(route.is_consistent());
    }

    #[test]
    fn trims_and_drops_blank_stops() {
        let route = draft(&[" 医院 ", "", "   ", "公园"]).into_route().unwrap();
        let names: Vec<&str> = route.stops().iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["医院", "公园"]);
    }

    #[test]
    fn rejects_blank_id_and_name() {
        let mut d = draft(&["A", "B"]);
        d.id = "  ".into();
        assert!(matches!(d.into_route(), Err(DomainError::InvalidRoute(_))));

        let mut d = draft(&["A", "B"]);
        d.name = "".into();
        assert!(matches!(d.into_route(), Err(DomainError::InvalidRoute(_))));
    }

    #[test]
    fn rejects_fewer_than_two_stops() {
        assert!(matches!(
            draft(&["A", " "]).into_route(),
            Err(DomainError::InvalidRoute(_))
        ));
        assert!(matches!(
            draft(&[]).into_route(),
            Err(DomainError::InvalidRoute(_))
        ));
    }

    #[test]
    fn rejects_duplicate_stops() {
        let err = draft(&["A", "B", " A"]).into_route().unwrap_err();
        assert_eq!(err, DomainError::DuplicateStop(StopName::parse("A").unwrap()));
    }

    #[test]
    fn non_positive_times_become_default() {
        let mut d = draft(&["A", "B", "C", "D"]);
        d.segment_minutes = Some(vec![5, 0, -2]);
        let route = d.into_route().unwrap();
        assert_eq!(route.segment_minutes(), &[5, 3, 3]);
    }

    #[test]
    fn short_times_are_padded() {
        let mut d = draft(&["A", "B", "C", "D"]);
        d.segment_minutes = Some(vec![7]);
        assert_eq!(d.into_route().unwrap().segment_minutes(), &[7, 3, 3]);
    }

    #[test]
    fn long_times_are_truncated() {
        let mut d = draft(&["A", "B", "C"]);
        d.segment_minutes = Some(vec![4, 5, 6, 7]);
        assert_eq!(d.into_route().unwrap().segment_minutes(), &[4, 5]);
    }

    #[test]
    fn service_window_parsing() {
        let mut d = draft(&["A", "B"]);
        d.first_bus = Some("05:30".into());
        d.last_bus = Some("25:00".into());
        let route = d.into_route().unwrap();
        assert_eq!(route.window().first.to_string(), "05:30");
        assert_eq!(route.window().last, ServiceWindow::default_last());
    }
}
