//! Itinerary ranking.

use crate::domain::Itinerary;

/// Rank itineraries by total time and keep the best `cap`.
///
/// The sort is stable, so itineraries with equal totals keep their
/// enumeration order: direct before one-transfer before two-transfer.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>, cap: usize) -> Vec<Itinerary> {
    itineraries.sort_by_key(Itinerary::total_minutes);
    itineraries.truncate(cap);
    itineraries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItineraryClass, Leg, Route, RouteId, StopName};
    use std::sync::Arc;

    fn stop(s: &str) -> StopName {
        StopName::parse(s).unwrap()
    }

    /// A direct itinerary over a single segment of `minutes`.
    fn direct(id: &str, minutes: u32) -> Itinerary {
        let route = Arc::new(
            Route::new(
                RouteId::parse(id).unwrap(),
                id.to_string(),
                vec![stop("A"), stop("B")],
            )
            .with_segment_minutes(vec![minutes]),
        );
        Itinerary::direct(Leg::new(route, &stop("A"), &stop("B")).unwrap())
    }

    fn one_transfer(minutes: u32) -> Itinerary {
        let r1 = Arc::new(Route::new(
            RouteId::parse("T1").unwrap(),
            "T1".into(),
            vec![stop("A"), stop("M")],
        ));
        let r2 = Arc::new(
            Route::new(
                RouteId::parse("T2").unwrap(),
                "T2".into(),
                vec![stop("M"), stop("B")],
            )
            .with_segment_minutes(vec![minutes]),
        );
        Itinerary::one_transfer(
            Leg::new(r1, &stop("A"), &stop("M")).unwrap(),
            Leg::new(r2, &stop("M"), &stop("B")).unwrap(),
            3,
        )
        .unwrap()
    }

    fn ids(itineraries: &[Itinerary]) -> Vec<&str> {
        itineraries
            .iter()
            .map(|i| i.legs()[0].route().id().as_str())
            .collect()
    }

    #[test]
    fn sorts_ascending() {
        let ranked = rank_itineraries(vec![direct("a", 9), direct("b", 3), direct("c", 6)], 5);
        assert_eq!(ids(&ranked), vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = rank_itineraries(vec![direct("a", 5), direct("b", 5), direct("c", 2)], 5);
        assert_eq!(ids(&ranked), vec!["c", "a", "b"]);
    }

    #[test]
    fn direct_beats_transfer_on_tie() {
        // 3 + 6 + 3 penalty = 12
        let ranked = rank_itineraries(vec![direct("d", 12), one_transfer(6)], 5);
        assert_eq!(ranked[0].class(), ItineraryClass::Direct);
        assert_eq!(ranked[1].class(), ItineraryClass::OneTransfer);
        assert_eq!(ranked[0].total_minutes(), ranked[1].total_minutes());
    }

    #[test]
    fn truncates_to_cap() {
        let all: Vec<Itinerary> = (1..=8).map(|m| direct(&format!("r{m}"), m)).collect();
        let ranked = rank_itineraries(all, 5);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked.last().unwrap().total_minutes(), 5);
    }

    #[test]
    fn empty_input() {
        assert!(rank_itineraries(vec![], 5).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Leg, Route, RouteId, StopName};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn direct(idx: usize, minutes: u32) -> Itinerary {
        let stop = |s: &str| StopName::parse(s).unwrap();
        let route = Arc::new(
            Route::new(
                RouteId::parse(&format!("r{idx}")).unwrap(),
                "r".into(),
                vec![stop("A"), stop("B")],
            )
            .with_segment_minutes(vec![minutes]),
        );
        Itinerary::direct(Leg::new(route, &stop("A"), &stop("B")).unwrap())
    }

    proptest! {
        /// Output is sorted by total time and never exceeds the cap
        #[test]
        fn sorted_and_capped(
            minutes in prop::collection::vec(1u32..60, 0..20),
            cap in 0usize..10,
        ) {
            let input: Vec<Itinerary> = minutes
                .iter()
                .enumerate()
                .map(|(i, &m)| direct(i, m))
                .collect();
            let n = input.len();
            let ranked = rank_itineraries(input, cap);

            prop_assert_eq!(ranked.len(), n.min(cap));
            prop_assert!(ranked.windows(2).all(|w| w[0].total_minutes() <= w[1].total_minutes()));
        }

        /// The kept itineraries are the fastest ones
        #[test]
        fn keeps_the_fastest(
            minutes in prop::collection::vec(1u32..60, 1..20),
            cap in 1usize..10,
        ) {
            let input: Vec<Itinerary> = minutes
                .iter()
                .enumerate()
                .map(|(i, &m)| direct(i, m))
                .collect();
            let ranked = rank_itineraries(input, cap);

            let mut expected = minutes.clone();
            expected.sort();
            expected.truncate(cap);
            let got: Vec<u32> = ranked.iter().map(|i| i.total_minutes()).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
