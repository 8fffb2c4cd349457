//! Unit tests for itinerary enumeration.

use super::*;
use crate::catalog::demo_catalog;
use crate::domain::{ItineraryClass, RouteId};

fn stop(s: &str) -> StopName {
    StopName::parse(s).unwrap()
}

fn route(id: &str, stops: &[&str], times: &[u32]) -> Route {
    Route::new(
        RouteId::parse(id).unwrap(),
        format!("{id}路"),
        stops.iter().map(|s| stop(s)).collect(),
    )
    .with_segment_minutes(times.to_vec())
}

fn run(catalog: &RouteCatalog, from: &str, to: &str) -> Vec<Itinerary> {
    enumerate(catalog, &stop(from), &stop(to), 3)
}

fn count(itineraries: &[Itinerary], class: ItineraryClass) -> usize {
    itineraries.iter().filter(|i| i.class() == class).count()
}

fn route_ids(itinerary: &Itinerary) -> Vec<&str> {
    itinerary
        .legs()
        .iter()
        .map(|l| l.route().id().as_str())
        .collect()
}

#[test]
fn direct_on_single_route() {
    let catalog = demo_catalog();
    let found = run(&catalog, "火车站", "图书馆");

    assert_eq!(count(&found, ItineraryClass::Direct), 1);
    let direct = &found[0];
    assert_eq!(direct.class(), ItineraryClass::Direct);
    assert_eq!(direct.total_minutes(), 9);
    assert_eq!(route_ids(direct), vec!["D1"]);
    assert_eq!(direct.legs()[0].path().len(), 4);
}

#[test]
fn phases_are_emitted_in_order() {
    let catalog = demo_catalog();
    let found = run(&catalog, "火车站", "图书馆");

    // 1 direct, 3 one-transfer, 6 two-transfer
    assert_eq!(found.len(), 10);
    let classes: Vec<ItineraryClass> = found.iter().map(|i| i.class()).collect();
    let mut sorted = classes.clone();
    sorted.sort();
    assert_eq!(classes, sorted);

    let totals: Vec<u32> = found.iter().map(|i| i.total_minutes()).collect();
    assert_eq!(totals, vec![9, 18, 24, 21, 18, 21, 27, 18, 24, 24]);
}

#[test]
fn one_transfer_when_no_direct_route() {
    let catalog = demo_catalog();
    let found = run(&catalog, "动物园", "图书馆");

    assert_eq!(count(&found, ItineraryClass::Direct), 0);

    let one: Vec<&Itinerary> = found
        .iter()
        .filter(|i| i.class() == ItineraryClass::OneTransfer)
        .collect();
    assert_eq!(one.len(), 4);

    let best = one.iter().min_by_key(|i| i.total_minutes()).unwrap();
    assert_eq!(best.total_minutes(), 3 + 6 + 3);
    assert_eq!(best.transfer_stops(), vec![&stop("人民广场")]);
    assert_eq!(route_ids(best), vec!["101", "D1"]);

    // 市政府 is also a valid transfer point on the same pair of routes
    assert!(one.iter().any(|i| {
        i.transfer_stops() == vec![&stop("市政府")] && route_ids(i) == vec!["101", "D1"]
    }));
}

#[test]
fn every_shared_stop_is_a_transfer_candidate() {
    let catalog = RouteCatalog::new(vec![
        route("1", &["S", "P", "Q", "R"], &[1, 1, 1]),
        route("2", &["P", "Q", "R", "E"], &[5, 5, 5]),
    ]);
    let found = run(&catalog, "S", "E");

    let transfers: Vec<&str> = found
        .iter()
        .map(|i| i.transfer_stops()[0].as_str())
        .collect();
    assert_eq!(transfers, vec!["P", "Q", "R"]);

    let totals: Vec<u32> = found.iter().map(|i| i.total_minutes()).collect();
    assert_eq!(totals, vec![1 + 15 + 3, 2 + 10 + 3, 3 + 5 + 3]);
}

#[test]
fn two_transfers_when_needed() {
    let catalog = RouteCatalog::new(vec![
        route("A", &["S", "X"], &[4]),
        route("B", &["X", "Y"], &[5]),
        route("C", &["Y", "E"], &[6]),
    ]);
    let found = run(&catalog, "S", "E");

    assert_eq!(found.len(), 1);
    let it = &found[0];
    assert_eq!(it.class(), ItineraryClass::TwoTransfer);
    assert_eq!(it.total_minutes(), 4 + 5 + 6 + 6);
    assert_eq!(it.transfer_stops(), vec![&stop("X"), &stop("Y")]);
    assert_eq!(route_ids(it), vec!["A", "B", "C"]);
}

#[test]
fn legs_can_ride_against_route_order() {
    let catalog = RouteCatalog::new(vec![
        route("A", &["X", "M", "S"], &[2, 3]),
        route("B", &["E", "M"], &[7]),
    ]);
    let found = run(&catalog, "S", "E");

    assert_eq!(found.len(), 1);
    let legs = found[0].legs();
    assert_eq!(legs[0].path(), &[stop("S"), stop("M")]);
    assert_eq!(legs[1].path(), &[stop("M"), stop("E")]);
    assert_eq!(found[0].total_minutes(), 3 + 7 + 3);
}

#[test]
fn inconsistent_route_is_excluded() {
    let catalog = RouteCatalog::new(vec![
        route("bad", &["S", "M", "E"], &[3]),
        route("good", &["S", "Z", "E"], &[4, 4]),
    ]);
    let found = run(&catalog, "S", "E");

    assert_eq!(found.len(), 1);
    assert_eq!(route_ids(&found[0]), vec!["good"]);
}

#[test]
fn zero_minute_leg_is_excluded() {
    let catalog = RouteCatalog::new(vec![route("Z", &["S", "E"], &[0])]);
    assert!(run(&catalog, "S", "E").is_empty());
}

#[test]
fn unknown_stop_finds_nothing() {
    let catalog = demo_catalog();
    assert!(run(&catalog, "月球基地", "图书馆").is_empty());
    assert!(run(&catalog, "图书馆", "月球基地").is_empty());
}

#[test]
fn empty_catalog_finds_nothing() {
    let catalog = RouteCatalog::default();
    assert!(run(&catalog, "S", "E").is_empty());
}

#[test]
fn transfer_penalty_is_configurable() {
    let catalog = RouteCatalog::new(vec![
        route("A", &["S", "X"], &[4]),
        route("B", &["X", "E"], &[5]),
    ]);
    let found = enumerate(&catalog, &stop("S"), &stop("E"), 10);
    assert_eq!(found[0].total_minutes(), 4 + 5 + 10);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const STOPS: &[&str] = &["A", "B", "C", "D", "E", "F", "G"];

    /// A route over a random ordering of distinct stops. Most routes are
    /// consistent; some carry a wrong number of segment times, and segment
    /// times may be zero.
    fn route_strategy(id: usize) -> impl Strategy<Value = Route> {
        (
            prop::sample::subsequence(STOPS.to_vec(), 2..=5).prop_shuffle(),
            prop::collection::vec(0u32..6, 1..6),
            prop::bool::weighted(0.8),
        )
            .prop_map(move |(stops, mut times, consistent)| {
                if consistent {
                    times.resize(stops.len() - 1, 1);
                }
                route(&format!("R{id}"), &stops, &times)
            })
    }

    fn catalog_strategy() -> impl Strategy<Value = RouteCatalog> {
        (1usize..6)
            .prop_flat_map(|n| (0..n).map(route_strategy).collect::<Vec<_>>())
            .prop_map(RouteCatalog::new)
    }

    fn query_strategy() -> impl Strategy<Value = (RouteCatalog, &'static str, &'static str)> {
        (
            catalog_strategy(),
            prop::sample::select(STOPS),
            prop::sample::select(STOPS),
        )
            .prop_filter("distinct endpoints", |(_, a, b)| a != b)
    }

    proptest! {
        /// Every candidate goes from start to end on positive-time legs
        #[test]
        fn candidates_are_well_formed((catalog, from, to) in query_strategy()) {
            for it in run(&catalog, from, to) {
                prop_assert_eq!(it.origin(), &stop(from));
                prop_assert_eq!(it.destination(), &stop(to));
                prop_assert!(it.legs().iter().all(|l| l.minutes() > 0));
                prop_assert!(it.legs().iter().all(|l| l.route().is_consistent()));
                prop_assert_eq!(
                    it.total_minutes(),
                    it.riding_minutes() + 3 * it.change_count() as u32
                );
            }
        }

        /// No itinerary rides the same route twice
        #[test]
        fn legs_use_distinct_routes((catalog, from, to) in query_strategy()) {
            for it in run(&catalog, from, to) {
                let mut ids = route_ids(&it);
                let n = ids.len();
                ids.sort();
                ids.dedup();
                prop_assert_eq!(ids.len(), n);
            }
        }

        /// Same catalog, same query, same output
        #[test]
        fn enumeration_is_deterministic((catalog, from, to) in query_strategy()) {
            prop_assert_eq!(run(&catalog, from, to), run(&catalog, from, to));
        }
    }
}
