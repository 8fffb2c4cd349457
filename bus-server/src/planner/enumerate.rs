//! Exhaustive itinerary enumeration.
//!
//! Generates every direct, one-transfer and two-transfer itinerary between
//! two stops. The search is a set of nested scans over routes and their
//! stops, with route membership answered by a [`StopIndex`]. Every shared
//! stop between two routes is tried as a transfer point, so the ranker
//! sees all options and keeps the fastest.
//!
//! Candidates are emitted in a fixed order: all direct itineraries, then
//! one-transfer, then two-transfer, each phase walking routes in catalog
//! order and transfer stops in route order. The ranker's stable sort
//! relies on this order to break ties.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::catalog::{RouteCatalog, StopIndex};
use crate::domain::{DomainError, Itinerary, Leg, Route, StopName};

/// Every feasible itinerary from `start` to `end`, in phase order.
///
/// Candidates whose legs cannot be built (a stop missing, inconsistent
/// segment data, or a zero-minute ride) are dropped silently. Callers
/// handle `start == end` before calling this.
pub fn enumerate(
    catalog: &RouteCatalog,
    start: &StopName,
    end: &StopName,
    transfer_penalty_mins: u32,
) -> Vec<Itinerary> {
    let index = StopIndex::build(catalog);
    let mut candidates = Vec::new();

    let direct = direct_itineraries(&index, start, end, &mut candidates);
    let one = one_transfer_itineraries(&index, start, end, transfer_penalty_mins, &mut candidates);
    let two = two_transfer_itineraries(
        &index,
        catalog,
        start,
        end,
        transfer_penalty_mins,
        &mut candidates,
    );

    debug!(
        start = %start,
        end = %end,
        direct,
        one_transfer = one,
        two_transfer = two,
        "Enumerated candidate itineraries"
    );

    candidates
}

fn direct_itineraries(
    index: &StopIndex<'_>,
    start: &StopName,
    end: &StopName,
    out: &mut Vec<Itinerary>,
) -> usize {
    let before = out.len();

    for (idx, route) in index.routes_serving(start) {
        if !index.serves(idx, end) {
            continue;
        }
        if let Some(leg) = try_leg(route, start, end) {
            out.push(Itinerary::direct(leg));
        }
    }

    out.len() - before
}

fn one_transfer_itineraries(
    index: &StopIndex<'_>,
    start: &StopName,
    end: &StopName,
    penalty: u32,
    out: &mut Vec<Itinerary>,
) -> usize {
    let before = out.len();

    for (i1, r1) in index.routes_serving(start) {
        for (i2, r2) in index.routes_serving(end) {
            if i1 == i2 {
                continue;
            }
            for mid in r1.stops() {
                if !index.serves(i2, mid) {
                    continue;
                }
                let Some(first) = try_leg(r1, start, mid) else {
                    continue;
                };
                let Some(second) = try_leg(r2, mid, end) else {
                    continue;
                };
                push_candidate(Itinerary::one_transfer(first, second, penalty), out);
            }
        }
    }

    out.len() - before
}

fn two_transfer_itineraries(
    index: &StopIndex<'_>,
    catalog: &RouteCatalog,
    start: &StopName,
    end: &StopName,
    penalty: u32,
    out: &mut Vec<Itinerary>,
) -> usize {
    let before = out.len();

    for (i1, r1) in index.routes_serving(start) {
        for (i2, r2) in catalog.routes().iter().enumerate() {
            if i1 == i2 {
                continue;
            }
            for mid1 in r1.stops() {
                if !index.serves(i2, mid1) {
                    continue;
                }
                // The first leg depends only on mid1, so a failure here
                // rules out every third route
                let Some(first) = try_leg(r1, start, mid1) else {
                    continue;
                };
                for (i3, r3) in index.routes_serving(end) {
                    if i3 == i1 || i3 == i2 {
                        continue;
                    }
                    for mid2 in r2.stops() {
                        if !index.serves(i3, mid2) {
                            continue;
                        }
                        let Some(second) = try_leg(r2, mid1, mid2) else {
                            continue;
                        };
                        let Some(third) = try_leg(r3, mid2, end) else {
                            continue;
                        };
                        push_candidate(
                            Itinerary::two_transfer(first.clone(), second, third, penalty),
                            out,
                        );
                    }
                }
            }
        }
    }

    out.len() - before
}

/// Build a leg, logging and discarding failures.
fn try_leg(route: &Arc<Route>, from: &StopName, to: &StopName) -> Option<Leg> {
    match Leg::new(Arc::clone(route), from, to) {
        Ok(leg) => Some(leg),
        Err(e) => {
            trace!(route = %route.id(), error = %e, "Skipping leg");
            None
        }
    }
}

fn push_candidate(candidate: Result<Itinerary, DomainError>, out: &mut Vec<Itinerary>) {
    match candidate {
        Ok(itinerary) => out.push(itinerary),
        Err(e) => trace!(error = %e, "Skipping candidate"),
    }
}

#[cfg(test)]
#[path = "enumerate_tests.rs"]
mod tests;
