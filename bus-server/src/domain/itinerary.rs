//! Itinerary types.
//!
//! An `Itinerary` is a complete trip from start to end made of one, two or
//! three legs. Each transfer between legs costs a fixed penalty.

use std::fmt;

use super::{DomainError, Leg, StopName};

/// Which of the three shapes an itinerary has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItineraryClass {
    Direct,
    OneTransfer,
    TwoTransfer,
}

impl ItineraryClass {
    /// Stable machine-readable name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItineraryClass::Direct => "direct",
            ItineraryClass::OneTransfer => "one_transfer",
            ItineraryClass::TwoTransfer => "two_transfer",
        }
    }
}

impl fmt::Display for ItineraryClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The legs of an itinerary, tagged by shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItineraryKind {
    Direct {
        leg: Leg,
    },
    OneTransfer {
        first: Leg,
        second: Leg,
        transfer: StopName,
    },
    TwoTransfer {
        first: Leg,
        second: Leg,
        third: Leg,
        transfers: [StopName; 2],
    },
}

/// A candidate trip with its total time.
///
/// # Invariants
///
/// - Consecutive legs meet: each leg alights where the next one boards
/// - `total_minutes` is the sum of leg times plus one penalty per transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    kind: ItineraryKind,
    total_minutes: u32,
}

impl Itinerary {
    /// A single-leg itinerary.
    pub fn direct(leg: Leg) -> Self {
        let total_minutes = leg.minutes();
        Itinerary {
            kind: ItineraryKind::Direct { leg },
            total_minutes,
        }
    }

    /// A two-leg itinerary changing once.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `first` does not alight where `second` boards.
    pub fn one_transfer(
        first: Leg,
        second: Leg,
        transfer_penalty_mins: u32,
    ) -> Result<Self, DomainError> {
        let transfer = connecting_stop(&first, &second)?;
        let total_minutes = first
            .minutes()
            .saturating_add(second.minutes())
            .saturating_add(transfer_penalty_mins);
        Ok(Itinerary {
            kind: ItineraryKind::OneTransfer {
                first,
                second,
                transfer,
            },
            total_minutes,
        })
    }

    /// A three-leg itinerary changing twice.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any pair of consecutive legs does not connect.
    pub fn two_transfer(
        first: Leg,
        second: Leg,
        third: Leg,
        transfer_penalty_mins: u32,
    ) -> Result<Self, DomainError> {
        let t1 = connecting_stop(&first, &second)?;
        let t2 = connecting_stop(&second, &third)?;
        let total_minutes = first
            .minutes()
            .saturating_add(second.minutes())
            .saturating_add(third.minutes())
            .saturating_add(transfer_penalty_mins.saturating_mul(2));
        Ok(Itinerary {
            kind: ItineraryKind::TwoTransfer {
                first,
                second,
                third,
                transfers: [t1, t2],
            },
            total_minutes,
        })
    }

    pub fn kind(&self) -> &ItineraryKind {
        &self.kind
    }

    pub fn class(&self) -> ItineraryClass {
        match self.kind {
            ItineraryKind::Direct { .. } => ItineraryClass::Direct,
            ItineraryKind::OneTransfer { .. } => ItineraryClass::OneTransfer,
            ItineraryKind::TwoTransfer { .. } => ItineraryClass::TwoTransfer,
        }
    }

    /// Total time in minutes, including transfer penalties.
    pub fn total_minutes(&self) -> u32 {
        self.total_minutes
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> Vec<&Leg> {
        match &self.kind {
            ItineraryKind::Direct { leg } => vec![leg],
            ItineraryKind::OneTransfer { first, second, .. } => vec![first, second],
            ItineraryKind::TwoTransfer {
                first,
                second,
                third,
                ..
            } => vec![first, second, third],
        }
    }

    /// Returns the stops where the rider changes bus, in order.
    pub fn transfer_stops(&self) -> Vec<&StopName> {
        match &self.kind {
            ItineraryKind::Direct { .. } => Vec::new(),
            ItineraryKind::OneTransfer { transfer, .. } => vec![transfer],
            ItineraryKind::TwoTransfer { transfers, .. } => transfers.iter().collect(),
        }
    }

    /// Returns the number of changes.
    pub fn change_count(&self) -> usize {
        self.legs().len() - 1
    }

    /// Sum of leg times, excluding transfer penalties.
    pub fn riding_minutes(&self) -> u32 {
        self.legs()
            .iter()
            .fold(0u32, |acc, leg| acc.saturating_add(leg.minutes()))
    }

    /// Returns the first boarding stop.
    pub fn origin(&self) -> &StopName {
        match &self.kind {
            ItineraryKind::Direct { leg } => leg.board_stop(),
            ItineraryKind::OneTransfer { first, .. } | ItineraryKind::TwoTransfer { first, .. } => {
                first.board_stop()
            }
        }
    }

    /// Returns the final alighting stop.
    pub fn destination(&self) -> &StopName {
        match &self.kind {
            ItineraryKind::Direct { leg } => leg.alight_stop(),
            ItineraryKind::OneTransfer { second, .. } => second.alight_stop(),
            ItineraryKind::TwoTransfer { third, .. } => third.alight_stop(),
        }
    }
}

fn connecting_stop(prev: &Leg, next: &Leg) -> Result<StopName, DomainError> {
    let alight = prev.alight_stop();
    let board = next.board_stop();
    if alight != board {
        return Err(DomainError::LegsNotConnected(alight.clone(), board.clone()));
    }
    Ok(alight.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Route, RouteId};
    use std::sync::Arc;

    fn stop(s: &str) -> StopName {
        StopName::parse(s).unwrap()
    }

    fn route(id: &str, stops: &[&str]) -> Arc<Route> {
        Arc::new(Route::new(
            RouteId::parse(id).unwrap(),
            format!("{id}路"),
            stops.iter().map(|s| stop(s)).collect(),
        ))
    }

    fn leg(route: &Arc<Route>, from: &str, to: &str) -> Leg {
        Leg::new(route.clone(), &stop(from), &stop(to)).unwrap()
    }

    #[test]
    fn direct_itinerary() {
        let d1 = route("D1", &["A", "B", "C", "D"]);
        let it = Itinerary::direct(leg(&d1, "A", "D"));
        assert_eq!(it.class(), ItineraryClass::Direct);
        assert_eq!(it.total_minutes(), 9);
        assert_eq!(it.change_count(), 0);
        assert!(it.transfer_stops().is_empty());
        assert_eq!(it.origin(), &stop("A"));
        assert_eq!(it.destination(), &stop("D"));
    }

    #[test]
    fn one_transfer_adds_penalty() {
        let r1 = route("1", &["A", "B", "C"]);
        let r2 = route("2", &["X", "C", "Y"]);
        let it = Itinerary::one_transfer(leg(&r1, "A", "C"), leg(&r2, "C", "Y"), 3).unwrap();
        assert_eq!(it.class(), ItineraryClass::OneTransfer);
        assert_eq!(it.riding_minutes(), 9);
        assert_eq!(it.total_minutes(), 12);
        assert_eq!(it.transfer_stops(), vec![&stop("C")]);
        assert_eq!(it.change_count(), 1);
    }

    #[test]
    fn two_transfer_adds_two_penalties() {
        let r1 = route("1", &["A", "B"]);
        let r2 = route("2", &["B", "C"]);
        let r3 = route("3", &["C", "D"]);
        let it = Itinerary::two_transfer(
            leg(&r1, "A", "B"),
            leg(&r2, "B", "C"),
            leg(&r3, "C", "D"),
            3,
        )
        .unwrap();
        assert_eq!(it.class(), ItineraryClass::TwoTransfer);
        assert_eq!(it.total_minutes(), 3 + 3 + 3 + 6);
        assert_eq!(it.transfer_stops(), vec![&stop("B"), &stop("C")]);
        assert_eq!(it.legs().len(), 3);
        assert_eq!(it.destination(), &stop("D"));
    }

    #[test]
    fn disconnected_legs_rejected() {
        let r1 = route("1", &["A", "B", "C"]);
        let r2 = route("2", &["B", "C", "D"]);
        let err = Itinerary::one_transfer(leg(&r1, "A", "B"), leg(&r2, "C", "D"), 3).unwrap_err();
        assert_eq!(err, DomainError::LegsNotConnected(stop("B"), stop("C")));
    }

    #[test]
    fn class_labels() {
        assert_eq!(ItineraryClass::Direct.to_string(), "direct");
        assert_eq!(ItineraryClass::OneTransfer.as_str(), "one_transfer");
        assert_eq!(ItineraryClass::TwoTransfer.as_str(), "two_transfer");
    }
}
