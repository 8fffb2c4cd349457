//! Route identifier type.

use std::borrow::Borrow;
use std::fmt;

/// Error returned when parsing an invalid route identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route id: {reason}")]
pub struct InvalidRouteId {
    reason: &'static str,
}

/// The stable key of a route, such as `"D1"` or `"101"`.
///
/// Identifiers are opaque. The only validation is that they are non-empty
/// once surrounding whitespace is removed.
///
/// # Examples
///
/// ```
/// use bus_server::domain::RouteId;
///
/// let id = RouteId::parse(" D1 ").unwrap();
/// assert_eq!(id.as_str(), "D1");
///
/// assert!(RouteId::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(String);

impl RouteId {
    /// Parse a route identifier, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidRouteId> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidRouteId {
                reason: "route id cannot be empty",
            });
        }
        Ok(RouteId(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the RouteId and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Borrow<str> for RouteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original for trimmed input
        #[test]
        fn roundtrip(s in "[A-Za-z0-9][A-Za-z0-9 -]{0,8}[A-Za-z0-9]") {
            let id = RouteId::parse(&s).unwrap();
            prop_assert_eq!(id.as_str(), s.as_str());
        }
    }
}
