//! Stop name type.

use std::borrow::Borrow;
use std::fmt;

/// Error returned when parsing an invalid stop name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop name: {reason}")]
pub struct InvalidStopName {
    reason: &'static str,
}

/// The name of a bus stop.
///
/// Stops are not entities in their own right: a stop is shared between
/// routes purely by name, and two stops are the same stop exactly when
/// their names are equal. A `StopName` is never empty and never carries
/// surrounding whitespace.
///
/// # Examples
///
/// ```
/// use bus_server::domain::StopName;
///
/// let stop = StopName::parse("  人民广场 ").unwrap();
/// assert_eq!(stop.as_str(), "人民广场");
///
/// assert!(StopName::parse("").is_err());
/// assert!(StopName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopName(String);

impl StopName {
    /// Parse a stop name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStopName> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStopName {
                reason: "must not be empty",
            });
        }
        Ok(StopName(trimmed.to_string()))
    }

    /// Returns the stop name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for StopName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for StopName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StopName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for StopName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopName({})", self.0)
    }
}

impl fmt::Display for StopName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Parsing is insensitive to surrounding whitespace
        #[test]
        fn surrounding_whitespace_ignored(name in "[a-zA-Z0-9]{1,12}", pad in "[ \t]{0,3}") {
            let padded = format!("{pad}{name}{pad}");
            let stop = StopName::parse(&padded).unwrap();
            prop_assert_eq!(stop.as_str(), name.as_str());
        }

        /// Whitespace-only strings are always rejected
        #[test]
        fn whitespace_only_rejected(s in "[ \t\n]{0,6}") {
            prop_assert!(StopName::parse(&s).is_err());
        }
    }
}
