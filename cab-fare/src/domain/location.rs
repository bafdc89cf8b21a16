//! Location identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid location name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid location name: {reason}")]
pub struct InvalidLocation {
    reason: &'static str,
}

/// A named place in the road network.
///
/// Names are trimmed of surrounding whitespace and must not be empty.
/// Two locations are equal when their names are byte-for-byte equal.
///
/// # Examples
///
/// ```
/// use cab_fare::domain::Location;
///
/// let maidan = Location::parse("  Gandhi Maidan ").unwrap();
/// assert_eq!(maidan.as_str(), "Gandhi Maidan");
///
/// // Blank names are rejected
/// assert!(Location::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location(String);

impl Location {
    /// Parse a location name.
    pub fn parse(s: &str) -> Result<Self, InvalidLocation> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidLocation {
                reason: "must not be empty",
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(InvalidLocation {
                reason: "must not contain control characters",
            });
        }

        Ok(Location(trimmed.to_string()))
    }

    /// Returns the location name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name folded for loose matching: lowercase, single spaces.
    pub(crate) fn folded(s: &str) -> String {
        s.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({})", self.0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Location {
    type Error = InvalidLocation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Location::parse(&value)
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.0
    }
}

/// Dense index of a location inside a particular `RoadNetwork`.
///
/// Only meaningful for the network that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub usize);
