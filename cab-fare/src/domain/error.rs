//! Domain error types.
//!
//! These errors cover network construction, route queries and fare
//! estimation. File and parsing failures live with the loaders.

use super::Location;

/// Domain-level errors for validation and queries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TripError {
    /// A query or connection refers to a location the network doesn't know
    #[error("unknown location: {0}")]
    UnknownLocation(Location),

    /// The location was already registered
    #[error("location {0} is already registered")]
    DuplicateLocation(Location),

    /// Source and destination lie in disconnected parts of the network
    #[error("no route between {origin} and {destination}")]
    NoPath {
        origin: Location,
        destination: Location,
    },

    /// Contract violation by the caller (negative distance, bad config, ...)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl TripError {
    /// Whether the caller should report this as "no route" rather than a
    /// rejected request.
    pub fn is_no_path(&self) -> bool {
        matches!(self, TripError::NoPath { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    #[test]
    fn error_display() {
        let err = TripError::UnknownLocation(loc("Hajipur"));
        assert_eq!(err.to_string(), "unknown location: Hajipur");

        let err = TripError::DuplicateLocation(loc("Danapur"));
        assert_eq!(err.to_string(), "location Danapur is already registered");

        let err = TripError::NoPath {
            origin: loc("Danapur"),
            destination: loc("Island"),
        };
        assert_eq!(err.to_string(), "no route between Danapur and Island");

        let err = TripError::InvalidInput("distance must not be negative".into());
        assert_eq!(
            err.to_string(),
            "invalid input: distance must not be negative"
        );
    }

    #[test]
    fn no_path_has_no_underlying_cause() {
        use std::error::Error;

        let err = TripError::NoPath {
            origin: loc("Danapur"),
            destination: loc("Island"),
        };
        assert!(err.source().is_none());
    }

    #[test]
    fn no_path_classification() {
        let no_path = TripError::NoPath {
            origin: loc("A"),
            destination: loc("B"),
        };
        assert!(no_path.is_no_path());
        assert!(!TripError::UnknownLocation(loc("A")).is_no_path());
    }
}
