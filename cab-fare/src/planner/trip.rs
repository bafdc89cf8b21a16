//! Trip planning: shortest path plus fare.

use crate::domain::{Location, Trip, TripError};
use crate::fare::FareCalculator;
use crate::network::RoadNetwork;

use super::search::{PathOutcome, find_shortest_path};

/// Outcome of planning a trip.
#[derive(Debug, Clone, PartialEq)]
pub enum TripOutcome {
    /// A route exists and has been priced
    Planned(Trip),
    /// No road connects the two locations
    NoRoute {
        source: Location,
        destination: Location,
    },
}

impl TripOutcome {
    /// Returns the trip if one was planned.
    pub fn trip(&self) -> Option<&Trip> {
        match self {
            TripOutcome::Planned(trip) => Some(trip),
            TripOutcome::NoRoute { .. } => None,
        }
    }
}

/// Plan a trip from `source` to `destination`.
///
/// # Errors
///
/// Returns `UnknownLocation` if either endpoint is not in `network`.
/// A disconnected pair is reported as `TripOutcome::NoRoute`, not an error.
///
/// # Examples
///
/// ```
/// use cab_fare::domain::Location;
/// use cab_fare::fare::FareCalculator;
/// use cab_fare::network::patna_network;
/// use cab_fare::planner::{TripOutcome, plan_trip};
///
/// let network = patna_network();
/// let from = Location::parse("Dak Bungalow").unwrap();
/// let to = Location::parse("Gandhi Maidan").unwrap();
///
/// let outcome = plan_trip(&network, &FareCalculator::default(), &from, &to).unwrap();
/// let trip = outcome.trip().unwrap();
/// assert_eq!(trip.route().len(), 2);
/// assert!((trip.estimated_fare() - 44.4).abs() < 1e-9);
/// ```
pub fn plan_trip(
    network: &RoadNetwork,
    calculator: &FareCalculator,
    source: &Location,
    destination: &Location,
) -> Result<TripOutcome, TripError> {
    match find_shortest_path(network, source, destination)? {
        PathOutcome::Found(path) => {
            let estimate = calculator.estimate(path.distance_km)?;
            Ok(TripOutcome::Planned(Trip::new(
                path.route,
                path.distance_km,
                estimate.time_minutes,
                estimate.fare,
            )))
        }
        PathOutcome::NoPath {
            source,
            destination,
        } => Ok(TripOutcome::NoRoute {
            source,
            destination,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fare::FareConfig;
    use crate::network::patna_network;

    fn loc(s: &str) -> Location {
        Location::parse(s).unwrap()
    }

    #[test]
    fn trip_to_self_costs_base_fare() {
        let network = patna_network();
        let outcome = plan_trip(
            &network,
            &FareCalculator::default(),
            &loc("Danapur"),
            &loc("Danapur"),
        )
        .unwrap();

        let trip = outcome.trip().unwrap();
        assert_eq!(trip.route().stops(), &[loc("Danapur")]);
        assert_eq!(trip.total_distance_km(), 0.0);
        assert_eq!(trip.estimated_time_minutes(), 0.0);
        assert_eq!(trip.estimated_fare(), 30.0);
    }

    #[test]
    fn trip_uses_configured_rates() {
        let network = patna_network();
        let calc = FareCalculator::new(FareConfig::new(50.0, 10.0, 60.0)).unwrap();
        let outcome =
            plan_trip(&network, &calc, &loc("Bailey Road"), &loc("Danapur")).unwrap();

        let trip = outcome.trip().unwrap();
        assert_eq!(trip.total_distance_km(), 6.0);
        assert_eq!(trip.estimated_time_minutes(), 6.0);
        assert_eq!(trip.estimated_fare(), 110.0);
    }

    #[test]
    fn disconnected_pair_is_no_route() {
        let network = RoadNetwork::builder()
            .location("A")
            .location("B")
            .build()
            .unwrap();

        let outcome =
            plan_trip(&network, &FareCalculator::default(), &loc("A"), &loc("B")).unwrap();
        assert_eq!(
            outcome,
            TripOutcome::NoRoute {
                source: loc("A"),
                destination: loc("B"),
            }
        );
        assert!(outcome.trip().is_none());
    }

    #[test]
    fn unknown_location_is_error() {
        let network = patna_network();
        let err = plan_trip(
            &network,
            &FareCalculator::default(),
            &loc("Hajipur"),
            &loc("Danapur"),
        )
        .unwrap_err();
        assert_eq!(err, TripError::UnknownLocation(loc("Hajipur")));
    }
}
