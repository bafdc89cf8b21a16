//! Routes through the road network.

use std::fmt;

use super::{Location, TripError};
use crate::network::RoadNetwork;

/// An ordered sequence of locations from origin to destination.
///
/// # Invariants
///
/// - At least one stop (a route to oneself has exactly one)
/// - Consecutive stops are distinct
///
/// Whether consecutive stops are actually connected is a property of a
/// particular network; see [`Route::distance_km`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stops: Vec<Location>,
}

impl Route {
    /// Constructs a route from its stops.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `stops` is empty or repeats a stop
    /// back-to-back.
    pub fn new(stops: Vec<Location>) -> Result<Self, TripError> {
        if stops.is_empty() {
            return Err(TripError::InvalidInput(
                "route must have at least one stop".to_string(),
            ));
        }
        if stops.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(TripError::InvalidInput(
                "route must not repeat a stop back-to-back".to_string(),
            ));
        }
        Ok(Self { stops })
    }

    /// The degenerate route that stays put.
    pub fn single(location: Location) -> Self {
        Self {
            stops: vec![location],
        }
    }

    /// Returns the first stop.
    pub fn origin(&self) -> &Location {
        &self.stops[0]
    }

    /// Returns the last stop.
    pub fn destination(&self) -> &Location {
        &self.stops[self.stops.len() - 1]
    }

    /// Returns all stops in travel order.
    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    /// Returns consecutive `(from, to)` pairs along the route.
    pub fn hops(&self) -> impl Iterator<Item = (&Location, &Location)> + '_ {
        self.stops.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Number of stops, including origin and destination.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sum of connection weights along the route in `network`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if two consecutive stops are not connected.
    pub fn distance_km(&self, network: &RoadNetwork) -> Result<f64, TripError> {
        self.hops().try_fold(0.0, |total, (from, to)| {
            network
                .distance_between(from, to)
                .map(|d| total + d)
                .ok_or_else(|| {
                    TripError::InvalidInput(format!("{from} and {to} are not connected"))
                })
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(" → ")?;
            }
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}
