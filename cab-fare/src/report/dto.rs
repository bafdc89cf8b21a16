//! Data transfer objects for machine-readable output.

use serde::Serialize;

use crate::domain::Trip;

/// A planned trip.
#[derive(Debug, Serialize)]
pub struct TripResult {
    /// Stops in travel order
    pub route: Vec<String>,

    /// Total road distance
    pub distance_km: f64,

    /// Estimated travel time
    pub estimated_time_minutes: f64,

    /// Estimated fare
    pub estimated_fare: f64,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl TripResult {
    /// Create from a domain Trip.
    pub fn from_trip(trip: &Trip) -> Self {
        Self {
            route: trip
                .route()
                .stops()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            distance_km: trip.total_distance_km(),
            estimated_time_minutes: trip.estimated_time_minutes(),
            estimated_fare: trip.estimated_fare(),
        }
    }
}
