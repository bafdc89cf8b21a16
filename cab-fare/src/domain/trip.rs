//! Planned trips.

use chrono::Duration;

use super::Route;

/// A planned trip: the route plus its distance, time and fare.
///
/// Created once per query and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    route: Route,
    total_distance_km: f64,
    estimated_time_minutes: f64,
    estimated_fare: f64,
}

impl Trip {
    /// Bundles a route with its derived figures.
    pub fn new(
        route: Route,
        total_distance_km: f64,
        estimated_time_minutes: f64,
        estimated_fare: f64,
    ) -> Self {
        Self {
            route,
            total_distance_km,
            estimated_time_minutes,
            estimated_fare,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    pub fn estimated_time_minutes(&self) -> f64 {
        self.estimated_time_minutes
    }

    pub fn estimated_fare(&self) -> f64 {
        self.estimated_fare
    }

    /// Estimated travel time rounded to the nearest second.
    pub fn estimated_duration(&self) -> Duration {
        Duration::seconds((self.estimated_time_minutes * 60.0).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;

    #[test]
    fn accessors() {
        let route = Route::single(Location::parse("Danapur").unwrap());
        let trip = Trip::new(route.clone(), 0.0, 0.0, 30.0);

        assert_eq!(trip.route(), &route);
        assert_eq!(trip.total_distance_km(), 0.0);
        assert_eq!(trip.estimated_time_minutes(), 0.0);
        assert_eq!(trip.estimated_fare(), 30.0);
    }

    #[test]
    fn duration_rounds_to_seconds() {
        let route = Route::single(Location::parse("Danapur").unwrap());
        let trip = Trip::new(route, 1.2, 2.4, 44.4);
        assert_eq!(trip.estimated_duration(), Duration::seconds(144));
    }
}
