//! Fare configuration.

use crate::domain::TripError;

/// Pricing and speed parameters for fare estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct FareConfig {
    /// Flat charge regardless of distance.
    pub base_fare: f64,

    /// Marginal charge per kilometre.
    pub fare_per_km: f64,

    /// Assumed average travel speed (km/h).
    /// Used only for the time estimate.
    pub average_speed_kmh: f64,
}

impl FareConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(base_fare: f64, fare_per_km: f64, average_speed_kmh: f64) -> Self {
        Self {
            base_fare,
            fare_per_km,
            average_speed_kmh,
        }
    }

    /// Check the parameters produce sensible, strictly increasing estimates.
    pub fn validate(&self) -> Result<(), TripError> {
        if !self.base_fare.is_finite() || self.base_fare < 0.0 {
            return Err(TripError::InvalidInput(format!(
                "base fare must be a non-negative number, got {}",
                self.base_fare
            )));
        }
        if !self.fare_per_km.is_finite() || self.fare_per_km <= 0.0 {
            return Err(TripError::InvalidInput(format!(
                "fare per km must be positive, got {}",
                self.fare_per_km
            )));
        }
        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(TripError::InvalidInput(format!(
                "average speed must be positive, got {}",
                self.average_speed_kmh
            )));
        }
        Ok(())
    }
}

impl Default for FareConfig {
    fn default() -> Self {
        Self {
            base_fare: 30.0,
            fare_per_km: 12.0,
            average_speed_kmh: 30.0,
        }
    }
}
