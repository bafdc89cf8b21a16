//! Fare and travel-time estimation.
//!
//! A flat base fare plus a per-kilometre charge, and a travel time derived
//! from an assumed average speed. The speed is only used for the time
//! estimate, never for routing.

mod config;

pub use config::FareConfig;

use crate::domain::TripError;

/// Estimated time and price for a distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FareEstimate {
    pub time_minutes: f64,
    pub fare: f64,
}

/// Prices distances according to a validated `FareConfig`.
#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    config: FareConfig,
}

impl FareCalculator {
    /// Create a calculator, rejecting configurations that would produce
    /// negative or non-increasing estimates.
    pub fn new(config: FareConfig) -> Result<Self, TripError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &FareConfig {
        &self.config
    }

    /// Estimate travel time (minutes) and fare for `distance_km`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a negative or non-finite distance. Such a
    /// value is a caller bug; it is never corrected silently.
    ///
    /// # Examples
    ///
    /// ```
    /// use cab_fare::fare::{FareCalculator, FareConfig};
    ///
    /// let calc = FareCalculator::new(FareConfig::default()).unwrap();
    /// let estimate = calc.estimate(1.2).unwrap();
    /// assert!((estimate.time_minutes - 2.4).abs() < 1e-9);
    /// assert!((estimate.fare - 44.4).abs() < 1e-9);
    /// ```
    pub fn estimate(&self, distance_km: f64) -> Result<FareEstimate, TripError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(TripError::InvalidInput(format!(
                "distance must be a non-negative number of km, got {distance_km}"
            )));
        }

        let time_minutes = (distance_km / self.config.average_speed_kmh) * 60.0;
        let fare = self.config.base_fare + self.config.fare_per_km * distance_km;

        Ok(FareEstimate { time_minutes, fare })
    }
}
