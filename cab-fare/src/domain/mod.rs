//! Domain types for the fare estimator.
//!
//! Locations are validated at construction time, routes always contain at
//! least one stop, and trips are immutable once planned.

mod error;
mod location;
mod route;
mod trip;

pub use error::TripError;
pub use location::{InvalidLocation, Location, LocationId};
pub use route::Route;
pub use trip::Trip;
