//! Route planning.
//!
//! Shortest paths are found with Dijkstra's algorithm over the road network,
//! then priced by the fare calculator to produce a `Trip`.

mod frontier;
mod search;
mod trip;

pub use search::{PathOutcome, ShortestPath, find_shortest_path};
pub use trip::{TripOutcome, plan_trip};
