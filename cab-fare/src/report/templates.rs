//! Askama templates for trip reports.

use std::collections::HashSet;

use askama::Template;
use chrono::Duration;

use crate::domain::{Location, Trip};
use crate::network::RoadNetwork;

/// Plain-text trip summary.
#[derive(Template)]
#[template(path = "trip_report.txt", escape = "none")]
pub struct TripReportTemplate {
    pub trip: TripView,
}

/// Plain-text list of known locations.
#[derive(Template)]
#[template(path = "locations.txt", escape = "none")]
pub struct LocationListTemplate {
    pub names: Vec<String>,
}

/// Graphviz drawing of the whole network with the route highlighted.
#[derive(Template)]
#[template(path = "route_graph.dot", escape = "none")]
pub struct RouteGraphTemplate {
    pub label: String,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Trip figures formatted for display.
#[derive(Debug, Clone)]
pub struct TripView {
    pub route: String,
    pub distance: String,
    pub time: String,
    pub duration: String,
    pub fare: String,
    pub currency: String,
}

impl TripView {
    pub fn from_trip(trip: &Trip, currency: &str) -> Self {
        Self {
            route: trip.route().to_string(),
            distance: format!("{:.2}", trip.total_distance_km()),
            time: format!("{:.2}", trip.estimated_time_minutes()),
            duration: format_duration(trip.estimated_duration()),
            fare: format!("{:.2}", trip.estimated_fare()),
            currency: currency.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NodeView {
    pub name: String,
    pub on_route: bool,
}

#[derive(Debug, Clone)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
    pub label: String,
    pub on_route: bool,
}

impl RouteGraphTemplate {
    pub fn new(network: &RoadNetwork, trip: &Trip, currency: &str) -> Self {
        let stops: HashSet<&Location> = trip.route().stops().iter().collect();
        let hops: HashSet<(&Location, &Location)> = trip
            .route()
            .hops()
            .flat_map(|(a, b)| [(a, b), (b, a)])
            .collect();

        let nodes = network
            .locations()
            .iter()
            .map(|loc| NodeView {
                name: dot_escape(loc.as_str()),
                on_route: stops.contains(loc),
            })
            .collect();

        let edges = network
            .connections()
            .into_iter()
            .map(|(a, b, km)| EdgeView {
                from: dot_escape(a.as_str()),
                to: dot_escape(b.as_str()),
                label: format!("{km:?} km"),
                on_route: hops.contains(&(a, b)),
            })
            .collect();

        let view = TripView::from_trip(trip, currency);
        // Literal \n is a line break inside a DOT label
        let label = dot_escape(&format!(
            "Distance: {} km\nTime: {} min\nFare: {}{}",
            view.distance, view.time, view.currency, view.fare
        ))
        .replace('\n', "\\n");

        Self {
            label,
            nodes,
            edges,
        }
    }
}

/// Format a duration as `1h 05m 30s`, or `2m 24s` under an hour.
fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let (hours, minutes, seconds) = (total / 3600, (total / 60) % 60, total % 60);
    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else {
        format!("{minutes}m {seconds}s")
    }
}

/// Escape a string for use inside a double-quoted DOT identifier.
fn dot_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
