//! Reporting for planned trips.
//!
//! Turns a `Trip` into something people or tools can read: a plain-text
//! summary, a JSON document, or a Graphviz drawing of the network with the
//! route highlighted.

mod dto;
pub mod templates;

use askama::Template;

pub use dto::*;
pub use templates::*;

use crate::domain::Trip;
use crate::network::RoadNetwork;

/// Errors that can occur while rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format for a trip report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
    /// Graphviz DOT drawing of the network with the route highlighted
    Dot,
}

/// Render a planned trip in the requested format.
pub fn render_trip(
    format: ReportFormat,
    network: &RoadNetwork,
    trip: &Trip,
    currency: &str,
) -> Result<String, ReportError> {
    match format {
        ReportFormat::Text => Ok(TripReportTemplate {
            trip: TripView::from_trip(trip, currency),
        }
        .render()?),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&TripResult::from_trip(trip))?),
        ReportFormat::Dot => Ok(RouteGraphTemplate::new(network, trip, currency).render()?),
    }
}

/// Render the list of locations a user may choose from.
pub fn render_locations(network: &RoadNetwork) -> Result<String, ReportError> {
    let names = network.locations().iter().map(|l| l.to_string()).collect();
    Ok(LocationListTemplate { names }.render()?)
}
