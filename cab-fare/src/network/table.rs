//! Declarative network tables.
//!
//! A `NetworkTable` is the plain-data description of a road network: the
//! list of location names and the distance of each road. It can be written
//! inline or read from a JSON file, then turned into a `RoadNetwork`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::RoadNetwork;
use crate::domain::{Location, TripError};

/// Errors that can occur when loading a network table from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not a valid table
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The table describes an inconsistent network
    #[error("invalid network: {0}")]
    Network(#[from] TripError),
}

/// One road in a network table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRow {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

impl ConnectionRow {
    pub fn new(from: &str, to: &str, distance_km: f64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            distance_km,
        }
    }
}

/// Plain-data description of a road network.
///
/// ```
/// use cab_fare::network::{NetworkTable, RoadNetwork};
///
/// let table: NetworkTable = serde_json::from_str(r#"{
///     "locations": ["Danapur", "Bailey Road"],
///     "connections": [{ "from": "Danapur", "to": "Bailey Road", "distance_km": 6.0 }]
/// }"#).unwrap();
///
/// let network = RoadNetwork::from_table(&table).unwrap();
/// assert_eq!(network.connection_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkTable {
    pub locations: Vec<String>,

    #[serde(default)]
    pub connections: Vec<ConnectionRow>,
}

impl NetworkTable {
    /// Read a table from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    /// The Patna road network.
    pub fn patna() -> Self {
        let locations = [
            "Patna Junction",
            "Gandhi Maidan",
            "AIIMS Patna",
            "Patna Sahib",
            "Bailey Road",
            "Danapur",
            "Kankarbagh",
            "Rajendra Nagar",
            "Boring Road",
            "Dak Bungalow",
        ];

        // Approximate road distances in km
        let connections = vec![
            ConnectionRow::new("Patna Junction", "Gandhi Maidan", 2.0),
            ConnectionRow::new("Patna Junction", "Rajendra Nagar", 3.0),
            ConnectionRow::new("Gandhi Maidan", "Boring Road", 1.5),
            ConnectionRow::new("Boring Road", "Bailey Road", 2.5),
            ConnectionRow::new("Bailey Road", "Danapur", 6.0),
            ConnectionRow::new("Rajendra Nagar", "Kankarbagh", 1.8),
            ConnectionRow::new("Rajendra Nagar", "Patna Sahib", 5.5),
            ConnectionRow::new("Patna Sahib", "AIIMS Patna", 12.0),
            ConnectionRow::new("Dak Bungalow", "Boring Road", 1.0),
            ConnectionRow::new("Dak Bungalow", "Gandhi Maidan", 1.2),
        ];

        Self {
            locations: locations.iter().map(|s| s.to_string()).collect(),
            connections,
        }
    }
}

impl RoadNetwork {
    /// Build a network from a declarative table.
    ///
    /// Locations are registered first, in table order, then connections.
    /// Duplicate locations are rejected; a repeated road keeps the last
    /// distance listed.
    pub fn from_table(table: &NetworkTable) -> Result<Self, TripError> {
        let mut network = RoadNetwork::new();

        for name in &table.locations {
            network.add_location(parse(name)?)?;
        }

        for row in &table.connections {
            network.add_connection(&parse(&row.from)?, &parse(&row.to)?, row.distance_km)?;
        }

        Ok(network)
    }

    /// Read a JSON network table and build the network it describes.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let table = NetworkTable::from_json_file(path)?;
        Ok(Self::from_table(&table)?)
    }

    /// Describe this network as a table.
    pub fn to_table(&self) -> NetworkTable {
        NetworkTable {
            locations: self.locations().iter().map(|l| l.to_string()).collect(),
            connections: self
                .connections()
                .into_iter()
                .map(|(a, b, km)| ConnectionRow::new(a.as_str(), b.as_str(), km))
                .collect(),
        }
    }
}

fn parse(name: &str) -> Result<Location, TripError> {
    Location::parse(name).map_err(|e| TripError::InvalidInput(format!("{e}: {name:?}")))
}
