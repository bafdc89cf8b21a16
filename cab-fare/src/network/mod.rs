//! The road network: locations and the roads between them.
//!
//! Roads are undirected. Every connection is stored in both directions
//! with the same distance, so lookups from either end agree.

mod table;

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::domain::{Location, LocationId, TripError};

pub use table::{ConnectionRow, LoadError, NetworkTable};

/// Locations plus weighted, bidirectional connections.
///
/// Built once, then only read. Sharing a `&RoadNetwork` across threads needs
/// no locking because queries never mutate it.
///
/// Registering a location twice is an error. Adding a connection between a
/// pair that is already connected replaces the old distance and hands it back
/// to the caller.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    /// Locations in registration order, indexed by `LocationId`.
    locations: Vec<Location>,

    ids: HashMap<Location, LocationId>,

    /// Per-location neighbours. Ordered by id so iteration is deterministic.
    adjacency: Vec<BTreeMap<LocationId, f64>>,
}

impl RoadNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fluent builder.
    pub fn builder() -> RoadNetworkBuilder {
        RoadNetworkBuilder::new()
    }

    /// Register a location.
    pub fn add_location(&mut self, location: Location) -> Result<LocationId, TripError> {
        if self.ids.contains_key(&location) {
            return Err(TripError::DuplicateLocation(location));
        }

        let id = LocationId(self.locations.len());
        self.ids.insert(location.clone(), id);
        self.locations.push(location);
        self.adjacency.push(BTreeMap::new());
        Ok(id)
    }

    /// Connect two registered locations with a road of `distance_km`.
    ///
    /// Returns the previous distance if the pair was already connected.
    pub fn add_connection(
        &mut self,
        a: &Location,
        b: &Location,
        distance_km: f64,
    ) -> Result<Option<f64>, TripError> {
        if !(distance_km.is_finite() && distance_km > 0.0) {
            return Err(TripError::InvalidInput(format!(
                "distance between {a} and {b} must be a positive number of km, got {distance_km}"
            )));
        }

        let a_id = self.require(a)?;
        let b_id = self.require(b)?;

        if a_id == b_id {
            return Err(TripError::InvalidInput(format!(
                "connection endpoints must differ, got {a} twice"
            )));
        }

        let previous = self.adjacency[a_id.0].insert(b_id, distance_km);
        self.adjacency[b_id.0].insert(a_id, distance_km);

        if let Some(old) = previous {
            debug!(
                from = %a,
                to = %b,
                old_km = old,
                new_km = distance_km,
                "Replaced existing connection"
            );
        }

        Ok(previous)
    }

    /// Locations one connection away from `location`, with their distances.
    pub fn neighbors(&self, location: &Location) -> Result<Vec<(&Location, f64)>, TripError> {
        let id = self.require(location)?;
        Ok(self
            .edges_from(id)
            .map(|(next, km)| (&self.locations[next.0], km))
            .collect())
    }

    /// Raw adjacency for the search. `id` must come from this network.
    pub(crate) fn edges_from(&self, id: LocationId) -> impl Iterator<Item = (LocationId, f64)> + '_ {
        self.adjacency[id.0].iter().map(|(next, km)| (*next, *km))
    }

    /// Distance of the direct connection between two locations, if any.
    pub fn distance_between(&self, a: &Location, b: &Location) -> Option<f64> {
        let a_id = self.id_of(a)?;
        let b_id = self.id_of(b)?;
        self.adjacency[a_id.0].get(&b_id).copied()
    }

    /// Check if a location is registered.
    pub fn contains(&self, location: &Location) -> bool {
        self.ids.contains_key(location)
    }

    /// Look up the id of a registered location.
    pub fn id_of(&self, location: &Location) -> Option<LocationId> {
        self.ids.get(location).copied()
    }

    /// Look up a location by id.
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    /// All locations in registration order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Every connection once, as `(a, b, km)` with `a` registered before `b`.
    pub fn connections(&self) -> Vec<(&Location, &Location, f64)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(a, edges)| {
                edges
                    .range(LocationId(a + 1)..)
                    .map(move |(b, km)| (&self.locations[a], &self.locations[b.0], *km))
            })
            .collect()
    }

    /// Find a registered location from user input.
    ///
    /// Tries an exact match first, then ignores case and repeated spaces.
    /// Returns `None` when nothing matches or the loose match is ambiguous.
    pub fn resolve(&self, input: &str) -> Option<&Location> {
        let exact = Location::parse(input).ok().and_then(|loc| self.id_of(&loc));
        if let Some(id) = exact {
            return Some(&self.locations[id.0]);
        }

        let wanted = Location::folded(input);
        let mut matches = self
            .locations
            .iter()
            .filter(|loc| Location::folded(loc.as_str()) == wanted);

        match (matches.next(), matches.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if there are no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Number of connections (counting A↔B once).
    pub fn connection_count(&self) -> usize {
        self.adjacency.iter().map(BTreeMap::len).sum::<usize>() / 2
    }

    fn require(&self, location: &Location) -> Result<LocationId, TripError> {
        self.id_of(location)
            .ok_or_else(|| TripError::UnknownLocation(location.clone()))
    }
}

/// Builder for creating road networks.
///
/// Provides a fluent API; the first error is kept and reported by `build`.
#[derive(Debug, Default)]
pub struct RoadNetworkBuilder {
    inner: RoadNetwork,
    error: Option<TripError>,
}

impl RoadNetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location by name.
    pub fn location(mut self, name: &str) -> Self {
        if self.error.is_none() {
            let result = Location::parse(name)
                .map_err(|e| TripError::InvalidInput(e.to_string()))
                .and_then(|loc| self.inner.add_location(loc));
            if let Err(e) = result {
                self.error = Some(e);
            }
        }
        self
    }

    /// Connect two already-registered locations by name.
    pub fn connection(mut self, a: &str, b: &str, distance_km: f64) -> Self {
        if self.error.is_none() {
            let result = parse_pair(a, b)
                .and_then(|(a, b)| self.inner.add_connection(&a, &b, distance_km));
            if let Err(e) = result {
                self.error = Some(e);
            }
        }
        self
    }

    /// Build the network, or report the first thing that went wrong.
    pub fn build(self) -> Result<RoadNetwork, TripError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.inner),
        }
    }
}

fn parse_pair(a: &str, b: &str) -> Result<(Location, Location), TripError> {
    let parse = |s: &str| Location::parse(s).map_err(|e| TripError::InvalidInput(e.to_string()));
    Ok((parse(a)?, parse(b)?))
}

/// Create the default Patna road network.
///
/// Ten well-known places around Patna and the approximate road distances
/// between them, in kilometres.
///
/// # Panics
///
/// Panics if the built-in table is inconsistent.
pub fn patna_network() -> RoadNetwork {
    RoadNetwork::from_table(&NetworkTable::patna())
        .expect("built-in Patna network table is well formed")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Up to 8 locations named L0..L7 and arbitrary positive edges among them.
    fn edges_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
        (2usize..8).prop_flat_map(|n| {
            let edge = (0..n, 0..n, 0.1f64..50.0);
            (Just(n), prop::collection::vec(edge, 0..20))
        })
    }

    fn build(n: usize, edges: &[(usize, usize, f64)]) -> RoadNetwork {
        let mut network = RoadNetwork::new();
        for i in 0..n {
            network
                .add_location(Location::parse(&format!("L{i}")).unwrap())
                .unwrap();
        }
        for &(a, b, km) in edges {
            if a == b {
                continue;
            }
            let a = network.locations()[a].clone();
            let b = network.locations()[b].clone();
            network.add_connection(&a, &b, km).unwrap();
        }
        network
    }

    proptest! {
        /// (b, w) is a neighbour of a iff (a, w) is a neighbour of b
        #[test]
        fn neighbors_symmetric((n, edges) in edges_strategy()) {
            let network = build(n, &edges);
            for a in network.locations() {
                for (b, w) in network.neighbors(a).unwrap() {
                    let back = network.neighbors(b).unwrap();
                    prop_assert!(back.contains(&(a, w)));
                }
            }
        }

        /// The listed connections account for every neighbour entry
        #[test]
        fn connection_count_consistent((n, edges) in edges_strategy()) {
            let network = build(n, &edges);
            let degree_sum: usize = network
                .locations()
                .iter()
                .map(|loc| network.neighbors(loc).unwrap().len())
                .sum();
            prop_assert_eq!(degree_sum, 2 * network.connection_count());
            prop_assert_eq!(network.connections().len(), network.connection_count());
        }

        /// The last write for a pair wins
        #[test]
        fn last_connection_wins((n, edges) in edges_strategy()) {
            let network = build(n, &edges);
            let mut expected: HashMap<(usize, usize), f64> = HashMap::new();
            for &(a, b, km) in &edges {
                if a != b {
                    expected.insert((a.min(b), a.max(b)), km);
                }
            }
            for ((a, b), km) in expected {
                let a = &network.locations()[a];
                let b = &network.locations()[b];
                prop_assert_eq!(network.distance_between(a, b), Some(km));
            }
        }
    }
}
