//! Dijkstra shortest-path search.
//!
//! Finds the route with the smallest total road distance between two
//! locations. The search stops as soon as the destination is settled.

use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::domain::{Location, LocationId, Route, TripError};
use crate::network::RoadNetwork;

use super::frontier::FrontierEntry;

/// A route together with its total distance.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub route: Route,
    pub distance_km: f64,
}

/// Outcome of a shortest-path query.
///
/// A missing path is an ordinary answer, not an error: callers match on
/// `NoPath` and tell the user there is no route.
#[derive(Debug, Clone, PartialEq)]
pub enum PathOutcome {
    /// A shortest route exists
    Found(ShortestPath),
    /// Source and destination are in disconnected parts of the network
    NoPath {
        source: Location,
        destination: Location,
    },
}

impl PathOutcome {
    /// Total distance, or infinity when there is no path.
    pub fn distance_km(&self) -> f64 {
        match self {
            PathOutcome::Found(path) => path.distance_km,
            PathOutcome::NoPath { .. } => f64::INFINITY,
        }
    }

    /// Returns the route if one was found.
    pub fn route(&self) -> Option<&Route> {
        match self {
            PathOutcome::Found(path) => Some(&path.route),
            PathOutcome::NoPath { .. } => None,
        }
    }

    /// Returns true if a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    /// Convert to a `Result`, turning `NoPath` into `TripError::NoPath`.
    pub fn into_result(self) -> Result<ShortestPath, TripError> {
        match self {
            PathOutcome::Found(path) => Ok(path),
            PathOutcome::NoPath {
                source,
                destination,
            } => Err(TripError::NoPath {
                origin: source,
                destination,
            }),
        }
    }
}

/// Find the shortest route from `source` to `destination`.
///
/// When several routes share the minimum distance the one returned is
/// implementation-defined (currently: lower location ids win ties).
///
/// # Errors
///
/// Returns `UnknownLocation` if either endpoint is not in `network`.
pub fn find_shortest_path(
    network: &RoadNetwork,
    source: &Location,
    destination: &Location,
) -> Result<PathOutcome, TripError> {
    let source_id = network
        .id_of(source)
        .ok_or_else(|| TripError::UnknownLocation(source.clone()))?;
    let destination_id = network
        .id_of(destination)
        .ok_or_else(|| TripError::UnknownLocation(destination.clone()))?;

    if source_id == destination_id {
        return Ok(PathOutcome::Found(ShortestPath {
            route: Route::single(source.clone()),
            distance_km: 0.0,
        }));
    }

    let n = network.len();
    let mut best = vec![f64::INFINITY; n];
    let mut previous: Vec<Option<LocationId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut settled_count = 0usize;

    let mut frontier = BinaryHeap::new();
    best[source_id.0] = 0.0;
    frontier.push(FrontierEntry {
        distance_km: 0.0,
        location: source_id,
    });

    while let Some(FrontierEntry {
        distance_km,
        location,
    }) = frontier.pop()
    {
        if settled[location.0] {
            continue; // Stale entry
        }
        settled[location.0] = true;
        settled_count += 1;

        trace!(
            location = %network.location(location).map(Location::as_str).unwrap_or("?"),
            distance_km,
            "Settled location"
        );

        if location == destination_id {
            break;
        }

        for (next, weight) in network.edges_from(location) {
            if settled[next.0] {
                continue;
            }
            let candidate = distance_km + weight;
            if candidate < best[next.0] {
                best[next.0] = candidate;
                previous[next.0] = Some(location);
                frontier.push(FrontierEntry {
                    distance_km: candidate,
                    location: next,
                });
            }
        }
    }

    if !settled[destination_id.0] {
        debug!(
            source = %source,
            destination = %destination,
            settled = settled_count,
            "Frontier exhausted without reaching destination"
        );
        return Ok(PathOutcome::NoPath {
            source: source.clone(),
            destination: destination.clone(),
        });
    }

    // Walk predecessor links back to the source
    let mut ids = vec![destination_id];
    let mut cursor = destination_id;
    while let Some(prev) = previous[cursor.0] {
        ids.push(prev);
        cursor = prev;
    }
    ids.reverse();

    let stops = ids
        .into_iter()
        .filter_map(|id| network.location(id).cloned())
        .collect();
    let route = Route::new(stops)?;
    let distance_km = best[destination_id.0];

    debug!(
        source = %source,
        destination = %destination,
        distance_km,
        stops = route.len(),
        settled = settled_count,
        "Shortest path found"
    );

    Ok(PathOutcome::Found(ShortestPath { route, distance_km }))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    /// Random networks of 2..8 locations with integer-ish positive weights.
    fn network_strategy() -> impl Strategy<Value = RoadNetwork> {
        (2usize..8)
            .prop_flat_map(|n| {
                let edge = (0..n, 0..n, 1u32..100);
                (Just(n), prop::collection::vec(edge, 0..24))
            })
            .prop_map(|(n, edges)| {
                let mut network = RoadNetwork::new();
                for i in 0..n {
                    network
                        .add_location(Location::parse(&format!("L{i}")).unwrap())
                        .unwrap();
                }
                for (a, b, tenths) in edges {
                    if a == b {
                        continue;
                    }
                    let a = network.locations()[a].clone();
                    let b = network.locations()[b].clone();
                    network
                        .add_connection(&a, &b, f64::from(tenths) / 10.0)
                        .unwrap();
                }
                network
            })
    }

    /// Exhaustive all-pairs reference distances.
    fn floyd_warshall(network: &RoadNetwork) -> Vec<Vec<f64>> {
        let n = network.len();
        let mut dist = vec![vec![f64::INFINITY; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = 0.0;
            for (j, km) in network.edges_from(LocationId(i)) {
                row[j.0] = km;
            }
        }
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    let via = dist[i][k] + dist[k][j];
                    if via < dist[i][j] {
                        dist[i][j] = via;
                    }
                }
            }
        }
        dist
    }

    fn distance(network: &RoadNetwork, a: &Location, b: &Location) -> f64 {
        find_shortest_path(network, a, b).unwrap().distance_km()
    }

    proptest! {
        /// Dijkstra agrees with the exhaustive reference
        #[test]
        fn matches_reference(network in network_strategy()) {
            let reference = floyd_warshall(&network);
            for (i, a) in network.locations().iter().enumerate() {
                for (j, b) in network.locations().iter().enumerate() {
                    let got = distance(&network, a, b);
                    let want = reference[i][j];
                    if want.is_infinite() {
                        prop_assert!(got.is_infinite());
                    } else {
                        prop_assert!((got - want).abs() < EPS, "{a}->{b}: got {got}, want {want}");
                    }
                }
            }
        }

        /// Shortest distance is the same in both directions
        #[test]
        fn symmetric_distance(network in network_strategy()) {
            for a in network.locations() {
                for b in network.locations() {
                    let there = distance(&network, a, b);
                    let back = distance(&network, b, a);
                    if there.is_infinite() {
                        prop_assert!(back.is_infinite());
                    } else {
                        prop_assert!((there - back).abs() < EPS);
                    }
                }
            }
        }

        /// Going via any intermediate location is never shorter
        #[test]
        fn triangle_inequality(network in network_strategy()) {
            for s in network.locations() {
                for d in network.locations() {
                    for m in network.locations() {
                        let direct = distance(&network, s, d);
                        let via = distance(&network, s, m) + distance(&network, m, d);
                        prop_assert!(direct <= via + EPS);
                    }
                }
            }
        }

        /// Returned routes are real paths whose weights add up to the distance
        #[test]
        fn route_is_consistent(network in network_strategy()) {
            for s in network.locations() {
                for d in network.locations() {
                    if let PathOutcome::Found(path) = find_shortest_path(&network, s, d).unwrap() {
                        prop_assert_eq!(path.route.origin(), s);
                        prop_assert_eq!(path.route.destination(), d);
                        let summed = path.route.distance_km(&network).unwrap();
                        prop_assert!((summed - path.distance_km).abs() < EPS);
                    }
                }
            }
        }
    }
}
