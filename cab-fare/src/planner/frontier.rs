use std::cmp::Ordering;

use crate::domain::LocationId;

/// A location waiting in the Dijkstra frontier with its tentative distance.
#[derive(Debug, Copy, Clone)]
pub(super) struct FrontierEntry {
    pub(super) distance_km: f64,
    pub(super) location: LocationId,
}

// Min-heap by distance (reversed from standard Rust BinaryHeap).
// Equal distances pop the lower id first so results are reproducible.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance_km
            .total_cmp(&self.distance_km)
            .then_with(|| other.location.cmp(&self.location))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

#[cfg(test)]
mod tests {
    use std::collections::BinaryHeap;

    use super::*;

    fn entry(distance_km: f64, id: usize) -> FrontierEntry {
        FrontierEntry {
            distance_km,
            location: LocationId(id),
        }
    }

    #[test]
    fn heap_pops_smallest_distance() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(3.0, 0));
        heap.push(entry(1.2, 1));
        heap.push(entry(2.5, 2));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|e| e.location.0)
            .collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn ties_pop_lower_id_first() {
        let mut heap = BinaryHeap::new();
        heap.push(entry(1.0, 5));
        heap.push(entry(1.0, 2));

        assert_eq!(heap.pop().unwrap().location, LocationId(2));
        assert_eq!(heap.pop().unwrap().location, LocationId(5));
    }
}
