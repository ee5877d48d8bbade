use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{StationId, Time, TransitGraph, UNREACHABLE};

#[derive(Copy, Clone, PartialEq, Eq)]
struct State {
    cost: Time,
    station: StationId,
}

// Min-heap by cost
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse ordering for min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Answer to a single query. `via` lists the intermediate station names in
/// travel order, excluding both endpoints; it is empty when no path was
/// requested, when the destination is unreachable, or when the best route
/// is direct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub time: Time,
    pub via: Vec<String>,
}

/// Dijkstra from `from`, reading off the distance to `to` and, when asked,
/// the intermediate stations of an optimal path. All edge weights are
/// non-negative times, which is what makes this correct. The full
/// single-source tree is computed; working arrays are per-call, so queries
/// never observe each other.
pub fn route(graph: &TransitGraph, from: StationId, to: StationId, want_path: bool) -> Route {
    let n = graph.len();
    let mut dist = vec![UNREACHABLE; n];
    let mut prev: Vec<Option<StationId>> = vec![None; n];
    let mut heap = BinaryHeap::new();

    dist[from] = 0;
    heap.push(State { cost: 0, station: from });

    while let Some(State { cost, station }) = heap.pop() {
        if cost > dist[station] {
            continue;
        }
        for &(next, time) in graph.neighbors(station) {
            // Saturate so a near-sentinel weight reads as unreachable
            // instead of wrapping past it.
            let next_cost = cost.saturating_add(time);
            if next_cost < dist[next] {
                dist[next] = next_cost;
                prev[next] = Some(station);
                heap.push(State { cost: next_cost, station: next });
            }
        }
    }

    let time = dist[to];
    let mut via = Vec::new();
    if want_path && time != UNREACHABLE {
        // Walk predecessors back from the destination, keeping only the
        // stations strictly between the endpoints.
        let mut current = to;
        while let Some(parent) = prev[current] {
            if parent == from {
                break;
            }
            via.push(graph.station(parent).name.clone());
            current = parent;
        }
        via.reverse();
    }
    Route { time, via }
}
