//! Dijkstra shortest-path routing over the station network.
//!
//! Paths are computed on the stored link weights (non-negative, so plain
//! Dijkstra applies).  Interchange links keep their stored weight of 0 here —
//! a free transfer from the router's point of view; the movement-time
//! fallback lives in [`StationNetwork::hop_distance`].
//!
//! An unreachable destination is a fatal input error
//! ([`GraphError::NoRoute`]): the simulation's invariant is that a path
//! exists between any two sampled stations.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use mg_core::{LinkId, StationId};

use crate::network::StationNetwork;
use crate::{GraphError, GraphResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the visited stations in order (source
/// first, destination last) and the summed link weight.
#[derive(Debug, Clone)]
pub struct Route {
    /// Stations on the path, starting with the source.  Never empty.
    pub stations: Vec<StationId>,
    /// Total stored weight along the path.
    pub total_weight: f64,
}

impl Route {
    /// The stations still to be visited after the source.
    #[inline]
    pub fn hops(&self) -> &[StationId] {
        &self.stations[1..]
    }

    /// `true` if source and destination are the same station.
    pub fn is_trivial(&self) -> bool {
        self.stations.len() <= 1
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Total-ordered wrapper so f64 path costs can live in the binary heap.
/// Weights are non-negative and finite, so `total_cmp` agrees with the usual
/// numeric order.
#[derive(Copy, Clone, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Standard Dijkstra's algorithm over the CSR station graph.
///
/// `from == to` yields the trivial single-station route rather than an error.
pub fn shortest_path(
    net: &StationNetwork,
    from: StationId,
    to: StationId,
) -> GraphResult<Route> {
    if from == to {
        return Ok(Route { stations: vec![from], total_weight: 0.0 });
    }

    let n = net.station_count();
    // dist[s] = best known cost to reach s.
    let mut dist = vec![f64::INFINITY; n];
    // prev_link[s] = LinkId that reached s; LinkId::INVALID for unreached.
    let mut prev_link = vec![LinkId::INVALID; n];

    dist[from.index()] = 0.0;

    // Min-heap: (cost, station). Reverse makes BinaryHeap (max) behave as a
    // min-heap; the StationId secondary key makes tie-breaking deterministic.
    let mut heap: BinaryHeap<Reverse<(Cost, StationId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), from)));

    while let Some(Reverse((Cost(cost), station))) = heap.pop() {
        if station == to {
            return Ok(reconstruct(net, &prev_link, from, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[station.index()] {
            continue;
        }

        for link in net.out_links(station) {
            let neighbor = net.link_to[link.index()];
            let new_cost = cost + net.link_weight[link.index()];

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_link[neighbor.index()] = link;
                heap.push(Reverse((Cost(new_cost), neighbor)));
            }
        }
    }

    Err(GraphError::NoRoute { from, to })
}

fn reconstruct(
    net: &StationNetwork,
    prev_link: &[LinkId],
    from: StationId,
    to: StationId,
    total_weight: f64,
) -> Route {
    let mut stations = vec![to];
    let mut cur = to;
    while cur != from {
        let l = prev_link[cur.index()];
        debug_assert!(l != LinkId::INVALID);
        cur = net.link_from[l.index()];
        stations.push(cur);
    }
    stations.reverse();
    Route { stations, total_weight }
}
