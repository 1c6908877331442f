//! Station network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing links.
//! Given a `StationId s`, its outgoing links occupy the slice:
//!
//! ```text
//! link_from[ node_out_start[s] .. node_out_start[s+1] ]
//! ```
//!
//! All link arrays (`link_from`, `link_to`, `link_weight`) are sorted by
//! source station and indexed by `LinkId`, so iterating a station's
//! neighbours is a contiguous memory scan — ideal for Dijkstra's inner loop.
//!
//! # Labels
//!
//! Stations carry the external `u32` label under which they appear in the
//! graph file, the probability file, and the output traces.  Internally they
//! are addressed by dense `StationId` indices; `resolve`/`label` convert
//! between the two.
//!
//! # Interchange links
//!
//! A stored weight of exactly 0 marks an interchange between co-located
//! lines.  Routing uses the stored weight as-is (a free transfer), but
//! movement time uses [`StationNetwork::hop_distance`], which falls back to
//! the Euclidean distance between the two stations' coordinates.

use rustc_hash::FxHashMap;

use mg_core::{LinkId, Point, StationId};

use crate::{GraphError, GraphResult};

// ── StationNetwork ────────────────────────────────────────────────────────────

/// Undirected station graph in CSR format (each undirected edge is stored as
/// two directed links).
///
/// The array fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`StationNetworkBuilder`].
#[derive(Debug)]
pub struct StationNetwork {
    /// Position of each station.  Indexed by `StationId`.
    pub node_pos: Vec<Point>,

    /// External label of each station.  Indexed by `StationId`.
    node_label: Vec<u32>,

    /// Label → dense id lookup.
    label_to_id: FxHashMap<u32, StationId>,

    /// CSR row pointer.  Outgoing links of station `s` are at LinkIds
    /// `node_out_start[s] .. node_out_start[s+1]`.  Length = station count + 1.
    pub node_out_start: Vec<u32>,

    /// Source station of each link.
    pub link_from: Vec<StationId>,

    /// Destination station of each link.
    pub link_to: Vec<StationId>,

    /// Travel distance of each link.  0 marks an interchange link.
    pub link_weight: Vec<f64>,
}

impl StationNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn station_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn link_count(&self) -> usize {
        self.link_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    /// Iterator over all station ids in dense order.
    pub fn stations(&self) -> impl Iterator<Item = StationId> + '_ {
        (0..self.node_pos.len()).map(|i| StationId(i as u32))
    }

    // ── Node accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self, station: StationId) -> Point {
        self.node_pos[station.index()]
    }

    /// External label of `station` as it appears in input and output files.
    #[inline]
    pub fn label(&self, station: StationId) -> u32 {
        self.node_label[station.index()]
    }

    /// Dense id for an external label, if the station exists.
    pub fn resolve(&self, label: u32) -> Option<StationId> {
        self.label_to_id.get(&label).copied()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `LinkId`s of all outgoing links from `station`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_links(&self, station: StationId) -> impl Iterator<Item = LinkId> + '_ {
        let start = self.node_out_start[station.index()] as usize;
        let end = self.node_out_start[station.index() + 1] as usize;
        (start..end).map(|i| LinkId(i as u32))
    }

    /// Stored weight of the link `from → to`, if the stations are adjacent.
    pub fn link_weight_between(&self, from: StationId, to: StationId) -> Option<f64> {
        self.out_links(from)
            .find(|&l| self.link_to[l.index()] == to)
            .map(|l| self.link_weight[l.index()])
    }

    /// Movement distance for the hop `from → to`: the stored link weight, or
    /// the Euclidean distance between the stations when the weight is exactly
    /// 0 (an interchange link carries no intrinsic travel cost).
    ///
    /// Returns `None` if the stations are not adjacent.
    pub fn hop_distance(&self, from: StationId, to: StationId) -> Option<f64> {
        self.link_weight_between(from, to).map(|w| {
            if w == 0.0 {
                self.position(from).distance(self.position(to))
            } else {
                w
            }
        })
    }
}

// ── StationNetworkBuilder ─────────────────────────────────────────────────────

/// Construct a [`StationNetwork`] incrementally, then call
/// [`build`](Self::build).
///
/// The builder accepts stations and undirected links in any order.  `build()`
/// sorts links by source station and constructs the CSR arrays.
pub struct StationNetworkBuilder {
    nodes: Vec<Point>,
    labels: Vec<u32>,
    label_to_id: FxHashMap<u32, StationId>,
    raw_links: Vec<RawLink>,
}

struct RawLink {
    from: StationId,
    to: StationId,
    weight: f64,
}

impl StationNetworkBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            labels: Vec::new(),
            label_to_id: FxHashMap::default(),
            raw_links: Vec::new(),
        }
    }

    /// Add a station under an external label and return its dense id
    /// (sequential from 0).  Duplicate labels are rejected.
    pub fn add_station(&mut self, label: u32, pos: Point) -> GraphResult<StationId> {
        let id = StationId(self.nodes.len() as u32);
        if self.label_to_id.insert(label, id).is_some() {
            return Err(GraphError::DuplicateStation(label));
        }
        self.nodes.push(pos);
        self.labels.push(label);
        Ok(id)
    }

    /// Add an **undirected** link between `a` and `b` (stored as two directed
    /// links).  A weight of 0 marks an interchange link.
    pub fn add_link(&mut self, a: StationId, b: StationId, weight: f64) {
        self.raw_links.push(RawLink { from: a, to: b, weight });
        self.raw_links.push(RawLink { from: b, to: a, weight });
    }

    /// Dense id for a label added earlier (used by the loader to resolve
    /// edge endpoints).
    pub fn resolve(&self, label: u32) -> Option<StationId> {
        self.label_to_id.get(&label).copied()
    }

    pub fn station_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the builder and produce a [`StationNetwork`].
    ///
    /// Time complexity: O(E log E) for the link sort.
    pub fn build(self) -> StationNetwork {
        let node_count = self.nodes.len();
        let link_count = self.raw_links.len();

        // Sort links by source station for CSR construction.
        let mut raw = self.raw_links;
        raw.sort_unstable_by_key(|l| l.from.0);

        let link_from: Vec<StationId> = raw.iter().map(|l| l.from).collect();
        let link_to: Vec<StationId> = raw.iter().map(|l| l.to).collect();
        let link_weight: Vec<f64> = raw.iter().map(|l| l.weight).collect();

        // Build CSR row pointer.
        let mut node_out_start = vec![0u32; node_count + 1];
        for l in &raw {
            node_out_start[l.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, link_count);

        StationNetwork {
            node_pos: self.nodes,
            node_label: self.labels,
            label_to_id: self.label_to_id,
            node_out_start,
            link_from,
            link_to,
            link_weight,
        }
    }
}

impl Default for StationNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
