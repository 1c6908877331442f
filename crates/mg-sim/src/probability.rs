//! Per-station probability table and its CSV loader.
//!
//! # CSV format
//!
//! One record per station, no header:
//!
//! ```csv
//! station,dest_prob,src_prob
//! 1,0.8,0.3
//! 2,0.1,0.9
//! ```
//!
//! `dest_prob` is the admission probability used when placing users;
//! `src_prob` is the threshold used when selecting a travel destination.
//! Both must lie in [0, 1].  Records whose label is absent from the graph are
//! ignored — they can never be referenced.  The reverse case, a graph station
//! with no entry, surfaces as a fatal [`SimError::MissingProbability`] on
//! first lookup.

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use mg_core::StationId;
use mg_graph::StationNetwork;

use crate::{SimError, SimResult};

/// Admission and destination probabilities for one station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationProbs {
    pub dest_prob: f64,
    pub src_prob: f64,
}

#[derive(Deserialize)]
struct ProbRecord {
    station: u32,
    dest_prob: f64,
    src_prob: f64,
}

/// Probability table keyed by dense station id.
#[derive(Debug)]
pub struct ProbabilityTable {
    entries: FxHashMap<StationId, StationProbs>,
}

impl ProbabilityTable {
    /// Load the table from a probability distribution file, resolving labels
    /// against `net`.
    pub fn load(path: &Path, net: &StationNetwork) -> SimResult<Self> {
        let file = std::fs::File::open(path).map_err(SimError::Io)?;
        Self::load_reader(file, net)
    }

    /// Like [`load`](Self::load) but accepts any `Read` source.
    pub fn load_reader<R: Read>(reader: R, net: &StationNetwork) -> SimResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut entries = FxHashMap::default();
        for result in csv_reader.deserialize::<ProbRecord>() {
            let rec = result.map_err(|e| SimError::Parse(e.to_string()))?;
            for p in [rec.dest_prob, rec.src_prob] {
                if !(0.0..=1.0).contains(&p) {
                    return Err(SimError::Parse(format!(
                        "station {}: probability {p} outside [0, 1]",
                        rec.station
                    )));
                }
            }
            if let Some(id) = net.resolve(rec.station) {
                entries.insert(
                    id,
                    StationProbs { dest_prob: rec.dest_prob, src_prob: rec.src_prob },
                );
            }
        }

        Ok(Self { entries })
    }

    /// Build a table directly from `(station, probs)` pairs — test and
    /// programmatic use.
    pub fn from_entries(pairs: impl IntoIterator<Item = (StationId, StationProbs)>) -> Self {
        Self { entries: pairs.into_iter().collect() }
    }

    /// Admission probability for placing users at `station`.
    pub fn dest_prob(&self, station: StationId) -> SimResult<f64> {
        self.get(station).map(|p| p.dest_prob)
    }

    /// Destination-selection threshold for `station`.
    pub fn src_prob(&self, station: StationId) -> SimResult<f64> {
        self.get(station).map(|p| p.src_prob)
    }

    fn get(&self, station: StationId) -> SimResult<&StationProbs> {
        self.entries
            .get(&station)
            .ok_or(SimError::MissingProbability(station))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
