//! CSV graph file reader.
//!
//! # File format
//!
//! Two record kinds, distinguished by the first field:
//!
//! ```csv
//! node,1,41.38,2.17
//! node,2,41.39,2.18
//! node,3,41.39,2.18
//! edge,1,2,830.0
//! edge,2,3,0
//! ```
//!
//! - `node,<label>,<x>,<y>` — a station under an external `u32` label with
//!   plain coordinates.
//! - `edge,<label>,<label>,<weight>` — an undirected link; weight 0 marks an
//!   interchange between co-located stations.
//!
//! Edges may reference labels defined later in the file; resolution happens
//! after all records are read.  Lines starting with `#` are comments.

use std::io::Read;
use std::path::Path;

use mg_core::Point;

use crate::network::{StationNetwork, StationNetworkBuilder};
use crate::{GraphError, GraphResult};

/// Load a [`StationNetwork`] from a graph file.
pub fn load_graph(path: &Path) -> GraphResult<StationNetwork> {
    let file = std::fs::File::open(path).map_err(GraphError::Io)?;
    load_graph_reader(file)
}

/// Like [`load_graph`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_graph_reader<R: Read>(reader: R) -> GraphResult<StationNetwork> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut builder = StationNetworkBuilder::new();
    let mut pending_edges: Vec<(u32, u32, f64)> = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        match record.get(0) {
            Some("node") => {
                let label = parse_field(&record, 1, "node label")?;
                let x = parse_field(&record, 2, "node x")?;
                let y = parse_field(&record, 3, "node y")?;
                builder.add_station(label, Point::new(x, y))?;
            }
            Some("edge") => {
                let from = parse_field(&record, 1, "edge source")?;
                let to = parse_field(&record, 2, "edge destination")?;
                let weight: f64 = parse_field(&record, 3, "edge weight")?;
                if weight < 0.0 {
                    return Err(GraphError::NegativeWeight { from, to, weight });
                }
                pending_edges.push((from, to, weight));
            }
            Some(other) => {
                return Err(GraphError::Parse(format!(
                    "unknown record kind {other:?}: expected \"node\" or \"edge\""
                )));
            }
            None => {
                return Err(GraphError::Parse("empty record".into()));
            }
        }
    }

    for (from, to, weight) in pending_edges {
        let a = builder.resolve(from).ok_or(GraphError::UnknownStation(from))?;
        let b = builder.resolve(to).ok_or(GraphError::UnknownStation(to))?;
        builder.add_link(a, b, weight);
    }

    Ok(builder.build())
}

fn parse_field<T: std::str::FromStr>(
    record: &csv::StringRecord,
    idx: usize,
    what: &str,
) -> GraphResult<T> {
    let raw = record
        .get(idx)
        .ok_or_else(|| GraphError::Parse(format!("missing {what} field")))?;
    raw.parse()
        .map_err(|_| GraphError::Parse(format!("invalid {what}: {raw:?}")))
}
