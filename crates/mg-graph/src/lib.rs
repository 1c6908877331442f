//! `mg-graph` — the station network and shortest-path routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`network`] | `StationNetwork` (CSR adjacency), `StationNetworkBuilder` |
//! | [`router`]  | `Route`, Dijkstra `shortest_path`                       |
//! | [`loader`]  | CSV graph file reader                                   |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                          |

pub mod error;
pub mod loader;
pub mod network;
pub mod router;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use loader::{load_graph, load_graph_reader};
pub use network::{StationNetwork, StationNetworkBuilder};
pub use router::{Route, shortest_path};
