//! Unit tests for mg-graph.
//!
//! All tests use hand-crafted networks; no graph file on disk is required.

mod helpers {
    use mg_core::{Point, StationId};

    use crate::{StationNetwork, StationNetworkBuilder};

    /// Build a small test network.
    ///
    /// Stations (label: position):
    ///   10:(0,0)  11:(0,1)  12:(0,2)
    ///   13:(1,0)            14:(1,2)
    ///
    /// Undirected links (weights chosen so the light path is unambiguous):
    ///   10-11 (1), 11-12 (1), 12-14 (1), 10-13 (5), 13-14 (1)
    ///
    /// Shortest path 10→14 is 10→11→12→14 (weight 3) vs 10→13→14 (weight 6).
    pub fn grid_network() -> (StationNetwork, [StationId; 5]) {
        let mut b = StationNetworkBuilder::new();
        let n0 = b.add_station(10, Point::new(0.0, 0.0)).unwrap();
        let n1 = b.add_station(11, Point::new(0.0, 1.0)).unwrap();
        let n2 = b.add_station(12, Point::new(0.0, 2.0)).unwrap();
        let n3 = b.add_station(13, Point::new(1.0, 0.0)).unwrap();
        let n4 = b.add_station(14, Point::new(1.0, 2.0)).unwrap();

        b.add_link(n0, n1, 1.0);
        b.add_link(n1, n2, 1.0);
        b.add_link(n2, n4, 1.0);
        b.add_link(n0, n3, 5.0);
        b.add_link(n3, n4, 1.0);

        (b.build(), [n0, n1, n2, n3, n4])
    }
}

// ── Builder & network structure ───────────────────────────────────────────────

mod network {
    use mg_core::Point;

    use crate::{GraphError, StationNetworkBuilder};

    #[test]
    fn empty_build() {
        let net = StationNetworkBuilder::new().build();
        assert_eq!(net.station_count(), 0);
        assert_eq!(net.link_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn undirected_links_are_stored_twice() {
        let mut b = StationNetworkBuilder::new();
        let a = b.add_station(1, Point::new(0.0, 0.0)).unwrap();
        let c = b.add_station(2, Point::new(3.0, 4.0)).unwrap();
        b.add_link(a, c, 7.0);
        let net = b.build();
        assert_eq!(net.station_count(), 2);
        assert_eq!(net.link_count(), 2);
        assert_eq!(net.link_weight_between(a, c), Some(7.0));
        assert_eq!(net.link_weight_between(c, a), Some(7.0));
    }

    #[test]
    fn labels_resolve_both_ways() {
        let (net, [n0, _, _, _, n4]) = super::helpers::grid_network();
        assert_eq!(net.label(n0), 10);
        assert_eq!(net.label(n4), 14);
        assert_eq!(net.resolve(14), Some(n4));
        assert_eq!(net.resolve(99), None);
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let mut b = StationNetworkBuilder::new();
        b.add_station(5, Point::new(0.0, 0.0)).unwrap();
        let err = b.add_station(5, Point::new(1.0, 1.0)).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateStation(5)));
    }

    #[test]
    fn csr_out_links() {
        let (net, [n0, n1, _, _, _]) = super::helpers::grid_network();
        // Every outgoing link from n0 has n0 as its source.
        for l in net.out_links(n0) {
            assert_eq!(net.link_from[l.index()], n0);
        }
        // n1 is reachable from n0.
        assert!(net.out_links(n0).any(|l| net.link_to[l.index()] == n1));
        assert_eq!(net.out_links(n0).count(), 2); // 10-11, 10-13
    }

    #[test]
    fn non_adjacent_stations_have_no_link() {
        let (net, [n0, _, n2, _, _]) = super::helpers::grid_network();
        assert_eq!(net.link_weight_between(n0, n2), None);
        assert_eq!(net.hop_distance(n0, n2), None);
    }

    #[test]
    fn zero_weight_hop_falls_back_to_euclidean() {
        let mut b = StationNetworkBuilder::new();
        let a = b.add_station(1, Point::new(0.0, 0.0)).unwrap();
        let c = b.add_station(2, Point::new(3.0, 4.0)).unwrap();
        b.add_link(a, c, 0.0);
        let net = b.build();
        // Routing sees a free transfer; movement covers the real distance.
        assert_eq!(net.link_weight_between(a, c), Some(0.0));
        assert_eq!(net.hop_distance(a, c), Some(5.0));
    }

    #[test]
    fn positive_weight_hop_uses_stored_weight() {
        let mut b = StationNetworkBuilder::new();
        let a = b.add_station(1, Point::new(0.0, 0.0)).unwrap();
        let c = b.add_station(2, Point::new(3.0, 4.0)).unwrap();
        b.add_link(a, c, 830.0);
        let net = b.build();
        assert_eq!(net.hop_distance(a, c), Some(830.0));
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

mod routing {
    use mg_core::Point;

    use crate::{GraphError, StationNetworkBuilder, shortest_path};

    #[test]
    fn picks_the_lighter_multi_hop_path() {
        let (net, [n0, n1, n2, _, n4]) = super::helpers::grid_network();
        let route = shortest_path(&net, n0, n4).unwrap();
        assert_eq!(route.stations, vec![n0, n1, n2, n4]);
        assert_eq!(route.total_weight, 3.0);
        assert_eq!(route.hops(), &[n1, n2, n4]);
    }

    #[test]
    fn trivial_route_to_self() {
        let (net, [n0, ..]) = super::helpers::grid_network();
        let route = shortest_path(&net, n0, n0).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.stations, vec![n0]);
        assert!(route.hops().is_empty());
        assert_eq!(route.total_weight, 0.0);
    }

    #[test]
    fn zero_weight_links_route_for_free() {
        let mut b = StationNetworkBuilder::new();
        let a = b.add_station(1, Point::new(0.0, 0.0)).unwrap();
        let mid = b.add_station(2, Point::new(0.0, 0.0)).unwrap();
        let c = b.add_station(3, Point::new(5.0, 0.0)).unwrap();
        b.add_link(a, mid, 0.0); // interchange
        b.add_link(mid, c, 2.0);
        let net = b.build();
        let route = shortest_path(&net, a, c).unwrap();
        assert_eq!(route.stations, vec![a, mid, c]);
        assert_eq!(route.total_weight, 2.0);
    }

    #[test]
    fn disconnected_components_are_fatal() {
        let mut b = StationNetworkBuilder::new();
        let a = b.add_station(1, Point::new(0.0, 0.0)).unwrap();
        let c = b.add_station(2, Point::new(9.0, 9.0)).unwrap();
        let net = b.build();
        let err = shortest_path(&net, a, c).unwrap_err();
        assert!(matches!(err, GraphError::NoRoute { .. }));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

mod loader {
    use std::io::Cursor;

    use crate::{GraphError, load_graph_reader};

    const GRAPH: &str = "\
node,1,0.0,0.0
node,2,0.0,10.0
node,3,3.0,14.0
edge,1,2,10.0
edge,2,3,0
";

    #[test]
    fn nodes_and_edges_load() {
        let net = load_graph_reader(Cursor::new(GRAPH)).unwrap();
        assert_eq!(net.station_count(), 3);
        assert_eq!(net.link_count(), 4); // two undirected edges

        let a = net.resolve(1).unwrap();
        let b = net.resolve(2).unwrap();
        let c = net.resolve(3).unwrap();
        assert_eq!(net.link_weight_between(a, b), Some(10.0));
        // Zero-weight interchange: movement distance is Euclidean (3-4-5).
        assert_eq!(net.hop_distance(b, c), Some(5.0));
    }

    #[test]
    fn edges_may_precede_their_nodes() {
        let text = "edge,1,2,4.0\nnode,1,0.0,0.0\nnode,2,0.0,4.0\n";
        let net = load_graph_reader(Cursor::new(text)).unwrap();
        assert_eq!(net.link_count(), 2);
    }

    #[test]
    fn unknown_edge_endpoint_is_an_error() {
        let text = "node,1,0.0,0.0\nedge,1,9,4.0\n";
        let err = load_graph_reader(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, GraphError::UnknownStation(9)));
    }

    #[test]
    fn negative_weight_is_an_error() {
        let text = "node,1,0.0,0.0\nnode,2,1.0,0.0\nedge,1,2,-3.0\n";
        let err = load_graph_reader(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, GraphError::NegativeWeight { .. }));
    }

    #[test]
    fn unknown_record_kind_is_an_error() {
        let text = "station,1,0.0,0.0\n";
        let err = load_graph_reader(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, GraphError::Parse(_)));
    }

    #[test]
    fn comments_are_skipped() {
        let text = "# city graph\nnode,1,0.0,0.0\n";
        let net = load_graph_reader(Cursor::new(text)).unwrap();
        assert_eq!(net.station_count(), 1);
    }
}
