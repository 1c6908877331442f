//! Unit tests for mg-core.

mod geo {
    use crate::geo::{Point, offset_walk_distance};

    #[test]
    fn euclidean_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn zero_distance() {
        let p = Point::new(2.5, -1.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn offset_and_diagonal() {
        let p = Point::new(1.0, 2.0);
        let o = p.offset(10.0);
        assert_eq!(o, Point::new(11.0, 12.0));
        // Walking back from the offset position covers sqrt(2) * radius.
        assert!((offset_walk_distance(10.0) - 200f64.sqrt()).abs() < 1e-12);
        assert_eq!(offset_walk_distance(0.0), 0.0);
    }
}

mod rng {
    use crate::SimRng;

    #[test]
    fn seeded_runs_are_identical() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..32 {
            let x: f64 = a.random();
            let y: f64 = b.random();
            assert_eq!(x, y);
        }
    }

    #[test]
    fn unit_draws_are_half_open() {
        let mut rng = SimRng::new(123);
        for _ in 0..1_000 {
            let v: f64 = rng.random();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(1);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5]), Some(&5));
    }
}

mod params {
    use crate::{MgError, SimParams};

    const COMPLETE: &str = "\
i_graphfile=city.graph
o_mobilityfile=mobility.tr
o_eventsfile=events.tr
probdist=city.prob
users=10
minspeed=5.0
maxspeed=15.0
maxpause=30.0
radius=10.0
startdelay=60.0
geninterval=30.0
stoptime=3600.0
";

    #[test]
    fn complete_file_parses() {
        let p = SimParams::parse(COMPLETE).unwrap();
        assert_eq!(p.graph_file.to_str(), Some("city.graph"));
        assert_eq!(p.users, 10);
        assert_eq!(p.min_speed, 5.0);
        assert_eq!(p.stop_time, 3600.0);
        assert_eq!(p.seed, None);
    }

    #[test]
    fn seed_is_optional() {
        let text = format!("{COMPLETE}seed=99\n");
        let p = SimParams::parse(&text).unwrap();
        assert_eq!(p.seed, Some(99));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let text = format!("{COMPLETE}some_future_setting=yes\n");
        assert!(SimParams::parse(&text).is_ok());
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        let text = format!("# run parameters\n\n{COMPLETE}\n");
        assert!(SimParams::parse(&text).is_ok());
    }

    #[test]
    fn missing_keys_are_reported_by_name() {
        let text = COMPLETE.replace("stoptime=3600.0\n", "");
        let err = SimParams::parse(&text).unwrap_err();
        match err {
            MgError::Config(msg) => assert!(msg.contains("stoptime"), "{msg}"),
            other => panic!("expected Config error, got {other}"),
        }
    }

    #[test]
    fn malformed_value_is_a_parse_error() {
        let text = COMPLETE.replace("users=10", "users=ten");
        assert!(matches!(SimParams::parse(&text), Err(MgError::Parse(_))));
    }

    #[test]
    fn line_without_equals_is_rejected() {
        let text = format!("{COMPLETE}justakey\n");
        assert!(matches!(SimParams::parse(&text), Err(MgError::Parse(_))));
    }

    #[test]
    fn inverted_speed_range_is_rejected() {
        let text = COMPLETE.replace("minspeed=5.0", "minspeed=20.0");
        assert!(matches!(SimParams::parse(&text), Err(MgError::Config(_))));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let text = COMPLETE.replace("geninterval=30.0", "geninterval=0");
        assert!(matches!(SimParams::parse(&text), Err(MgError::Config(_))));
    }
}

mod ids {
    use crate::{StationId, UserId};

    #[test]
    fn ordering_and_index() {
        assert!(StationId(1) < StationId(2));
        assert_eq!(UserId(7).index(), 7);
        assert_eq!(StationId::INVALID, StationId(u32::MAX));
    }
}
