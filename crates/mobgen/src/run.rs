//! The graph-walk pipeline: parameters in, two trace files out.
//!
//! All randomness flows through a single [`SimRng`], seeded from the
//! parameter file when a `seed` setting is present, so a run is fully
//! reproducible from its inputs.

use std::path::Path;

use anyhow::Context;
use mg_core::{SimParams, SimRng};
use mg_graph::load_graph;
use mg_sim::{
    ProbabilityTable, VisitingLog, WalkParams, distribute_users, generate_incidents,
    simulate_walks,
};
use mg_trace::{EventsTraceWriter, MobilityTraceWriter};
use tracing::info;

/// Run the full graph-walk pipeline described by one parameter file and
/// return the pre-deduplication incident count.
pub fn generate_graph_walk_trace(params_path: &Path) -> anyhow::Result<usize> {
    let params = SimParams::from_file(params_path)
        .with_context(|| format!("loading parameters from {}", params_path.display()))?;

    let mut rng = match params.seed {
        Some(seed) => SimRng::new(seed),
        None => SimRng::from_entropy(),
    };

    let net = load_graph(&params.graph_file)
        .with_context(|| format!("loading station graph {}", params.graph_file.display()))?;
    info!(
        stations = net.station_count(),
        links = net.link_count(),
        "station graph loaded"
    );

    let table = ProbabilityTable::load(&params.probability_file, &net).with_context(|| {
        format!(
            "loading probability table {}",
            params.probability_file.display()
        )
    })?;

    let placements = distribute_users(params.users, &net, &table, &mut rng)
        .context("distributing users over the network")?;
    info!(users = placements.len(), "users placed");

    let walk_params = WalkParams::from(&params);
    let mut log = VisitingLog::new();
    let mut mobility = MobilityTraceWriter::create(&params.mobility_file).with_context(|| {
        format!(
            "creating mobility trace {}",
            params.mobility_file.display()
        )
    })?;
    simulate_walks(
        &net,
        &table,
        &placements,
        &walk_params,
        &mut log,
        &mut mobility,
        &mut rng,
    )
    .context("simulating user walks")?;
    mobility.finish().context("finalizing mobility trace")?;
    info!(
        stations_visited = log.visited_station_count(),
        visits = log.total_visits(),
        "walks complete"
    );

    let batch = generate_incidents(
        &net,
        &log,
        params.gen_interval,
        params.stop_time,
        &mut rng,
    );
    let mut events = EventsTraceWriter::create(&params.events_file)
        .with_context(|| format!("creating events trace {}", params.events_file.display()))?;
    events
        .write_batch(&batch.incidents)
        .context("writing events trace")?;
    events.finish().context("finalizing events trace")?;
    info!(
        generated = batch.generated,
        written = batch.incidents.len(),
        "incidents generated"
    );

    Ok(batch.generated)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn write_scenario(dir: &Path) -> PathBuf {
        fs::write(
            dir.join("two.graph"),
            "node,1,0,0\nnode,2,10,0\nedge,1,2,10\n",
        )
        .unwrap();
        fs::write(dir.join("two.prob"), "1,1.0,0.0\n2,0.0,1.0\n").unwrap();

        let params_path = dir.join("two.params");
        let params = format!(
            "i_graphfile={}\n\
             o_mobilityfile={}\n\
             o_eventsfile={}\n\
             probdist={}\n\
             users=1\n\
             minspeed=2\n\
             maxspeed=2\n\
             maxpause=0\n\
             radius=0\n\
             startdelay=0\n\
             geninterval=10\n\
             stoptime=20\n\
             seed=1\n",
            dir.join("two.graph").display(),
            dir.join("mobility.tr").display(),
            dir.join("events.tr").display(),
            dir.join("two.prob").display(),
        );
        fs::write(&params_path, params).unwrap();
        params_path
    }

    // With every random range collapsed (fixed speed, zero delay, pause, and
    // radius) the one user's trajectory is fully determined: placed on
    // station 1 (the only admitting station), then one hop to station 2 (the
    // only selectable destination).
    #[test]
    fn end_to_end_deterministic_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let params_path = write_scenario(dir.path());

        let generated = generate_graph_walk_trace(&params_path).unwrap();
        // Two sampling ticks, at t = 0 and t = 10.
        assert_eq!(generated, 2);

        let mobility = fs::read_to_string(dir.path().join("mobility.tr")).unwrap();
        let expected = "$node_(0) set X_ 0\n\
                        $node_(0) set Y_ 0\n\
                        $ns_ at 0 \"$node_(0) setdest 0 0 1.5\"\n\
                        $ns_ at 0 \"$node_(0) setdest 10 0 2\"\n";
        assert_eq!(mobility, expected);

        let events = fs::read_to_string(dir.path().join("events.tr")).unwrap();
        let lines: Vec<&str> = events.lines().collect();
        assert!(!lines.is_empty() && lines.len() <= 2, "{events:?}");
        for line in lines {
            assert!(line.starts_with("$ns_ at "), "{line:?}");
            assert!(line.contains("geninc at "), "{line:?}");
        }
    }

    #[test]
    fn missing_params_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = generate_graph_walk_trace(&dir.path().join("absent.params")).unwrap_err();
        assert!(err.to_string().contains("loading parameters"));
    }

    #[test]
    fn missing_required_setting_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.params");
        fs::write(&path, "users=3\n").unwrap();
        let err = generate_graph_walk_trace(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing required setting"));
    }
}
