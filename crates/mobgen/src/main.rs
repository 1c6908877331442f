//! mobgen — generates the traces needed to simulate an incident-generation
//! experiment for a given scenario: both the users' mobility and the
//! incident events.
//!
//! ```console
//! $ mobgen --model graph-walk --params barcelona.params
//! $ mobgen -m graph-walk -p barcelona.params
//! ```
//!
//! On success the pre-deduplication incident count is printed to stdout.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{CommandFactory, Parser, ValueEnum};

mod run;

/// Exit status for the bare invocation short help.  Distinct from clap's
/// option-error status (2).
const CODE_SHORT_HELP: i32 = 1;

#[derive(Parser)]
#[command(
    name = "mobgen",
    version,
    about = "Generates mobility and incident event traces for a scenario"
)]
struct Cli {
    /// Mobility model used to generate the trace files.
    #[arg(short, long, value_enum)]
    model: MobilityModel,

    /// Path of the file containing simulation parameters.
    #[arg(short, long)]
    params: PathBuf,
}

/// The supported mobility models.  Adding a model is an explicit variant
/// extension with one generator per variant, resolved at startup.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum MobilityModel {
    /// Shortest-path walks over the station graph.
    GraphWalk,
}

fn main() -> anyhow::Result<()> {
    // A bare invocation prints the short help instead of clap's
    // missing-argument error.
    if std::env::args().len() <= 1 {
        Cli::command().print_help().ok();
        process::exit(CODE_SHORT_HELP);
    }
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let generated = match cli.model {
        MobilityModel::GraphWalk => run::generate_graph_walk_trace(&cli.params)
            .with_context(|| format!("generating traces from {}", cli.params.display()))?,
    };

    println!("{generated}");
    Ok(())
}
