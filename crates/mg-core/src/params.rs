//! Run parameters: a validated structure loaded from a line-oriented
//! `key=value` file.
//!
//! # File format
//!
//! One setting per line, `key=value`, no quoting.  Blank lines and lines
//! starting with `#` are skipped; unrecognized keys are ignored so parameter
//! files can carry settings for external tools.
//!
//! ```text
//! i_graphfile=barcelona.graph
//! o_mobilityfile=mobility.tr
//! o_eventsfile=events.tr
//! probdist=barcelona.prob
//! users=120
//! minspeed=5.0
//! maxspeed=15.0
//! maxpause=30.0
//! radius=10.0
//! startdelay=60.0
//! geninterval=30.0
//! stoptime=3600.0
//! seed=42
//! ```
//!
//! Every key except `seed` is required; missing or malformed keys fail at
//! load time with a descriptive error rather than surfacing at first use.

use std::path::{Path, PathBuf};

use crate::{MgError, MgResult};

/// All settings for one generator run.
#[derive(Clone, Debug)]
pub struct SimParams {
    /// Input station graph (`i_graphfile`).
    pub graph_file: PathBuf,
    /// Output mobility trace (`o_mobilityfile`).
    pub mobility_file: PathBuf,
    /// Output incident events trace (`o_eventsfile`).
    pub events_file: PathBuf,
    /// Input per-station probability table (`probdist`).
    pub probability_file: PathBuf,
    /// Number of users to place on the network (`users`).
    pub users: usize,
    /// Travel speed range for each hop (`minspeed` / `maxspeed`).
    pub min_speed: f64,
    pub max_speed: f64,
    /// Upper bound of the uniform pause drawn on reaching a station
    /// (`maxpause`).
    pub max_pause: f64,
    /// Off-network start offset along both axes (`radius`).
    pub radius: f64,
    /// Upper bound of the uniform delay before the approach walk
    /// (`startdelay`).
    pub start_delay: f64,
    /// Incident sampling interval (`geninterval`).
    pub gen_interval: f64,
    /// Simulated end time, exclusive (`stoptime`).
    pub stop_time: f64,
    /// Optional RNG seed (`seed`); absent means entropy-seeded.
    pub seed: Option<u64>,
}

impl SimParams {
    /// Load and validate parameters from a file.
    pub fn from_file(path: &Path) -> MgResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse and validate parameters from already-read text.
    pub fn parse(text: &str) -> MgResult<Self> {
        let mut b = ParamsBuilder::default();

        for (lineno, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(MgError::Parse(format!(
                    "line {}: expected key=value, got {line:?}",
                    lineno + 1
                )));
            };
            b.set(key.trim(), value.trim())?;
        }

        let params = b.finish()?;
        params.validate()?;
        Ok(params)
    }

    /// Reject settings that would make a run meaningless or non-terminating.
    fn validate(&self) -> MgResult<()> {
        if self.min_speed <= 0.0 || self.max_speed <= 0.0 {
            return Err(MgError::Config("speeds must be positive".into()));
        }
        if self.min_speed > self.max_speed {
            return Err(MgError::Config(format!(
                "minspeed ({}) exceeds maxspeed ({})",
                self.min_speed, self.max_speed
            )));
        }
        if self.gen_interval <= 0.0 {
            return Err(MgError::Config("geninterval must be positive".into()));
        }
        if self.stop_time <= 0.0 {
            return Err(MgError::Config("stoptime must be positive".into()));
        }
        if self.radius < 0.0 || self.start_delay < 0.0 || self.max_pause < 0.0 {
            return Err(MgError::Config(
                "radius, startdelay, and maxpause must be non-negative".into(),
            ));
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[derive(Default)]
struct ParamsBuilder {
    graph_file: Option<PathBuf>,
    mobility_file: Option<PathBuf>,
    events_file: Option<PathBuf>,
    probability_file: Option<PathBuf>,
    users: Option<usize>,
    min_speed: Option<f64>,
    max_speed: Option<f64>,
    max_pause: Option<f64>,
    radius: Option<f64>,
    start_delay: Option<f64>,
    gen_interval: Option<f64>,
    stop_time: Option<f64>,
    seed: Option<u64>,
}

impl ParamsBuilder {
    fn set(&mut self, key: &str, value: &str) -> MgResult<()> {
        match key {
            "i_graphfile" => self.graph_file = Some(value.into()),
            "o_mobilityfile" => self.mobility_file = Some(value.into()),
            "o_eventsfile" => self.events_file = Some(value.into()),
            "probdist" => self.probability_file = Some(value.into()),
            "users" => self.users = Some(parse_num(key, value)?),
            "minspeed" => self.min_speed = Some(parse_num(key, value)?),
            "maxspeed" => self.max_speed = Some(parse_num(key, value)?),
            "maxpause" => self.max_pause = Some(parse_num(key, value)?),
            "radius" => self.radius = Some(parse_num(key, value)?),
            "startdelay" => self.start_delay = Some(parse_num(key, value)?),
            "geninterval" => self.gen_interval = Some(parse_num(key, value)?),
            "stoptime" => self.stop_time = Some(parse_num(key, value)?),
            "seed" => self.seed = Some(parse_num(key, value)?),
            // Unknown keys are ignored, not errors.
            _ => {}
        }
        Ok(())
    }

    fn finish(self) -> MgResult<SimParams> {
        let mut missing: Vec<&str> = Vec::new();
        macro_rules! require {
            ($field:ident, $key:literal) => {
                match self.$field {
                    Some(v) => v,
                    None => {
                        missing.push($key);
                        Default::default()
                    }
                }
            };
        }

        let params = SimParams {
            graph_file: require!(graph_file, "i_graphfile"),
            mobility_file: require!(mobility_file, "o_mobilityfile"),
            events_file: require!(events_file, "o_eventsfile"),
            probability_file: require!(probability_file, "probdist"),
            users: require!(users, "users"),
            min_speed: require!(min_speed, "minspeed"),
            max_speed: require!(max_speed, "maxspeed"),
            max_pause: require!(max_pause, "maxpause"),
            radius: require!(radius, "radius"),
            start_delay: require!(start_delay, "startdelay"),
            gen_interval: require!(gen_interval, "geninterval"),
            stop_time: require!(stop_time, "stoptime"),
            seed: self.seed,
        };

        if missing.is_empty() {
            Ok(params)
        } else {
            Err(MgError::Config(format!(
                "missing required setting(s): {}",
                missing.join(", ")
            )))
        }
    }
}

fn parse_num<T: std::str::FromStr>(key: &str, value: &str) -> MgResult<T> {
    value
        .parse()
        .map_err(|_| MgError::Parse(format!("invalid value {value:?} for setting {key:?}")))
}
