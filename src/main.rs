//! Terminal circuit runner (default binary).
//!
//! Builds a circuit from the command line, fills its lanes from the vehicle
//! catalog and races them on stdout until interrupted.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;

use tui_circuit::core::{catalog, Track};
use tui_circuit::term;
use tui_circuit::types::{
    DEFAULT_CIRCUIT_LENGTH, DEFAULT_CIRCUIT_NAME, DEFAULT_LANE_COUNT, MAX_CIRCUIT_LENGTH,
    MAX_LANE_COUNT,
};

#[derive(Debug, Parser)]
#[command(name = "tui-circuit", version, about = "Animated ASCII-art racing circuit")]
struct Cli {
    /// Circuit name shown above the track
    #[arg(default_value = DEFAULT_CIRCUIT_NAME)]
    name: String,

    /// Interior length of the circuit in columns
    #[arg(default_value_t = DEFAULT_CIRCUIT_LENGTH, value_parser = parse_length)]
    length: usize,

    /// Number of lanes (one vehicle per lane)
    #[arg(default_value_t = DEFAULT_LANE_COUNT, value_parser = parse_lanes)]
    lanes: usize,
}

fn parse_length(s: &str) -> Result<usize, String> {
    parse_bounded(s, MAX_CIRCUIT_LENGTH)
}

fn parse_lanes(s: &str) -> Result<usize, String> {
    parse_bounded(s, MAX_LANE_COUNT)
}

fn parse_bounded(s: &str, max: usize) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        Ok(_) => Err(format!("must be between 1 and {max}")),
        Err(e) => Err(e.to_string()),
    }
}

/// Exit status for a command-line parse failure.
fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout, parse errors and usage to stderr.
            let _ = err.print();
            std::process::exit(exit_code(err.kind()));
        }
    };

    init_logging();

    let track = build_track(&cli)?;
    term::start(track)
}

fn init_logging() {
    // stdout is reserved for frames.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(log_level())
        .with_target(false)
        .init();
}

/// Debug builds show start-up events; release builds only warnings.
fn log_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    }
}

fn build_track(cli: &Cli) -> Result<Track> {
    let mut track = Track::new(cli.name.as_str(), cli.length, cli.lanes);
    let lineup = catalog::lineup(cli.lanes);
    let total = lineup.len();

    for (i, vehicle) in lineup.into_iter().enumerate() {
        let added = track
            .add_vehicle(vehicle)
            .with_context(|| format!("vehicle {} does not fit circuit '{}'", i + 1, cli.name))?;
        if !added {
            tracing::warn!(
                lanes = cli.lanes,
                left_out = total - i,
                "circuit is full, remaining vehicles stay in the pit"
            );
            break;
        }
    }

    Ok(track)
}
