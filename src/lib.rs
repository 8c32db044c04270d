//! Gpxrte: pull, split, trim and push GPX route segments.
//!
//! Gpxrte treats a GPX file as an ordered list of `<rte>` segments and
//! moves route data between files: whole segments ("atomic" pulls), the
//! sub-range nearest two coordinates, distance-budgeted pieces of a long
//! route, or merges of one file's segments into another. Document bounds
//! and modification time are recomputed whenever segment content changes.
//!
//! # Modules
//!
//! - [`route`]: document model, geometry value types, and GPX I/O
//! - [`commands`]: the pull/push command layer and its algorithms
//! - [`error`]: error types for gpxrte operations

pub mod commands;
pub mod error;
pub mod route;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use error::GpxrteError;
use route::LatLon;

/// The gpxrte CLI application.
#[derive(Parser)]
#[command(name = "gpxrte")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Rename one route segment in place.
    SetName(SetNameArgs),
    /// Extract whole segments, one file per segment.
    PullAtomic(PullAtomicArgs),
    /// Extract the sub-range nearest two coordinates.
    PullCoord(PullCoordArgs),
    /// Split a segment into pieces below a distance budget.
    PullDistance(PullDistanceArgs),
    /// Merge segments from one file into another.
    Push(PushArgs),
}

/// Arguments for the set-name subcommand.
#[derive(clap::Args)]
struct SetNameArgs {
    /// GPX file to modify in place.
    file: PathBuf,

    /// Zero-based route segment index.
    #[arg(long)]
    segment: usize,

    /// New route name.
    #[arg(long)]
    name: String,
}

/// Arguments for the pull-atomic subcommand.
#[derive(clap::Args)]
struct PullAtomicArgs {
    /// GPX file to pull from.
    file: PathBuf,

    /// Zero-based route segment index; all segments when omitted.
    #[arg(long)]
    segment: Option<usize>,
}

/// Arguments for the pull-coord subcommand.
#[derive(clap::Args)]
struct PullCoordArgs {
    /// GPX file to pull from.
    file: PathBuf,

    /// Zero-based route segment index.
    #[arg(long)]
    segment: usize,

    /// Latitude of the requested start point (requires --begin-lon).
    #[arg(long, requires = "begin_lon")]
    begin_lat: Option<f64>,

    /// Longitude of the requested start point (requires --begin-lat).
    #[arg(long, requires = "begin_lat")]
    begin_lon: Option<f64>,

    /// Latitude of the requested end point (requires --end-lon).
    #[arg(long, requires = "end_lon")]
    end_lat: Option<f64>,

    /// Longitude of the requested end point (requires --end-lat).
    #[arg(long, requires = "end_lat")]
    end_lon: Option<f64>,

    /// Output file; the matched indices are tagged into its name.
    #[arg(long)]
    out: PathBuf,
}

/// Arguments for the pull-distance subcommand.
#[derive(clap::Args)]
struct PullDistanceArgs {
    /// GPX file to pull from.
    file: PathBuf,

    /// Zero-based route segment index.
    #[arg(long)]
    segment: usize,

    /// Output file; each piece is numbered into its name.
    #[arg(long)]
    out: PathBuf,

    /// Distance budget per piece, in meters.
    #[arg(long, value_parser = parse_positive_meters)]
    meters: f64,
}

/// Arguments for the push subcommand.
#[derive(clap::Args)]
struct PushArgs {
    /// GPX file to push from.
    source: PathBuf,

    /// Destination GPX file (appended to when it exists, created otherwise).
    dest: PathBuf,

    /// Zero-based route segment index; all segments when omitted.
    #[arg(long)]
    segment: Option<usize>,
}

fn parse_positive_meters(raw: &str) -> Result<f64, String> {
    let meters: f64 = raw
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    if !meters.is_finite() || meters <= 0.0 {
        return Err(format!("'{raw}' is not a positive distance in meters"));
    }
    Ok(meters)
}

fn coord_pair(lat: Option<f64>, lon: Option<f64>) -> Option<LatLon> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => Some(LatLon::new(lat, lon)),
        _ => None,
    }
}

/// Run the gpxrte CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), GpxrteError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::SetName(args)) => {
            commands::set_segment_name(&args.file, args.segment, &args.name)?;
            println!("Renamed segment {} in {}", args.segment, args.file.display());
            Ok(())
        }
        Some(Commands::PullAtomic(args)) => {
            let count = commands::pull_atomic(&args.file, args.segment)?;
            println!("Wrote {count} segment file(s)");
            Ok(())
        }
        Some(Commands::PullCoord(args)) => {
            let count = commands::pull_by_coord(
                &args.file,
                args.segment,
                coord_pair(args.begin_lat, args.begin_lon),
                coord_pair(args.end_lat, args.end_lon),
                &args.out,
            )?;
            println!("Wrote {count} segment file(s)");
            Ok(())
        }
        Some(Commands::PullDistance(args)) => {
            let count =
                commands::pull_by_distance(&args.file, args.segment, &args.out, args.meters)?;
            println!("Wrote {count} segment file(s)");
            Ok(())
        }
        Some(Commands::Push(args)) => {
            let count = commands::push(&args.source, args.segment, &args.dest)?;
            println!("Destination now holds {count} segment(s)");
            Ok(())
        }
        None => {
            // No subcommand: just print help hint and exit successfully
            println!("gpxrte {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Pull, split, trim and push GPX route segments.");
            println!();
            println!("Run 'gpxrte --help' for usage information.");
            Ok(())
        }
    }
}
