use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cab_fare::fare::{FareCalculator, FareConfig};
use cab_fare::network::{RoadNetwork, patna_network};
use cab_fare::planner::{TripOutcome, plan_trip};
use cab_fare::report::{ErrorResponse, ReportFormat, render_locations, render_trip};

/// Exit status when source and destination aren't connected.
const EXIT_NO_ROUTE: u8 = 1;

/// Exit status when a location isn't in the network.
/// Distinct from 2, which clap uses for usage errors.
const EXIT_UNKNOWN_LOCATION: u8 = 3;

/// Estimate the fare and travel time of a cab ride.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Where the ride starts (prompted for if omitted)
    #[arg(short, long)]
    from: Option<String>,

    /// Where the ride ends (prompted for if omitted)
    #[arg(short, long)]
    to: Option<String>,

    /// JSON network table to use instead of the built-in Patna network
    #[arg(short, long)]
    network: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Flat charge regardless of distance
    #[arg(long, env = "CAB_BASE_FARE", default_value_t = 30.0)]
    base_fare: f64,

    /// Charge per kilometre
    #[arg(long, env = "CAB_FARE_PER_KM", default_value_t = 12.0)]
    fare_per_km: f64,

    /// Assumed average speed in km/h (time estimate only)
    #[arg(long, env = "CAB_AVERAGE_SPEED_KMH", default_value_t = 30.0)]
    average_speed: f64,

    /// Currency symbol printed before fares
    #[arg(long, env = "CAB_CURRENCY", default_value = "₹")]
    currency: String,

    /// List the known locations and exit
    #[arg(long)]
    list: bool,

    /// Log search details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let network = match &cli.network {
        Some(path) => RoadNetwork::from_json_file(path)?,
        None => patna_network(),
    };
    info!(
        locations = network.len(),
        connections = network.connection_count(),
        "Loaded road network"
    );

    if cli.list {
        print!("{}", render_locations(&network)?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = FareConfig::new(cli.base_fare, cli.fare_per_km, cli.average_speed);
    let calculator = FareCalculator::new(config).context("invalid fare configuration")?;

    let (from, to) = match (&cli.from, &cli.to) {
        (Some(from), Some(to)) => (from.clone(), to.clone()),
        _ => prompt_locations(
            &network,
            cli.from.as_deref(),
            cli.to.as_deref(),
            io::stdin().lock(),
            io::stderr(),
        )?,
    };

    let (Some(source), Some(destination)) = (network.resolve(&from), network.resolve(&to)) else {
        report_failure(
            cli.format,
            "Invalid locations! Choose from the available list.",
        )?;
        return Ok(ExitCode::from(EXIT_UNKNOWN_LOCATION));
    };

    match plan_trip(&network, &calculator, source, destination)? {
        TripOutcome::Planned(trip) => {
            println!(
                "{}",
                render_trip(cli.format, &network, &trip, &cli.currency)?
            );
            Ok(ExitCode::SUCCESS)
        }
        TripOutcome::NoRoute { .. } => {
            report_failure(cli.format, "No path found between the locations.")?;
            Ok(ExitCode::from(EXIT_NO_ROUTE))
        }
    }
}

/// Ask for whichever endpoints weren't given on the command line.
///
/// The banner, location list and prompts go to `prompts` (stderr in
/// practice) so stdout carries only the report.
fn prompt_locations(
    network: &RoadNetwork,
    from: Option<&str>,
    to: Option<&str>,
    input: impl BufRead,
    mut prompts: impl Write,
) -> anyhow::Result<(String, String)> {
    write!(prompts, "\nCab Fare Estimator\n\n{}", render_locations(network)?)?;

    let mut lines = input.lines();
    let mut ask = |prompt: &str| -> anyhow::Result<String> {
        write!(prompts, "{prompt}")?;
        prompts.flush()?;
        let line = lines.next().context("no input on stdin")??;
        Ok(line)
    };

    let from = match from {
        Some(f) => f.to_string(),
        None => ask("\nEnter Source Location: ")?,
    };
    let to = match to {
        Some(t) => t.to_string(),
        None => ask("Enter Destination Location: ")?,
    };
    Ok((from, to))
}

/// Tell the user why there is no trip, in the format they asked for.
fn report_failure(format: ReportFormat, message: &str) -> anyhow::Result<()> {
    match format {
        ReportFormat::Json => {
            let body = ErrorResponse {
                error: message.to_string(),
            };
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        ReportFormat::Text | ReportFormat::Dot => eprintln!("{message}"),
    }
    Ok(())
}
