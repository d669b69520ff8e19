use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use gmaps_lookup::{GeoClient, GeoResult, GeocoderConfig, LatLng};

const PLACES: [&str; 2] = ["Look mum no hands!", "O2 Arena"];
const ADDRESSES: [&str; 2] = ["GR Athens", "UK London"];
const POINTS: [(f64, f64); 2] = [(49.57152, 11.21482), (51.524061, -0.096149)];

/// Look up a few sample places, addresses and coordinates with the Google Maps APIs
///
/// The API key is read from the config file (`api_key`) or from the
/// GOOGLE_MAPS_API_KEY environment variable.
///
/// Examples:
///   GOOGLE_MAPS_API_KEY=... gmaps-lookup
///
///   # Use a config file with custom endpoints
///   gmaps-lookup --config my-settings.toml -v
#[derive(Parser, Debug)]
#[command(name = "gmaps-lookup")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches gmaps-lookup.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = GeocoderConfig::resolve(args.config.as_deref())
        .context("Failed to load configuration")?;
    log::debug!("Configuration: {:?}", config);

    let client = GeoClient::new(config).context("Invalid configuration")?;
    let total_start = Instant::now();

    let places = lookup_all("Searching places...", &PLACES, |name| {
        client
            .find_place_by_name(name)
            .with_context(|| format!("Failed to find place: {}", name))
    })?;
    print_results("Geocoded places", &places);

    let addresses = lookup_all("Geocoding addresses...", &ADDRESSES, |address| {
        client
            .forward_geocode(address)
            .with_context(|| format!("Failed to geocode address: {}", address))
    })?;
    print_results("Geocoded addresses", &addresses);

    let points: Vec<LatLng> = POINTS.iter().copied().map(LatLng::from).collect();
    let reversed = lookup_all("Reverse geocoding coordinates...", &points, |point| {
        client
            .reverse_geocode(point.lat, point.lng)
            .with_context(|| format!("Failed to reverse geocode: ({})", point))
    })?;
    print_results("Reverse geocoded coordinates", &reversed);

    println!("Done! Total time: {:.1}s", total_start.elapsed().as_secs_f32());

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Run `lookup` for every input behind a spinner, stopping at the first failure
fn lookup_all<T, F>(message: &str, inputs: &[T], mut lookup: F) -> Result<Vec<(String, GeoResult)>>
where
    T: ToString,
    F: FnMut(&T) -> Result<GeoResult>,
{
    let spinner = create_spinner(message);
    let start = Instant::now();

    let mut results = Vec::with_capacity(inputs.len());
    for input in inputs {
        match lookup(input) {
            Ok(result) => results.push((input.to_string(), result)),
            Err(e) => {
                spinner.abandon_with_message(format!("{} failed", message.trim_end_matches('.')));
                return Err(e);
            }
        }
    }

    spinner.finish_with_message(format!(
        "{} {} done [{:.1}s]",
        message.trim_end_matches('.'),
        results.len(),
        start.elapsed().as_secs_f32()
    ));
    Ok(results)
}

fn print_results(title: &str, results: &[(String, GeoResult)]) {
    println!("{}:", title);
    for (input, result) in results {
        let rendered = serde_json::to_string(result).unwrap_or_else(|_| format!("{:?}", result));
        println!("  {} -> {}", input, rendered);
    }
    println!();
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
