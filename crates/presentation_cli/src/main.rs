//! Fare comparison CLI
//!
//! Terminal front end for place search and ride fare comparison.

#![allow(clippy::print_stdout)]

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use application::{FareAggregator, FareQuotePort, LocationResolver};
use clap::{Parser, Subcommand};
use domain::{Coordinate, NamedLocation};
use infrastructure::{
    AppConfig, FareQuoteAdapter, LocationSearchAdapter, init_logging, verbosity_filter,
};
use tracing::info;

/// Fare comparison CLI
#[derive(Parser)]
#[command(name = "farecompare-cli")]
#[command(author, version, about = "Compare ride-hailing fares across providers", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./config.toml if present)
    #[arg(short, long, env = "FARECOMPARE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search places by name
    Search {
        /// Free-text query
        query: String,

        /// Print raw JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Compare fares between two coordinates
    #[command(allow_negative_numbers = true)]
    Compare {
        /// Pickup latitude
        #[arg(long)]
        from_lat: f64,

        /// Pickup longitude
        #[arg(long)]
        from_long: f64,

        /// Drop-off latitude
        #[arg(long)]
        to_lat: f64,

        /// Drop-off longitude
        #[arg(long)]
        to_long: f64,

        /// Print raw JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Resolve two place names and compare fares between the best matches
    ///
    /// Example: farecompare-cli route "kent ridge mrt" "utown"
    Route {
        /// Pickup place
        from: String,

        /// Drop-off place
        to: String,

        /// Print raw JSON instead of a list
        #[arg(long)]
        json: bool,
    },

    /// Check whether the fare backend is reachable
    Health,
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => AppConfig::load().context("Failed to load configuration")?,
    };

    if let Some(filter) = verbosity_filter(cli.verbose) {
        config.logging.log_filter = filter.to_string();
    }
    Ok(config)
}

/// Best match for `query`, as a named trip endpoint
async fn resolve_first(
    resolver: &LocationResolver<LocationSearchAdapter>,
    query: &str,
) -> anyhow::Result<NamedLocation> {
    let candidate = resolver
        .search(query)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("No location matches '{query}'"))?;
    Ok(candidate.to_named_location()?)
}

async fn compare(
    config: &AppConfig,
    origin: Coordinate,
    destination: Coordinate,
    json: bool,
) -> anyhow::Result<()> {
    let adapter = FareQuoteAdapter::from_config(&config.fares)?;
    let aggregator = FareAggregator::start(Arc::new(adapter), origin, destination).await;
    let snapshot = aggregator.snapshot();

    if json {
        let offers = snapshot.offers.unwrap_or_default();
        println!("{}", serde_json::to_string_pretty(&offers)?);
    } else {
        print!("{}", render::fares(&snapshot));
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config.logging)?;

    info!(base_url = %config.fares.base_url, "Using fare backend");

    match cli.command {
        Commands::Search { query, json } => {
            let adapter = LocationSearchAdapter::from_config(&config.fares)?;
            let resolver = LocationResolver::new(Arc::new(adapter));
            let results = resolver.search(&query).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print!("{}", render::locations(&results));
            }
        },

        Commands::Compare {
            from_lat,
            from_long,
            to_lat,
            to_long,
            json,
        } => {
            let origin = Coordinate::new(from_lat, from_long).context("Invalid pickup point")?;
            let destination =
                Coordinate::new(to_lat, to_long).context("Invalid drop-off point")?;
            compare(&config, origin, destination, json).await?;
        },

        Commands::Route { from, to, json } => {
            let adapter = LocationSearchAdapter::from_config(&config.fares)?;
            let resolver = LocationResolver::new(Arc::new(adapter));
            let origin = resolve_first(&resolver, &from).await?;
            let destination = resolve_first(&resolver, &to).await?;

            if !json {
                println!("{origin} -> {destination}");
            }
            compare(&config, origin.into(), destination.into(), json).await?;
        },

        Commands::Health => {
            let adapter = FareQuoteAdapter::from_config(&config.fares)?;
            if adapter.is_available().await {
                println!("Fare backend reachable at {}", config.fares.base_url);
            } else {
                println!("Fare backend unreachable at {}", config.fares.base_url);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
