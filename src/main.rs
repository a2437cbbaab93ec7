mod config;
mod satellite;
mod service;
mod store;
mod track;
mod web;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use crate::config::Config;
use crate::satellite::build_registry;
use crate::service::TrackingService;
use crate::store::StoreClient;
use crate::track::Station;

#[derive(Parser)]
#[command(name = "sat-watch")]
#[command(about = "Satellite tracking and pass prediction over a ground station")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file
    Validate { config: String },
    /// Track the configured satellites
    Run { config: String },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config } => validate(&config),
        Commands::Run { config } => run(&config),
    }
}

fn validate(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match build_registry(&config.satellites) {
        Ok(satellites) => {
            println!("Configuration is valid ({} satellites)", satellites.len());
            for sat in &satellites {
                println!("  {} (NORAD {})", sat.name, sat.norad_id);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("TLE error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn run(path: &str) -> ExitCode {
    let config = match Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Malformed elements are fatal: the process does not start with a
    // satellite it cannot track.
    let satellites = match build_registry(&config.satellites) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("TLE error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let station = Station::from_config(&config.station);
    let store = StoreClient::new(&config.store);
    let tracking = config.tracking;
    let service = Arc::new(TrackingService::new(station, tracking, satellites, store));

    log::info!("Generating orbit paths & passes for all satellites...");
    service.resample_all().await;
    log::info!("Startup resample complete");

    let live = service.clone();
    let live_interval = std::time::Duration::from_secs(tracking.update_interval_secs);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(live_interval);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            live.update_all().await;
        }
    });

    let resample = service.clone();
    let resample_interval =
        std::time::Duration::from_secs(tracking.resample_interval_hours * 3600);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(resample_interval);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            resample.resample_all().await;
        }
    });

    if let Err(e) = web::run_server(&config.web.bind, service).await {
        eprintln!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
