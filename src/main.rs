mod geo;
mod trajectory;
mod web;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

use crate::geo::GeoPoint;
use crate::trajectory::{
    sample_trajectory, SampleParameters, ScenarioPresets, TargetClass, TrajectoryProfile,
};

#[derive(Parser)]
#[command(name = "arcsim")]
#[command(about = "Ballistic trajectory sampling for globe visualization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        #[arg(long, default_value = "config.yaml")]
        config: String,
    },
    /// Sample a single trajectory and print it as JSON
    Sample(SampleArgs),
}

#[derive(Args)]
struct SampleArgs {
    /// Launch point as "lon,lat" in degrees
    #[arg(long)]
    launch: String,
    /// Impact point as "lon,lat" in degrees
    #[arg(long)]
    impact: String,
    #[arg(long, value_enum, default_value_t = TargetClass::A)]
    target_class: TargetClass,
    #[arg(long, value_enum, default_value_t = TrajectoryProfile::A)]
    profile: TrajectoryProfile,
    /// Start epoch (RFC3339), defaults to now
    #[arg(long)]
    start: Option<DateTime<Utc>>,
    /// Override the preset flight duration in seconds
    #[arg(long)]
    duration_s: Option<f64>,
    /// Override the preset apogee height in meters
    #[arg(long)]
    peak_height_m: Option<f64>,
    /// Override the preset sample count
    #[arg(long)]
    samples: Option<u32>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(&config).await,
        Commands::Sample(args) => sample(&args),
    }
}

async fn serve(path: &str) -> ExitCode {
    let config = match web::Config::from_file(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn sample(args: &SampleArgs) -> ExitCode {
    let launch = match GeoPoint::parse_pair(&args.launch) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid launch point: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let impact = match GeoPoint::parse_pair(&args.impact) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid impact point: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let preset = ScenarioPresets::default().for_class(args.target_class);
    let params = match SampleParameters::new(
        args.duration_s.unwrap_or(preset.duration_s),
        args.peak_height_m.unwrap_or(preset.peak_height_m),
        args.samples.unwrap_or(preset.sample_count),
        args.profile,
    ) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid parameters: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let start = args.start.unwrap_or_else(Utc::now);
    let samples = match sample_trajectory(launch, impact, &params, start) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Sampling failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    log::debug!(
        "sampled {} points over {} s",
        samples.len(),
        params.total_duration_s
    );

    match serde_json::to_string_pretty(&samples) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Serialization error: {}", e);
            ExitCode::FAILURE
        }
    }
}
