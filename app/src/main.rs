#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use geolog_config::Config;
use geolog_core::process_directory;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "geolog")]
#[command(about = "Extract GPS readings from log files into GeoJSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a directory tree for .log files and convert them
    Scan {
        /// Root directory to scan (overrides the configured one)
        #[arg(short, long)]
        directory: Option<PathBuf>,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan { directory } => {
            let root = if let Some(dir) = directory {
                dir
            } else {
                let config = Config::load()?;
                info!("Scanning configured directory: {}", config.scan.directory);
                PathBuf::from(config.scan.directory)
            };

            let summary = process_directory(&root)?;
            info!(
                "Converted {}/{} log files ({} coordinates)",
                summary.files_converted, summary.files_found, summary.coordinates
            );
        }
        Commands::Init => {
            Config::create_config()?;
        }
        Commands::Version => {
            println!("geolog {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
