//! CleanCut CLI
//!
//! Turns free-form interval descriptions into the segments of a video to keep.
//!
//! # Usage
//!
//! ```bash
//! cleancut parse-intervals "(1:30, 2:30) then (1:03:30-1:04:30)"
//! cleancut complement-intervals --length 50 "(10 20)(30 40)"
//! cleancut plan --input talk.mp4 --length 3600 --mode cut "(0 1:0)(58:0 1:0:0)"
//! cleancut interactive --input talk.mp4 --length 3600
//! cleancut codecs
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cleancut::cli::{commands, Cli, Commands};
use cleancut::utils::logging::init_logging;

/// Main entry point for the CleanCut CLI application
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.load_config()?;
    init_logging(&config.log_level, config.log_format)?;

    info!("Starting CleanCut");

    let rendered = match cli.command {
        Commands::ParseIntervals(args) => {
            info!("Executing parse-intervals command");
            commands::parse_intervals(args, &config)?
        }
        Commands::ComplementIntervals(args) => {
            info!("Executing complement-intervals command");
            commands::complement_intervals(args, &config)?
        }
        Commands::Plan(args) => {
            info!("Executing plan command");
            commands::plan(args, &config).await?
        }
        Commands::Interactive(args) => {
            info!("Executing interactive command");
            commands::interactive(args, &config).await?
        }
        Commands::Codecs => commands::codecs(&config)?,
    };

    print!("{}", rendered);

    info!("CleanCut completed successfully");
    Ok(())
}
