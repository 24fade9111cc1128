//! CLI module for CleanCut
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{AppConfig, CliOverrides};
use crate::output::OutputFormat;
use crate::utils::logging::LogFormat;

pub mod args;
pub mod commands;
pub mod prompt;

/// CleanCut
///
/// Describe the parts of a video to cut or keep as free-form text, e.g.
/// "(2:30-3:00)(1:22:30 1:23:00)", and get back the segments to retain.
#[derive(Parser, Debug)]
#[command(name = "cleancut")]
#[command(about = "CleanCut - turn interval descriptions into the segments of a video to keep")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (pretty, compact, json)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Result format on stdout (text, json, yaml)
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Configuration file (default: ./cleancut.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract (start, end) intervals in seconds from free-form text
    ParseIntervals(args::ParseArgs),
    /// Compute the gaps left by the intervals on a timeline
    ComplementIntervals(args::ComplementArgs),
    /// Plan the segments to retain from a video without touching it
    Plan(args::PlanArgs),
    /// Ask for the intervals on stdin, retrying on mistakes
    Interactive(args::InteractiveArgs),
    /// List the supported output extensions and their codecs
    Codecs,
}

impl Cli {
    /// Resolve configuration: CLI > Env > File > Defaults
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;

        let overrides = CliOverrides {
            log_level: self.log_level.clone(),
            log_format: self.log_format.as_deref().map(LogFormat::parse).transpose()?,
            output_format: self.format.as_deref().map(OutputFormat::parse).transpose()?,
        };
        config.apply_overrides(&overrides);
        Ok(config)
    }
}
