//! Command-line argument definitions

use clap::Args;

/// Arguments for the parse-intervals command
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Text containing intervals such as "(1:30, 2:30)" or "(1:20-2:0)"
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,
}

/// Arguments for the complement-intervals command
#[derive(Args, Debug)]
pub struct ComplementArgs {
    /// Timeline length in seconds
    #[arg(short, long)]
    pub length: u64,

    /// Ordered, non-overlapping intervals
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Video duration in seconds
    #[arg(short, long)]
    pub length: u64,

    /// Whether the intervals are cut out or kept (cut, keep)
    #[arg(short, long, default_value = "cut")]
    pub mode: String,

    /// Output file path (default: input name with the configured suffix)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Intervals to cut or keep
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,
}

/// Arguments for the interactive command
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Video duration in seconds
    #[arg(short, long)]
    pub length: u64,

    /// Whether the intervals are cut out or kept (cut, keep)
    #[arg(short, long, default_value = "cut")]
    pub mode: String,

    /// Output file path (default: input name with the configured suffix)
    #[arg(short, long)]
    pub output: Option<String>,
}
