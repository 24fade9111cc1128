//! Command implementations
//!
//! Each command returns the text to print on stdout.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::{FixedDurationSource, PlanRecorderSink};
use crate::app::TrimInteractor;
use crate::cli::args::{ComplementArgs, InteractiveArgs, ParseArgs, PlanArgs};
use crate::cli::prompt::PromptLoop;
use crate::config::AppConfig;
use crate::domain::errors::DomainError;
use crate::domain::model::{TrimMode, TrimRequest};
use crate::domain::rules::{ComplementCalculator, IntervalParser};
use crate::output;

/// Turn a domain error into a message for the end user
pub fn friendly(error: DomainError) -> anyhow::Error {
    anyhow::anyhow!("{}. {}", error, error.hint())
}

/// Execute the parse-intervals command
pub fn parse_intervals(args: ParseArgs, config: &AppConfig) -> Result<String> {
    let intervals = IntervalParser::parse(&args.text).map_err(friendly)?;
    info!("Parsed {} interval(s)", intervals.len());

    output::render_intervals(&intervals, config.output_format)
        .context("Failed to render intervals")
}

/// Execute the complement-intervals command
pub fn complement_intervals(args: ComplementArgs, config: &AppConfig) -> Result<String> {
    let intervals = IntervalParser::parse(&args.text).map_err(friendly)?;
    let gaps = ComplementCalculator::complement(&intervals, args.length).map_err(friendly)?;
    info!(
        "Complement of {} interval(s) over {}s has {} interval(s)",
        intervals.len(),
        args.length,
        gaps.len()
    );

    output::render_intervals(&gaps, config.output_format).context("Failed to render intervals")
}

fn plan_interactor(length: u64, config: &AppConfig) -> TrimInteractor {
    TrimInteractor::new(
        Arc::new(FixedDurationSource::new(length)),
        Arc::new(PlanRecorderSink::new()),
        config.trim_settings(),
    )
}

/// Execute the plan command
pub async fn plan(args: PlanArgs, config: &AppConfig) -> Result<String> {
    let mode = TrimMode::parse(&args.mode).map_err(friendly)?;
    let request = TrimRequest::new(args.input, args.text, mode)
        .map_err(friendly)?
        .with_output(args.output);

    let response = plan_interactor(args.length, config)
        .execute(request)
        .await
        .map_err(friendly)?;

    output::render_response(&response, config.output_format).context("Failed to render plan")
}

/// Execute the interactive command, prompting on stderr and reading stdin
pub async fn interactive(args: InteractiveArgs, config: &AppConfig) -> Result<String> {
    let mode = TrimMode::parse(&args.mode).map_err(friendly)?;
    let template = TrimRequest::new(args.input, String::new(), mode)
        .map_err(friendly)?
        .with_output(args.output);

    let interactor = plan_interactor(args.length, config);
    let prompt_loop = PromptLoop::new(&interactor, config.max_attempts);

    let stdin = io::stdin();
    let response = prompt_loop
        .run(template, stdin.lock(), io::stderr())
        .await?;

    output::render_response(&response, config.output_format).context("Failed to render plan")
}

/// Execute the codecs command
pub fn codecs(config: &AppConfig) -> Result<String> {
    output::render_codecs(config.output_format).context("Failed to render codec table")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_parse_intervals_command() {
        let args = ParseArgs {
            text: "(1:30, 2:30)".to_string(),
        };
        let out = parse_intervals(args, &AppConfig::default()).unwrap();
        assert_eq!(out, "90\t150\t(1:30 - 2:30)\n");
    }

    #[test]
    fn test_parse_intervals_friendly_error() {
        let args = ParseArgs {
            text: "(2:00, 1:00)".to_string(),
        };
        let err = parse_intervals(args, &AppConfig::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("after its end"));
        assert!(message.contains("start before it ends"));
    }

    #[test]
    fn test_complement_intervals_json() {
        let config = AppConfig {
            output_format: OutputFormat::Json,
            ..AppConfig::default()
        };
        let args = ComplementArgs {
            length: 50,
            text: "(10 20)(30 40)".to_string(),
        };
        let out = complement_intervals(args, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[2]["start"], 40);
        assert_eq!(value[2]["end"], 50);
    }

    #[tokio::test]
    async fn test_plan_command() {
        let args = PlanArgs {
            input: "movie.mp4".to_string(),
            length: 100,
            mode: "keep".to_string(),
            output: None,
            text: "(0:10 0:20)".to_string(),
        };
        let out = plan(args, &AppConfig::default()).await.unwrap();
        assert!(out.contains("mode: keep"));
        assert!(out.contains("retained: 1 segment(s), 10s"));
        assert!(out.contains("movie(Clean Movie).mp4"));
        assert!(out.contains("codecs: video=libx264 audio=aac"));
    }

    #[tokio::test]
    async fn test_plan_command_invalid_mode() {
        let args = PlanArgs {
            input: "movie.mp4".to_string(),
            length: 100,
            mode: "drop".to_string(),
            output: None,
            text: "(0:10 0:20)".to_string(),
        };
        assert!(plan(args, &AppConfig::default()).await.is_err());
    }
}
