//! Output rendering for command results

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};

use crate::domain::model::{Interval, TrimResponse};
use crate::domain::rules::CODEC_TABLE;
use crate::error::{CleanCutError, CleanCutResult};

/// Format used for command results on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse output format from string
    pub fn parse(format_str: &str) -> CleanCutResult<Self> {
        match format_str.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(CleanCutError::ConfigError {
                message: format!(
                    "Invalid output format: {}. Valid formats: text, json, yaml",
                    format_str
                ),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

#[derive(Serialize)]
struct CodecEntry {
    extension: &'static str,
    video_codec: &'static str,
    audio_codec: &'static str,
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> CleanCutResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Text => Err(CleanCutError::OutputError {
            message: "text output is not serialized".to_string(),
        }),
    }
}

fn interval_line(out: &mut String, interval: &Interval) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}\t{}\t{}", interval.start, interval.end, interval);
}

/// Render intervals, one `start<TAB>end<TAB>(H:MM:SS - H:MM:SS)` line each
pub fn render_intervals(intervals: &[Interval], format: OutputFormat) -> CleanCutResult<String> {
    if format != OutputFormat::Text {
        return serialize(intervals, format);
    }

    let mut out = String::new();
    for interval in intervals {
        interval_line(&mut out, interval);
    }
    Ok(out)
}

/// Render the result of a planned trim
pub fn render_response(response: &TrimResponse, format: OutputFormat) -> CleanCutResult<String> {
    if format != OutputFormat::Text {
        return serialize(response, format);
    }

    let mut out = String::new();
    let _ = writeln!(out, "input: {}", response.input_path);
    let _ = writeln!(out, "mode: {}", response.mode);
    let _ = writeln!(out, "length: {}s", response.length);
    let _ = writeln!(out, "parsed intervals: {}", response.parsed.len());
    let _ = writeln!(
        out,
        "retained: {} segment(s), {}s",
        response.retained.len(),
        response.retained_duration
    );
    for interval in &response.retained {
        out.push_str("  ");
        interval_line(&mut out, interval);
    }
    let _ = writeln!(out, "output: {}", response.output.path.display());
    let _ = writeln!(
        out,
        "codecs: video={} audio={}",
        response.output.video_codec, response.output.audio_codec
    );
    Ok(out)
}

/// Render the extension to codec table
pub fn render_codecs(format: OutputFormat) -> CleanCutResult<String> {
    let entries: Vec<CodecEntry> = CODEC_TABLE
        .iter()
        .map(|&(extension, video_codec, audio_codec)| CodecEntry {
            extension,
            video_codec,
            audio_codec,
        })
        .collect();

    if format != OutputFormat::Text {
        return serialize(&entries, format);
    }

    let mut out = format!("{:<10}{:<12}{}\n", "EXT", "VIDEO", "AUDIO");
    for entry in &entries {
        let _ = writeln!(
            out,
            "{:<10}{:<12}{}",
            entry.extension, entry.video_codec, entry.audio_codec
        );
    }
    Ok(out)
}
