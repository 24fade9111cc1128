// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::errors::DomainError;

/// Time value in whole seconds, parsed from `S`, `M:S` or `H:M:S`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeValue {
    pub seconds: u64,
}

impl TimeValue {
    /// Create a new TimeValue from seconds
    pub fn from_seconds(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Create a new TimeValue from hours, minutes and seconds.
    ///
    /// Components are not range-checked, `(0, 75, 0)` is 4500 seconds.
    pub fn from_components(hours: u64, minutes: u64, seconds: u64) -> Option<Self> {
        hours
            .checked_mul(3600)
            .and_then(|h| minutes.checked_mul(60).and_then(|m| h.checked_add(m)))
            .and_then(|hm| hm.checked_add(seconds))
            .map(Self::from_seconds)
    }

    /// Parse a time token.
    ///
    /// The seconds field may carry a fractional part, which is truncated
    /// toward zero. Hours and minutes must be integers.
    pub fn parse(token: &str) -> Result<Self, DomainError> {
        let trimmed = token.trim();
        let parts: Vec<&str> = trimmed.split(':').collect();

        let (hours, minutes, seconds) = match parts.as_slice() {
            [s] => (0, 0, Self::parse_seconds_field(trimmed, s)?),
            [m, s] => (
                0,
                Self::parse_integer_field(trimmed, m, "minutes")?,
                Self::parse_seconds_field(trimmed, s)?,
            ),
            [h, m, s] => (
                Self::parse_integer_field(trimmed, h, "hours")?,
                Self::parse_integer_field(trimmed, m, "minutes")?,
                Self::parse_seconds_field(trimmed, s)?,
            ),
            _ => {
                return Err(DomainError::invalid_time(
                    trimmed,
                    format!("expected at most 2 colons, found {}", parts.len() - 1),
                ))
            }
        };

        Self::from_components(hours, minutes, seconds)
            .ok_or_else(|| DomainError::invalid_time(trimmed, "value is too large"))
    }

    fn parse_integer_field(token: &str, field: &str, name: &str) -> Result<u64, DomainError> {
        let field = field.trim();
        if field.is_empty() || !field.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::invalid_time(
                token,
                format!("{} must be a whole number", name),
            ));
        }
        field
            .parse::<u64>()
            .map_err(|_| DomainError::invalid_time(token, format!("{} out of range", name)))
    }

    fn parse_seconds_field(token: &str, field: &str) -> Result<u64, DomainError> {
        let field = field.trim();
        let value = field
            .parse::<f64>()
            .map_err(|_| DomainError::invalid_time(token, "seconds must be a number"))?;

        if !value.is_finite() {
            return Err(DomainError::invalid_time(token, "seconds must be finite"));
        }
        if value < 0.0 {
            return Err(DomainError::invalid_time(token, "time cannot be negative"));
        }
        if value >= u64::MAX as f64 {
            return Err(DomainError::invalid_time(token, "value is too large"));
        }

        Ok(value.trunc() as u64)
    }

    /// Format as H:MM:SS, or M:SS below one hour
    pub fn format_hms(&self) -> String {
        let hours = self.seconds / 3600;
        let minutes = (self.seconds % 3600) / 60;
        let seconds = self.seconds % 60;

        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{}:{:02}", minutes, seconds)
        }
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_hms())
    }
}

impl From<u64> for TimeValue {
    fn from(seconds: u64) -> Self {
        Self::from_seconds(seconds)
    }
}

/// Time range in seconds, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    pub start: u64,
    pub end: u64,
}

impl Interval {
    /// Create a new interval with validation
    pub fn new(start: u64, end: u64) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::StartAfterEnd {
                index: 0,
                start,
                end,
            });
        }
        Ok(Self { start, end })
    }

    /// Length of the interval in seconds
    pub fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether the interval covers no time at all
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn start_time(&self) -> TimeValue {
        TimeValue::from_seconds(self.start)
    }

    pub fn end_time(&self) -> TimeValue {
        TimeValue::from_seconds(self.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} - {})", self.start_time(), self.end_time())
    }
}

/// Intervals in document order
pub type IntervalSet = Vec<Interval>;

/// Cut vs keep policy applied to the parsed intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrimMode {
    /// Parsed intervals are removed, their complement is retained
    #[default]
    Cut,
    /// Parsed intervals are retained as they are
    Keep,
}

impl TrimMode {
    /// Parse trim mode from string
    pub fn parse(mode_str: &str) -> Result<Self, DomainError> {
        match mode_str.trim().to_lowercase().as_str() {
            "cut" => Ok(TrimMode::Cut),
            "keep" => Ok(TrimMode::Keep),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid trim mode: {}. Valid modes: cut, keep",
                mode_str
            ))),
        }
    }
}

impl fmt::Display for TrimMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrimMode::Cut => write!(f, "cut"),
            TrimMode::Keep => write!(f, "keep"),
        }
    }
}

/// A trimmable piece of a media source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub source: String,
    pub interval: Interval,
}

impl Segment {
    pub fn new(source: impl Into<String>, interval: Interval) -> Self {
        Self {
            source: source.into(),
            interval,
        }
    }
}

/// Where and how the retained segments are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputTarget {
    pub path: PathBuf,
    pub extension: String,
    pub video_codec: String,
    pub audio_codec: String,
}

impl OutputTarget {
    /// Output path for `input`: same directory, `<stem><suffix>.<ext>`.
    ///
    /// Inputs without an extension get `default_extension`.
    pub fn output_path(input: &Path, suffix: &str, default_extension: &str) -> (PathBuf, String) {
        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        let extension = input
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .filter(|ext| !ext.is_empty())
            .unwrap_or_else(|| default_extension.trim_start_matches('.').to_string());

        let file_name = format!("{}{}.{}", stem, suffix, extension);
        let path = match input.parent() {
            Some(parent) => parent.join(file_name),
            None => PathBuf::from(file_name),
        };
        (path, extension)
    }
}

/// Trim request handled by the trim interactor
#[derive(Debug, Clone)]
pub struct TrimRequest {
    pub input_path: String,
    pub intervals_text: String,
    pub mode: TrimMode,
    pub output_path: Option<String>,
}

impl TrimRequest {
    /// Create new trim request with validation
    pub fn new(
        input_path: impl Into<String>,
        intervals_text: impl Into<String>,
        mode: TrimMode,
    ) -> Result<Self, DomainError> {
        let input_path = input_path.into();
        if input_path.trim().is_empty() {
            return Err(DomainError::BadArgs("Input path cannot be empty".to_string()));
        }
        Ok(Self {
            input_path,
            intervals_text: intervals_text.into(),
            mode,
            output_path: None,
        })
    }

    /// Write to an explicit output path instead of the derived one
    pub fn with_output(mut self, output_path: Option<String>) -> Self {
        self.output_path = output_path;
        self
    }
}

/// Report returned by a media sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteReport {
    pub output_path: PathBuf,
    pub segment_count: usize,
    pub total_duration: u64,
    /// False when the sink only described the work
    pub written: bool,
}

/// Trim response
#[derive(Debug, Clone, Serialize)]
pub struct TrimResponse {
    pub input_path: String,
    pub mode: TrimMode,
    pub length: u64,
    pub parsed: IntervalSet,
    pub retained: IntervalSet,
    pub retained_duration: u64,
    pub output: OutputTarget,
    pub report: WriteReport,
}
