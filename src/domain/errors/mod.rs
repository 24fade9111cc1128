// Domain errors - Error types for the interval engine

use thiserror::Error;

/// Domain-specific error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A time token could not be converted to seconds
    #[error("Invalid time '{token}': {reason}")]
    InvalidTime { token: String, reason: String },

    /// A parsed interval ends before it starts
    #[error("Interval #{} starts at {start}s, after its end at {end}s", .index + 1)]
    StartAfterEnd { index: usize, start: u64, end: u64 },

    /// Two consecutive intervals overlap or are out of order
    #[error(
        "Interval #{} starts at {start}s, before the previous interval ends at {previous_end}s",
        .index + 1
    )]
    Overlap {
        index: usize,
        previous_end: u64,
        start: u64,
    },

    /// An interval reaches past the end of the timeline
    #[error("Interval ends at {end}s, past the end of the timeline at {length}s")]
    OutOfRange { end: u64, length: u64 },

    /// Output container has no codec mapping
    #[error("'{extension}' files are not supported. Supported extensions: {}", .supported.join(", "))]
    UnsupportedExtension {
        extension: String,
        supported: Vec<String>,
    },

    /// Invalid arguments provided
    #[error("Bad arguments: {0}")]
    BadArgs(String),
}

impl DomainError {
    /// Create an invalid time error
    pub fn invalid_time(token: &str, reason: impl Into<String>) -> Self {
        DomainError::InvalidTime {
            token: token.to_string(),
            reason: reason.into(),
        }
    }

    /// Short advice shown to the end user next to the error
    pub fn hint(&self) -> &'static str {
        match self {
            DomainError::InvalidTime { .. } => {
                "Write times as seconds, minutes:seconds or hours:minutes:seconds, e.g. (1:30 2:45)."
            }
            DomainError::StartAfterEnd { .. } => {
                "Each interval must start before it ends, e.g. (1:00-2:00) rather than (2:00-1:00)."
            }
            DomainError::Overlap { .. } => {
                "List the intervals in order and make sure they do not overlap."
            }
            DomainError::OutOfRange { .. } => {
                "Make sure every interval ends within the length of the video."
            }
            DomainError::UnsupportedExtension { .. } => {
                "Pick an output file with one of the supported extensions."
            }
            DomainError::BadArgs(_) => "Check the command arguments and try again.",
        }
    }
}
