// Domain rules - Interval parsing, complement and retain policies

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::errors::*;
use crate::domain::model::*;

/// `S`, `M:S` or `H:M:S`, one or two ASCII digits per field
const TIME_PATTERN: &str = r"[0-9]{1,2}|[0-9]{1,2}:[0-9]{1,2}|[0-9]{1,2}:[0-9]{1,2}:[0-9]{1,2}";

/// `(start end)`, separated by an optional space, comma, hyphen and space
static INTERVAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\(({time}) ?,?-? ?({time})\)",
        time = TIME_PATTERN
    ))
    .expect("interval pattern is a valid regex")
});

/// Extracts intervals from free-form text
pub struct IntervalParser;

impl IntervalParser {
    /// Parse every parenthesized `(start end)` pair in `text`.
    ///
    /// Text outside the pairs is ignored, and text without any pair yields an
    /// empty set. Intervals come back in document order, without sorting,
    /// merging or overlap checks.
    pub fn parse(text: &str) -> Result<IntervalSet, DomainError> {
        let mut intervals = Vec::new();

        for (index, captures) in INTERVAL_PATTERN.captures_iter(text).enumerate() {
            let start = TimeValue::parse(&captures[1])?;
            let end = TimeValue::parse(&captures[2])?;

            if start > end {
                return Err(DomainError::StartAfterEnd {
                    index,
                    start: start.seconds,
                    end: end.seconds,
                });
            }

            intervals.push(Interval {
                start: start.seconds,
                end: end.seconds,
            });
        }

        Ok(intervals)
    }
}

/// Gap-filling over a timeline
pub struct ComplementCalculator;

impl ComplementCalculator {
    /// Intervals covering `[0, length)` that `intervals` leaves uncovered.
    ///
    /// `intervals` must be ordered and disjoint (touching is fine) and end
    /// within `length`. Every consecutive pair yields one gap, zero-length
    /// gaps included. An empty input yields the whole timeline.
    pub fn complement(intervals: &[Interval], length: u64) -> Result<IntervalSet, DomainError> {
        Self::validate(intervals, length)?;

        let (first, last) = match (intervals.first(), intervals.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Ok(vec![Interval { start: 0, end: length }]),
        };

        let mut gaps = Vec::with_capacity(intervals.len() + 1);

        if first.start != 0 {
            gaps.push(Interval {
                start: 0,
                end: first.start,
            });
        }

        for pair in intervals.windows(2) {
            gaps.push(Interval {
                start: pair[0].end,
                end: pair[1].start,
            });
        }

        if last.end != length {
            gaps.push(Interval {
                start: last.end,
                end: length,
            });
        }

        Ok(gaps)
    }

    /// Check the ordered, disjoint and in-range preconditions
    pub fn validate(intervals: &[Interval], length: u64) -> Result<(), DomainError> {
        let mut previous_end: Option<u64> = None;

        for (index, interval) in intervals.iter().enumerate() {
            if interval.start > interval.end {
                return Err(DomainError::StartAfterEnd {
                    index,
                    start: interval.start,
                    end: interval.end,
                });
            }
            if let Some(previous_end) = previous_end {
                if interval.start < previous_end {
                    return Err(DomainError::Overlap {
                        index,
                        previous_end,
                        start: interval.start,
                    });
                }
            }
            if interval.end > length {
                return Err(DomainError::OutOfRange {
                    end: interval.end,
                    length,
                });
            }
            previous_end = Some(interval.end);
        }

        Ok(())
    }
}

/// Cut/keep policy on top of the parser and the complement calculator
pub struct RetainPlanner;

impl RetainPlanner {
    /// Intervals of the timeline to retain for `mode`
    pub fn retain(
        intervals: &[Interval],
        mode: TrimMode,
        length: u64,
    ) -> Result<IntervalSet, DomainError> {
        match mode {
            TrimMode::Cut => ComplementCalculator::complement(intervals, length),
            TrimMode::Keep => {
                if let Some(interval) = intervals.iter().find(|i| i.end > length) {
                    return Err(DomainError::OutOfRange {
                        end: interval.end,
                        length,
                    });
                }
                Ok(intervals.to_vec())
            }
        }
    }

    /// Sum of interval durations in seconds
    pub fn total_duration(intervals: &[Interval]) -> u64 {
        intervals.iter().map(Interval::duration).sum()
    }
}

/// Container extension to (video codec, audio codec)
pub const CODEC_TABLE: &[(&str, &str, &str)] = &[
    ("mp4", "libx264", "aac"),
    ("webm", "libvpx", "libvorbis"),
    ("ogv", "libtheora", "libvorbis"),
    ("ogg", "libtheora", "libvorbis"),
    ("avi", "mpeg4", "mp3"),
    ("mov", "h264", "aac"),
    ("mkv", "libx264", "aac"),
    ("flv", "flv1", "mp3"),
    ("wmv", "wmv2", "wma"),
];

/// Codec selection by output container
pub struct CodecSelector;

impl CodecSelector {
    /// Look up the (video, audio) codec pair for an extension
    pub fn select(extension: &str) -> Result<(&'static str, &'static str), DomainError> {
        let normalized = extension.trim().trim_start_matches('.').to_lowercase();

        CODEC_TABLE
            .iter()
            .find(|(ext, _, _)| *ext == normalized)
            .map(|(_, video, audio)| (*video, *audio))
            .ok_or_else(|| DomainError::UnsupportedExtension {
                extension: normalized,
                supported: Self::supported_extensions(),
            })
    }

    /// All extensions with a codec mapping
    pub fn supported_extensions() -> Vec<String> {
        CODEC_TABLE.iter().map(|(ext, _, _)| ext.to_string()).collect()
    }

    /// Resolve the output path and codecs for `input`.
    ///
    /// An explicit output path is used as-is and its own extension drives the
    /// codec choice.
    pub fn resolve_target(
        input: &str,
        explicit_output: Option<&str>,
        suffix: &str,
        default_extension: &str,
    ) -> Result<OutputTarget, DomainError> {
        let (path, extension) = match explicit_output {
            Some(output) => {
                let path = Path::new(output).to_path_buf();
                let extension = path
                    .extension()
                    .map(|ext| ext.to_string_lossy().to_string())
                    .ok_or_else(|| {
                        DomainError::BadArgs(format!("Output path has no extension: {}", output))
                    })?;
                (path, extension)
            }
            None => OutputTarget::output_path(Path::new(input), suffix, default_extension),
        };

        let (video_codec, audio_codec) = Self::select(&extension)?;

        Ok(OutputTarget {
            path,
            extension: extension.to_lowercase(),
            video_codec: video_codec.to_string(),
            audio_codec: audio_codec.to_string(),
        })
    }
}
