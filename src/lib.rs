//! CleanCut Library
//!
//! Parses free-form descriptions of video intervals such as
//! `"cut (1:30, 2:30) then (1:03:30-1:04:30)"` into second-denominated
//! intervals, and computes which portions of a timeline to retain.
//!
//! # Interval grammar
//!
//! Each interval is a parenthesized pair of times, `(start end)`, where the
//! two times are separated by an optional space, comma, hyphen and space,
//! in that order. A time is `S`, `M:S` or `H:M:S` with one or two digits per
//! field. Anything outside the intervals is ignored.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{Interval, IntervalSet, TimeValue, TrimMode};
pub use domain::rules::{ComplementCalculator, IntervalParser, RetainPlanner};
pub use error::{CleanCutError, CleanCutResult};

/// Parse every `(start end)` interval in `text`
pub fn parse_intervals(text: &str) -> Result<IntervalSet, DomainError> {
    IntervalParser::parse(text)
}

/// Gaps left by `intervals` on a timeline of `length` seconds
pub fn complement_intervals(
    intervals: &[Interval],
    length: u64,
) -> Result<IntervalSet, DomainError> {
    ComplementCalculator::complement(intervals, length)
}
