// Plan-only adapters - Media ports that describe the work without doing it

use std::sync::RwLock;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::RetainPlanner;
use crate::ports::*;

/// Media source with a caller-supplied duration
pub struct FixedDurationSource {
    duration: u64,
}

impl FixedDurationSource {
    /// Create new source reporting `duration` seconds for every file
    pub fn new(duration: u64) -> Self {
        Self { duration }
    }
}

#[async_trait]
impl MediaSourcePort for FixedDurationSource {
    async fn duration(&self, file_path: &str) -> Result<u64, DomainError> {
        debug!(file = file_path, duration = self.duration, "Reporting fixed duration");
        Ok(self.duration)
    }

    async fn subclip(&self, file_path: &str, interval: Interval) -> Result<Segment, DomainError> {
        if interval.start > interval.end {
            return Err(DomainError::StartAfterEnd {
                index: 0,
                start: interval.start,
                end: interval.end,
            });
        }
        if interval.end > self.duration {
            return Err(DomainError::OutOfRange {
                end: interval.end,
                length: self.duration,
            });
        }
        Ok(Segment::new(file_path, interval))
    }
}

/// Media sink that records what would have been written
#[derive(Default)]
pub struct PlanRecorderSink {
    reports: RwLock<Vec<WriteReport>>,
}

impl PlanRecorderSink {
    /// Create new recorder sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports recorded so far, oldest first
    pub fn reports(&self) -> Vec<WriteReport> {
        self.reports
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl MediaSinkPort for PlanRecorderSink {
    async fn write(
        &self,
        segments: &[Segment],
        target: &OutputTarget,
    ) -> Result<WriteReport, DomainError> {
        let intervals: Vec<Interval> = segments.iter().map(|s| s.interval).collect();
        let report = WriteReport {
            output_path: target.path.clone(),
            segment_count: segments.len(),
            total_duration: RetainPlanner::total_duration(&intervals),
            written: false,
        };

        info!(
            output = %target.path.display(),
            video_codec = %target.video_codec,
            audio_codec = %target.audio_codec,
            segments = report.segment_count,
            "Planned output (nothing written)"
        );

        self.reports
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(report.clone());

        Ok(report)
    }
}
