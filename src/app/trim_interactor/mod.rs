// Trim interactor - Orchestrates the parse, retain and write use case

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::ports::*;

/// Output naming settings used by the interactor
#[derive(Debug, Clone)]
pub struct TrimSettings {
    /// Inserted between the input file stem and its extension
    pub output_suffix: String,
    /// Used when the input path has no extension
    pub default_extension: String,
}

impl Default for TrimSettings {
    fn default() -> Self {
        Self {
            output_suffix: "(Clean Movie)".to_string(),
            default_extension: "mp4".to_string(),
        }
    }
}

/// Interactor for the trim use case
pub struct TrimInteractor {
    source_port: Arc<dyn MediaSourcePort>,
    sink_port: Arc<dyn MediaSinkPort>,
    settings: TrimSettings,
}

impl TrimInteractor {
    /// Create new trim interactor with injected ports
    pub fn new(
        source_port: Arc<dyn MediaSourcePort>,
        sink_port: Arc<dyn MediaSinkPort>,
        settings: TrimSettings,
    ) -> Self {
        Self {
            source_port,
            sink_port,
            settings,
        }
    }

    /// Execute the trim request
    pub async fn execute(&self, request: TrimRequest) -> Result<TrimResponse, DomainError> {
        info!(
            input = %request.input_path,
            mode = %request.mode,
            "Starting trim"
        );

        let parsed = IntervalParser::parse(&request.intervals_text)?;
        debug!(count = parsed.len(), "Parsed intervals");

        // Naming problems surface before any media work
        let output = CodecSelector::resolve_target(
            &request.input_path,
            request.output_path.as_deref(),
            &self.settings.output_suffix,
            &self.settings.default_extension,
        )?;

        let length = self.source_port.duration(&request.input_path).await?;
        let retained = RetainPlanner::retain(&parsed, request.mode, length)?;
        let retained_duration = RetainPlanner::total_duration(&retained);
        info!(
            length,
            retained = retained.len(),
            retained_duration,
            "Selected retain set"
        );

        let mut segments = Vec::with_capacity(retained.len());
        for interval in &retained {
            segments.push(
                self.source_port
                    .subclip(&request.input_path, *interval)
                    .await?,
            );
        }

        let report = self.sink_port.write(&segments, &output).await?;
        info!(output = %report.output_path.display(), "Trim finished");

        Ok(TrimResponse {
            input_path: request.input_path,
            mode: request.mode,
            length,
            parsed,
            retained,
            retained_duration,
            output,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{FixedDurationSource, PlanRecorderSink};
    use async_trait::async_trait;

    struct FailingSource;

    #[async_trait]
    impl MediaSourcePort for FailingSource {
        async fn duration(&self, _file_path: &str) -> Result<u64, DomainError> {
            Err(DomainError::BadArgs("unreadable media".to_string()))
        }

        async fn subclip(
            &self,
            _file_path: &str,
            _interval: Interval,
        ) -> Result<Segment, DomainError> {
            unreachable!("duration fails first")
        }
    }

    fn interactor(length: u64) -> (TrimInteractor, Arc<PlanRecorderSink>) {
        let sink = Arc::new(PlanRecorderSink::new());
        let interactor = TrimInteractor::new(
            Arc::new(FixedDurationSource::new(length)),
            Arc::clone(&sink) as Arc<dyn MediaSinkPort>,
            TrimSettings::default(),
        );
        (interactor, sink)
    }

    #[tokio::test]
    async fn test_cut_retains_complement() {
        let (interactor, sink) = interactor(50);
        let request = TrimRequest::new("talk.mp4", "(0:10-0:20)(0:30 0:40)", TrimMode::Cut).unwrap();

        let response = interactor.execute(request).await.unwrap();

        assert_eq!(response.length, 50);
        assert_eq!(
            response.retained,
            vec![
                Interval { start: 0, end: 10 },
                Interval { start: 20, end: 30 },
                Interval { start: 40, end: 50 },
            ]
        );
        assert_eq!(response.retained_duration, 30);
        assert_eq!(response.output.path, std::path::Path::new("talk(Clean Movie).mp4"));
        assert_eq!(response.report.segment_count, 3);
        assert_eq!(sink.reports().len(), 1);
    }

    #[tokio::test]
    async fn test_keep_retains_parsed() {
        let (interactor, _sink) = interactor(50);
        let request = TrimRequest::new("talk.mkv", "(0:10-0:20)", TrimMode::Keep).unwrap();

        let response = interactor.execute(request).await.unwrap();

        assert_eq!(response.retained, response.parsed);
        assert_eq!(response.output.video_codec, "libx264");
    }

    #[tokio::test]
    async fn test_cut_nothing_keeps_whole_timeline() {
        let (interactor, _sink) = interactor(90);
        let request = TrimRequest::new("talk.mp4", "no intervals", TrimMode::Cut).unwrap();

        let response = interactor.execute(request).await.unwrap();

        assert_eq!(response.retained, vec![Interval { start: 0, end: 90 }]);
    }

    #[tokio::test]
    async fn test_errors_stop_before_sink() {
        let (interactor, sink) = interactor(30);
        let request = TrimRequest::new("talk.mp4", "(0:10 0:40)", TrimMode::Cut).unwrap();

        let err = interactor.execute(request).await.unwrap_err();

        assert_eq!(err, DomainError::OutOfRange { end: 40, length: 30 });
        assert!(sink.reports().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_extension() {
        let (interactor, _sink) = interactor(30);
        let request = TrimRequest::new("talk.xyz", "(1 2)", TrimMode::Cut).unwrap();

        assert!(matches!(
            interactor.execute(request).await,
            Err(DomainError::UnsupportedExtension { .. })
        ));
    }

    #[tokio::test]
    async fn test_source_error_propagates() {
        let interactor = TrimInteractor::new(
            Arc::new(FailingSource),
            Arc::new(PlanRecorderSink::new()),
            TrimSettings::default(),
        );
        let request = TrimRequest::new("talk.mp4", "(1 2)", TrimMode::Cut).unwrap();

        assert!(matches!(
            interactor.execute(request).await,
            Err(DomainError::BadArgs(_))
        ));
    }
}
