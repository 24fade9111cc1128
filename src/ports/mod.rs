// Ports - Interface definitions for the media collaborators

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for reading a media source
#[async_trait]
pub trait MediaSourcePort: Send + Sync {
    /// Duration of the media in whole seconds, usable as the timeline length
    async fn duration(&self, file_path: &str) -> Result<u64, DomainError>;

    /// Trimmable segment of the media for one interval
    async fn subclip(&self, file_path: &str, interval: Interval) -> Result<Segment, DomainError>;
}

/// Port for concatenating and encoding segments
#[async_trait]
pub trait MediaSinkPort: Send + Sync {
    /// Concatenate `segments` in order and encode them to `target`
    async fn write(
        &self,
        segments: &[Segment],
        target: &OutputTarget,
    ) -> Result<WriteReport, DomainError>;
}
