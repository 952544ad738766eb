use crate::extractor::models::{VideoId, VideoMetadata};
use crate::utils::error::LookupError;
use async_trait::async_trait;

/// Core trait for anything that can resolve a video ID to metadata
///
/// This keeps the submission flow independent of the concrete service, so
/// tests can plug in a scripted source.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Returns a unique identifier for this source (e.g., "youtube-data-api")
    fn id(&self) -> &'static str;

    /// Resolve one video. A single attempt; callers decide whether to retry.
    async fn fetch_metadata(&self, video_id: &VideoId) -> Result<VideoMetadata, LookupError>;
}
