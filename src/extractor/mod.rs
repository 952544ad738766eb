pub mod models;
pub mod traits;
pub mod youtube;
pub mod youtube_api;

pub use models::{VideoId, VideoMetadata};
pub use traits::MetadataSource;
pub use youtube::{check_submission, detect_platform, extract, validate, Platform};
pub use youtube_api::YouTubeApiClient;
