//! YouTube Data API v3 client
//!
//! Resolves a video ID to title, channel, thumbnail, duration and counts with a
//! single `videos` request. Without a usable API key the client refuses to
//! touch the network and reports `MissingCredential`, which is the normal
//! state for a keyless deployment.

use crate::extractor::models::{VideoId, VideoMetadata};
use crate::extractor::traits::MetadataSource;
use crate::utils::config::{normalize_credential, AppSettings};
use crate::utils::error::LookupError;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Field groups requested from the `videos` endpoint
const REQUESTED_PARTS: &str = "snippet,contentDetails,statistics";

/// Thumbnail sizes in order of preference
const THUMBNAIL_PREFERENCE: [&str; 3] = ["medium", "high", "default"];

pub struct YouTubeApiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl YouTubeApiClient {
    /// Create a client. Blank or placeholder keys count as no key.
    pub fn new(client: Client, api_key: Option<&str>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_key: normalize_credential(api_key),
            base_url: base_url.into(),
        }
    }

    /// Build the HTTP client and API client from application settings.
    pub fn from_settings(settings: &AppSettings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self::new(
            client,
            settings.api_key.as_deref(),
            settings.api_base_url.clone(),
        ))
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl MetadataSource for YouTubeApiClient {
    fn id(&self) -> &'static str {
        "youtube-data-api"
    }

    async fn fetch_metadata(&self, video_id: &VideoId) -> Result<VideoMetadata, LookupError> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("No YouTube API key configured, skipping request for {}", video_id);
            return Err(LookupError::MissingCredential);
        };

        info!("Fetching metadata for video {}", video_id);
        let response = self
            .client
            .get(self.url("/videos"))
            .query(&[
                ("id", video_id.as_str()),
                ("key", api_key),
                ("part", REQUESTED_PARTS),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("Metadata service answered {} ({} bytes)", status, body.len());

        parse_video_response(status, &body, video_id)
    }
}

/// Map a raw `videos` response onto the typed result.
///
/// Only the first item is used; any others are ignored.
pub fn parse_video_response(
    status: u16,
    body: &str,
    video_id: &VideoId,
) -> Result<VideoMetadata, LookupError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| "Failed to fetch video information".to_string());
        warn!("Metadata request for {} failed with {}: {}", video_id, status, message);
        return Err(LookupError::Upstream { status, message });
    }

    let response: VideoListResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Upstream {
            status,
            message: format!("Unreadable response: {}", e),
        })?;

    let item_count = response.items.len();
    let Some(item) = response.items.into_iter().next() else {
        info!("No video found for {}", video_id);
        return Err(LookupError::NotFound);
    };
    if item_count > 1 {
        debug!("Ignoring {} extra items for {}", item_count - 1, video_id);
    }

    Ok(item.into_metadata(video_id.clone()))
}

// YouTube API response structures

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    snippet: Snippet,
    #[serde(default)]
    content_details: ContentDetails,
    #[serde(default)]
    statistics: Statistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    title: String,
    channel_title: String,
    #[serde(default)]
    thumbnails: HashMap<String, Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Default, Deserialize)]
struct ContentDetails {
    #[serde(default)]
    duration: String,
}

/// Counts arrive as decimal strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Statistics {
    view_count: Option<String>,
    like_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl VideoItem {
    fn into_metadata(self, id: VideoId) -> VideoMetadata {
        let thumbnail_url = THUMBNAIL_PREFERENCE
            .iter()
            .find_map(|size| self.snippet.thumbnails.get(*size))
            .map(|t| t.url.clone())
            .unwrap_or_default();

        VideoMetadata {
            id,
            title: self.snippet.title,
            channel_title: self.snippet.channel_title,
            thumbnail_url,
            duration: self.content_details.duration,
            view_count: parse_count(self.statistics.view_count),
            like_count: parse_count(self.statistics.like_count),
        }
    }
}

fn parse_count(raw: Option<String>) -> Option<u64> {
    raw.and_then(|s| s.parse().ok())
}
