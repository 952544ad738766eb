//! Data structures for video information

use std::fmt;

/// Number of characters in a YouTube video ID
pub const VIDEO_ID_LEN: usize = 11;

/// An 11-character YouTube video identifier (`[A-Za-z0-9_-]{11}`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Accept a bare identifier. Returns `None` for anything of the wrong shape.
    pub fn parse(raw: &str) -> Option<Self> {
        let valid = raw.len() == VIDEO_ID_LEN
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical watch page for this video
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Metadata resolved for a single video
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    pub id: VideoId,
    pub title: String,
    pub channel_title: String,
    /// Empty when the service returned no thumbnails
    pub thumbnail_url: String,
    /// Raw ISO-8601 duration, e.g. `PT4M13S`
    pub duration: String,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
}
