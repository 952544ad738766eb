//! YouTube URL validation and video ID extraction

use crate::extractor::models::VideoId;
use crate::utils::error::LookupError;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Canonical domain with a path, or the short-link domain, with something after the slash.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?(?:youtube\.com|youtu\.be)/.+")
        .expect("Failed to compile YouTube URL regex")
});

/// One pattern per link shape, tried in order: `/<seg>/.../`, `/v/` `/e/` `/embed/`,
/// `?v=`/`&v=`, then `youtu.be/`. Group 1 is the 11-character candidate.
static VIDEO_ID_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        r#"youtube\.com/[^/]+/.+/([^"&?/\s]{11})"#,
        r#"youtube\.com/(?:v|e(?:mbed)?)/([^"&?/\s]{11})"#,
        r#"youtube\.com/.*[?&]v=([^"&?/\s]{11})"#,
        r#"youtu\.be/([^"&?/\s]{11})"#,
    ]
    .map(|pattern| Regex::new(pattern).expect("Failed to compile YouTube video ID regex"))
});

/// Platforms the full FetchFlicks site served. Only YouTube is handled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    YouTube,
    Facebook,
    Instagram,
    Unknown,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Unknown => "Unknown",
        }
    }
}

/// Guess which platform a pasted link belongs to.
pub fn detect_platform(raw: &str) -> Platform {
    let lower = raw.to_lowercase();
    if lower.contains("youtube.com") || lower.contains("youtu.be") {
        Platform::YouTube
    } else if lower.contains("facebook.com") || lower.contains("fb.watch") {
        Platform::Facebook
    } else if lower.contains("instagram.com") {
        Platform::Instagram
    } else {
        Platform::Unknown
    }
}

/// True when `raw` has the shape of a YouTube link.
pub fn validate(raw: &str) -> bool {
    URL_REGEX.is_match(raw)
}

/// Pull the video ID out of a validated YouTube link.
///
/// The first candidate that is a well-formed ID wins; candidates with
/// characters outside `[A-Za-z0-9_-]` are skipped.
pub fn extract(raw: &str) -> Option<VideoId> {
    let id = VIDEO_ID_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.captures_iter(raw))
        .filter_map(|caps| caps.get(1))
        .find_map(|candidate| VideoId::parse(candidate.as_str()));
    debug!("Extracted video ID {:?} from {}", id, raw);
    id
}

/// Guard run before a submission may start loading.
///
/// Returns the trimmed URL, or a `Validation` error whose message is ready
/// for the notice region.
pub fn check_submission(raw: &str) -> Result<&str, LookupError> {
    let url = raw.trim();

    if url.is_empty() {
        return Err(LookupError::Validation(
            "Please enter a YouTube video URL".to_string(),
        ));
    }

    if validate(url) {
        return Ok(url);
    }

    let reason = match detect_platform(url) {
        platform @ (Platform::Facebook | Platform::Instagram) => format!(
            "{} downloader is not available in this version. Please enter a YouTube video URL",
            platform.name()
        ),
        _ => "Please enter a valid YouTube video URL".to_string(),
    };
    Err(LookupError::Validation(reason))
}
