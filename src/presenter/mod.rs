//! Rendering surface the submission flow writes into
//!
//! The controller only ever talks to a [`Presenter`]; the GUI backs it with
//! [`RegionState`], the headless CLI with [`TerminalPresenter`].

pub mod content;
pub mod regions;
pub mod terminal;

pub use content::{ExternalTool, SolutionGroup, SolutionItem, EXTERNAL_TOOLS, SOLUTION_GROUPS};
pub use regions::{ActionsRegion, Notice, RegionState};
pub use terminal::TerminalPresenter;

use crate::extractor::VideoMetadata;
use crate::utils::duration::format_duration;

/// Submit control label while idle
pub const SUBMIT_LABEL: &str = "Get Video Info";

/// Submit control label while a lookup is in flight
pub const SUBMIT_LABEL_BUSY: &str = "Fetching video info...";

/// Capability set of the rendering surface
pub trait Presenter {
    /// Disable the submit control and show the busy label, or restore it.
    fn set_busy(&mut self, busy: bool);

    /// Empty the info region.
    fn clear_video(&mut self);

    /// Empty the actions region.
    fn clear_actions(&mut self);

    /// Fill the info region.
    fn show_video(&mut self, card: &VideoCard);

    /// Static "downloads unavailable" explanation plus external tool links.
    fn show_download_note(&mut self, tools: &[ExternalTool]);

    /// Transient message; implementations hide it after the notice duration.
    fn show_notice(&mut self, message: &str);

    /// Persistent panel of alternative solutions.
    fn show_fallback(&mut self, groups: &[SolutionGroup]);
}

/// Display-ready view of [`VideoMetadata`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoCard {
    pub thumbnail_url: String,
    pub title: String,
    /// `By: <channel>`
    pub author_line: String,
    /// `Duration: <clock>`
    pub duration_line: String,
    pub views_line: Option<String>,
    pub watch_url: String,
}

impl VideoCard {
    pub fn from_metadata(meta: &VideoMetadata) -> Self {
        Self {
            thumbnail_url: meta.thumbnail_url.clone(),
            title: meta.title.clone(),
            author_line: format!("By: {}", meta.channel_title),
            duration_line: format!("Duration: {}", format_duration(&meta.duration)),
            views_line: meta
                .view_count
                .map(|views| format!("Views: {}", group_thousands(views))),
            watch_url: meta.id.watch_url(),
        }
    }
}

/// `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::VideoId;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_video_card_from_metadata() {
        let meta = VideoMetadata {
            id: VideoId::parse("dQw4w9WgXcQ").unwrap(),
            title: "Never Gonna Give You Up".into(),
            channel_title: "Rick Astley".into(),
            thumbnail_url: "https://i.ytimg.com/vi/dQw4w9WgXcQ/mqdefault.jpg".into(),
            duration: "PT3M33S".into(),
            view_count: Some(1_500_000),
            like_count: None,
        };

        let card = VideoCard::from_metadata(&meta);
        assert_eq!(card.author_line, "By: Rick Astley");
        assert_eq!(card.duration_line, "Duration: 3:33");
        assert_eq!(card.views_line.as_deref(), Some("Views: 1,500,000"));
        assert_eq!(card.watch_url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }

    #[test]
    fn test_catalogs() {
        assert_eq!(EXTERNAL_TOOLS.len(), 3);
        assert_eq!(SOLUTION_GROUPS.len(), 4);
        assert!(SOLUTION_GROUPS.iter().all(|g| !g.items.is_empty()));
    }
}
