//! Plain-text presenter for headless lookups

use super::content::{
    ExternalTool, SolutionGroup, ALTERNATIVE_OPTIONS, DOWNLOAD_NOTE, DOWNLOAD_NOTE_HEADING,
    FALLBACK_HEADING,
};
use super::{Presenter, VideoCard, SUBMIT_LABEL_BUSY};
use std::fmt::Display;
use std::io::{self, Stdout, Write};
use tracing::warn;

/// Writes every region as lines of text. Notices are printed once; there is
/// nothing to dismiss on a terminal.
pub struct TerminalPresenter<W: Write = Stdout> {
    out: W,
}

impl TerminalPresenter<Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalPresenter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn set_busy(&mut self, busy: bool) {
        if busy {
            self.line(SUBMIT_LABEL_BUSY);
        }
    }

    fn clear_video(&mut self) {}

    fn clear_actions(&mut self) {}

    fn show_video(&mut self, card: &VideoCard) {
        self.line(&card.title);
        self.line(&card.author_line);
        self.line(&card.duration_line);
        if let Some(views) = &card.views_line {
            self.line(views);
        }
        if !card.thumbnail_url.is_empty() {
            self.line(format!("Thumbnail: {}", card.thumbnail_url));
        }
        self.line(format!("Watch: {}", card.watch_url));
    }

    fn show_download_note(&mut self, tools: &[ExternalTool]) {
        self.line("");
        self.line(DOWNLOAD_NOTE_HEADING);
        self.line(DOWNLOAD_NOTE);
        self.line("Alternative Options:");
        for option in ALTERNATIVE_OPTIONS {
            self.line(format!("  - {}", option));
        }
        for tool in tools {
            self.line(format!("  {} <{}>", tool.name, tool.url));
        }
    }

    fn show_notice(&mut self, message: &str) {
        self.line(format!("Error: {}", message));
    }

    fn show_fallback(&mut self, groups: &[SolutionGroup]) {
        self.line("");
        self.line(FALLBACK_HEADING);
        for group in groups {
            self.line("");
            self.line(group.title);
            self.line(group.summary);
            for item in group.items {
                match item.detail {
                    Some(detail) => self.line(format!("  - {}: {}", item.label, detail)),
                    None => self.line(format!("  - {}", item.label)),
                }
            }
        }
    }
}
