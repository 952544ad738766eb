//! In-memory display regions
//!
//! Holds what each addressable region currently shows. The GUI renders from
//! this state; tests inspect it directly.

use super::content::{ExternalTool, SolutionGroup};
use super::{Presenter, VideoCard, SUBMIT_LABEL, SUBMIT_LABEL_BUSY};
use tracing::debug;

/// Contents of the actions region
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionsRegion {
    #[default]
    Empty,
    DownloadNote(Vec<ExternalTool>),
    Fallback(Vec<SolutionGroup>),
}

/// A transient notice. `generation` identifies it for expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub generation: u64,
}

#[derive(Debug, Clone, Default)]
pub struct RegionState {
    busy: bool,
    video: Option<VideoCard>,
    actions: ActionsRegion,
    notice: Option<Notice>,
    notice_counter: u64,
}

impl RegionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            SUBMIT_LABEL_BUSY
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn video(&self) -> Option<&VideoCard> {
        self.video.as_ref()
    }

    pub fn actions(&self) -> &ActionsRegion {
        &self.actions
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The info container is shown whenever it has something to display.
    pub fn info_visible(&self) -> bool {
        self.video.is_some() || self.actions != ActionsRegion::Empty
    }

    /// Hide the notice, but only if it is still the one the timer was set for.
    pub fn dismiss_notice(&mut self, generation: u64) -> bool {
        match &self.notice {
            Some(notice) if notice.generation == generation => {
                debug!("Dismissing notice #{}", generation);
                self.notice = None;
                true
            }
            _ => false,
        }
    }
}

impl Presenter for RegionState {
    fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    fn clear_video(&mut self) {
        self.video = None;
    }

    fn clear_actions(&mut self) {
        self.actions = ActionsRegion::Empty;
    }

    fn show_video(&mut self, card: &VideoCard) {
        self.video = Some(card.clone());
    }

    fn show_download_note(&mut self, tools: &[ExternalTool]) {
        self.actions = ActionsRegion::DownloadNote(tools.to_vec());
    }

    fn show_notice(&mut self, message: &str) {
        self.notice_counter += 1;
        self.notice = Some(Notice {
            message: message.to_string(),
            generation: self.notice_counter,
        });
    }

    fn show_fallback(&mut self, groups: &[SolutionGroup]) {
        self.actions = ActionsRegion::Fallback(groups.to_vec());
    }
}
