use super::state::SubmissionState;
use crate::extractor::{check_submission, extract, MetadataSource, VideoMetadata};
use crate::presenter::{Presenter, VideoCard, EXTERNAL_TOOLS, SOLUTION_GROUPS};
use crate::utils::error::LookupError;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of one metadata fetch
pub type LookupOutcome = Result<VideoMetadata, LookupError>;

/// The network half of a submission, detached so the caller can drive it
/// on whatever executor it owns.
pub type PendingLookup = BoxFuture<'static, LookupOutcome>;

/// Runs one submission at a time through validate → extract → fetch → render.
pub struct SubmissionController<P: Presenter> {
    source: Arc<dyn MetadataSource>,
    presenter: P,
    state: SubmissionState,
}

impl<P: Presenter> SubmissionController<P> {
    pub fn new(source: Arc<dyn MetadataSource>, presenter: P) -> Self {
        Self {
            source,
            presenter,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Start a submission.
    ///
    /// Returns the pending fetch when one has to be awaited. `None` means the
    /// submission already reached its end state (or was ignored because a
    /// lookup is still in flight).
    pub fn begin(&mut self, raw: &str) -> Option<PendingLookup> {
        if self.state.is_loading() {
            debug!("Submission ignored, a lookup is already in flight");
            return None;
        }

        let url = match check_submission(raw) {
            Ok(url) => url,
            Err(err) => {
                info!("Rejected submission: {}", err);
                self.presenter.show_notice(&err.user_message());
                return None;
            }
        };

        self.transition(SubmissionState::Loading);
        self.presenter.set_busy(true);
        self.presenter.clear_video();
        self.presenter.clear_actions();

        let Some(video_id) = extract(url) else {
            warn!("URL matched the YouTube domain but carried no video ID: {}", url);
            self.finish(Err(LookupError::Extraction));
            return None;
        };

        debug!("Looking up {} via {}", video_id, self.source.id());
        let source = Arc::clone(&self.source);
        Some(async move { source.fetch_metadata(&video_id).await }.boxed())
    }

    /// Route the outcome of a pending lookup to the presenter.
    pub fn finish(&mut self, outcome: LookupOutcome) {
        if !self.state.is_loading() {
            warn!(
                "Dropping lookup outcome received in state {}",
                self.state.as_str()
            );
            return;
        }

        self.presenter.set_busy(false);

        match outcome {
            Ok(metadata) => {
                info!("Resolved \"{}\" ({})", metadata.title, metadata.id);
                self.presenter
                    .show_video(&VideoCard::from_metadata(&metadata));
                self.presenter.show_download_note(&EXTERNAL_TOOLS);
                self.transition(SubmissionState::Success(metadata));
            }
            Err(err) => {
                warn!("Lookup failed: {}", err);
                self.presenter.show_notice(&err.user_message());
                if err.is_deployment_limitation() {
                    self.presenter.show_fallback(&SOLUTION_GROUPS);
                }
                self.transition(SubmissionState::Failed(err));
            }
        }
    }

    /// Run a whole submission cycle and return where it ended.
    pub async fn submit(&mut self, raw: &str) -> &SubmissionState {
        if let Some(pending) = self.begin(raw) {
            let outcome = pending.await;
            self.finish(outcome);
        }
        &self.state
    }

    fn transition(&mut self, next: SubmissionState) {
        debug!("Submission state {} -> {}", self.state.as_str(), next.as_str());
        self.state = next;
    }
}
