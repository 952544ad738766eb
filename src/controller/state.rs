use crate::extractor::VideoMetadata;
use crate::utils::error::LookupError;

/// Where the current submission stands
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Success(VideoMetadata),
    Failed(LookupError),
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }

    /// Short name for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "Idle",
            SubmissionState::Loading => "Loading",
            SubmissionState::Success(_) => "Success",
            SubmissionState::Failed(_) => "Failed",
        }
    }
}
