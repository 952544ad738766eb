//! Error handling for FetchFlicks

use thiserror::Error;

/// Everything that can end a lookup early.
///
/// Cloneable so it can travel inside GUI messages and `SubmissionState`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Invalid URL: {0}")]
    Validation(String),

    #[error("Could not extract video ID from URL")]
    Extraction,

    #[error("YouTube API key not configured")]
    MissingCredential,

    #[error("Metadata service returned HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Video not found")]
    NotFound,

    #[error("Network error: {0}")]
    Network(String),
}

impl LookupError {
    /// Failures caused by how the app is deployed rather than by what the user typed.
    ///
    /// These get the full alternative-solutions panel on top of the notice.
    pub fn is_deployment_limitation(&self) -> bool {
        matches!(
            self,
            LookupError::MissingCredential
                | LookupError::Network(_)
                | LookupError::Upstream { .. }
        )
    }

    /// Message shown in the transient notice.
    pub fn user_message(&self) -> String {
        match self {
            LookupError::Validation(reason) => reason.clone(),
            LookupError::Extraction => {
                "Could not find a video ID in this URL. Please check the link and try again"
                    .to_string()
            }
            LookupError::MissingCredential
            | LookupError::Network(_)
            | LookupError::Upstream { .. } => {
                "Unable to fetch video information. Check the configured YouTube API key and \
                 your network connection."
                    .to_string()
            }
            LookupError::NotFound => "This video is not available or has been removed".to_string(),
        }
    }
}

/// The request URL carries the API key in its query, so it is stripped
/// before the error text is kept anywhere.
impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        let err = err.without_url();
        match err.status() {
            Some(status) => LookupError::Upstream {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => LookupError::Network(err.to_string()),
        }
    }
}
