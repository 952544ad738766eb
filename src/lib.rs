//! FetchFlicks library

pub mod controller;
pub mod extractor;
pub mod gui;
pub mod presenter;
pub mod utils;

// Re-export main types for easier use
pub use controller::{SubmissionController, SubmissionState};
pub use extractor::{MetadataSource, VideoId, VideoMetadata, YouTubeApiClient};
pub use gui::{FetchFlicksApp, Message};
pub use presenter::{Presenter, RegionState, TerminalPresenter};
pub use utils::{AppSettings, LookupError};
