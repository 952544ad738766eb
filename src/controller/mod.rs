//! Submission flow: one URL in, one rendered result out

pub mod state;
pub mod submission;

pub use state::SubmissionState;
pub use submission::{LookupOutcome, PendingLookup, SubmissionController};
