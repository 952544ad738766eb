//! Utility modules for error handling, configuration and formatting

pub mod config;
pub mod duration;
pub mod error;

// Re-export for convenience
pub use config::AppSettings;
pub use duration::{format_duration, parse_duration};
pub use error::LookupError;
