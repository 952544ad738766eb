//! GUI components

pub mod actions_panel;
pub mod notice_banner;
pub mod url_input;
pub mod video_card;

// Re-export for convenience
pub use actions_panel::actions_panel;
pub use notice_banner::notice_banner;
pub use url_input::url_input;
pub use video_card::video_card;
