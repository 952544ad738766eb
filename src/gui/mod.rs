//! GUI module

pub mod app;
pub mod clipboard;
pub mod components;
pub mod theme;
pub mod thumbnail;
pub mod views;

// Re-export for convenience
pub use app::FetchFlicksApp;
pub use app::GuiFlags;
pub use app::Message;
