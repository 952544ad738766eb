//! FetchFlicks - YouTube video info lookup
//!
//! Resolves a YouTube link to its title, channel, thumbnail and duration through
//! the YouTube Data API, and points to external tools for the actual download.

use anyhow::Result;
use clap::Parser;
use fetchflicks::controller::{SubmissionController, SubmissionState};
use fetchflicks::extractor::{MetadataSource, YouTubeApiClient};
use fetchflicks::gui::{FetchFlicksApp, GuiFlags};
use fetchflicks::presenter::TerminalPresenter;
use fetchflicks::utils::config::{settings_path, AppSettings, API_KEY_ENV};
use iced::Application;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(version)]
struct Args {
    /// Look up a single URL, print the result and exit
    #[arg(long)]
    lookup: Option<String>,

    /// YouTube Data API key (overrides settings file and environment)
    #[arg(long)]
    api_key: Option<String>,

    /// Settings file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    let config_path = args.config.unwrap_or_else(settings_path);
    let mut settings = AppSettings::load_from(&config_path)?;
    settings.apply_env_override(std::env::var(API_KEY_ENV).ok());
    if let Some(key) = args.api_key {
        settings.api_key = Some(key);
    }

    if settings.credential().is_none() {
        warn!("No YouTube API key configured; lookups will fall back to alternative options");
    }

    let source: Arc<dyn MetadataSource> = Arc::new(YouTubeApiClient::from_settings(&settings)?);

    if let Some(url) = args.lookup {
        // Run headless lookup inside a temporary Tokio runtime
        let rt = tokio::runtime::Runtime::new()?;
        let resolved = rt.block_on(lookup_cli(source, url));
        if !resolved {
            std::process::exit(1);
        }
        return Ok(());
    }

    info!("Starting GUI");
    FetchFlicksApp::run(iced::Settings {
        window: iced::window::Settings {
            size: iced::Size::new(900.0, 700.0),
            min_size: Some(iced::Size::new(600.0, 500.0)),
            ..Default::default()
        },
        antialiasing: true,
        ..iced::Settings::with_flags(GuiFlags {
            source,
            http: reqwest::Client::new(),
            notice_duration: settings.notice_duration(),
        })
    })?;

    Ok(())
}

async fn lookup_cli(source: Arc<dyn MetadataSource>, url: String) -> bool {
    let mut controller = SubmissionController::new(source, TerminalPresenter::new());
    matches!(controller.submit(&url).await, SubmissionState::Success(_))
}
