//! Main GUI application

use crate::controller::{LookupOutcome, SubmissionController};
use crate::extractor::MetadataSource;
use crate::gui::clipboard;
use crate::gui::thumbnail::fetch_thumbnail;
use crate::gui::views::main_view;
use crate::presenter::{Presenter, RegionState};
use iced::widget::image;
use iced::{Application, Command, Element, Theme};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Everything the GUI needs from `main`
pub struct GuiFlags {
    pub source: Arc<dyn MetadataSource>,
    pub http: reqwest::Client,
    pub notice_duration: Duration,
}

/// Main application state
pub struct FetchFlicksApp {
    controller: SubmissionController<RegionState>,
    http: reqwest::Client,
    notice_duration: Duration,

    // UI State
    url_input: String,
    /// Thumbnail URL currently loaded or being loaded
    thumbnail_url: Option<String>,
    thumbnail: Option<image::Handle>,
    /// Newest notice generation that already has an expiry timer
    scheduled_notice: u64,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    SubmitPressed,
    PasteFromClipboard,
    ClearUrlInput,

    // Lookup events
    LookupFinished(LookupOutcome),
    ThumbnailLoaded(String, Result<Vec<u8>, String>),

    // Notices and links
    NoticeExpired(u64),
    OpenLink(String),
}

impl FetchFlicksApp {
    /// Commands owed after the regions changed: notice expiry and thumbnail loading.
    fn follow_up(&mut self) -> Command<Message> {
        let mut commands = Vec::new();

        if let Some(notice) = self.controller.presenter().notice() {
            if notice.generation > self.scheduled_notice {
                let generation = notice.generation;
                self.scheduled_notice = generation;
                commands.push(Command::perform(
                    tokio::time::sleep(self.notice_duration),
                    move |_| Message::NoticeExpired(generation),
                ));
            }
        }

        let wanted = self
            .controller
            .presenter()
            .video()
            .map(|card| card.thumbnail_url.clone())
            .filter(|url| !url.is_empty());

        if wanted != self.thumbnail_url {
            self.thumbnail = None;
            self.thumbnail_url = wanted.clone();
            if let Some(url) = wanted {
                let http = self.http.clone();
                commands.push(Command::perform(
                    fetch_thumbnail(http, url.clone()),
                    move |result| Message::ThumbnailLoaded(url, result),
                ));
            }
        }

        Command::batch(commands)
    }
}

impl Application for FetchFlicksApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = GuiFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let app = Self {
            controller: SubmissionController::new(flags.source, RegionState::new()),
            http: flags.http,
            notice_duration: flags.notice_duration,
            url_input: String::new(),
            thumbnail_url: None,
            thumbnail: None,
            scheduled_notice: 0,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("FetchFlicks - YouTube Video Info")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // Input events
            Message::UrlInputChanged(url) => {
                self.url_input = url;
                Command::none()
            }

            Message::SubmitPressed => {
                let pending = self.controller.begin(&self.url_input);
                let follow_up = self.follow_up();
                match pending {
                    Some(lookup) => Command::batch(vec![
                        Command::perform(lookup, Message::LookupFinished),
                        follow_up,
                    ]),
                    None => follow_up,
                }
            }

            Message::PasteFromClipboard => {
                match clipboard::paste_url() {
                    Ok(content) => self.url_input = content,
                    Err(e) => {
                        warn!("{}", e);
                        self.controller.presenter_mut().show_notice(&e);
                    }
                }
                self.follow_up()
            }

            Message::ClearUrlInput => {
                self.url_input.clear();
                Command::none()
            }

            // Lookup events
            Message::LookupFinished(outcome) => {
                self.controller.finish(outcome);
                self.follow_up()
            }

            Message::ThumbnailLoaded(url, result) => {
                if self.thumbnail_url.as_deref() == Some(url.as_str()) {
                    match result {
                        Ok(bytes) => self.thumbnail = Some(image::Handle::from_memory(bytes)),
                        Err(e) => warn!("{}", e),
                    }
                }
                Command::none()
            }

            // Notices and links
            Message::NoticeExpired(generation) => {
                self.controller.presenter_mut().dismiss_notice(generation);
                Command::none()
            }

            Message::OpenLink(url) => {
                if let Err(e) = open::that(&url) {
                    warn!("Failed to open {}: {}", url, e);
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        main_view(
            &self.url_input,
            self.controller.presenter(),
            self.thumbnail.as_ref(),
        )
    }

    fn theme(&self) -> Self::Theme {
        Theme::Dark
    }
}
