//! Main view implementation - Dark Theme

use crate::gui::app::Message;
use crate::gui::components::{actions_panel, notice_banner, url_input, video_card};
use crate::gui::theme;
use crate::presenter::RegionState;
use iced::widget::{button, column, container, image, row, scrollable, text, Column, Space};
use iced::{Element, Length};

/// Create the main view from the current regions
pub fn main_view<'a>(
    url_value: &str,
    regions: &'a RegionState,
    thumbnail: Option<&image::Handle>,
) -> Element<'a, Message> {
    let busy = regions.is_busy();

    let form = column![
        text("YouTube Video Info")
            .size(30)
            .style(iced::theme::Text::Color(theme::WHITE)),
        text("Paste a YouTube link to see its title, channel and duration.")
            .size(14)
            .style(iced::theme::Text::Color(theme::GRAY)),
        url_input(url_value, busy),
        row![
            Space::with_width(Length::Fill),
            button(text(regions.submit_label()).size(16))
                .on_press_maybe((!busy && !url_value.trim().is_empty()).then_some(Message::SubmitPressed))
                .padding([16, 32])
                .style(iced::theme::Button::Custom(Box::new(theme::PrimaryButton))),
        ],
    ]
    .spacing(16);

    let mut page = Column::new().spacing(20).push(form);

    if let Some(notice) = regions.notice() {
        page = page.push(notice_banner(notice));
    }

    if regions.info_visible() {
        let mut info = Column::new().spacing(20);
        if let Some(card) = regions.video() {
            info = info.push(video_card(card, thumbnail));
        }
        if let Some(actions) = actions_panel(regions.actions()) {
            info = info.push(actions);
        }

        page = page.push(
            container(info)
                .padding(20)
                .width(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(theme::CardContainer))),
        );
    }

    container(scrollable(container(page).padding(30).max_width(800.0)))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .style(iced::theme::Container::Custom(Box::new(theme::PageContainer)))
        .into()
}
