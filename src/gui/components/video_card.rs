//! Thumbnail, title and detail lines for a resolved video

use crate::gui::app::Message;
use crate::gui::theme;
use crate::presenter::VideoCard;
use iced::widget::{button, column, container, image, row, text, Column, Space};
use iced::{Element, Length};

const THUMB_WIDTH: f32 = 160.0;
const THUMB_HEIGHT: f32 = 90.0;

pub fn video_card<'a>(card: &'a VideoCard, thumbnail: Option<&image::Handle>) -> Element<'a, Message> {
    let thumb: Element<'a, Message> = match thumbnail {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(THUMB_WIDTH))
            .height(Length::Fixed(THUMB_HEIGHT))
            .into(),
        None => container(Space::new(
            Length::Fixed(THUMB_WIDTH),
            Length::Fixed(THUMB_HEIGHT),
        ))
        .style(iced::theme::Container::Custom(Box::new(theme::SolutionCard)))
        .into(),
    };

    let mut details = Column::new().spacing(4).push(
        text(&card.title)
            .size(18)
            .style(iced::theme::Text::Color(theme::WHITE)),
    );
    details = details.push(text(&card.author_line).size(14));
    details = details.push(text(&card.duration_line).size(14));
    if let Some(views) = &card.views_line {
        details = details.push(text(views).size(14));
    }

    row![
        thumb,
        column![
            details,
            button(text("Open on YouTube").size(13))
                .on_press(Message::OpenLink(card.watch_url.clone()))
                .padding([6, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::ToolLinkButton))),
        ]
        .spacing(10),
    ]
    .spacing(15)
    .into()
}
