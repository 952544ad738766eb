//! URL input component

use crate::gui::app::Message;
use iced::widget::{button, row, text, text_input, tooltip};
use iced::{Alignment, Element, Length};

/// URL field with paste and clear buttons. Enter submits unless `busy`.
pub fn url_input(value: &str, busy: bool) -> Element<'static, Message> {
    use crate::gui::theme;

    let mut input = text_input("Paste YouTube video URL here...", value)
        .padding(15)
        .width(Length::Fill)
        .style(iced::theme::TextInput::Custom(Box::new(theme::InputStyle)));

    // A disabled field has no on_input handler
    if !busy {
        input = input
            .on_input(Message::UrlInputChanged)
            .on_submit(Message::SubmitPressed);
    }

    row![
        input,
        tooltip(
            button(text("Paste").size(14))
                .on_press_maybe((!busy).then_some(Message::PasteFromClipboard))
                .padding([8, 12])
                .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
            "Paste from clipboard",
            tooltip::Position::Bottom,
        ),
        button(text("Clear").size(14))
            .on_press_maybe((!busy).then_some(Message::ClearUrlInput))
            .padding([8, 12])
            .style(iced::theme::Button::Custom(Box::new(theme::IconButton))),
    ]
    .spacing(12)
    .align_items(Alignment::Center)
    .into()
}
