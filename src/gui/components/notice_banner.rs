//! Transient error notice shown under the form

use crate::gui::app::Message;
use crate::gui::theme;
use crate::presenter::Notice;
use iced::widget::{container, text};
use iced::{Element, Length};

pub fn notice_banner(notice: &Notice) -> Element<'static, Message> {
    container(text(notice.message.clone()).size(14))
        .padding(12)
        .width(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::NoticeContainer)))
        .into()
}
