//! Actions region: download note with tool links, or the fallback solutions

use crate::gui::app::Message;
use crate::gui::theme;
use crate::presenter::content::{
    ALTERNATIVE_OPTIONS, DOWNLOAD_NOTE, DOWNLOAD_NOTE_HEADING, FALLBACK_HEADING,
};
use crate::presenter::{ActionsRegion, ExternalTool, SolutionGroup};
use iced::widget::{button, container, text, Column, Row};
use iced::Element;

pub fn actions_panel(actions: &ActionsRegion) -> Option<Element<'static, Message>> {
    match actions {
        ActionsRegion::Empty => None,
        ActionsRegion::DownloadNote(tools) => Some(download_note(tools)),
        ActionsRegion::Fallback(groups) => Some(fallback(groups)),
    }
}

fn download_note(tools: &[ExternalTool]) -> Element<'static, Message> {
    let mut options = Column::new().spacing(4).push(text("Alternative Options:").size(14));
    for option in ALTERNATIVE_OPTIONS {
        options = options.push(text(format!("• {}", option)).size(13));
    }

    let links = tools.iter().fold(Row::new().spacing(10), |row, tool| {
        row.push(
            button(text(tool.name).size(13))
                .on_press(Message::OpenLink(tool.url.to_string()))
                .padding([8, 16])
                .style(iced::theme::Button::Custom(Box::new(theme::ToolLinkButton))),
        )
    });

    container(
        Column::new()
            .spacing(12)
            .push(
                text(DOWNLOAD_NOTE_HEADING)
                    .size(15)
                    .style(iced::theme::Text::Color(theme::WHITE)),
            )
            .push(text(DOWNLOAD_NOTE).size(13))
            .push(options)
            .push(links),
    )
    .padding(20)
    .style(iced::theme::Container::Custom(Box::new(theme::SolutionCard)))
    .into()
}

fn fallback(groups: &[SolutionGroup]) -> Element<'static, Message> {
    let heading = text(FALLBACK_HEADING)
        .size(16)
        .style(iced::theme::Text::Color(theme::WHITE));

    groups
        .iter()
        .fold(Column::new().spacing(15).push(heading), |column, group| {
            column.push(solution_card(group))
        })
        .into()
}

fn solution_card(group: &SolutionGroup) -> Element<'static, Message> {
    let mut body = Column::new()
        .spacing(6)
        .push(
            text(group.title)
                .size(14)
                .style(iced::theme::Text::Color(theme::WHITE)),
        )
        .push(
            text(group.summary)
                .size(13)
                .style(iced::theme::Text::Color(theme::GRAY)),
        );

    for item in group.items {
        let line = match item.detail {
            Some(detail) => format!("• {}: {}", item.label, detail),
            None => format!("• {}", item.label),
        };
        body = body.push(text(line).size(13));
    }

    container(body)
        .padding(15)
        .style(iced::theme::Container::Custom(Box::new(theme::SolutionCard)))
        .into()
}
