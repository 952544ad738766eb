//! Custom theme definitions for the application - Dark Theme

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// --- Dark Color Palette ---

pub const PRIMARY_BLACK: Color = Color::from_rgb(0.039, 0.039, 0.039);
pub const SECONDARY_BLACK: Color = Color::from_rgb(0.090, 0.090, 0.090);
pub const ACCENT_BLACK: Color = Color::from_rgb(0.133, 0.133, 0.133);
pub const DARK_GRAY: Color = Color::from_rgb(0.200, 0.200, 0.200);
pub const GRAY: Color = Color::from_rgb(0.600, 0.600, 0.600);
pub const LIGHT_GRAY: Color = Color::from_rgb(0.800, 0.800, 0.800);
pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);

// Error notice
pub const DANGER: Color = Color::from_rgb(0.957, 0.263, 0.212); // #f44336

// --- Container Styles ---

pub struct PageContainer;

impl container::StyleSheet for PageContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(LIGHT_GRAY),
            background: Some(Background::Color(PRIMARY_BLACK)),
            ..Default::default()
        }
    }
}

/// Info container holding the video card and the actions region
pub struct CardContainer;

impl container::StyleSheet for CardContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(LIGHT_GRAY),
            background: Some(Background::Color(SECONDARY_BLACK)),
            border: Border {
                color: DARK_GRAY,
                width: 1.0,
                radius: 8.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

/// One solution group in the fallback panel, and the download note
pub struct SolutionCard;

impl container::StyleSheet for SolutionCard {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(LIGHT_GRAY),
            background: Some(Background::Color(ACCENT_BLACK)),
            border: Border {
                color: WHITE,
                width: 0.0,
                radius: 8.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

pub struct NoticeContainer;

impl container::StyleSheet for NoticeContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(WHITE),
            background: Some(Background::Color(DANGER)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
        }
    }
}

// --- Button Styles ---

pub struct PrimaryButton;

impl button::StyleSheet for PrimaryButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(WHITE)),
            text_color: PRIMARY_BLACK,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            shadow: Shadow {
                color: Color::from_rgba(1.0, 1.0, 1.0, 0.1),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 8.0,
            },
            shadow_offset: Vector::new(0.0, 0.0),
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(LIGHT_GRAY)),
            ..active
        }
    }

    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            background: Some(Background::Color(GRAY)),
            text_color: ACCENT_BLACK,
            shadow: Shadow::default(),
            ..active
        }
    }
}

/// External tool link
pub struct ToolLinkButton;

impl button::StyleSheet for ToolLinkButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SECONDARY_BLACK)),
            text_color: LIGHT_GRAY,
            border: Border {
                radius: 4.0.into(),
                color: DARK_GRAY,
                width: 1.0,
            },
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        let active = self.active(style);
        button::Appearance {
            text_color: WHITE,
            border: Border {
                color: WHITE,
                ..active.border
            },
            ..active
        }
    }
}

pub struct IconButton;

impl button::StyleSheet for IconButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: GRAY,
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            text_color: WHITE,
            background: Some(Background::Color(ACCENT_BLACK)),
            border: Border {
                radius: 8.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

// --- Input Styles ---

pub struct InputStyle;

impl text_input::StyleSheet for InputStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(ACCENT_BLACK),
            border: Border {
                radius: 8.0.into(),
                width: 2.0,
                color: DARK_GRAY,
            },
            icon_color: GRAY,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            border: Border {
                color: WHITE,
                ..active.border
            },
            ..active
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        GRAY
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        WHITE
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color::from_rgba(1.0, 1.0, 1.0, 0.3)
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        let active = self.active(style);
        text_input::Appearance {
            background: Background::Color(SECONDARY_BLACK),
            ..active
        }
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        GRAY
    }
}
