// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call-to-action (form submit).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::PRIMARY_600, palette::PRIMARY_700)(theme, status)
}

/// Solid button in an arbitrary color, darkening on hover.
pub fn filled(
    base: Color,
    hover: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            button::Status::Active => base,
            button::Status::Disabled => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base
            },
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::SM,
            ..Default::default()
        }
    }
}

/// Borderless icon button (menu toggle, close controls).
///
/// Shows a subtle gray background on hover.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        ..Default::default()
    }
}

/// Row in a navigation list.
pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(palette.background.weak.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: palette.background.weak.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

/// Navigation row for the current page.
pub fn menu_item_active(theme: &Theme, status: button::Status) -> button::Style {
    let base = menu_item(theme, status);

    button::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..palette::PRIMARY_500
        })),
        text_color: palette::PRIMARY_600,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..base
    }
}
