// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// White card holding a form or a group of controls.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            radius: radius::MD.into(),
            width: border::WIDTH_SM,
            color: palette.background.weak.color,
        },
        shadow: shadow::SM,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Page background behind cards.
pub fn page(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Sticky header bar with a bottom separator.
pub fn header_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            width: border::WIDTH_SM,
            color: palette.background.weak.color,
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Slide-in side panel.
pub fn side_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        shadow: shadow::XL,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Dimmed layer behind a modal panel.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Horizontal separator line.
pub fn separator(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        ..Default::default()
    }
}

/// Frame around a text field; the border turns red when `invalid`.
pub fn field(invalid: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let border_color = if invalid {
            palette::ERROR_500
        } else {
            palette.background.strong.color
        };

        container::Style {
            background: Some(Background::Color(palette.background.base.color)),
            border: Border {
                radius: radius::SM.into(),
                width: border::WIDTH_SM,
                color: border_color,
            },
            shadow: shadow::SM,
            ..Default::default()
        }
    }
}
