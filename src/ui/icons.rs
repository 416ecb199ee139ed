// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small stroke SVGs embedded in the binary. Handles are created on
//! first use and cached with `OnceLock`. Every icon is drawn with
//! `currentColor`, so the widget style decides the final tint.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_toast`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning an `Svg` backed by a cached handle.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                        $body,
                        "</svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone())
        }
    };
}

define_icon!(menu, r#"<path d="M4 6h16M4 12h16M4 18h16"/>"#, "Three horizontal bars.");
define_icon!(cross, r#"<path d="M18 6 6 18M6 6l12 12"/>"#, "Diagonal cross.");
define_icon!(chevron_down, r#"<path d="m6 9 6 6 6-6"/>"#, "Chevron pointing down.");
define_icon!(chevron_right, r#"<path d="m9 18 6-6-6-6"/>"#, "Chevron pointing right.");
define_icon!(
    eye,
    r#"<path d="M2 12s3.5-7 10-7 10 7 10 7-3.5 7-10 7S2 12 2 12z"/><circle cx="12" cy="12" r="3"/>"#,
    "Open eye."
);
define_icon!(
    eye_off,
    r#"<path d="M9.9 4.2A9.6 9.6 0 0 1 12 4c6.5 0 10 8 10 8a17 17 0 0 1-2.2 3.2M6.6 6.6A17 17 0 0 0 2 12s3.5 8 10 8a9.7 9.7 0 0 0 5.4-1.6"/><path d="M2 2l20 20"/>"#,
    "Crossed-out eye."
);
define_icon!(
    check_circle,
    r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
    "Check mark in a circle."
);
define_icon!(
    cross_circle,
    r#"<circle cx="12" cy="12" r="10"/><path d="m15 9-6 6M9 9l6 6"/>"#,
    "Cross in a circle."
);
define_icon!(
    triangle_alert,
    r#"<path d="M10.3 3.9 1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z"/><path d="M12 9v4M12 17h.01"/>"#,
    "Exclamation mark in a triangle."
);
define_icon!(
    circle_alert,
    r#"<circle cx="12" cy="12" r="10"/><path d="M12 8v4M12 16h.01"/>"#,
    "Exclamation mark in a circle."
);
define_icon!(
    info,
    r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4M12 8h.01"/>"#,
    "Letter i in a circle."
);
define_icon!(
    home,
    r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><path d="M9 22V12h6v10"/>"#,
    "House outline."
);
define_icon!(
    cog,
    r#"<circle cx="12" cy="12" r="3"/><path d="M19.4 15a1.7 1.7 0 0 0 .3 1.8l.1.1a2 2 0 1 1-2.8 2.8l-.1-.1a1.7 1.7 0 0 0-1.8-.3 1.7 1.7 0 0 0-1 1.5V21a2 2 0 1 1-4 0v-.1a1.7 1.7 0 0 0-1.1-1.5 1.7 1.7 0 0 0-1.8.3l-.1.1a2 2 0 1 1-2.8-2.8l.1-.1a1.7 1.7 0 0 0 .3-1.8 1.7 1.7 0 0 0-1.5-1H3a2 2 0 1 1 0-4h.1a1.7 1.7 0 0 0 1.5-1.1 1.7 1.7 0 0 0-.3-1.8l-.1-.1a2 2 0 1 1 2.8-2.8l.1.1a1.7 1.7 0 0 0 1.8.3H9a1.7 1.7 0 0 0 1-1.5V3a2 2 0 1 1 4 0v.1a1.7 1.7 0 0 0 1 1.5 1.7 1.7 0 0 0 1.8-.3l.1-.1a2 2 0 1 1 2.8 2.8l-.1.1a1.7 1.7 0 0 0-.3 1.8V9a1.7 1.7 0 0 0 1.5 1H21a2 2 0 1 1 0 4h-.1a1.7 1.7 0 0 0-1.5 1z"/>"#,
    "Gear wheel."
);
define_icon!(
    user,
    r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#,
    "Person bust."
);

/// Sets the icon to a fixed square size.
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Tints an icon with the theme's text color.
pub fn themed<'a>(icon: Svg<'a>) -> Svg<'a> {
    icon.style(|theme: &Theme, _status| svg::Style {
        color: Some(theme.palette().text),
    })
}

/// Tints an icon with a fixed color.
pub fn tinted<'a>(icon: Svg<'a>, color: Color) -> Svg<'a> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

/// Icons that can be attached to data (sidebar items) without holding a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Home,
    Settings,
    User,
    Info,
}

impl Glyph {
    /// Builds the widget for this glyph.
    #[must_use]
    pub fn svg<'a>(self) -> Svg<'a> {
        match self {
            Glyph::Home => home(),
            Glyph::Settings => cog(),
            Glyph::User => user(),
            Glyph::Info => info(),
        }
    }
}
