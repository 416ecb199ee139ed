// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! A [`Toast`] is one queued notification plus the timers it owns. Toasts
//! appear as small cards with a severity-colored accent, an icon, the
//! message and a close button.

use super::manager::{Manager, Message};
use super::notification::{Notification, Severity, ToastId};
use super::timer::Scheduler;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::svg::Svg;
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};
use std::fmt;

/// Lifecycle of a displayed toast.
///
/// A toast leaves the queue in `Dismissing` and is dropped right after,
/// which is its unmount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Just inserted, entrance transition running.
    Mounted,
    /// Fully shown.
    Visible,
    /// Removal requested.
    Dismissing,
}

/// One queued notification and the timer guards it owns.
pub struct Toast<T> {
    notification: Notification,
    phase: Phase,
    entrance: Option<T>,
    expiry: Option<T>,
}

impl<T> Toast<T> {
    pub(super) fn new(notification: Notification, entrance: T, expiry: T) -> Self {
        Self {
            notification,
            phase: Phase::Mounted,
            entrance: Some(entrance),
            expiry: Some(expiry),
        }
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        self.notification.id()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of timers this toast still holds.
    #[must_use]
    pub fn armed_timers(&self) -> usize {
        usize::from(self.entrance.is_some()) + usize::from(self.expiry.is_some())
    }

    /// Guards of the timers still armed, entrance first.
    pub fn timers(&self) -> impl Iterator<Item = &T> {
        self.entrance.iter().chain(self.expiry.iter())
    }

    /// Completes the entrance transition. Returns `false` if the toast was
    /// not in `Mounted`.
    pub(super) fn enter(&mut self) -> bool {
        if self.phase != Phase::Mounted {
            return false;
        }
        self.phase = Phase::Visible;
        self.entrance = None;
        true
    }

    /// Marks the toast for removal and releases its timers.
    pub(super) fn begin_dismiss(&mut self) {
        self.phase = Phase::Dismissing;
        self.entrance = None;
        self.expiry = None;
    }
}

impl<T> fmt::Debug for Toast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toast")
            .field("notification", &self.notification)
            .field("phase", &self.phase)
            .field("armed_timers", &self.armed_timers())
            .finish()
    }
}

/// Renders a single toast.
pub fn view<'a, T>(toast: &'a Toast<T>, i18n: &I18n) -> Element<'a, Message> {
    let severity = toast.notification.severity();
    let accent = severity.color();
    let alpha = if toast.phase == Phase::Mounted {
        opacity::OVERLAY_STRONG
    } else {
        opacity::OPAQUE
    };

    let icon = icons::tinted(icons::sized(severity_icon(severity), sizing::ICON_MD), accent);

    let message = Text::new(toast.notification.message())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let close_label = i18n.tr("toast-close");
    let close_button = button(icons::themed(icons::sized(icons::cross(), sizing::ICON_SM)))
        .on_press(Message::Close(toast.id().clone()))
        .padding(spacing::XXS)
        .style(styles::button::ghost);
    let close = tooltip(
        close_button,
        Text::new(close_label).size(typography::CAPTION),
        tooltip::Position::Left,
    );

    // [stripe] [icon] [message] [close]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(icon).padding(spacing::XXS))
        .push(
            Container::new(message)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(close);

    let stripe = Container::new(Column::new())
        .width(Length::Fixed(border::WIDTH_ACCENT))
        .height(Length::Fill)
        .style(move |_theme: &Theme| stripe_style(accent, alpha));

    let body = Row::new()
        .push(stripe)
        .push(Container::new(content).width(Length::Fill).padding(spacing::SM))
        .height(Length::Shrink);

    Container::new(body)
        .width(Length::Fixed(sizing::TOAST_MIN_WIDTH))
        .max_width(sizing::TOAST_MAX_WIDTH)
        .clip(true)
        .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
        .into()
}

/// Renders every queued toast, stacked in the bottom-right corner.
///
/// Insertion order is kept: the oldest toast is at the top, the newest at
/// the bottom.
pub fn view_overlay<'a, S: Scheduler>(manager: &'a Manager<S>, i18n: &I18n) -> Element<'a, Message> {
    if manager.is_empty() {
        return Container::new(Column::new())
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let stack = Column::with_children(manager.iter().map(|toast| view(toast, i18n)))
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn severity_icon<'a>(severity: Severity) -> Svg<'a> {
    match severity {
        Severity::Success => icons::check_circle(),
        Severity::Error => icons::cross_circle(),
        Severity::Warning => icons::triangle_alert(),
        Severity::Info => icons::info(),
    }
}

/// Blends `accent` over `base` by `amount`.
fn tint(base: Color, accent: Color, amount: f32) -> Color {
    Color {
        r: base.r + (accent.r - base.r) * amount,
        g: base.g + (accent.g - base.g) * amount,
        b: base.b + (accent.b - base.b) * amount,
        a: base.a,
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let background = tint(
        theme.extended_palette().background.base.color,
        accent,
        opacity::TINT,
    );

    container::Style {
        background: Some(Background::Color(with_alpha(background, alpha))),
        border: Border {
            color: with_alpha(accent, alpha),
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn stripe_style(accent: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(accent, alpha))),
        ..Default::default()
    }
}
