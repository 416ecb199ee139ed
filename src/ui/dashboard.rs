// SPDX-License-Identifier: MPL-2.0
//! Profile settings page.
//!
//! The page hosts the toast queue: it owns the [`Manager`], renders the toast
//! stack above its content and exposes one trigger per severity, each marked
//! with its icon. Dropping the page drops the queue, which cancels every
//! pending timer.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::input::{self, Input, Kind};
use crate::ui::notifications::{
    toast, Manager, NotificationMessage, RuntimeScheduler, Scheduler, Severity, ToastId,
};
use crate::ui::styles;
use crate::ui::icons;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, scrollable, svg::Svg, text, Column, Container, Row, Stack, Text},
    Color, Element, Font, Length, Task, Theme,
};
use std::time::Duration;

/// Form fields on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Username, Field::Email, Field::Password];
}

/// Preset message raised by each trigger.
#[must_use]
pub fn preset_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "notification-profile-saved",
        Severity::Error => "notification-connection-failed",
        Severity::Warning => "notification-session-expiring",
        Severity::Info => "notification-new-features",
    }
}

/// Page state. The scheduler decides how toast timers run.
#[derive(Debug)]
pub struct State<S: Scheduler = RuntimeScheduler> {
    username: input::State,
    email: input::State,
    password: input::State,
    notifications: Manager<S>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Input(Field, input::Message),
    Save,
    Trigger(Severity),
    Notification(NotificationMessage),
}

impl<S: Scheduler> State<S> {
    /// Creates the page with the sample profile and an empty toast queue.
    pub fn new(scheduler: S, toast_duration: Duration) -> Self {
        Self {
            username: input::State::new("john_doe"),
            email: input::State::new("john@example.com"),
            password: input::State::default(),
            notifications: Manager::new(scheduler).with_default_duration(toast_duration),
        }
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &input::State {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut input::State {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager<S> {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut Manager<S> {
        &mut self.notifications
    }

    /// Shows a toast with the configured duration.
    pub fn notify(&mut self, severity: Severity, message: impl Into<String>) -> ToastId {
        self.notifications.enqueue(severity, message, None)
    }

    /// Process a page message.
    pub fn update(&mut self, message: Message, i18n: &I18n) {
        match message {
            Message::Input(field, message) => {
                if input::update(self.field_mut(field), message) == input::Event::Submitted {
                    self.save(i18n);
                }
            }
            Message::Save => self.save(i18n),
            Message::Trigger(severity) => {
                self.notify(severity, i18n.tr(preset_key(severity)));
            }
            Message::Notification(message) => self.notifications.handle_message(message),
        }
    }

    fn save(&mut self, i18n: &I18n) {
        tracing::info!(username = %self.username.value, "profile saved");
        self.notify(Severity::Success, i18n.tr(preset_key(Severity::Success)));
    }
}

impl State<RuntimeScheduler> {
    /// Timers armed since the last call, ready to return from `update`.
    pub fn take_tasks(&mut self) -> Task<Message> {
        self.notifications.take_tasks().map(Message::Notification)
    }
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a, S: Scheduler> {
    pub i18n: &'a I18n,
    pub state: &'a State<S>,
}

/// Render the page with the toast stack on top.
pub fn view<'a, S: Scheduler>(ctx: ViewContext<'a, S>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let heading = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("dashboard-title")).size(typography::TITLE_LG).font(bold()))
        .push(
            Text::new(i18n.tr("dashboard-subtitle"))
                .size(typography::BODY_LG)
                .style(muted),
        );

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(heading)
        .push(account_card(&ctx))
        .push(notifications_card(i18n));

    let page = Container::new(scrollable(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG)
            .align_x(Horizontal::Center),
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    let overlay = toast::view_overlay(&ctx.state.notifications, i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(overlay)
        .into()
}

fn account_card<'a, S: Scheduler>(ctx: &ViewContext<'a, S>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let username = Input::new()
        .label(i18n.tr("dashboard-username-label"))
        .placeholder(i18n.tr("dashboard-username-placeholder"))
        .clearable(true)
        .view(&state.username, i18n)
        .map(|message| Message::Input(Field::Username, message));

    let email = Input::new()
        .label(i18n.tr("dashboard-email-label"))
        .placeholder(i18n.tr("dashboard-email-placeholder"))
        .kind(Kind::Email)
        .clearable(true)
        .view(&state.email, i18n)
        .map(|message| Message::Input(Field::Email, message));

    let password = Input::new()
        .label(i18n.tr("dashboard-password-label"))
        .placeholder(i18n.tr("dashboard-password-placeholder"))
        .kind(Kind::Password)
        .clearable(true)
        .view(&state.password, i18n)
        .map(|message| Message::Input(Field::Password, message));

    let save = button(Text::new(i18n.tr("dashboard-save-button")).size(typography::BODY))
        .on_press(Message::Save)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    card(
        i18n.tr("dashboard-account-heading"),
        None,
        Column::new()
            .spacing(spacing::MD)
            .push(username)
            .push(email)
            .push(password)
            .push(save)
            .into(),
    )
}

/// Label key, icon and colors of the trigger raising `severity`.
fn trigger_appearance<'a>(severity: Severity) -> (&'static str, Svg<'a>, Color, Color) {
    match severity {
        Severity::Success => (
            "dashboard-trigger-success",
            icons::check_circle(),
            palette::SUCCESS_500,
            palette::SUCCESS_600,
        ),
        Severity::Error => (
            "dashboard-trigger-error",
            icons::circle_alert(),
            palette::ERROR_500,
            palette::ERROR_600,
        ),
        Severity::Warning => (
            "dashboard-trigger-warning",
            icons::circle_alert(),
            palette::WARNING_500,
            palette::WARNING_600,
        ),
        Severity::Info => (
            "dashboard-trigger-info",
            icons::info(),
            palette::PRIMARY_500,
            palette::PRIMARY_600,
        ),
    }
}

fn notifications_card<'a>(i18n: &I18n) -> Element<'a, Message> {
    let trigger = |severity: Severity| {
        let (key, icon, base, hover) = trigger_appearance(severity);
        let label = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::tinted(icons::sized(icon, sizing::ICON_SM), palette::WHITE))
            .push(Text::new(i18n.tr(key)).size(typography::BODY));

        button(label)
            .on_press(Message::Trigger(severity))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::filled(base, hover))
    };

    let buttons = Severity::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::SM), |row, severity| {
            row.push(trigger(severity))
        })
        .wrap();

    card(
        i18n.tr("dashboard-notifications-heading"),
        Some(i18n.tr("dashboard-notifications-description")),
        buttons.into(),
    )
}

fn card<'a>(
    title: String,
    description: Option<String>,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(title).size(typography::TITLE_SM).font(bold()));
    if let Some(description) = description {
        column = column.push(Text::new(description).size(typography::BODY).style(muted));
    }

    Container::new(column.push(body))
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn bold() -> Font {
    Font {
        weight: Weight::Semibold,
        ..Font::default()
    }
}

fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::ui::notifications::ManualScheduler;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn page() -> State<ManualScheduler> {
        State::new(ManualScheduler::new(), Duration::from_millis(3000))
    }

    fn messages(state: &State<ManualScheduler>) -> Vec<String> {
        state
            .notifications()
            .iter()
            .map(|t| t.notification().message().to_string())
            .collect()
    }

    #[test]
    fn page_starts_with_sample_profile() {
        let state = page();
        assert_eq!(state.field(Field::Username).value, "john_doe");
        assert_eq!(state.field(Field::Email).value, "john@example.com");
        assert!(state.field(Field::Password).value.is_empty());
        assert!(state.notifications().is_empty());
    }

    #[test]
    fn each_trigger_enqueues_its_preset() {
        let i18n = i18n();
        let mut state = page();
        for severity in Severity::ALL {
            state.update(Message::Trigger(severity), &i18n);
        }

        let severities: Vec<Severity> = state
            .notifications()
            .iter()
            .map(|t| t.notification().severity())
            .collect();
        assert_eq!(severities, Severity::ALL.to_vec());
        assert_eq!(messages(&state)[0], "Profile updated successfully!");
        assert_eq!(
            messages(&state)[1],
            "Failed to connect to the server. Please try again."
        );
    }

    #[test]
    fn every_trigger_has_a_translated_label() {
        let i18n = i18n();
        let labels: Vec<String> = Severity::ALL
            .into_iter()
            .map(|severity| i18n.tr(trigger_appearance(severity).0))
            .collect();

        assert_eq!(
            labels,
            vec!["Trigger Success", "Trigger Error", "Trigger Warning", "Trigger Info"]
        );
    }

    #[test]
    fn trigger_colors_follow_the_severity() {
        let (_, _, base, hover) = trigger_appearance(Severity::Success);
        assert_eq!(base, palette::SUCCESS_500);
        assert_eq!(hover, palette::SUCCESS_600);
        let (_, _, base, _) = trigger_appearance(Severity::Error);
        assert_eq!(base, palette::ERROR_500);
    }

    #[test]
    fn save_and_enter_raise_success_toast() {
        let i18n = i18n();
        let mut state = page();
        state.update(Message::Save, &i18n);
        state.update(Message::Input(Field::Email, input::Message::Submit), &i18n);

        assert_eq!(
            messages(&state),
            vec!["Profile updated successfully!", "Profile updated successfully!"]
        );
    }

    #[test]
    fn input_messages_reach_their_field() {
        let i18n = i18n();
        let mut state = page();
        state.update(Message::Input(Field::Username, input::Message::Clear), &i18n);
        state.update(
            Message::Input(Field::Password, input::Message::Changed("hunter2".into())),
            &i18n,
        );

        assert!(state.field(Field::Username).value.is_empty());
        assert_eq!(state.field(Field::Password).value, "hunter2");
        assert_eq!(state.field(Field::Email).value, "john@example.com");
    }

    #[test]
    fn toasts_use_the_configured_duration() {
        let i18n = i18n();
        let mut state = State::new(ManualScheduler::new(), Duration::from_millis(1500));
        state.update(Message::Trigger(Severity::Info), &i18n);

        state.notifications_mut().advance(Duration::from_millis(1499));
        assert_eq!(state.notifications().len(), 1);
        state.notifications_mut().advance(Duration::from_millis(1));
        assert!(state.notifications().is_empty());
    }

    #[test]
    fn close_message_removes_the_toast() {
        let i18n = i18n();
        let mut state = page();
        state.update(Message::Trigger(Severity::Error), &i18n);
        let id = state.notifications().iter().next().map(|t| t.id().clone());
        let id = id.expect("toast queued");

        state.update(
            Message::Notification(NotificationMessage::Close(id)),
            &i18n,
        );
        assert!(state.notifications().is_empty());
        assert_eq!(state.notifications().scheduler().pending_count(), 0);
    }

    #[test]
    fn dashboard_view_renders() {
        let i18n = i18n();
        let mut state = page();
        state.update(Message::Trigger(Severity::Warning), &i18n);
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
