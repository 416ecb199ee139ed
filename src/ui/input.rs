// SPDX-License-Identifier: MPL-2.0
//! Labeled text field with clear and reveal affordances.
//!
//! The field keeps its own value and password visibility in [`State`]. The
//! rendering props live on the [`Input`] builder:
//!
//! - a clear button appears when the field is `clearable` and not empty
//! - password fields are masked and get a show/hide toggle
//! - an `error` text is shown below the field and turns its border red

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, text, text_input, tooltip, Column, Container, Row, Text};
use iced::{alignment::Vertical, Background, Border, Color, Element, Length, Theme};

/// Kind of value the field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Text,
    Email,
    Password,
}

/// Local state of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub value: String,
    pub password_visible: bool,
}

impl State {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            password_visible: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Changed(String),
    Clear,
    ToggleVisibility,
    Submit,
}

/// Events propagated to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Changed(String),
    Cleared,
    Submitted,
}

/// Process a field message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Changed(value) => {
            state.value.clone_from(&value);
            Event::Changed(value)
        }
        Message::Clear => {
            if state.value.is_empty() {
                return Event::None;
            }
            state.value.clear();
            Event::Cleared
        }
        Message::ToggleVisibility => {
            state.password_visible = !state.password_visible;
            Event::None
        }
        Message::Submit => Event::Submitted,
    }
}

/// Rendering props for a field.
#[derive(Debug, Clone, Default)]
pub struct Input {
    label: Option<String>,
    placeholder: String,
    kind: Kind,
    clearable: bool,
    error: Option<String>,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    #[must_use]
    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    /// Whether the clear button is shown for `state`.
    #[must_use]
    pub fn shows_clear(&self, state: &State) -> bool {
        self.clearable && !state.value.is_empty()
    }

    /// Whether the value is masked for `state`.
    #[must_use]
    pub fn is_masked(&self, state: &State) -> bool {
        self.kind == Kind::Password && !state.password_visible
    }

    /// Render the field.
    pub fn view<'a>(&self, state: &'a State, i18n: &I18n) -> Element<'a, Message> {
        let field = text_input(&self.placeholder, &state.value)
            .on_input(Message::Changed)
            .on_submit(Message::Submit)
            .secure(self.is_masked(state))
            .size(typography::BODY)
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(bare_text_input);

        let mut row = Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(field);

        if self.shows_clear(state) {
            row = row.push(affordance(
                icons::cross(),
                Message::Clear,
                i18n.tr("input-clear"),
            ));
        }

        if self.kind == Kind::Password {
            let (icon, label) = if state.password_visible {
                (icons::eye_off(), i18n.tr("input-hide-password"))
            } else {
                (icons::eye(), i18n.tr("input-show-password"))
            };
            row = row.push(affordance(icon, Message::ToggleVisibility, label));
        }

        let frame = Container::new(row)
            .height(Length::Fixed(sizing::INPUT_HEIGHT))
            .padding([0.0, spacing::XXS])
            .align_y(Vertical::Center)
            .style(styles::container::field(self.error.is_some()));

        let mut column = Column::new().spacing(spacing::XXS).width(Length::Fill);
        if let Some(label) = &self.label {
            column = column.push(Text::new(label.clone()).size(typography::BODY));
        }
        column = column.push(frame);
        if let Some(error) = &self.error {
            column = column.push(
                Text::new(error.clone())
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::ERROR_600),
                    }),
            );
        }

        column.into()
    }
}

fn affordance<'a>(
    icon: iced::widget::Svg<'a>,
    message: Message,
    label: String,
) -> Element<'a, Message> {
    let control = button(icons::themed(icons::sized(icon, sizing::ICON_SM)))
        .on_press(message)
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    tooltip(
        control,
        container(Text::new(label).size(typography::CAPTION)).padding(spacing::XXS),
        tooltip::Position::Top,
    )
    .into()
}

/// Text input without its own frame; the surrounding container draws it.
fn bare_text_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let style = text_input::default(theme, status);
    text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            width: 0.0,
            ..style.border
        },
        ..style
    }
}
