// SPDX-License-Identifier: MPL-2.0
//! Slide-in navigation sidebar with nested, collapsible menus.
//!
//! Groups expand in place when their row is pressed. Following a link or
//! closing the panel collapses every group again, so a reopened sidebar
//! always starts from the top-level list.

pub mod item;

pub use item::{indent, visible_rows, ItemPath, SidebarItem, VisibleRow};

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    font::Weight,
    widget::{button, scrollable, tooltip, Column, Container, Row, Text},
    Element, Font, Length, Padding,
};
use std::collections::HashSet;

/// Sidebar state.
#[derive(Debug, Clone, Default)]
pub struct State {
    items: Vec<SidebarItem>,
    open: bool,
    expanded: HashSet<ItemPath>,
}

impl State {
    pub fn new(items: Vec<SidebarItem>, open: bool) -> Self {
        Self {
            items,
            open,
            expanded: HashSet::new(),
        }
    }

    #[must_use]
    pub fn items(&self) -> &[SidebarItem] {
        &self.items
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens or closes the panel. Closing collapses every group.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        if !open {
            self.expanded.clear();
        }
    }

    #[must_use]
    pub fn is_expanded(&self, path: &ItemPath) -> bool {
        self.expanded.contains(path)
    }

    /// Toggles a group. Paths that do not point at a group are ignored.
    pub fn toggle(&mut self, path: ItemPath) {
        if !item::find(&self.items, &path).is_some_and(SidebarItem::is_group) {
            return;
        }
        if !self.expanded.remove(&path) {
            self.expanded.insert(path);
        }
    }

    /// Rows currently shown, in display order.
    #[must_use]
    pub fn visible_rows(&self) -> Vec<VisibleRow<'_>> {
        visible_rows(&self.items, &self.expanded)
    }
}

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Target of the current page, highlighted in the list.
    pub active_href: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Toggle(ItemPath),
    Navigate(String),
    Close,
}

/// Events propagated to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(String),
    Closed,
}

/// Process a sidebar message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Toggle(path) => {
            state.toggle(path);
            Event::None
        }
        Message::Navigate(href) => {
            state.set_open(false);
            Event::Navigate(href)
        }
        Message::Close => {
            state.set_open(false);
            Event::Closed
        }
    }
}

/// Render the sidebar panel. Returns nothing visible when closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if !ctx.state.open {
        return Column::new().into();
    }

    let close_button = button(icons::themed(icons::sized(icons::cross(), sizing::ICON_MD)))
        .on_press(Message::Close)
        .padding(spacing::XXS)
        .style(styles::button::ghost);

    let header = Row::new()
        .align_y(Vertical::Center)
        .padding(spacing::MD)
        .push(
            Text::new(ctx.i18n.tr("sidebar-title"))
                .size(typography::TITLE_SM)
                .font(Font {
                    weight: Weight::Bold,
                    ..Font::default()
                })
                .width(Length::Fill),
        )
        .push(tooltip(
            close_button,
            Text::new(ctx.i18n.tr("sidebar-close")).size(typography::CAPTION),
            tooltip::Position::Bottom,
        ));

    let rows = ctx
        .state
        .visible_rows()
        .into_iter()
        .map(|row| build_row(&ctx, row));
    let list = scrollable(
        Column::with_children(rows)
            .spacing(spacing::XXS)
            .padding(spacing::XS),
    )
    .height(Length::Fill);

    let footer = Container::new(
        Text::new(ctx.i18n.tr("sidebar-footer")).size(typography::CAPTION),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Center);

    let content = Column::new()
        .push(header)
        .push(separator())
        .push(list)
        .push(separator())
        .push(footer);

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(styles::container::side_panel)
        .into()
}

fn build_row<'a>(ctx: &ViewContext<'a>, row: VisibleRow<'a>) -> Element<'a, Message> {
    let mut content = Row::new().spacing(spacing::SM).align_y(Vertical::Center);
    if let Some(glyph) = row.item.icon() {
        content = content.push(icons::themed(icons::sized(glyph.svg(), sizing::ICON_SM)));
    }
    content = content.push(
        Text::new(row.item.text())
            .size(typography::BODY)
            .width(Length::Fill),
    );

    let padding = Padding {
        top: spacing::XS,
        right: spacing::SM,
        bottom: spacing::XS,
        left: row.indent(),
    };

    match row.item {
        SidebarItem::Link { href, .. } => {
            let style = if href == ctx.active_href {
                styles::button::menu_item_active
            } else {
                styles::button::menu_item
            };
            button(content)
                .on_press(Message::Navigate(href.clone()))
                .width(Length::Fill)
                .padding(padding)
                .style(style)
                .into()
        }
        SidebarItem::Group { .. } => {
            let chevron = if ctx.state.is_expanded(&row.path) {
                icons::chevron_down()
            } else {
                icons::chevron_right()
            };
            button(content.push(icons::themed(icons::sized(chevron, sizing::ICON_SM))))
                .on_press(Message::Toggle(row.path))
                .width(Length::Fill)
                .padding(padding)
                .style(styles::button::menu_item)
                .into()
        }
        SidebarItem::Label { .. } => Container::new(content)
            .width(Length::Fill)
            .padding(padding)
            .into(),
    }
}

fn separator<'a>() -> Element<'a, Message> {
    Container::new(Column::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(styles::container::separator)
        .into()
}
