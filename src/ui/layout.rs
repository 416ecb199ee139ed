// SPDX-License-Identifier: MPL-2.0
//! Page chrome: header bar, navigation sidebar and its backdrop.

use crate::app::route::Route;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, Glyph};
use crate::ui::sidebar::{self, SidebarItem};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    font::Weight,
    widget::{button, mouse_area, tooltip, Column, Container, Row, Stack, Text},
    Element, Font, Length,
};

/// Layout state.
#[derive(Debug, Clone)]
pub struct State {
    sidebar: sidebar::State,
}

impl State {
    pub fn new(i18n: &I18n, sidebar_open: bool) -> Self {
        Self {
            sidebar: sidebar::State::new(navigation(i18n), sidebar_open),
        }
    }

    #[must_use]
    pub fn sidebar(&self) -> &sidebar::State {
        &self.sidebar
    }
}

/// Navigation tree shown in the sidebar.
pub fn navigation(i18n: &I18n) -> Vec<SidebarItem> {
    vec![
        SidebarItem::link(
            i18n.tr("sidebar-dashboard"),
            Route::Dashboard.href(),
            Some(Glyph::Home),
        ),
        SidebarItem::group(
            i18n.tr("sidebar-settings"),
            Some(Glyph::Settings),
            vec![SidebarItem::link(
                i18n.tr("sidebar-profile"),
                Route::Profile.href(),
                Some(Glyph::User),
            )],
        ),
    ]
}

/// Contextual data needed to render the layout.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub route: &'a Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleSidebar,
    Sidebar(sidebar::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
}

/// Process a layout message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleSidebar => {
            let open = !state.sidebar.is_open();
            state.sidebar.set_open(open);
            Event::None
        }
        Message::Sidebar(message) => match sidebar::update(&mut state.sidebar, message) {
            sidebar::Event::Navigate(href) => Event::Navigate(Route::from_href(&href)),
            sidebar::Event::Closed | sidebar::Event::None => Event::None,
        },
    }
}

/// Wraps `page` in the header and, when open, the sidebar overlay.
pub fn view<'a, M: 'a>(
    ctx: ViewContext<'a>,
    page: Element<'a, M>,
    on_layout: fn(Message) -> M,
) -> Element<'a, M> {
    let header: Element<'a, Message> = build_header(&ctx);

    let base = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header.map(on_layout))
        .push(page);

    if !ctx.state.sidebar.is_open() {
        return base.into();
    }

    let panel = sidebar::view(sidebar::ViewContext {
        i18n: ctx.i18n,
        state: &ctx.state.sidebar,
        active_href: ctx.route.href(),
    })
    .map(Message::Sidebar);

    let backdrop = mouse_area(
        Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::Sidebar(sidebar::Message::Close));

    let overlay: Element<'a, Message> = Row::new()
        .height(Length::Fill)
        .push(panel)
        .push(backdrop)
        .into();

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(overlay.map(on_layout))
        .into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toggle = button(icons::themed(icons::sized(icons::menu(), sizing::ICON_LG)))
        .on_press(Message::ToggleSidebar)
        .padding(spacing::XS)
        .style(styles::button::ghost);

    let title = Text::new(ctx.i18n.tr(ctx.route.title_key()))
        .size(typography::TITLE_MD)
        .font(Font {
            weight: Weight::Semibold,
            ..Font::default()
        });

    let bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(tooltip(
            toggle,
            Text::new(ctx.i18n.tr("layout-toggle-menu")).size(typography::CAPTION),
            tooltip::Position::Bottom,
        ))
        .push(title);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(styles::container::header_bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::sidebar::ItemPath;

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &crate::config::Config::default())
    }

    #[test]
    fn navigation_has_dashboard_and_settings_group() {
        let items = navigation(&i18n());
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].text(), "Dashboard");
        assert!(items[1].is_group());
        assert_eq!(items[1].children()[0].text(), "Profile");
    }

    #[test]
    fn toggle_flips_the_sidebar() {
        let mut state = State::new(&i18n(), true);
        assert_eq!(update(&mut state, Message::ToggleSidebar), Event::None);
        assert!(!state.sidebar().is_open());
        update(&mut state, Message::ToggleSidebar);
        assert!(state.sidebar().is_open());
    }

    #[test]
    fn sidebar_link_becomes_a_route() {
        let mut state = State::new(&i18n(), true);
        update(
            &mut state,
            Message::Sidebar(sidebar::Message::Toggle(ItemPath::root(1))),
        );
        let event = update(
            &mut state,
            Message::Sidebar(sidebar::Message::Navigate("/profile".into())),
        );
        assert_eq!(event, Event::Navigate(Route::Profile));
        assert!(!state.sidebar().is_open());
    }

    #[test]
    fn layout_view_renders_with_open_sidebar() {
        let i18n = i18n();
        let state = State::new(&i18n, true);
        let page: Element<'_, Message> = Text::new("page").into();
        let _element = view(
            ViewContext {
                i18n: &i18n,
                state: &state,
                route: &Route::Dashboard,
            },
            page,
            |message| message,
        );
    }
}
