// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current page and wraps it in the layout chrome.

use super::route::Route;
use super::{Message, Page};
use crate::i18n::fluent::I18n;
use crate::ui::dashboard;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::layout;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub route: &'a Route,
    pub layout: &'a layout::State,
    pub page: &'a Page,
}

/// Renders the current page inside the layout.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page: Element<'_, Message> = match ctx.page {
        Page::Dashboard(state) => dashboard::view(dashboard::ViewContext {
            i18n: ctx.i18n,
            state,
        })
        .map(Message::Dashboard),
        Page::NotFound => view_not_found(ctx.i18n, ctx.route),
    };

    layout::view(
        layout::ViewContext {
            i18n: ctx.i18n,
            state: ctx.layout,
            route: ctx.route,
        },
        page,
        Message::Layout,
    )
}

fn view_not_found<'a>(i18n: &I18n, route: &Route) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("page-not-found")).size(typography::TITLE_LG))
        .push(
            Text::new(i18n.tr_with_args("not-found-description", &[("path", route.href())]))
                .size(typography::BODY_LG),
        )
        .push(
            button(Text::new(i18n.tr("not-found-back-button")).size(typography::BODY))
                .on_press(Message::Navigate(Route::Dashboard))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::page)
        .into()
}
