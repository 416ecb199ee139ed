// SPDX-License-Identifier: MPL-2.0
//! Application root state and page orchestration.
//!
//! The `App` struct wires together localization, the layout chrome and the
//! current page, and turns navigation events into page swaps. The page owns
//! its toast queue: replacing the page drops the queue together with every
//! timer it armed.

mod message;
pub mod paths;
pub mod route;
mod view;

pub use message::{Flags, Message};
pub use route::Route;

use crate::config::{
    self, Config, DEFAULT_SIDEBAR_OPEN, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::i18n::fluent::I18n;
use crate::ui::dashboard;
use crate::ui::layout;
use crate::ui::notifications::{RuntimeScheduler, Severity};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Page currently mounted below the layout.
pub enum Page {
    Dashboard(dashboard::State),
    NotFound,
}

impl Page {
    fn for_route(route: &Route, toast_duration: Duration) -> Self {
        if route.shows_dashboard() {
            Page::Dashboard(dashboard::State::new(
                RuntimeScheduler::new(),
                toast_duration,
            ))
        } else {
            Page::NotFound
        }
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Dashboard(state) => f
                .debug_struct("Dashboard")
                .field("toasts", &state.notifications().len())
                .finish(),
            Page::NotFound => f.write_str("NotFound"),
        }
    }
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    toast_duration: Duration,
    route: Route,
    layout: layout::State,
    page: Page,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("page", &self.page)
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

/// Window settings used at startup.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads the configuration and builds the initial page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    /// Builds the application from an already loaded configuration.
    ///
    /// `config_warning` is a translation key shown as a warning toast when
    /// the initial page has a toast queue.
    pub fn with_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let sidebar_open = config.layout.sidebar_open.unwrap_or(DEFAULT_SIDEBAR_OPEN);
        let toast_duration = config.notifications.duration();
        let route = flags
            .route
            .as_deref()
            .map(Route::from_href)
            .unwrap_or_default();

        let mut app = App {
            layout: layout::State::new(&i18n, sidebar_open),
            page: Page::for_route(&route, toast_duration),
            i18n,
            theme_mode: config.general.theme_mode,
            toast_duration,
            route,
        };

        if let Some(key) = config_warning {
            let text = app.i18n.tr(&key);
            if let Page::Dashboard(state) = &mut app.page {
                state.notify(Severity::Warning, text);
            }
        }

        tracing::info!(route = %app.route, locale = %app.i18n.current_locale(), "application started");
        let task = app.page_tasks();
        (app, task)
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn layout(&self) -> &layout::State {
        &self.layout
    }

    pub fn title(&self) -> String {
        let page = self.i18n.tr(self.route.title_key());
        self.i18n.tr_with_args("window-title-page", &[("page", page.as_str())])
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Layout(message) => match layout::update(&mut self.layout, message) {
                layout::Event::Navigate(route) => self.navigate(route),
                layout::Event::None => Task::none(),
            },
            Message::Dashboard(message) => {
                // Timers of a page that is gone are aborted; anything already
                // in flight is dropped here.
                if let Page::Dashboard(state) = &mut self.page {
                    state.update(message, &self.i18n);
                }
                self.page_tasks()
            }
            Message::Navigate(route) => self.navigate(route),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            route: &self.route,
            layout: &self.layout,
            page: &self.page,
        })
    }

    /// Switches to `route`, replacing the page unless it keeps the same one.
    fn navigate(&mut self, route: Route) -> Task<Message> {
        tracing::info!(from = %self.route, to = %route, "navigate");

        let keeps_page = matches!(self.page, Page::Dashboard(_)) && route.shows_dashboard();
        if !keeps_page {
            self.page = Page::for_route(&route, self.toast_duration);
        }
        self.route = route;
        self.page_tasks()
    }

    fn page_tasks(&mut self) -> Task<Message> {
        match &mut self.page {
            Page::Dashboard(state) => state.take_tasks().map(Message::Dashboard),
            Page::NotFound => Task::none(),
        }
    }
}
