// SPDX-License-Identifier: MPL-2.0
//! Navigation targets.

use std::fmt;

/// A page the application can show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    /// Profile settings, rendered by the dashboard page.
    Profile,
    NotFound(String),
}

impl Route {
    /// Parses a navigation target. Unknown paths map to `NotFound`.
    ///
    /// A trailing slash is ignored and an empty target means the root.
    #[must_use]
    pub fn from_href(href: &str) -> Self {
        let trimmed = href.trim();
        let path = trimmed.trim_end_matches('/');
        match path {
            "" => Route::Dashboard,
            "/profile" => Route::Profile,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    #[must_use]
    pub fn href(&self) -> &str {
        match self {
            Route::Dashboard => "/",
            Route::Profile => "/profile",
            Route::NotFound(path) => path,
        }
    }

    /// Translation key of the page title.
    #[must_use]
    pub fn title_key(&self) -> &'static str {
        match self {
            Route::Dashboard => "page-dashboard",
            Route::Profile => "page-profile",
            Route::NotFound(_) => "page-not-found",
        }
    }

    /// Whether this route is served by the dashboard page.
    #[must_use]
    pub fn shows_dashboard(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Profile)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}
