// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::route::Route;
use crate::ui::dashboard;
use crate::ui::layout;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Layout(layout::Message),
    Dashboard(dashboard::Message),
    /// Navigation requested from page content (not-found back button).
    Navigate(Route),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<String>,
    /// Initial route (`--route`), `/` when absent.
    pub route: Option<String>,
    /// Verbose logging (`--debug`).
    pub debug: bool,
}
