// SPDX-License-Identifier: MPL-2.0
//! `iced_dashkit` is a small widget kit built with the Iced GUI framework.
//!
//! It provides a text input with clear/reveal controls, a collapsible
//! navigation sidebar, a toast notification queue with auto-dismiss timers,
//! and a profile dashboard page wiring them together.

#![doc(html_root_url = "https://docs.rs/iced_dashkit/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
