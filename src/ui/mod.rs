// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one has a `State`, a `Message`, an `update` returning an `Event` for its
//! parent, and a `view`.
//!
//! # Pages
//!
//! - [`dashboard`] - Profile settings form hosting the toast queue
//!
//! # Components
//!
//! - [`input`] - Text field with clear and password reveal controls
//! - [`sidebar`] - Navigation panel with nested collapsible groups
//! - [`layout`] - Header bar and sidebar overlay around a page
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod dashboard;
pub mod design_tokens;
pub mod icons;
pub mod input;
pub mod layout;
pub mod notifications;
pub mod sidebar;
pub mod styles;
pub mod theming;
