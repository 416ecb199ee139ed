// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast display timing
//! - **Layout**: Sidebar behavior on startup
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Time a toast stays on screen before dismissing itself (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Shortest duration accepted from the config file (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 500;

/// Longest duration accepted from the config file (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Length of the toast entrance transition (in milliseconds).
pub const TOAST_ENTRANCE_MS: u64 = 300;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Whether the navigation sidebar is open when the application starts.
pub const DEFAULT_SIDEBAR_OPEN: bool = true;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width (in logical pixels).
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;

/// Initial window height (in logical pixels).
pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;

/// Smallest usable window width.
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Smallest usable window height.
pub const MIN_WINDOW_HEIGHT: u32 = 400;

const _: () = {
    assert!(MIN_TOAST_DURATION_MS > 0);
    assert!(MIN_TOAST_DURATION_MS <= DEFAULT_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(TOAST_ENTRANCE_MS < MIN_TOAST_DURATION_MS);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
