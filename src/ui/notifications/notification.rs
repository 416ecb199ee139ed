// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::config::DEFAULT_TOAST_DURATION_MS;
use crate::error::Error;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Display duration used when none is given.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(DEFAULT_TOAST_DURATION_MS);

/// Unique identifier for a notification.
///
/// The value combines the wall clock in milliseconds with a random
/// component (`toast-<millis>-<hex>`). The queue additionally rejects ids it
/// already holds, so a collision can never reach the display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToastId(String);

impl ToastId {
    /// Creates a new identifier.
    pub fn new() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let salt: u64 = rand::random();
        Self(format!("toast-{millis}-{salt:016x}"))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToastId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Severity level. Determines styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses exactly the lowercase names; anything else is rejected.
impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| Error::UnknownSeverity(s.to_string()))
    }
}

/// A notification to be displayed to the user. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: ToastId,
    severity: Severity,
    message: String,
    duration: Duration,
}

impl Notification {
    /// Creates a notification with the default duration.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            severity,
            message: message.into(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Sets the auto-dismiss duration.
    ///
    /// A zero duration is not a valid display time and keeps the current one.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        if !duration.is_zero() {
            self.duration = duration;
        }
        self
    }

    /// Replaces the id with a fresh one. Used by the queue on collision.
    pub(super) fn regenerate_id(&mut self) {
        self.id = ToastId::new();
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}
