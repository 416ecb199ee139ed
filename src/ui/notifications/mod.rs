// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily in the bottom-right corner to report the
//! outcome of an action without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Severity` and `ToastId`
//! - [`manager`] - the ordered queue and its lifecycle messages
//! - [`timer`] - entrance/expiry deadlines with cancel-on-drop guards
//! - [`toast`] - one queued toast and the widgets that render the stack
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, RuntimeScheduler, Severity};
//!
//! let mut manager: Manager<RuntimeScheduler> = Manager::default();
//! manager.enqueue(Severity::Success, "Profile updated successfully!", None);
//! let timers = manager.take_tasks().map(Message::Notification);
//!
//! // In the view function
//! let overlay = toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

pub mod manager;
pub mod notification;
pub mod timer;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage, ENTRANCE_DURATION};
pub use notification::{Notification, Severity, ToastId, DEFAULT_DURATION};
pub use timer::{
    Deadline, ManualScheduler, ManualTimer, RuntimeScheduler, RuntimeTimer, Scheduler,
};
pub use toast::{Phase, Toast};
