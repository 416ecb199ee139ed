// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered toast queue. Insertion order is display
//! order and there is no upper bound on its length. Every toast arms an
//! entrance timer and an expiry timer through the manager's [`Scheduler`];
//! both are released the moment the toast leaves the queue.

use super::notification::{Notification, Severity, ToastId, DEFAULT_DURATION};
use super::timer::{Deadline, ManualScheduler, RuntimeScheduler, Scheduler};
use super::toast::Toast;
use crate::config::TOAST_ENTRANCE_MS;
use iced::Task;
use std::fmt;
use std::time::Duration;

/// Length of the entrance transition.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(TOAST_ENTRANCE_MS);

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Close control pressed.
    Close(ToastId),
    /// Expiry deadline reached.
    Expired(ToastId),
    /// Entrance transition finished.
    Entered(ToastId),
}

/// Manages the notification queue.
pub struct Manager<S: Scheduler> {
    toasts: Vec<Toast<S::Timer>>,
    scheduler: S,
    default_duration: Duration,
}

impl<S: Scheduler + Default> Default for Manager<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Scheduler + fmt::Debug> fmt::Debug for Manager<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("toasts", &self.toasts)
            .field("scheduler", &self.scheduler)
            .field("default_duration", &self.default_duration)
            .finish()
    }
}

impl<S: Scheduler> Manager<S> {
    /// Creates an empty queue driven by `scheduler`.
    pub fn new(scheduler: S) -> Self {
        Self {
            toasts: Vec::new(),
            scheduler,
            default_duration: DEFAULT_DURATION,
        }
    }

    /// Sets the duration used when `enqueue` gets none. Zero is ignored.
    #[must_use]
    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        if !duration.is_zero() {
            self.default_duration = duration;
        }
        self
    }

    /// Builds a notification and appends it. Returns its id.
    ///
    /// A missing or zero `duration` falls back to the default duration.
    pub fn enqueue(
        &mut self,
        severity: Severity,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> ToastId {
        let duration = duration
            .filter(|d| !d.is_zero())
            .unwrap_or(self.default_duration);
        self.push(Notification::new(severity, message).with_duration(duration))
    }

    /// Appends a prebuilt notification. Returns its id.
    ///
    /// The id is regenerated if it is already in the queue, so the returned
    /// id is always unique among queued toasts.
    pub fn push(&mut self, mut notification: Notification) -> ToastId {
        while self.contains(notification.id()) {
            notification.regenerate_id();
        }

        let id = notification.id().clone();
        let entrance = self
            .scheduler
            .schedule(&id, Deadline::Entrance, ENTRANCE_DURATION);
        let expiry = self
            .scheduler
            .schedule(&id, Deadline::Expiry, notification.duration());

        tracing::debug!(
            %id,
            severity = %notification.severity(),
            duration_ms = notification.duration().as_millis() as u64,
            "toast enqueued"
        );
        self.toasts.push(Toast::new(notification, entrance, expiry));
        id
    }

    /// Removes the toast with `id`, cancelling its timers.
    ///
    /// Returns `false` if no such toast is queued. Calling it again for the
    /// same id is a no-op.
    pub fn dismiss(&mut self, id: &ToastId) -> bool {
        let Some(index) = self.toasts.iter().position(|toast| toast.id() == id) else {
            return false;
        };
        let mut toast = self.toasts.remove(index);
        toast.begin_dismiss();
        tracing::debug!(%id, remaining = self.toasts.len(), "toast dismissed");
        true
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Close(id) | Message::Expired(id) => {
                self.dismiss(&id);
            }
            Message::Entered(id) => {
                if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id() == &id) {
                    toast.enter();
                }
            }
        }
    }

    /// Queued toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast<S::Timer>> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&Toast<S::Timer>> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &ToastId) -> bool {
        self.get(id).is_some()
    }

    /// Removes every toast and cancels all timers.
    pub fn clear(&mut self) {
        if !self.toasts.is_empty() {
            tracing::debug!(count = self.toasts.len(), "toast queue cleared");
        }
        self.toasts.clear();
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}

impl Manager<RuntimeScheduler> {
    /// Hands the timers armed since the last call to the iced runtime.
    pub fn take_tasks(&mut self) -> Task<Message> {
        self.scheduler.take_tasks()
    }
}

impl Manager<ManualScheduler> {
    /// Advances virtual time by `by`, delivering every deadline that falls
    /// due on the way, in deadline order.
    pub fn advance(&mut self, by: Duration) {
        let target = self.scheduler.now() + by;
        while let Some(message) = self.scheduler.pop_due(target) {
            self.handle_message(message);
        }
        self.scheduler.settle(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Phase;
    use std::collections::HashSet;

    fn manual() -> Manager<ManualScheduler> {
        Manager::default()
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn messages(manager: &Manager<ManualScheduler>) -> Vec<&str> {
        manager.iter().map(|t| t.notification().message()).collect()
    }

    fn expirations(manager: &Manager<ManualScheduler>, id: &ToastId) -> usize {
        manager
            .scheduler()
            .fired()
            .iter()
            .filter(|m| matches!(m, Message::Expired(fired) if fired == id))
            .count()
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = manual();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
        assert_eq!(manager.default_duration(), DEFAULT_DURATION);
    }

    #[test]
    fn enqueue_returns_fresh_ids() {
        let mut manager = manual();
        let mut seen = HashSet::new();
        for i in 0..50 {
            let id = manager.enqueue(Severity::Info, format!("toast {i}"), None);
            assert!(seen.insert(id.clone()));
            assert!(manager.contains(&id));
        }
        assert_eq!(manager.len(), 50);
    }

    #[test]
    fn colliding_id_is_regenerated() {
        let mut manager = manual();
        let notification = Notification::info("same");
        let first = manager.push(notification.clone());
        let second = manager.push(notification);

        assert_ne!(first, second);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn enqueue_appends_at_the_end() {
        let mut manager = manual();
        manager.enqueue(Severity::Info, "first", None);
        let id = manager.enqueue(Severity::Warning, "second", Some(ms(5000)));

        let last = manager.iter().last().map(Toast::notification);
        let last = last.expect("queue has an entry");
        assert_eq!(last.id(), &id);
        assert_eq!(last.severity(), Severity::Warning);
        assert_eq!(last.message(), "second");
        assert_eq!(last.duration(), ms(5000));
    }

    #[test]
    fn missing_or_zero_duration_uses_default() {
        let mut manager = manual().with_default_duration(ms(4000));
        let a = manager.enqueue(Severity::Info, "a", None);
        let b = manager.enqueue(Severity::Info, "b", Some(Duration::ZERO));

        for id in [a, b] {
            let toast = manager.get(&id).expect("queued");
            assert_eq!(toast.notification().duration(), ms(4000));
        }
    }

    #[test]
    fn duplicate_messages_are_kept_separately() {
        let mut manager = manual();
        manager.enqueue(Severity::Error, "Failed", None);
        manager.enqueue(Severity::Error, "Failed", None);
        assert_eq!(messages(&manager), vec!["Failed", "Failed"]);
    }

    #[test]
    fn dismiss_keeps_relative_order() {
        let mut manager = manual();
        manager.enqueue(Severity::Info, "a", None);
        let b = manager.enqueue(Severity::Info, "b", None);
        manager.enqueue(Severity::Info, "c", None);

        assert!(manager.dismiss(&b));
        assert_eq!(messages(&manager), vec!["a", "c"]);

        assert!(!manager.dismiss(&b));
        assert_eq!(messages(&manager), vec!["a", "c"]);
    }

    #[test]
    fn dismiss_unknown_id_is_a_noop() {
        let mut manager = manual();
        manager.enqueue(Severity::Info, "a", None);
        assert!(!manager.dismiss(&ToastId::from("toast-0-unknown")));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn toast_expires_no_earlier_than_its_duration() {
        let mut manager = manual();
        let id = manager.enqueue(Severity::Success, "Saved", Some(ms(3000)));

        manager.advance(ms(2999));
        assert!(manager.contains(&id));

        manager.advance(ms(1));
        assert!(!manager.contains(&id));
        assert_eq!(expirations(&manager, &id), 1);

        manager.advance(ms(10_000));
        assert_eq!(expirations(&manager, &id), 1);
    }

    #[test]
    fn manual_close_cancels_expiry() {
        let mut manager = manual();
        let id = manager.enqueue(Severity::Error, "Failed", Some(ms(3000)));

        manager.advance(ms(100));
        manager.handle_message(Message::Close(id.clone()));
        assert!(manager.is_empty());
        assert_eq!(manager.scheduler().pending_count(), 0);

        manager.advance(ms(5000));
        assert_eq!(expirations(&manager, &id), 0);
    }

    #[test]
    fn late_expiry_for_removed_toast_is_ignored() {
        let mut manager = manual();
        let keep = manager.enqueue(Severity::Info, "keep", None);
        let gone = manager.enqueue(Severity::Info, "gone", None);
        manager.dismiss(&gone);

        manager.handle_message(Message::Expired(gone));
        assert_eq!(manager.len(), 1);
        assert!(manager.contains(&keep));
    }

    #[test]
    fn entrance_moves_toast_to_visible() {
        let mut manager = manual();
        let id = manager.enqueue(Severity::Info, "hello", None);
        assert_eq!(manager.get(&id).map(Toast::phase), Some(Phase::Mounted));

        manager.advance(ENTRANCE_DURATION);
        let toast = manager.get(&id).expect("still queued");
        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.armed_timers(), 1);
    }

    #[test]
    fn expiry_before_entrance_cancels_entrance() {
        let mut manager = manual();
        let id = manager.enqueue(Severity::Info, "quick", Some(ms(100)));

        manager.advance(ENTRANCE_DURATION * 2);
        assert!(!manager.contains(&id));
        assert!(manager
            .scheduler()
            .fired()
            .iter()
            .all(|m| !matches!(m, Message::Entered(_))));
    }

    #[test]
    fn clear_cancels_every_timer() {
        let mut manager = manual();
        manager.enqueue(Severity::Info, "a", None);
        manager.enqueue(Severity::Info, "b", None);
        assert_eq!(manager.scheduler().pending_count(), 4);

        manager.clear();
        assert!(manager.is_empty());
        assert_eq!(manager.scheduler().pending_count(), 0);
    }

    #[test]
    fn dropping_the_manager_cancels_timers() {
        let mut manager = manual();
        manager.enqueue(Severity::Info, "a", None);
        let toasts: Vec<_> = std::mem::take(&mut manager.toasts);
        assert_eq!(manager.scheduler().pending_count(), 2);
        drop(toasts);
        assert_eq!(manager.scheduler().pending_count(), 0);
    }

    #[test]
    fn error_then_success_scenario() {
        let mut manager = manual();
        let error = manager.enqueue(Severity::Error, "Failed to connect", Some(ms(3000)));
        let success = manager.enqueue(Severity::Success, "Saved", Some(ms(3000)));
        assert_eq!(messages(&manager), vec!["Failed to connect", "Saved"]);

        manager.advance(ms(3000));
        assert!(manager.is_empty());
        assert_eq!(expirations(&manager, &error), 1);
        assert_eq!(expirations(&manager, &success), 1);
    }

    #[test]
    fn error_then_success_with_early_close() {
        let mut manager = manual();
        let error = manager.enqueue(Severity::Error, "Failed to connect", Some(ms(3000)));
        manager.enqueue(Severity::Success, "Saved", Some(ms(3000)));

        manager.advance(ms(100));
        manager.handle_message(Message::Close(error.clone()));
        assert_eq!(messages(&manager), vec!["Saved"]);

        manager.advance(ms(2900));
        assert!(manager.is_empty());
        assert_eq!(expirations(&manager, &error), 0);
    }

    #[test]
    fn runtime_manager_hands_timers_to_the_runtime() {
        let mut manager: Manager<RuntimeScheduler> = Manager::default();
        let id = manager.enqueue(Severity::Info, "hi", None);
        assert_eq!(manager.scheduler().pending_count(), 2);

        let _task = manager.take_tasks();
        assert_eq!(manager.scheduler().pending_count(), 0);
        assert!(manager.dismiss(&id));
    }

    #[test]
    fn dismissing_aborts_runtime_timers_of_that_toast_only() {
        let mut manager: Manager<RuntimeScheduler> = Manager::default();
        let gone = manager.enqueue(Severity::Error, "gone", Some(ms(50)));
        let keep = manager.enqueue(Severity::Info, "keep", Some(ms(80)));
        let _task = manager.take_tasks();

        let handles = |id: &ToastId| -> Vec<_> {
            manager
                .get(id)
                .map(|toast| toast.timers().map(|t| t.handle().clone()).collect())
                .unwrap_or_default()
        };
        let gone_handles = handles(&gone);
        let keep_handles = handles(&keep);
        assert_eq!(gone_handles.len(), 2);
        assert_eq!(keep_handles.len(), 2);

        assert!(manager.dismiss(&gone));
        assert!(gone_handles.iter().all(|h| h.is_aborted()));
        assert!(keep_handles.iter().all(|h| !h.is_aborted()));

        manager.handle_message(Message::Expired(keep.clone()));
        assert!(manager.is_empty());
        assert!(keep_handles.iter().all(|h| h.is_aborted()));
    }

    #[test]
    fn entering_aborts_only_the_entrance_timer() {
        let mut manager: Manager<RuntimeScheduler> = Manager::default();
        let id = manager.enqueue(Severity::Success, "saved", None);
        let handles: Vec<_> = manager
            .get(&id)
            .map(|toast| toast.timers().map(|t| t.handle().clone()).collect())
            .unwrap_or_default();

        manager.handle_message(Message::Entered(id.clone()));
        assert!(handles[0].is_aborted());
        assert!(!handles[1].is_aborted());
    }
}
