// SPDX-License-Identifier: MPL-2.0
//! Single-shot toast timers.
//!
//! A [`Scheduler`] arms a deadline for one toast and hands back a guard. The
//! toast owns its guards; dropping a guard cancels the deadline. Removing a
//! toast from the queue therefore cancels every timer it armed, on every exit
//! path, before the removal returns.
//!
//! - [`RuntimeScheduler`] sleeps on the iced runtime (tokio) and aborts the
//!   sleeping task when its [`RuntimeTimer`] drops.
//! - [`ManualScheduler`] keeps a virtual clock, for headless hosts and tests.

use super::manager::Message;
use super::notification::ToastId;
use iced::task::{self, Task};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Which deadline a timer stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deadline {
    /// End of the entrance transition (`Mounted` to `Visible`).
    Entrance,
    /// Auto-dismiss.
    Expiry,
}

impl Deadline {
    /// Message delivered to the manager when the deadline is reached.
    #[must_use]
    pub fn message(self, id: ToastId) -> Message {
        match self {
            Deadline::Entrance => Message::Entered(id),
            Deadline::Expiry => Message::Expired(id),
        }
    }
}

/// Arms single-shot deadlines.
///
/// The returned guard must cancel the deadline when dropped.
pub trait Scheduler {
    type Timer;

    fn schedule(&mut self, id: &ToastId, deadline: Deadline, after: Duration) -> Self::Timer;
}

// =============================================================================
// Runtime scheduler
// =============================================================================

/// Schedules deadlines as abortable iced tasks.
///
/// Tasks accumulate until the host drains them with [`take_tasks`] and
/// returns them from its `update`.
///
/// [`take_tasks`]: RuntimeScheduler::take_tasks
#[derive(Default)]
pub struct RuntimeScheduler {
    pending: Vec<Task<Message>>,
}

impl RuntimeScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks armed but not yet handed to the runtime.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Hands every armed timer over to the runtime.
    pub fn take_tasks(&mut self) -> Task<Message> {
        Task::batch(std::mem::take(&mut self.pending))
    }
}

impl fmt::Debug for RuntimeScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeScheduler")
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl Scheduler for RuntimeScheduler {
    type Timer = RuntimeTimer;

    fn schedule(&mut self, id: &ToastId, deadline: Deadline, after: Duration) -> RuntimeTimer {
        let id = id.clone();
        // The sleep is created on first poll, inside the runtime.
        let sleep = async move { tokio::time::sleep(after).await };
        let (task, handle) = Task::perform(sleep, move |()| deadline.message(id)).abortable();
        self.pending.push(task);
        RuntimeTimer { handle }
    }
}

/// Guard for a [`RuntimeScheduler`] deadline. Aborts the task when dropped.
#[derive(Debug)]
pub struct RuntimeTimer {
    handle: task::Handle,
}

impl RuntimeTimer {
    /// Handle of the sleeping task. Clones observe the abort.
    #[must_use]
    pub fn handle(&self) -> &task::Handle {
        &self.handle
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for RuntimeTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// =============================================================================
// Manual scheduler
// =============================================================================

/// Guard for a [`ManualScheduler`] deadline.
#[derive(Debug)]
pub struct ManualTimer {
    cancelled: Rc<Cell<bool>>,
}

impl ManualTimer {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

#[derive(Debug)]
struct Armed {
    due: Duration,
    seq: u64,
    message: Message,
    cancelled: Rc<Cell<bool>>,
}

/// Virtual clock. Time only moves when the owner advances it.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_seq: u64,
    armed: Vec<Armed>,
    fired: Vec<Message>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Deadlines that are armed and not cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.armed.iter().filter(|a| !a.cancelled.get()).count()
    }

    /// Every message delivered so far, in delivery order.
    #[must_use]
    pub fn fired(&self) -> &[Message] {
        &self.fired
    }

    /// Pops the earliest live deadline due at or before `until`.
    ///
    /// The clock moves to that deadline. Cancelled deadlines are discarded
    /// without being delivered.
    pub fn pop_due(&mut self, until: Duration) -> Option<Message> {
        self.armed.retain(|a| !a.cancelled.get());
        let index = self
            .armed
            .iter()
            .enumerate()
            .filter(|(_, a)| a.due <= until)
            .min_by_key(|(_, a)| (a.due, a.seq))
            .map(|(index, _)| index)?;
        let armed = self.armed.swap_remove(index);
        self.now = self.now.max(armed.due);
        self.fired.push(armed.message.clone());
        Some(armed.message)
    }

    /// Moves the clock to `until` once no deadline before it remains.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}

impl Scheduler for ManualScheduler {
    type Timer = ManualTimer;

    fn schedule(&mut self, id: &ToastId, deadline: Deadline, after: Duration) -> ManualTimer {
        let cancelled = Rc::new(Cell::new(false));
        self.armed.push(Armed {
            due: self.now + after,
            seq: self.next_seq,
            message: deadline.message(id.clone()),
            cancelled: Rc::clone(&cancelled),
        });
        self.next_seq += 1;
        ManualTimer { cancelled }
    }
}
