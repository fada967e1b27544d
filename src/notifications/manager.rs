// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastManager` owns the ordered toast list and one expiry task per
//! toast. Every removal path (expiry, manual dismiss, sweep) is idempotent,
//! so a timer waking up for a toast that is already gone does nothing.

use super::notification::{Severity, Toast, ToastId};
use crate::config::NotificationConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Messages for toast state changes, for hosts driving the manager from an
/// event loop.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Dismiss every toast.
    DismissAll,
    /// Sweep expired toasts.
    Tick,
}

struct Shared {
    toasts: watch::Sender<Vec<Toast>>,
    timers: Mutex<HashMap<ToastId, JoinHandle<()>>>,
}

impl Shared {
    fn timers(&self) -> MutexGuard<'_, HashMap<ToastId, JoinHandle<()>>> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn remove(&self, id: ToastId) -> bool {
        self.toasts.send_if_modified(|toasts| {
            let before = toasts.len();
            toasts.retain(|toast| toast.id() != id);
            toasts.len() != before
        })
    }

    /// Called from a toast's own expiry task.
    fn expire(&self, id: ToastId) {
        // Dropping our own handle detaches; never abort the running task.
        self.timers().remove(&id);
        if self.remove(id) {
            tracing::debug!(%id, "toast expired");
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        for (_, handle) in self.timers().drain() {
            handle.abort();
        }
    }
}

/// Manages the toast list and per-toast auto-dismiss timers.
///
/// Cheap to clone; clones share the same list. When created inside a tokio
/// runtime, each toast schedules its own removal. Outside a runtime there
/// is no scheduler, and the host removes expired toasts by calling
/// [`ToastManager::tick`].
#[derive(Clone)]
pub struct ToastManager {
    shared: Arc<Shared>,
    runtime: Option<Handle>,
    default_duration: Duration,
}

impl std::fmt::Debug for ToastManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastManager")
            .field("toasts", &self.len())
            .field("scheduled", &self.runtime.is_some())
            .field("default_duration", &self.default_duration)
            .finish()
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new(&NotificationConfig::default())
    }
}

impl ToastManager {
    /// Creates an empty manager, scheduling expiry on the current tokio
    /// runtime if there is one.
    #[must_use]
    pub fn new(config: &NotificationConfig) -> Self {
        Self::with_runtime(Handle::try_current().ok(), config.default_duration())
    }

    /// Creates an empty manager with an explicit scheduler.
    #[must_use]
    pub fn with_runtime(runtime: Option<Handle>, default_duration: Duration) -> Self {
        let (toasts, _) = watch::channel(Vec::new());
        Self {
            shared: Arc::new(Shared {
                toasts,
                timers: Mutex::new(HashMap::new()),
            }),
            runtime,
            default_duration,
        }
    }

    #[must_use]
    pub fn default_duration(&self) -> Duration {
        self.default_duration
    }

    /// Appends a toast to the end of the list and returns its id.
    ///
    /// Returns immediately; removal is scheduled `duration` from now.
    pub fn show(&self, text: impl Into<String>, severity: Severity, duration: Duration) -> ToastId {
        let toast = Toast::new(severity, text, duration);
        let id = toast.id();
        self.shared.toasts.send_modify(|toasts| toasts.push(toast));
        self.schedule_expiry(id, duration);
        tracing::debug!(%id, %severity, ?duration, "toast shown");
        id
    }

    /// Shows an info toast with the default duration.
    pub fn show_default(&self, text: impl Into<String>) -> ToastId {
        self.show(text, Severity::Info, self.default_duration)
    }

    pub fn success(&self, text: impl Into<String>) -> ToastId {
        self.show(text, Severity::Success, self.default_duration)
    }

    pub fn error(&self, text: impl Into<String>) -> ToastId {
        self.show(text, Severity::Error, self.default_duration)
    }

    pub fn warning(&self, text: impl Into<String>) -> ToastId {
        self.show(text, Severity::Warning, self.default_duration)
    }

    pub fn info(&self, text: impl Into<String>) -> ToastId {
        self.show(text, Severity::Info, self.default_duration)
    }

    pub fn success_for(&self, text: impl Into<String>, duration: Duration) -> ToastId {
        self.show(text, Severity::Success, duration)
    }

    pub fn error_for(&self, text: impl Into<String>, duration: Duration) -> ToastId {
        self.show(text, Severity::Error, duration)
    }

    pub fn warning_for(&self, text: impl Into<String>, duration: Duration) -> ToastId {
        self.show(text, Severity::Warning, duration)
    }

    pub fn info_for(&self, text: impl Into<String>, duration: Duration) -> ToastId {
        self.show(text, Severity::Info, duration)
    }

    /// Removes a toast and cancels its timer.
    ///
    /// Returns `true` if the toast was still present; dismissing an id that
    /// is already gone is a no-op.
    pub fn dismiss(&self, id: ToastId) -> bool {
        if let Some(handle) = self.shared.timers().remove(&id) {
            handle.abort();
        }
        let removed = self.shared.remove(id);
        if removed {
            tracing::debug!(%id, "toast dismissed");
        }
        removed
    }

    /// Removes every toast, including ones whose timers are still pending.
    pub fn dismiss_all(&self) {
        for (_, handle) in self.shared.timers().drain() {
            handle.abort();
        }
        self.shared.toasts.send_if_modified(|toasts| {
            let had_any = !toasts.is_empty();
            toasts.clear();
            had_any
        });
    }

    /// Removes every toast whose duration has elapsed. Returns how many were
    /// removed.
    pub fn tick(&self) -> usize {
        let expired: Vec<ToastId> = self
            .shared
            .toasts
            .borrow()
            .iter()
            .filter(|toast| toast.is_expired())
            .map(Toast::id)
            .collect();

        expired.into_iter().filter(|id| self.dismiss(*id)).count()
    }

    /// Handles a toast message.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::DismissAll => self.dismiss_all(),
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Snapshot of the current toasts, in insertion order.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.shared.toasts.borrow().clone()
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.shared.toasts.borrow().iter().any(|toast| toast.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.toasts.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.toasts.borrow().is_empty()
    }

    /// Number of expiry timers still pending.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.shared.timers().len()
    }

    /// Receiver notified whenever the list changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.shared.toasts.subscribe()
    }

    fn schedule_expiry(&self, id: ToastId, duration: Duration) {
        let Some(runtime) = &self.runtime else {
            return;
        };
        let shared: Weak<Shared> = Arc::downgrade(&self.shared);

        // Hold the lock across spawn so the task cannot expire before its
        // handle is registered.
        let mut timers = self.shared.timers();
        let handle = runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            if let Some(shared) = shared.upgrade() {
                shared.expire(id);
            }
        });
        timers.insert(id, handle);
    }
}
