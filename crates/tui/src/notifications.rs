//! Transient messages shown in the status line.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use tracing::info;

use crate::view::DirtyFlag;

const MAX_NOTIFICATIONS: usize = 20;

/// How long a message stays in the status line.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Prominent message.
    Humanized,
    /// Low-key message, e.g. "Logging out..".
    Tray,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub shown_at: DateTime<Local>,
    created: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created) >= NOTIFICATION_TTL
    }
}

/// Shared, bounded queue of recent notifications.
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    entries: Rc<RefCell<VecDeque<Notification>>>,
    /// Whether the newest entry is still on screen.
    visible: Rc<Cell<bool>>,
    dirty: DirtyFlag,
}

impl Notifications {
    pub fn new(dirty: DirtyFlag) -> Self {
        Self {
            entries: Rc::default(),
            visible: Rc::default(),
            dirty,
        }
    }

    pub fn show(&self, message: impl Into<String>) {
        self.push(message.into(), NotificationKind::Humanized);
    }

    pub fn show_tray(&self, message: impl Into<String>) {
        self.push(message.into(), NotificationKind::Tray);
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.push(message.into(), NotificationKind::Error);
    }

    /// Most recent notification that has not expired yet.
    pub fn current(&self, now: Instant) -> Option<Notification> {
        self.entries.borrow().back().filter(|entry| !entry.is_expired(now)).cloned()
    }

    /// Drops the visible message once its time is up. Returns whether anything changed.
    pub fn expire(&self, now: Instant) -> bool {
        let expired = self.visible.get() && self.entries.borrow().back().is_some_and(|entry| entry.is_expired(now));
        if expired {
            self.visible.set(false);
            self.dirty.mark();
        }
        expired
    }

    /// Every retained notification, oldest first.
    pub fn history(&self) -> Vec<Notification> {
        self.entries.borrow().iter().cloned().collect()
    }

    fn push(&self, message: String, kind: NotificationKind) {
        info!(kind = ?kind, message = %message, "notification");
        let mut entries = self.entries.borrow_mut();
        if entries.len() == MAX_NOTIFICATIONS {
            entries.pop_front();
        }
        entries.push_back(Notification {
            message,
            kind,
            shown_at: Local::now(),
            created: Instant::now(),
        });
        self.visible.set(true);
        self.dirty.mark();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_notification_is_current() {
        let notifications = Notifications::default();
        notifications.show("Parent!");
        notifications.show_tray("Logging out..");

        let current = notifications.current(Instant::now()).expect("visible");
        assert_eq!(current.message, "Logging out..");
        assert_eq!(current.kind, NotificationKind::Tray);
    }

    #[test]
    fn history_is_bounded() {
        let notifications = Notifications::default();
        for index in 0..(MAX_NOTIFICATIONS + 5) {
            notifications.show(format!("message {index}"));
        }
        let history = notifications.history();
        assert_eq!(history.len(), MAX_NOTIFICATIONS);
        assert_eq!(history[0].message, "message 5");
    }

    #[test]
    fn messages_expire_after_ttl() {
        let notifications = Notifications::default();
        notifications.show_error("boom");
        let later = Instant::now() + NOTIFICATION_TTL;
        assert!(notifications.current(later).is_none());
        assert!(notifications.expire(later));
        assert!(!notifications.expire(later), "expiry is reported once");
    }
}
