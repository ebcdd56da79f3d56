//! Notifications: the games' only way of talking to a user.
//!
//! Engines report results ("Correct!", "Game Complete!") by pushing a
//! [`Notification`] into a [`NotificationSink`]. Delivery is fire-and-forget;
//! the sink may show a toast, log it, or drop it.

use serde::{Deserialize, Serialize};

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// A transient, user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Display hint for toast-style sinks (ms).
    pub duration_ms: u64,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            duration_ms: 3_000,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, title, message)
    }

    #[must_use]
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Receiver for game notifications.
pub trait NotificationSink {
    /// Deliver a notification. Must not fail.
    fn notify(&mut self, notification: Notification);

    /// A game ended on a high note. Presentation layers may throw confetti;
    /// the default does nothing.
    fn celebrate(&mut self) {}
}

/// Keeps everything it receives. Used by tests and headless hosts.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    pub notifications: Vec<Notification>,
    pub celebrations: usize,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent notification, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    /// Titles in delivery order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.notifications.iter().map(|n| n.title.as_str())
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
        self.celebrations = 0;
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn celebrate(&mut self) {
        self.celebrations += 1;
    }
}

/// Forwards notifications to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: Notification) {
        let Notification { kind, title, message, .. } = notification;
        match kind {
            NotificationKind::Error => tracing::warn!(%title, %message, "notification"),
            NotificationKind::Success | NotificationKind::Info => {
                tracing::info!(?kind, %title, %message, "notification")
            }
        }
    }

    fn celebrate(&mut self) {
        tracing::info!("celebrate");
    }
}
