//! Collaborators the games are wired to: a notification sink, a key-value
//! store and a clock.
//!
//! Engines never own these. Each operation that has side effects takes a
//! [`GameContext`] bundling borrowed collaborators, so the same engine runs
//! against a browser bridge, a log, or a test recorder.

pub mod notify;
pub mod store;

pub use notify::{Notification, NotificationKind, NotificationSink, RecordingSink, TracingSink};
pub use store::{load_or_default, save, KeyValueStore, MemoryStore};

use crate::core::Clock;

/// Borrowed collaborators for one engine call.
pub struct GameContext<'a> {
    pub notifier: &'a mut dyn NotificationSink,
    pub store: &'a mut dyn KeyValueStore,
    pub clock: &'a dyn Clock,
}

impl<'a> GameContext<'a> {
    pub fn new(
        notifier: &'a mut dyn NotificationSink,
        store: &'a mut dyn KeyValueStore,
        clock: &'a dyn Clock,
    ) -> Self {
        Self { notifier, store, clock }
    }

    /// Shorthand for `self.notifier.notify(..)`.
    pub fn notify(&mut self, notification: Notification) {
        self.notifier.notify(notification);
    }
}
