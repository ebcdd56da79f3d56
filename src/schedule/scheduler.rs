//! Virtual-time timer registry.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Handle to a registration, used to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

#[derive(Clone, Debug)]
struct Registration<E> {
    id: TimerId,
    due_at: u64,
    /// `Some(period)` for repeating timers.
    period: Option<u64>,
    event: E,
}

/// Owns timer registrations and fires them as virtual time advances.
///
/// Time is in milliseconds and only moves when [`advance`](Self::advance)
/// is called, which makes every timing path deterministic. Events that come
/// due in one call are returned in deadline order; ties fire in the order
/// they were scheduled.
#[derive(Clone, Debug)]
pub struct Scheduler<E> {
    now: u64,
    next_id: u64,
    timers: Vec<Registration<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            now: 0,
            next_id: 0,
            timers: Vec::new(),
        }
    }
}

impl<E: Clone> Scheduler<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed since creation.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Number of live registrations.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Fire `event` once, `delay_ms` from now.
    pub fn schedule_once(&mut self, delay_ms: u64, event: E) -> TimerId {
        self.register(delay_ms, None, event)
    }

    /// Fire `event` every `period_ms`, first after one period.
    ///
    /// A zero period is treated as 1 ms.
    pub fn schedule_every(&mut self, period_ms: u64, event: E) -> TimerId {
        let period = period_ms.max(1);
        self.register(period, Some(period), event)
    }

    /// Remove a registration. Returns false if it had already fired or
    /// been cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        let removed = self.timers.len() != before;
        if removed {
            trace!(%id, "timer cancelled");
        }
        removed
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    /// Move time forward and collect everything that came due.
    ///
    /// Periodic timers fire once per elapsed period.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<(TimerId, E)> {
        let target = self.now.saturating_add(elapsed_ms);
        let mut fired = Vec::new();
        while let Some(due) = self.fire_next(target) {
            fired.push(due);
        }
        self.advance_to(target);
        fired
    }

    /// Fire the single earliest registration due at or before `until`,
    /// moving the clock to its deadline.
    ///
    /// Hosts that react to an event by scheduling or cancelling timers call
    /// this in a loop so their changes are seen by the rest of the step.
    pub fn fire_next(&mut self, until: u64) -> Option<(TimerId, E)> {
        let pos = self.next_due(until)?;
        let due_at = self.timers[pos].due_at;
        self.now = self.now.max(due_at);

        let timer = &self.timers[pos];
        let period = timer.period;
        let fired = (timer.id, timer.event.clone());
        match period {
            Some(period) => self.timers[pos].due_at = due_at + period,
            None => {
                self.timers.remove(pos);
            }
        }
        Some(fired)
    }

    /// Move the clock to `target` without firing anything. Never moves
    /// backwards.
    pub fn advance_to(&mut self, target: u64) {
        self.now = self.now.max(target);
    }

    fn next_due(&self, target: u64) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_at <= target)
            .min_by_key(|(_, t)| (t.due_at, t.id))
            .map(|(i, _)| i)
    }

    fn register(&mut self, delay_ms: u64, period: Option<u64>, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Registration {
            id,
            due_at: self.now.saturating_add(delay_ms),
            period,
            event,
        });
        trace!(%id, delay_ms, ?period, "timer scheduled");
        id
    }
}
