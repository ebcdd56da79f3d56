//! Wall-clock access behind a trait.
//!
//! Score timestamps and the mood check-in date both come from "now", which
//! makes them untestable unless the clock is injected.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time.
pub trait Clock {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar day in UTC.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// The real system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant, movable by hand.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    #[must_use]
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }

    /// Midnight UTC on the given day.
    #[must_use]
    pub fn on(day: NaiveDate) -> Self {
        Self::new(day.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
    }

    /// Move the clock forward (or back, for a negative duration).
    pub fn advance(&mut self, by: chrono::Duration) {
        self.at += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}
