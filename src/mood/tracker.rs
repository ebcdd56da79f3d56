//! Daily mood check-in.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ports::{load_or_default, save, GameContext, KeyValueStore, Notification};

/// Store key for the check-in history.
pub const MOOD_KEY: &str = "mood-history";

/// Days covered by [`MoodTracker::stats`], today included.
pub const STATS_WINDOW_DAYS: u64 = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Okay,
    Stressed,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mood::Happy => "happy",
            Mood::Okay => "okay",
            Mood::Stressed => "stressed",
        };
        f.write_str(label)
    }
}

/// Per-mood tallies over a window of days.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MoodCounts {
    pub happy: u32,
    pub okay: u32,
    pub stressed: u32,
}

impl MoodCounts {
    fn add(&mut self, mood: Mood) {
        match mood {
            Mood::Happy => self.happy += 1,
            Mood::Okay => self.okay += 1,
            Mood::Stressed => self.stressed += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.happy + self.okay + self.stressed
    }
}

/// One mood per calendar day, stored as `{ "YYYY-MM-DD": mood }`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoodTracker;

type History = BTreeMap<NaiveDate, Mood>;

impl MoodTracker {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Record today's mood, replacing an earlier check-in for the same day.
    pub fn record(&self, mood: Mood, ctx: &mut GameContext<'_>) {
        let today = ctx.clock.today();
        let mut history = Self::history(&*ctx.store);
        history.insert(today, mood);
        save(&mut *ctx.store, MOOD_KEY, &history);
        debug!(%today, %mood, "mood recorded");

        ctx.notify(Notification::success(
            "Mood recorded!",
            "Thanks for sharing how you're feeling today.",
        ));
    }

    /// Today's check-in, if there is one.
    #[must_use]
    pub fn todays_mood(&self, ctx: &GameContext<'_>) -> Option<Mood> {
        Self::history(&*ctx.store).get(&ctx.clock.today()).copied()
    }

    /// Tallies over the last seven days, today included.
    #[must_use]
    pub fn stats(&self, ctx: &GameContext<'_>) -> MoodCounts {
        Self::window_counts(&Self::history(&*ctx.store), ctx.clock.today())
    }

    fn window_counts(history: &History, today: NaiveDate) -> MoodCounts {
        let mut counts = MoodCounts::default();
        for back in 0..STATS_WINDOW_DAYS {
            let Some(day) = today.checked_sub_days(Days::new(back)) else {
                break;
            };
            if let Some(&mood) = history.get(&day) {
                counts.add(mood);
            }
        }
        counts
    }

    fn history(store: &dyn KeyValueStore) -> History {
        load_or_default(store, MOOD_KEY)
    }
}
