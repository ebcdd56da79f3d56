//! Daily mood check-in, persisted under `mood-history`.

mod tracker;

pub use tracker::{Mood, MoodCounts, MoodTracker, MOOD_KEY, STATS_WINDOW_DAYS};
