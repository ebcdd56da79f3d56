//! The player's recent results, kept in the store as a bounded list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ports::{load_or_default, save, KeyValueStore};

/// Store key for the recent-score list.
pub const SCORES_KEY: &str = "user-game-scores";

/// One finished game. Never edited after it is written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: String,
    pub player_name: String,
    pub score: u32,
    pub game: String,
    pub timestamp: DateTime<Utc>,
}

impl ScoreRecord {
    /// A record stamped at `timestamp`; the id is the millisecond timestamp.
    ///
    /// Two records from the same millisecond share that id until
    /// [`ScoreLog::append`] gives the later one a sequence suffix.
    pub fn new(
        player_name: impl Into<String>,
        game: impl Into<String>,
        score: u32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: timestamp.timestamp_millis().to_string(),
            player_name: player_name.into(),
            score,
            game: game.into(),
            timestamp,
        }
    }
}

/// Most-recent-N window of [`ScoreRecord`]s, newest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreLog {
    capacity: usize,
}

impl Default for ScoreLog {
    fn default() -> Self {
        Self::new(10)
    }
}

impl ScoreLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { capacity: capacity.max(1) }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Prepend `record` and drop whatever falls past the window.
    ///
    /// An id already present in the window gets a `-<n>` suffix, so ids
    /// stay unique among stored records.
    pub fn append(&self, mut record: ScoreRecord, store: &mut dyn KeyValueStore) {
        let mut records: Vec<ScoreRecord> = load_or_default(&*store, SCORES_KEY);
        let base = record.id.clone();
        let mut seq = 1u32;
        while records.iter().any(|r| r.id == record.id) {
            record.id = format!("{base}-{seq}");
            seq += 1;
        }
        records.insert(0, record);
        records.truncate(self.capacity);
        save(store, SCORES_KEY, &records);
    }

    /// Stored records, newest first.
    #[must_use]
    pub fn recent(&self, store: &dyn KeyValueStore) -> Vec<ScoreRecord> {
        load_or_default(store, SCORES_KEY)
    }

    /// Highest recent score, or 0 with no history.
    #[must_use]
    pub fn personal_best(&self, store: &dyn KeyValueStore) -> u32 {
        self.recent(store).iter().map(|r| r.score).max().unwrap_or(0)
    }
}
