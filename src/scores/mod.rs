//! Score history and the leaderboard.
//!
//! Finished games append a [`ScoreRecord`] to the [`ScoreLog`], a bounded
//! most-recent-N list stored under `user-game-scores`. The [`Leaderboard`]
//! ranks those records together with the seeded all-time highs.

mod leaderboard;
mod log;

pub use leaderboard::{Leaderboard, Standing};
pub use log::{ScoreLog, ScoreRecord, SCORES_KEY};
