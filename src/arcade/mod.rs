//! Host that runs the games on a single event loop.
//!
//! [`Arcade`] owns the trivia engine, the memory game and the mood tracker,
//! and drives their time-dependent steps from its own [`Scheduler`]:
//!
//! - the 1 Hz trivia countdown
//! - the auto-advance after an answer is revealed
//! - turning a mismatched memory pair back over
//!
//! Time only moves through [`Arcade::advance_time`].
//!
//! [`Scheduler`]: crate::schedule::Scheduler

mod host;

pub use host::{Arcade, ArcadeEvent, LEADERBOARD_SIZE};
