//! # team-arcade
//!
//! Game engines for a company dashboard's break-room tab.
//!
//! ## Design Principles
//!
//! 1. **Engines are plain state machines**: every operation is a
//!    synchronous mutation. Calls made in the wrong phase are ignored, never
//!    errors, so stray UI events cannot corrupt a game.
//!
//! 2. **Collaborators are injected**: notifications, persistence and the
//!    clock arrive through a [`GameContext`] on each call. Nothing reaches
//!    for a global.
//!
//! 3. **Time is explicit**: countdowns and delays are [`Scheduler`]
//!    registrations owned by the [`Arcade`] host and cancelled with it.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, clock, errors
//! - `content`: questions, card symbols, seeded high scores
//! - `ports`: notification sink, key-value store, call context
//! - `scores`: bounded recent-score log and leaderboard
//! - `trivia`: timed quiz engine
//! - `memory`: pair-matching board and game
//! - `mood`: daily mood check-in
//! - `schedule`: virtual-time timers
//! - `arcade`: host wiring engines to timers
//!
//! ## Example
//!
//! ```
//! use team_arcade::{Arcade, ArcadeConfig, GameContext, MemoryStore, RecordingSink, SystemClock};
//!
//! let mut arcade = Arcade::new(ArcadeConfig::default().with_seed(1)).unwrap();
//! let (mut sink, mut store, clock) = (RecordingSink::new(), MemoryStore::new(), SystemClock);
//! let mut ctx = GameContext::new(&mut sink, &mut store, &clock);
//!
//! arcade.start_trivia();
//! arcade.answer_trivia(1, &mut ctx);
//! assert_eq!(arcade.trivia().score(), 100);
//! ```

pub mod core;
pub mod content;
pub mod ports;
pub mod scores;
pub mod trivia;
pub mod memory;
pub mod mood;
pub mod schedule;
pub mod arcade;

// Re-export commonly used types
pub use crate::core::{
    ArcadeConfig, MemoryConfig, TriviaConfig, ScoreLogCapacity,
    GameRng,
    Clock, FixedClock, SystemClock,
    ConfigError, Result,
};

pub use crate::content::{Question, QuestionSet, SymbolId, SymbolSet};

pub use crate::ports::{
    GameContext, KeyValueStore, MemoryStore,
    Notification, NotificationKind, NotificationSink, RecordingSink, TracingSink,
};

pub use crate::scores::{Leaderboard, ScoreLog, ScoreRecord, Standing};

pub use crate::trivia::{AnswerOutcome, Selection, TriviaEngine, TriviaPhase};

pub use crate::memory::{FlipOutcome, MemoryBoard, MemoryGame};

pub use crate::mood::{Mood, MoodCounts, MoodTracker};

pub use crate::schedule::{Scheduler, TimerId};

pub use crate::arcade::{Arcade, ArcadeEvent};
