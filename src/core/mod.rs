//! Core building blocks shared by every game: RNG, configuration, clock
//! and errors.

pub mod rng;
pub mod config;
pub mod clock;
pub mod error;

pub use rng::GameRng;
pub use config::{ArcadeConfig, MemoryConfig, ScoreLogCapacity, TriviaConfig};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, Result};
