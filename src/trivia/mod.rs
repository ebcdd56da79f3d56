//! Company trivia: a fixed question sequence under a per-question
//! countdown.
//!
//! Scoring is flat: a correct answer earns the configured points, a wrong
//! answer or a timeout earns nothing. When the last answer is revealed and
//! the host advances, the session's score is appended to the score log.

mod engine;

pub use engine::{AnswerOutcome, Selection, TriviaEngine, TriviaPhase};
