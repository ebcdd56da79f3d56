//! Construction-time errors.
//!
//! Gameplay itself never fails: an operation called in the wrong phase is
//! ignored. The only things that can go wrong are bad inputs when an engine
//! is built or a board is re-dealt, and those surface as [`ConfigError`].

use thiserror::Error;

/// Invalid content or configuration handed to an engine.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("question list is empty")]
    EmptyQuestionList,

    #[error("memory board needs at least one pair")]
    EmptyPairSet,

    #[error("need {needed} distinct symbols but only {available} are available")]
    NotEnoughSymbols { needed: usize, available: usize },

    #[error("symbol {0:?} appears more than once")]
    DuplicateSymbol(String),

    #[error("question {id}: {reason}")]
    InvalidQuestion { id: String, reason: String },

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
