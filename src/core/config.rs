//! Arcade configuration.
//!
//! Every tunable number of the games lives here with the dashboard's values
//! as defaults:
//! - `TriviaConfig`: countdown length, points, reveal delay, celebration bar
//! - `MemoryConfig`: pair count, points per match, mismatch display delay
//! - `ArcadeConfig`: both of the above plus score log size and RNG seed
//!
//! Configs are plain serde structs, so a host can ship them as JSON.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, Result};

/// Trivia quiz settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriviaConfig {
    /// Seconds on the clock for each question.
    pub time_limit_secs: u32,

    /// Points for a correct answer. Timeouts and wrong answers score 0.
    pub points_per_correct: u32,

    /// How long an answer stays revealed before the host advances (ms).
    pub reveal_delay_ms: u64,

    /// Final scores strictly above this trigger `celebrate()`.
    pub celebrate_above: u32,

    /// Name written into score records.
    pub player_name: String,

    /// Game label written into score records.
    pub game_name: String,
}

impl Default for TriviaConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: 30,
            points_per_correct: 100,
            reveal_delay_ms: 2_000,
            celebrate_above: 400,
            player_name: "You".to_string(),
            game_name: "Company Trivia".to_string(),
        }
    }
}

impl TriviaConfig {
    #[must_use]
    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.time_limit_secs = secs;
        self
    }

    #[must_use]
    pub fn with_points_per_correct(mut self, points: u32) -> Self {
        self.points_per_correct = points;
        self
    }

    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Reject values the state machine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.time_limit_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "time_limit_secs",
                reason: "must be at least 1 second".into(),
            });
        }
        Ok(())
    }
}

/// Memory board settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Number of symbol pairs on the board.
    pub pair_count: usize,

    /// Points for each matched pair. Mismatches cost nothing.
    pub points_per_match: u32,

    /// How long a mismatched pair stays face up (ms).
    pub mismatch_delay_ms: u64,

    /// Player name written into score records.
    pub player_name: String,

    /// Game label written into score records.
    pub game_name: String,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            pair_count: 8,
            points_per_match: 50,
            mismatch_delay_ms: 1_000,
            player_name: "You".to_string(),
            game_name: "Memory Game".to_string(),
        }
    }
}

impl MemoryConfig {
    #[must_use]
    pub fn with_pair_count(mut self, pairs: usize) -> Self {
        self.pair_count = pairs;
        self
    }

    #[must_use]
    pub fn with_points_per_match(mut self, points: u32) -> Self {
        self.points_per_match = points;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.pair_count == 0 {
            return Err(ConfigError::EmptyPairSet);
        }
        Ok(())
    }
}

/// Top-level configuration for an [`Arcade`](crate::arcade::Arcade).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub trivia: TriviaConfig,
    pub memory: MemoryConfig,

    /// Number of recent scores kept in the store.
    pub score_log_capacity: ScoreLogCapacity,

    /// Seed for board shuffles. `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// Size of the persisted recent-score window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreLogCapacity(pub usize);

impl Default for ScoreLogCapacity {
    fn default() -> Self {
        Self(10)
    }
}

impl ArcadeConfig {
    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_trivia(mut self, trivia: TriviaConfig) -> Self {
        self.trivia = trivia;
        self
    }

    #[must_use]
    pub fn with_memory(mut self, memory: MemoryConfig) -> Self {
        self.memory = memory;
        self
    }

    #[must_use]
    pub fn with_score_log_capacity(mut self, capacity: usize) -> Self {
        self.score_log_capacity = ScoreLogCapacity(capacity);
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.trivia.validate()?;
        self.memory.validate()?;
        if self.score_log_capacity.0 == 0 {
            return Err(ConfigError::InvalidValue {
                field: "score_log_capacity",
                reason: "must keep at least one score".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard() {
        let config = ArcadeConfig::default();
        assert_eq!(config.trivia.time_limit_secs, 30);
        assert_eq!(config.trivia.points_per_correct, 100);
        assert_eq!(config.trivia.celebrate_above, 400);
        assert_eq!(config.memory.pair_count, 8);
        assert_eq!(config.memory.points_per_match, 50);
        assert_eq!(config.memory.mismatch_delay_ms, 1_000);
        assert_eq!(config.score_log_capacity, ScoreLogCapacity(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ArcadeConfig::default()
            .with_seed(9)
            .with_trivia(TriviaConfig::default().with_time_limit(10).with_player_name("Ada"))
            .with_memory(MemoryConfig::default().with_pair_count(4))
            .with_score_log_capacity(3);

        assert_eq!(config.seed, Some(9));
        assert_eq!(config.trivia.time_limit_secs, 10);
        assert_eq!(config.trivia.player_name, "Ada");
        assert_eq!(config.memory.pair_count, 4);
        assert_eq!(config.score_log_capacity.0, 3);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let json = r#"{ "memory": { "pair_count": 6 }, "seed": 5 }"#;
        let config = ArcadeConfig::from_json(json).unwrap();
        assert_eq!(config.memory.pair_count, 6);
        assert_eq!(config.memory.points_per_match, 50);
        assert_eq!(config.trivia, TriviaConfig::default());
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        let err = ArcadeConfig::from_json(r#"{ "trivia": { "time_limit_secs": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "time_limit_secs", .. }));

        let err = ArcadeConfig::from_json(r#"{ "memory": { "pair_count": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPairSet));

        let err = ArcadeConfig::from_json(r#"{ "score_log_capacity": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "score_log_capacity", .. }));

        let err = ArcadeConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_serialization() {
        let config = ArcadeConfig::default().with_seed(42);
        let json = serde_json::to_string(&config).unwrap();
        let decoded: ArcadeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, decoded);
    }
}
