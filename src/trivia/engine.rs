//! Timed multiple-choice quiz.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::content::{Question, QuestionSet};
use crate::core::{Result, TriviaConfig};
use crate::ports::{GameContext, Notification};
use crate::scores::{ScoreLog, ScoreRecord};

/// Where a quiz session stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriviaPhase {
    /// No session yet, or the session was reset.
    #[default]
    Idle,
    /// A question is on screen and the clock is running.
    InProgress,
    /// The current question has been answered (or timed out).
    AnswerRevealed,
    /// The last question was answered and the score recorded.
    Finished,
}

/// What the player picked for the current question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Option index as submitted. May be out of range; that is just wrong.
    Chosen(usize),
    /// The countdown ran out.
    TimedOut,
}

impl Selection {
    /// Index form, with `-1` for a timeout. Chosen indices never map to a
    /// negative value; ones past `i64::MAX` saturate.
    #[must_use]
    pub fn raw(self) -> i64 {
        match self {
            Selection::Chosen(index) => i64::try_from(index).unwrap_or(i64::MAX),
            Selection::TimedOut => -1,
        }
    }

    #[must_use]
    pub fn option(self) -> Option<usize> {
        match self {
            Selection::Chosen(index) => Some(index),
            Selection::TimedOut => None,
        }
    }
}

/// Result of a revealed answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    TimedOut,
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }
}

/// Runs a quiz over a fixed [`QuestionSet`].
///
/// ## Lifecycle
///
/// `Idle --start--> InProgress --answer/timeout--> AnswerRevealed --advance-->`
/// `InProgress` for the next question, or `Finished` after the last one.
///
/// Calls made in the wrong phase are ignored. A second answer to an already
/// revealed question changes nothing, so stray clicks cannot double-score.
#[derive(Clone, Debug)]
pub struct TriviaEngine {
    questions: QuestionSet,
    config: TriviaConfig,
    score_log: ScoreLog,

    phase: TriviaPhase,
    current_index: usize,
    score: u32,
    correct_count: usize,
    seconds_remaining: u32,
    selection: Option<Selection>,
}

impl TriviaEngine {
    /// Build an idle engine.
    pub fn new(questions: QuestionSet, config: TriviaConfig) -> Result<Self> {
        config.validate()?;
        let seconds_remaining = config.time_limit_secs;
        Ok(Self {
            questions,
            config,
            score_log: ScoreLog::default(),
            phase: TriviaPhase::Idle,
            current_index: 0,
            score: 0,
            correct_count: 0,
            seconds_remaining,
            selection: None,
        })
    }

    /// Use a differently sized score window.
    #[must_use]
    pub fn with_score_log(mut self, score_log: ScoreLog) -> Self {
        self.score_log = score_log;
        self
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> TriviaPhase {
        self.phase
    }

    /// A session is running (not idle, not finished).
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.phase, TriviaPhase::InProgress | TriviaPhase::AnswerRevealed)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question on screen. `None` while idle.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            TriviaPhase::Idle => None,
            _ => self.questions.get(self.current_index),
        }
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    #[must_use]
    pub fn config(&self) -> &TriviaConfig {
        &self.config
    }

    // === Transitions ===

    /// Begin a session from the first question.
    ///
    /// Only valid when idle or finished; mid-session calls are ignored.
    pub fn start(&mut self) {
        if !matches!(self.phase, TriviaPhase::Idle | TriviaPhase::Finished) {
            trace!(phase = ?self.phase, "start ignored");
            return;
        }
        self.clear_session();
        self.phase = TriviaPhase::InProgress;
        debug!(questions = self.questions.len(), "trivia started");
    }

    /// Drop any session unconditionally and go back to idle.
    pub fn reset(&mut self) {
        self.clear_session();
        self.phase = TriviaPhase::Idle;
        debug!("trivia reset");
    }

    /// One second passes. At zero the question times out as a wrong answer.
    ///
    /// Returns the outcome when this tick revealed the answer.
    pub fn tick(&mut self, ctx: &mut GameContext<'_>) -> Option<AnswerOutcome> {
        if self.phase != TriviaPhase::InProgress {
            trace!(phase = ?self.phase, "tick ignored");
            return None;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            debug!(question = self.current_index, "question timed out");
            return Some(self.reveal(Selection::TimedOut, ctx));
        }
        None
    }

    /// Lock in an answer for the current question.
    ///
    /// Returns `None` if no question is waiting for an answer.
    pub fn submit_answer(
        &mut self,
        option: usize,
        ctx: &mut GameContext<'_>,
    ) -> Option<AnswerOutcome> {
        if self.phase != TriviaPhase::InProgress {
            trace!(phase = ?self.phase, option, "answer ignored");
            return None;
        }
        Some(self.reveal(Selection::Chosen(option), ctx))
    }

    /// Move past a revealed answer: next question, or finish the session.
    pub fn advance(&mut self, ctx: &mut GameContext<'_>) {
        if self.phase != TriviaPhase::AnswerRevealed {
            trace!(phase = ?self.phase, "advance ignored");
            return;
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.seconds_remaining = self.config.time_limit_secs;
            self.selection = None;
            self.phase = TriviaPhase::InProgress;
            debug!(question = self.current_index, "next question");
        } else {
            self.finish(ctx);
        }
    }

    // === Internals ===

    fn clear_session(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.correct_count = 0;
        self.seconds_remaining = self.config.time_limit_secs;
        self.selection = None;
    }

    fn reveal(&mut self, selection: Selection, ctx: &mut GameContext<'_>) -> AnswerOutcome {
        let Some(question) = self.questions.get(self.current_index) else {
            return AnswerOutcome::Incorrect;
        };

        let outcome = match selection {
            Selection::Chosen(option) if question.is_correct(option) => AnswerOutcome::Correct,
            Selection::Chosen(_) => AnswerOutcome::Incorrect,
            Selection::TimedOut => AnswerOutcome::TimedOut,
        };

        let notification = if outcome.is_correct() {
            Notification::success(
                "Correct! 🎉",
                format!("+{} points", self.config.points_per_correct),
            )
            .with_duration(2_000)
        } else {
            Notification::error("Incorrect", format!("Correct answer: {}", question.correct_text()))
                .with_duration(3_000)
        };

        if outcome.is_correct() {
            self.score += self.config.points_per_correct;
            self.correct_count += 1;
        }
        self.selection = Some(selection);
        self.phase = TriviaPhase::AnswerRevealed;
        debug!(question = self.current_index, ?outcome, score = self.score, "answer revealed");

        ctx.notify(notification);
        outcome
    }

    fn finish(&mut self, ctx: &mut GameContext<'_>) {
        self.phase = TriviaPhase::Finished;

        let record = ScoreRecord::new(
            self.config.player_name.clone(),
            self.config.game_name.clone(),
            self.score,
            ctx.clock.now(),
        );
        self.score_log.append(record, &mut *ctx.store);
        info!(score = self.score, correct = self.correct_count, "trivia finished");

        if self.score > self.config.celebrate_above {
            ctx.notifier.celebrate();
        }
        ctx.notify(
            Notification::success(
                "Game Complete! 🏆",
                format!("Final score: {} points", self.score),
            )
            .with_duration(4_000),
        );
    }
}
