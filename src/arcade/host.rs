//! The arcade host: engines, timers and the glue between them.

use tracing::debug;

use crate::content::{
    default_high_scores, default_questions, default_symbols, QuestionSet, SymbolSet,
};
use crate::core::{ArcadeConfig, GameRng, Result};
use crate::memory::{FlipOutcome, MemoryGame};
use crate::mood::{Mood, MoodCounts, MoodTracker};
use crate::ports::{GameContext, KeyValueStore};
use crate::schedule::{Scheduler, TimerId};
use crate::scores::{Leaderboard, ScoreLog, ScoreRecord, Standing};
use crate::trivia::{AnswerOutcome, TriviaEngine, TriviaPhase};

/// Rows shown on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

/// Trivia countdown cadence.
const TICK_MS: u64 = 1_000;

/// Timer payloads the host schedules for itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArcadeEvent {
    /// One second of the trivia countdown.
    TriviaTick,
    /// Reveal delay is over; move to the next question.
    TriviaAdvance,
    /// Mismatch display delay is over; turn the cards back.
    MemoryResolve,
}

/// Owns both games and every timer they need.
///
/// The host is the only place timers are created. Each game's timers are
/// cancelled when that game restarts, and all of them on
/// [`shutdown`](Self::shutdown) or drop.
pub struct Arcade {
    config: ArcadeConfig,
    trivia: TriviaEngine,
    memory: MemoryGame,
    mood: MoodTracker,
    score_log: ScoreLog,
    high_scores: Vec<ScoreRecord>,

    scheduler: Scheduler<ArcadeEvent>,
    countdown: Option<TimerId>,
    pending_advance: Option<TimerId>,
    pending_resolve: Option<TimerId>,
}

impl Arcade {
    /// An arcade over the built-in questions, symbols and high scores.
    pub fn new(config: ArcadeConfig) -> Result<Self> {
        Self::with_content(config, default_questions(), default_symbols())
    }

    /// An arcade over custom content.
    pub fn with_content(
        config: ArcadeConfig,
        questions: QuestionSet,
        symbols: SymbolSet,
    ) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let score_log = ScoreLog::new(config.score_log_capacity.0);

        let trivia = TriviaEngine::new(questions, config.trivia.clone())?.with_score_log(score_log);
        let memory = MemoryGame::new(symbols, config.memory.clone(), rng.for_context("memory"))?
            .with_score_log(score_log);

        Ok(Self {
            config,
            trivia,
            memory,
            mood: MoodTracker::new(),
            score_log,
            high_scores: default_high_scores(),
            scheduler: Scheduler::new(),
            countdown: None,
            pending_advance: None,
            pending_resolve: None,
        })
    }

    /// Replace the seeded all-time highs.
    #[must_use]
    pub fn with_high_scores(mut self, high_scores: Vec<ScoreRecord>) -> Self {
        self.high_scores = high_scores;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &ArcadeConfig {
        &self.config
    }

    #[must_use]
    pub fn trivia(&self) -> &TriviaEngine {
        &self.trivia
    }

    #[must_use]
    pub fn memory(&self) -> &MemoryGame {
        &self.memory
    }

    #[must_use]
    pub fn scheduler(&self) -> &Scheduler<ArcadeEvent> {
        &self.scheduler
    }

    /// Virtual milliseconds since the arcade was built.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.scheduler.now()
    }

    // === Trivia ===

    /// Start a fresh quiz, abandoning any session in flight.
    pub fn start_trivia(&mut self) {
        self.cancel_trivia_timers();
        self.trivia.reset();
        self.trivia.start();
        self.arm_countdown();
        debug!("trivia session opened");
    }

    /// Answer the current question. `None` if no question is open.
    pub fn answer_trivia(
        &mut self,
        option: usize,
        ctx: &mut GameContext<'_>,
    ) -> Option<AnswerOutcome> {
        let outcome = self.trivia.submit_answer(option, ctx)?;
        self.on_trivia_revealed();
        Some(outcome)
    }

    // === Memory ===

    /// Deal a fresh board with the configured pair count.
    pub fn start_memory(&mut self) -> Result<()> {
        self.cancel_timer(ArcadeEvent::MemoryResolve);
        self.memory.reset(self.config.memory.pair_count)
    }

    /// Turn a card. A mismatch schedules the cards to turn back.
    pub fn flip_card(&mut self, index: usize, ctx: &mut GameContext<'_>) -> FlipOutcome {
        let outcome = self.memory.flip(index, ctx);
        if outcome == FlipOutcome::Mismatched {
            let id = self
                .scheduler
                .schedule_once(self.config.memory.mismatch_delay_ms, ArcadeEvent::MemoryResolve);
            self.pending_resolve = Some(id);
        }
        outcome
    }

    // === Mood ===

    pub fn record_mood(&self, mood: Mood, ctx: &mut GameContext<'_>) {
        self.mood.record(mood, ctx);
    }

    #[must_use]
    pub fn todays_mood(&self, ctx: &GameContext<'_>) -> Option<Mood> {
        self.mood.todays_mood(ctx)
    }

    #[must_use]
    pub fn mood_stats(&self, ctx: &GameContext<'_>) -> MoodCounts {
        self.mood.stats(ctx)
    }

    // === Scores ===

    /// Seeded highs and recent results, ranked.
    #[must_use]
    pub fn standings(&self, store: &dyn KeyValueStore) -> Vec<Standing> {
        Leaderboard::standings(&self.high_scores, &self.score_log.recent(store), LEADERBOARD_SIZE)
    }

    #[must_use]
    pub fn recent_scores(&self, store: &dyn KeyValueStore) -> Vec<ScoreRecord> {
        self.score_log.recent(store)
    }

    #[must_use]
    pub fn personal_best(&self, store: &dyn KeyValueStore) -> u32 {
        self.score_log.personal_best(store)
    }

    // === Time ===

    /// Let `elapsed_ms` of virtual time pass, running every timer that
    /// comes due in deadline order.
    pub fn advance_time(&mut self, elapsed_ms: u64, ctx: &mut GameContext<'_>) {
        let target = self.scheduler.now().saturating_add(elapsed_ms);
        while let Some((id, event)) = self.scheduler.fire_next(target) {
            self.dispatch(id, event, ctx);
        }
        self.scheduler.advance_to(target);
    }

    /// Cancel every timer. Game state is left as it is.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel_all();
        self.countdown = None;
        self.pending_advance = None;
        self.pending_resolve = None;
    }

    // === Internals ===

    fn dispatch(&mut self, id: TimerId, event: ArcadeEvent, ctx: &mut GameContext<'_>) {
        match event {
            ArcadeEvent::TriviaTick => {
                if self.trivia.tick(ctx).is_some() {
                    self.on_trivia_revealed();
                }
            }
            ArcadeEvent::TriviaAdvance => {
                if self.pending_advance == Some(id) {
                    self.pending_advance = None;
                }
                self.trivia.advance(ctx);
                if self.trivia.phase() == TriviaPhase::InProgress {
                    self.arm_countdown();
                }
            }
            ArcadeEvent::MemoryResolve => {
                if self.pending_resolve == Some(id) {
                    self.pending_resolve = None;
                }
                self.memory.resolve_mismatch();
            }
        }
    }

    fn on_trivia_revealed(&mut self) {
        if let Some(id) = self.countdown.take() {
            self.scheduler.cancel(id);
        }
        let id = self
            .scheduler
            .schedule_once(self.config.trivia.reveal_delay_ms, ArcadeEvent::TriviaAdvance);
        self.pending_advance = Some(id);
    }

    fn arm_countdown(&mut self) {
        if let Some(old) = self.countdown.take() {
            self.scheduler.cancel(old);
        }
        self.countdown = Some(self.scheduler.schedule_every(TICK_MS, ArcadeEvent::TriviaTick));
    }

    fn cancel_trivia_timers(&mut self) {
        self.cancel_timer(ArcadeEvent::TriviaTick);
        self.cancel_timer(ArcadeEvent::TriviaAdvance);
    }

    fn cancel_timer(&mut self, kind: ArcadeEvent) {
        let slot = match kind {
            ArcadeEvent::TriviaTick => &mut self.countdown,
            ArcadeEvent::TriviaAdvance => &mut self.pending_advance,
            ArcadeEvent::MemoryResolve => &mut self.pending_resolve,
        };
        if let Some(id) = slot.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl Drop for Arcade {
    fn drop(&mut self) {
        self.shutdown();
    }
}
