//! Memory matching game: scoring and completion on top of [`MemoryBoard`].

use tracing::{debug, info, trace};

use super::board::{BoardFlip, MemoryBoard};
use crate::content::SymbolSet;
use crate::core::{GameRng, MemoryConfig, Result};
use crate::ports::{GameContext, Notification};
use crate::scores::{ScoreLog, ScoreRecord};

/// What a call to [`MemoryGame::flip`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipOutcome {
    /// Nothing changed.
    Ignored,
    /// First card of a pair turned up.
    Flipped,
    /// Second card matched the first.
    Matched,
    /// Second card did not match; call `resolve_mismatch` after the delay.
    Mismatched,
    /// A match that cleared the board.
    Completed,
}

/// A memory game over a [`SymbolSet`].
///
/// Matching a pair scores the configured points; mismatches cost nothing
/// but count as a move. Two face-up cards that do not match block further
/// flips until the host calls [`resolve_mismatch`](Self::resolve_mismatch).
#[derive(Clone, Debug)]
pub struct MemoryGame {
    symbols: SymbolSet,
    config: MemoryConfig,
    rng: GameRng,
    score_log: ScoreLog,
    board: MemoryBoard,
    score: u32,
}

impl MemoryGame {
    /// Deal a board of `config.pair_count` pairs.
    pub fn new(symbols: SymbolSet, config: MemoryConfig, mut rng: GameRng) -> Result<Self> {
        config.validate()?;
        let board = MemoryBoard::deal(&symbols.take(config.pair_count)?, &mut rng.fork());
        Ok(Self {
            symbols,
            config,
            rng,
            score_log: ScoreLog::default(),
            board,
            score: 0,
        })
    }

    #[must_use]
    pub fn with_score_log(mut self, score_log: ScoreLog) -> Self {
        self.score_log = score_log;
        self
    }

    /// Re-deal with `pair_count` pairs and clear score and moves.
    ///
    /// Every deal shuffles with its own fork of the game's stream, so the
    /// n-th board of a seeded game is always the same. On error the current
    /// board is left as it was and no fork is taken.
    pub fn reset(&mut self, pair_count: usize) -> Result<()> {
        let symbols = self.symbols.take(pair_count)?;
        self.board = MemoryBoard::deal(&symbols, &mut self.rng.fork());
        self.score = 0;
        debug!(pair_count, "memory board dealt");
        Ok(())
    }

    /// Turn a card face up.
    pub fn flip(&mut self, index: usize, ctx: &mut GameContext<'_>) -> FlipOutcome {
        match self.board.flip(index) {
            BoardFlip::Ignored => {
                trace!(index, "flip ignored");
                FlipOutcome::Ignored
            }
            BoardFlip::First => FlipOutcome::Flipped,
            BoardFlip::Mismatch => {
                debug!(moves = self.board.move_count(), "mismatch");
                FlipOutcome::Mismatched
            }
            BoardFlip::Match => {
                self.score += self.config.points_per_match;
                debug!(score = self.score, matched = self.board.matched_count(), "pair matched");
                if self.board.is_complete() {
                    self.complete(ctx);
                    FlipOutcome::Completed
                } else {
                    FlipOutcome::Matched
                }
            }
        }
    }

    /// Turn a mismatched pair back face down. Returns false if there was
    /// nothing to resolve.
    pub fn resolve_mismatch(&mut self) -> bool {
        let resolved = self.board.resolve_mismatch();
        if !resolved {
            trace!("resolve_mismatch ignored");
        }
        resolved
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.board.is_complete()
    }

    #[must_use]
    pub fn board(&self) -> &MemoryBoard {
        &self.board
    }

    #[must_use]
    pub fn symbols(&self) -> &SymbolSet {
        &self.symbols
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.board.move_count()
    }

    #[must_use]
    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }

    fn complete(&mut self, ctx: &mut GameContext<'_>) {
        let moves = self.board.move_count();
        info!(score = self.score, moves, "memory game complete");

        let record = ScoreRecord::new(
            self.config.player_name.clone(),
            self.config.game_name.clone(),
            self.score,
            ctx.clock.now(),
        );
        self.score_log.append(record, &mut *ctx.store);

        ctx.notifier.celebrate();
        ctx.notify(
            Notification::success(
                "Memory Game Complete! 🧠",
                format!("Score: {} points in {} moves", self.score, moves),
            )
            .with_duration(4_000),
        );
    }
}
