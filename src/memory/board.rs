//! Card layout and flip bookkeeping, without scoring.

use rustc_hash::FxHashSet;
use serde::Serialize;
use smallvec::SmallVec;

use crate::content::SymbolId;
use crate::core::GameRng;

/// What a single flip did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BoardFlip {
    Ignored,
    First,
    Match,
    Mismatch,
}

/// A dealt memory board.
///
/// Every symbol appears on exactly two cards. At most two cards are face up
/// and unmatched at once; matched cards stay matched until the next deal.
#[derive(Clone, Debug, Serialize)]
pub struct MemoryBoard {
    cards: Vec<SymbolId>,
    flipped: SmallVec<[usize; 2]>,
    matched: FxHashSet<usize>,
    move_count: u32,
}

impl MemoryBoard {
    /// Place each symbol twice and shuffle.
    pub fn deal(symbols: &[SymbolId], rng: &mut GameRng) -> Self {
        let mut cards: Vec<SymbolId> = symbols.iter().flat_map(|&s| [s, s]).collect();
        rng.shuffle(&mut cards);
        Self {
            cards,
            flipped: SmallVec::new(),
            matched: FxHashSet::default(),
            move_count: 0,
        }
    }

    /// Card faces in board order.
    #[must_use]
    pub fn cards(&self) -> &[SymbolId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn symbol_at(&self, index: usize) -> Option<SymbolId> {
        self.cards.get(index).copied()
    }

    /// Face-up, unmatched cards in flip order.
    #[must_use]
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    #[must_use]
    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.contains(&index)
    }

    #[must_use]
    pub fn is_matched(&self, index: usize) -> bool {
        self.matched.contains(&index)
    }

    /// Whether a card's face is showing.
    #[must_use]
    pub fn is_face_up(&self, index: usize) -> bool {
        self.is_flipped(index) || self.is_matched(index)
    }

    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Completed pair attempts.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Two unmatched cards are face up waiting to be turned back.
    #[must_use]
    pub fn has_pending_mismatch(&self) -> bool {
        self.flipped.len() == 2
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.matched.len() == self.cards.len()
    }

    pub(crate) fn flip(&mut self, index: usize) -> BoardFlip {
        if index >= self.cards.len() || self.has_pending_mismatch() || self.is_face_up(index) {
            return BoardFlip::Ignored;
        }

        self.flipped.push(index);
        if self.flipped.len() < 2 {
            return BoardFlip::First;
        }

        self.move_count += 1;
        let (a, b) = (self.flipped[0], self.flipped[1]);
        if self.cards[a] == self.cards[b] {
            self.matched.insert(a);
            self.matched.insert(b);
            self.flipped.clear();
            BoardFlip::Match
        } else {
            BoardFlip::Mismatch
        }
    }

    /// Turn a mismatched pair back over. Returns false if none was pending.
    pub(crate) fn resolve_mismatch(&mut self) -> bool {
        if !self.has_pending_mismatch() {
            return false;
        }
        self.flipped.clear();
        true
    }
}
