//! Memory matching game.
//!
//! A board of `2N` face-down cards, each symbol on exactly two of them.
//! The player turns two cards per move: equal symbols stay face up as a
//! match, unequal ones are shown briefly and turned back by an explicit
//! [`MemoryGame::resolve_mismatch`] call that the host schedules.

mod board;
mod game;

pub use board::MemoryBoard;
pub use game::{FlipOutcome, MemoryGame};
