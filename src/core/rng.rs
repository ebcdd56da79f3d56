//! Seeded random number generation for board shuffles.
//!
//! Every source of randomness in the arcade flows through [`GameRng`], so a
//! fixed seed reproduces the exact same boards. That keeps shuffles testable
//! without giving up the uniform distribution the memory board needs.
//!
//! ```
//! use team_arcade::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut left = vec![1, 2, 3, 4, 5, 6];
//! let mut right = left.clone();
//! a.shuffle(&mut left);
//! b.shuffle(&mut right);
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Odd 64-bit constant used to spread derived seeds apart.
const SEED_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG backed by ChaCha8.
///
/// `fork` hands out independent streams, one per board reset, so that
/// replaying a session with the same seed deals the same cards every round.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed from the operating system. Used when the configuration leaves
    /// the seed unset.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent, deterministic child stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(SEED_GAMMA));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Derive a stream keyed by a name, e.g. `"memory"`.
    ///
    /// The same name always yields the same stream for the same seed, on
    /// every platform and toolchain.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let seed = context.bytes().fold(self.seed, |acc, byte| {
            (acc ^ u64::from(byte)).wrapping_mul(SEED_GAMMA).rotate_left(31)
        });
        Self::new(seed)
    }

    /// Uniform in-place shuffle (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_deal() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut deck1: Vec<u16> = (0..16).collect();
        let mut deck2 = deck1.clone();
        rng1.shuffle(&mut deck1);
        rng2.shuffle(&mut deck2);

        assert_eq!(deck1, deck2);
    }

    fn deal(rng: &mut GameRng) -> Vec<u16> {
        let mut deck: Vec<u16> = (0..16).collect();
        rng.shuffle(&mut deck);
        deck
    }

    #[test]
    fn test_different_seeds_diverge() {
        assert_ne!(deal(&mut GameRng::new(1)), deal(&mut GameRng::new(2)));
    }

    #[test]
    fn test_forks_are_independent_and_reproducible() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut first = rng1.fork();
        let mut second = rng1.fork();
        assert_ne!(first.seed(), second.seed());
        assert_ne!(deal(&mut first), deal(&mut second));

        let mut replay = rng2.fork();
        assert_eq!(replay.seed(), 42u64.wrapping_add(SEED_GAMMA));
        assert_eq!(deal(&mut GameRng::new(42).fork()), deal(&mut replay));
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);
        let a = deal(&mut rng.for_context("memory"));
        let b = deal(&mut rng.for_context("slideshow"));
        let c = deal(&mut GameRng::new(42).for_context("memory"));

        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_context_seed_is_pinned() {
        // Configured seeds must deal the same boards across releases.
        assert_eq!(GameRng::new(42).for_context("memory").seed(), 0xf18b_2c64_9ec5_a998);
        assert_eq!(GameRng::new(42).for_context("slideshow").seed(), 0xd33d_ef93_489c_3027);
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }
}
