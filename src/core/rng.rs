//! Random number generation for the games.
//!
//! ## Key Features
//!
//! - **Injectable**: every game draws through the [`RandomSource`] trait
//! - **Deterministic**: same seed produces identical sequence
//! - **Scriptable**: [`ScriptedRng`] replays forced draws for tests
//!
//! ## Usage
//!
//! ```
//! use rust_arcade::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.gen_inclusive(1, 6);
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.gen_inclusive(1, 6), roll);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform randomness used by every game.
///
/// Games never touch a concrete generator; the session hands them an
/// `&mut impl RandomSource`, so tests can substitute forced values.
pub trait RandomSource {
    /// Draw an integer uniformly from `low..=high`.
    ///
    /// Callers guarantee `low <= high`.
    fn gen_inclusive(&mut self, low: u32, high: u32) -> u32;

    /// Uniformly permute a slice in place.
    ///
    /// Default implementation is a Fisher–Yates shuffle driven by
    /// [`gen_inclusive`](Self::gen_inclusive).
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.gen_inclusive(0, i as u32) as usize;
            items.swap(i, j);
        }
    }
}

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn gen_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.inner.gen_range(low..=high)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        use rand::seq::SliceRandom;
        items.shuffle(&mut self.inner);
    }
}

/// Replays scripted draws, then falls back to a seeded [`GameRng`].
///
/// Each queued value is returned verbatim by the next `gen_inclusive` call,
/// so forcing a die to show 6 means queueing `6`.
///
/// ```
/// use rust_arcade::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new(7).with_values([6, 2]);
/// assert_eq!(rng.gen_inclusive(1, 6), 6);
/// assert_eq!(rng.gen_inclusive(0, 2), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    queue: VecDeque<u32>,
    keep_order: bool,
    fallback: GameRng,
}

impl ScriptedRng {
    /// Create a scripted RNG with an empty queue.
    #[must_use]
    pub fn new(fallback_seed: u64) -> Self {
        Self {
            queue: VecDeque::new(),
            keep_order: false,
            fallback: GameRng::new(fallback_seed),
        }
    }

    /// Queue values to be returned by subsequent draws.
    #[must_use]
    pub fn with_values(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.queue.extend(values);
        self
    }

    /// Make `shuffle` a no-op so boards keep their construction order.
    #[must_use]
    pub fn keep_order(mut self) -> Self {
        self.keep_order = true;
        self
    }

    /// Append one more forced value.
    pub fn push(&mut self, value: u32) {
        self.queue.push_back(value);
    }
}

impl RandomSource for ScriptedRng {
    fn gen_inclusive(&mut self, low: u32, high: u32) -> u32 {
        match self.queue.pop_front() {
            Some(value) => {
                assert!(
                    (low..=high).contains(&value),
                    "scripted value {value} outside {low}..={high}"
                );
                value
            }
            None => self.fallback.gen_inclusive(low, high),
        }
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        if self.keep_order {
            return;
        }
        for i in (1..items.len()).rev() {
            let j = self.gen_inclusive(0, i as u32) as usize;
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_inclusive(1, 100), rng2.gen_inclusive(1, 100));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_inclusive(0, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_inclusive(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_inclusive_bounds() {
        let mut rng = GameRng::new(9);
        let mut seen = [false; 6];

        for _ in 0..500 {
            let roll = rng.gen_inclusive(1, 6);
            assert!((1..=6).contains(&roll));
            seen[(roll - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s), "every face should appear");
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_scripted_values_then_fallback() {
        let mut rng = ScriptedRng::new(3).with_values([4, 1]);
        assert_eq!(rng.gen_inclusive(1, 6), 4);
        assert_eq!(rng.gen_inclusive(1, 6), 1);

        let mut reference = GameRng::new(3);
        assert_eq!(rng.gen_inclusive(1, 100), reference.gen_inclusive(1, 100));
    }

    #[test]
    #[should_panic(expected = "outside 1..=6")]
    fn test_scripted_value_out_of_range() {
        let mut rng = ScriptedRng::new(0).with_values([9]);
        rng.gen_inclusive(1, 6);
    }

    #[test]
    fn test_keep_order_shuffle() {
        let mut rng = ScriptedRng::new(0).keep_order();
        let mut data = vec![1, 2, 3, 4];
        rng.shuffle(&mut data);
        assert_eq!(data, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_scripted_shuffle_uses_queue() {
        // i = 2 swaps with 0, i = 1 swaps with 1.
        let mut rng = ScriptedRng::new(0).with_values([0, 1]);
        let mut data = vec!['a', 'b', 'c'];
        rng.shuffle(&mut data);
        assert_eq!(data, vec!['c', 'b', 'a']);
    }
}
