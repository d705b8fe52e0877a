//! Injectable randomness for question selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one index out of `len` candidates.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Thread-local RNG; the default for live sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Seeded RNG for reproducible sessions.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Replays a fixed script of indices (wrapped into range), cycling when exhausted.
///
/// An empty script always picks the first candidate.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Always picks the first eligible candidate.
    #[must_use]
    pub fn first() -> Self {
        Self::default()
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let raw = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        raw % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_wraps_and_cycles() {
        let mut rng = ScriptedRandom::new(vec![1, 5]);
        assert_eq!(rng.pick_index(3), 1);
        assert_eq!(rng.pick_index(3), 2);
        assert_eq!(rng.pick_index(3), 1);
    }

    #[test]
    fn seeded_is_reproducible_and_in_range() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        for len in 1..50 {
            let x = a.pick_index(len);
            assert_eq!(x, b.pick_index(len));
            assert!(x < len);
        }
    }

    #[test]
    fn thread_random_stays_in_range() {
        let mut rng = ThreadRandom;
        for _ in 0..100 {
            assert!(rng.pick_index(4) < 4);
        }
        assert_eq!(rng.pick_index(1), 0);
    }
}
