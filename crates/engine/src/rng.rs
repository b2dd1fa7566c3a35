//! Injectable randomness for game mechanics.
//!
//! Every engine operation that rolls dice takes a `&mut impl RandomSource`
//! instead of reaching for ambient randomness. Hosts inject [`PcgRandom`]
//! seeded however they like; tests inject [`ScriptedSource`] to replay an
//! exact draw sequence and assert exact outcomes.

/// Source of uniform random draws for engine operations.
///
/// Implementors supply raw 32-bit draws; the combinators derive floats,
/// bounded integers, and weighted choices from them. One engine roll
/// consumes exactly one raw draw, which keeps scripted sequences easy to
/// line up with the operation being tested.
pub trait RandomSource {
    /// Produce the next raw 32-bit draw.
    fn next_u32(&mut self) -> u32;

    /// Uniform float in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (u32::MAX as f64 + 1.0)
    }

    /// Uniform integer in `[min, max]` inclusive.
    fn range_u32(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + self.next_u32() % span
    }

    /// Uniform index into a collection of `len` elements.
    ///
    /// Returns 0 for an empty collection; callers index only non-empty
    /// fixed tables.
    fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        (self.next_u32() % len as u32) as usize
    }

    /// Pick an index according to relative weights.
    ///
    /// Weights need not sum to any particular total. A zero-sum table
    /// falls back to index 0.
    fn weighted_index(&mut self, weights: &[u32]) -> usize {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return 0;
        }
        let mut roll = self.next_u32() % total;
        for (idx, &weight) in weights.iter().enumerate() {
            if roll < weight {
                return idx;
            }
            roll -= weight;
        }
        weights.len() - 1
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state permuted into 32-bit output. Small, fast,
/// and fully reproducible from its seed, which is all the engine asks of
/// its randomness. Not cryptographic, and game mechanics do not need it
/// to be.
#[derive(Clone, Copy, Debug)]
pub struct PcgRandom {
    state: u64,
}

impl PcgRandom {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator from a seed. The same seed always yields the
    /// same draw sequence.
    pub fn new(seed: u64) -> Self {
        // One step scrambles seeds that differ only in low bits.
        Self {
            state: Self::step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output function: xorshift high bits, then a random rotate.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRandom {
    fn next_u32(&mut self) -> u32 {
        self.state = Self::step(self.state);
        Self::output(self.state)
    }
}

/// Replays a fixed sequence of raw draws.
///
/// The deterministic test harness: script the draws an operation will
/// consume, run it, and assert the exact outcome.
///
/// # Panics
///
/// Panics if an operation asks for more draws than were scripted. That is
/// deliberate — a dry script means the test's model of the operation's
/// draw sequence is wrong.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    draws: std::collections::VecDeque<u32>,
}

impl ScriptedSource {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Raw draw that [`RandomSource::next_f64`] maps to (approximately)
    /// the given fraction in `[0, 1)`.
    pub fn fraction(f: f64) -> u32 {
        (f * (u32::MAX as f64 + 1.0)) as u32
    }

    /// Number of scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedSource {
    fn next_u32(&mut self) -> u32 {
        self.draws
            .pop_front()
            .expect("scripted random source ran out of draws")
    }
}
