//! Seeded randomness for the AI's card choice.
//!
//! A match replays identically from its seed. Sessions sharing one host
//! each get their own stream through `fork`.
//!
//! ```
//! use ecard::core::MatchRng;
//!
//! let mut a = MatchRng::new(42);
//! let mut b = MatchRng::new(42);
//! assert_eq!(a.gen_index(100), b.gen_index(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source handed to AI policies. ChaCha8 keeps sequences
/// identical across platforms.
#[derive(Clone, Debug)]
pub struct MatchRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl MatchRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let inner = ChaCha8Rng::seed_from_u64(seed);
        Self { inner, seed }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Child stream seeded from the next value of this one. Successive
    /// forks differ; the same parent seed always yields the same forks.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let child_seed: u64 = self.inner.gen();
        Self::new(child_seed)
    }

    /// Uniform index in `0..len`. Returns `None` when `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    /// Pick an index with probability proportional to its integer weight.
    ///
    /// Equivalent to drawing uniformly from a pool where entry `i` appears
    /// `weights[i]` times. Returns `None` if weights are empty, all zero, or their total does
    /// not fit in a `u64`.
    pub fn choose_weighted(&mut self, weights: &[u64]) -> Option<usize> {
        let total = weights
            .iter()
            .try_fold(0u64, |acc, &w| acc.checked_add(w))?;
        if total == 0 {
            return None;
        }

        let mut ticket = self.inner.gen_range(0..total);
        for (i, &weight) in weights.iter().enumerate() {
            if ticket < weight {
                return Some(i);
            }
            ticket -= weight;
        }

        unreachable!("ticket is always below the weight total")
    }
}
