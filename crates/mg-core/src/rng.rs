//! The run's single pseudo-random source.
//!
//! The generator is a value threaded explicitly through every component call
//! rather than process-global state: seeding it from the `seed` configuration
//! key makes a whole run reproducible, and tests can pin exact draws without
//! touching shared state.  Without a seed the generator is entropy-seeded and
//! runs are deliberately non-reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Run-level RNG handle wrapping a `SmallRng`.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed deterministically — identical seeds produce identical traces.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy (the default when no `seed` key is configured).
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed
    /// type.  For `f64` this is the half-open unit interval `[0, 1)`.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice; `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
