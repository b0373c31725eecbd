//! Deterministic RNG wrappers.
//!
//! # Determinism strategy
//!
//! The orchestrator owns one sequential `SimRng` for walker releases, step
//! draws, and layer branching. The surface-normal sweep instead derives one
//! independent stream per lattice row:
//!
//!   row_seed = sweep_seed XOR (row * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive rows uniformly across the seed space. Because a
//! row's stream depends only on `(sweep_seed, row)`, the sweep produces
//! identical results whether rows are scanned serially or sharded across
//! Rayon workers.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Deterministic simulation RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    /// Seed from the run's master seed.
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent stream for `stream` (e.g. a lattice row) from a
    /// base seed. Pure: the parent RNG is not consumed.
    pub fn derive(base: u64, stream: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(
            base ^ stream.wrapping_mul(MIXING_CONSTANT),
        ))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
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

    /// A uniform draw in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// `true` with probability `p` — i.e. `uniform() < p`, with `p` clamped
    /// to [0, 1] so over-unity divisor configurations degrade to certainty.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
