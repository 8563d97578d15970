//! Seeded RNG for layout generation.
//!
//! The agent core is fully deterministic and never draws random numbers.
//! Randomness is confined to building worlds (scattered scenarios), so a
//! single simulation-level generator is enough.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vec2;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset, e.g. one per
    /// object kind so adding agents does not reshuffle furniture.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
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

    /// Uniform point with `0 <= x < max.x` and `0 <= y < max.y`.
    ///
    /// A non-positive or non-finite bound on an axis yields 0 on that axis.
    pub fn point_within(&mut self, max: Vec2) -> Vec2 {
        let x = if max.x.is_finite() && max.x > 0.0 { self.0.gen_range(0.0..max.x) } else { 0.0 };
        let y = if max.y.is_finite() && max.y > 0.0 { self.0.gen_range(0.0..max.y) } else { 0.0 };
        Vec2::new(x, y)
    }
}
