//! A simple pseudorandom number generator.
//!
//! Specifically, the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] trait.
//!
//! Each [context](crate::context) owns a generator, seeded from [Config::seed](crate::config::Config::seed), so repeated runs of the same configuration make the same decisions.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

/// State and increment.
#[derive(Clone, Debug)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

/// Entirely unmotivated, though odd, as required.
const INCREMENT: u64 = 1442695040888963407;

/// The multiplier of the reference implementation.
const MULTIPLIER: u64 = 6364136223846793005;

impl Default for MinimalPCG32 {
    fn default() -> Self {
        Self::from_seed(0_u64.to_le_bytes())
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.state = old_state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = Self {
            state: 0,
            inc: INCREMENT,
        };
        rng.next_u32();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.next_u32();
        rng
    }
}
