//! xorshift128+: two words of state, finished with an addition.
//!
//! The fastest generator in the family, passing BigCrush without systematic
//! failures. The 2^128 - 1 period is only appropriate for a mild amount of
//! parallelism; prefer xorshift1024* otherwise.

use super::{Xorshift, Xorshift64Star};

/// xorshift128+ generator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Xorshift128Plus {
    state: [u64; 2],
}

impl Xorshift128Plus {
    /// Current state pair.
    pub fn state(&self) -> [u64; 2] {
        self.state
    }
}

impl Xorshift for Xorshift128Plus {
    fn init(&mut self) {}

    fn seed(&mut self, seed: u64) {
        let mut mixer = Xorshift64Star::seeded(seed);
        self.state[0] = mixer.next();
        self.state[1] = mixer.next();
    }

    fn next(&mut self) -> u64 {
        let mut s1 = self.state[0];
        let s0 = self.state[1];
        self.state[0] = s0;
        s1 ^= s1 << 23;
        let mixed = s1 ^ s0 ^ (s1 >> 17) ^ (s0 >> 26);
        self.state[1] = mixed;
        mixed.wrapping_add(s0)
    }
}

impl_rand_core!(Xorshift128Plus);
