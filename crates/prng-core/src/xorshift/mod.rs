//! The xorshift* and xorshift+ generators described by Sebastiano Vigna.
//!
//! Every generator implements the [`Xorshift`] trait, which provides the
//! shared lifecycle: structural initialization, seeding from a single 64-bit
//! word, and producing the next 64-bit output.
//!
//! The richer generators expand their seed through [`Xorshift64Star`], so the
//! whole family is reproducible from one `u64`.
//!
//! These generators are statistically strong but fully predictable from a
//! handful of outputs. They are not suitable for cryptographic use.
//!
//! Seeding any of them with `0` yields an all-zero stream: the single-word
//! mixer maps zero to itself, and the others inherit that zero state. This is
//! left as-is so that every seed maps to exactly one sequence.

/// Lifecycle shared by every generator in the family.
pub trait Xorshift: Default {
    /// Structural setup that does not depend on the seed.
    fn init(&mut self);

    /// Seed the generator from a single 64-bit word. Any value is accepted.
    fn seed(&mut self, seed: u64);

    /// Advance the state and return the next 64-bit output.
    fn next(&mut self) -> u64;

    /// Convenience: a generator that has been initialized and seeded.
    fn seeded(seed: u64) -> Self {
        let mut generator = Self::default();
        generator.init();
        generator.seed(seed);
        generator
    }
}

/// `RngCore` and `SeedableRng` for a generator with no generic parameters.
///
/// `seed_from_u64` is routed straight to [`Xorshift::seed`] instead of rand's
/// default PCG expansion, so both entry points produce the same stream.
macro_rules! impl_rand_core {
    ($ty:ty) => {
        impl rand::RngCore for $ty {
            fn next_u32(&mut self) -> u32 {
                crate::xorshift::Xorshift::next(self) as u32
            }

            fn next_u64(&mut self) -> u64 {
                crate::xorshift::Xorshift::next(self)
            }

            fn fill_bytes(&mut self, dst: &mut [u8]) {
                rand::rand_core::impls::fill_bytes_via_next(self, dst)
            }
        }

        impl rand::SeedableRng for $ty {
            type Seed = [u8; 8];

            fn from_seed(seed: Self::Seed) -> Self {
                <Self as crate::xorshift::Xorshift>::seeded(u64::from_le_bytes(seed))
            }

            fn seed_from_u64(state: u64) -> Self {
                <Self as crate::xorshift::Xorshift>::seeded(state)
            }
        }
    };
}

mod plus128;
mod star64;
mod star_array;

pub use plus128::Xorshift128Plus;
pub use star64::Xorshift64Star;
pub use star_array::{Xorshift1024Star, Xorshift4096Star, XorshiftStar};
