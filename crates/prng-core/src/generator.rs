//! Runtime-selected generator over the closed algorithm set.

use crate::algorithm::Algorithm;
use crate::sequence::Sequence;
use crate::xorshift::{Xorshift, Xorshift64Star, Xorshift128Plus, Xorshift1024Star, Xorshift4096Star};

/// One seeded generator of any of the four algorithms.
///
/// Each instance owns its state outright; independently seeded instances
/// share nothing and may be driven from different threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generator {
    Xorshift64Star(Xorshift64Star),
    Xorshift1024Star(Box<Xorshift1024Star>),
    Xorshift4096Star(Box<Xorshift4096Star>),
    Xorshift128Plus(Xorshift128Plus),
}

impl Generator {
    /// Create, initialize and seed a generator for `algorithm`.
    pub fn new(algorithm: Algorithm, seed: u64) -> Self {
        if seed == 0 {
            log::warn!("{algorithm} seeded with 0: every output will be 0");
        }
        log::debug!("creating {algorithm} generator with seed {seed:#018x}");
        match algorithm {
            Algorithm::Xorshift64Star => Self::Xorshift64Star(Xorshift64Star::seeded(seed)),
            Algorithm::Xorshift1024Star => {
                Self::Xorshift1024Star(Box::new(Xorshift1024Star::seeded(seed)))
            }
            Algorithm::Xorshift4096Star => {
                Self::Xorshift4096Star(Box::new(Xorshift4096Star::seeded(seed)))
            }
            Algorithm::Xorshift128Plus => Self::Xorshift128Plus(Xorshift128Plus::seeded(seed)),
        }
    }

    /// Which algorithm this generator runs.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Xorshift64Star(_) => Algorithm::Xorshift64Star,
            Self::Xorshift1024Star(_) => Algorithm::Xorshift1024Star,
            Self::Xorshift4096Star(_) => Algorithm::Xorshift4096Star,
            Self::Xorshift128Plus(_) => Algorithm::Xorshift128Plus,
        }
    }

    /// Re-initialize and re-seed in place. Afterwards the generator produces
    /// exactly what `Generator::new(self.algorithm(), seed)` would.
    pub fn reseed(&mut self, seed: u64) {
        match self {
            Self::Xorshift64Star(g) => reset(g, seed),
            Self::Xorshift1024Star(g) => reset(&mut **g, seed),
            Self::Xorshift4096Star(g) => reset(&mut **g, seed),
            Self::Xorshift128Plus(g) => reset(g, seed),
        }
    }

    /// Produce the next 64-bit output.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        match self {
            Self::Xorshift64Star(g) => g.next(),
            Self::Xorshift1024Star(g) => g.next(),
            Self::Xorshift4096Star(g) => g.next(),
            Self::Xorshift128Plus(g) => g.next(),
        }
    }

    /// Borrow this generator as an infinite sequence.
    pub fn sequence(&mut self) -> Sequence<&mut Self> {
        Sequence::new(self)
    }

    /// Turn this generator into an owned infinite sequence.
    pub fn into_sequence(self) -> Sequence<Self> {
        Sequence::new(self)
    }
}

impl AsMut<Generator> for Generator {
    fn as_mut(&mut self) -> &mut Generator {
        self
    }
}

fn reset<G: Xorshift>(generator: &mut G, seed: u64) {
    generator.init();
    generator.seed(seed);
}

impl rand::RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        Generator::next_u64(self) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Generator::next_u64(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst)
    }
}
