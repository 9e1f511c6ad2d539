//! # prng-core
//!
//! **Fast, reproducible 64-bit pseudo-random streams from the xorshift family.**
//!
//! Four generators share one lifecycle (initialize, seed, produce next):
//!
//! | Algorithm       | State     | Period        |
//! |-----------------|-----------|---------------|
//! | `xorshift64*`   | 1 word    | 2^64 - 1      |
//! | `xorshift1024*` | 16 words  | 2^1024 - 1    |
//! | `xorshift4096*` | 64 words  | 2^4096 - 1    |
//! | `xorshift128+`  | 2 words   | 2^128 - 1     |
//!
//! The sequence is fully determined by the algorithm and a single `u64` seed.
//! The multi-word generators expand their seed with `xorshift64*`.
//!
//! These generators are **not** cryptographically secure.
//!
//! ## Quick Start
//!
//! ```
//! use prng_core::{Algorithm, Generator};
//!
//! let algorithm: Algorithm = "xorshift128+".parse().unwrap();
//! let generator = Generator::new(algorithm, 1);
//!
//! let first: Vec<u64> = generator.into_sequence().take(2).collect();
//! assert_eq!(first, [0x75bf966008e7f6eb, 0x003ff9f818cfc033]);
//! ```
//!
//! ## Architecture
//!
//! Algorithm → Generator (seeded) → Sequence (infinite iterator) → drive() → Sink
//!
//! The [`Sequence`] never terminates on its own; callers stop pulling when
//! they are done. [`drive`] is the loop that forwards values to a [`Sink`]
//! and stops on a limit, a stop flag, or the first sink error.

pub mod algorithm;
pub mod error;
pub mod generator;
pub mod seed;
pub mod sequence;
pub mod xorshift;

pub use algorithm::Algorithm;
pub use error::PrngError;
pub use generator::Generator;
pub use seed::{SeedSource, clock_seed, parse_seed};
pub use sequence::{Sequence, Sink, drive};
pub use xorshift::{
    Xorshift, Xorshift64Star, Xorshift128Plus, Xorshift1024Star, Xorshift4096Star, XorshiftStar,
};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
