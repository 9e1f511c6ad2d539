//! The closed set of selectable generator algorithms.

use std::str::FromStr;

use crate::error::PrngError;

/// Identifier of one generator in the xorshift family.
///
/// Selection is by exact, case-sensitive name. There are exactly four
/// algorithms and the set does not grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Single-word generator; also the seed expander for the others.
    Xorshift64Star,
    /// 16-word state, period 2^1024 - 1.
    #[default]
    Xorshift1024Star,
    /// 64-word state, period 2^4096 - 1.
    Xorshift4096Star,
    /// Two-word state, period 2^128 - 1. Fastest, shortest period.
    Xorshift128Plus,
}

impl Algorithm {
    /// Every algorithm, in help-text order.
    pub const ALL: [Algorithm; 4] = [
        Self::Xorshift64Star,
        Self::Xorshift1024Star,
        Self::Xorshift4096Star,
        Self::Xorshift128Plus,
    ];

    /// The identifier accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Xorshift64Star => "xorshift64*",
            Self::Xorshift1024Star => "xorshift1024*",
            Self::Xorshift4096Star => "xorshift4096*",
            Self::Xorshift128Plus => "xorshift128+",
        }
    }

    /// Number of 64-bit words of generator state.
    pub fn state_words(self) -> usize {
        match self {
            Self::Xorshift64Star => 1,
            Self::Xorshift1024Star => 16,
            Self::Xorshift4096Star => 64,
            Self::Xorshift128Plus => 2,
        }
    }

    /// Base-2 exponent of the period (the period is `2^k - 1`).
    pub fn period_log2(self) -> u32 {
        (self.state_words() * 64) as u32
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PrngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| PrngError::UnknownAlgorithm(s.to_string()))
    }
}
