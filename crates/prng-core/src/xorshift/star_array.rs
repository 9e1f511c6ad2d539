//! xorshift1024* and xorshift4096*: array state walked by a cursor.
//!
//! Both generators share one algorithm and differ only in array length, shift
//! triple, and output multiplier, so they are a single const-generic type.

use rand::{RngCore, SeedableRng};

use super::{Xorshift, Xorshift64Star};

/// Array-state xorshift* generator.
///
/// `N` words of state, shift triple `(A, B, C)` and odd multiplier `M`. The
/// cursor always indexes the word that produced the previous output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorshiftStar<const N: usize, const A: u32, const B: u32, const C: u32, const M: u64> {
    state: [u64; N],
    cursor: usize,
}

/// xorshift1024*: 16 words, period 2^1024 - 1. The recommended default.
pub type Xorshift1024Star = XorshiftStar<16, 31, 11, 30, 1181783497276652981>;

/// xorshift4096*: 64 words, period 2^4096 - 1.
pub type Xorshift4096Star = XorshiftStar<64, 25, 3, 49, 8372773778140471301>;

impl<const N: usize, const A: u32, const B: u32, const C: u32, const M: u64>
    XorshiftStar<N, A, B, C, M>
{
    /// Current state array.
    pub fn state(&self) -> &[u64; N] {
        &self.state
    }

    /// Index of the most recently written state word.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

// `[u64; N]: Default` only exists for N <= 32.
impl<const N: usize, const A: u32, const B: u32, const C: u32, const M: u64> Default
    for XorshiftStar<N, A, B, C, M>
{
    fn default() -> Self {
        Self {
            state: [0; N],
            cursor: 0,
        }
    }
}

impl<const N: usize, const A: u32, const B: u32, const C: u32, const M: u64> Xorshift
    for XorshiftStar<N, A, B, C, M>
{
    fn init(&mut self) {
        self.cursor = 0;
    }

    /// Fill the array from a fresh xorshift64* seeded with `seed`, last index
    /// first. The fill order is part of the output contract.
    fn seed(&mut self, seed: u64) {
        let mut mixer = Xorshift64Star::seeded(seed);
        for word in self.state.iter_mut().rev() {
            *word = mixer.next();
        }
    }

    fn next(&mut self) -> u64 {
        let mut s0 = self.state[self.cursor];
        self.cursor = (self.cursor + 1) % N;
        let mut s1 = self.state[self.cursor];
        s1 ^= s1 << A;
        s1 ^= s1 >> B;
        s0 ^= s0 >> C;
        let mixed = s0 ^ s1;
        self.state[self.cursor] = mixed;
        mixed.wrapping_mul(M)
    }
}

impl<const N: usize, const A: u32, const B: u32, const C: u32, const M: u64> RngCore
    for XorshiftStar<N, A, B, C, M>
{
    fn next_u32(&mut self) -> u32 {
        Xorshift::next(self) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Xorshift::next(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst)
    }
}

impl<const N: usize, const A: u32, const B: u32, const C: u32, const M: u64> SeedableRng
    for XorshiftStar<N, A, B, C, M>
{
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seeded(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}
