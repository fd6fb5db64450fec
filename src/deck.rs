//! Seeded deck shuffling.

use rand::RngCore;

use crate::card::{Card, DECK_SIZE, default_deck};

/// A 128-bit PCG generator with the DXSM output function.
///
/// The state advances with the full 128-bit LCG multiplier before each
/// output, and the output mixes the high half of the new state with its low
/// half. Two 64-bit seeds fully determine the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcg {
    hi: u64,
    lo: u64,
}

impl Pcg {
    const MUL: u128 = 0x2360_ed05_1fc6_5da4_4385_df64_9fcc_f645;
    const INC: u128 = 0x5851_f42d_4c95_7f2d_1405_7b7e_f767_814f;
    const CHEAP_MUL: u64 = 0xda94_2042_e4dd_58b5;

    /// Creates a generator whose state is `(seed1 << 64) | seed2`.
    #[must_use]
    pub const fn new(seed1: u64, seed2: u64) -> Self {
        Self {
            hi: seed1,
            lo: seed2,
        }
    }

    fn step(&mut self) {
        let state = ((u128::from(self.hi) << 64) | u128::from(self.lo))
            .wrapping_mul(Self::MUL)
            .wrapping_add(Self::INC);
        self.hi = (state >> 64) as u64;
        self.lo = state as u64;
    }
}

impl RngCore for Pcg {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step();
        let mut hi = self.hi;
        hi ^= hi >> 32;
        hi = hi.wrapping_mul(Self::CHEAP_MUL);
        hi ^= hi >> 48;
        hi.wrapping_mul(self.lo | 1)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Draws a uniform value in `0..n` using multiply-shift rejection.
///
/// Powers of two are masked directly. `n` must be non-zero.
fn bounded<R: RngCore + ?Sized>(rng: &mut R, n: u64) -> u64 {
    if n & (n - 1) == 0 {
        return rng.next_u64() & (n - 1);
    }
    let mut product = u128::from(rng.next_u64()) * u128::from(n);
    if (product as u64) < n {
        let threshold = n.wrapping_neg() % n;
        while (product as u64) < threshold {
            product = u128::from(rng.next_u64()) * u128::from(n);
        }
    }
    (product >> 64) as u64
}

/// Shuffles `cards` in place, walking from the back (Fisher-Yates).
pub fn shuffle<T, R: RngCore + ?Sized>(cards: &mut [T], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = bounded(rng, i as u64 + 1) as usize;
        cards.swap(i, j);
    }
}

/// Returns a permutation of the full deck.
///
/// Non-zero seeds always yield the same permutation. If either seed is zero
/// both are replaced with fresh random values.
#[must_use]
pub fn shuffled_deck(seed1: u64, seed2: u64) -> [Card; DECK_SIZE] {
    let (seed1, seed2) = if seed1 == 0 || seed2 == 0 {
        (rand::random(), rand::random())
    } else {
        (seed1, seed2)
    };
    let mut rng = Pcg::new(seed1, seed2);
    let mut deck = default_deck();
    shuffle(&mut deck, &mut rng);
    deck
}
