//! Digit-level facts derived from a canonical seed

use serde::{Deserialize, Serialize};

use crate::Seed;

/// Decimal digits, most significant first
pub fn digits(seed: Seed) -> Vec<u8> {
    seed.get().to_string().bytes().map(|b| b - b'0').collect()
}

/// Number of decimal digits (always at least 1)
pub fn digit_count(seed: Seed) -> usize {
    seed.get().checked_ilog10().map_or(1, |l| l as usize + 1)
}

pub fn digit_sum(seed: Seed) -> u64 {
    digits(seed).iter().map(|&d| u64::from(d)).sum()
}

/// Product of all digits; any zero digit makes it 0
pub fn digit_product(seed: Seed) -> u64 {
    // 9^20 still fits in u64
    digits(seed).iter().map(|&d| u64::from(d)).product()
}

pub fn first_digit(seed: Seed) -> u8 {
    let mut v = seed.get();
    while v >= 10 {
        v /= 10;
    }
    v as u8
}

pub fn last_digit(seed: Seed) -> u8 {
    (seed.get() % 10) as u8
}

/// Value of the last `n` decimal digits.
///
/// Returns the seed itself when `n` covers every digit. Leading zeros of the
/// suffix vanish (the suffix "05" is 5), and `n == 0` yields 0.
pub fn last_n(seed: Seed, n: usize) -> u64 {
    if n >= digit_count(seed) {
        return seed.get();
    }
    seed.get() % 10u64.pow(n as u32)
}

/// Bundle of the scalar digit facts of one seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitFacts {
    pub seed: Seed,
    pub count: usize,
    pub sum: u64,
    pub product: u64,
    pub first: u8,
    pub last: u8,
}

impl DigitFacts {
    pub fn of(seed: Seed) -> Self {
        Self {
            seed,
            count: digit_count(seed),
            sum: digit_sum(seed),
            product: digit_product(seed),
            first: first_digit(seed),
            last: last_digit(seed),
        }
    }

    /// See [`last_n`]
    pub fn last_n(&self, n: usize) -> u64 {
        last_n(self.seed, n)
    }
}
