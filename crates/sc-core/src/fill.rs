//! Digit-fill expansion
//!
//! Produces a value with a requested number of digits from a seed by
//! truncating it (fewer digits) or repeating it (more digits).
//!
//! Suffixes come from [`last_n`], so a suffix that starts with a zero loses
//! it: seed 105 filled to 2 digits is 5, and filled to 5 digits is 1055.
//! Outputs stay compatible with other implementations of the same scheme,
//! so this is kept rather than zero-padded.

use crate::digits::{digit_count, first_digit, last_n};
use crate::{Result, Seed, SeedError};

/// Longest string [`fill_digits`] will build
pub const MAX_FILL_DIGITS: i64 = 1 << 16;

/// Most digits a `u64` can hold
const U64_DIGITS: i64 = 20;

/// Decimal string of the filled value; `"0"` for `count <= 0`.
///
/// Counts above [`MAX_FILL_DIGITS`] are refused before anything is allocated.
pub fn fill_digits(seed: Seed, count: i64) -> Result<String> {
    if count <= 0 {
        return Ok("0".to_string());
    }
    if count > MAX_FILL_DIGITS {
        return Err(SeedError::DigitCountTooLarge {
            requested: count,
            max: MAX_FILL_DIGITS,
        });
    }
    let count = count as usize;
    let seed_len = digit_count(seed);

    if count < seed_len {
        return Ok(tail(seed, count));
    }
    if count == seed_len {
        return Ok(seed.to_string());
    }

    let whole = seed.to_string().repeat(count / seed_len);
    Ok(match count % seed_len {
        0 => whole,
        rem => whole + &tail(seed, rem),
    })
}

/// Filled value as an integer.
///
/// Counts past 20 digits never fit and are refused up front; a 20-digit
/// fill fails only if it exceeds `u64::MAX`.
pub fn fill(seed: Seed, count: i64) -> Result<u64> {
    if count > U64_DIGITS {
        return Err(SeedError::DigitOverflow { digits: count });
    }
    let digits = fill_digits(seed, count)?;
    digits.parse().map_err(|_| SeedError::DigitOverflow {
        digits: digits.len() as i64,
    })
}

fn tail(seed: Seed, len: usize) -> String {
    if len == 1 {
        first_digit(seed).to_string()
    } else {
        last_n(seed, len).to_string()
    }
}
