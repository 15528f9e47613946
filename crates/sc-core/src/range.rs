//! Priority range selection
//!
//! Picks a value inside `[min, max]` that looks derived from the seed: the
//! first fitting candidate of a fixed priority list wins, and plain modulo
//! is only the fallback.

use crate::digits::{digit_count, digits, first_digit, last_digit, last_n};
use crate::{Result, Seed, SeedError};

/// Ordered candidates for `seed`.
///
/// Full seed, then shrinking suffixes down to two digits, then first digit,
/// last digit, and the middle digits left to right. Seed 814 gives
/// `[814, 14, 8, 4, 1]`.
pub fn priority_candidates(seed: Seed) -> Vec<u64> {
    let len = digit_count(seed);
    let mut out = Vec::with_capacity(len * 2 + 1);

    out.push(seed.get());
    for n in (2..len).rev() {
        out.push(last_n(seed, n));
    }
    out.push(u64::from(first_digit(seed)));
    out.push(u64::from(last_digit(seed)));

    let ds = digits(seed);
    if ds.len() > 2 {
        out.extend(ds[1..ds.len() - 1].iter().map(|&d| u64::from(d)));
    }
    out
}

/// Deterministically pick a value in `[min, max]`
pub fn select_in_range(seed: Seed, min: i64, max: i64) -> Result<i64> {
    if min > max {
        return Err(SeedError::InvalidRange { min, max });
    }

    let hit = priority_candidates(seed)
        .into_iter()
        .filter_map(|c| i64::try_from(c).ok())
        .find(|c| (min..=max).contains(c));
    if let Some(value) = hit {
        return Ok(value);
    }

    let span = i128::from(max) - i128::from(min) + 1;
    let value = i128::from(min) + i128::from(seed.get()) % span;
    log::debug!("no candidate of {} in [{}, {}], modulo gives {}", seed, min, max, value);
    // min <= value <= max, so the cast is lossless
    Ok(value as i64)
}
