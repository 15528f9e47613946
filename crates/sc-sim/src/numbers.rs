//! Fractional values and batches

use sc_core::{fill, fill_digits, sub_seed};

use crate::{Result, SeedOptions, SimError};

/// Decimal places produced by [`float_default`]
pub const DEFAULT_DECIMALS: i64 = 6;

/// Fraction in `[0, 1)` whose decimals are the seed filled to `decimals` digits.
///
/// `decimals <= 0` gives 0.0. Past ~17 decimals the value is limited by f64
/// precision, not by the fill.
pub fn float(decimals: i64, opts: &SeedOptions) -> Result<f64> {
    if decimals <= 0 {
        return Ok(0.0);
    }
    let seed = opts.seed()?;
    let text = format!("0.{}", fill_digits(seed, decimals)?);
    text.parse()
        .map_err(|e| SimError::InvalidNumber(format!("{text}: {e}")))
}

pub fn float_default(opts: &SeedOptions) -> Result<f64> {
    float(DEFAULT_DECIMALS, opts)
}

/// `len` values of `digits` digits each; element `i` uses the batch sub-seed for `i`
pub fn array(len: usize, digits: i64, opts: &SeedOptions) -> Result<Vec<u64>> {
    if len == 0 {
        return Err(SimError::ZeroLength);
    }
    let seed = opts.seed()?;
    (0..len as u64)
        .map(|i| fill(sub_seed(seed, i), digits).map_err(SimError::from))
        .collect()
}
