//! # sc-core
//!
//! Seed normalization and digit-derivation engine for Seedcast.
//!
//! Every operation is a pure function of its seed and parameters:
//!
//! 1. [`normalize`] turns a [`RawSeed`] into a canonical [`Seed`]
//! 2. [`digits`] derives digit facts from it
//! 3. [`fill`] expands it to an exact digit count
//! 4. [`select_in_range`] picks a bounded value by candidate priority
//!
//! ## Example
//!
//! ```rust
//! use sc_core::{generate, range, SeedOptions};
//!
//! let opts = SeedOptions::default();
//! assert_eq!(generate(3, &opts).unwrap(), 814);
//! assert_eq!(range(1, 100, &opts).unwrap(), 14);
//! ```

pub mod digits;
pub mod entropy;
mod error;
pub mod fill;
pub mod options;
pub mod range;
pub mod seed;

pub use digits::DigitFacts;
pub use entropy::random_seed;
pub use error::*;
pub use fill::{fill, fill_digits, MAX_FILL_DIGITS};
pub use options::{DEFAULT_DIGITS, SeedOptions};
pub use range::{priority_candidates, select_in_range};
pub use seed::{DEFAULT_SEED, RawSeed, Seed, normalize, text_hash};

/// Value with `digits` digits for the seed in `opts`; 0 when `digits <= 0`
pub fn generate(digits: i64, opts: &SeedOptions) -> Result<u64> {
    fill(opts.seed()?, digits)
}

/// [`generate`] with [`DEFAULT_DIGITS`]
pub fn generate_default(opts: &SeedOptions) -> Result<u64> {
    generate(DEFAULT_DIGITS, opts)
}

/// Value in `[min, max]` for the seed in `opts`
pub fn range(min: i64, max: i64, opts: &SeedOptions) -> Result<i64> {
    select_in_range(opts.seed()?, min, max)
}

/// Seed for position `index` of a batch: `seed + index * digit_product(seed)`,
/// renormalized. Arithmetic wraps.
///
/// Seeds containing a zero digit have a zero product, so every position
/// shares the base seed.
pub fn sub_seed(seed: Seed, index: u64) -> Seed {
    let step = digits::digit_product(seed).wrapping_mul(index);
    Seed::new(seed.get().wrapping_add(step))
}
