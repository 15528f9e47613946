//! # sc-sim
//!
//! Deterministic "simulations" built on the Seedcast core: fractional
//! values, batches, identifiers, colors, dice, cards and other themed picks.
//!
//! Each simulation normalizes the seed from its [`SeedOptions`], computes a
//! single value with the core primitives, and either returns it or uses it
//! as an index into a fixed ordered table (see [`tables`]).
//!
//! ```rust
//! use sc_sim::{roll, zodiac, SeedOptions};
//!
//! let opts = SeedOptions::default();
//! assert_eq!(roll(6, &opts).unwrap(), 4);
//! assert_eq!(zodiac(&opts).unwrap(), "Taurus");
//! ```

mod casino;
mod cards;
mod dice;
mod ids;
mod numbers;
mod oracle;
pub mod tables;

pub use casino::*;
pub use cards::*;
pub use dice::*;
pub use ids::*;
pub use numbers::*;
pub use oracle::*;

pub use sc_core::{RawSeed, Seed, SeedError, SeedOptions};

use sc_core::digits::digit_sum;
use thiserror::Error;

/// Errors raised by simulations
#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error("Invalid dice notation: {0}")]
    InvalidDiceNotation(String),

    #[error("A die needs at least one side")]
    ZeroSides,

    #[error("Cannot choose from an empty list")]
    EmptyChoices,

    #[error("Length must be at least 1")]
    ZeroLength,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

pub type Result<T> = std::result::Result<T, SimError>;

/// Table index for `seed`: digit sum modulo the table length
pub(crate) fn table_index(seed: Seed, len: usize) -> usize {
    (digit_sum(seed) % len as u64) as usize
}

/// Seeded pick from a fixed table
pub(crate) fn pick<'a, T>(table: &'a [T], opts: &SeedOptions) -> Result<&'a T> {
    if table.is_empty() {
        return Err(SimError::EmptyChoices);
    }
    let seed = opts.seed()?;
    Ok(&table[table_index(seed, table.len())])
}
