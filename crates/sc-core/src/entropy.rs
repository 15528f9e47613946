//! Non-deterministic seed source
//!
//! The only place in the crate that touches an entropy source. Nothing in
//! the deterministic engine calls it; callers feed its result back in as an
//! ordinary seed.

use rand::Rng;

/// Upper bound (inclusive) of [`random_seed`]
pub const RANDOM_SEED_MAX: u64 = 999_999_999;

/// Fresh seed from the thread-local OS-seeded generator, in `1..=RANDOM_SEED_MAX`
pub fn random_seed() -> u64 {
    rand::rng().random_range(1..=RANDOM_SEED_MAX)
}
