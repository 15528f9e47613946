//! Error types for the Seedcast core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Seed must be absent, numeric or text, found {found}")]
    TypeMismatch { found: &'static str },

    #[error("Seed is not a finite number: {0}")]
    NonFinite(f64),

    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("Filled value with {digits} digits does not fit in u64")]
    DigitOverflow { digits: i64 },

    #[error("Digit count {requested} exceeds the limit of {max}")]
    DigitCountTooLarge { requested: i64, max: i64 },

    #[error("Invalid options document: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SeedError>;
