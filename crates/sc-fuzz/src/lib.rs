//! # sc-fuzz
//!
//! Seed-input fuzzing for the Seedcast engine.
//!
//! ## Features
//!
//! - **Adversarial seeds**: absent, zero, extreme, fractional, non-finite and unicode inputs
//! - **Reproducible runs**: the input stream is a ChaCha8 sequence keyed by one fuzz seed
//! - **Panic capture**: a panicking target is recorded, not fatal
//! - **Property checks**: validators turn invariants into failures
//! - **Reports**: text, JSON and Markdown summaries
//!
//! ## Example
//!
//! ```rust
//! use sc_fuzz::{FuzzConfig, FuzzRunner};
//!
//! let runner = FuzzRunner::new(FuzzConfig::minimal().with_seed(7));
//! let result = runner.fuzz_seeds(|raw| sc_core::normalize(&raw).map(|s| s.get()));
//! assert!(result.passed);
//! ```

pub mod config;
pub mod generators;
pub mod harness;
pub mod report;

pub use config::FuzzConfig;
pub use generators::SeedInputGenerator;
pub use harness::{FailureType, FuzzFailure, FuzzResult, FuzzRunner};
pub use report::{FuzzReport, ReportFormat};

use thiserror::Error;

/// Errors that can occur while fuzzing or reporting
#[derive(Error, Debug)]
pub enum FuzzError {
    #[error("Fuzzing panic: {0}")]
    Panic(String),

    #[error("Invalid output: {0}")]
    InvalidOutput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FuzzError>;
