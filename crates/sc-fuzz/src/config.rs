//! Fuzzing configuration

use serde::{Deserialize, Serialize};

/// Configuration for fuzzing runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzConfig {
    /// Number of fuzzing iterations
    pub iterations: usize,

    /// Fuzz seed for reproducibility (None = drawn from entropy)
    pub seed: Option<u64>,

    /// Longest generated text seed, in characters
    pub max_text_len: usize,

    /// Largest digit count handed to fill-style targets
    pub max_digits: i64,

    /// Whether to continue after first failure
    pub continue_on_failure: bool,

    /// Maximum failures before stopping
    pub max_failures: usize,

    /// Include edge cases (absent, zero, extremes, NaN, unicode)
    pub include_edge_cases: bool,

    /// Include text seeds
    pub include_text: bool,

    /// Verbosity level (0-3)
    pub verbosity: u8,
}

impl Default for FuzzConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000,
            seed: None,
            max_text_len: 32,
            max_digits: 19,
            continue_on_failure: true,
            max_failures: 100,
            include_edge_cases: true,
            include_text: true,
            verbosity: 1,
        }
    }
}

impl FuzzConfig {
    /// Quick config for CI
    pub fn ci() -> Self {
        Self {
            iterations: 1000,
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Exhaustive config for local runs
    pub fn exhaustive() -> Self {
        Self {
            iterations: 1_000_000,
            max_text_len: 256,
            verbosity: 2,
            ..Default::default()
        }
    }

    /// Minimal config for sanity checks
    pub fn minimal() -> Self {
        Self {
            iterations: 100,
            ..Default::default()
        }
    }

    /// Builder: set iterations
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Builder: set seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder: set longest text seed
    pub fn with_max_text_len(mut self, len: usize) -> Self {
        self.max_text_len = len;
        self
    }

    /// Builder: set largest digit count
    pub fn with_max_digits(mut self, digits: i64) -> Self {
        self.max_digits = digits;
        self
    }

    /// Builder: toggle edge cases
    pub fn with_edge_cases(mut self, include: bool) -> Self {
        self.include_edge_cases = include;
        self
    }

    /// Builder: set verbosity
    pub fn with_verbosity(mut self, level: u8) -> Self {
        self.verbosity = level;
        self
    }

    /// Builder: continue on failure
    pub fn continue_after_failures(mut self, cont: bool) -> Self {
        self.continue_on_failure = cont;
        self
    }
}
