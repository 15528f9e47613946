//! Fuzzing harness and runner

use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use rand::Rng;
use sc_core::RawSeed;
use serde::{Deserialize, Serialize};

use crate::config::FuzzConfig;
use crate::generators::SeedInputGenerator;
use crate::FuzzError;

/// Result of a fuzzing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzResult {
    /// Total iterations run
    pub iterations: usize,

    /// Number of successful iterations
    pub successes: usize,

    /// Number of failures
    pub failures: usize,

    /// Number of panics caught
    pub panics: usize,

    /// Total duration
    pub duration_ms: u64,

    /// Fuzz seed used; rerunning with it replays the same inputs
    pub seed: u64,

    /// List of failures with details
    pub failure_details: Vec<FuzzFailure>,

    /// Whether all iterations passed
    pub passed: bool,
}

/// Details of a fuzzing failure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzFailure {
    /// Iteration number when failure occurred
    pub iteration: usize,

    /// Type of failure
    pub failure_type: FailureType,

    /// Description of the failure
    pub description: String,

    /// Input that caused the failure (debug form)
    pub input: String,
}

/// Type of fuzzing failure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FailureType {
    Panic,
    InvalidOutput,
}

/// Main fuzzing runner
pub struct FuzzRunner {
    config: FuzzConfig,
}

impl FuzzRunner {
    /// Create a new fuzzing runner
    pub fn new(config: FuzzConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FuzzConfig {
        &self.config
    }

    /// Fuzz with raw seed inputs
    pub fn fuzz_seeds<F, R>(&self, target: F) -> FuzzResult
    where
        F: Fn(RawSeed) -> R + panic::RefUnwindSafe,
    {
        self.fuzz_with_validation(|inputs| inputs.raw_seed(), target, |_, _| Ok(()))
    }

    /// Fuzz with custom input generator
    pub fn fuzz_custom<I, F, G, R>(&self, input_gen: G, target: F) -> FuzzResult
    where
        I: std::fmt::Debug + Clone,
        G: FnMut(&mut SeedInputGenerator) -> I,
        F: Fn(I) -> R + panic::RefUnwindSafe,
    {
        self.fuzz_with_validation(input_gen, target, |_, _| Ok(()))
    }

    /// Fuzz with output validation
    pub fn fuzz_with_validation<I, O, F, G, V>(
        &self,
        mut input_gen: G,
        target: F,
        validator: V,
    ) -> FuzzResult
    where
        I: std::fmt::Debug + Clone,
        G: FnMut(&mut SeedInputGenerator) -> I,
        F: Fn(I) -> O + panic::RefUnwindSafe,
        V: Fn(&I, &O) -> Result<(), String>,
    {
        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        let mut inputs = SeedInputGenerator::new(seed, self.config.max_text_len)
            .with_edge_cases(self.config.include_edge_cases)
            .with_text(self.config.include_text)
            .with_max_digits(self.config.max_digits);

        let mut successes = 0;
        let mut failures = 0;
        let mut panics = 0;
        let mut failure_details = Vec::new();

        let start = Instant::now();

        for iteration in 0..self.config.iterations {
            if !self.config.continue_on_failure && failures > 0 {
                break;
            }
            if failure_details.len() >= self.config.max_failures {
                break;
            }

            let input = input_gen(&mut inputs);
            let input_str = format!("{:?}", input);
            let input_clone = input.clone();

            let result = panic::catch_unwind(AssertUnwindSafe(|| target(input)));

            let (failure_type, description) = match result {
                Ok(output) => match validator(&input_clone, &output) {
                    Ok(()) => {
                        successes += 1;
                        continue;
                    }
                    Err(reason) => (FailureType::InvalidOutput, reason),
                },
                Err(panic_info) => {
                    panics += 1;
                    let description = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    (FailureType::Panic, description)
                }
            };

            failures += 1;
            if self.config.verbosity >= 1 {
                log::warn!(
                    "{:?} at iteration {} (fuzz seed {}): {} <- {}",
                    failure_type,
                    iteration,
                    seed,
                    description,
                    input_str
                );
            }
            failure_details.push(FuzzFailure {
                iteration,
                failure_type,
                description,
                input: input_str,
            });
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        FuzzResult {
            iterations: successes + failures,
            successes,
            failures,
            panics,
            duration_ms,
            seed,
            failure_details,
            passed: failures == 0,
        }
    }
}

impl FuzzResult {
    /// First failure as an error, for `?`-style callers
    pub fn into_result(self) -> crate::Result<Self> {
        let Some(first) = self.failure_details.first().cloned() else {
            return Ok(self);
        };
        Err(match first.failure_type {
            FailureType::Panic => FuzzError::Panic(first.description),
            FailureType::InvalidOutput => FuzzError::InvalidOutput(first.description),
        })
    }

    /// Get pass rate
    pub fn pass_rate(&self) -> f64 {
        if self.iterations == 0 {
            1.0
        } else {
            self.successes as f64 / self.iterations as f64
        }
    }

    /// Get summary string
    pub fn summary(&self) -> String {
        format!(
            "{} - {} iterations, {} failures ({:.2}% pass rate) in {}ms, fuzz seed {}",
            if self.passed { "PASS" } else { "FAIL" },
            self.iterations,
            self.failures,
            self.pass_rate() * 100.0,
            self.duration_ms,
            self.seed
        )
    }
}
