//! Report generation for fuzzing results

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::harness::FuzzResult;

/// Fuzzing report for multiple targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuzzReport {
    /// Report title
    pub title: String,

    /// Individual target results
    pub results: Vec<TargetResult>,

    /// Total statistics
    pub summary: FuzzSummary,
}

/// Result for a single fuzz target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetResult {
    pub name: String,
    pub result: FuzzResult,
}

/// Summary statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FuzzSummary {
    pub total_targets: usize,
    pub passed_targets: usize,
    pub failed_targets: usize,
    pub total_iterations: usize,
    pub total_failures: usize,
    pub total_panics: usize,
    pub total_duration_ms: u64,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Markdown,
}

impl FuzzReport {
    /// Create a new report
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            results: Vec::new(),
            summary: FuzzSummary::default(),
        }
    }

    /// Add a target result
    pub fn add_result(&mut self, name: impl Into<String>, result: FuzzResult) {
        self.summary.total_targets += 1;
        if result.passed {
            self.summary.passed_targets += 1;
        } else {
            self.summary.failed_targets += 1;
        }
        self.summary.total_iterations += result.iterations;
        self.summary.total_failures += result.failures;
        self.summary.total_panics += result.panics;
        self.summary.total_duration_ms += result.duration_ms;

        self.results.push(TargetResult {
            name: name.into(),
            result,
        });
    }

    /// Check if all targets passed
    pub fn all_passed(&self) -> bool {
        self.summary.failed_targets == 0
    }

    /// Generate text report
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", self.title));
        output.push_str(&format!("{}\n\n", "=".repeat(self.title.chars().count())));

        output.push_str("Summary:\n");
        output.push_str(&format!(
            "  Targets: {} total, {} passed, {} failed\n",
            self.summary.total_targets, self.summary.passed_targets, self.summary.failed_targets
        ));
        output.push_str(&format!(
            "  Iterations: {} total, {} failures, {} panics\n",
            self.summary.total_iterations, self.summary.total_failures, self.summary.total_panics
        ));
        output.push_str(&format!("  Duration: {} ms\n\n", self.summary.total_duration_ms));

        output.push_str("Results:\n");
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for target in &self.results {
            let status = if target.result.passed { "PASS" } else { "FAIL" };
            output.push_str(&format!("[{}] {}\n", status, target.name));
            output.push_str(&format!("    {}\n", target.result.summary()));

            let details = &target.result.failure_details;
            if !details.is_empty() {
                output.push_str("    Failures:\n");
                for (i, failure) in details.iter().take(5).enumerate() {
                    output.push_str(&format!(
                        "      {}. {:?} at iteration {}: {}\n",
                        i + 1,
                        failure.failure_type,
                        failure.iteration,
                        failure.description
                    ));
                    output.push_str(&format!("         Input: {}\n", failure.input));
                }
                if details.len() > 5 {
                    output.push_str(&format!("      ... and {} more failures\n", details.len() - 5));
                }
            }
            output.push('\n');
        }

        output
    }

    /// Generate JSON report
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".into())
    }

    /// Generate markdown report
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", self.title));

        let status = if self.all_passed() { "PASS" } else { "FAIL" };
        output.push_str(&format!("## Status: {}\n\n", status));

        output.push_str("| Target | Status | Iterations | Failures | Pass Rate | Fuzz Seed |\n");
        output.push_str("|--------|--------|------------|----------|-----------|-----------|\n");
        for target in &self.results {
            let r = &target.result;
            output.push_str(&format!(
                "| {} | {} | {} | {} | {:.1}% | {} |\n",
                target.name,
                if r.passed { "PASS" } else { "FAIL" },
                r.iterations,
                r.failures,
                r.pass_rate() * 100.0,
                r.seed
            ));
        }
        output.push('\n');

        let failed: Vec<_> = self.results.iter().filter(|t| !t.result.passed).collect();
        if !failed.is_empty() {
            output.push_str("## Failed Targets\n\n");
            for target in failed {
                output.push_str(&format!("### {}\n\n", target.name));
                for failure in target.result.failure_details.iter().take(10) {
                    output.push_str(&format!(
                        "- **{:?}** at iteration {}: {}\n  - Input: `{}`\n",
                        failure.failure_type, failure.iteration, failure.description, failure.input
                    ));
                }
                output.push('\n');
            }
        }

        output
    }

    /// Save report to file
    pub fn save<P: AsRef<Path>>(&self, path: P, format: ReportFormat) -> crate::Result<()> {
        let content = match format {
            ReportFormat::Text => self.to_text(),
            ReportFormat::Json => self.to_json(),
            ReportFormat::Markdown => self.to_markdown(),
        };
        fs::write(path.as_ref(), content)?;
        log::info!("Saved fuzz report to {:?}", path.as_ref());
        Ok(())
    }
}
