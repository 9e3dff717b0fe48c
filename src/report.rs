// SPDX-License-Identifier: AGPL-3.0-only

//! Result presentation: classic console format and JSON report.

use crate::search::SearchResult;
use serde::Serialize;

/// Machine-readable summary of one threshold search run.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdReport {
    /// The threshold M the search was run against.
    pub threshold: f64,
    /// Minimal n with H(n) > threshold.
    pub n: u64,
    /// H(n).
    pub sum: f64,
    /// Refinement steps taken after the seed summation.
    pub steps: u64,
    /// The estimator's initial guess.
    pub initial_guess: u64,
}

impl ThresholdReport {
    pub fn new(threshold: f64, result: &SearchResult) -> Self {
        Self {
            threshold,
            n: result.n,
            sum: result.sum,
            steps: result.steps,
            initial_guess: result.initial_guess,
        }
    }

    /// Pretty-printed JSON, for `--json` consumers.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Print the two classic result lines, 8 decimal digits.
pub fn print_report(report: &ThresholdReport) {
    println!(
        "Sum(1/n, 1, N) > {:.8}, when N >= {}",
        report.threshold, report.n
    );
    println!();
    println!("Sum(1/n, 1, {}) ~ {:.8}", report.n, report.sum);
}
