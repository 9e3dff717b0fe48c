// SPDX-License-Identifier: AGPL-3.0-only

//! Harmonic partial sums by direct ascending accumulation.
//!
//! Summation order is part of the contract: terms are added in ascending
//! index order, so repeated evaluations (and the recurrence
//! H(n) = H(n−1) + 1/n) reproduce bit-identical results. Test baselines
//! are pinned against this exact fold.

/// Sum of 1/i for i in the inclusive range [start, end].
///
/// Returns 0.0 when `start` is 0, `end` is 0, or `start > end` — a
/// defensive no-op rather than an error, so callers can pass degenerate
/// bounds without guarding.
pub fn harmonic_sum_range(start: u64, end: u64) -> f64 {
    if start == 0 || end == 0 || start > end {
        return 0.0;
    }

    let mut sum = 0.0_f64;
    for i in start..=end {
        sum += 1.0 / i as f64;
    }
    sum
}

/// Sum of 1/i for i in [1, n]: the n-th harmonic number H(n).
pub fn harmonic_sum(n: u64) -> f64 {
    harmonic_sum_range(1, n)
}
