// SPDX-License-Identifier: AGPL-3.0-only

//! Threshold search: refine the estimator's guess to the exact crossing.
//!
//! One full summation seeds the running sum at the initial guess N0;
//! afterwards every move is incremental (subtract or add a single term),
//! preserving the invariant `sum == H(n)` at each step boundary. The
//! downward walk removes terms while the sum still exceeds the threshold
//! within tolerance; a final upward walk enforces the strict-inequality
//! contract for the two cases the downward pass alone cannot settle:
//! H(n) equal to the threshold exactly, and an initial guess that
//! undershot the crossing.
//!
//! The search is a pure function of its inputs: no module state, no
//! console output. Diagnostics flow through a caller-supplied observer.

use crate::estimate::initial_guess;
use crate::series::harmonic_sum;
use crate::tolerances::DELTA;
use serde::Serialize;

/// Tuning for the threshold search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Termination tolerance for the downward walk: keep stepping while
    /// `sum - m > -delta`. See [`crate::tolerances::DELTA`].
    pub delta: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { delta: DELTA }
    }
}

/// One refinement step, emitted to the observer before the step applies.
#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    /// Candidate series length at this step.
    pub guess: u64,
    /// Running sum H(guess).
    pub sum: f64,
    /// |m − sum|.
    pub diff: f64,
    /// guess / e^m — converges on e^(−γ) ≈ 0.5615 as m grows.
    pub ratio: f64,
}

/// Outcome of a threshold search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Minimal n with H(n) > m (strictly).
    pub n: u64,
    /// H(n), maintained incrementally from the seed summation.
    pub sum: f64,
    /// Refinement steps taken (downward + upward), excluding the seed.
    pub steps: u64,
    /// The estimator's guess the walk started from.
    pub initial_guess: u64,
}

/// Find the minimal n with H(n) > m, discarding step diagnostics.
pub fn threshold_search(m: f64, config: &SearchConfig) -> SearchResult {
    threshold_search_observed(m, config, |_| {})
}

/// Find the minimal n with H(n) > m, reporting each refinement step to
/// `observe` before it applies.
///
/// `m` must be ≥ 0 and finite (enforced at the CLI boundary); the search
/// itself cannot fail — both walks are bounded — though accuracy degrades
/// silently past the M ≈ 22 f64 boundary.
pub fn threshold_search_observed(
    m: f64,
    config: &SearchConfig,
    mut observe: impl FnMut(&StepRecord),
) -> SearchResult {
    let n0 = initial_guess(m);
    let em = m.exp();

    let mut n = n0;
    let mut sum = harmonic_sum(n);
    let mut steps = 0_u64;

    // Downward: drop the top term while the sum exceeds m within delta.
    while (sum - m) > -config.delta && n > 0 {
        observe(&StepRecord {
            guess: n,
            sum,
            diff: (m - sum).abs(),
            ratio: n as f64 / em,
        });
        sum -= 1.0 / n as f64;
        n -= 1;
        steps += 1;
    }

    // Candidate crossing: one above the last guess whose sum fell to or
    // below m. Restores the invariant sum == H(n).
    n += 1;
    sum += 1.0 / n as f64;

    // Upward: enforce strict inequality. Covers H(n) == m exactly (the
    // tolerance window above treats equality as exceeding) and a guess
    // that started below the crossing.
    while sum <= m {
        observe(&StepRecord {
            guess: n,
            sum,
            diff: (m - sum).abs(),
            ratio: n as f64 / em,
        });
        n += 1;
        sum += 1.0 / n as f64;
        steps += 1;
    }

    SearchResult {
        n,
        sum,
        steps,
        initial_guess: n0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::harmonic_sum;
    use crate::tolerances::EXACT_F64;
    use approx::assert_relative_eq;

    #[test]
    fn trivial_threshold_crosses_at_one() {
        let r = threshold_search(0.0, &SearchConfig::default());
        assert_eq!(r.n, 1);
        assert_eq!(r.sum, 1.0);
    }

    #[test]
    fn exact_equality_requires_strict_excess() {
        // H(1) = 1.0 exactly: n = 1 does not strictly exceed 1.0.
        let r = threshold_search(1.0, &SearchConfig::default());
        assert_eq!(r.n, 2);
        assert_eq!(r.sum, 1.5);

        // H(2) = 1.5 exactly.
        let r = threshold_search(1.5, &SearchConfig::default());
        assert_eq!(r.n, 3);
    }

    #[test]
    fn undershooting_guess_is_corrected_upward() {
        // The calibrated guess for M = 4 is 30, one below the crossing.
        let r = threshold_search(4.0, &SearchConfig::default());
        assert_eq!(r.initial_guess, 30);
        assert_eq!(r.n, 31);
    }

    #[test]
    fn incremental_sum_matches_fresh_summation() {
        for m in [0.0, 0.7, 2.0, 3.3, 5.0, 6.5, 8.0] {
            let r = threshold_search(m, &SearchConfig::default());
            assert_relative_eq!(r.sum, harmonic_sum(r.n), max_relative = EXACT_F64);
        }
    }

    #[test]
    fn observer_sees_one_step_moves() {
        for m in [1.0, 4.0, 6.0, 8.0] {
            let mut guesses = Vec::new();
            let r = threshold_search_observed(m, &SearchConfig::default(), |step| {
                guesses.push(step.guess);
            });
            assert_eq!(guesses.len() as u64, r.steps, "step count for M = {m}");
            for pair in guesses.windows(2) {
                // Adjacent records differ by one guess, except at the
                // down-to-up turnaround where the same guess is re-examined.
                let moved = pair[1].abs_diff(pair[0]);
                assert!(moved <= 1, "guess jumped at M = {m}: {pair:?}");
            }
        }
    }

    #[test]
    fn observer_invariant_sum_equals_harmonic_of_guess() {
        threshold_search_observed(5.0, &SearchConfig::default(), |step| {
            assert_relative_eq!(
                step.sum,
                harmonic_sum(step.guess),
                max_relative = EXACT_F64
            );
        });
    }

    #[test]
    fn result_is_insensitive_to_delta() {
        // The upward correction makes the answer independent of the
        // downward tolerance; a loose delta only costs extra steps.
        let tight = SearchConfig { delta: 1e-12 };
        let loose = SearchConfig { delta: 0.5 };
        for m in [0.0, 1.0, 2.0, 3.0, 5.0, 7.5] {
            let a = threshold_search(m, &tight);
            let b = threshold_search(m, &loose);
            assert_eq!(a.n, b.n, "delta changed the crossing for M = {m}");
            assert!(b.steps >= a.steps);
        }
    }
}
