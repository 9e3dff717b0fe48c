// SPDX-License-Identifier: AGPL-3.0-only

//! Initial guess for the crossing point via the asymptotic expansion.
//!
//! H(N) ≈ ln N + γ, so the crossing of threshold M sits near N = e^(M−γ).
//! The estimator computes floor(e^M · ratio(M)) where ratio(M) comes from
//! the banded calibration table in [`crate::tolerances::RATIO_BANDS`]:
//! each band's constant sits slightly above e^(−γ) so the guess tends to
//! land at or just above the true crossing and the refinement walk stays
//! short.

use crate::tolerances::{ASYMPTOTIC_RATIO, RATIO_BANDS};

/// Correction ratio for threshold `m`: the constant of the highest band
/// whose lower bound `m` meets.
///
/// The catch-all band is unbounded below, so the scan is total for any
/// non-NaN input; NaN (rejected upstream) falls back to the asymptotic
/// limit.
pub fn guess_ratio(m: f64) -> f64 {
    RATIO_BANDS
        .iter()
        .find(|&&(lower, _)| m >= lower)
        .map_or(ASYMPTOTIC_RATIO, |&(_, ratio)| ratio)
}

/// Initial guess N0 = floor(e^m · ratio(m)).
///
/// The truncating cast saturates at the u64 bounds; with f64 arithmetic
/// the result is only meaningful up to M ≈ 22 (N ≈ 2×10⁹), the crate's
/// documented accuracy boundary. Returns 0 when the product truncates to
/// 0 (M ≲ 0.57).
pub fn initial_guess(m: f64) -> u64 {
    (m.exp() * guess_ratio(m)) as u64
}
