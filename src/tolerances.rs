// SPDX-License-Identifier: AGPL-3.0-only

//! Centralized tolerances and calibration constants.
//!
//! Every tuned constant used by the estimator, the search loop, and the
//! test suite is defined here with its origin and rationale. No ad-hoc
//! magic numbers at use sites.

// ═══════════════════════════════════════════════════════════════════
// Search loop
// ═══════════════════════════════════════════════════════════════════

/// Termination tolerance for the downward refinement walk.
///
/// Absorbs representable-value noise in the running sum so the walk does
/// not stop a step early (or oscillate at the boundary) when the sum sits
/// within rounding distance of the threshold. 1e-9 is ~10⁶ ULPs at
/// sum ≈ 20 — far above accumulated summation error, far below the gap
/// 1/N between consecutive partial sums anywhere in the usable range.
pub const DELTA: f64 = 1e-9;

// ═══════════════════════════════════════════════════════════════════
// Estimator calibration
// ═══════════════════════════════════════════════════════════════════

/// Euler–Mascheroni constant γ.
///
/// H(N) − ln N → γ as N → ∞; underlies the estimator's asymptotic
/// inversion N ≈ e^(M−γ).
pub const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_9;

/// Asymptotic limit of N/e^M as M → ∞, equal to e^(−γ).
pub const ASYMPTOTIC_RATIO: f64 = 0.561_459_483_566_885_1;

/// Correction-ratio bands for the initial guess: (lower bound on M, ratio),
/// scanned top band down; the catch-all band is unbounded below.
///
/// Each constant sits slightly above e^(−γ) so that floor(e^M · ratio)
/// lands at or just above the true crossing point and the downward walk
/// stays short. Empirical fits inherited from the original hseries
/// calibration runs; copied verbatim, not re-derived.
pub const RATIO_BANDS: [(f64, f64); 6] = [
    (20.0, 0.561_459_5),
    (18.0, 0.561_459_6),
    (16.0, 0.561_46),
    (12.0, 0.561_47),
    (9.0, 0.561_8),
    (f64::NEG_INFINITY, 0.564),
];

// ═══════════════════════════════════════════════════════════════════
// Test-side comparison tolerances
// ═══════════════════════════════════════════════════════════════════

/// Relative tolerance for comparing an incrementally-maintained sum
/// against a fresh ascending summation.
///
/// The search performs at most a handful of subtract/re-add steps on top
/// of the full sum; each contributes ≤ 1 ULP (~2e-16 relative), so 1e-12
/// is conservative.
pub const EXACT_F64: f64 = 1e-12;

/// Relative tolerance for pinned regression baselines quoted to 10
/// decimal digits (e.g. H(83) = 5.0020682727).
pub const REGRESSION_REL: f64 = 1e-9;
