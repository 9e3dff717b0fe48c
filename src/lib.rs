// SPDX-License-Identifier: AGPL-3.0-only

//! hseries — harmonic series threshold search.
//!
//! Finds the smallest integer N such that H(N) = 1 + 1/2 + ... + 1/N
//! strictly exceeds a given threshold M. An asymptotic estimator
//! (H(N) ≈ ln N + γ, inverted to N ≈ e^(M−γ)) seeds an initial guess near
//! the crossing point; an incremental refiner then walks the guess to the
//! exact minimal N, maintaining the running sum one term at a time instead
//! of re-summing.
//!
//! ## Modules
//!   - `series` — ascending-order harmonic partial sums
//!   - `estimate` — initial guess via e^M and a banded correction ratio
//!   - `search` — refinement walk to the exact crossing point
//!   - `tolerances` — calibration constants and tolerances with rationale
//!   - `error` — typed input validation for the CLI boundary
//!   - `report` — console and JSON result presentation
//!
//! ## Binaries
//!   - `hseries` — CLI: `hseries <NUMBER> [--verbose] [--json] [--delta=X]`
//!
//! ## Accuracy boundary
//!
//! All arithmetic is native f64. Around M ≈ 22 the crossing point passes
//! 2×10⁹ and the full initial summation dominates runtime; beyond that the
//! estimator's e^M and the accumulated summation error erode accuracy
//! silently. This is a documented boundary of the native-float design,
//! not an error condition.

pub mod error;
pub mod estimate;
pub mod report;
pub mod search;
pub mod series;
pub mod tolerances;
