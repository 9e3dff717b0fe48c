// SPDX-License-Identifier: AGPL-3.0-only

//! Typed errors and input validation for the CLI boundary.
//!
//! A proper enum instead of `Result<_, String>` so callers can
//! pattern-match on failure modes (bad literal, negative threshold)
//! rather than parsing opaque strings. All variants are detected before
//! any computation runs; the search itself is infallible.

use std::fmt;

/// Errors arising from threshold input validation.
#[derive(Debug, Clone, PartialEq)]
pub enum HseriesError {
    /// Input string is not a fully-valid finite real number (trailing
    /// characters, empty, inf, or NaN).
    InvalidNumber(String),

    /// Parsed threshold is negative; the harmonic sum never drops below
    /// zero, so no crossing exists in the intended sense.
    NegativeThreshold(f64),
}

impl fmt::Display for HseriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumber(input) => {
                write!(f, "Invalid input: {input:?} is not a real number")
            }
            Self::NegativeThreshold(m) => {
                write!(f, "Number must be greater than or equal to zero (got {m})")
            }
        }
    }
}

impl std::error::Error for HseriesError {}

/// Parse a threshold argument: full f64 syntax (decimal and exponent
/// notation), surrounding whitespace tolerated, must be finite and ≥ 0.
pub fn parse_threshold(input: &str) -> Result<f64, HseriesError> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| HseriesError::InvalidNumber(input.to_string()))?;

    if !value.is_finite() {
        return Err(HseriesError::InvalidNumber(input.to_string()));
    }
    if value < 0.0 {
        return Err(HseriesError::NegativeThreshold(value));
    }
    Ok(value)
}
