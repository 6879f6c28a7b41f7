//! Decimal-place policy and floating-point drift correction.
//!
//! Every value produced by the scoring pipeline is summed in `f64` and then
//! rounded to a fixed number of decimal places. Rounding after the sum removes
//! the representation drift that IEEE 754 accumulation leaves behind, so that
//! `0.5 + 8.7 + -4.0` (which is `5.199999999999999`) presents as `5.2`.
//!
//! # Clamping
//!
//! Precision values outside the representable range are clamped, never
//! rejected: anything above [`Precision::MAX_PLACES`] becomes
//! [`Precision::CLAMPED_PLACES`] and negative values become `0`.
//!
//! # Examples
//!
//! ```
//! use lexscore::precision::{Precision, correct_float, sum_values};
//!
//! assert_eq!(correct_float(5.199999999999999, Precision::SUM_DEFAULT), 5.2);
//! assert_eq!(sum_values([0.5, 8.7, -4.0], Precision::SUM_DEFAULT), 5.2);
//!
//! assert_eq!(Precision::new(42).places(), 14);
//! assert_eq!(Precision::new(-3).places(), 0);
//! ```

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

/// Number of decimal places a result is rounded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64")]
pub struct Precision(u32);

impl Precision {
    /// Default number of decimal places for lexical values.
    pub const DEFAULT: Precision = Precision(9);

    /// Default number of decimal places for plain value sums.
    pub const SUM_DEFAULT: Precision = Precision(10);

    /// Largest accepted number of decimal places.
    pub const MAX_PLACES: i64 = 20;

    /// Places used when the requested precision exceeds [`Self::MAX_PLACES`].
    pub const CLAMPED_PLACES: u32 = 14;

    /// Create a precision, clamping out-of-range values.
    pub fn new(places: i64) -> Self {
        if places > Self::MAX_PLACES {
            debug!(
                "precision {places} exceeds {}, clamping to {}",
                Self::MAX_PLACES,
                Self::CLAMPED_PLACES
            );
            Precision(Self::CLAMPED_PLACES)
        } else if places < 0 {
            debug!("precision {places} is negative, clamping to 0");
            Precision(0)
        } else {
            Precision(places as u32)
        }
    }

    /// Get the number of decimal places.
    pub fn places(self) -> u32 {
        self.0
    }

    /// Round a value to this precision.
    pub fn round(self, value: f64) -> f64 {
        round_to(value, self.0)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for Precision {
    fn from(places: i64) -> Self {
        Precision::new(places)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Largest magnitude at which every integer is exactly representable.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53

/// Round `value` to `places` decimal places, half away from zero.
///
/// Non-finite values are returned unchanged. When the scaled value no longer
/// fits the exact integer range of `f64`, rounding goes through the decimal
/// formatter instead, so high precisions never add digits of their own.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if scaled.abs() < EXACT_INTEGER_LIMIT {
        return scaled.round() / factor;
    }

    format!("{:.*}", places as usize, value)
        .parse::<f64>()
        .unwrap_or(value)
}

/// Correct accumulated floating-point drift by rounding to `precision`.
pub fn correct_float(value: f64, precision: Precision) -> f64 {
    precision.round(value)
}

/// Sum values and correct the result to `precision`.
pub fn sum_values<I>(values: I, precision: Precision) -> f64
where
    I: IntoIterator<Item = f64>,
{
    correct_float(values.into_iter().sum(), precision)
}

/// Round `value` to `digits` significant digits.
pub fn to_significant(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || value == 0.0 || digits == 0 {
        return value;
    }

    format!("{:.*e}", digits - 1, value)
        .parse::<f64>()
        .unwrap_or(value)
}
