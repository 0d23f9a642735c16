//! Fixed-point scalar conversion.
//!
//! A raw component `c` represents the real value `c / SCALE`. The scale is a
//! protocol constant: anything that stores or transmits raw components must
//! agree on it.
//!
//! Conversion policy:
//! - [`float_to_fixed`] truncates toward zero (`0.0015 -> 1`, `-0.0015 -> -1`,
//!   `±0.0009 -> 0`). It never rounds to nearest.
//! - Keeping `|f * SCALE|` inside the `i32` range is the caller's job. Out of
//!   range input is not signaled: the cast saturates to `i32::MIN`/`i32::MAX`
//!   and NaN becomes 0. Use [`try_float_to_fixed`] to have it checked.
//! - `fixed_to_float(float_to_fixed(f))` is within `1 / SCALE` of `f`, not
//!   bit-identical.

use crate::error::{FixedError, Result};

/// Fixed-point factor relating a raw component to its real value.
pub const SCALE: i32 = 1000;

const SCALE_F64: f64 = SCALE as f64;

/// Converts a real value to a raw fixed-point component, truncating toward zero.
#[inline]
pub fn float_to_fixed(f: f64) -> i32 {
    (f * SCALE_F64) as i32
}

/// Converts a raw fixed-point component back to a real value.
#[inline]
pub fn fixed_to_float(v: i32) -> f64 {
    f64::from(v) / SCALE_F64
}

/// Checked [`float_to_fixed`]: rejects non-finite input and values whose
/// truncated scaled form does not fit in an `i32`.
pub fn try_float_to_fixed(f: f64) -> Result<i32> {
    if !f.is_finite() {
        return Err(FixedError::NotFinite(f));
    }
    let scaled = (f * SCALE_F64).trunc();
    if scaled < f64::from(i32::MIN) || scaled > f64::from(i32::MAX) {
        return Err(FixedError::OutOfRange(f));
    }
    Ok(scaled as i32)
}

/// Sum of squared per-axis differences of two raw component arrays.
///
/// Each component is widened to `i64` before subtracting. Squares and the sum
/// wrap on `i64` overflow, which needs per-axis gaps above ~2^31.5.
pub fn squared_distance_raw<const N: usize>(a: [i32; N], b: [i32; N]) -> i64 {
    a.iter().zip(b.iter()).fold(0i64, |acc, (&a, &b)| {
        let d = i64::from(b) - i64::from(a);
        acc.wrapping_add(d.wrapping_mul(d))
    })
}

/// Truncated square root of a squared distance, still in scaled units.
///
/// A wrapped (negative) input yields 0.
#[inline]
pub fn distance_from_squared(squared: i64) -> i32 {
    (squared as f64).sqrt() as i32
}
