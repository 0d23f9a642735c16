//! Two-component fixed-point vector.

use std::{fmt, ops::Sub};

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    fixed::{
        distance_from_squared, fixed_to_float, float_to_fixed, squared_distance_raw,
        try_float_to_fixed,
    },
    spatial::Spatial,
};

/// 2D vector with raw components scaled by [`crate::SCALE`].
///
/// Equality is exact on the raw integers: two float inputs that truncate to
/// the same raw value compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedVec2 {
    pub x: i32,
    pub y: i32,
}

impl FixedVec2 {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Builds a vector from raw scaled components, stored as-is.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Builds a vector from real values via [`float_to_fixed`].
    pub fn from_floats(x: f64, y: f64) -> Self {
        Self::new(float_to_fixed(x), float_to_fixed(y))
    }

    /// Like [`FixedVec2::from_floats`], but fails instead of saturating.
    pub fn try_from_floats(x: f64, y: f64) -> Result<Self> {
        Ok(Self::new(try_float_to_fixed(x)?, try_float_to_fixed(y)?))
    }

    pub const fn from_raw(raw: [i32; 2]) -> Self {
        Self::new(raw[0], raw[1])
    }

    pub const fn to_raw(self) -> [i32; 2] {
        [self.x, self.y]
    }

    /// Real-valued components.
    pub fn to_floats(self) -> (f64, f64) {
        (fixed_to_float(self.x), fixed_to_float(self.y))
    }

    /// Component-wise `self - other` on the raw values (wrapping).
    pub fn delta(self, other: Self) -> Self {
        Self::new(self.x.wrapping_sub(other.x), self.y.wrapping_sub(other.y))
    }

    /// Exact raw comparison. Same as `==`.
    pub fn is_equal(self, other: Self) -> bool {
        self == other
    }

    /// Squared Euclidean distance in squared scaled units.
    pub fn squared_distance(self, other: Self) -> i64 {
        squared_distance_raw(self.to_raw(), other.to_raw())
    }

    /// Euclidean distance, truncated, in scaled units.
    ///
    /// The result is NOT converted back to real units: `(0,0)` to
    /// `(3000,4000)` is `5000`. Apply [`fixed_to_float`] for a real distance.
    pub fn distance_to(self, other: Self) -> i32 {
        distance_from_squared(self.squared_distance(other))
    }

    /// Raw scaled components, e.g. `[FixedVec2 fixed 1500, -2250]`.
    pub fn debug_string(self) -> String {
        format!("[FixedVec2 fixed {}, {}]", self.x, self.y)
    }
}

impl Sub for FixedVec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.delta(rhs)
    }
}

impl Spatial for FixedVec2 {
    type Squared = i64;
    type Distance = i32;

    fn squared_distance(self, other: Self) -> i64 {
        FixedVec2::squared_distance(self, other)
    }

    fn distance_to(self, other: Self) -> i32 {
        FixedVec2::distance_to(self, other)
    }
}

impl fmt::Display for FixedVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y) = self.to_floats();
        write!(f, "[FixedVec2 {x:9.2}, {y:9.2}]")
    }
}
