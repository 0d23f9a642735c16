//! Three-component fixed-point vector.
//!
//! Same contract as [`crate::FixedVec2`] with a `z` axis.

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

/// 3D vector with raw components scaled by [`crate::SCALE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FixedVec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl FixedVec3 {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn from_floats(x: f64, y: f64, z: f64) -> Self {
        Self::new(float_to_fixed(x), float_to_fixed(y), float_to_fixed(z))
    }

    pub fn try_from_floats(x: f64, y: f64, z: f64) -> Result<Self> {
        Ok(Self::new(
            try_float_to_fixed(x)?,
            try_float_to_fixed(y)?,
            try_float_to_fixed(z)?,
        ))
    }

    pub const fn from_raw(raw: [i32; 3]) -> Self {
        Self::new(raw[0], raw[1], raw[2])
    }

    pub const fn to_raw(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn to_floats(self) -> (f64, f64, f64) {
        (
            fixed_to_float(self.x),
            fixed_to_float(self.y),
            fixed_to_float(self.z),
        )
    }

    pub fn delta(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(other.x),
            self.y.wrapping_sub(other.y),
            self.z.wrapping_sub(other.z),
        )
    }

    pub fn is_equal(self, other: Self) -> bool {
        self == other
    }

    pub fn squared_distance(self, other: Self) -> i64 {
        squared_distance_raw(self.to_raw(), other.to_raw())
    }

    /// Distance in scaled units; see [`crate::FixedVec2::distance_to`].
    pub fn distance_to(self, other: Self) -> i32 {
        distance_from_squared(self.squared_distance(other))
    }

    pub fn debug_string(self) -> String {
        format!("[FixedVec3 fixed {}, {}, {}]", self.x, self.y, self.z)
    }
}

impl Sub for FixedVec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.delta(rhs)
    }
}

impl Spatial for FixedVec3 {
    type Squared = i64;
    type Distance = i32;

    fn squared_distance(self, other: Self) -> i64 {
        FixedVec3::squared_distance(self, other)
    }

    fn distance_to(self, other: Self) -> i32 {
        FixedVec3::distance_to(self, other)
    }
}

impl fmt::Display for FixedVec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x, y, z) = self.to_floats();
        write!(f, "[FixedVec3 {x:9.2}, {y:9.2}, {z:9.2}]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_forms() {
        let v = FixedVec3::from_floats(1.5, -2.25, 0.0);
        assert_eq!(v, FixedVec3::new(1500, -2250, 0));
        assert_eq!(v.to_string(), "[FixedVec3      1.50,     -2.25,      0.00]");
        assert_eq!(v.debug_string(), "[FixedVec3 fixed 1500, -2250, 0]");
    }

    #[test]
    fn distance_in_scaled_units() {
        let a = FixedVec3::new(1000, 2000, 2000);
        assert_eq!(a.squared_distance(FixedVec3::ZERO), 9_000_000);
        assert_eq!(a.distance_to(FixedVec3::ZERO), 3000);
        assert_eq!(FixedVec3::ZERO.distance_to(a), 3000);
    }

    #[test]
    fn large_world_does_not_overflow() {
        let a = FixedVec3::new(-100_000_000, -100_000_000, -100_000_000);
        let b = FixedVec3::new(100_000_000, 100_000_000, 100_000_000);
        assert_eq!(a.squared_distance(b), 120_000_000_000_000_000);
        assert_eq!(a.squared_distance(b), b.squared_distance(a));
    }

    #[test]
    fn delta_and_equality() {
        let a = FixedVec3::from_floats(1.0, 2.0, 3.0);
        let b = FixedVec3::from_floats(0.5, 0.5, 0.5);
        assert_eq!(a.delta(b), FixedVec3::new(500, 1500, 2500));
        assert_eq!(a - b, a.delta(b));
        assert!(a.is_equal(FixedVec3::new(1000, 2000, 3000)));
        assert!(!a.is_equal(b));
        assert_eq!(a.is_equal(b), b.is_equal(a));
    }

    #[test]
    fn raw_array_roundtrip() {
        let v = FixedVec3::new(7, -8, 9);
        assert_eq!(FixedVec3::from_raw(v.to_raw()), v);
    }

    #[test]
    fn zero_self_distance() {
        let v = FixedVec3::new(i32::MAX, i32::MIN, 0);
        assert_eq!(v.squared_distance(v), 0);
        assert_eq!(v.distance_to(v), 0);
    }
}
