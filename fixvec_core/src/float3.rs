//! Plain floating-point 3D vector.
//!
//! For call sites that do not need determinism. No scaling, no equality
//! beyond the derived `PartialEq`, no delta.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::spatial::Spatial;

/// 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn squared_distance(self, other: Self) -> f32 {
        let xd = other.x - self.x;
        let yd = other.y - self.y;
        let zd = other.z - self.z;
        xd * xd + yd * yd + zd * zd
    }

    pub fn distance_to(self, other: Self) -> f32 {
        f64::from(self.squared_distance(other)).sqrt() as f32
    }
}

impl Spatial for Vec3 {
    type Squared = f32;
    type Distance = f32;

    fn squared_distance(self, other: Self) -> f32 {
        Vec3::squared_distance(self, other)
    }

    fn distance_to(self, other: Self) -> f32 {
        Vec3::distance_to(self, other)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Vec3 {:.2}, {:.2}, {:.2}]", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_distance() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert_eq!(a.squared_distance(b), 25.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
        assert_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn vec3_display() {
        assert_eq!(
            Vec3::new(1.5, -2.25, 0.0).to_string(),
            "[Vec3 1.50, -2.25, 0.00]"
        );
    }
}
