//! Distance contract shared by every vector family.

use std::fmt::Debug;

/// A point type that can measure how far it is from another of its kind.
///
/// Both fixed-point arities report in scaled units (`i64` squared, `i32`
/// distance); [`crate::Vec3`] reports plain `f32`. `Default` is the zero
/// distance.
pub trait Spatial: Copy + Debug {
    /// Unit of [`Spatial::squared_distance`].
    type Squared: Copy + Default + PartialEq + PartialOrd + Debug;
    /// Unit of [`Spatial::distance_to`].
    type Distance: Copy + Default + PartialEq + PartialOrd + Debug;

    /// Sum of squared per-axis differences.
    fn squared_distance(self, other: Self) -> Self::Squared;

    /// Euclidean distance.
    fn distance_to(self, other: Self) -> Self::Distance;
}
