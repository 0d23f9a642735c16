//! `fixvec_core`
//!
//! Small immutable vector value types for spatial checks in a deterministic
//! simulation.
//!
//! Design goals:
//! - Fixed-point components (raw `i32` scaled by [`fixed::SCALE`]) so that
//!   distance and equality agree bit-for-bit on every machine.
//! - Conversion to/from floats only at the edges (rendering, tooling).
//! - A plain `f32` [`Vec3`] for call sites that do not need determinism.
//! - No `unsafe`, no logging, no panics in the arithmetic.

pub mod error;
pub mod fixed;
pub mod float3;
pub mod spatial;
pub mod vector2;
pub mod vector3;

pub use error::{FixedError, Result};
pub use fixed::{fixed_to_float, float_to_fixed, try_float_to_fixed, SCALE};
pub use float3::Vec3;
pub use spatial::Spatial;
pub use vector2::FixedVec2;
pub use vector3::FixedVec3;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::fixed::*;
    pub use crate::float3::*;
    pub use crate::spatial::*;
    pub use crate::vector2::*;
    pub use crate::vector3::*;
}
