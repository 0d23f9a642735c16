//! Error types.

use thiserror::Error;

/// Errors reported by the checked float-to-fixed conversion.
///
/// The unchecked conversion never produces these; it saturates instead.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FixedError {
    /// Input was NaN or infinite.
    #[error("value {0} is not finite")]
    NotFinite(f64),

    /// Input scaled by the fixed-point factor does not fit in an `i32`.
    #[error("value {0} is out of fixed-point range (|x * 1000| must fit in i32)")]
    OutOfRange(f64),
}

pub type Result<T> = std::result::Result<T, FixedError>;
