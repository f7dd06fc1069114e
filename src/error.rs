//! Error type for the plus100 operation and its C status-code mapping.

use thiserror::Error;

use crate::arith::{INCREMENT, MAX_INPUT};

/// Status code: success.
pub const P100_OK: i32 = 0;
/// Status code: a required pointer was null.
pub const P100_ERR_NULL: i32 = 1;
/// Status code: `value + 100` does not fit in a `u32`.
pub const P100_ERR_OVERFLOW: i32 = 2;

/// Result type for plus100 operations
pub type Result<T> = std::result::Result<T, Plus100Error>;

/// Errors that can occur when adding 100
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plus100Error {
    #[error("{value} + {} overflows u32 (largest accepted input is {})", INCREMENT, MAX_INPUT)]
    Overflow { value: u32 },
}

impl Plus100Error {
    /// The C status code reported for this error across the FFI boundary.
    pub fn status(&self) -> i32 {
        match self {
            Plus100Error::Overflow { .. } => P100_ERR_OVERFLOW,
        }
    }
}
