//! Scalar add-100 with checked overflow.

use crate::error::{Plus100Error, Result};

/// The amount added to every input.
pub const INCREMENT: u32 = 100;

/// Largest input whose sum still fits in a `u32`.
pub const MAX_INPUT: u32 = 4_294_967_195;

/// Returns `value + 100`.
///
/// Inputs above [`MAX_INPUT`] are rejected with [`Plus100Error::Overflow`];
/// the result is never wrapped or saturated.
#[inline]
pub const fn plus100(value: u32) -> Result<u32> {
    match value.checked_add(INCREMENT) {
        Some(sum) => Ok(sum),
        None => Err(Plus100Error::Overflow { value }),
    }
}
