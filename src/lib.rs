//! plus100 - Add 100 to a u32 across a native-binding boundary
//!
//! The Rust API is [`plus100`]`(u32) -> Result<u32>`. Over the C ABI the
//! value-returning `plus100(u32) -> u32` form is replaced by
//! `int32_t plus100(uint32_t value, uint32_t *out)`: the sum goes to `*out`
//! and the return value is a status code, see [`ffi::plus100`].
//!
//! Inputs above [`MAX_INPUT`] (4294967195) are rejected as an overflow rather
//! than wrapped or saturated: Rust callers get [`Plus100Error`], C callers get
//! status code 2.

pub mod arith;
pub mod error;
pub mod ffi;

pub use arith::{plus100, INCREMENT, MAX_INPUT};
pub use error::{Plus100Error, Result, P100_ERR_NULL, P100_ERR_OVERFLOW, P100_OK};
