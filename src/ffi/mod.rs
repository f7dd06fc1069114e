//! The exported C ABI.
//!
//! A bare `u32` return has no room for an overflow signal, so the exported
//! `plus100` reports a status code and writes the sum through an
//! out-pointer. The declarations in `include/plus100.h` are generated from
//! this module by cbindgen at build time.

pub mod scalar;

pub use scalar::{plus100, plus100_max_input};
