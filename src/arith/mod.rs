//! Core arithmetic.
//!
//! The pure Rust add-100. The FFI layer in `ffi/` calls into this and turns
//! its `Result` into a status code.

pub mod scalar;

pub use scalar::{plus100, INCREMENT, MAX_INPUT};
