//! Scalar add-100 across the C boundary.

use crate::arith::{self, MAX_INPUT};
use crate::error::{P100_ERR_NULL, P100_OK};

/// Adds 100 to `value` and writes the sum to `out`.
///
/// # Safety
/// - `out` must be a valid, writable pointer to a `u32`, or null
///
/// # Returns
/// 0 on success, 1 if `out` is null, 2 if `value + 100` overflows.
/// `*out` is only written on success.
#[no_mangle]
pub unsafe extern "C" fn plus100(value: u32, out: *mut u32) -> i32 {
    if out.is_null() {
        log::debug!("plus100: null output pointer");
        return P100_ERR_NULL;
    }

    match arith::plus100(value) {
        Ok(sum) => {
            *out = sum;
            P100_OK
        }
        Err(err) => {
            log::debug!("plus100: {err}");
            err.status()
        }
    }
}

/// Largest input `plus100` accepts (4294967195).
#[no_mangle]
pub extern "C" fn plus100_max_input() -> u32 {
    MAX_INPUT
}
