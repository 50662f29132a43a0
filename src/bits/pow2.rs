// =============================================================================
// Power-of-Two Test
// =============================================================================

use core::ffi::c_int;

/// Checks if `n` is strictly positive and has exactly one bit set.
///
/// Subtracting one from a power of two clears its single set bit and sets
/// every bit below it, so `n & (n - 1)` is zero only for powers of two and
/// for zero. Zero and negative values are rejected by the sign check, which
/// also keeps `n - 1` from overflowing at `c_int::MIN`.
#[inline(always)]
pub const fn is_power_of_2(n: c_int) -> bool {
    n > 0 && (n & (n - 1)) == 0
}
