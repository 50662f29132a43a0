// =============================================================================
// Find-Last-Set
// =============================================================================
//
// fls(int), flsl(long), flsll(long long): 1-based index of the most
// significant set bit, 0 when the argument is 0. The argument's bit pattern is
// read as the same-width unsigned type, so a negative value reports the full
// width of its type.
//
// Each variant is compiled out by its `host-*` feature when the platform
// already supplies one with this contract.

#[allow(unused_imports)]
use core::ffi::{c_int, c_long, c_longlong, c_uint, c_ulong, c_ulonglong};

#[allow(unused_imports)]
use super::strategy::msb;

/// Find last (most significant) set bit of an `int`, 1-based, 0 if `x == 0`.
#[cfg(not(feature = "host-fls"))]
#[inline(always)]
pub const fn fls(x: c_int) -> c_int {
    msb(x as c_uint as u64) as c_int
}

/// Find last (most significant) set bit of a `long`, 1-based, 0 if `x == 0`.
#[cfg(not(feature = "host-flsl"))]
#[inline(always)]
pub const fn flsl(x: c_long) -> c_int {
    msb(x as c_ulong as u64) as c_int
}

/// Find last (most significant) set bit of a `long long`, 1-based, 0 if `x == 0`.
#[cfg(not(feature = "host-flsll"))]
#[inline(always)]
pub const fn flsll(x: c_longlong) -> c_int {
    msb(x as c_ulonglong as u64) as c_int
}
