// =============================================================================
// C ABI Exports
// =============================================================================
//
// Unmangled `extern "C"` symbols for linking the primitives into a C host:
//
//   int      is_power_of_2(int n);
//   uint16_t rol16(uint16_t v, int s);    uint16_t ror16(uint16_t v, int s);
//   uint32_t rol32(uint32_t v, int s);    uint32_t ror32(uint32_t v, int s);
//   uint64_t rol64(uint64_t v, int s);    uint64_t ror64(uint64_t v, int s);
//   int      fls(int x);
//   int      flsl(long x);
//   int      flsll(long long x);
//
// A host whose libc already exports fls/flsl/flsll (the BSDs, macOS) must
// enable the matching `host-*` feature, otherwise the link sees the symbol
// twice.

use core::ffi::c_int;
#[cfg(not(feature = "host-flsl"))]
use core::ffi::c_long;
#[cfg(not(feature = "host-flsll"))]
use core::ffi::c_longlong;

use crate::bits;

/// C export of [`bits::is_power_of_2`]; returns 1 or 0.
#[no_mangle]
pub extern "C" fn is_power_of_2(n: c_int) -> c_int {
    bits::is_power_of_2(n) as c_int
}

/// C export of [`bits::rol16`].
#[no_mangle]
pub extern "C" fn rol16(v: u16, s: c_int) -> u16 {
    bits::rol16(v, s)
}

/// C export of [`bits::rol32`].
#[no_mangle]
pub extern "C" fn rol32(v: u32, s: c_int) -> u32 {
    bits::rol32(v, s)
}

/// C export of [`bits::rol64`].
#[no_mangle]
pub extern "C" fn rol64(v: u64, s: c_int) -> u64 {
    bits::rol64(v, s)
}

/// C export of [`bits::ror16`].
#[no_mangle]
pub extern "C" fn ror16(v: u16, s: c_int) -> u16 {
    bits::ror16(v, s)
}

/// C export of [`bits::ror32`].
#[no_mangle]
pub extern "C" fn ror32(v: u32, s: c_int) -> u32 {
    bits::ror32(v, s)
}

/// C export of [`bits::ror64`].
#[no_mangle]
pub extern "C" fn ror64(v: u64, s: c_int) -> u64 {
    bits::ror64(v, s)
}

/// C export of [`bits::fls`].
#[cfg(not(feature = "host-fls"))]
#[no_mangle]
pub extern "C" fn fls(x: c_int) -> c_int {
    bits::fls(x)
}

/// C export of [`bits::flsl`].
#[cfg(not(feature = "host-flsl"))]
#[no_mangle]
pub extern "C" fn flsl(x: c_long) -> c_int {
    bits::flsl(x)
}

/// C export of [`bits::flsll`].
#[cfg(not(feature = "host-flsll"))]
#[no_mangle]
pub extern "C" fn flsll(x: c_longlong) -> c_int {
    bits::flsll(x)
}
