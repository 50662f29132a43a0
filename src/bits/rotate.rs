// =============================================================================
// Fixed-Width Rotation
// =============================================================================
//
// One entry point per width so a value is never silently widened, truncated
// or sign-extended on its way through the rotate. Arguments are evaluated
// exactly once.
//
// The textbook formula `(v << s) | (v >> (W - s))` shifts by the full width
// when `s == 0`, which is an overflowing shift. Here the amount is reduced
// modulo `W` first and a zero amount returns `v` untouched, so `rol(v, 0)`,
// `rol(v, W)` and every `ror` built on top of them are well defined.

use core::ffi::c_int;

/// Reduces a rotate amount into `[0, width)`.
///
/// Euclidean remainder, so negative amounts rotate in the opposite direction.
#[inline(always)]
const fn reduce(s: c_int, width: c_int) -> u32 {
    s.rem_euclid(width) as u32
}

/// Rotate 16-bit value to the left by `s` bits.
///
/// `s` is taken modulo 16; a reduced amount of 0 returns `v`.
#[inline(always)]
pub const fn rol16(v: u16, s: c_int) -> u16 {
    let s = reduce(s, 16);
    if s == 0 {
        return v;
    }
    (v << s) | (v >> (16 - s))
}

/// Rotate 32-bit value to the left by `s` bits.
///
/// `s` is taken modulo 32; a reduced amount of 0 returns `v`.
#[inline(always)]
pub const fn rol32(v: u32, s: c_int) -> u32 {
    let s = reduce(s, 32);
    if s == 0 {
        return v;
    }
    (v << s) | (v >> (32 - s))
}

/// Rotate 64-bit value to the left by `s` bits.
///
/// `s` is taken modulo 64; a reduced amount of 0 returns `v`.
#[inline(always)]
pub const fn rol64(v: u64, s: c_int) -> u64 {
    let s = reduce(s, 64);
    if s == 0 {
        return v;
    }
    (v << s) | (v >> (64 - s))
}

// Right rotation is a left rotation by `W - s`. The subtraction wraps in
// `c_int`; every width divides 2^c_int::BITS, so the wrapped amount is still
// congruent to `W - s` modulo `W`.

/// Rotate 16-bit value to the right by `s` bits.
#[inline(always)]
pub const fn ror16(v: u16, s: c_int) -> u16 {
    rol16(v, (16 as c_int).wrapping_sub(s))
}

/// Rotate 32-bit value to the right by `s` bits.
#[inline(always)]
pub const fn ror32(v: u32, s: c_int) -> u32 {
    rol32(v, (32 as c_int).wrapping_sub(s))
}

/// Rotate 64-bit value to the right by `s` bits.
#[inline(always)]
pub const fn ror64(v: u64, s: c_int) -> u64 {
    rol64(v, (64 as c_int).wrapping_sub(s))
}
