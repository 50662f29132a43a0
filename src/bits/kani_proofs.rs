//! Kani formal verification proofs for the bit primitives.
//!
//! These proofs cover every input of the rotate family and the find-last-set
//! kernels, including the shift amounts that overflow the naive formulas.
//!
//! Run with: `cargo kani` (or `cargo xtask kani`)

use core::ffi::c_int;

use super::pow2::is_power_of_2;
use super::rotate::{rol16, rol32, rol64, ror16, ror32, ror64};
use super::strategy::{msb_leading_zeros, msb_scan};

// ============================================================================
// Proof 1: is_power_of_2 matches popcount
// ============================================================================
// What: is_power_of_2(n) <=> n > 0 && popcount(n) == 1
// Why: n - 1 must never overflow and zero/negatives must be rejected

/// Verify the `n & (n - 1)` test agrees with a population count.
#[kani::proof]
fn verify_is_power_of_2_matches_popcount() {
    let n: c_int = kani::any();
    let expected = n > 0 && n.count_ones() == 1;
    kani::assert(is_power_of_2(n) == expected, "power-of-two test must match popcount");
}

// ============================================================================
// Proof 2: rotations never overflow and match core
// ============================================================================
// What: rol/ror agree with rotate_left/rotate_right for every amount
// Why: the zero-amount case shifts by the full width in the naive formula

/// Verify 16-bit rotations for any value and amount.
#[kani::proof]
fn verify_rotate16_matches_core() {
    let v: u16 = kani::any();
    let s: c_int = kani::any();
    let r = s.rem_euclid(16) as u32;
    kani::assert(rol16(v, s) == v.rotate_left(r), "rol16 must match rotate_left");
    kani::assert(ror16(v, s) == v.rotate_right(r), "ror16 must match rotate_right");
}

/// Verify 32-bit rotations for any value and amount.
#[kani::proof]
fn verify_rotate32_matches_core() {
    let v: u32 = kani::any();
    let s: c_int = kani::any();
    let r = s.rem_euclid(32) as u32;
    kani::assert(rol32(v, s) == v.rotate_left(r), "rol32 must match rotate_left");
    kani::assert(ror32(v, s) == v.rotate_right(r), "ror32 must match rotate_right");
}

/// Verify 64-bit rotations for any value and amount.
#[kani::proof]
fn verify_rotate64_matches_core() {
    let v: u64 = kani::any();
    let s: c_int = kani::any();
    let r = s.rem_euclid(64) as u32;
    kani::assert(rol64(v, s) == v.rotate_left(r), "rol64 must match rotate_left");
    kani::assert(ror64(v, s) == v.rotate_right(r), "ror64 must match rotate_right");
}

// ============================================================================
// Proof 3: find-last-set strategies agree
// ============================================================================
// What: msb_scan(x) == msb_leading_zeros(x) and the bit it names is the top one
// Why: the portable build must be a drop-in for the intrinsic build

/// Verify both msb kernels agree and name the highest set bit.
#[kani::proof]
#[kani::unwind(65)] // 63 shifts max plus loop exit
fn verify_msb_strategies_agree() {
    let x: u64 = kani::any();
    let lz = msb_leading_zeros(x);

    kani::assert(msb_scan(x) == lz, "scan and leading_zeros must agree");
    kani::assert(lz <= 64, "msb must fit the width");
    if x != 0 {
        kani::assert((x >> (lz - 1)) == 1, "msb must name the highest set bit");
    }
}
