//! Property-based tests for the bitprim primitives.
//!
//! Uses proptest to verify algebraic properties of the rotations and the
//! find-last-set family across random inputs and shift amounts.

use core::ffi::c_int;

use proptest::prelude::*;

proptest! {
    // =========================================================================
    // pow2.rs properties
    // =========================================================================

    #[test]
    fn prop_is_power_of_2_matches_popcount(n in any::<c_int>()) {
        use bitprim::is_power_of_2;

        prop_assert_eq!(is_power_of_2(n), n > 0 && n.count_ones() == 1);
    }

    #[test]
    fn prop_shifted_one_is_power_of_2(i in 0u32..(c_int::BITS - 1)) {
        use bitprim::is_power_of_2;

        prop_assert!(is_power_of_2((1 as c_int) << i));
    }

    // =========================================================================
    // rotate.rs properties
    // =========================================================================

    #[test]
    fn prop_rotate16_invertible(v in any::<u16>(), s in any::<c_int>()) {
        use bitprim::{rol16, ror16};

        prop_assert_eq!(rol16(ror16(v, s), s), v);
        prop_assert_eq!(ror16(rol16(v, s), s), v);
    }

    #[test]
    fn prop_rotate32_invertible(v in any::<u32>(), s in any::<c_int>()) {
        use bitprim::{rol32, ror32};

        prop_assert_eq!(rol32(ror32(v, s), s), v);
        prop_assert_eq!(ror32(rol32(v, s), s), v);
    }

    #[test]
    fn prop_rotate64_invertible(v in any::<u64>(), s in any::<c_int>()) {
        use bitprim::{rol64, ror64};

        prop_assert_eq!(rol64(ror64(v, s), s), v);
        prop_assert_eq!(ror64(rol64(v, s), s), v);
    }

    #[test]
    fn prop_rotate_full_circle_is_identity(v in any::<u64>(), k in -4 as c_int..4) {
        use bitprim::{rol16, rol32, rol64};

        // Any multiple of the width, zero included, leaves the value alone
        prop_assert_eq!(rol16(v as u16, 16 * k), v as u16);
        prop_assert_eq!(rol32(v as u32, 32 * k), v as u32);
        prop_assert_eq!(rol64(v, 64 * k), v);
    }

    #[test]
    fn prop_rotate_composes_additively(v in any::<u32>(), a in 0 as c_int..32, b in 0 as c_int..32) {
        use bitprim::rol32;

        prop_assert_eq!(rol32(rol32(v, a), b), rol32(v, a + b));
    }

    #[test]
    fn prop_rotate_matches_core(v in any::<u64>(), s in 0 as c_int..64) {
        use bitprim::{rol64, ror64};

        prop_assert_eq!(rol64(v, s), v.rotate_left(s as u32));
        prop_assert_eq!(ror64(v, s), v.rotate_right(s as u32));
    }

    // =========================================================================
    // fls.rs / strategy.rs properties
    // =========================================================================

    #[test]
    fn prop_msb_names_highest_set_bit(x in 1u64..=u64::MAX) {
        use bitprim::bits::strategy::msb;

        let m = msb(x);
        prop_assert!((1..=64).contains(&m));
        prop_assert_eq!(x >> (m - 1), 1, "bit m-1 must be the top set bit");
    }

    #[test]
    fn prop_msb_strategies_agree(x in any::<u64>()) {
        use bitprim::bits::strategy::{msb_leading_zeros, msb_scan};

        prop_assert_eq!(msb_scan(x), msb_leading_zeros(x));
    }
}

#[cfg(not(feature = "host-fls"))]
proptest! {
    #[test]
    fn prop_fls_bounds_value(x in 1 as c_int..=c_int::MAX) {
        use bitprim::fls;

        // 2^(fls-1) <= x < 2^fls
        let f = fls(x) as u32;
        let x = x as u64;
        prop_assert!(1u64 << (f - 1) <= x);
        prop_assert!(x < 1u64 << f);
    }
}

#[cfg(not(any(feature = "host-fls", feature = "host-flsl", feature = "host-flsll")))]
proptest! {
    #[test]
    fn prop_fls_widths_agree(x in 0 as c_int..=c_int::MAX) {
        use bitprim::{fls, flsl, flsll};
        use core::ffi::{c_long, c_longlong};

        prop_assert_eq!(fls(x), flsl(x as c_long));
        prop_assert_eq!(fls(x), flsll(x as c_longlong));
    }
}
