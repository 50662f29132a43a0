// =============================================================================
// Most-Significant-Bit Kernels
// =============================================================================
//
// Both find-last-set strategies operate on a zero-extended `u64`. Widening an
// unsigned value leaves the position of its highest set bit unchanged, so one
// kernel serves every native width. The `portable-fls` feature picks the
// kernel at compile time.

/// Find-last-set implementation selected for this build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlsStrategy {
    /// `bit_width - leading_zeros(x)`, a single instruction on most targets.
    LeadingZeros,
    /// Shift right until the value is `<= 1`, counting iterations.
    Scan,
}

/// Strategy compiled into [`msb`] and the `fls*` family.
#[cfg(not(feature = "portable-fls"))]
pub const FLS_STRATEGY: FlsStrategy = FlsStrategy::LeadingZeros;

/// Strategy compiled into [`msb`] and the `fls*` family.
#[cfg(feature = "portable-fls")]
pub const FLS_STRATEGY: FlsStrategy = FlsStrategy::Scan;

/// 1-based index of the highest set bit via leading-zero count, 0 for 0.
///
/// O(1).
#[inline(always)]
pub const fn msb_leading_zeros(x: u64) -> u32 {
    if x == 0 {
        0
    } else {
        u64::BITS - x.leading_zeros()
    }
}

/// 1-based index of the highest set bit via a shift loop, 0 for 0.
///
/// Counts up from the lowest bit, so small values finish fast. Worst case is
/// 64 iterations, for values with bit 63 set.
#[inline(always)]
pub const fn msb_scan(mut x: u64) -> u32 {
    if x == 0 {
        return 0;
    }
    let mut bit = 1;
    while x > 1 {
        x >>= 1;
        bit += 1;
    }
    bit
}

/// 1-based index of the highest set bit using the build's strategy.
#[cfg(not(feature = "portable-fls"))]
#[inline(always)]
pub const fn msb(x: u64) -> u32 {
    msb_leading_zeros(x)
}

/// 1-based index of the highest set bit using the build's strategy.
#[cfg(feature = "portable-fls")]
#[inline(always)]
pub const fn msb(x: u64) -> u32 {
    msb_scan(x)
}
