// =============================================================================
// Bit Primitives Module
// =============================================================================
//
// Pure, width-exact integer bit operations. Width and strategy selection are
// resolved at compile time through Cargo features.

/// Power-of-two test.
pub mod pow2;

/// Fixed-width rotate left/right for 16, 32 and 64 bits.
pub mod rotate;

/// Find-last-set over the native `int`, `long` and `long long` types.
pub mod fls;

/// Most-significant-bit kernels backing the find-last-set family.
pub mod strategy;

/// Kani formal verification proofs.
#[cfg(kani)]
mod kani_proofs;

// =============================================================================
// Public Re-exports
// =============================================================================

pub use pow2::is_power_of_2;

pub use rotate::{rol16, rol32, rol64, ror16, ror32, ror64};

#[cfg(not(feature = "host-fls"))]
pub use fls::fls;
#[cfg(not(feature = "host-flsl"))]
pub use fls::flsl;
#[cfg(not(feature = "host-flsll"))]
pub use fls::flsll;

pub use strategy::{FlsStrategy, FLS_STRATEGY};
