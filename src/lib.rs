//! # bitprim: Width-Exact Integer Bit Primitives
//!
//! `bitprim` is a `no_std`, allocation-free leaf library of small integer bit
//! operations for low-level systems code. Every function is a pure `const fn`
//! that evaluates its arguments exactly once.
//!
//! ## Overview
//!
//! 1. **Power-of-two test** - [`is_power_of_2`]
//! 2. **Fixed-width rotation** - [`rol16`], [`rol32`], [`rol64`] and their
//!    right-rotating counterparts [`ror16`], [`ror32`], [`ror64`]
//! 3. **Find-last-set** - `fls`, `flsl`, `flsll`: 1-based index of the
//!    most significant set bit, `0` for zero input
//!
//! ## Compile-time configuration
//!
//! All selection happens through Cargo features; there is no runtime dispatch.
//!
//! | Feature | Effect |
//! |---|---|
//! | `portable-fls` | `fls*` use a shift loop instead of `leading_zeros` |
//! | `host-fls` | do not define `fls` (host supplies it) |
//! | `host-flsl` | do not define `flsl` |
//! | `host-flsll` | do not define `flsll` |
//! | `ffi` | export every defined primitive as a C symbol |
//!
//! ## Quick Start
//!
//! ```
//! use bitprim::{is_power_of_2, rol16, ror32};
//!
//! assert!(is_power_of_2(64));
//! assert_eq!(rol16(0x8000, 1), 0x0001);
//! assert_eq!(ror32(0x0000_0001, 1), 0x8000_0000);
//! # #[cfg(not(feature = "host-fls"))]
//! assert_eq!(bitprim::fls(256), 9);
//! ```
//!
//! ## Module Organization
//!
//! - [`bits`] - The primitives and the find-last-set strategies
//! - `ffi` - C ABI exports (feature `ffi`)

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Power-of-two test, rotations and find-last-set.
pub mod bits;

/// C ABI exports of the bit primitives.
#[cfg(feature = "ffi")]
pub mod ffi;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// Power of two
pub use bits::is_power_of_2;

// Rotations
pub use bits::{rol16, rol32, rol64, ror16, ror32, ror64};

// Find-last-set, each variant suppressible by its host-* feature
#[cfg(not(feature = "host-fls"))]
pub use bits::fls;
#[cfg(not(feature = "host-flsl"))]
pub use bits::flsl;
#[cfg(not(feature = "host-flsll"))]
pub use bits::flsll;

// Strategy introspection
pub use bits::{FlsStrategy, FLS_STRATEGY};
