#![cfg_attr(not(test), no_std)]
//! This crate provides multi-limb binary integers: the arithmetic engine that custom number
//! systems (posits, fixed-points, logarithmic and decimal formats, ...) are built on.
//!
//! # Introduction
//!
//! An integer here is a sequence of *limbs*, unsigned machine words (`u8`, `u16`, `u32`, or
//! `u64`), least significant first. There are two width policies:
//!
//!   - [`FixedInt<N, LIMBS, L, S>`](FixedInt): exactly `N` bits in `LIMBS` limbs of type `L`,
//!     two's complement ([`Signed`]) or not ([`Unsigned`]). It is `Copy`, never allocates, and all
//!     arithmetic wraps modulo `2^N`, like the native integer types. Division is bit-serial
//!     restoring division.
//!   - [`AdaptiveInt<L>`](AdaptiveInt): a sign and a magnitude that grows and shrinks as needed.
//!     Arithmetic is exact. Division is Knuth's Algorithm D.
//!
//! Both implement the [`LimbInteger`] trait, so code can be generic over the policy.
//!
//! # Usage
//!
//! ```
//! use blockint::{AdaptiveInt, FixedInt, Int128, Unsigned};
//! type U12 = FixedInt<12, 2, u8, Unsigned>;  // Non-standard: 12 bits in two bytes
//!
//! // Create integers from native ints, strings, constants, or raw limbs.
//! let a = Int128::from(-7);
//! let b: Int128 = "0x7fff'ffff".parse().unwrap();
//! let c = U12::maxpos();
//! let d = U12::from_limbs([0xff, 0x0f]);
//! assert_eq!(c, d);
//!
//! // The usual operators; fixed-width arithmetic wraps.
//! assert_eq!(c + U12::from(1u8), U12::ZERO);
//! assert_eq!(a * b, Int128::from(-7 * 0x7fff_ffff_i64));
//!
//! // Division with remainder, truncating toward zero.
//! let qr = a.div_rem(&Int128::from(2));
//! assert_eq!((qr.quotient, qr.remainder), (Int128::from(-3), Int128::from(-1)));
//!
//! // Adaptive precision does not wrap.
//! let x = AdaptiveInt::<u32>::from(u128::MAX);
//! assert_eq!((&x * &x).to_string(), "115792089237316195423570985008687907852589419931798687112530834793049593217025");
//!
//! // Convert back to native ints, floats, strings.
//! assert_eq!(a.to_i128(), -7);
//! assert_eq!(c.to_hex(true), "0xF'FF");
//! assert_eq!(d.to_binary(true), "0b1111'1111'1111");
//! ```
//!
//! # Division by zero
//!
//! [`FixedInt::div_rem`] and [`AdaptiveInt::div_rem`] never fail: on a zero divisor they return
//! zero quotient and remainder, with [`QuoRem::exception_id`] set to [`DIVIDE_BY_ZERO`]. The `/`
//! and `%` operators also return zero, and log a warning through the [`log`] facade.
//!
//! # Features
//!
//!   - `div-by-zero-panic`: make the `/` and `%` operators panic on a zero divisor instead.
//!
//! This crate is `no_std`, but needs `alloc` for [`AdaptiveInt`] and the string conversions.
//!
//! This crate includes benchmarks; run them with `cargo bench`.

extern crate alloc;

mod underlying;
mod fixed;
mod adaptive;
mod division;
mod error;
mod traits;

pub use underlying::Limb;
pub use fixed::{FixedInt, Signed, Unsigned, Signedness, SpecificValue};
pub use adaptive::AdaptiveInt;
pub use division::{QuoRem, DIVIDE_BY_ZERO};
pub use error::{DivideByZero, OutOfRange, ParseIntError, ParseIntErrorKind};
pub use traits::LimbInteger;

/// Signed 8-bit integer in one `u8` limb.
pub type Int8 = FixedInt<8, 1, u8>;

/// Unsigned 8-bit integer in one `u8` limb.
pub type UInt8 = FixedInt<8, 1, u8, Unsigned>;

/// Signed 16-bit integer in one `u16` limb.
pub type Int16 = FixedInt<16, 1, u16>;

/// Unsigned 16-bit integer in one `u16` limb.
pub type UInt16 = FixedInt<16, 1, u16, Unsigned>;

/// Signed 32-bit integer in one `u32` limb.
pub type Int32 = FixedInt<32, 1, u32>;

/// Unsigned 32-bit integer in one `u32` limb.
pub type UInt32 = FixedInt<32, 1, u32, Unsigned>;

/// Signed 64-bit integer in two `u32` limbs.
pub type Int64 = FixedInt<64, 2, u32>;

/// Unsigned 64-bit integer in two `u32` limbs.
pub type UInt64 = FixedInt<64, 2, u32, Unsigned>;

/// Signed 128-bit integer in four `u32` limbs.
pub type Int128 = FixedInt<128, 4, u32>;

/// Unsigned 128-bit integer in four `u32` limbs.
pub type UInt128 = FixedInt<128, 4, u32, Unsigned>;

/// Signed 256-bit integer in eight `u32` limbs.
pub type Int256 = FixedInt<256, 8, u32>;

/// Unsigned 256-bit integer in eight `u32` limbs.
pub type UInt256 = FixedInt<256, 8, u32, Unsigned>;

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x10_0000};
