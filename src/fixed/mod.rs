//! This module and its submodules contain a fixed-width, multi-limb binary integer: `N` bits of
//! two's complement (or unsigned) integer stored in `LIMBS` machine words, with wrapping
//! arithmetic, arithmetic and logical shifts, and restoring long division.
//!
//! Some notation used in the comments:
//!
//!   - **Limb**: one machine word of the storage. Limb 0 is the least significant.
//!   - **MSU**: most significant unit, the last limb. If `N` is not a multiple of the limb width,
//!     only its lowest `N % L::BITS` bits are part of the number; the rest must always be zero.
//!   - **Bit 0, bit 1, .. bit N-1**: numbered least significant to most significant, starts at 0.

use core::marker::PhantomData;
use crate::underlying::Limb;

/// A binary integer with `N` bits, stored little-endian in `LIMBS` limbs of type `L`. With `S` =
/// [`Signed`] (the default) it is a two's complement integer in `-2^(N-1) .. 2^(N-1)`; with `S` =
/// [`Unsigned`] it is a natural number in `0 .. 2^N`.
///
/// `LIMBS` must be exactly the number of limbs needed to hold `N` bits (`N.div_ceil(L::BITS)`);
/// this is checked at compile time.
///
/// All arithmetic wraps modulo `2^N`.
///
/// Examples:
///
/// ```
/// # use blockint::{FixedInt, Signed, Unsigned};
/// type Foo = FixedInt<12, 2, u8>;  // A 12-bit signed integer in two bytes
/// type Bar = FixedInt<256, 4, u64, Unsigned>;  // A 256-bit unsigned integer in four u64 words
///
/// let x = Foo::from(-3) * Foo::from(700);
/// assert_eq!(x, Foo::from(-2100 + 4096));  // wraps around modulo 2^12
/// ```
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct FixedInt<
  const N: u32,
  const LIMBS: usize,
  L: Limb = u32,
  S: Signedness = Signed,
> {
  pub(crate) limbs: [L; LIMBS],
  sign: PhantomData<S>,
}

/// Marker for the interpretation of the bits of a [`FixedInt`] (either [`Signed`] or
/// [`Unsigned`]).
///
/// This is a *sealed* trait.
pub trait Signedness: private::Sealed +
  core::fmt::Debug + Copy + Clone + Eq + Ord + core::hash::Hash + Default + Send + Sync + 'static
{
  /// Whether bit `N-1` carries a negative weight.
  const SIGNED: bool;
}

/// Two's complement interpretation of a [`FixedInt`].
#[derive(Debug, Clone, Copy, Default)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signed;

/// Unsigned interpretation of a [`FixedInt`].
#[derive(Debug, Clone, Copy, Default)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unsigned;

impl Signedness for Signed { const SIGNED: bool = true; }
impl Signedness for Unsigned { const SIGNED: bool = false; }

mod private {
  pub trait Sealed {}
  impl Sealed for super::Signed {}
  impl Sealed for super::Unsigned {}
}

/// Layout, bit and limb access, predicates.
mod basics;

/// Constants (zero, max, min, etc).
mod consts;

/// Addition, subtraction, multiplication (wrapping and widening).
mod arith;

/// Arithmetic and logical shifts.
mod shift;

/// Division with remainder.
mod div;

/// Conversions to and from native ints, floats, [`AdaptiveInt`](crate::AdaptiveInt), and other
/// widths.
mod convert;

/// Binary, hex, and decimal string forms, parsing.
mod fmt;

/// Operator traits.
mod ops;


pub use consts::SpecificValue;
