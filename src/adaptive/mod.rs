//! This module and its submodules contain an adaptive-precision integer: a sign and a magnitude of
//! as many limbs as the value needs, growing on addition and multiplication and shrinking on
//! subtraction and division. Division is Knuth's Algorithm D.
//!
//! The magnitude is always *trimmed*: its most significant limb is non-zero, so zero has no limbs
//! at all, and zero is never negative. Every mutating operation ends by restoring this.

use alloc::vec::Vec;
use crate::underlying::Limb;

/// An integer of unbounded width, stored as a sign and a little-endian magnitude of limbs of type
/// `L`.
///
/// Unlike [`FixedInt`](crate::FixedInt) nothing wraps: sums and products are exact, and the value
/// grows as needed. That includes `<<` (and `>>` by a negative amount), which allocates in
/// proportion to the shift.
///
/// ```
/// # use blockint::AdaptiveInt;
/// let x = AdaptiveInt::<u32>::from(u128::MAX);
/// let y = &x * &x;
/// assert_eq!(y.limbs(), 8);
/// assert_eq!(&y / &x, x);
/// assert!((-&x).is_negative());
/// ```
#[derive(Clone, Default)]
#[derive(PartialEq, Eq, Hash)]
pub struct AdaptiveInt<L: Limb = u32> {
  negative: bool,
  magnitude: Vec<L>,
}

/// Construction, limb and bit access, predicates.
mod basics;

/// Addition, subtraction, multiplication on sign and magnitude.
mod arith;

/// Shifts of the magnitude.
mod shift;

/// Division with remainder (Knuth's Algorithm D).
mod div;

/// Conversions to and from native ints and floats.
mod convert;

/// Binary, hex, and decimal string forms, parsing.
mod fmt;

/// Operator traits.
mod ops;


pub(crate) use fmt::{decimal_digits, parse_integer};
