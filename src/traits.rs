//! The vocabulary shared by [`FixedInt`] and [`AdaptiveInt`], so that number formats built on top
//! of them can be generic over the width policy.

use core::fmt::{Debug, Display};
use core::ops::*;
use core::str::FromStr;

use crate::{AdaptiveInt, FixedInt, QuoRem, Signedness};
use crate::error::ParseIntError;
use crate::underlying::Limb;

/// An integer made of limbs: either a [`FixedInt`] (arithmetic wraps modulo `2^N`) or an
/// [`AdaptiveInt`] (arithmetic is exact).
///
/// ```
/// # use blockint::{AdaptiveInt, Int256, LimbInteger};
/// fn factorial<T: LimbInteger>(n: i32) -> T {
///   (1 ..= n).fold(T::from(1), |acc, i| acc * T::from(i))
/// }
///
/// let expected = "265252859812191058636308480000000";
/// assert_eq!(factorial::<Int256>(30).to_string(), expected);
/// assert_eq!(factorial::<AdaptiveInt>(30).to_string(), expected);
/// ```
pub trait LimbInteger:
  Clone + Default + Debug + Display + FromStr<Err = ParseIntError> +
  Eq + Ord + core::hash::Hash +
  From<i32> +
  Add<Output = Self> + AddAssign +
  Sub<Output = Self> + SubAssign +
  Mul<Output = Self> + MulAssign +
  Div<Output = Self> + DivAssign +
  Rem<Output = Self> + RemAssign +
  Shl<i32, Output = Self> + ShlAssign<i32> +
  Shr<i32, Output = Self> + ShrAssign<i32>
{
  /// The machine word the integer is made of.
  type Limb: Limb;

  fn zero() -> Self;

  fn is_zero(&self) -> bool;

  /// Whether the value is negative.
  fn sign(&self) -> bool;

  /// `-self` (modulo `2^N` for a [`FixedInt`], also if it is unsigned).
  fn negate(&self) -> Self;

  /// Limb `i` of the representation (two's complement for [`FixedInt`], magnitude for
  /// [`AdaptiveInt`]), or zero out of range.
  fn limb(&self, i: usize) -> Self::Limb;

  /// The number of limbs in the representation.
  fn limb_count(&self) -> usize;

  /// Bit `i` of the representation, `false` out of range.
  fn test(&self, i: u32) -> bool;

  /// Position of the most significant set bit of the representation, or -1 if none.
  fn msb(&self) -> i32;

  /// Truncating division with remainder; see [`FixedInt::div_rem`] and [`AdaptiveInt::div_rem`].
  fn div_rem(&self, rhs: &Self) -> QuoRem<Self>;
}

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> LimbInteger for FixedInt<N, LIMBS, L, S> {
  type Limb = L;

  #[inline]
  fn zero() -> Self { Self::ZERO }

  #[inline]
  fn is_zero(&self) -> bool { Self::is_zero(self) }

  #[inline]
  fn sign(&self) -> bool { Self::sign(self) }

  #[inline]
  fn negate(&self) -> Self {
    let mut x = *self;
    x.negate_bits();
    x
  }

  #[inline]
  fn limb(&self, i: usize) -> L { Self::limb(self, i) }

  #[inline]
  fn limb_count(&self) -> usize { LIMBS }

  #[inline]
  fn test(&self, i: u32) -> bool { Self::test(self, i) }

  #[inline]
  fn msb(&self) -> i32 { Self::msb(self) }

  #[inline]
  fn div_rem(&self, rhs: &Self) -> QuoRem<Self> { Self::div_rem(self, rhs) }
}

impl<L: Limb> LimbInteger for AdaptiveInt<L> {
  type Limb = L;

  #[inline]
  fn zero() -> Self { Self::ZERO }

  #[inline]
  fn is_zero(&self) -> bool { Self::is_zero(self) }

  #[inline]
  fn sign(&self) -> bool { Self::sign(self) }

  #[inline]
  fn negate(&self) -> Self { -self }

  #[inline]
  fn limb(&self, i: usize) -> L { Self::limb(self, i) }

  #[inline]
  fn limb_count(&self) -> usize { self.limbs() }

  #[inline]
  fn test(&self, i: u32) -> bool { Self::test(self, i) }

  #[inline]
  fn msb(&self) -> i32 { Self::msb(self) }

  #[inline]
  fn div_rem(&self, rhs: &Self) -> QuoRem<Self> { Self::div_rem(self, rhs) }
}
