use super::*;

/// Named values of a [`FixedInt`], see [`FixedInt::specific`].
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub enum SpecificValue {
  Zero,
  /// Smallest positive value, `1`.
  MinPos,
  /// Largest positive value.
  MaxPos,
  /// Negative value closest to zero (`-1`), or `0` for [`Unsigned`].
  MinNeg,
  /// Most negative value (`-2^(N-1)`), or `0` for [`Unsigned`].
  MaxNeg,
}

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> FixedInt<N, LIMBS, L, S> {
  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = {
    let _ = Self::BITS;
    let _ = Self::LIMBS;
    Self { limbs: [L::ZERO; LIMBS], sign: PhantomData }
  };

  /// One (`1`), the multiplicative identity element.
  pub const ONE: Self = {
    let mut limbs = Self::ZERO.limbs;
    limbs[0] = L::ONE;
    Self { limbs, sign: PhantomData }
  };

  #[inline]
  pub fn zero() -> Self {
    Self::ZERO
  }

  /// Smallest positive value, `1`.
  #[inline]
  pub fn minpos() -> Self {
    Self::ONE
  }

  /// Largest representable value: `2^(N-1) - 1` if [`Signed`], `2^N - 1` if [`Unsigned`].
  pub fn maxpos() -> Self {
    let mut x = Self::ZERO;
    x.set();
    if S::SIGNED {
      x.limbs[Self::MSU] &= !Self::sign_mask();
    }
    x
  }

  /// Negative value closest to zero: `-1` if [`Signed`], `0` if [`Unsigned`].
  pub fn minneg() -> Self {
    let mut x = Self::ZERO;
    if S::SIGNED {
      x.set();
    }
    x
  }

  /// Most negative representable value: `-2^(N-1)` if [`Signed`], `0` if [`Unsigned`].
  ///
  /// Note that this is a fixed point of negation: `-maxneg() == maxneg()`.
  pub fn maxneg() -> Self {
    let mut x = Self::ZERO;
    if S::SIGNED {
      x.limbs[Self::MSU] = Self::sign_mask();
    }
    x
  }

  /// The named value `which`.
  ///
  /// ```
  /// # use blockint::{Int16, UInt16, SpecificValue};
  /// assert_eq!(Int16::specific(SpecificValue::MaxNeg), Int16::from(i16::MIN));
  /// assert_eq!(UInt16::specific(SpecificValue::MaxPos), UInt16::from(u16::MAX));
  /// ```
  pub fn specific(which: SpecificValue) -> Self {
    match which {
      SpecificValue::Zero => Self::zero(),
      SpecificValue::MinPos => Self::minpos(),
      SpecificValue::MaxPos => Self::maxpos(),
      SpecificValue::MinNeg => Self::minneg(),
      SpecificValue::MaxNeg => Self::maxneg(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn signed() {
    type T = FixedInt<12, 2, u8>;
    assert_eq!(T::zero().to_limbs(), [0x00, 0x00]);
    assert_eq!(T::minpos().to_limbs(), [0x01, 0x00]);
    assert_eq!(T::maxpos().to_limbs(), [0xff, 0x07]);
    assert_eq!(T::minneg().to_limbs(), [0xff, 0x0f]);
    assert_eq!(T::maxneg().to_limbs(), [0x00, 0x08]);
  }

  #[test]
  fn unsigned() {
    type T = FixedInt<12, 2, u8, Unsigned>;
    assert_eq!(T::maxpos().to_limbs(), [0xff, 0x0f]);
    assert_eq!(T::minneg(), T::ZERO);
    assert_eq!(T::maxneg(), T::ZERO);
  }

  #[test]
  fn native() {
    assert_eq!(crate::Int64::maxpos(), crate::Int64::from(i64::MAX));
    assert_eq!(crate::Int64::maxneg(), crate::Int64::from(i64::MIN));
    assert_eq!(crate::Int64::minneg(), crate::Int64::from(-1));
    assert_eq!(crate::UInt32::maxpos(), crate::UInt32::from(u32::MAX));
  }

  #[test]
  fn specific() {
    type T = FixedInt<8, 1, u8>;
    assert_eq!(T::specific(SpecificValue::Zero), T::from(0));
    assert_eq!(T::specific(SpecificValue::MinPos), T::from(1));
    assert_eq!(T::specific(SpecificValue::MaxPos), T::from(127));
    assert_eq!(T::specific(SpecificValue::MinNeg), T::from(-1));
    assert_eq!(T::specific(SpecificValue::MaxNeg), T::from(-128));
  }
}
