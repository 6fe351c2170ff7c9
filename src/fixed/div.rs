use super::*;
use crate::QuoRem;
use crate::division::report_divide_by_zero;

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> FixedInt<N, LIMBS, L, S> {
  /// Divide with remainder, truncating toward zero: `self == quotient * rhs + remainder`, and the
  /// remainder has the sign of `self`. Dividing the minimum by `-1` wraps to the minimum.
  ///
  /// If `rhs` is zero, the quotient and remainder are zero and `exception_id` is
  /// [`DIVIDE_BY_ZERO`](crate::DIVIDE_BY_ZERO).
  ///
  /// ```
  /// # use blockint::Int128;
  /// let qr = Int128::from(7).div_rem(&Int128::from(2));
  /// assert_eq!((qr.quotient, qr.remainder), (Int128::from(3), Int128::from(1)));
  ///
  /// let qr = Int128::from(7).div_rem(&Int128::ZERO);
  /// assert!(qr.is_divide_by_zero());
  /// ```
  pub fn div_rem(&self, rhs: &Self) -> QuoRem<Self> {
    if rhs.is_zero() {
      QuoRem::divide_by_zero(Self::ZERO)
    } else if LIMBS == 1 {
      self.native_div_rem(rhs)
    } else {
      self.restoring_div_rem(rhs)
    }
  }

  /// As [`Self::div_rem`], but always uses bit-serial restoring division, even when the value
  /// fits a machine word.
  pub fn long_division(&self, rhs: &Self) -> QuoRem<Self> {
    if rhs.is_zero() {
      QuoRem::divide_by_zero(Self::ZERO)
    } else {
      self.restoring_div_rem(rhs)
    }
  }

  /// Fraction division without rounding: the quotient `self * 2^(N+R) / rhs`, truncated toward
  /// zero, in a type of `M >= 2N + R` bits. Read as a fixed-point number with `N + R` fraction
  /// bits it is `self / rhs`; the remainder (sign of `self`) is non-zero iff bits were cut off,
  /// which is the sticky bit a caller needs to round the quotient.
  ///
  /// On a zero divisor the result is as for [`Self::div_rem`]. For [`Signed`] with `M == 2N + R`,
  /// the minimum divided by `-1` wraps.
  ///
  /// ```
  /// # use blockint::{FixedInt, Int8};
  /// // 1 / 3 with 8 + 4 fraction bits: 0b0.0101_0101_0101, remainder 1.
  /// let qr = Int8::from(1).widening_div::<4, 20, 3>(&Int8::from(3));
  /// assert_eq!(qr.quotient, FixedInt::from(0b0101_0101_0101));
  /// assert_eq!(qr.remainder, FixedInt::from(1));
  /// ```
  pub fn widening_div<const R: u32, const M: u32, const ML: usize>(
    &self,
    rhs: &Self,
  ) -> QuoRem<FixedInt<M, ML, L, S>> {
    const { assert!(M >= 2 * N + R, "widening_div needs a result type with at least 2N + R bits") };
    let divisor = rhs.resize::<M, ML>();
    if divisor.is_zero() {
      return QuoRem::divide_by_zero(FixedInt::ZERO)
    }
    // `|self| * 2^(N+R) <= 2^(2N+R-1)` for signed and `< 2^(2N+R)` for unsigned, so the scaled
    // dividend is exact in `M` bits.
    let mut dividend = self.resize::<M, ML>();
    dividend.shl_bits(N + R);
    dividend.restoring_div_rem(&divisor)
  }

  /// `Some(self / rhs)`, or `None` if `rhs` is zero.
  pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
    self.div_rem(rhs).into_result().ok().map(|(quotient, _)| quotient)
  }

  /// `Some(self % rhs)`, or `None` if `rhs` is zero.
  pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
    self.div_rem(rhs).into_result().ok().map(|(_, remainder)| remainder)
  }

  /// Single-limb values fit in a native 128-bit integer, sign-extended; divide natively.
  fn native_div_rem(&self, rhs: &Self) -> QuoRem<Self> {
    if S::SIGNED {
      let (a, b) = (self.to_i128(), rhs.to_i128());
      QuoRem::new(Self::from(a / b), Self::from(a % b))
    } else {
      let (a, b) = (self.to_u128(), rhs.to_u128());
      QuoRem::new(Self::from(a / b), Self::from(a % b))
    }
  }

  /// Restoring division on the magnitudes. Requires `rhs != 0`.
  fn restoring_div_rem(&self, rhs: &Self) -> QuoRem<Self> {
    let a = self.magnitude();
    let b = rhs.magnitude();
    if a < b {
      return QuoRem::new(Self::ZERO, *self)
    }

    // Align the divisor's msb with the dividend's, then go down one bit at a time: wherever the
    // shifted divisor fits into what is left of the dividend, subtract it and set that quotient
    // bit.
    let shift = (a.msb() - b.msb()) as u32;
    let mut accumulator = a;
    let mut subtractand = b;
    subtractand.shl_bits(shift);
    let mut quotient = Self::ZERO;
    for i in (0 ..= shift).rev() {
      if subtractand <= accumulator {
        accumulator.sub_in_place(&subtractand);
        quotient.set_bit(i, true);
      }
      subtractand.shr_bits(1);
    }

    if self.sign() != rhs.sign() {
      quotient.negate_bits()
    }
    // `accumulator < |rhs| <= 2^(N-1)`, so it is a non-negative value in the signed view too.
    let mut remainder = accumulator.cast_signedness::<S>();
    if self.sign() {
      remainder.negate_bits()
    }
    QuoRem::new(quotient, remainder)
  }

  pub(crate) fn div_in_place(&mut self, rhs: &Self) {
    let qr = self.div_rem(rhs);
    if qr.is_divide_by_zero() {
      report_divide_by_zero(&Self::type_tag())
    }
    *self = qr.quotient
  }

  pub(crate) fn rem_in_place(&mut self, rhs: &Self) {
    let qr = self.div_rem(rhs);
    if qr.is_divide_by_zero() {
      report_divide_by_zero(&Self::type_tag())
    }
    *self = qr.remainder
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::fixed::test::mk_binary_tests;
  use proptest::prelude::*;

  #[test]
  fn scenarios() {
    type T = FixedInt<64, 8, u8>;
    let qr = T::from(7).div_rem(&T::from(2));
    assert_eq!((qr.quotient, qr.remainder, qr.exception_id), (T::from(3), T::from(1), 0));
    let qr = T::from(-7).div_rem(&T::from(2));
    assert_eq!((qr.quotient, qr.remainder), (T::from(-3), T::from(-1)));
    let qr = T::from(7).div_rem(&T::from(-2));
    assert_eq!((qr.quotient, qr.remainder), (T::from(-3), T::from(1)));
    let qr = T::from(-7).div_rem(&T::from(-2));
    assert_eq!((qr.quotient, qr.remainder), (T::from(3), T::from(-1)));
    let qr = T::from(2).div_rem(&T::from(7));
    assert_eq!((qr.quotient, qr.remainder), (T::ZERO, T::from(2)));
  }

  #[test]
  fn divide_by_zero() {
    type T = FixedInt<64, 8, u8>;
    let qr = T::from(7).div_rem(&T::ZERO);
    assert_eq!(qr.exception_id, crate::DIVIDE_BY_ZERO);
    assert_eq!((qr.quotient, qr.remainder), (T::ZERO, T::ZERO));
    assert_eq!(T::from(7).checked_div(&T::ZERO), None);
    assert_eq!(T::from(7).checked_rem(&T::ZERO), None);
    assert_eq!(T::from(7).checked_rem(&T::from(4)), Some(T::from(3)));
    assert!(crate::Int32::from(7).div_rem(&crate::Int32::ZERO).is_divide_by_zero());
  }

  #[test]
  #[cfg(not(feature = "div-by-zero-panic"))]
  fn operators_divide_by_zero_give_zero() {
    type T = FixedInt<64, 8, u8>;
    assert_eq!(T::from(7) / T::ZERO, T::ZERO);
    assert_eq!(T::from(7) % T::ZERO, T::ZERO);
  }

  #[test]
  #[cfg(feature = "div-by-zero-panic")]
  #[should_panic(expected = "attempt to divide by zero")]
  fn operators_divide_by_zero_panic() {
    type T = FixedInt<64, 8, u8>;
    let _ = T::from(7) / T::ZERO;
  }

  #[test]
  fn min_over_minus_one_wraps() {
    type T = FixedInt<100, 4, u32>;
    let qr = T::maxneg().div_rem(&T::from(-1));
    assert_eq!((qr.quotient, qr.remainder), (T::maxneg(), T::ZERO));
    let qr = T::maxneg().div_rem(&T::from(1));
    assert_eq!((qr.quotient, qr.remainder), (T::maxneg(), T::ZERO));
    let qr = crate::Int8::maxneg().div_rem(&crate::Int8::from(-1));
    assert_eq!(qr.quotient, crate::Int8::maxneg());
  }

  #[test]
  fn long_division_matches_native_on_one_limb() {
    for a in crate::Int8::cases_exhaustive() {
      for b in crate::Int8::cases_exhaustive() {
        assert_eq!(a.long_division(&b), a.div_rem(&b), "{a:?} / {b:?}")
      }
    }
  }

  /// Aux function: check `div_rem` against the exact truncating division.
  fn is_correct<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>(
    a: FixedInt<N, LIMBS, L, S>,
    b: FixedInt<N, LIMBS, L, S>,
  ) -> bool {
    let qr = a.div_rem(&b);
    if b.is_zero() {
      return qr.is_divide_by_zero() && qr.quotient.is_zero() && qr.remainder.is_zero()
    }
    let (a, b) = (a.to_integer(), b.to_integer());
    let quotient = FixedInt::<N, LIMBS, L, S>::wrap_integer(&a / &b);
    qr.exception_id == 0
      && qr.quotient.to_integer() == quotient
      && qr.remainder.to_integer() == &a % &b
  }

  /// Aux function: check `widening_div` against the exact truncating division of the scaled
  /// dividend.
  fn widening_div_is_correct<
    const R: u32,
    const M: u32,
    const ML: usize,
    const N: u32,
    const LIMBS: usize,
    L: Limb,
    S: Signedness,
  >(
    a: FixedInt<N, LIMBS, L, S>,
    b: FixedInt<N, LIMBS, L, S>,
  ) -> bool {
    let qr = a.widening_div::<R, M, ML>(&b);
    if b.is_zero() {
      return qr.is_divide_by_zero() && qr.quotient.is_zero() && qr.remainder.is_zero()
    }
    let scaled = a.to_integer() << (N + R);
    let b = b.to_integer();
    let quotient = FixedInt::<M, ML, L, S>::wrap_integer(&scaled / &b);
    qr.exception_id == 0
      && qr.quotient.to_integer() == quotient
      && qr.remainder.to_integer() == &scaled % &b
  }

  #[test]
  fn widening_div_scenarios() {
    type T = FixedInt<8, 1, u8>;
    type W = FixedInt<20, 3, u8>;
    // 7 / 2 = 3.5, with 12 fraction bits.
    let qr = T::from(7).widening_div::<4, 20, 3>(&T::from(2));
    assert_eq!((qr.quotient, qr.remainder), (W::from(7 << 11), W::ZERO));
    let qr = T::from(-7).widening_div::<4, 20, 3>(&T::from(2));
    assert_eq!((qr.quotient, qr.remainder), (W::from(-7 << 11), W::ZERO));
    // -1 / 3 = -0.0101..., inexact.
    let qr = T::from(-1).widening_div::<4, 20, 3>(&T::from(3));
    assert_eq!((qr.quotient, qr.remainder), (W::from(-0x555), W::from(-1)));
    // The extremes: -128 / -1 just wraps, -128 / 1 does not.
    let qr = T::maxneg().widening_div::<4, 20, 3>(&T::from(1));
    assert_eq!(qr.quotient, W::maxneg());
    let qr = T::maxneg().widening_div::<4, 20, 3>(&T::from(-1));
    assert_eq!(qr.quotient, W::maxneg());
    let qr = T::maxneg().widening_div::<4, 24, 3>(&T::from(-1));
    assert_eq!(qr.quotient, FixedInt::<24, 3, u8>::from(1 << 19));
    // Unsigned extremes fit.
    type U = FixedInt<8, 1, u8, Unsigned>;
    let qr = U::maxpos().widening_div::<0, 16, 2>(&U::from(1u8));
    assert_eq!(qr.quotient, FixedInt::<16, 2, u8, Unsigned>::from(0xff00u16));
    let qr = T::from(1).widening_div::<4, 20, 3>(&T::ZERO);
    assert!(qr.is_divide_by_zero());
    assert_eq!((qr.quotient, qr.remainder), (W::ZERO, W::ZERO));
  }

  #[test]
  fn widening_div_exhaustive() {
    for a in crate::Int8::cases_exhaustive() {
      for b in crate::Int8::cases_exhaustive() {
        assert!(widening_div_is_correct::<4, 20, 3, 8, 1, u8, Signed>(a, b), "{a:?} / {b:?}")
      }
    }
    for a in crate::UInt8::cases_exhaustive() {
      for b in crate::UInt8::cases_exhaustive() {
        assert!(widening_div_is_correct::<0, 16, 2, 8, 1, u8, Unsigned>(a, b), "{a:?} / {b:?}")
      }
    }
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn widening_div_i64_u32(
      a in crate::Int64::cases_proptest(),
      b in crate::Int64::cases_proptest(),
    ) {
      prop_assert!(widening_div_is_correct::<8, 136, 5, 64, 2, u32, Signed>(a, b), "{:?} / {:?}", a, b)
    }

    #[test]
    fn widening_div_i128_u32(
      a in crate::Int128::cases_proptest(),
      b in crate::Int128::cases_proptest(),
    ) {
      prop_assert!(widening_div_is_correct::<3, 259, 9, 128, 4, u32, Signed>(a, b), "{:?} / {:?}", a, b)
    }

    #[test]
    fn widening_div_u77_u8(
      a in FixedInt::<77, 10, u8, Unsigned>::cases_proptest(),
      b in FixedInt::<77, 10, u8, Unsigned>::cases_proptest(),
    ) {
      prop_assert!(widening_div_is_correct::<0, 154, 20, 77, 10, u8, Unsigned>(a, b), "{:?} / {:?}", a, b)
    }

    #[test]
    fn widening_div_i100_u64(
      a in FixedInt::<100, 2, u64>::cases_proptest(),
      b in FixedInt::<100, 2, u64>::cases_proptest(),
    ) {
      prop_assert!(widening_div_is_correct::<5, 210, 4, 100, 2, u64, Signed>(a, b), "{:?} / {:?}", a, b)
    }
  }

  mk_binary_tests!{is_correct;
    i8_u8: crate::Int8, exhaustive;
    u8_u8: crate::UInt8, exhaustive;
    i10_u8: FixedInt<10, 2, u8>, exhaustive;
    i64_u16: FixedInt<64, 4, u16>;
    i128_u32: crate::Int128;
    u128_u32: crate::UInt128;
    i250_u64: FixedInt<250, 4, u64>;
    u77_u8: FixedInt<77, 10, u8, Unsigned>;
  }
}
