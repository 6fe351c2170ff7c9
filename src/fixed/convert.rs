use super::*;
use crate::AdaptiveInt;
use crate::error::OutOfRange;
use crate::underlying::words;

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> FixedInt<N, LIMBS, L, S> {
  /// The lowest `N` bits of `x` (i.e. `x` sign-extended to `N` bits if `N > 128`, truncated
  /// otherwise).
  pub(crate) fn from_i128(x: i128) -> Self {
    let limbs = core::array::from_fn(|i| {
      let shift = i as u32 * L::BITS;
      if shift < 128 { L::of_u128((x >> shift) as u128) }
      else if x < 0 { L::MAX }
      else { L::ZERO }
    });
    Self::from_limbs(limbs)
  }

  /// The lowest `N` bits of `x` (i.e. `x` zero-extended to `N` bits if `N > 128`, truncated
  /// otherwise).
  pub(crate) fn from_u128(x: u128) -> Self {
    let limbs = core::array::from_fn(|i| {
      let shift = i as u32 * L::BITS;
      if shift < 128 { L::of_u128(x >> shift) } else { L::ZERO }
    });
    Self::from_limbs(limbs)
  }

  /// The lowest 128 bits of the bit pattern, zero-extended if `N < 128`.
  fn low_u128(&self) -> u128 {
    self.limbs.iter().enumerate()
      .take_while(|(i, _)| (*i as u32 * L::BITS) < 128)
      .fold(0, |acc, (i, limb)| acc | (limb.as_u64() as u128) << (i as u32 * L::BITS))
  }

  /// The value as an `i128`: exact if it fits, otherwise the lowest 128 bits of its two's
  /// complement representation.
  pub fn to_i128(&self) -> i128 {
    let bits = self.low_u128();
    if self.sign() && Self::BITS < 128 {
      (bits | (u128::MAX << Self::BITS)) as i128
    } else {
      bits as i128
    }
  }

  /// The value as a `u128`: the lowest 128 bits of the bit pattern, sign-extended if `N < 128`.
  pub fn to_u128(&self) -> u128 {
    self.to_i128() as u128
  }

  /// The value as an `f64`, accumulated limb by limb from the most significant one. Exact if the
  /// magnitude fits in 53 bits.
  pub fn to_f64(&self) -> f64 {
    let radix = L::MAX.as_u64() as f64 + 1.0;
    let magnitude = self.magnitude().limbs.iter().rev()
      .fold(0.0, |acc, limb| acc * radix + limb.as_u64() as f64);
    if self.sign() { -magnitude } else { magnitude }
  }

  /// Convert to another width with the same limb type and signedness. Narrowing keeps the lowest
  /// `M` bits; widening a [`Signed`] integer sign-extends, widening an [`Unsigned`] one
  /// zero-extends.
  ///
  /// ```
  /// # use blockint::{FixedInt, Int8};
  /// type Wide = FixedInt<128, 16, u8>;
  /// assert_eq!(Int8::from(-100).resize::<128, 16>(), Wide::from(-100));
  /// assert_eq!(Wide::from(0x1ff).resize::<8, 1>(), Int8::from(-1));
  /// ```
  pub fn resize<const M: u32, const ML: usize>(&self) -> FixedInt<M, ML, L, S> {
    let mut x = self.resize_zero_extend::<M, ML>();
    if self.sign() && M > N {
      // Set bits N.. of the wider type.
      for i in 0 .. ML {
        let lo = i as u32 * L::BITS;
        if lo + L::BITS <= N { continue }
        let keep = N.saturating_sub(lo);
        x.limbs[i] |= !L::MAX.mask_lsb(keep);
      }
      x.mask();
    }
    x
  }

  /// As [`Self::resize`], but always zero-extends.
  pub fn resize_zero_extend<const M: u32, const ML: usize>(&self) -> FixedInt<M, ML, L, S> {
    FixedInt::from_limbs(core::array::from_fn(|i| self.limb(i)))
  }

  /// Reinterpret the bit pattern as [`Signed`] or [`Unsigned`].
  ///
  /// ```
  /// # use blockint::{Int16, UInt16, Unsigned};
  /// assert_eq!(Int16::from(-1).cast_signedness::<Unsigned>(), UInt16::maxpos());
  /// ```
  #[inline]
  pub fn cast_signedness<T: Signedness>(&self) -> FixedInt<N, LIMBS, L, T> {
    FixedInt::from_limbs(self.limbs)
  }
}

macro_rules! impl_from_native {
  ($via:ident, $($t:ty),*) => {
    $(
      impl<
        const N: u32,
        const LIMBS: usize,
        L: Limb,
        S: Signedness,
      > From<$t> for FixedInt<N, LIMBS, L, S> {
        /// The lowest `N` bits of the (sign- or zero-extended) value, so a value that does not fit
        /// wraps around.
        #[inline]
        fn from(x: $t) -> Self {
          Self::$via(x.into())
        }
      }
    )*
  }
}

impl_from_native!{from_i128, i8, i16, i32, i64, i128}
impl_from_native!{from_u128, u8, u16, u32, u64, u128}

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> From<FixedInt<N, LIMBS, L, S>> for AdaptiveInt<L> {
  /// The exact value.
  fn from(x: FixedInt<N, LIMBS, L, S>) -> Self {
    AdaptiveInt::from_sign_magnitude(x.sign(), x.magnitude().limbs.to_vec())
  }
}

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> TryFrom<&AdaptiveInt<L>> for FixedInt<N, LIMBS, L, S> {
  type Error = OutOfRange;

  /// The same value, or an error if it is not representable in `N` bits.
  fn try_from(x: &AdaptiveInt<L>) -> Result<Self, OutOfRange> {
    let magnitude = x.as_limbs();
    let msb = words::msb(magnitude);
    let fits = match (S::SIGNED, x.sign()) {
      (false, false) => msb < N as i32,
      (false, true) => false,
      (true, false) => msb < N as i32 - 1,
      // Magnitude up to 2^(N-1), inclusive.
      (true, true) => msb < N as i32 - 1 || (msb == N as i32 - 1 && words::count_ones(magnitude) == 1),
    };
    if !fits {
      return Err(OutOfRange)
    }
    let mut result = Self::from_limbs(core::array::from_fn(|i| magnitude.get(i).copied().unwrap_or(L::ZERO)));
    if x.sign() {
      result.negate_bits()
    }
    Ok(result)
  }
}

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> TryFrom<AdaptiveInt<L>> for FixedInt<N, LIMBS, L, S> {
  type Error = OutOfRange;

  #[inline]
  fn try_from(x: AdaptiveInt<L>) -> Result<Self, OutOfRange> {
    Self::try_from(&x)
  }
}
