use super::*;
use crate::underlying::words;

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> FixedInt<N, LIMBS, L, S> {
  /// Two's complement negation of the bit pattern, modulo `2^N`, regardless of `S`.
  #[inline]
  pub(crate) fn negate_bits(&mut self) {
    words::negate_assign(&mut self.limbs);
    self.mask();
  }

  /// `|self|` in the unsigned view of the same width, which holds the magnitude of every signed
  /// value (including `2^(N-1)`, the magnitude of the minimum).
  #[inline]
  pub(crate) fn magnitude(&self) -> FixedInt<N, LIMBS, L, Unsigned> {
    let mut m = FixedInt::<N, LIMBS, L, Unsigned>::from_limbs(self.limbs);
    if self.sign() {
      m.negate_bits()
    }
    m
  }

  pub(crate) fn add_in_place(&mut self, rhs: &Self) {
    if LIMBS == 1 {
      self.limbs[0] = self.limbs[0].wrapping_add(rhs.limbs[0]);
    } else {
      words::add_assign(&mut self.limbs, &rhs.limbs);
    }
    self.mask();
  }

  /// `a - b` is `a + (-b)`.
  pub(crate) fn sub_in_place(&mut self, rhs: &Self) {
    let mut negated = *rhs;
    negated.negate_bits();
    self.add_in_place(&negated);
  }

  pub(crate) fn mul_in_place(&mut self, rhs: &Self) {
    if LIMBS == 1 {
      self.limbs[0] = self.limbs[0].wrapping_mul(rhs.limbs[0]);
      self.mask();
      return
    }
    // Multiply the magnitudes and re-apply the sign. Modulo 2^N this is the same as multiplying
    // the raw two's complement patterns, but it is what the widening multiply needs too.
    let negative = self.sign() != rhs.sign();
    let a = self.magnitude();
    let b = rhs.magnitude();
    words::mul_into(&mut self.limbs, &a.limbs, &b.limbs);
    self.mask();
    if negative {
      self.negate_bits()
    }
  }

  pub(crate) fn and_in_place(&mut self, rhs: &Self) {
    for (a, &b) in self.limbs.iter_mut().zip(&rhs.limbs) { *a &= b }
  }

  pub(crate) fn or_in_place(&mut self, rhs: &Self) {
    for (a, &b) in self.limbs.iter_mut().zip(&rhs.limbs) { *a |= b }
  }

  pub(crate) fn xor_in_place(&mut self, rhs: &Self) {
    for (a, &b) in self.limbs.iter_mut().zip(&rhs.limbs) { *a ^= b }
  }

  /// Add one, wrapping around from the maximum to the minimum.
  pub fn inc(&mut self) -> &mut Self {
    words::increment(&mut self.limbs);
    self.mask();
    self
  }

  /// Subtract one, wrapping around from the minimum to the maximum.
  pub fn dec(&mut self) -> &mut Self {
    self.sub_in_place(&Self::ONE);
    self
  }

  /// The exact sum `self + rhs` in a type with at least one more bit.
  ///
  /// ```
  /// # use blockint::{FixedInt, Int8};
  /// let x: FixedInt<9, 2, u8> = Int8::from(127).widening_add(&Int8::from(127));
  /// assert_eq!(x, FixedInt::from(254));
  /// ```
  pub fn widening_add<const M: u32, const ML: usize>(&self, rhs: &Self) -> FixedInt<M, ML, L, S> {
    const { assert!(M > N, "widening_add needs a result type with more bits") };
    let mut sum = self.resize::<M, ML>();
    sum.add_in_place(&rhs.resize());
    sum
  }

  /// The exact difference `self - rhs` in a type with at least one more bit.
  ///
  /// Note: for [`Unsigned`] operands the difference may be negative, in which case the result
  /// wraps modulo `2^M`.
  pub fn widening_sub<const M: u32, const ML: usize>(&self, rhs: &Self) -> FixedInt<M, ML, L, S> {
    const { assert!(M > N, "widening_sub needs a result type with more bits") };
    let mut difference = self.resize::<M, ML>();
    difference.sub_in_place(&rhs.resize());
    difference
  }

  /// The exact product `self * rhs` in a type with at least twice as many bits.
  ///
  /// ```
  /// # use blockint::{Int32, Int64};
  /// let x: Int64 = Int32::from(i32::MIN).widening_mul(&Int32::from(i32::MIN));
  /// assert_eq!(x, Int64::from(1i64 << 62));
  /// ```
  pub fn widening_mul<const M: u32, const ML: usize>(&self, rhs: &Self) -> FixedInt<M, ML, L, S> {
    const { assert!(M >= 2 * N, "widening_mul needs a result type with at least twice the bits") };
    let negative = self.sign() != rhs.sign();
    let mut product = FixedInt::<M, ML, L, S>::ZERO;
    words::mul_into(&mut product.limbs, &self.magnitude().limbs, &rhs.magnitude().limbs);
    product.mask();
    if negative {
      product.negate_bits()
    }
    product
  }
}

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
> FixedInt<N, LIMBS, L, Signed> {
  /// Negate in place (two's complement). The minimum value `-2^(N-1)` is its own negation.
  ///
  /// Only available for [`Signed`] integers.
  #[inline]
  pub fn twos_complement(&mut self) -> &mut Self {
    self.negate_bits();
    self
  }

  /// Absolute value. Like the native `wrapping_abs`, the minimum is returned unchanged.
  pub fn abs(&self) -> Self {
    if self.sign() {
      let mut x = *self;
      x.negate_bits();
      x
    } else {
      *self
    }
  }
}
