use super::*;
use crate::underlying::words;

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> FixedInt<N, LIMBS, L, S> {
  /// The width of this type in bits (i.e. parameter `N`).
  ///
  /// Note: this is the logical size; the storage is `LIMBS * L::BITS` bits.
  pub const BITS: u32 = {
    assert!(N > 0, "A FixedInt cannot have 0 bits");
    N
  };

  /// The number of limbs of storage (i.e. parameter `LIMBS`).
  pub const LIMBS: usize = {
    assert!(
      LIMBS as u32 == N.div_ceil(L::BITS),
      "LIMBS must be exactly the number of limbs needed to hold N bits, i.e. N.div_ceil(L::BITS)",
    );
    LIMBS
  };

  /// Index of the most significant limb.
  pub(crate) const MSU: usize = Self::LIMBS - 1;

  /// Number of storage bits in the MSU above bit `N-1`. These are always zero (the function
  /// [`Self::mask`] maintains this invariant).
  pub(crate) const UNUSED_BITS: u32 = LIMBS as u32 * L::BITS - Self::BITS;

  /// The bits of the MSU that are part of the number.
  #[inline]
  pub(crate) fn msu_mask() -> L {
    L::MAX >> Self::UNUSED_BITS
  }

  /// The sign bit (bit `N-1`), within the MSU.
  #[inline]
  pub(crate) fn sign_mask() -> L {
    L::ONE << ((Self::BITS - 1) % L::BITS)
  }

  /// Zero the unused bits of the MSU. Every mutating operation ends with this.
  #[inline]
  pub(crate) fn mask(&mut self) {
    if const { Self::UNUSED_BITS != 0 } {
      self.limbs[Self::MSU] &= Self::msu_mask()
    }
  }

  /// Construct from the raw limbs, least significant first. Bits above `N-1` in the last limb are
  /// ignored.
  ///
  /// ```
  /// # use blockint::FixedInt;
  /// let x = FixedInt::<12, 2, u8>::from_limbs([0x34, 0xf2]);
  /// assert_eq!(x.to_limbs(), [0x34, 0x02]);
  /// ```
  #[inline]
  pub fn from_limbs(limbs: [L; LIMBS]) -> Self {
    let mut x = Self { limbs, sign: PhantomData };
    x.mask();
    x
  }

  /// The raw limbs, least significant first.
  #[inline]
  pub fn to_limbs(self) -> [L; LIMBS] {
    self.limbs
  }

  /// Limb `i`, or 0 if `i` is out of range.
  #[inline]
  pub fn limb(&self, i: usize) -> L {
    self.limbs.get(i).copied().unwrap_or(L::ZERO)
  }

  /// Overwrite limb `i`; a no-op if `i` is out of range.
  #[inline]
  pub fn set_limb(&mut self, i: usize, value: L) {
    if let Some(limb) = self.limbs.get_mut(i) {
      *limb = value;
      self.mask();
    }
  }

  /// Set the value from the raw bit pattern in `bits`: bit `i` of `bits` becomes bit `i` of
  /// `self`. Bits beyond `N` are dropped and bits beyond 64 are zero.
  pub fn set_bits(&mut self, bits: u64) {
    for (i, limb) in self.limbs.iter_mut().enumerate() {
      let shift = i as u32 * L::BITS;
      *limb = if shift < 64 { L::of_u64(bits >> shift) } else { L::ZERO };
    }
    self.mask();
  }

  /// Set all bits to 0.
  #[inline]
  pub fn clear(&mut self) {
    self.limbs = [L::ZERO; LIMBS];
  }

  /// Set all bits to 1.
  #[inline]
  pub fn set(&mut self) {
    self.limbs = [L::MAX; LIMBS];
    self.mask();
  }

  /// Bit `i`, or `false` if `i` is out of range.
  #[inline]
  pub fn test(&self, i: u32) -> bool {
    if i >= Self::BITS {
      return false
    }
    let limb = self.limbs[(i / L::BITS) as usize];
    (limb >> (i % L::BITS)) & L::ONE != L::ZERO
  }

  /// As [`Self::test`].
  #[inline]
  pub fn at(&self, i: u32) -> bool {
    self.test(i)
  }

  /// Set bit `i` to `value`; a no-op if `i` is out of range.
  #[inline]
  pub fn set_bit(&mut self, i: u32, value: bool) {
    if i >= Self::BITS {
      return
    }
    let limb = &mut self.limbs[(i / L::BITS) as usize];
    let bit = L::ONE << (i % L::BITS);
    if value { *limb |= bit } else { *limb &= !bit }
  }

  /// Invert all bits in place (one's complement).
  pub fn flip(&mut self) -> &mut Self {
    words::not_assign(&mut self.limbs);
    self.mask();
    self
  }

  /// Nibble (4-bit group) `n`, i.e. bits `4n .. 4n+4`; bits past the top read as 0.
  pub fn nibble(&self, n: u32) -> u8 {
    if n >= Self::BITS.div_ceil(4) {
      return 0
    }
    (0 .. 4).fold(0, |acc, k| acc | (self.test(4 * n + k) as u8) << k)
  }

  /// Is bit `N-1` set in a [`Signed`] integer? Always `false` for [`Unsigned`].
  #[inline]
  pub fn sign(&self) -> bool {
    S::SIGNED && self.limbs[Self::MSU] & Self::sign_mask() != L::ZERO
  }

  #[inline]
  pub fn is_negative(&self) -> bool {
    self.sign()
  }

  #[inline]
  pub fn is_zero(&self) -> bool {
    words::is_zero(&self.limbs)
  }

  #[inline]
  pub fn is_odd(&self) -> bool {
    self.limbs[0] & L::ONE != L::ZERO
  }

  #[inline]
  pub fn is_even(&self) -> bool {
    !self.is_odd()
  }

  /// Are all `N` bits set?
  pub fn all(&self) -> bool {
    self.limbs[.. Self::MSU].iter().all(|&x| x == L::MAX)
      && self.limbs[Self::MSU] == Self::msu_mask()
  }

  /// Is any bit set? Same as `!self.is_zero()`.
  #[inline]
  pub fn any(&self) -> bool {
    !self.is_zero()
  }

  /// Is no bit set? Same as `self.is_zero()`.
  #[inline]
  pub fn none(&self) -> bool {
    self.is_zero()
  }

  /// Is any bit at or below position `msb` set?
  pub fn any_below(&self, msb: u32) -> bool {
    let msb = msb.min(Self::BITS - 1);
    let top = (msb / L::BITS) as usize;
    self.limbs[.. top].iter().any(|&x| x != L::ZERO)
      || self.limbs[top].mask_lsb(msb % L::BITS + 1) != L::ZERO
  }

  pub fn count_ones(&self) -> u32 {
    self.limbs.iter().map(|x| x.count_ones()).sum()
  }

  /// Position of the most significant set bit, or `-1` if `self` is zero. For a negative
  /// [`Signed`] integer this is `N-1`.
  #[doc(alias = "most_significant_bit_position")]
  #[inline]
  pub fn msb(&self) -> i32 {
    words::msb(&self.limbs)
  }

  /// Decide whether to round up when the bits below `target_lsb` are cut off, rounding to nearest
  /// with ties to even: bit `target_lsb` is the lsb of the result, the next one down the guard
  /// bit, then the round bit, and all bits below that are or-ed into the sticky bit.
  ///
  /// ```
  /// # use blockint::Int8;
  /// let mut x = Int8::ZERO;
  /// x.set_bits(0b0001_1000);  // 1.5 in units of 2^4: ties to even, rounds up to 2
  /// assert!(x.rounding_mode(4));
  /// x.set_bits(0b0010_1000);  // 2.5: ties to even, stays 2
  /// assert!(!x.rounding_mode(4));
  /// x.set_bits(0b0010_1001);  // slightly above 2.5, rounds up
  /// assert!(x.rounding_mode(4));
  /// ```
  pub fn rounding_mode(&self, target_lsb: u32) -> bool {
    let lsb = self.test(target_lsb);
    let guard = target_lsb >= 1 && self.test(target_lsb - 1);
    let round = target_lsb >= 2 && self.test(target_lsb - 2);
    let sticky = target_lsb >= 3 && self.any_below(target_lsb - 3);
    let tie = guard && !round && !sticky;
    (lsb && tie) || (guard && !tie)
  }
}

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> Default for FixedInt<N, LIMBS, L, S> {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  type I12 = FixedInt<12, 2, u8>;
  type U12 = FixedInt<12, 2, u8, Unsigned>;

  #[test]
  fn unused_bits_stay_zero() {
    let mut x = I12::ZERO;
    x.set();
    assert_eq!(x.to_limbs(), [0xff, 0x0f]);
    x.set_limb(1, 0xff);
    assert_eq!(x.to_limbs(), [0xff, 0x0f]);
    x.flip();
    assert_eq!(x.to_limbs(), [0x00, 0x00]);
    x.set_bits(0xffff_ffff);
    assert_eq!(x.to_limbs(), [0xff, 0x0f]);
  }

  #[test]
  fn bit_access() {
    let mut x = U12::ZERO;
    x.set_bit(0, true);
    x.set_bit(9, true);
    x.set_bit(12, true);
    assert_eq!(x.to_limbs(), [0x01, 0x02]);
    assert!(x.test(9) && x.at(0));
    assert!(!x.test(12) && !x.test(1000));
    x.set_bit(9, false);
    assert_eq!(x.to_limbs(), [0x01, 0x00]);
    assert_eq!(x.limb(1), 0x00);
    assert_eq!(x.limb(7), 0x00);
    x.set_limb(7, 0xff);
    assert_eq!(x.to_limbs(), [0x01, 0x00]);
  }

  #[test]
  fn sign_and_msb() {
    let mut x = I12::ZERO;
    assert_eq!(x.msb(), -1);
    assert!(!x.sign());
    x.set_bit(11, true);
    assert!(x.sign());
    assert_eq!(x.msb(), 11);
    let u = U12::from_limbs(x.to_limbs());
    assert!(!u.sign());
    assert_eq!(u.msb(), 11);
  }

  #[test]
  fn selectors() {
    let mut x = I12::ZERO;
    x.set_bits(0b1010_0101_1100);
    assert!(x.is_even() && !x.is_odd());
    assert_eq!(x.count_ones(), 6);
    assert_eq!(x.nibble(0), 0b1100);
    assert_eq!(x.nibble(1), 0b0101);
    assert_eq!(x.nibble(2), 0b1010);
    assert_eq!(x.nibble(3), 0);
    assert_eq!(x.nibble(u32::MAX), 0);
    assert!(x.any() && !x.none() && !x.all());
    assert!(!x.any_below(1));
    assert!(x.any_below(2));
    assert!(x.any_below(100));
    x.set();
    assert!(x.all());
  }

  #[test]
  fn nibble_out_of_range() {
    let x = I12::from(-1);
    assert_eq!(x.nibble(2), 0xf);
    assert_eq!(x.nibble(3), 0);
    assert_eq!(x.nibble(u32::MAX / 4), 0);
    assert_eq!(x.nibble(u32::MAX / 4 + 1), 0);
    assert_eq!(x.nibble(u32::MAX), 0);
    let y = FixedInt::<14, 2, u8, Unsigned>::maxpos();
    assert_eq!(y.nibble(3), 0b11);
    assert_eq!(y.nibble(4), 0);
  }

  #[test]
  fn rounding_mode() {
    let mut x = FixedInt::<16, 1, u16>::ZERO;
    x.set_bits(0b0101_1000);
    assert!(x.rounding_mode(4));  // 5.5 -> 6
    x.set_bits(0b0100_1000);
    assert!(!x.rounding_mode(4));  // 4.5 -> 4
    x.set_bits(0b0100_0111);
    assert!(!x.rounding_mode(4));  // below half
    x.set_bits(0b0100_1100);
    assert!(x.rounding_mode(4));  // above half
    x.set_bits(0b0001);
    assert!(!x.rounding_mode(0));
  }
}
