use super::*;
use crate::underlying::words;
use alloc::string::String;

impl<L: Limb> AdaptiveInt<L> {
  /// Zero (no limbs, not negative).
  pub const ZERO: Self = Self { negative: false, magnitude: Vec::new() };

  #[inline]
  pub fn zero() -> Self {
    Self::ZERO
  }

  /// Construct from a sign and a magnitude, least significant limb first. Leading zero limbs are
  /// discarded, and a zero magnitude is never negative.
  ///
  /// ```
  /// # use blockint::AdaptiveInt;
  /// let x = AdaptiveInt::<u8>::from_sign_magnitude(true, vec![0x01, 0x02, 0x00]);
  /// assert_eq!(x, AdaptiveInt::from(-0x201));
  /// assert_eq!(x.limbs(), 2);
  /// assert!(!AdaptiveInt::<u8>::from_sign_magnitude(true, vec![0, 0]).is_negative());
  /// ```
  pub fn from_sign_magnitude(negative: bool, magnitude: Vec<L>) -> Self {
    let mut x = Self { negative, magnitude };
    x.trim();
    x
  }

  /// Discard the leading zero limbs; clear the sign of zero.
  #[inline]
  pub(crate) fn trim(&mut self) {
    self.magnitude.truncate(words::trimmed_len(&self.magnitude));
    if self.magnitude.is_empty() {
      self.negative = false
    }
  }

  /// The magnitude, least significant limb first. The last limb, if any, is non-zero.
  #[inline]
  pub fn as_limbs(&self) -> &[L] {
    &self.magnitude
  }

  /// The number of limbs of the magnitude (zero for zero).
  #[inline]
  pub fn limbs(&self) -> usize {
    self.magnitude.len()
  }

  /// Limb `i` of the magnitude, or zero if `i` is past the last limb.
  #[inline]
  pub fn limb(&self, i: usize) -> L {
    self.magnitude.get(i).copied().unwrap_or(L::ZERO)
  }

  /// Set limb `i` of the magnitude, growing it if needed.
  ///
  /// ```
  /// # use blockint::AdaptiveInt;
  /// let mut x = AdaptiveInt::<u8>::zero();
  /// x.set_limb(2, 1);
  /// assert_eq!(x, AdaptiveInt::from(0x10000));
  /// x.set_limb(2, 0);
  /// assert!(x.is_zero());
  /// ```
  pub fn set_limb(&mut self, i: usize, value: L) {
    if i >= self.magnitude.len() {
      if value == L::ZERO {
        return
      }
      self.magnitude.resize(i + 1, L::ZERO);
    }
    self.magnitude[i] = value;
    self.trim()
  }

  /// Set to zero, keeping the allocation.
  pub fn clear(&mut self) {
    self.magnitude.clear();
    self.negative = false
  }

  /// Bit `i` of the magnitude (`false` past the last limb).
  #[inline]
  pub fn test(&self, i: u32) -> bool {
    let limb = self.limb((i / L::BITS) as usize);
    limb & (L::ONE << (i % L::BITS)) != L::ZERO
  }

  /// Set bit `i` of the magnitude to `value`, growing it if needed.
  pub fn set_bit(&mut self, i: u32, value: bool) {
    let index = (i / L::BITS) as usize;
    let bit = L::ONE << (i % L::BITS);
    let limb = self.limb(index);
    self.set_limb(index, if value { limb | bit } else { limb & !bit })
  }

  /// Whether the value is negative.
  #[inline]
  pub fn sign(&self) -> bool {
    self.negative
  }

  #[inline]
  pub fn is_negative(&self) -> bool {
    self.negative
  }

  #[inline]
  pub fn is_zero(&self) -> bool {
    self.magnitude.is_empty()
  }

  #[inline]
  pub fn is_odd(&self) -> bool {
    self.limb(0) & L::ONE != L::ZERO
  }

  #[inline]
  pub fn is_even(&self) -> bool {
    !self.is_odd()
  }

  /// Make the value negative (if `negative`) or non-negative. Zero stays non-negative.
  pub fn set_sign(&mut self, negative: bool) {
    self.negative = negative && !self.is_zero()
  }

  /// Negate in place.
  pub fn flip_sign(&mut self) -> &mut Self {
    self.set_sign(!self.negative);
    self
  }

  /// The absolute value.
  pub fn abs(&self) -> Self {
    Self { negative: false, magnitude: self.magnitude.clone() }
  }

  /// Position of the most significant set bit of the magnitude, or -1 for zero.
  ///
  /// ```
  /// # use blockint::AdaptiveInt;
  /// assert_eq!(AdaptiveInt::<u8>::from(-0x100).msb(), 8);
  /// assert_eq!(AdaptiveInt::<u8>::zero().msb(), -1);
  /// ```
  #[doc(alias = "most_significant_bit_position")]
  #[inline]
  pub fn msb(&self) -> i32 {
    words::msb(&self.magnitude)
  }

  /// The number of bits of the magnitude (zero for zero).
  #[inline]
  pub fn bit_len(&self) -> u64 {
    (self.msb() + 1) as u64
  }

  /// The limbs in binary, most significant first, separated by spaces.
  ///
  /// ```
  /// # use blockint::AdaptiveInt;
  /// assert_eq!(AdaptiveInt::<u8>::from(0x105).show_limbs(), "0b0000'0001 0b0000'0101");
  /// assert_eq!(AdaptiveInt::<u8>::zero().show_limbs(), "no limbs");
  /// ```
  pub fn show_limbs(&self) -> String {
    self.show_each(|limb, s| {
      s.push_str("0b");
      for i in (0 .. L::BITS).rev() {
        s.push(if limb & (L::ONE << i) != L::ZERO { '1' } else { '0' });
        if i > 0 && i % 4 == 0 {
          s.push('\'');
        }
      }
    })
  }

  /// The limbs as decimal numbers, most significant first, separated by spaces (i.e. the value in
  /// radix `2^L::BITS`).
  ///
  /// ```
  /// # use blockint::AdaptiveInt;
  /// assert_eq!(AdaptiveInt::<u8>::from(0x105).show_limb_values(), "1 5");
  /// ```
  pub fn show_limb_values(&self) -> String {
    self.show_each(|limb, s| s.push_str(&decimal_digits(&[limb])))
  }

  fn show_each(&self, mut write: impl FnMut(L, &mut String)) -> String {
    if self.is_zero() {
      return String::from("no limbs")
    }
    let mut s = String::new();
    for (i, &limb) in self.magnitude.iter().enumerate().rev() {
      write(limb, &mut s);
      if i > 0 {
        s.push(' ');
      }
    }
    s
  }
}
