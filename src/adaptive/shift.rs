use super::*;
use crate::underlying::words;

impl<L: Limb> AdaptiveInt<L> {
  /// Multiply by `2^n`, growing the magnitude by `n / L::BITS + 1` limbs. The allocation is
  /// proportional to `n`, so `x << i32::MAX` (or `x >> i32::MIN`) asks for about 256 MiB.
  pub(crate) fn shl_bits(&mut self, n: u32) {
    if self.is_zero() || n == 0 {
      return
    }
    let len = self.magnitude.len() + (n / L::BITS) as usize + 1;
    self.magnitude.resize(len, L::ZERO);
    words::shl_assign(&mut self.magnitude, n);
    self.trim()
  }

  /// Divide by `2^n`, truncating the magnitude (i.e. rounding toward zero).
  pub(crate) fn shr_bits(&mut self, n: u32) {
    let limb_shift = (n / L::BITS) as usize;
    if limb_shift >= self.magnitude.len() {
      return self.clear()
    }
    self.magnitude.drain(.. limb_shift);
    words::shr_assign(&mut self.magnitude, n % L::BITS, false);
    self.trim()
  }

  /// Shift left by `n` bits, or right by `-n` bits if `n` is negative.
  pub(crate) fn shl_signed(&mut self, n: i32) {
    if n >= 0 {
      self.shl_bits(n as u32)
    } else {
      self.shr_bits(n.unsigned_abs())
    }
  }

  /// Shift right by `n` bits, or left by `-n` bits if `n` is negative. A negative `n` allocates
  /// as [`Self::shl_bits`] does.
  pub(crate) fn shr_signed(&mut self, n: i32) {
    if n >= 0 {
      self.shr_bits(n as u32)
    } else {
      self.shl_bits(n.unsigned_abs())
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::Integer;
  use malachite::base::num::arithmetic::traits::PowerOf2;
  use proptest::prelude::*;

  #[test]
  fn grow_and_shrink() {
    type A = AdaptiveInt<u8>;
    let x = A::from(0x81) << 9;
    assert_eq!(x.as_limbs(), &[0x00, 0x02, 0x01]);
    assert_eq!(&x >> 9, A::from(0x81));
    assert_eq!(&x >> 17, A::ZERO);
    assert_eq!(&x >> 1000, A::ZERO);
    assert_eq!(&x << -9, A::from(0x81));
    assert_eq!(A::ZERO << 100, A::ZERO);
    assert_eq!((A::from(1) << 64).limbs(), 9);
  }

  #[test]
  fn large_shifts() {
    type A = AdaptiveInt<u8>;
    assert_eq!((A::from(1) << 100_000).limbs(), 12_501);
    let x = A::from(-3) >> -(1 << 20);
    assert_eq!(x.bit_len(), (1 << 20) + 2);
    assert!(x.is_negative());
    assert_eq!(x >> (1 << 20), A::from(-3));
    assert_eq!(A::ZERO >> i32::MIN, A::ZERO);
    assert_eq!(A::from(5) >> i32::MAX, A::ZERO);
  }

  #[test]
  fn right_shift_truncates_toward_zero() {
    type A = AdaptiveInt<u16>;
    assert_eq!(A::from(-7) >> 1, A::from(-3));
    assert_eq!(A::from(-1) >> 1, A::ZERO);
    assert!(!(A::from(-1) >> 1).is_negative());
    assert_eq!(A::from(-0x10000) >> 16, A::from(-1));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn shl_u32(a in AdaptiveInt::<u32>::cases_proptest(), k in 0 .. 200u32) {
      prop_assert_eq!((&a << k as i32).to_integer(), a.to_integer() << k)
    }

    #[test]
    fn shr_u8(a in AdaptiveInt::<u8>::cases_proptest(), k in 0 .. 200u32) {
      let exact = a.to_integer() / Integer::power_of_2(k as u64);
      prop_assert_eq!((&a >> k as i32).to_integer(), exact)
    }
  }
}
