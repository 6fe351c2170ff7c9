use super::{Limb, Sealed};

/// Implementation of all functions; the only per-type knobs are the double-width type and the
/// decimal chunk.
macro_rules! impl_limb {
  ($limb:ty, $double:ty, $chunk:expr, $chunk_digits:expr) => {
    impl Limb for $limb {}
    impl Sealed for $limb {
      type Double = $double;

      const ZERO: Self = 0;
      const ONE: Self = 1;
      const MAX: Self = <$limb>::MAX;
      const BITS: u32 = <$limb>::BITS;

      const DECIMAL_CHUNK: Self = $chunk;
      const DECIMAL_CHUNK_DIGITS: u32 = $chunk_digits;

      #[inline]
      fn widen(self) -> $double { self as $double }

      #[inline]
      fn as_u64(self) -> u64 { self as u64 }

      #[inline]
      fn of_u64(x: u64) -> Self { x as $limb }

      #[inline]
      fn of_u128(x: u128) -> Self { x as $limb }

      #[inline]
      fn leading_zeros(self) -> u32 { <$limb>::leading_zeros(self) }

      #[inline]
      fn count_ones(self) -> u32 { <$limb>::count_ones(self) }

      #[inline]
      fn mask_lsb(self, n: u32) -> Self {
        if n >= Self::BITS { self } else { self & ((1 << n) - 1) }
      }

      #[inline]
      fn wrapping_add(self, other: Self) -> Self { <$limb>::wrapping_add(self, other) }

      #[inline]
      fn wrapping_sub(self, other: Self) -> Self { <$limb>::wrapping_sub(self, other) }

      #[inline]
      fn wrapping_mul(self, other: Self) -> Self { <$limb>::wrapping_mul(self, other) }

      #[inline]
      fn carrying_add(self, other: Self, carry: bool) -> (Self, bool) {
        let (sum, c1) = <$limb>::overflowing_add(self, other);
        let (sum, c2) = <$limb>::overflowing_add(sum, carry as $limb);
        (sum, c1 | c2)
      }

      #[inline]
      fn borrowing_sub(self, other: Self, borrow: bool) -> (Self, bool) {
        let (diff, b1) = <$limb>::overflowing_sub(self, other);
        let (diff, b2) = <$limb>::overflowing_sub(diff, borrow as $limb);
        (diff, b1 | b2)
      }
    }
  }
}

impl_limb!{u8,  u16,  100, 2}
impl_limb!{u16, u32,  10_000, 4}
impl_limb!{u32, u64,  1_000_000_000, 9}
impl_limb!{u64, u128, 10_000_000_000_000_000_000, 19}

#[cfg(test)]
#[allow(overflowing_literals)]
mod tests {
  use super::*;

  #[test]
  fn mask_lsb() {
    assert_eq!(0b01111110_u8.mask_lsb(3), 0b00000110_u8);
    assert_eq!(0xabcd_u16.mask_lsb(4), 0x000d_u16);
    assert_eq!(0xabcdabcd_u32.mask_lsb(4), 0x0000000d_u32);
    assert_eq!(0xdeadbeefdeadbeef_u64.mask_lsb(6), 0x2f_u64);
    assert_eq!(0xdeadbeefdeadbeef_u64.mask_lsb(64), 0xdeadbeefdeadbeef_u64);
  }

  #[test]
  fn carrying_add() {
    assert_eq!(0xff_u8.carrying_add(0x01, false), (0x00, true));
    assert_eq!(0xfe_u8.carrying_add(0x01, true), (0x00, true));
    assert_eq!(0xfe_u8.carrying_add(0x00, true), (0xff, false));
    assert_eq!(u64::MAX.carrying_add(u64::MAX, true), (u64::MAX, true));
  }

  #[test]
  fn borrowing_sub() {
    assert_eq!(0x00_u8.borrowing_sub(0x01, false), (0xff, true));
    assert_eq!(0x01_u8.borrowing_sub(0x01, true), (0xff, true));
    assert_eq!(0x02_u8.borrowing_sub(0x01, true), (0x00, false));
    assert_eq!(0_u32.borrowing_sub(u32::MAX, true), (0, true));
  }

  #[test]
  fn decimal_chunk_is_the_largest_power_of_ten() {
    fn check<L: Limb>() {
      let chunk = L::DECIMAL_CHUNK.as_u64() as u128;
      assert_eq!(chunk, 10u128.pow(L::DECIMAL_CHUNK_DIGITS));
      assert!(chunk * 10 > L::MAX.as_u64() as u128);
    }
    check::<u8>();
    check::<u16>();
    check::<u32>();
    check::<u64>();
  }
}
