use super::Double;

macro_rules! impl_double {
  ($double:ty, $single:ty) => {
    impl Double for $double {
      type Single = $single;

      const ZERO: Self = 0;
      const ONE: Self = 1;
      const RADIX: Self = 1 << <$single>::BITS;

      #[inline]
      fn components_hi_lo(self) -> ($single, $single) {
        let hi = (self >> <$single>::BITS) as $single;
        let lo = self as $single;
        (hi, lo)
      }

      #[inline]
      fn lo(self) -> $single { self as $single }

      #[inline]
      fn of_hi_lo(hi: $single, lo: $single) -> Self {
        (hi as $double) << <$single>::BITS | lo as $double
      }
    }
  };
}

impl_double!{u16,  u8}
impl_double!{u32,  u16}
impl_double!{u64,  u32}
impl_double!{u128, u64}
