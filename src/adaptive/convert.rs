use super::*;
use crate::error::OutOfRange;

impl<L: Limb> AdaptiveInt<L> {
  fn from_sign_u128(negative: bool, x: u128) -> Self {
    let mut magnitude = Vec::with_capacity(128usize.div_ceil(L::BITS as usize));
    let mut rest = x;
    while rest != 0 {
      magnitude.push(L::of_u128(rest));
      rest >>= L::BITS;
    }
    Self { negative: negative && x != 0, magnitude }
  }

  pub(crate) fn from_i128(x: i128) -> Self {
    Self::from_sign_u128(x < 0, x.unsigned_abs())
  }

  pub(crate) fn from_u128(x: u128) -> Self {
    Self::from_sign_u128(false, x)
  }

  /// The magnitude as a `u128`, if it fits.
  fn magnitude_u128(&self) -> Result<u128, OutOfRange> {
    if self.msb() >= 128 {
      return Err(OutOfRange)
    }
    Ok(self.magnitude.iter().rev().fold(0, |acc, limb| (acc << L::BITS) | limb.as_u64() as u128))
  }

  /// The value of `x` truncated toward zero. NaN and the infinities give zero.
  ///
  /// ```
  /// # use blockint::AdaptiveInt;
  /// assert_eq!(AdaptiveInt::<u32>::from_f64(-2.9), AdaptiveInt::from(-2));
  /// assert_eq!(AdaptiveInt::<u32>::from_f64(1e30).to_string(), "1000000000000000019884624838656");
  /// assert_eq!(AdaptiveInt::<u32>::from_f64(f64::NAN), AdaptiveInt::ZERO);
  /// ```
  pub fn from_f64(x: f64) -> Self {
    if !x.is_finite() {
      return Self::ZERO
    }
    let bits = x.to_bits();
    let negative = bits >> 63 != 0;
    let exponent = ((bits >> 52) & 0x7ff) as i32;
    if exponent == 0 {
      // Zero or subnormal, |x| < 1.
      return Self::ZERO
    }
    let mantissa = (bits & ((1 << 52) - 1)) | (1 << 52);
    // |x| = mantissa * 2^shift
    let shift = exponent - 1075;
    let mut result = if shift >= 0 {
      let mut result = Self::from_u128(mantissa as u128);
      result.shl_bits(shift as u32);
      result
    } else if shift > -64 {
      Self::from_u128((mantissa >> -shift) as u128)
    } else {
      Self::ZERO
    };
    result.set_sign(negative);
    result
  }

  /// The value as an `f64`, accumulated limb by limb from the most significant one. Exact if the
  /// magnitude fits in 53 bits; infinite if it exceeds the `f64` range.
  pub fn to_f64(&self) -> f64 {
    let radix = L::MAX.as_u64() as f64 + 1.0;
    let magnitude = self.magnitude.iter().rev()
      .fold(0.0, |acc, limb| acc * radix + limb.as_u64() as f64);
    if self.negative { -magnitude } else { magnitude }
  }
}

macro_rules! impl_from_native {
  ($via:ident, $($t:ty),*) => {
    $(
      impl<L: Limb> From<$t> for AdaptiveInt<L> {
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

impl<L: Limb> TryFrom<&AdaptiveInt<L>> for u128 {
  type Error = OutOfRange;

  fn try_from(x: &AdaptiveInt<L>) -> Result<Self, OutOfRange> {
    if x.is_negative() {
      return Err(OutOfRange)
    }
    x.magnitude_u128()
  }
}

impl<L: Limb> TryFrom<&AdaptiveInt<L>> for i128 {
  type Error = OutOfRange;

  fn try_from(x: &AdaptiveInt<L>) -> Result<Self, OutOfRange> {
    let magnitude = x.magnitude_u128()?;
    if x.is_negative() {
      if magnitude > i128::MIN.unsigned_abs() {
        return Err(OutOfRange)
      }
      Ok((magnitude as i128).wrapping_neg())
    } else {
      i128::try_from(magnitude).map_err(|_| OutOfRange)
    }
  }
}

macro_rules! impl_try_into_native {
  ($($t:ty),*) => {
    $(
      impl<L: Limb> TryFrom<&AdaptiveInt<L>> for $t {
        type Error = OutOfRange;

        fn try_from(x: &AdaptiveInt<L>) -> Result<Self, OutOfRange> {
          <$t>::try_from(i128::try_from(x)?).map_err(|_| OutOfRange)
        }
      }
    )*
  }
}

impl_try_into_native!{i8, i16, i32, i64, u8, u16, u32, u64}
