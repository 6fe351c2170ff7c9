use super::*;
use crate::AdaptiveInt;
use crate::adaptive::{decimal_digits, parse_integer};
use crate::error::{OutOfRange, ParseIntError};
use crate::underlying::words;

use alloc::string::String;
use core::fmt::{self, Debug, Display};
use core::str::FromStr;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> FixedInt<N, LIMBS, L, S> {
  /// All `N` bits, most significant first, prefixed by `0b`. If `nibble_marker` is set, a `'`
  /// separates each group of 4 bits (counting from the least significant).
  ///
  /// ```
  /// # use blockint::FixedInt;
  /// let x = FixedInt::<10, 2, u8>::from(-2);
  /// assert_eq!(x.to_binary(false), "0b1111111110");
  /// assert_eq!(x.to_binary(true), "0b11'1111'1110");
  /// ```
  pub fn to_binary(&self, nibble_marker: bool) -> String {
    let mut s = String::with_capacity(2 + N as usize + N as usize / 4);
    s.push_str("0b");
    for i in (0 .. N).rev() {
      s.push(if self.test(i) { '1' } else { '0' });
      if nibble_marker && i > 0 && i % 4 == 0 {
        s.push('\'');
      }
    }
    s
  }

  /// All `N` bits as hex digits, most significant first, prefixed by `0x`. If `word_marker` is
  /// set, a `'` marks each limb boundary.
  ///
  /// ```
  /// # use blockint::FixedInt;
  /// let x = FixedInt::<20, 3, u8>::from(0xabcde);
  /// assert_eq!(x.to_hex(false), "0xABCDE");
  /// assert_eq!(x.to_hex(true), "0xA'BC'DE");
  /// ```
  pub fn to_hex(&self, word_marker: bool) -> String {
    let nibbles = N.div_ceil(4);
    let mut s = String::with_capacity(2 + 2 * nibbles as usize);
    s.push_str("0x");
    for n in (0 .. nibbles).rev() {
      s.push(HEX_DIGITS[self.nibble(n) as usize] as char);
      if word_marker && n > 0 && (4 * n) % L::BITS == 0 {
        s.push('\'');
      }
    }
    s
  }

  /// A description of this type: width, limb count, limb type, signedness.
  ///
  /// ```
  /// # use blockint::{FixedInt, Unsigned};
  /// assert_eq!(FixedInt::<12, 2, u8, Unsigned>::type_tag(), "FixedInt<12, 2, u8, Unsigned>");
  /// ```
  pub fn type_tag() -> String {
    let signedness = if S::SIGNED { "Signed" } else { "Unsigned" };
    alloc::format!("FixedInt<{N}, {LIMBS}, {}, {signedness}>", core::any::type_name::<L>())
  }
}

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> Debug for FixedInt<N, LIMBS, L, S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("FixedInt")
      .field(&format_args!("{}", self.to_binary(true)))
      .finish()
  }
}

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> Display for FixedInt<N, LIMBS, L, S> {
  /// The value in decimal. Honours width, fill, and the `+` flag.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad_integral(!self.sign(), "", &decimal_digits(&self.magnitude().limbs))
  }
}

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> FromStr for FixedInt<N, LIMBS, L, S> {
  type Err = ParseIntError;

  /// Parse a decimal value (which must be in range), or a `0b`/`0x` bit pattern of at most `N`
  /// bits. Either may have a sign, and `'` separators are ignored. A `-` before a bit pattern
  /// negates it.
  ///
  /// ```
  /// # use blockint::Int8;
  /// assert_eq!("-128".parse(), Ok(Int8::from(-128)));
  /// assert_eq!("0b1000'0000".parse(), Ok(Int8::from(-128)));
  /// assert_eq!("0xff".parse(), Ok(Int8::from(-1)));
  /// assert!("128".parse::<Int8>().is_err());
  /// ```
  fn from_str(s: &str) -> Result<Self, ParseIntError> {
    let parsed = parse_integer::<L>(s)?;
    if parsed.radix == 10 {
      let value = AdaptiveInt::from_sign_magnitude(parsed.negative, parsed.magnitude);
      return Ok(Self::try_from(&value)?)
    }
    let magnitude = parsed.magnitude;
    if words::msb(&magnitude) >= N as i32 || (parsed.negative && !S::SIGNED && !magnitude.is_empty()) {
      return Err(OutOfRange.into())
    }
    let mut x = Self::from_limbs(core::array::from_fn(|i| magnitude.get(i).copied().unwrap_or(L::ZERO)));
    if parsed.negative {
      x.negate_bits()
    }
    Ok(x)
  }
}
