use super::*;
use crate::error::{ParseIntError, ParseIntErrorKind};
use crate::underlying::words;

use alloc::string::String;
use core::fmt::{self, Debug, Display};
use core::str::FromStr;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// The magnitude `x` (least significant limb first) in decimal, without leading zeros.
///
/// Peels off [`DECIMAL_CHUNK`](crate::underlying::Sealed::DECIMAL_CHUNK) at a time, i.e. as many
/// digits as a single-limb division can produce.
pub(crate) fn decimal_digits<L: Limb>(x: &[L]) -> String {
  let mut rest = x[.. words::trimmed_len(x)].to_vec();
  if rest.is_empty() {
    return String::from("0")
  }
  let mut chunks = Vec::new();
  while !rest.is_empty() {
    chunks.push(words::div_rem_limb(&mut rest, L::DECIMAL_CHUNK));
    rest.truncate(words::trimmed_len(&rest));
  }
  let mut s = String::with_capacity(chunks.len() * L::DECIMAL_CHUNK_DIGITS as usize);
  for (i, chunk) in chunks.iter().rev().enumerate() {
    // All but the leading chunk are zero-padded to full width.
    let width = if i == 0 { 0 } else { L::DECIMAL_CHUNK_DIGITS as usize };
    push_decimal(&mut s, chunk.as_u64(), width);
  }
  s
}

fn push_decimal(s: &mut String, mut x: u64, width: usize) {
  let mut digits = [0u8; 20];
  let mut n = 0;
  while x != 0 || n < width {
    digits[n] = b'0' + (x % 10) as u8;
    x /= 10;
    n += 1;
  }
  s.extend(digits[.. n].iter().rev().map(|&d| d as char));
}

/// The pieces of an integer literal.
pub(crate) struct ParsedInt<L> {
  pub negative: bool,
  /// 2, 10, or 16.
  pub radix: u32,
  /// Trimmed, least significant limb first.
  pub magnitude: Vec<L>,
}

/// Parse `[+-][0x|0X|0b|0B]digits`, where the digits may be separated by `'`.
pub(crate) fn parse_integer<L: Limb>(s: &str) -> Result<ParsedInt<L>, ParseIntError> {
  let (negative, s) = match s.as_bytes().first() {
    Some(b'-') => (true, &s[1 ..]),
    Some(b'+') => (false, &s[1 ..]),
    _ => (false, s),
  };
  let (radix, digits) =
    if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
      (16, digits)
    } else if let Some(digits) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
      (2, digits)
    } else {
      (10, s)
    };

  let mut magnitude = Vec::new();
  let mut empty = true;
  for c in digits.chars().filter(|&c| c != '\'') {
    let digit = c.to_digit(radix).ok_or(ParseIntError::new(ParseIntErrorKind::InvalidDigit))?;
    let carry = words::mul_add_limb(&mut magnitude, L::of_u64(radix.into()), L::of_u64(digit.into()));
    if carry != L::ZERO {
      magnitude.push(carry)
    }
    empty = false;
  }
  if empty {
    return Err(ParseIntError::new(ParseIntErrorKind::Empty))
  }
  Ok(ParsedInt { negative, radix, magnitude })
}

impl<L: Limb> AdaptiveInt<L> {
  /// The magnitude in binary, most significant bit first, prefixed by `0b` (and by `-` if
  /// negative). If `nibble_marker` is set, a `'` separates each group of 4 bits.
  ///
  /// ```
  /// # use blockint::AdaptiveInt;
  /// assert_eq!(AdaptiveInt::<u8>::from(-0x15a).to_binary(true), "-0b1'0101'1010");
  /// assert_eq!(AdaptiveInt::<u8>::zero().to_binary(true), "0b0");
  /// ```
  pub fn to_binary(&self, nibble_marker: bool) -> String {
    let bits = self.bit_len().max(1) as u32;
    let mut s = String::with_capacity(3 + bits as usize + bits as usize / 4);
    if self.negative {
      s.push('-');
    }
    s.push_str("0b");
    for i in (0 .. bits).rev() {
      s.push(if self.test(i) { '1' } else { '0' });
      if nibble_marker && i > 0 && i % 4 == 0 {
        s.push('\'');
      }
    }
    s
  }

  /// The magnitude in hex, most significant digit first, prefixed by `0x` (and by `-` if
  /// negative). If `marker` is set, a `'` separates each group of 16 bits.
  ///
  /// ```
  /// # use blockint::AdaptiveInt;
  /// assert_eq!(AdaptiveInt::<u8>::from(0xabcdef).to_hex(true), "0xAB'CDEF");
  /// assert_eq!(AdaptiveInt::<u8>::from(-0xabcdef).to_hex(false), "-0xABCDEF");
  /// ```
  pub fn to_hex(&self, marker: bool) -> String {
    let nibbles = self.bit_len().div_ceil(4).max(1) as u32;
    let mut s = String::with_capacity(3 + 2 * nibbles as usize);
    if self.negative {
      s.push('-');
    }
    s.push_str("0x");
    for n in (0 .. nibbles).rev() {
      let nibble = (0 .. 4).fold(0, |acc, i| acc | (self.test(4 * n + i) as usize) << i);
      s.push(HEX_DIGITS[nibble] as char);
      if marker && n > 0 && n % 4 == 0 {
        s.push('\'');
      }
    }
    s
  }

  /// A description of this type, e.g. `AdaptiveInt<u32>`.
  pub fn type_tag() -> String {
    alloc::format!("AdaptiveInt<{}>", core::any::type_name::<L>())
  }
}

impl<L: Limb> Debug for AdaptiveInt<L> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("AdaptiveInt")
      .field(&format_args!("{}", self.to_hex(true)))
      .finish()
  }
}

impl<L: Limb> Display for AdaptiveInt<L> {
  /// The value in decimal. Honours width, fill, and the `+` flag.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.pad_integral(!self.negative, "", &decimal_digits(&self.magnitude))
  }
}

impl<L: Limb> FromStr for AdaptiveInt<L> {
  type Err = ParseIntError;

  /// Parse a decimal, `0x` hex, or `0b` binary literal with an optional sign. `'` separators are
  /// ignored.
  ///
  /// ```
  /// # use blockint::AdaptiveInt;
  /// let x: AdaptiveInt = "-0x1'0000'0000'0000'0000".parse().unwrap();
  /// assert_eq!(x, -(AdaptiveInt::from(1) << 64));
  /// assert_eq!(x.to_string(), "-18446744073709551616");
  /// ```
  fn from_str(s: &str) -> Result<Self, ParseIntError> {
    let parsed = parse_integer(s)?;
    Ok(Self::from_sign_magnitude(parsed.negative, parsed.magnitude))
  }
}
