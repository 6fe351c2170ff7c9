//! Error types for the fallible operations of this crate.

use core::fmt;

/// A division or remainder was attempted with a zero divisor.
///
/// Returned by [`QuoRem::into_result`](crate::QuoRem::into_result); the `/` and `%` operators
/// instead follow the crate-wide division-by-zero policy (see the crate docs).
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct DivideByZero;

impl fmt::Display for DivideByZero {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("attempt to divide by zero")
  }
}

impl core::error::Error for DivideByZero {}

/// A value does not fit in the target integer type of a conversion.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct OutOfRange;

impl fmt::Display for OutOfRange {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("value out of range for the target integer type")
  }
}

impl core::error::Error for OutOfRange {}

/// The ways parsing an integer from a string can fail.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseIntErrorKind {
  /// No digits (the string was empty, or held only a sign and/or a radix prefix).
  Empty,
  /// A character that is not a digit in the string's radix (nor a `'` separator).
  InvalidDigit,
  /// The value does not fit in the target type.
  OutOfRange,
}

/// An error which can be returned when parsing an integer with [`str::parse`].
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct ParseIntError {
  pub(crate) kind: ParseIntErrorKind,
}

impl ParseIntError {
  pub(crate) const fn new(kind: ParseIntErrorKind) -> Self {
    Self { kind }
  }

  /// The detailed cause of the failure.
  pub fn kind(&self) -> &ParseIntErrorKind {
    &self.kind
  }
}

impl fmt::Display for ParseIntError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self.kind {
      ParseIntErrorKind::Empty => "cannot parse integer from empty string",
      ParseIntErrorKind::InvalidDigit => "invalid digit found in string",
      ParseIntErrorKind::OutOfRange => "number too large to fit in target type",
    })
  }
}

impl core::error::Error for ParseIntError {}

impl From<OutOfRange> for ParseIntError {
  fn from(_: OutOfRange) -> Self {
    Self::new(ParseIntErrorKind::OutOfRange)
  }
}
