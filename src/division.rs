//! The quotient/remainder pair returned by the division routines, and the policy for dividing by
//! zero through the `/` and `%` operators.

use crate::error::DivideByZero;

/// Value of [`QuoRem::exception_id`] when the divisor was zero.
pub const DIVIDE_BY_ZERO: u32 = 1;

/// The result of a combined division: quotient, remainder, and an exception code that is `0` on
/// success and [`DIVIDE_BY_ZERO`] if the divisor was zero (in which case both quotient and
/// remainder are zero).
///
/// Division truncates toward zero, so `quotient * divisor + remainder == dividend` and the
/// remainder has the sign of the dividend.
///
/// ```
/// # use blockint::*;
/// let qr = Int32::from(-7).div_rem(&Int32::from(2));
/// assert_eq!(qr.quotient, Int32::from(-3));
/// assert_eq!(qr.remainder, Int32::from(-1));
/// assert_eq!(qr.exception_id, 0);
/// ```
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct QuoRem<T> {
  pub quotient: T,
  pub remainder: T,
  pub exception_id: u32,
}

impl<T> QuoRem<T> {
  #[inline]
  pub(crate) fn new(quotient: T, remainder: T) -> Self {
    Self { quotient, remainder, exception_id: 0 }
  }

  /// Both quotient and remainder are zero.
  #[inline]
  pub(crate) fn divide_by_zero(zero: T) -> Self where T: Clone {
    Self { quotient: zero.clone(), remainder: zero, exception_id: DIVIDE_BY_ZERO }
  }

  /// Whether this is the result of dividing by zero.
  #[inline]
  pub fn is_divide_by_zero(&self) -> bool {
    self.exception_id == DIVIDE_BY_ZERO
  }

  /// `(quotient, remainder)`, or an error if the divisor was zero.
  #[inline]
  pub fn into_result(self) -> Result<(T, T), DivideByZero> {
    if self.is_divide_by_zero() {
      Err(DivideByZero)
    } else {
      Ok((self.quotient, self.remainder))
    }
  }
}

/// Called by the `/` and `%` operators when the divisor is zero, before they return zero.
///
/// With the `div-by-zero-panic` feature this panics; otherwise it only logs a warning.
#[track_caller]
#[inline(never)]
pub(crate) fn report_divide_by_zero(type_name: &str) {
  if cfg!(feature = "div-by-zero-panic") {
    panic!("attempt to divide by zero ({type_name})")
  }
  log::warn!("{type_name}: division by zero, the result is set to zero");
}
