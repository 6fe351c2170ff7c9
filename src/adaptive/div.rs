use super::*;
use crate::QuoRem;
use crate::division::report_divide_by_zero;
use crate::underlying::{Double, words};
use core::cmp::Ordering;

impl<L: Limb> AdaptiveInt<L> {
  /// Divide with remainder, truncating toward zero: `self == quotient * rhs + remainder`, and the
  /// remainder has the sign of `self`.
  ///
  /// If `rhs` is zero, the quotient and remainder are zero and `exception_id` is
  /// [`DIVIDE_BY_ZERO`](crate::DIVIDE_BY_ZERO).
  ///
  /// ```
  /// # use blockint::AdaptiveInt;
  /// let a = AdaptiveInt::<u32>::from(-7);
  /// let qr = a.div_rem(&AdaptiveInt::from(2));
  /// assert_eq!((qr.quotient, qr.remainder), (AdaptiveInt::from(-3), AdaptiveInt::from(-1)));
  ///
  /// assert!(a.div_rem(&AdaptiveInt::ZERO).is_divide_by_zero());
  /// ```
  pub fn div_rem(&self, rhs: &Self) -> QuoRem<Self> {
    if rhs.is_zero() {
      return QuoRem::divide_by_zero(Self::ZERO)
    }
    if words::cmp(&self.magnitude, &rhs.magnitude) == Ordering::Less {
      return QuoRem::new(Self::ZERO, self.clone())
    }
    let (quotient, remainder) = if rhs.magnitude.len() == 1 {
      let mut quotient = self.magnitude.clone();
      let remainder = words::div_rem_limb(&mut quotient, rhs.magnitude[0]);
      (quotient, alloc::vec![remainder])
    } else {
      knuth_div_rem(&self.magnitude, &rhs.magnitude)
    };
    QuoRem::new(
      Self::from_sign_magnitude(self.negative ^ rhs.negative, quotient),
      Self::from_sign_magnitude(self.negative, remainder),
    )
  }

  /// `Some(self / rhs)`, or `None` if `rhs` is zero.
  pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
    self.div_rem(rhs).into_result().ok().map(|(quotient, _)| quotient)
  }

  /// `Some(self % rhs)`, or `None` if `rhs` is zero.
  pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
    self.div_rem(rhs).into_result().ok().map(|(_, remainder)| remainder)
  }

  pub(crate) fn div_in_place(&mut self, rhs: &Self) {
    let qr = self.div_rem(rhs);
    if qr.is_divide_by_zero() {
      report_divide_by_zero(&Self::type_tag())
    }
    *self = qr.quotient
  }

  pub(crate) fn rem_in_place(&mut self, rhs: &Self) {
    let qr = self.div_rem(rhs);
    if qr.is_divide_by_zero() {
      report_divide_by_zero(&Self::type_tag())
    }
    *self = qr.remainder
  }
}

/// Knuth's Algorithm D (TAOCP vol. 2, 4.3.1) on magnitudes, returning the untrimmed quotient and
/// remainder. Requires `v.len() >= 2`, `v` trimmed, and `u >= v`.
fn knuth_div_rem<L: Limb>(u: &[L], v: &[L]) -> (Vec<L>, Vec<L>) {
  let n = v.len();
  let m = u.len() - n;
  let radix = L::Double::RADIX;

  // D1. Normalize: shift both so that the top limb of the divisor has its msb set. The dividend
  // gets an extra limb for what is shifted out of its top.
  let shift = v[n - 1].leading_zeros();
  let mut vn = v.to_vec();
  words::shl_assign(&mut vn, shift);
  let mut un = u.to_vec();
  un.push(L::ZERO);
  words::shl_assign(&mut un, shift);

  let (v1, v2) = (vn[n - 1].widen(), vn[n - 2].widen());
  let mut quotient = alloc::vec![L::ZERO; m + 1];
  for j in (0 ..= m).rev() {
    // D3. Estimate the quotient limb from the top two limbs of the remainder and the top limb of
    // the divisor; the estimate is at most 2 too large, and the loop below corrects it using the
    // second limb of the divisor, so that it is at most 1 too large.
    let numerator = L::Double::of_hi_lo(un[j + n], un[j + n - 1]);
    let mut qhat = numerator / v1;
    let mut rhat = numerator % v1;
    while qhat >= radix || qhat * v2 > L::Double::of_hi_lo(rhat.lo(), un[j + n - 2]) {
      qhat = qhat - L::Double::ONE;
      rhat = rhat + v1;
      if rhat >= radix {
        break
      }
    }

    // D4. Multiply and subtract `qhat * vn` from `un[j ..= j+n]`.
    let mut carry = L::Double::ZERO;
    let mut borrow = false;
    for i in 0 .. n {
      let (hi, lo) = (qhat * vn[i].widen() + carry).components_hi_lo();
      carry = hi.widen();
      (un[i + j], borrow) = un[i + j].borrowing_sub(lo, borrow);
    }
    (un[j + n], borrow) = un[j + n].borrowing_sub(carry.lo(), borrow);

    // D5, D6. If that went negative, the estimate was 1 too large: add the divisor back once.
    if borrow {
      log::debug!("knuth_div_rem: qhat {qhat:?} at limb {j} was one too large, adding back");
      qhat = qhat - L::Double::ONE;
      let carry = words::add_assign(&mut un[j .. j + n], &vn);
      un[j + n] = un[j + n].wrapping_add(if carry { L::ONE } else { L::ZERO });
    }
    quotient[j] = qhat.lo();
  }

  // D8. Unnormalize the remainder.
  un.truncate(n);
  words::shr_assign(&mut un, shift, false);
  (quotient, un)
}
