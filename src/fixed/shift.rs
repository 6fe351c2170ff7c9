use super::*;
use crate::underlying::words;

impl<
  const N: u32,
  const LIMBS: usize,
  L: Limb,
  S: Signedness,
> FixedInt<N, LIMBS, L, S> {
  /// Shift left by `n` bits; bits past `N-1` are lost, and `n >= N` gives zero.
  pub(crate) fn shl_bits(&mut self, n: u32) {
    if n >= Self::BITS {
      self.clear();
      return
    }
    if LIMBS == 1 {
      self.limbs[0] = self.limbs[0] << n;
    } else {
      words::shl_assign(&mut self.limbs, n);
    }
    self.mask();
  }

  /// Shift right by `n` bits, filling with the sign bit if [`Signed`] and with zeroes if
  /// [`Unsigned`]. `n >= N` gives zero, also for negative values.
  pub(crate) fn shr_bits(&mut self, n: u32) {
    if n >= Self::BITS {
      self.clear();
      return
    }
    let fill = self.sign();
    if fill {
      // Sign-extend into the unused bits of the MSU, so they shift down as copies of the sign.
      self.limbs[Self::MSU] |= !Self::msu_mask();
    }
    words::shr_assign(&mut self.limbs, n, fill);
    self.mask();
  }

  /// Shift left by `n` bits, or right by `-n` bits if `n` is negative.
  pub(crate) fn shl_signed(&mut self, n: i32) {
    if n >= 0 {
      self.shl_bits(n as u32)
    } else {
      self.shr_bits(n.unsigned_abs())
    }
  }

  /// Shift right by `n` bits, or left by `-n` bits if `n` is negative.
  pub(crate) fn shr_signed(&mut self, n: i32) {
    if n >= 0 {
      self.shr_bits(n as u32)
    } else {
      self.shl_bits(n.unsigned_abs())
    }
  }

  /// Logical shift right by `n` bits: fill with zeroes, even for [`Signed`] integers.
  pub fn logical_shr(&self, n: u32) -> Self {
    let mut x = *self;
    if n >= Self::BITS {
      x.clear();
    } else {
      words::shr_assign(&mut x.limbs, n, false);
    }
    x
  }
}
