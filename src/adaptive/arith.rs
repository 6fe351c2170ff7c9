use super::*;
use crate::underlying::words;
use core::cmp::Ordering;

impl<L: Limb> AdaptiveInt<L> {
  /// `|self| += |rhs|`.
  fn add_magnitude(&mut self, rhs: &[L]) {
    if self.magnitude.len() < rhs.len() {
      self.magnitude.resize(rhs.len(), L::ZERO);
    }
    if words::add_assign(&mut self.magnitude, rhs) {
      self.magnitude.push(L::ONE);
    }
  }

  /// `|self| = ||self| - |rhs||`, flipping the sign if `|rhs|` was the larger.
  fn sub_magnitude(&mut self, rhs: &[L]) {
    match words::cmp(&self.magnitude, rhs) {
      Ordering::Less => {
        let mut difference = rhs.to_vec();
        words::sub_assign(&mut difference, &self.magnitude);
        self.magnitude = difference;
        self.negative = !self.negative;
      },
      Ordering::Equal => self.magnitude.clear(),
      Ordering::Greater => {
        words::sub_assign(&mut self.magnitude, rhs);
      },
    }
    self.trim()
  }

  pub(crate) fn add_in_place(&mut self, rhs: &Self) {
    if self.negative == rhs.negative {
      self.add_magnitude(&rhs.magnitude)
    } else {
      self.sub_magnitude(&rhs.magnitude)
    }
  }

  pub(crate) fn sub_in_place(&mut self, rhs: &Self) {
    if self.negative != rhs.negative {
      self.add_magnitude(&rhs.magnitude)
    } else {
      self.sub_magnitude(&rhs.magnitude)
    }
  }

  pub(crate) fn mul_in_place(&mut self, rhs: &Self) {
    if self.is_zero() || rhs.is_zero() {
      return self.clear()
    }
    let mut product = alloc::vec![L::ZERO; self.magnitude.len() + rhs.magnitude.len()];
    words::mul_into(&mut product, &self.magnitude, &rhs.magnitude);
    self.magnitude = product;
    self.negative ^= rhs.negative;
    self.trim()
  }

  pub(crate) fn neg_in_place(&mut self) {
    self.flip_sign();
  }

  /// Add one.
  pub fn inc(&mut self) -> &mut Self {
    self.add_in_place(&Self::from(1u8));
    self
  }

  /// Subtract one.
  pub fn dec(&mut self) -> &mut Self {
    self.sub_in_place(&Self::from(1u8));
    self
  }
}
