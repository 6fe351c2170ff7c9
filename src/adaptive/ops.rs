use super::*;
use crate::underlying::words;
use core::cmp::Ordering;
use core::ops::*;

/// Helper macro for implementing operators for all combinations of value and reference, on top of
/// an in-place kernel `fn(&mut self, &Self)`. Reference left-hand sides clone.
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $kernel:ident) => {
    impl<L: Limb> $trait<AdaptiveInt<L>> for AdaptiveInt<L> {
      type Output = AdaptiveInt<L>;

      #[inline]
      fn $name(mut self, rhs: Self) -> Self::Output { self.$kernel(&rhs); self }
    }

    impl<L: Limb> $trait<&AdaptiveInt<L>> for AdaptiveInt<L> {
      type Output = AdaptiveInt<L>;

      #[inline]
      fn $name(mut self, rhs: &Self) -> Self::Output { self.$kernel(rhs); self }
    }

    impl<L: Limb> $trait<AdaptiveInt<L>> for &AdaptiveInt<L> {
      type Output = AdaptiveInt<L>;

      #[inline]
      fn $name(self, rhs: AdaptiveInt<L>) -> Self::Output {
        let mut x = self.clone();
        x.$kernel(&rhs);
        x
      }
    }

    impl<L: Limb> $trait<&AdaptiveInt<L>> for &AdaptiveInt<L> {
      type Output = AdaptiveInt<L>;

      #[inline]
      fn $name(self, rhs: &AdaptiveInt<L>) -> Self::Output {
        let mut x = self.clone();
        x.$kernel(rhs);
        x
      }
    }

    impl<L: Limb> $trait_assign<AdaptiveInt<L>> for AdaptiveInt<L> {
      #[inline]
      fn $name_assign(&mut self, rhs: AdaptiveInt<L>) { self.$kernel(&rhs) }
    }

    impl<L: Limb> $trait_assign<&AdaptiveInt<L>> for AdaptiveInt<L> {
      #[inline]
      fn $name_assign(&mut self, rhs: &AdaptiveInt<L>) { self.$kernel(rhs) }
    }
  }
}

mk_ops!{Add, AddAssign, add, add_assign, add_in_place}
mk_ops!{Sub, SubAssign, sub, sub_assign, sub_in_place}
mk_ops!{Mul, MulAssign, mul, mul_assign, mul_in_place}
mk_ops!{Div, DivAssign, div, div_assign, div_in_place}
mk_ops!{Rem, RemAssign, rem, rem_assign, rem_in_place}

/// Same for the shift operators, whose amount is an `i32` (a negative amount shifts the other way).
macro_rules! mk_shift_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $kernel:ident) => {
    impl<L: Limb> $trait<i32> for AdaptiveInt<L> {
      type Output = AdaptiveInt<L>;

      #[inline]
      fn $name(mut self, rhs: i32) -> Self::Output { self.$kernel(rhs); self }
    }

    impl<L: Limb> $trait<i32> for &AdaptiveInt<L> {
      type Output = AdaptiveInt<L>;

      #[inline]
      fn $name(self, rhs: i32) -> Self::Output {
        let mut x = self.clone();
        x.$kernel(rhs);
        x
      }
    }

    impl<L: Limb> $trait_assign<i32> for AdaptiveInt<L> {
      #[inline]
      fn $name_assign(&mut self, rhs: i32) { self.$kernel(rhs) }
    }
  }
}

mk_shift_ops!{Shl, ShlAssign, shl, shl_assign, shl_signed}
mk_shift_ops!{Shr, ShrAssign, shr, shr_assign, shr_signed}

impl<L: Limb> Neg for AdaptiveInt<L> {
  type Output = Self;

  #[inline]
  fn neg(mut self) -> Self::Output {
    self.neg_in_place();
    self
  }
}

impl<L: Limb> Neg for &AdaptiveInt<L> {
  type Output = AdaptiveInt<L>;

  #[inline]
  fn neg(self) -> Self::Output {
    -self.clone()
  }
}

impl<L: Limb> Ord for AdaptiveInt<L> {
  /// Numeric order: by sign first, then by magnitude (reversed if both are negative).
  fn cmp(&self, other: &Self) -> Ordering {
    match (self.negative, other.negative) {
      (false, true) => Ordering::Greater,
      (true, false) => Ordering::Less,
      (false, false) => words::cmp(&self.magnitude, &other.magnitude),
      (true, true) => words::cmp(&other.magnitude, &self.magnitude),
    }
  }
}

impl<L: Limb> PartialOrd for AdaptiveInt<L> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}
