use super::*;
use core::cmp::Ordering;
use core::ops::*;

/// Helper macro for implementing operators for all combinations of value and reference, on top of
/// an in-place kernel `fn(&mut self, &Self)`.
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $kernel:ident) => {
    impl<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>
    $trait<FixedInt<N, LIMBS, L, S>> for FixedInt<N, LIMBS, L, S> {
      type Output = FixedInt<N, LIMBS, L, S>;

      #[inline]
      fn $name(mut self, rhs: Self) -> Self::Output { self.$kernel(&rhs); self }
    }

    impl<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>
    $trait<&FixedInt<N, LIMBS, L, S>> for FixedInt<N, LIMBS, L, S> {
      type Output = FixedInt<N, LIMBS, L, S>;

      #[inline]
      fn $name(mut self, rhs: &Self) -> Self::Output { self.$kernel(rhs); self }
    }

    impl<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>
    $trait<FixedInt<N, LIMBS, L, S>> for &FixedInt<N, LIMBS, L, S> {
      type Output = FixedInt<N, LIMBS, L, S>;

      #[inline]
      fn $name(self, rhs: FixedInt<N, LIMBS, L, S>) -> Self::Output {
        let mut x = *self;
        x.$kernel(&rhs);
        x
      }
    }

    impl<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>
    $trait<&FixedInt<N, LIMBS, L, S>> for &FixedInt<N, LIMBS, L, S> {
      type Output = FixedInt<N, LIMBS, L, S>;

      #[inline]
      fn $name(self, rhs: &FixedInt<N, LIMBS, L, S>) -> Self::Output {
        let mut x = *self;
        x.$kernel(rhs);
        x
      }
    }

    impl<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>
    $trait_assign<FixedInt<N, LIMBS, L, S>> for FixedInt<N, LIMBS, L, S> {
      #[inline]
      fn $name_assign(&mut self, rhs: FixedInt<N, LIMBS, L, S>) { self.$kernel(&rhs) }
    }

    impl<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>
    $trait_assign<&FixedInt<N, LIMBS, L, S>> for FixedInt<N, LIMBS, L, S> {
      #[inline]
      fn $name_assign(&mut self, rhs: &FixedInt<N, LIMBS, L, S>) { self.$kernel(rhs) }
    }
  }
}

mk_ops!{Add, AddAssign, add, add_assign, add_in_place}
mk_ops!{Sub, SubAssign, sub, sub_assign, sub_in_place}
mk_ops!{Mul, MulAssign, mul, mul_assign, mul_in_place}
mk_ops!{Div, DivAssign, div, div_assign, div_in_place}
mk_ops!{Rem, RemAssign, rem, rem_assign, rem_in_place}
mk_ops!{BitAnd, BitAndAssign, bitand, bitand_assign, and_in_place}
mk_ops!{BitOr, BitOrAssign, bitor, bitor_assign, or_in_place}
mk_ops!{BitXor, BitXorAssign, bitxor, bitxor_assign, xor_in_place}

/// Same for the shift operators, whose amount is an `i32` (a negative amount shifts the other way).
macro_rules! mk_shift_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $kernel:ident) => {
    impl<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>
    $trait<i32> for FixedInt<N, LIMBS, L, S> {
      type Output = FixedInt<N, LIMBS, L, S>;

      #[inline]
      fn $name(mut self, rhs: i32) -> Self::Output { self.$kernel(rhs); self }
    }

    impl<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>
    $trait<i32> for &FixedInt<N, LIMBS, L, S> {
      type Output = FixedInt<N, LIMBS, L, S>;

      #[inline]
      fn $name(self, rhs: i32) -> Self::Output {
        let mut x = *self;
        x.$kernel(rhs);
        x
      }
    }

    impl<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>
    $trait_assign<i32> for FixedInt<N, LIMBS, L, S> {
      #[inline]
      fn $name_assign(&mut self, rhs: i32) { self.$kernel(rhs) }
    }
  }
}

mk_shift_ops!{Shl, ShlAssign, shl, shl_assign, shl_signed}
mk_shift_ops!{Shr, ShrAssign, shr, shr_assign, shr_signed}

impl<const N: u32, const LIMBS: usize, L: Limb>
Neg for FixedInt<N, LIMBS, L, Signed> {
  type Output = Self;

  #[inline]
  fn neg(mut self) -> Self::Output {
    self.negate_bits();
    self
  }
}

impl<const N: u32, const LIMBS: usize, L: Limb>
Neg for &FixedInt<N, LIMBS, L, Signed> {
  type Output = FixedInt<N, LIMBS, L, Signed>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}

impl<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>
Not for FixedInt<N, LIMBS, L, S> {
  type Output = Self;

  #[inline]
  fn not(mut self) -> Self::Output {
    self.flip();
    self
  }
}

impl<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>
Not for &FixedInt<N, LIMBS, L, S> {
  type Output = FixedInt<N, LIMBS, L, S>;

  #[inline]
  fn not(self) -> Self::Output {
    !*self
  }
}

impl<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>
Ord for FixedInt<N, LIMBS, L, S> {
  /// Numeric order: for [`Signed`] integers a negative value is less than any non-negative one;
  /// otherwise the limbs compare as an unsigned number, most significant first.
  fn cmp(&self, other: &Self) -> Ordering {
    other.sign().cmp(&self.sign())
      .then_with(|| crate::underlying::words::cmp(&self.limbs, &other.limbs))
  }
}

impl<const N: u32, const LIMBS: usize, L: Limb, S: Signedness>
PartialOrd for FixedInt<N, LIMBS, L, S> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}
