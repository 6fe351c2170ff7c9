//! Kernels on little-endian limb slices (limb 0 is least significant). These are shared by the
//! fixed-width and the adaptive-precision integers: the former hands in its whole limb array, the
//! latter its trimmed magnitude. Where two slices of different length meet, the missing limbs of
//! the shorter one read as zero.

use core::cmp::Ordering;
use super::{Double, Limb};

#[inline]
fn get<L: Limb>(x: &[L], i: usize) -> L {
  x.get(i).copied().unwrap_or(L::ZERO)
}

/// `dst += src`, returning the carry out of the top of `dst`. Requires `src.len() <= dst.len()`.
pub fn add_assign<L: Limb>(dst: &mut [L], src: &[L]) -> bool {
  debug_assert!(src.len() <= dst.len());
  let mut carry = L::Double::ZERO;
  for (i, d) in dst.iter_mut().enumerate() {
    if i >= src.len() && carry == L::Double::ZERO {
      return false
    }
    carry = carry + d.widen() + get(src, i).widen();
    *d = carry.lo();
    carry = carry >> L::BITS;
  }
  carry != L::Double::ZERO
}

/// `dst -= src`, returning the borrow out of the top of `dst`. Requires `src.len() <= dst.len()`.
pub fn sub_assign<L: Limb>(dst: &mut [L], src: &[L]) -> bool {
  debug_assert!(src.len() <= dst.len());
  let mut borrow = false;
  for (i, d) in dst.iter_mut().enumerate() {
    if i >= src.len() && !borrow {
      return false
    }
    (*d, borrow) = d.borrowing_sub(get(src, i), borrow);
  }
  borrow
}

/// `dst += 1`, returning the carry out.
pub fn increment<L: Limb>(dst: &mut [L]) -> bool {
  for d in dst.iter_mut() {
    *d = d.wrapping_add(L::ONE);
    if *d != L::ZERO {
      return false
    }
  }
  true
}

/// Bitwise complement of every limb.
pub fn not_assign<L: Limb>(dst: &mut [L]) {
  for d in dst.iter_mut() {
    *d = !*d
  }
}

/// Two's complement negation modulo `2 ^ (dst.len() * L::BITS)`.
pub fn negate_assign<L: Limb>(dst: &mut [L]) {
  not_assign(dst);
  increment(dst);
}

/// Schoolbook product `a * b`, written to `dst` and truncated to its length (so the product is
/// computed modulo `2 ^ (dst.len() * L::BITS)`; pass `a.len() + b.len()` limbs to get it whole).
pub fn mul_into<L: Limb>(dst: &mut [L], a: &[L], b: &[L]) {
  dst.fill(L::ZERO);
  for (i, &ai) in a.iter().enumerate() {
    if i >= dst.len() {
      break
    }
    if ai == L::ZERO {
      continue
    }
    // `segment` holds at most `(B-1)^2 + 2(B-1) = B^2 - 1`, so it never overflows the `Double`.
    let mut segment = L::Double::ZERO;
    let mut k = i;
    for &bj in b {
      if k >= dst.len() {
        break
      }
      segment = segment + ai.widen() * bj.widen() + dst[k].widen();
      dst[k] = segment.lo();
      segment = segment >> L::BITS;
      k += 1;
    }
    if k < dst.len() {
      dst[k] = segment.lo();
    }
  }
}

/// `dst = dst * factor + addend`, returning the limb that carries out of the top.
pub fn mul_add_limb<L: Limb>(dst: &mut [L], factor: L, addend: L) -> L {
  let mut carry = addend.widen();
  for d in dst.iter_mut() {
    let segment = d.widen() * factor.widen() + carry;
    let (hi, lo) = segment.components_hi_lo();
    *d = lo;
    carry = hi.widen();
  }
  carry.lo()
}

/// `dst /= divisor` for a single-limb divisor, returning the remainder. Requires `divisor != 0`.
pub fn div_rem_limb<L: Limb>(dst: &mut [L], divisor: L) -> L {
  debug_assert!(divisor != L::ZERO);
  let divisor = divisor.widen();
  let mut rem = L::ZERO;
  for d in dst.iter_mut().rev() {
    let numerator = L::Double::of_hi_lo(rem, *d);
    *d = (numerator / divisor).lo();
    rem = (numerator % divisor).lo();
  }
  rem
}

/// Logical left shift by `n` bits. Bits shifted past the top of `dst` are lost.
pub fn shl_assign<L: Limb>(dst: &mut [L], n: u32) {
  let len = dst.len();
  let limb_shift = (n / L::BITS) as usize;
  let bit_shift = n % L::BITS;
  if limb_shift >= len {
    dst.fill(L::ZERO);
    return
  }
  if limb_shift > 0 {
    dst.copy_within(0 .. len - limb_shift, limb_shift);
    dst[.. limb_shift].fill(L::ZERO);
  }
  if bit_shift > 0 {
    for i in (limb_shift + 1 .. len).rev() {
      dst[i] = (dst[i] << bit_shift) | (dst[i - 1] >> (L::BITS - bit_shift));
    }
    dst[limb_shift] = dst[limb_shift] << bit_shift;
  }
}

/// Right shift by `n` bits. The vacated high bits are filled with ones if `fill` is set, with
/// zeroes otherwise.
pub fn shr_assign<L: Limb>(dst: &mut [L], n: u32, fill: bool) {
  let len = dst.len();
  let fill = if fill { L::MAX } else { L::ZERO };
  let limb_shift = (n / L::BITS) as usize;
  let bit_shift = n % L::BITS;
  if limb_shift >= len {
    dst.fill(fill);
    return
  }
  if limb_shift > 0 {
    dst.copy_within(limb_shift .. len, 0);
    dst[len - limb_shift ..].fill(fill);
  }
  if bit_shift > 0 {
    let top = len - 1;
    for i in 0 .. top {
      dst[i] = (dst[i] >> bit_shift) | (dst[i + 1] << (L::BITS - bit_shift));
    }
    dst[top] = (dst[top] >> bit_shift) | (fill << (L::BITS - bit_shift));
  }
}

/// Compare as unsigned magnitudes, from the most significant limb down.
pub fn cmp<L: Limb>(a: &[L], b: &[L]) -> Ordering {
  for i in (0 .. a.len().max(b.len())).rev() {
    match get(a, i).cmp(&get(b, i)) {
      Ordering::Equal => continue,
      other => return other,
    }
  }
  Ordering::Equal
}

/// Position of the most significant set bit, or -1 if all limbs are zero.
pub fn msb<L: Limb>(a: &[L]) -> i32 {
  for (i, &limb) in a.iter().enumerate().rev() {
    if limb != L::ZERO {
      return (i as u32 * L::BITS + (L::BITS - 1 - limb.leading_zeros())) as i32
    }
  }
  -1
}

/// Length of `a` after discarding its most significant zero limbs.
pub fn trimmed_len<L: Limb>(a: &[L]) -> usize {
  a.iter().rposition(|&x| x != L::ZERO).map_or(0, |i| i + 1)
}

pub fn count_ones<L: Limb>(a: &[L]) -> u32 {
  a.iter().map(|x| x.count_ones()).sum()
}

pub fn is_zero<L: Limb>(a: &[L]) -> bool {
  a.iter().all(|&x| x == L::ZERO)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn add_carry_ripples() {
    let mut a = [0xff_u8, 0xff, 0x00];
    assert!(!add_assign(&mut a, &[0x01]));
    assert_eq!(a, [0x00, 0x00, 0x01]);

    let mut a = [0xff_u8, 0xff];
    assert!(add_assign(&mut a, &[0x01, 0x00]));
    assert_eq!(a, [0x00, 0x00]);
  }

  #[test]
  fn sub_borrow_ripples() {
    let mut a = [0x00_u8, 0x00, 0x01];
    assert!(!sub_assign(&mut a, &[0x01]));
    assert_eq!(a, [0xff, 0xff, 0x00]);

    let mut a = [0x00_u16, 0x00];
    assert!(sub_assign(&mut a, &[0x01]));
    assert_eq!(a, [0xffff, 0xffff]);
  }

  #[test]
  fn negate() {
    let mut a = [0x01_u8, 0x00];
    negate_assign(&mut a);
    assert_eq!(a, [0xff, 0xff]);
    let mut a = [0x00_u8, 0x80];
    negate_assign(&mut a);
    assert_eq!(a, [0x00, 0x80]);
    let mut a = [0x00_u32, 0x00];
    negate_assign(&mut a);
    assert_eq!(a, [0x00, 0x00]);
  }

  #[test]
  fn mul_full_and_truncated() {
    // 0xffff * 0xffff = 0xfffe0001
    let mut full = [0u8; 4];
    mul_into(&mut full, &[0xff, 0xff], &[0xff, 0xff]);
    assert_eq!(full, [0x01, 0x00, 0xfe, 0xff]);

    let mut truncated = [0u8; 2];
    mul_into(&mut truncated, &[0xff, 0xff], &[0xff, 0xff]);
    assert_eq!(truncated, [0x01, 0x00]);

    let mut wide = [0u64; 2];
    mul_into(&mut wide, &[u64::MAX], &[u64::MAX]);
    assert_eq!(wide, [1, u64::MAX - 1]);
  }

  #[test]
  fn mul_add_and_div_rem_limb() {
    let mut a = [0x34_u8, 0x12];
    assert_eq!(mul_add_limb(&mut a, 0x10, 0x5), 0x01);
    assert_eq!(a, [0x45, 0x23]);

    let mut a = [0x00_u8, 0x00, 0x01]; // 65536
    assert_eq!(div_rem_limb(&mut a, 100), 36);
    assert_eq!(a, [0x8f, 0x02, 0x00]); // 655
  }

  #[test]
  fn shifts_across_limbs() {
    let mut a = [0x81_u8, 0x00, 0x00];
    shl_assign(&mut a, 9);
    assert_eq!(a, [0x00, 0x02, 0x01]);
    shr_assign(&mut a, 9, false);
    assert_eq!(a, [0x81, 0x00, 0x00]);

    let mut a = [0x00_u8, 0x80];
    shr_assign(&mut a, 4, true);
    assert_eq!(a, [0x00, 0xf8]);
    shr_assign(&mut a, 8, true);
    assert_eq!(a, [0xf8, 0xff]);

    let mut a = [0x12_u8, 0x34];
    shl_assign(&mut a, 16);
    assert_eq!(a, [0x00, 0x00]);
    let mut a = [0x12_u8, 0x34];
    shr_assign(&mut a, 0, true);
    assert_eq!(a, [0x12, 0x34]);
  }

  #[test]
  fn compare_and_msb() {
    assert_eq!(cmp(&[0x01_u8, 0x02], &[0xff, 0x01]), Ordering::Greater);
    assert_eq!(cmp(&[0x01_u8, 0x00, 0x00], &[0x01]), Ordering::Equal);
    assert_eq!(cmp(&[0x01_u8], &[0x00, 0x01]), Ordering::Less);
    assert_eq!(msb(&[0x00_u8, 0x00]), -1);
    assert_eq!(msb(&[0x00_u8, 0x01]), 8);
    assert_eq!(msb(&[0x00_u32, 0x80000000]), 63);
    assert_eq!(trimmed_len(&[0x01_u8, 0x00, 0x00]), 1);
    assert_eq!(trimmed_len::<u8>(&[0x00, 0x00]), 0);
  }
}
