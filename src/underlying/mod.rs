//! This module contains the machine-word layer that every multi-limb integer in this crate is
//! built on. End-users only see the sealed [`Limb`] trait, implemented for `u8`, `u16`, `u32`, and
//! `u64`; everything else (the double-width accumulator, the kernels on limb slices) is internal.

/// The trait for the unsigned machine words ("limbs") that a multi-limb integer is made of (only
/// satisfied by `u8`, `u16`, `u32`, and `u64`).
///
/// This is a *sealed* type.
pub trait Limb: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  core::fmt::Debug + core::fmt::Display + core::fmt::Binary + core::fmt::UpperHex +
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash + Default +
  Send + Sync + 'static +
  core::ops::BitAnd<Output=Self> + core::ops::BitAndAssign +
  core::ops::BitOr<Output=Self> + core::ops::BitOrAssign +
  core::ops::BitXor<Output=Self> + core::ops::BitXorAssign +
  core::ops::Not<Output=Self> +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self>
{
  /// The accumulator used to detect carries and to hold full products: an unsigned type exactly
  /// twice as wide as `Self`.
  type Double: Double<Single = Self>;

  const ZERO: Self;
  const ONE: Self;
  const MAX: Self;
  const BITS: u32;

  /// The largest power of ten that fits in a limb, used to peel off decimal digits one limb-sized
  /// chunk at a time.
  const DECIMAL_CHUNK: Self;

  /// Number of decimal digits in [`Sealed::DECIMAL_CHUNK`] (i.e. its base-10 logarithm).
  const DECIMAL_CHUNK_DIGITS: u32;

  /// Zero-extend into the double-width accumulator.
  fn widen(self) -> Self::Double;

  fn as_u64(self) -> u64;

  /// The lowest `BITS` bits of `x`.
  fn of_u64(x: u64) -> Self;

  /// The lowest `BITS` bits of `x`.
  fn of_u128(x: u128) -> Self;

  fn leading_zeros(self) -> u32;
  fn count_ones(self) -> u32;

  /// Set all bits more significant than `n` to 0. A no-op if `n >= BITS`.
  ///
  /// ```ignore
  /// assert_eq!(0xabcd_u16.mask_lsb(4), 0x000d_u16)
  /// ```
  fn mask_lsb(self, n: u32) -> Self;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
  fn wrapping_mul(self, other: Self) -> Self;

  /// `self + other + carry`, returning the low word and the carry out.
  fn carrying_add(self, other: Self, carry: bool) -> (Self, bool);

  /// `self - other - borrow`, returning the low word and the borrow out.
  fn borrowing_sub(self, other: Self, borrow: bool) -> (Self, bool);
}

/// This trait models the type that is a [`Limb`] with twice the precision (e.g. `u32::Double` =
/// `u64`). The ways to convert between the two are:
///
///   - By widening a `Limb` ([`Sealed::widen`]) or multiplying two widened limbs, which cannot
///     overflow a `Double`.
///   - By breaking a `Double` into its hi and lo limbs ([`Double::components_hi_lo`]), or
///     assembling one from them ([`Double::of_hi_lo`]).
pub trait Double:
  core::fmt::Debug +
  Copy + Clone +
  Eq + Ord +
  core::ops::Add<Output=Self> +
  core::ops::Sub<Output=Self> +
  core::ops::Mul<Output=Self> +
  core::ops::Div<Output=Self> +
  core::ops::Rem<Output=Self> +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self>
{
  type Single: Limb;

  const ZERO: Self;
  const ONE: Self;

  /// The limb radix, `2 ^ Single::BITS`.
  const RADIX: Self;

  /// Break a `Double` down into its high and low limbs, respectively.
  fn components_hi_lo(self) -> (Self::Single, Self::Single);

  /// The low limb (i.e. truncation).
  fn lo(self) -> Self::Single;

  /// `hi * RADIX + lo`.
  fn of_hi_lo(hi: Self::Single, lo: Self::Single) -> Self;
}

mod limb;
mod double;
pub mod words;
