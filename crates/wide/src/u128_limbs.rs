// Copyright 2024-2025 Irreducible Inc.

use std::{
	fmt::{Debug, Display, LowerHex, UpperHex},
	ops::{Add, AddAssign, Mul, MulAssign, Shl},
};

use bytemuck::{Pod, Zeroable};
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

const LOW_32_MASK: u64 = 0xffff_ffff;

/// Small factor of the FNV-128 prime, which equals `2^88 + FNV128_PRIME_LOW_FACTOR`.
pub const FNV128_PRIME_LOW_FACTOR: u64 = 0x013b;

/// Unsigned 128-bit integer stored as a pair of 64-bit limbs.
///
/// All arithmetic wraps modulo `2^128`.
#[derive(
	Default,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Zeroable,
	Pod,
	BitAnd,
	BitAndAssign,
	BitOr,
	BitOrAssign,
	BitXor,
	BitXorAssign,
)]
#[repr(C)]
pub struct U128 {
	hi: u64,
	lo: u64,
}

impl U128 {
	pub const ZERO: Self = Self::new(0, 0);
	pub const ONE: Self = Self::new(0, 1);
	pub const MAX: Self = Self::new(u64::MAX, u64::MAX);

	#[inline(always)]
	pub const fn new(hi: u64, lo: u64) -> Self {
		Self { hi, lo }
	}

	#[inline(always)]
	pub const fn hi(self) -> u64 {
		self.hi
	}

	#[inline(always)]
	pub const fn lo(self) -> u64 {
		self.lo
	}

	#[inline(always)]
	pub const fn from_u128(val: u128) -> Self {
		Self::new((val >> 64) as u64, val as u64)
	}

	#[inline(always)]
	pub const fn to_u128(self) -> u128 {
		((self.hi as u128) << 64) | self.lo as u128
	}

	/// Wrapping addition.
	#[inline]
	pub const fn add(self, rhs: Self) -> Self {
		let (lo, carry) = self.lo.overflowing_add(rhs.lo);
		let hi = self.hi.wrapping_add(rhs.hi).wrapping_add(carry as u64);
		Self::new(hi, lo)
	}

	/// Low 128 bits of the full product `self * rhs`.
	#[inline]
	pub const fn mul_full(self, rhs: Self) -> Self {
		let (hi, lo) = widening_mul_64(self.lo, rhs.lo);
		let hi = hi
			.wrapping_add(self.hi.wrapping_mul(rhs.lo))
			.wrapping_add(self.lo.wrapping_mul(rhs.hi));
		Self::new(hi, lo)
	}

	/// Multiplication by the FNV-128 prime `2^88 + 0x13b`.
	///
	/// The `2^88` term only contributes `lo << 24` to the high limb, so the sole real
	/// multiplications are by the 9-bit factor `0x13b`. The carry out of the low limb is
	/// recovered from its two 32-bit halves without a widening multiply.
	#[inline]
	pub const fn mul_reduced(self) -> Self {
		let carry = ((self.lo & LOW_32_MASK) * FNV128_PRIME_LOW_FACTOR) >> 32;
		let carry = ((self.lo >> 32) * FNV128_PRIME_LOW_FACTOR + carry) >> 32;

		let hi = self
			.hi
			.wrapping_mul(FNV128_PRIME_LOW_FACTOR)
			.wrapping_add(self.lo << 24)
			.wrapping_add(carry);
		let lo = self.lo.wrapping_mul(FNV128_PRIME_LOW_FACTOR);
		Self::new(hi, lo)
	}

	/// Logical left shift. `shift` must be below 128.
	#[inline]
	pub const fn shl(self, shift: u32) -> Self {
		debug_assert!(shift < 128);

		match shift {
			0 => self,
			1..=63 => Self::new((self.hi << shift) | (self.lo >> (64 - shift)), self.lo << shift),
			_ => Self::new(self.lo << (shift - 64), 0),
		}
	}

	/// XOR `val` into the least significant 32 bits.
	#[inline(always)]
	pub const fn xor_low32(self, val: u32) -> Self {
		Self::new(self.hi, self.lo ^ val as u64)
	}

	/// Reverse the byte order of the whole 128-bit word: each limb is byte-swapped and the two
	/// limbs trade places.
	#[inline(always)]
	pub const fn bswap(self) -> Self {
		Self::new(self.lo.swap_bytes(), self.hi.swap_bytes())
	}
}

/// Full 64×64 → 128 product as `(hi, lo)`, computed from 32-bit halves.
#[inline]
const fn widening_mul_64(a: u64, b: u64) -> (u64, u64) {
	let (a_lo, a_hi) = (a & LOW_32_MASK, a >> 32);
	let (b_lo, b_hi) = (b & LOW_32_MASK, b >> 32);

	let ll = a_lo * b_lo;
	let lh = a_lo * b_hi;
	let hl = a_hi * b_lo;
	let hh = a_hi * b_hi;

	// At most 3 * (2^32 - 1), no overflow.
	let mid = (ll >> 32) + (lh & LOW_32_MASK) + (hl & LOW_32_MASK);

	let lo = (ll & LOW_32_MASK) | (mid << 32);
	let hi = hh + (lh >> 32) + (hl >> 32) + (mid >> 32);
	(hi, lo)
}

impl From<u128> for U128 {
	#[inline(always)]
	fn from(value: u128) -> Self {
		Self::from_u128(value)
	}
}

impl From<U128> for u128 {
	#[inline(always)]
	fn from(value: U128) -> Self {
		value.to_u128()
	}
}

impl From<u64> for U128 {
	#[inline(always)]
	fn from(value: u64) -> Self {
		Self::new(0, value)
	}
}

impl Add for U128 {
	type Output = Self;

	#[inline(always)]
	fn add(self, rhs: Self) -> Self {
		U128::add(self, rhs)
	}
}

impl AddAssign for U128 {
	#[inline(always)]
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

impl Mul for U128 {
	type Output = Self;

	#[inline(always)]
	fn mul(self, rhs: Self) -> Self {
		self.mul_full(rhs)
	}
}

impl MulAssign for U128 {
	#[inline(always)]
	fn mul_assign(&mut self, rhs: Self) {
		*self = self.mul_full(rhs);
	}
}

impl Shl<u32> for U128 {
	type Output = Self;

	#[inline(always)]
	fn shl(self, rhs: u32) -> Self {
		U128::shl(self, rhs)
	}
}

impl Debug for U128 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "U128({:#018x}_{:016x})", self.hi, self.lo)
	}
}

impl Display for U128 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.to_u128(), f)
	}
}

impl LowerHex for U128 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		LowerHex::fmt(&self.to_u128(), f)
	}
}

impl UpperHex for U128 {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		UpperHex::fmt(&self.to_u128(), f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_add_carries_into_high_limb() {
		let a = U128::new(0, u64::MAX);
		assert_eq!(a + U128::ONE, U128::new(1, 0));
		assert_eq!(U128::MAX + U128::ONE, U128::ZERO);
	}

	#[test]
	fn test_widening_mul_64_extremes() {
		assert_eq!(widening_mul_64(0, u64::MAX), (0, 0));
		assert_eq!(widening_mul_64(u64::MAX, u64::MAX), (u64::MAX - 1, 1));
		assert_eq!(widening_mul_64(1 << 32, 1 << 32), (1, 0));
	}

	#[test]
	fn test_shl_across_limbs() {
		let a = U128::new(0, 0x8000_0000_0000_0001);
		assert_eq!(a.shl(1), U128::new(1, 2));
		assert_eq!(a.shl(64), U128::new(0x8000_0000_0000_0001, 0));
		assert_eq!(a.shl(127), U128::new(0x8000_0000_0000_0000, 0));
		assert_eq!(a.shl(0), a);
	}

	#[test]
	fn test_bswap_swaps_limbs() {
		let a = U128::new(0x0001_0203_0405_0607, 0x0809_0a0b_0c0d_0e0f);
		assert_eq!(a.bswap(), U128::new(0x0f0e_0d0c_0b0a_0908, 0x0706_0504_0302_0100));
		assert_eq!(a.bswap().bswap(), a);
	}

	#[test]
	fn test_xor_low32_leaves_upper_bits() {
		let a = U128::new(7, 0xffff_ffff_0000_0000);
		assert_eq!(a.xor_low32(0xdead_beef), U128::new(7, 0xffff_ffff_dead_beef));
	}

	#[test]
	fn test_pod_layout() {
		assert_eq!(std::mem::size_of::<U128>(), 16);
		let zero: U128 = bytemuck::Zeroable::zeroed();
		assert_eq!(zero, U128::ZERO);
	}
}
