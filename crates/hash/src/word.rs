// Copyright 2024-2025 Irreducible Inc.

use std::fmt::Debug;

use fnvkit_wide::U128;

use crate::constants::*;

/// Unsigned integer used as an FNV accumulator.
///
/// All arithmetic on the word wraps modulo `2^BITS`.
pub trait FnvWord: Copy + Eq + Debug + Send + Sync + 'static {
	const BITS: u32;
	const NAME: &'static str;
	const PRIME: Self;
	/// Offset basis, the state before any byte has been folded.
	const OFFSET_BASIS: Self;

	fn xor_byte(self, byte: u8) -> Self;

	/// Reverse the order of all bytes in the word.
	fn swap_bytes(self) -> Self;

	/// Least significant 64 bits, zero-extended for narrower words.
	fn low_u64(self) -> u64;
}

macro_rules! impl_fnv_word {
	($ty:ty, $prime:expr, $seed:expr) => {
		impl FnvWord for $ty {
			const BITS: u32 = <$ty>::BITS;
			const NAME: &'static str = stringify!($ty);
			const PRIME: Self = $prime;
			const OFFSET_BASIS: Self = $seed;

			#[inline(always)]
			fn xor_byte(self, byte: u8) -> Self {
				self ^ byte as $ty
			}

			#[inline(always)]
			fn swap_bytes(self) -> Self {
				<$ty>::swap_bytes(self)
			}

			#[inline(always)]
			fn low_u64(self) -> u64 {
				self as u64
			}
		}
	};
}

impl_fnv_word!(u32, PRIME_32, SEED_32);
impl_fnv_word!(u64, PRIME_64, SEED_64);
impl_fnv_word!(u128, PRIME_128, SEED_128);

impl FnvWord for U128 {
	const BITS: u32 = 128;
	const NAME: &'static str = "U128";
	const PRIME: Self = PRIME_128_LIMBS;
	const OFFSET_BASIS: Self = SEED_128_LIMBS;

	#[inline(always)]
	fn xor_byte(self, byte: u8) -> Self {
		self.xor_low32(byte as u32)
	}

	#[inline(always)]
	fn swap_bytes(self) -> Self {
		self.bswap()
	}

	#[inline(always)]
	fn low_u64(self) -> u64 {
		self.lo()
	}
}
