// Copyright 2024-2025 Irreducible Inc.

//! Ways of multiplying an accumulator by its FNV prime.
//!
//! Each strategy is a zero-sized marker resolved at compile time, so the choice costs nothing in
//! the fold loop. Every strategy produces exactly the same product for a given word type.

use fnvkit_wide::U128;

use crate::word::FnvWord;

/// Multiplication by `W::PRIME`, parameterized with some strategy.
pub trait MulStrategy<W: FnvWord> {
	const NAME: &'static str;

	fn mul_prime(word: W) -> W;
}

/// Native wrapping multiplication.
pub struct NativeMul;
/// Sum of shifted copies of the word, one per set bit of the prime.
///
/// Kept for comparison only. It is at best neutral for 32 bits and measurably slower than
/// [`NativeMul`] for 64 and 128 bits.
pub struct ShiftMul;
/// Full 128×128 limb product, truncated to 128 bits.
pub struct FullMul;
/// Limb multiply that exploits the FNV-128 prime being `2^88 + 0x13b`.
pub struct ReducedMul;

macro_rules! impl_native_mul {
	($($ty:ty),*) => {
		$(
			impl MulStrategy<$ty> for NativeMul {
				const NAME: &'static str = "native";

				#[inline(always)]
				fn mul_prime(word: $ty) -> $ty {
					word.wrapping_mul(<$ty as FnvWord>::PRIME)
				}
			}
		)*
	};
}

impl_native_mul!(u32, u64, u128);

// The prime minus its top bit is at most 9 bits wide, so the shift list stays short.
macro_rules! impl_shift_mul {
	($ty:ty, [$($shift:expr),+]) => {
		impl MulStrategy<$ty> for ShiftMul {
			const NAME: &'static str = "bitshift";

			#[inline(always)]
			fn mul_prime(word: $ty) -> $ty {
				word$(.wrapping_add(word << $shift))+
			}
		}
	};
}

// 2^24 + 2^8 + 2^7 + 2^4 + 2^1 + 1
impl_shift_mul!(u32, [1, 4, 7, 8, 24]);
// 2^40 + 2^8 + 2^7 + 2^5 + 2^4 + 2^1 + 1
impl_shift_mul!(u64, [1, 4, 5, 7, 8, 40]);
// 2^88 + 2^8 + 2^5 + 2^4 + 2^3 + 2^1 + 1
impl_shift_mul!(u128, [1, 3, 4, 5, 8, 88]);

impl MulStrategy<U128> for ShiftMul {
	const NAME: &'static str = "bitshift";

	#[inline(always)]
	fn mul_prime(word: U128) -> U128 {
		[1, 3, 4, 5, 8, 88]
			.into_iter()
			.fold(word, |acc, shift| acc.add(word.shl(shift)))
	}
}

impl MulStrategy<U128> for FullMul {
	const NAME: &'static str = "full";

	#[inline(always)]
	fn mul_prime(word: U128) -> U128 {
		word.mul_full(<U128 as FnvWord>::PRIME)
	}
}

impl MulStrategy<U128> for ReducedMul {
	const NAME: &'static str = "reduced";

	#[inline(always)]
	fn mul_prime(word: U128) -> U128 {
		word.mul_reduced()
	}
}
