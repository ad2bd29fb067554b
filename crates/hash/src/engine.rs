// Copyright 2024-2025 Irreducible Inc.

//! The FNV fold for each digest width.
//!
//! Folding is performed in native byte order. The functions here are the raw engine; use
//! [`crate::canonical`] when the seed is stored in its canonical little-endian form.
//!
//! Bytes are processed in fixed-size groups purely to cut loop overhead. The digest is always
//! the same as folding one byte at a time, in order.

use crate::{
	config::{DefaultVariant, Mul128, Mul32, Mul64, Word128},
	strategies::MulStrategy,
	tracing::trace_fold,
	variant::Variant,
	word::FnvWord,
};

/// Digest width with an engine configured for this build.
pub trait FnvDigest: FnvWord {
	/// Fold `bytes` onto `seed` using the build's default variant and multiply strategy.
	fn fold(bytes: &[u8], seed: &mut Self);
}

impl FnvDigest for u32 {
	#[inline]
	fn fold(bytes: &[u8], seed: &mut Self) {
		fold_32(bytes, seed)
	}
}

impl FnvDigest for u64 {
	#[inline]
	fn fold(bytes: &[u8], seed: &mut Self) {
		fold_64(bytes, seed)
	}
}

impl FnvDigest for u128 {
	#[inline]
	fn fold(bytes: &[u8], seed: &mut Self) {
		fold_128(bytes, seed)
	}
}

/// Fold `bytes` onto a 32-bit seed.
pub fn fold_32(bytes: &[u8], seed: &mut u32) {
	trace_fold!(u32, bytes.len());

	fold_unrolled_2::<DefaultVariant, Mul32, _>(bytes, seed)
}

/// Fold `bytes` onto a 64-bit seed.
pub fn fold_64(bytes: &[u8], seed: &mut u64) {
	trace_fold!(u64, bytes.len());

	fold_unrolled_2::<DefaultVariant, Mul64, _>(bytes, seed)
}

/// Fold `bytes` onto a 128-bit seed.
///
/// Where the build runs the 128-bit engine on limbs, the seed is converted once on entry and
/// once on exit.
pub fn fold_128(bytes: &[u8], seed: &mut u128) {
	trace_fold!(Word128, bytes.len());

	let mut word = Word128::from(*seed);
	fold_unrolled_8::<DefaultVariant, Mul128, _>(bytes, &mut word);
	*seed = u128::from(word);
}

/// Reference fold, one byte per iteration.
#[inline]
pub fn fold_with<V, M, W>(bytes: &[u8], seed: &mut W)
where
	V: Variant,
	M: MulStrategy<W>,
	W: FnvWord,
{
	*seed = fold_group::<V, M, W>(*seed, bytes);
}

/// Fold two bytes per iteration, then the odd byte if any.
#[inline]
pub fn fold_unrolled_2<V, M, W>(bytes: &[u8], seed: &mut W)
where
	V: Variant,
	M: MulStrategy<W>,
	W: FnvWord,
{
	let (word, rest) = fold_groups_of::<V, M, W, 2>(*seed, bytes);
	let (word, rest) = fold_leading::<V, M, W, 1>(word, rest);

	debug_assert!(rest.is_empty(), "{} bytes left unfolded", rest.len());
	*seed = word;
}

/// Fold eight bytes per iteration, then at most one group each of four, two and one bytes.
#[inline]
pub fn fold_unrolled_8<V, M, W>(bytes: &[u8], seed: &mut W)
where
	V: Variant,
	M: MulStrategy<W>,
	W: FnvWord,
{
	let (word, rest) = fold_groups_of::<V, M, W, 8>(*seed, bytes);
	let (word, rest) = fold_leading::<V, M, W, 4>(word, rest);
	let (word, rest) = fold_leading::<V, M, W, 2>(word, rest);
	let (word, rest) = fold_leading::<V, M, W, 1>(word, rest);

	debug_assert!(rest.is_empty(), "{} bytes left unfolded", rest.len());
	*seed = word;
}

#[inline(always)]
fn fold_group<V, M, W>(word: W, group: &[u8]) -> W
where
	V: Variant,
	M: MulStrategy<W>,
	W: FnvWord,
{
	group
		.iter()
		.fold(word, |word, &byte| V::round::<W, M>(word, byte))
}

/// Fold every whole `N`-byte group of `bytes`. Returns the new state and the unfolded tail,
/// which is shorter than `N`.
#[inline(always)]
fn fold_groups_of<V, M, W, const N: usize>(word: W, bytes: &[u8]) -> (W, &[u8])
where
	V: Variant,
	M: MulStrategy<W>,
	W: FnvWord,
{
	let groups = bytes.chunks_exact(N);
	let tail = groups.remainder();

	(groups.fold(word, fold_group::<V, M, W>), tail)
}

/// Fold the first `N` bytes if there are at least `N` of them.
#[inline(always)]
fn fold_leading<V, M, W, const N: usize>(word: W, bytes: &[u8]) -> (W, &[u8])
where
	V: Variant,
	M: MulStrategy<W>,
	W: FnvWord,
{
	if bytes.len() >= N {
		let (head, tail) = bytes.split_at(N);
		(fold_group::<V, M, W>(word, head), tail)
	} else {
		(word, bytes)
	}
}

#[cfg(test)]
mod tests {
	use fnvkit_wide::U128;
	use rand::{rngs::StdRng, RngCore, SeedableRng};

	use super::*;
	use crate::{
		constants::*,
		strategies::{FullMul, NativeMul, ReducedMul, ShiftMul},
		variant::{Fnv1, Fnv1a},
	};

	fn random_bytes(len: usize) -> Vec<u8> {
		let mut rng = StdRng::seed_from_u64(len as u64);
		let mut data = vec![0u8; len];
		rng.fill_bytes(&mut data);
		data
	}

	#[test]
	fn test_unrolled_matches_reference_for_every_tail_length() {
		for len in 0..=40 {
			let data = random_bytes(len);

			let mut expected_32 = SEED_32;
			fold_with::<Fnv1a, NativeMul, _>(&data, &mut expected_32);
			let mut actual_32 = SEED_32;
			fold_unrolled_2::<Fnv1a, NativeMul, _>(&data, &mut actual_32);
			assert_eq!(actual_32, expected_32, "len {len}");

			let mut expected_128 = SEED_128;
			fold_with::<Fnv1a, NativeMul, _>(&data, &mut expected_128);
			let mut actual_128 = SEED_128;
			fold_unrolled_8::<Fnv1a, NativeMul, _>(&data, &mut actual_128);
			assert_eq!(actual_128, expected_128, "len {len}");
		}
	}

	#[test]
	fn test_empty_input_is_identity() {
		let mut seed_32 = 0xdead_beef;
		fold_32(&[], &mut seed_32);
		assert_eq!(seed_32, 0xdead_beef);

		let mut seed_64 = SEED_64;
		fold_64(&[], &mut seed_64);
		assert_eq!(seed_64, SEED_64);

		let mut seed_128 = 42;
		fold_128(&[], &mut seed_128);
		assert_eq!(seed_128, 42);

		let mut seed_normal = SEED_64;
		fold_unrolled_2::<Fnv1, NativeMul, _>(&[], &mut seed_normal);
		assert_eq!(seed_normal, SEED_64);
	}

	#[test]
	fn test_128_bit_policies_agree_on_limbs() {
		for len in [0, 1, 3, 7, 8, 15, 16, 17, 100, 1000] {
			let data = random_bytes(len);

			let mut native = SEED_128;
			fold_unrolled_8::<Fnv1a, NativeMul, _>(&data, &mut native);

			let mut full = SEED_128_LIMBS;
			fold_unrolled_8::<Fnv1a, FullMul, _>(&data, &mut full);
			let mut reduced = SEED_128_LIMBS;
			fold_unrolled_8::<Fnv1a, ReducedMul, _>(&data, &mut reduced);
			let mut shifted = U128::from(SEED_128);
			fold_unrolled_8::<Fnv1a, ShiftMul, _>(&data, &mut shifted);

			assert_eq!(full.to_u128(), native, "len {len}");
			assert_eq!(reduced.to_u128(), native, "len {len}");
			assert_eq!(shifted.to_u128(), native, "len {len}");
		}
	}

	#[test]
	fn test_variants_differ() {
		let mut a = SEED_32;
		fold_with::<Fnv1a, NativeMul, _>(b"foobar", &mut a);
		let mut normal = SEED_32;
		fold_with::<Fnv1, NativeMul, _>(b"foobar", &mut normal);
		assert_ne!(a, normal);
	}
}
