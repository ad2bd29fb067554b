// Copyright 2024-2025 Irreducible Inc.

//! Endianness adapter around the fold engine.
//!
//! A seed passed to these functions is held in canonical form. Its in-memory bytes are the
//! little-endian encoding of the digest on every target. Little-endian targets fold in place.
//! Big-endian targets swap the seed to native order, fold, and swap it back.

use cfg_if::cfg_if;

use crate::{engine::FnvDigest, word::FnvWord};

/// Byte order of the target the fold runs on.
pub trait Endianness {
	const NAME: &'static str;

	/// Convert a canonically stored word to a native arithmetic value.
	fn from_canonical<W: FnvWord>(word: W) -> W;

	/// Convert a native arithmetic value back to its canonical storage.
	fn to_canonical<W: FnvWord>(word: W) -> W;
}

pub struct LittleEndian;
pub struct BigEndian;

impl Endianness for LittleEndian {
	const NAME: &'static str = "little-endian";

	#[inline(always)]
	fn from_canonical<W: FnvWord>(word: W) -> W {
		word
	}

	#[inline(always)]
	fn to_canonical<W: FnvWord>(word: W) -> W {
		word
	}
}

impl Endianness for BigEndian {
	const NAME: &'static str = "big-endian";

	#[inline(always)]
	fn from_canonical<W: FnvWord>(word: W) -> W {
		word.swap_bytes()
	}

	#[inline(always)]
	fn to_canonical<W: FnvWord>(word: W) -> W {
		word.swap_bytes()
	}
}

cfg_if! {
	if #[cfg(target_endian = "big")] {
		pub type NativeEndian = BigEndian;
	} else {
		pub type NativeEndian = LittleEndian;
	}
}

/// Fold `bytes` onto a canonically stored seed, treating the target as `E`.
#[inline]
pub fn fold_canonical_in<E: Endianness, D: FnvDigest>(bytes: &[u8], seed: &mut D) {
	let mut native = E::from_canonical(*seed);
	D::fold(bytes, &mut native);
	*seed = E::to_canonical(native);
}

/// Fold `bytes` onto a canonically stored seed.
#[inline]
pub fn fold_canonical<D: FnvDigest>(bytes: &[u8], seed: &mut D) {
	fold_canonical_in::<NativeEndian, D>(bytes, seed)
}

pub fn fold_canonical_32(bytes: &[u8], seed: &mut u32) {
	fold_canonical(bytes, seed)
}

pub fn fold_canonical_64(bytes: &[u8], seed: &mut u64) {
	fold_canonical(bytes, seed)
}

pub fn fold_canonical_128(bytes: &[u8], seed: &mut u128) {
	fold_canonical(bytes, seed)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::constants::*;

	/// Run a canonical fold as a target with byte order `E` would, starting and ending with the
	/// seed's bytes in memory.
	fn fold_stored_64<E: Endianness>(
		bytes: &[u8],
		stored: [u8; 8],
		load: fn([u8; 8]) -> u64,
		store: fn(u64) -> [u8; 8],
	) -> [u8; 8] {
		let mut seed = load(stored);
		fold_canonical_in::<E, u64>(bytes, &mut seed);
		store(seed)
	}

	#[test]
	fn test_stored_digest_is_byte_order_independent() {
		let stored = SEED_64.to_le_bytes();

		let little =
			fold_stored_64::<LittleEndian>(b"foobar", stored, u64::from_le_bytes, u64::to_le_bytes);
		let big =
			fold_stored_64::<BigEndian>(b"foobar", stored, u64::from_be_bytes, u64::to_be_bytes);
		assert_eq!(little, big);

		let mut expected = SEED_64;
		crate::engine::fold_64(b"foobar", &mut expected);
		assert_eq!(little, expected.to_le_bytes());
	}

	#[test]
	fn test_128_bit_stored_digest_is_byte_order_independent() {
		let stored = SEED_128.to_le_bytes();

		let mut little = u128::from_le_bytes(stored);
		fold_canonical_in::<LittleEndian, u128>(b"a", &mut little);
		let mut big = u128::from_be_bytes(stored);
		fold_canonical_in::<BigEndian, u128>(b"a", &mut big);

		assert_eq!(little.to_le_bytes(), big.to_be_bytes());
	}

	#[cfg(target_endian = "little")]
	#[test]
	fn test_little_endian_target_folds_in_place() {
		let mut canonical = SEED_32;
		fold_canonical_32(b"a", &mut canonical);

		let mut native = SEED_32;
		crate::engine::fold_32(b"a", &mut native);

		assert_eq!(canonical, native);
	}
}
