// Copyright 2024-2025 Irreducible Inc.

use crate::{strategies::MulStrategy, word::FnvWord};

/// Order of the two steps in an FNV round.
pub trait Variant {
	const NAME: &'static str;

	/// Fold a single byte into `word`.
	fn round<W: FnvWord, M: MulStrategy<W>>(word: W, byte: u8) -> W;
}

/// XOR the byte in, then multiply. The multiply spreads the XOR into every byte of the state,
/// which gives better avalanche than [`Fnv1`].
pub struct Fnv1a;

/// Multiply, then XOR the byte in.
pub struct Fnv1;

impl Variant for Fnv1a {
	const NAME: &'static str = "FNV-1a";

	#[inline(always)]
	fn round<W: FnvWord, M: MulStrategy<W>>(word: W, byte: u8) -> W {
		M::mul_prime(word.xor_byte(byte))
	}
}

impl Variant for Fnv1 {
	const NAME: &'static str = "FNV-1";

	#[inline(always)]
	fn round<W: FnvWord, M: MulStrategy<W>>(word: W, byte: u8) -> W {
		M::mul_prime(word).xor_byte(byte)
	}
}
