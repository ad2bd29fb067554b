// Copyright 2024-2025 Irreducible Inc.

use std::{fmt, hash::BuildHasher, marker::PhantomData};

use bytes::{Buf, BufMut};
use fnvkit_utils::serialization::{self, DeserializeBytes, SerializeBytes};

use crate::{
	constants::{SEED_128, SEED_32, SEED_64},
	engine::{fold_128, fold_32, fold_64, FnvDigest},
	Error,
};

/// Trait representing hash functions which is generic over the input type.
///
/// This interface is largely based on the `digest::Digest` trait, except that instead of
/// requiring byte strings as input and byte arrays as output, this is generic over the input
/// values and has a less constrained output digest type.
pub trait Hasher<T> {
	/// The hash function output type.
	type Digest;

	fn new() -> Self;
	fn update(&mut self, data: impl AsRef<[T]>);
	fn chain_update(self, data: impl AsRef<[T]>) -> Self;
	fn finalize(self) -> Self::Digest;
	fn finalize_into(self, out: &mut Self::Digest);

	fn finalize_reset(&mut self) -> Self::Digest;
	fn finalize_into_reset(&mut self, out: &mut Self::Digest);
	fn reset(&mut self);
}

pub fn hash<T, H: Hasher<T>>(data: impl AsRef<[T]>) -> H::Digest {
	H::new().chain_update(data).finalize()
}

/// Streaming FNV hasher over a digest word `D`.
///
/// The state is kept as a native integer; each update folds straight into it, so feeding the
/// input in pieces gives the same digest as feeding it at once. The state can be checkpointed
/// in canonical form and restored later, possibly on a target of the other byte order.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FnvHasher<D> {
	state: D,
	seed: D,
}

pub type Fnv32 = FnvHasher<u32>;
pub type Fnv64 = FnvHasher<u64>;
pub type Fnv128 = FnvHasher<u128>;

impl<D: FnvDigest> FnvHasher<D> {
	/// Hasher starting from the offset basis.
	pub fn new() -> Self {
		Self::with_seed(D::OFFSET_BASIS)
	}

	/// Hasher starting from an arbitrary seed, e.g. the digest of a preceding chunk.
	pub fn with_seed(seed: D) -> Self {
		Self { state: seed, seed }
	}

	/// Digest of everything folded so far.
	#[inline]
	pub fn digest(&self) -> D {
		self.state
	}

	/// Write the current state in canonical form.
	pub fn checkpoint(&self, write_buf: impl BufMut) -> Result<(), Error>
	where
		D: SerializeBytes,
	{
		self.state.serialize(write_buf)?;
		Ok(())
	}

	/// Resume hashing from a state written by [`Self::checkpoint`].
	///
	/// The restored state also becomes the seed that [`Hasher::reset`] returns to.
	pub fn restore(read_buf: impl Buf) -> Result<Self, Error>
	where
		D: DeserializeBytes,
	{
		Ok(Self::with_seed(D::deserialize(read_buf)?))
	}
}

impl<D: FnvDigest> Default for FnvHasher<D> {
	fn default() -> Self {
		Self::new()
	}
}

impl<D: FnvDigest> fmt::Debug for FnvHasher<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnvHasher")
			.field("word", &D::NAME)
			.field("state", &self.state)
			.finish()
	}
}

impl<D: FnvDigest> Hasher<u8> for FnvHasher<D> {
	type Digest = D;

	fn new() -> Self {
		FnvHasher::new()
	}

	#[inline]
	fn update(&mut self, data: impl AsRef<[u8]>) {
		D::fold(data.as_ref(), &mut self.state)
	}

	fn chain_update(mut self, data: impl AsRef<[u8]>) -> Self {
		Hasher::update(&mut self, data);
		self
	}

	fn finalize(self) -> D {
		self.state
	}

	fn finalize_into(self, out: &mut D) {
		*out = self.state;
	}

	fn finalize_reset(&mut self) -> D {
		let digest = self.state;
		Hasher::reset(self);
		digest
	}

	fn finalize_into_reset(&mut self, out: &mut D) {
		*out = Hasher::finalize_reset(self);
	}

	fn reset(&mut self) {
		self.state = self.seed;
	}
}

impl<D: FnvDigest> std::hash::Hasher for FnvHasher<D> {
	/// Low 64 bits of the digest.
	#[inline]
	fn finish(&self) -> u64 {
		self.state.low_u64()
	}

	#[inline]
	fn write(&mut self, bytes: &[u8]) {
		D::fold(bytes, &mut self.state)
	}
}

impl<D: FnvDigest + SerializeBytes> SerializeBytes for FnvHasher<D> {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), serialization::Error> {
		self.state.serialize(write_buf)
	}
}

impl<D: FnvDigest + DeserializeBytes> DeserializeBytes for FnvHasher<D> {
	fn deserialize(read_buf: impl Buf) -> Result<Self, serialization::Error> {
		D::deserialize(read_buf).map(Self::with_seed)
	}
}

/// [`BuildHasher`] producing FNV hashers, for keyed collections.
pub struct BuildFnvHasher<D>(PhantomData<D>);

pub type BuildFnv32 = BuildFnvHasher<u32>;
pub type BuildFnv64 = BuildFnvHasher<u64>;

impl<D> BuildFnvHasher<D> {
	pub const fn new() -> Self {
		Self(PhantomData)
	}
}

impl<D> Default for BuildFnvHasher<D> {
	fn default() -> Self {
		Self::new()
	}
}

impl<D> Clone for BuildFnvHasher<D> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<D> Copy for BuildFnvHasher<D> {}

impl<D> fmt::Debug for BuildFnvHasher<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("BuildFnvHasher")
	}
}

impl<D: FnvDigest> BuildHasher for BuildFnvHasher<D> {
	type Hasher = FnvHasher<D>;

	fn build_hasher(&self) -> FnvHasher<D> {
		FnvHasher::new()
	}
}

/// 32-bit FNV digest of `bytes` from the offset basis.
pub fn fnv32(bytes: &[u8]) -> u32 {
	let mut seed = SEED_32;
	fold_32(bytes, &mut seed);
	seed
}

/// 64-bit FNV digest of `bytes` from the offset basis.
pub fn fnv64(bytes: &[u8]) -> u64 {
	let mut seed = SEED_64;
	fold_64(bytes, &mut seed);
	seed
}

/// 128-bit FNV digest of `bytes` from the offset basis.
pub fn fnv128(bytes: &[u8]) -> u128 {
	let mut seed = SEED_128;
	fold_128(bytes, &mut seed);
	seed
}
