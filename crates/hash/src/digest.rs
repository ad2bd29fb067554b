// Copyright 2024-2025 Irreducible Inc.

//! Canonical byte form of a digest.
//!
//! The canonical form is the little-endian encoding of the digest integer. Digests computed on
//! targets of either byte order compare equal in this form.

use fnvkit_utils::ensure;

use crate::Error;

pub trait CanonicalDigest: Sized {
	/// Length of the canonical encoding in bytes.
	const BYTES: usize;

	type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

	fn to_canonical_bytes(&self) -> Self::Bytes;

	/// Decode a digest from exactly [`Self::BYTES`] bytes.
	fn from_canonical_bytes(bytes: &[u8]) -> Result<Self, Error>;
}

macro_rules! impl_canonical_digest {
	($ty:ty) => {
		impl CanonicalDigest for $ty {
			const BYTES: usize = std::mem::size_of::<$ty>();

			type Bytes = [u8; std::mem::size_of::<$ty>()];

			#[inline]
			fn to_canonical_bytes(&self) -> Self::Bytes {
				self.to_le_bytes()
			}

			fn from_canonical_bytes(bytes: &[u8]) -> Result<Self, Error> {
				ensure!(
					bytes.len() == Self::BYTES,
					Error::InvalidDigestLength {
						expected: Self::BYTES,
						actual: bytes.len(),
					}
				);

				let mut buf = Self::Bytes::default();
				buf.copy_from_slice(bytes);
				Ok(<$ty>::from_le_bytes(buf))
			}
		}
	};
}

impl_canonical_digest!(u32);
impl_canonical_digest!(u64);
impl_canonical_digest!(u128);

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	use hex_literal::hex;

	use super::*;

	#[test]
	fn test_canonical_bytes_are_little_endian() {
		assert_eq!(0xe40c_292cu32.to_canonical_bytes(), hex!("2c290ce4"));
		assert_eq!(0xaf63_dc4c_8601_ec8cu64.to_canonical_bytes(), hex!("8cec01864cdc63af"));
	}

	#[test]
	fn test_decode_canonical() {
		assert_eq!(u32::from_canonical_bytes(&hex!("c59d1c81")), Ok(0x811c_9dc5));
		assert_eq!(
			u128::from_canonical_bytes(&hex!("8dc595627521b8624201bb072e27626c")),
			Ok(0x6c62_272e_07bb_0142_62b8_2175_6295_c58d)
		);
	}

	#[test]
	fn test_decode_wrong_length() {
		assert_eq!(
			u64::from_canonical_bytes(&[0u8; 7]),
			Err(Error::InvalidDigestLength {
				expected: 8,
				actual: 7
			})
		);
		assert_eq!(
			u32::from_canonical_bytes(&[0u8; 16]),
			Err(Error::InvalidDigestLength {
				expected: 4,
				actual: 16
			})
		);
	}
}
