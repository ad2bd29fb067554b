// Copyright 2024-2025 Irreducible Inc.

//! Fixed-size byte encodings for digests.
//!
//! Integers are written in little-endian order regardless of the target, which is the
//! canonical serialized form of every digest width.

use bytes::{Buf, BufMut};

#[derive(Clone, thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
	#[error("Write buffer is full")]
	WriteBufferFull,
	#[error("Not enough data in read buffer to deserialize")]
	NotEnoughBytes,
}

/// Represents type that can be serialized to a byte buffer.
pub trait SerializeBytes {
	fn serialize(&self, write_buf: impl BufMut) -> Result<(), Error>;
}

/// Represents type that can be deserialized from a byte buffer.
pub trait DeserializeBytes {
	fn deserialize(read_buf: impl Buf) -> Result<Self, Error>
	where
		Self: Sized;
}

macro_rules! impl_le_serialization {
	($ty:ty, $put:ident, $get:ident) => {
		impl SerializeBytes for $ty {
			fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), Error> {
				crate::ensure!(
					write_buf.remaining_mut() >= std::mem::size_of::<$ty>(),
					Error::WriteBufferFull
				);
				write_buf.$put(*self);
				Ok(())
			}
		}

		impl DeserializeBytes for $ty {
			fn deserialize(mut read_buf: impl Buf) -> Result<Self, Error> {
				crate::ensure!(
					read_buf.remaining() >= std::mem::size_of::<$ty>(),
					Error::NotEnoughBytes
				);
				Ok(read_buf.$get())
			}
		}
	};
}

impl_le_serialization!(u32, put_u32_le, get_u32_le);
impl_le_serialization!(u64, put_u64_le, get_u64_le);
impl_le_serialization!(u128, put_u128_le, get_u128_le);

impl<const N: usize> SerializeBytes for [u8; N] {
	fn serialize(&self, mut write_buf: impl BufMut) -> Result<(), Error> {
		crate::ensure!(write_buf.remaining_mut() >= N, Error::WriteBufferFull);
		write_buf.put_slice(self);
		Ok(())
	}
}

impl<const N: usize> DeserializeBytes for [u8; N] {
	fn deserialize(mut read_buf: impl Buf) -> Result<Self, Error> {
		crate::ensure!(read_buf.remaining() >= N, Error::NotEnoughBytes);

		let mut ret = [0u8; N];
		read_buf.copy_to_slice(&mut ret);
		Ok(ret)
	}
}
