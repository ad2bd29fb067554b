// Copyright 2024-2025 Irreducible Inc.

//! Compile-time selection of the FNV variant, multiply strategies and 128-bit word.
//!
//! Selection is driven by cargo features:
//! - `normal_variant`: FNV-1 instead of FNV-1a;
//! - `bitshift_multiply`: [`ShiftMul`] for every width;
//! - `full_128_multiply`: [`FullMul`] instead of [`ReducedMul`] where the 128-bit engine runs on
//!   limbs.
//!
//! The 128-bit engine uses native `u128` arithmetic on 64-bit targets and [`U128`] limbs
//! everywhere else.

use std::fmt::{self, Display};

use cfg_if::cfg_if;
#[allow(unused_imports)]
use fnvkit_wide::U128;

#[allow(unused_imports)]
use crate::{
	canonical::{Endianness, NativeEndian},
	strategies::{FullMul, MulStrategy, NativeMul, ReducedMul, ShiftMul},
	variant::{Fnv1, Fnv1a, Variant},
	word::FnvWord,
};

cfg_if! {
	if #[cfg(feature = "normal_variant")] {
		pub type DefaultVariant = Fnv1;
	} else {
		pub type DefaultVariant = Fnv1a;
	}
}

cfg_if! {
	if #[cfg(feature = "bitshift_multiply")] {
		pub type Mul32 = ShiftMul;
		pub type Mul64 = ShiftMul;
	} else {
		pub type Mul32 = NativeMul;
		pub type Mul64 = NativeMul;
	}
}

cfg_if! {
	if #[cfg(target_pointer_width = "64")] {
		pub type Word128 = u128;

		cfg_if! {
			if #[cfg(feature = "bitshift_multiply")] {
				pub type Mul128 = ShiftMul;
			} else {
				pub type Mul128 = NativeMul;
			}
		}
	} else {
		pub type Word128 = U128;

		cfg_if! {
			if #[cfg(feature = "bitshift_multiply")] {
				pub type Mul128 = ShiftMul;
			} else if #[cfg(feature = "full_128_multiply")] {
				pub type Mul128 = FullMul;
			} else {
				pub type Mul128 = ReducedMul;
			}
		}
	}
}

/// Description of the algorithm choices baked into this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildConfig {
	pub variant: &'static str,
	pub mul_32: &'static str,
	pub mul_64: &'static str,
	pub mul_128: &'static str,
	pub word_128: &'static str,
	pub endianness: &'static str,
}

impl BuildConfig {
	pub const fn current() -> Self {
		Self {
			variant: DefaultVariant::NAME,
			mul_32: <Mul32 as MulStrategy<u32>>::NAME,
			mul_64: <Mul64 as MulStrategy<u64>>::NAME,
			mul_128: <Mul128 as MulStrategy<Word128>>::NAME,
			word_128: <Word128 as FnvWord>::NAME,
			endianness: NativeEndian::NAME,
		}
	}

	/// Report the configuration at debug level.
	pub fn log(&self) {
		tracing::debug!(
			variant = self.variant,
			mul_32 = self.mul_32,
			mul_64 = self.mul_64,
			mul_128 = self.mul_128,
			word_128 = self.word_128,
			endianness = self.endianness,
			"fnvkit build configuration"
		);
	}
}

impl Display for BuildConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} (32-bit: {}, 64-bit: {}, 128-bit: {} on {}, {})",
			self.variant,
			self.mul_32,
			self.mul_64,
			self.mul_128,
			self.word_128,
			self.endianness
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_build_is_fnv1a_native() {
		let config = BuildConfig::current();
		if cfg!(not(feature = "normal_variant")) {
			assert_eq!(config.variant, "FNV-1a");
		}
		if cfg!(not(feature = "bitshift_multiply")) {
			assert_eq!(config.mul_32, "native");
			assert_eq!(config.mul_64, "native");
		}
		if cfg!(target_pointer_width = "64") {
			assert_eq!(config.word_128, "u128");
		}
	}

	#[test]
	fn test_display_mentions_every_choice() {
		let config = BuildConfig::current();
		let text = config.to_string();
		for part in [config.variant, config.mul_32, config.mul_128, config.word_128, config.endianness] {
			assert!(text.contains(part), "{text:?} is missing {part:?}");
		}
	}
}
