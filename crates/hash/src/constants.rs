// Copyright 2024-2025 Irreducible Inc.

//! Primes and offset bases from the FNV specification.

use fnvkit_wide::U128;

pub const PRIME_32: u32 = 16_777_619;
pub const SEED_32: u32 = 2_166_136_261;

pub const PRIME_64: u64 = 1_099_511_628_211;
pub const SEED_64: u64 = 14_695_981_039_346_656_037;

/// `2^88 + 0x13b`
pub const PRIME_128: u128 = (1 << 88) + 0x13b;
pub const SEED_128: u128 = 0x6c62_272e_07bb_0142_62b8_2175_6295_c58d;

pub const PRIME_128_LIMBS: U128 = U128::new(0x0000_0000_0100_0000, 0x0000_0000_0000_013b);
pub const SEED_128_LIMBS: U128 = U128::new(0x6c62_272e_07bb_0142, 0x62b8_2175_6295_c58d);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_limb_constants_agree() {
		assert_eq!(PRIME_128_LIMBS.to_u128(), PRIME_128);
		assert_eq!(SEED_128_LIMBS.to_u128(), SEED_128);
	}

	#[test]
	fn test_primes_match_hex_form() {
		assert_eq!(PRIME_32, 0x0100_0193);
		assert_eq!(PRIME_64, 0x0100_0000_01b3);
		assert_eq!(SEED_32, 0x811c_9dc5);
		assert_eq!(SEED_64, 0xcbf2_9ce4_8422_2325);
	}
}
