// Copyright 2024-2025 Irreducible Inc.

//! FNV hash functions with 32, 64 and 128-bit digests.
//!
//! The core operation folds a byte buffer into a caller-owned seed. Starting from the width's
//! offset basis, the seed after the last fold is the digest; folding `A` and then `B` equals
//! folding `A‖B` in one call.
//!
//! ```
//! use fnvkit_hash::{fnv64, fold_64, SEED_64};
//!
//! let mut seed = SEED_64;
//! fold_64(b"foo", &mut seed);
//! fold_64(b"bar", &mut seed);
//! assert_eq!(seed, fnv64(b"foobar"));
//! ```
//!
//! [`engine`] folds in native byte order. [`canonical`] wraps it so that a seed stored in
//! memory has the same bytes on little- and big-endian targets. The variant, multiply strategy
//! and 128-bit word are chosen at build time, see [`config`].

pub mod canonical;
pub mod config;
pub mod constants;
pub mod digest;
pub mod engine;
mod error;
pub mod hasher;
pub mod strategies;
mod tracing;
pub mod variant;
pub mod word;

pub use canonical::{fold_canonical, fold_canonical_128, fold_canonical_32, fold_canonical_64};
pub use config::BuildConfig;
pub use constants::*;
pub use digest::CanonicalDigest;
pub use engine::{fold_128, fold_32, fold_64, FnvDigest};
pub use error::*;
pub use hasher::*;
