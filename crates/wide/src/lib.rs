// Copyright 2024-2025 Irreducible Inc.

//! Portable 128-bit unsigned arithmetic built from two 64-bit limbs.
//!
//! Only the operations needed by a 128-bit FNV round are provided: wrapping addition, the low
//! half of a full 128×128 product, the reduced multiply by the FNV-128 prime, left shift, XOR
//! into the low 32 bits and byte swap. None of them use native 128-bit multiplication, so the
//! type is usable on targets where `u128` multiply lowers to a library call.

mod u128_limbs;

pub use u128_limbs::*;
