// Copyright 2024-2025 Irreducible Inc.

//! Ambient helpers shared by the fnvkit crates: tracing setup, environment flags, byte
//! serialization and the `bail!`/`ensure!` error macros.

pub mod env;
pub mod error_utils;
pub mod serialization;
pub mod tracing;
