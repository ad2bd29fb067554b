// Copyright 2024-2025 Irreducible Inc.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("canonical digest must be {expected} bytes long, got {actual}")]
	InvalidDigestLength { expected: usize, actual: usize },
	#[error("serialization error: {0}")]
	Serialization(#[from] fnvkit_utils::serialization::Error),
}
