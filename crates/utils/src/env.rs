// Copyright 2024-2025 Irreducible Inc.

/// Read boolean flag from the environment variable.
pub fn boolean_env_flag_set(flag: &str) -> bool {
	match std::env::var(flag) {
		Ok(val) => ["1", "on", "ON", "true", "TRUE", "yes", "YES"].contains(&val.as_str()),
		Err(_) => false,
	}
}

/// Read a `usize` from the environment variable, falling back to `default` when the variable is
/// unset.
///
/// Panics if the variable is set but does not parse, so that a typo in a benchmark invocation
/// is not silently ignored.
pub fn usize_env_var_or(name: &str, default: usize) -> usize {
	match std::env::var(name) {
		Ok(val) => val
			.parse::<usize>()
			.unwrap_or_else(|_| panic!("{name} must be a valid integer, got {val:?}")),
		Err(_) => default,
	}
}
