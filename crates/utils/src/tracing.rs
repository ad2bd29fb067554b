// Copyright 2024-2025 Irreducible Inc.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the filter directives, e.g. `FNVKIT_LOG=fnvkit_hash=trace`.
pub const LOG_ENV_VAR: &str = "FNVKIT_LOG";

/// Install a global subscriber printing formatted events to stderr.
///
/// The filter is read from [`LOG_ENV_VAR`] and defaults to `info`. Calling this more than once
/// is harmless; only the first subscriber is kept.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init();
}
