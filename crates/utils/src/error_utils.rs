// Copyright 2024-2025 Irreducible Inc.

/// Return early with the given error, converted with `Into`.
///
/// With the `bail_panic` feature the error is turned into a panic instead, which gives a
/// backtrace at the point of failure when chasing down a bad input.
#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

/// Bail with `$err` unless `$cond` holds.
#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	use crate::serialization::Error;

	fn need_bytes(have: usize, want: usize) -> Result<usize, Error> {
		crate::ensure!(have >= want, Error::NotEnoughBytes);
		Ok(have - want)
	}

	#[test]
	fn test_ensure_passes_through() {
		assert_eq!(need_bytes(8, 4).unwrap(), 4);
	}

	#[test]
	fn test_ensure_bails() {
		assert!(matches!(need_bytes(2, 4), Err(Error::NotEnoughBytes)));
	}
}
