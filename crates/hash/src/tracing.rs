// Copyright 2024-2025 Irreducible Inc.
use cfg_if::cfg_if;

cfg_if! {
	if #[cfg(feature = "trace_folds")] {
		macro_rules! trace_fold {
			($word:ty, $len:expr) => {
				::tracing::event!(
					name: "fnv_fold",
					::tracing::Level::TRACE,
					word = <$word as $crate::word::FnvWord>::NAME,
					len = $len
				);
			};
		}
	} else {
		macro_rules! trace_fold {
			($word:ty, $len:expr) => {};
		}
	}
}

pub(crate) use trace_fold;
