// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Miscellaneous utility functions.

/// Panic in debug and `tracing::error` in release mode.
///
/// This macro is in some way a combination of `panic` and `debug_assert`,
/// but it will log the provided message instead of ignoring it in release builds.
///
/// It's useful when a backtrace would aid debugging but a crash can be avoided in release.
#[macro_export]
macro_rules! debug_panic {
    ($msg:expr$(,)?) => {
        if cfg!(debug_assertions) {
            panic!($msg);
        } else {
            tracing::error!($msg);
        }
    };
    ($fmt:expr, $($arg:tt)+) => {
        if cfg!(debug_assertions) {
            panic!($fmt, $($arg)*);
        } else {
            tracing::error!($fmt, $($arg)*);
        }
    };
}

pub use crate::debug_panic;

/// Provides sanitization of values read from the host during paint.
///
/// Paint code must not fail, so invalid geometry is replaced instead of rejected.
pub trait Sanitize {
    /// Returns the sanitized value.
    #[track_caller]
    fn sanitize(self, name: &str) -> Self;
}

impl Sanitize for f64 {
    /// Ensures the value is finite and non-negative.
    ///
    /// Non-finite or negative value falls back to zero.
    ///
    /// # Panics
    ///
    /// Panics if the value is non-finite or negative and debug assertions are enabled.
    fn sanitize(self, name: &str) -> Self {
        if self.is_finite() && self >= 0. {
            self
        } else {
            debug_panic!("Invalid `{name}` value: {self}");
            0.
        }
    }
}
