// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Console logging for the slider demo and test harness.
//!
//! Both entry points install a global [`tracing`] subscriber writing to stderr. Each
//! line starts with the UTC time of day to the millisecond, and targets are left out,
//! since everything logged here comes from one crate.
//!
//! [`try_init_tracing`] defaults to `DEBUG` in debug builds and `INFO` in release
//! builds. [`try_init_test_tracing`] defaults to `WARN`.
//!
//! `RUST_LOG` overrides the default level, e.g. `RUST_LOG=increment_slider=trace`
//! shows every animation frame. An already installed subscriber is left in place.

use std::error::Error;
use std::fmt;

use time::macros::format_description;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

/// Builds the console subscriber, filtered at `level` unless `RUST_LOG` says otherwise.
///
/// A malformed `RUST_LOG` doesn't stop logging: the valid directives are kept, and the
/// parse error is returned alongside so it can be reported through the new subscriber.
pub fn console_subscriber(level: LevelFilter) -> (impl Subscriber, Option<Box<dyn Error>>) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var("RUST_LOG");
    let filter_error = filter
        .from_env()
        .err()
        .map(|err| Box::new(err) as Box<dyn Error>);

    // Trailing `Z` marks the time as UTC.
    let clock = UtcTime::new(format_description!(
        "[hour repr:24]:[minute]:[second].[subsecond digits:3]Z"
    ));
    let console = tracing_subscriber::fmt::layer()
        .with_timer(clock)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter.from_env_lossy());

    (tracing_subscriber::registry().with(console), filter_error)
}

/// Returned when a global subscriber was installed before ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberAlreadySet;

impl fmt::Display for SubscriberAlreadySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("a global tracing subscriber is already set")
    }
}

impl Error for SubscriberAlreadySet {}

fn install(level: LevelFilter) -> Result<(), SubscriberAlreadySet> {
    // `has_been_set` is doc(hidden) but stable across tracing-core 0.1.
    if tracing_core::dispatcher::has_been_set() {
        return Err(SubscriberAlreadySet);
    }
    let (subscriber, filter_error) = console_subscriber(level);
    tracing::subscriber::set_global_default(subscriber).map_err(|_| SubscriberAlreadySet)?;
    if let Some(err) = filter_error {
        tracing::warn!("Ignoring invalid parts of RUST_LOG: {err}");
    }
    Ok(())
}

/// Installs console logging for tests, showing warnings and errors only.
///
/// # Errors
///
/// Returns [`SubscriberAlreadySet`] if a global subscriber exists, which is expected
/// when several tests in one binary call this.
pub fn try_init_test_tracing() -> Result<(), SubscriberAlreadySet> {
    install(LevelFilter::WARN)
}

/// Installs console logging for an application.
///
/// At the default level a gesture logs its state changes and its settle.
///
/// # Errors
///
/// Returns [`SubscriberAlreadySet`] if a global subscriber exists.
pub fn try_init_tracing() -> Result<(), SubscriberAlreadySet> {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    install(level)
}
