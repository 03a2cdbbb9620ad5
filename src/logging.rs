// SPDX-License-Identifier: MPL-2.0
//! Tracing setup for the `crimewatch` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host. `RUST_LOG` takes precedence over the built-in filter.

use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "crimewatch=info";
const VERBOSE_LOG_FILTER: &str = "crimewatch=debug";

/// Returns the filter used when `RUST_LOG` is not set.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Installs a stderr subscriber.
///
/// Does nothing if a global subscriber is already set.
pub fn init(verbose: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

/// Milliseconds of `duration` as a log field, saturating at `u64::MAX`.
pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
