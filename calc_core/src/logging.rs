//! Subscriber setup for sizing runs.
//!
//! The selector reports skipped and failing candidates at `debug`, the
//! accepted section and batch totals at `info`, and clamped exposure codes
//! at `warn`. None of it is printed until a front end calls one of the
//! functions below.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Show selections and batch totals, `RUST_LOG` permitting.
pub fn init() {
    init_with_level("info")
}

/// Install the subscriber with `default_level` as the filter when
/// `RUST_LOG` is unset.
///
/// The CLI passes `warn`, or `debug` under `--verbose` to trace the
/// catalog walk. Output goes to stderr, leaving stdout for `--json`
/// reports.
pub fn init_with_level(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Candidate-level events, captured by the test harness
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
