//! Shared helpers for the cross-crate lock tests.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fixtures;

/// Route `log` output through the test harness capture.
///
/// Safe to call from every test; only the first call installs the logger.
/// Set `RUST_LOG=waypoint_search=trace` to see per-expansion lines.
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
