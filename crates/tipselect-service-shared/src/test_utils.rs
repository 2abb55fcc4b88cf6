//! Test utilities for microservice handler testing.
//!
//! This module provides fixtures and helpers for testing HTTP handlers
//! with a pre-loaded minimal tip chart.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::state::AppState;

/// Path to the test fixture chart.
pub const TEST_FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../docs/fixtures/tip_chart.json"
);

/// Lazily-initialized test state using the fixture chart.
static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Get a shared test AppState loaded from the fixture chart.
///
/// This function caches the state after the first load, so subsequent
/// calls are very fast.
///
/// # Panics
///
/// Panics if the fixture chart cannot be loaded. This indicates a test
/// configuration issue.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let path = PathBuf::from(TEST_FIXTURE_PATH);
            AppState::load(&path)
                .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", path, e))
        })
        .clone()
}

/// Get the absolute path to the test fixture chart.
pub fn fixture_chart_path() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_PATH)
}

/// Known values in the fixture chart for use in tests.
pub mod fixture_chart {
    /// Tip size matched by the 1600 psi / 12 lpm reference reading.
    pub const REFERENCE_TIP: f64 = 5.0;

    /// Injector size on the reference tip's row.
    pub const REFERENCE_INJECTOR: f64 = 2.5;

    /// Smallest tip size in the fixture.
    pub const SMALLEST_TIP: f64 = 2.5;

    /// Largest tip size in the fixture.
    pub const LARGEST_TIP: f64 = 8.0;

    /// Number of rows in the fixture.
    pub const ROW_COUNT: usize = 10;
}

/// Generate a unique request ID for testing.
pub fn test_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("test-{}", timestamp)
}
