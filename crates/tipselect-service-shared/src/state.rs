//! Application state for HTTP microservices.
//!
//! This module provides the shared state structure that axum handlers use
//! to access the loaded tip chart.

use std::path::Path;
use std::sync::Arc;

use tipselect_lib::{Error as LibError, TipChart};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Failed to load or validate the tip chart.
    ChartLoad(LibError),

    /// Chart file not found.
    ChartNotFound(String),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChartLoad(e) => write!(f, "failed to load tip chart: {}", e),
            Self::ChartNotFound(path) => write!(f, "tip chart not found: {}", path),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ChartLoad(e) => Some(e),
            Self::ChartNotFound(_) => None,
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        Self::ChartLoad(err)
    }
}

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (`Arc` internally); share it via axum's `State`
/// extractor. The chart is read-only after load, so handlers need no
/// synchronization.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::post, extract::State};
/// use tipselect_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let chart = state.chart();
///     // ... use chart
/// }
///
/// let state = AppState::load("path/to/tip_chart.json").unwrap();
/// let app = Router::new()
///     .route("/api/v1/sizing", post(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    chart: TipChart,
}

impl AppState {
    /// Load application state from a chart file.
    ///
    /// An empty or malformed chart is a configuration error and fails
    /// the load, so a misconfigured process never starts serving.
    pub fn load(chart_path: impl AsRef<Path>) -> Result<Self, AppStateError> {
        let chart_path = chart_path.as_ref();

        if !chart_path.exists() {
            return Err(AppStateError::ChartNotFound(
                chart_path.display().to_string(),
            ));
        }

        tracing::info!(path = %chart_path.display(), "loading tip chart");
        let chart = TipChart::from_path(chart_path)?;
        tracing::info!(rows = chart.len(), "tip chart loaded successfully");

        Ok(Self {
            inner: Arc::new(AppStateInner { chart }),
        })
    }

    /// Create application state from a pre-loaded chart.
    ///
    /// This is useful for testing or when loading from bundled bytes.
    pub fn from_chart(chart: TipChart) -> Self {
        Self {
            inner: Arc::new(AppStateInner { chart }),
        }
    }

    /// Access the loaded tip chart.
    pub fn chart(&self) -> &TipChart {
        &self.inner.chart
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("chart_rows", &self.inner.chart.len())
            .finish()
    }
}
