//! Nozzle sizing HTTP microservice.
//!
//! This service provides a REST API for selecting an injector tip from a
//! pressure and flow reading, matched against the loaded sizing chart.
//!
//! # Endpoints
//!
//! - `POST /api/v1/sizing` - Compute a sizing from a pressure/flow reading
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe
//!
//! # Configuration
//!
//! - `TIPSELECT_CHART_PATH` - Path to the tip_chart.json file (required)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `SERVICE_PORT` - HTTP port (default: 8080)

use std::env;
use std::net::SocketAddr;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{error, info};

use tipselect_lib::{select_tip, Error as LibError, SizingInput, TipRow};
use tipselect_service_shared::{
    from_lib_error, health_live, health_ready, init_logging, init_metrics, metrics_handler,
    record_matched_tip, record_nozzle_number, record_sizing_calculated, record_sizing_failed,
    AppState, LoggingConfig, MetricsConfig, MetricsLayer, ProblemDetails, ServiceResponse,
    SizingRequest, Validate,
};

/// Sizing response returned to the caller.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SizingResponse {
    /// The submitted measurements, echoed back unconverted.
    inputs: SizingRequest,
    /// Nozzle number rounded to two decimal places.
    nozzle_number: f64,
    /// The matched chart row.
    matched: MatchedRow,
}

/// The chart row a sizing matched, in wire format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchedRow {
    tip_size: f64,
    injector_size: f64,
    diffuser_size: f64,
    air_nozzle_size: f64,
}

impl From<TipRow> for MatchedRow {
    fn from(row: TipRow) -> Self {
        Self {
            tip_size: row.tip_size,
            injector_size: row.injector_size,
            diffuser_size: row.diffuser_size,
            air_nozzle_size: row.air_nozzle_size,
        }
    }
}

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response {
    Success(ServiceResponse<SizingResponse>),
    Error(ProblemDetails),
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(data) => (StatusCode::OK, Json(data)).into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT from environment)
    let logging_config = LoggingConfig::from_env().with_service("sizing");
    init_logging(&logging_config);

    // Initialize metrics
    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        // Log but don't fail - metrics are optional
        tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    // Load configuration from environment
    let chart_path =
        env::var("TIPSELECT_CHART_PATH").unwrap_or_else(|_| "/data/tip_chart.json".to_string());
    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    info!(chart_path = %chart_path, port = port, "starting sizing service");

    // Load application state; an empty or malformed chart aborts startup
    let state = AppState::load(&chart_path).map_err(|e| {
        error!(error = %e, path = %chart_path, "failed to load application state");
        e
    })?;

    info!(rows = state.chart().len(), "application state loaded");

    let app = app(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the service router.
fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/sizing", post(sizing_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(MetricsLayer)
        .with_state(state)
}

/// Handle POST /api/v1/sizing requests.
async fn sizing_handler(
    State(state): State<AppState>,
    Json(request): Json<SizingRequest>,
) -> Response {
    // Generate a request ID for tracing
    let request_id = generate_request_id();

    info!(
        request_id = %request_id,
        pressure = request.pressure,
        pressure_unit = ?request.pressure_unit,
        flow = request.flow,
        flow_unit = ?request.flow_unit,
        "handling sizing request"
    );

    // Validate the request
    if let Err(problem) = request.validate(&request_id) {
        record_sizing_failed("validation_error", "sizing");
        return Response::Error(*problem);
    }

    // Convert to library input
    let input = SizingInput {
        pressure: request.pressure,
        pressure_unit: request.pressure_unit.into(),
        flow: request.flow,
        flow_unit: request.flow_unit.into(),
    };

    // Run the sizing
    let sizing = match select_tip(state.chart(), &input) {
        Ok(sizing) => sizing,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "sizing failed");
            record_sizing_failed(failure_reason(&e), "sizing");
            return Response::Error(from_lib_error(&e, &request_id));
        }
    };

    let response = SizingResponse {
        inputs: request,
        nozzle_number: sizing.rounded_nozzle_number(),
        matched: sizing.row.into(),
    };

    // Record business metrics
    record_sizing_calculated("sizing");
    record_nozzle_number(sizing.nozzle_number);
    record_matched_tip(sizing.row.tip_size);

    info!(
        request_id = %request_id,
        nozzle_number = response.nozzle_number,
        tip_size = response.matched.tip_size,
        "sizing computed successfully"
    );

    Response::Success(ServiceResponse::new(response))
}

/// Metric label for a failed sizing.
fn failure_reason(error: &LibError) -> &'static str {
    match error {
        LibError::InvalidInput { .. } => "invalid_input",
        LibError::EmptyChart | LibError::ChartDataValidation { .. } => "chart_unavailable",
        LibError::TipNotInChart { .. } => "chart_mismatch",
        _ => "internal_error",
    }
}

/// Generate a unique request ID for tracing.
fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    format!("req-{:x}", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use tipselect_service_shared::test_utils::test_state;

    fn server() -> TestServer {
        TestServer::new(app(test_state())).expect("router should build")
    }

    #[tokio::test]
    async fn valid_reading_returns_matched_row() {
        let response = server()
            .post("/api/v1/sizing")
            .json(&json!({"pressure": 1600, "flow": 12}))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["nozzleNumber"], 5.01);
        assert_eq!(body["matched"]["tipSize"], 5.0);
        assert_eq!(body["matched"]["injectorSize"], 2.5);
        assert_eq!(body["matched"]["diffuserSize"], 4.0);
        assert_eq!(body["matched"]["airNozzleSize"], 2.0);
    }

    #[tokio::test]
    async fn inputs_are_echoed_unconverted() {
        let response = server()
            .post("/api/v1/sizing")
            .json(&json!({
                "pressure": 110,
                "pressureUnit": "bar",
                "flow": 12,
                "flowUnit": "lpm"
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["inputs"]["pressure"], 110.0);
        assert_eq!(body["inputs"]["pressureUnit"], "bar");
        assert_eq!(body["inputs"]["flow"], 12.0);
        // 110 bar is within a few psi of the 1600 psi reference reading
        assert_eq!(body["matched"]["tipSize"], 5.0);
    }

    #[tokio::test]
    async fn zero_flow_is_a_problem_response() {
        let response = server()
            .post("/api/v1/sizing")
            .json(&json!({"pressure": 1600, "flow": 0}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["type"], "/problems/invalid-request");
        assert_eq!(body["status"], 400);
        assert!(body["detail"].as_str().unwrap().contains("'flow'"));
    }

    #[tokio::test]
    async fn negative_pressure_is_a_problem_response() {
        let response = server()
            .post("/api/v1/sizing")
            .json(&json!({"pressure": -5, "flow": 12}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert!(body["detail"].as_str().unwrap().contains("'pressure'"));
    }

    #[tokio::test]
    async fn unknown_unit_tag_is_rejected() {
        let response = server()
            .post("/api/v1/sizing")
            .json(&json!({"pressure": 1600, "flow": 12, "flowUnit": "cfm"}))
            .await;

        assert!(response.status_code().is_client_error());
    }

    #[tokio::test]
    async fn health_probes_respond() {
        let live = server().get("/health/live").await;
        live.assert_status_ok();

        let ready = server().get("/health/ready").await;
        ready.assert_status_ok();
        let body: Value = ready.json();
        assert_eq!(body["rows_loaded"], 10);
    }
}
