use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use opentelemetry::metrics::{Counter, MeterProvider};
use opentelemetry_prometheus::exporter;
use opentelemetry_sdk::metrics::SdkMeterProvider;
use prometheus::{Encoder, Registry, TextEncoder};
use serde_json::{json, Map, Value};

use hilo_core::{DailyReading, EngineError, ObservationStore, QueryEngine};

pub mod obs;

const INDEX_BODY: &str = "Available routes:\n\
    /api/v1.0/precipitation\n\
    /api/v1.0/stations\n\
    /api/v1.0/tobs\n\
    /api/v1.0/<start>\n\
    /api/v1.0/<start>/<end>\n";

pub struct AppState {
    ready: AtomicBool,
    registry: Registry,
    #[allow(dead_code)]
    provider: SdkMeterProvider,
    requests_total: Counter<u64>,
    engine: QueryEngine,
}

pub fn build_app(store: Arc<dyn ObservationStore>) -> (Router, Arc<AppState>) {
    // Prometheus exporter via OpenTelemetry
    let registry = Registry::new();
    let reader = exporter()
        .with_registry(registry.clone())
        .build()
        .expect("prom exporter");
    let provider = SdkMeterProvider::builder().with_reader(reader).build();
    let meter = provider.meter("hilo-api");

    let requests_total = meter
        .u64_counter("hilo_requests_total")
        .with_description("Total HTTP requests served")
        .init();

    let state = Arc::new(AppState {
        ready: AtomicBool::new(false),
        registry,
        provider,
        requests_total,
        engine: QueryEngine::new(store),
    });

    let router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/metrics", get(metrics))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/:start", get(stats_open))
        .route("/api/v1.0/:start/:end", get(stats_closed))
        .with_state(Arc::clone(&state));

    (router, state)
}

pub fn set_ready(state: &Arc<AppState>, is_ready: bool) {
    state.ready.store(is_ready, Ordering::Relaxed);
}

async fn index(State(state): State<Arc<AppState>>) -> &'static str {
    state.requests_total.add(1, &[]);
    INDEX_BODY
}

async fn healthz(State(state): State<Arc<AppState>>) -> StatusCode {
    state.requests_total.add(1, &[]);
    StatusCode::OK
}

async fn readyz(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.ready.load(Ordering::Relaxed) {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

async fn metrics(
    State(state): State<Arc<AppState>>,
) -> (
    [(axum::http::header::HeaderName, axum::http::HeaderValue); 1],
    String,
) {
    let encoder = TextEncoder::new();
    let metric_families = state.registry.gather();
    let mut buf = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buf) {
        tracing::warn!(error=?e, "failed to encode metrics");
    }
    let body = String::from_utf8(buf).unwrap_or_default();
    let header = (
        header::CONTENT_TYPE,
        axum::http::HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    ([header], body)
}

/// Map an engine failure onto the wire: missing reference data is a 404,
/// anything else a 500 with the cause logged server-side.
fn error_response(err: EngineError) -> Response {
    match err {
        EngineError::NoData => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "no measurement data available"})),
        )
            .into_response(),
        err => {
            tracing::error!(error = %err, "query failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "internal error"})),
            )
                .into_response()
        }
    }
}

/// One single-key `{date: value}` object per reading.
fn degenerate_map(reading: &DailyReading) -> Value {
    let mut entry = Map::new();
    entry.insert(reading.date.clone(), json!(reading.value));
    Value::Object(entry)
}

async fn precipitation(State(state): State<Arc<AppState>>) -> Response {
    state.requests_total.add(1, &[]);
    match state.engine.precipitation().await {
        Ok(readings) => {
            let body: Vec<Value> = readings.iter().map(degenerate_map).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => error_response(err),
    }
}

async fn stations(State(state): State<Arc<AppState>>) -> Response {
    state.requests_total.add(1, &[]);
    match state.engine.stations().await {
        Ok(stations) => (StatusCode::OK, Json(stations)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn tobs(State(state): State<Arc<AppState>>) -> Response {
    state.requests_total.add(1, &[]);
    match state.engine.temperature_observations().await {
        Ok(observations) => (StatusCode::OK, Json(observations)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn stats_open(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    state.requests_total.add(1, &[]);
    match state.engine.temperature_stats(&start, None).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn stats_closed(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    state.requests_total.add(1, &[]);
    match state.engine.temperature_stats(&start, Some(&end)).await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(err) => error_response(err),
    }
}
