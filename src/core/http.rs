//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{delete, get, post},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::config::AppConfig;
use crate::ingest::{self, IngestError, RecordInput};
use crate::metrics::Metrics;
use crate::models::DailyRecord;
use crate::signals::run_screener_with_config;
use crate::store::{MemoryStore, RecordStore, StoreError};
use crate::streaks::detect_streaks_with_config;

pub type SharedStore = Arc<RwLock<dyn RecordStore + Send + Sync>>;

#[derive(Clone)]
pub struct AppState {
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub store: SharedStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, store: SharedStore, metrics: Arc<Metrics>) -> Self {
        Self {
            metrics,
            start_time: Arc::new(Instant::now()),
            store,
            config: Arc::new(config),
        }
    }
}

type ApiError = (StatusCode, Json<Value>);
type ApiResult = Result<Json<Value>, ApiError>;

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

impl From<StoreError> for (StatusCode, Json<Value>) {
    fn from(e: StoreError) -> Self {
        error!(error = %e, "Store operation failed");
        let status = match e {
            StoreError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            StoreError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        api_error(status, e.to_string())
    }
}

fn ingest_error(e: IngestError) -> ApiError {
    warn!(error = %e, "Rejected upload");
    match e {
        IngestError::Io(_) => api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        _ => api_error(StatusCode::BAD_REQUEST, e.to_string()),
    }
}

/// Liveness plus a store round trip. A failing store reports `degraded`
/// with 503.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let uptime_seconds = state.start_time.elapsed().as_secs();
    let dates = state.store.read().await.dates();
    let (code, status, trading_days) = match dates {
        Ok(dates) => (StatusCode::OK, "healthy", Some(dates.len())),
        Err(e) => {
            warn!(error = %e, "Health check could not reach the store");
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", None)
        }
    };
    (
        code,
        Json(json!({
            "status": status,
            "trading_days": trading_days,
            "uptime_seconds": uptime_seconds,
            "service": "flowscreen"
        })),
    )
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

#[derive(Debug, Deserialize)]
struct UploadRequest {
    records: Vec<RecordInput>,
}

#[derive(Debug, Deserialize)]
struct CsvUploadQuery {
    filename: Option<String>,
    date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct RecordsQuery {
    limit: Option<usize>,
    date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct LimitQuery {
    limit: Option<usize>,
}

async fn store_records(state: &AppState, records: Vec<DailyRecord>) -> ApiResult {
    let count = state.store.write().await.upsert(records)?;
    state.metrics.records_upserted_total.inc_by(count as u64);
    info!(count, "Records upserted");
    Ok(Json(json!({ "success": true, "count": count })))
}

/// Upsert a JSON batch of records
async fn upsert_records(
    State(state): State<AppState>,
    Json(request): Json<UploadRequest>,
) -> ApiResult {
    let records = ingest::records_from_inputs(request.records).map_err(ingest_error)?;
    store_records(&state, records).await
}

/// Upsert the rows of a raw CSV export
async fn upload_csv(
    State(state): State<AppState>,
    Query(params): Query<CsvUploadQuery>,
    body: String,
) -> ApiResult {
    let default_date = params
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let file_name = params.filename.unwrap_or_default();
    let records = ingest::parse_named_csv(body.as_bytes(), &file_name, default_date)
        .map_err(ingest_error)?;
    store_records(&state, records).await
}

/// List stored records, optionally for one trading day
async fn list_records(
    State(state): State<AppState>,
    Query(params): Query<RecordsQuery>,
) -> ApiResult {
    let limit = params.limit.unwrap_or(state.config.fetch_limit);
    let store = state.store.read().await;
    let data = match params.date {
        Some(date) => store.on_date(date, limit)?,
        None => store.recent(limit)?,
    };
    Ok(Json(json!({ "success": true, "data": data })))
}

async fn list_dates(State(state): State<AppState>) -> ApiResult {
    let dates = state.store.read().await.dates()?;
    Ok(Json(json!({ "success": true, "dates": dates })))
}

async fn delete_date(State(state): State<AppState>, Path(date): Path<NaiveDate>) -> ApiResult {
    let deleted = state.store.write().await.delete_date(date)?;
    info!(date = %date, deleted, "Trading day deleted");
    Ok(Json(json!({ "success": true, "deleted": deleted })))
}

async fn snapshot(state: &AppState, limit: Option<usize>) -> Result<Vec<DailyRecord>, ApiError> {
    let limit = limit.unwrap_or(state.config.fetch_limit);
    Ok(state.store.read().await.recent(limit)?)
}

/// Accumulation and distribution streaks over the latest snapshot
async fn get_streaks(
    State(state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> ApiResult {
    let records = snapshot(&state, params.limit).await?;
    let report = detect_streaks_with_config(&records, &state.config.streaks);
    state.metrics.record_analysis("streaks");
    Ok(Json(json!({
        "success": true,
        "accumulation": report.accumulation,
        "distribution": report.distribution,
    })))
}

/// Technical screener over the latest snapshot
async fn get_screener(
    State(state): State<AppState>,
    Query(params): Query<LimitQuery>,
) -> ApiResult {
    let records = snapshot(&state, params.limit).await?;
    let results = run_screener_with_config(&records, &state.config.screener);
    state.metrics.record_analysis("screener");

    let data: Vec<Value> = results
        .iter()
        .map(|r| {
            let mut value = json!(r);
            value["reason_text"] = json!(r.reason_text());
            value
        })
        .collect();
    Ok(Json(json!({ "success": true, "data": data })))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/records", get(list_records).post(upsert_records))
        .route("/api/upload", post(upload_csv))
        .route("/api/dates", get(list_dates))
        .route("/api/dates/{date}", delete(delete_date))
        .route("/api/streaks", get(get_streaks))
        .route("/api/screener", get(get_screener))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let port = config.port;
    let metrics = Arc::new(Metrics::new()?);
    let store: SharedStore = Arc::new(RwLock::new(MemoryStore::new()));
    let app = create_router(AppState::new(config, store, metrics));
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
