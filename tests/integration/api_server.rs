//! Integration tests for the API Server
//!
//! Tests health, metrics, uploads, queries and the analysis endpoints.


use serde_json::{json, Value};

use std::sync::Arc;
use tokio::sync::RwLock;

use test_utils::{TestApiServer, UnreachableStore};

const CSV_HEADER: &str = "No,Kode Saham,Nama Perusahaan,Open Price,Penutupan,Tertinggi,Terendah,Volume,Foreign Buy,Foreign Sell";

fn record(ticker: &str, date: &str, close: f64, buy: f64, sell: f64) -> Value {
    json!({
        "ticker_code": ticker,
        "company_name": format!("{} Tbk", ticker),
        "trade_date": date,
        "open": close,
        "high": close,
        "low": close,
        "close": close,
        "volume": 1000,
        "foreign_buy": buy,
        "foreign_sell": sell,
    })
}

/// Five days of foreign buying for BBCA and two days of selling for TLKM.
fn flow_batch() -> Value {
    let mut records = Vec::new();
    for day in 1..=5 {
        let date = format!("2025-11-{:02}", 20 + day);
        records.push(record("BBCA", &date, 9000.0 + day as f64, 200.0, 100.0));
    }
    records.push(record("TLKM", "2025-11-24", 3000.0, 500.0, 100.0));
    records.push(record("TLKM", "2025-11-25", 2990.0, 100.0, 300.0));
    records.push(record("TLKM", "2025-11-26", 2980.0, 100.0, 400.0));
    json!({ "records": records })
}

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestApiServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["trading_days"], 0);
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "flowscreen");

    app.server.post("/api/records").json(&flow_batch()).await;
    let body: Value = app.server.get("/health").await.json();
    assert_eq!(body["trading_days"], 6);
}

#[tokio::test]
async fn health_reports_degraded_when_store_is_down() {
    let app = TestApiServer::with_store(Arc::new(RwLock::new(UnreachableStore))).await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 503);

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert!(body["trading_days"].is_null());
}

#[tokio::test]
async fn unavailable_store_maps_to_service_unavailable() {
    let app = TestApiServer::with_store(Arc::new(RwLock::new(UnreachableStore))).await;

    let response = app.server.get("/api/records").await;
    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("store unavailable"));

    let response = app.server.post("/api/records").json(&flow_batch()).await;
    assert_eq!(response.status_code(), 503);
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestApiServer::new().await;
    let _ = app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("http_request_duration_seconds"));
    assert!(body.contains("http_requests_in_flight"));
}

#[tokio::test]
async fn upload_records_then_list() {
    let app = TestApiServer::new().await;

    let response = app.server.post("/api/records").json(&flow_batch()).await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 8);

    let body: Value = app.server.get("/api/records").await.json();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 8);
    assert_eq!(data[0]["ticker_code"], "TLKM");
    assert_eq!(data[0]["trade_date"], "2025-11-26");
    assert_eq!(data[0]["foreign_net"], -300.0);

    let body: Value = app
        .server
        .get("/api/records")
        .add_query_param("date", "2025-11-25")
        .await
        .json();
    let tickers: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["ticker_code"].as_str().unwrap())
        .collect();
    assert_eq!(tickers, vec!["BBCA", "TLKM"]);

    let body: Value = app
        .server
        .get("/api/records")
        .add_query_param("limit", "3")
        .await
        .json();
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn upload_rejects_empty_batch() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/records")
        .json(&json!({ "records": [] }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn reupload_replaces_existing_day() {
    let app = TestApiServer::new().await;
    app.server.post("/api/records").json(&flow_batch()).await;

    let replacement = json!({ "records": [record("BBCA", "2025-11-25", 1.0, 0.0, 50.0)] });
    app.server.post("/api/records").json(&replacement).await;

    let body: Value = app
        .server
        .get("/api/records")
        .add_query_param("date", "2025-11-25")
        .await
        .json();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["close"], 1.0);
    assert_eq!(data[0]["foreign_net"], -50.0);
}

#[tokio::test]
async fn csv_upload_takes_date_from_filename() {
    let app = TestApiServer::new().await;
    let csv = format!(
        "{}\n1,BBRI,Bank Rakyat Indonesia,\"4,000\",\"4,100\",\"4,150\",\"3,990\",\"2,500,000\",\"300\",\"100\"\n",
        CSV_HEADER
    );

    let response = app
        .server
        .post("/api/upload")
        .add_query_param("filename", "2025-11-28.csv")
        .text(csv)
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>()["count"], 1);

    let body: Value = app.server.get("/api/dates").await.json();
    assert_eq!(body["dates"], json!(["2025-11-28"]));

    let body: Value = app.server.get("/api/records").await.json();
    assert_eq!(body["data"][0]["close"], 4100.0);
    assert_eq!(body["data"][0]["volume"], 2_500_000);
}

#[tokio::test]
async fn csv_upload_without_ticker_column_is_bad_request() {
    let app = TestApiServer::new().await;
    let response = app
        .server
        .post("/api/upload")
        .text("Nama Perusahaan,Penutupan\nFoo,1\n")
        .await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn csv_upload_with_negative_price_stores_nothing() {
    let app = TestApiServer::new().await;
    let csv = format!(
        "{}\n1,BBCA,Bank Central Asia,9000,-9150,9200,8900,1000,200,100\n",
        CSV_HEADER
    );
    let response = app
        .server
        .post("/api/upload")
        .add_query_param("filename", "2025-11-25.csv")
        .text(csv)
        .await;
    assert_eq!(response.status_code(), 400);

    let body: Value = app.server.get("/api/records").await.json();
    assert_eq!(body["data"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn dates_listing_and_delete() {
    let app = TestApiServer::new().await;
    app.server.post("/api/records").json(&flow_batch()).await;

    let body: Value = app.server.get("/api/dates").await.json();
    assert_eq!(
        body["dates"],
        json!(["2025-11-26", "2025-11-25", "2025-11-24", "2025-11-23", "2025-11-22", "2025-11-21"])
    );

    let response = app.server.delete("/api/dates/2025-11-26").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>()["deleted"], 1);

    let body: Value = app.server.get("/api/dates").await.json();
    assert_eq!(body["dates"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn streaks_endpoint_reports_both_kinds() {
    let app = TestApiServer::new().await;
    app.server.post("/api/records").json(&flow_batch()).await;

    let response = app.server.get("/api/streaks").await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();

    let accumulation = body["accumulation"].as_array().unwrap();
    assert_eq!(accumulation.len(), 1);
    assert_eq!(accumulation[0]["ticker_code"], "BBCA");
    assert_eq!(accumulation[0]["duration_days"], 5);
    assert_eq!(accumulation[0]["cumulative_net"], 500.0);
    assert_eq!(accumulation[0]["streak_start_date"], "2025-11-21");
    assert_eq!(accumulation[0]["latest_date"], "2025-11-25");

    let distribution = body["distribution"].as_array().unwrap();
    assert_eq!(distribution.len(), 1);
    assert_eq!(distribution[0]["ticker_code"], "TLKM");
    assert_eq!(distribution[0]["duration_days"], 2);
    assert_eq!(distribution[0]["cumulative_net"], -500.0);

    let metrics = app.server.get("/metrics").await.text();
    assert!(metrics.contains("analysis_runs_total"));
}

#[tokio::test]
async fn screener_endpoint_classifies_every_ticker() {
    let app = TestApiServer::new().await;
    app.server.post("/api/records").json(&flow_batch()).await;

    let response = app.server.get("/api/screener").await;
    assert_eq!(response.status_code(), 200);
    let body: Value = response.json();
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);

    for row in data {
        assert_eq!(row["signal"], "WATCH");
        assert_eq!(row["rsi"], 50.0);
        assert_eq!(row["reason_text"], "Netral");
    }
}
