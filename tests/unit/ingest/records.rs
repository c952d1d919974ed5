//! Unit tests for JSON record validation

use flowscreen::ingest::{records_from_inputs, IngestError, RecordInput};
use serde_json::json;

fn input(ticker: &str, buy: f64, sell: f64) -> RecordInput {
    serde_json::from_value(json!({
        "ticker_code": ticker,
        "trade_date": "2025-11-28",
        "close": 1500.0,
        "volume": 2000,
        "foreign_buy": buy,
        "foreign_sell": sell,
    }))
    .unwrap()
}

#[test]
fn test_inputs_become_records_with_derived_net() {
    let records = records_from_inputs(vec![input("BBRI", 10.0, 25.0)]).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].foreign_net, -15.0);
    assert_eq!(records[0].company_name, "");
    assert_eq!(records[0].open, 0.0);
}

#[test]
fn test_blank_tickers_are_dropped() {
    let records = records_from_inputs(vec![input("  ", 1.0, 0.0), input("BMRI", 1.0, 0.0)]).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].ticker_code, "BMRI");
}

#[test]
fn test_all_blank_is_rejected() {
    assert!(matches!(
        records_from_inputs(vec![input("", 1.0, 0.0)]),
        Err(IngestError::NoValidRecords)
    ));
    assert!(matches!(records_from_inputs(vec![]), Err(IngestError::NoValidRecords)));
}

#[test]
fn test_negative_amount_rejects_batch() {
    let result = records_from_inputs(vec![input("BBRI", -1.0, 0.0), input("BMRI", 1.0, 0.0)]);
    match result {
        Err(IngestError::InvalidRecord { ticker, reason }) => {
            assert_eq!(ticker, "BBRI");
            assert!(reason.contains("foreign_buy"));
        }
        other => panic!("expected invalid record, got {:?}", other),
    }
}
