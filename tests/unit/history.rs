//! Unit tests for ticker grouping

use crate::common::{day, with_closes};
use flowscreen::history::group_by_ticker;
use flowscreen::models::{DailyRecord, TickerHistory};

#[test]
fn test_group_empty_input() {
    assert!(group_by_ticker(&[]).is_empty());
}

#[test]
fn test_group_preserves_first_appearance_and_input_order() {
    let records = vec![
        DailyRecord::new("BBB", day(3), 10.0),
        DailyRecord::new("AAA", day(1), 20.0),
        DailyRecord::new("BBB", day(1), 11.0),
        DailyRecord::new("AAA", day(2), 21.0),
        DailyRecord::new("BBB", day(2), 12.0),
    ];

    let groups = group_by_ticker(&records);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].ticker_code, "BBB");
    assert_eq!(groups[1].ticker_code, "AAA");

    let bbb_dates: Vec<_> = groups[0].records.iter().map(|r| r.trade_date).collect();
    assert_eq!(bbb_dates, vec![day(3), day(1), day(2)]);
    assert_eq!(groups[1].len(), 2);
}

#[test]
fn test_group_does_not_touch_input() {
    let records = with_closes("AAA", &[1.0, 2.0, 3.0]);
    let copy = records.clone();
    let _ = group_by_ticker(&records);
    assert_eq!(records, copy);
}

#[test]
fn test_history_sorting_directions() {
    let mut history = TickerHistory::new("AAA");
    history.records = vec![
        DailyRecord::new("AAA", day(2), 2.0),
        DailyRecord::new("AAA", day(0), 0.0),
        DailyRecord::new("AAA", day(1), 1.0),
    ];

    let desc: Vec<_> = history.sorted_descending().iter().map(|r| r.close).collect();
    let asc: Vec<_> = history.sorted_ascending().iter().map(|r| r.close).collect();
    assert_eq!(desc, vec![2.0, 1.0, 0.0]);
    assert_eq!(asc, vec![0.0, 1.0, 2.0]);
}

#[test]
fn test_foreign_net_is_derived() {
    let record = DailyRecord::new("AAA", day(0), 100.0).with_foreign_flow(300.0, 450.0);
    assert_eq!(record.foreign_net, -150.0);
}
