mod common;

use common::date;
use findash::domain::error::DomainError;
use findash::domain::ports::holding_repository::HoldingRepository;
use findash::domain::values::surprise::Surprise;
use findash::infrastructure::snapshot::calendar::load_calendar;
use findash::infrastructure::snapshot::holdings::load_holdings;
use findash::infrastructure::snapshot::strategies::load_strategies;
use findash::FinDash;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const HOLDINGS: &str = r#"{"dailyChange": 310.5, "holdings": [
    {"symbol":"AAPL","name":"Apple Inc.","type":"stock","quantity":50,"currentPrice":175.25,"averageCost":165.5},
    {"symbol":"BTC","name":"Bitcoin","type":"crypto","quantity":0.5,"currentPrice":43250,"averageCost":38000}
]}"#;

const CALENDAR: &str = r#"{
    "scraped_at": "2026-02-16T07:00:00",
    "events": [
        {"name": "Retail Sales", "time": "8:30 AM ET", "date": "2026-02-17", "importance": 4,
         "metrics": [{"metric": "Retail Sales - M/M", "prior": "0.6%", "consensus": "+0.4%", "actual": "+0.6%"}]},
        {"name": "Retail Sales", "time": "8:30 AM ET", "date": "2026-02-17", "importance": 4},
        {"name": "Unemployment Rate", "time": "8:30 AM ET", "date": "2026-02-18", "importance": 5,
         "forecast": "4.1%", "actual": "4.3%"},
        {"name": "Fed Chair Speaks", "time": "Time TBD", "date": "2026-02-18", "classes": ["econoevents", "speech"]}
    ]
}"#;

const STRATEGIES: &str = r#"[
    {"id": "s1", "name": "Pairs", "assetClass": "multi", "sharpeRatio": 2.4,
     "totalReturnPct": 31.0, "maxDrawdownPct": -8.5, "status": "active"}
]"#;

fn dash_from_files() -> FinDash {
    let holdings = write_temp(HOLDINGS);
    let calendar = write_temp(CALENDAR);
    let strategies = write_temp(STRATEGIES);
    FinDash::with_repositories(
        Arc::new(load_holdings(holdings.path(), None).unwrap()),
        Arc::new(load_calendar(calendar.path()).unwrap()),
        Arc::new(load_strategies(strategies.path()).unwrap()),
    )
}

#[test]
fn test_holdings_snapshot() {
    let dash = dash_from_files();
    let overview = dash.portfolio().unwrap();
    assert_eq!(overview.daily_change, 310.5);
    assert_eq!(overview.holdings.len(), 2);
    assert_eq!(overview.summary.total_value, 8762.5 + 21625.0);
    assert_eq!(overview.summary.total_gain_loss, 487.5 + 2625.0);
}

#[test]
fn test_daily_change_override() {
    let file = write_temp(HOLDINGS);
    let repo = load_holdings(file.path(), Some(-12.0)).unwrap();
    assert_eq!(repo.daily_change().unwrap(), -12.0);
}

#[test]
fn test_calendar_snapshot_dedup_and_surprise() {
    let dash = dash_from_files();

    let tue = dash.calendar_day(date(2026, 2, 17), None).unwrap();
    assert_eq!(tue.events.len(), 1, "duplicate id is dropped");
    let retail = &tue.events[0];
    assert_eq!(retail.event.forecast, "+0.4%");
    assert_eq!(retail.event.actual, "+0.6%");
    assert_eq!(retail.event.surprise, Surprise::Positive);
    assert_eq!(retail.sentiment, Surprise::Positive);

    let wed = dash.calendar_day(date(2026, 2, 18), None).unwrap();
    let names: Vec<&str> = wed.events.iter().map(|r| r.event.name.as_str()).collect();
    assert_eq!(names, vec!["Unemployment Rate", "Fed Chair Speaks"]);
    assert_eq!(wed.events[0].event.surprise, Surprise::Positive);
    assert_eq!(wed.events[0].sentiment, Surprise::Negative);
    assert_eq!(wed.events[1].event.importance, 3);
}

#[test]
fn test_strategies_snapshot() {
    let dash = dash_from_files();
    let rows = dash.strategies().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].strategy.id, "s1");
    assert_eq!(rows[0].strategy.description, "");
}

#[test]
fn test_missing_file_is_storage_error() {
    let err = load_calendar(std::path::Path::new("/nonexistent/findash/latest.json"));
    assert!(matches!(err, Err(DomainError::Storage(_))));
}

#[test]
fn test_malformed_strategies_is_parse_error() {
    let file = write_temp(r#"[{"name": "missing fields"}]"#);
    assert!(matches!(load_strategies(file.path()), Err(DomainError::Parse(_))));
}

#[test]
fn test_positive_drawdown_strategy_rejected() {
    let file = write_temp(
        r#"[{"id": "s", "name": "Leveraged", "sharpeRatio": 1.1, "totalReturnPct": 15.0,
            "maxDrawdownPct": 35.0, "status": "active"}]"#,
    );
    assert!(matches!(load_strategies(file.path()), Err(DomainError::InvalidInput(_))));
}

#[test]
fn test_duplicate_strategy_id_rejected() {
    let file = write_temp(
        r#"[
            {"id": "s", "name": "Pairs", "sharpeRatio": 2.4, "totalReturnPct": 31.0,
             "maxDrawdownPct": -8.5, "status": "active"},
            {"id": "s", "name": "Carry", "sharpeRatio": 0.7, "totalReturnPct": -3.4,
             "maxDrawdownPct": -24.9, "status": "paused"}
        ]"#,
    );
    match load_strategies(file.path()) {
        Err(DomainError::InvalidInput(msg)) => assert!(msg.contains("'s'"), "got {msg}"),
        Err(e) => panic!("expected duplicate id error, got {e}"),
        Ok(_) => panic!("duplicate ids were accepted"),
    }
}

#[test]
fn test_blank_strategy_name_rejected() {
    let file = write_temp(
        r#"[{"id": "s1", "name": " ", "sharpeRatio": 0, "totalReturnPct": 0,
            "maxDrawdownPct": 0, "status": "backtesting"}]"#,
    );
    assert!(matches!(load_strategies(file.path()), Err(DomainError::InvalidInput(_))));
}
