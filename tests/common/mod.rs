//! Shared test helpers.

use chrono::NaiveDate;
use findash::domain::entities::economic_event::EconomicEvent;
use findash::domain::entities::holding::Holding;
use findash::domain::values::instrument_type::InstrumentType;
use findash::domain::values::scheduled_time::ScheduledTime;
use findash::infrastructure::memory::event_repo::MemoryEventRepo;
use findash::infrastructure::memory::holding_repo::MemoryHoldingRepo;
use findash::infrastructure::memory::seed;
use findash::infrastructure::memory::strategy_repo::MemoryStrategyRepo;
use findash::FinDash;
use std::sync::Arc;

/// Dashboard over the built-in sample data.
pub fn setup() -> FinDash {
    setup_with(
        seed::sample_holdings(),
        seed::SAMPLE_DAILY_CHANGE,
        seed::sample_events(),
    )
}

pub fn setup_with(holdings: Vec<Holding>, daily_change: f64, events: Vec<EconomicEvent>) -> FinDash {
    FinDash::with_repositories(
        Arc::new(MemoryHoldingRepo::new(holdings, daily_change)),
        Arc::new(MemoryEventRepo::new(events)),
        Arc::new(MemoryStrategyRepo::new(seed::sample_strategies())),
    )
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_holding(symbol: &str, quantity: f64, price: f64, cost: f64) -> Holding {
    Holding::new(symbol, symbol, InstrumentType::Stock, quantity, price, cost).unwrap()
}

pub fn make_event(day: NaiveDate, time: &str, name: &str, importance: i64, forecast: &str, actual: &str) -> EconomicEvent {
    EconomicEvent::new(
        day,
        time.parse::<ScheduledTime>().unwrap(),
        name,
        "US",
        importance,
        forecast,
        actual,
    )
}
