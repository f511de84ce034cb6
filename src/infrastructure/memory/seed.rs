//! Built-in sample data used when no snapshot files are configured.

use crate::domain::entities::economic_event::{EconomicEvent, EventMetric, SCHEDULED};
use crate::domain::entities::holding::Holding;
use crate::domain::entities::strategy::Strategy;
use crate::domain::values::asset_class::AssetClass;
use crate::domain::values::instrument_type::InstrumentType;
use crate::domain::values::scheduled_time::ScheduledTime;
use crate::domain::values::strategy_status::StrategyStatus;
use chrono::{NaiveDate, TimeZone, Utc};

pub const SAMPLE_DAILY_CHANGE: f64 = 1250.75;

fn holding(symbol: &str, name: &str, instrument_type: InstrumentType, quantity: f64, price: f64, cost: f64) -> Holding {
    Holding {
        symbol: symbol.into(),
        name: name.into(),
        instrument_type,
        quantity,
        current_price: price,
        average_cost: cost,
    }
}

pub fn sample_holdings() -> Vec<Holding> {
    vec![
        holding("AAPL", "Apple Inc.", InstrumentType::Stock, 50.0, 175.25, 165.50),
        holding("MSFT", "Microsoft Corp.", InstrumentType::Stock, 30.0, 378.85, 350.20),
        holding("BTC", "Bitcoin", InstrumentType::Crypto, 0.5, 43250.00, 38000.00),
        holding("ETH", "Ethereum", InstrumentType::Crypto, 5.0, 2280.50, 2450.00),
        holding("SPY", "SPDR S&P 500 ETF", InstrumentType::Etf, 25.0, 478.50, 450.00),
        holding("GLD", "SPDR Gold Shares", InstrumentType::Commodity, 20.0, 189.75, 185.20),
    ]
}

fn sample_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, day).unwrap_or_default()
}

fn at(hour: u32, minute: u32) -> ScheduledTime {
    ScheduledTime::at(hour, minute).unwrap_or(ScheduledTime::Tbd)
}

pub fn sample_events() -> Vec<EconomicEvent> {
    let tue = sample_date(17);
    let wed = sample_date(18);
    vec![
        EconomicEvent::new(tue, at(8, 30), "Empire State Manufacturing Survey", "US", 3, "-6.0", "7.1"),
        EconomicEvent::new(tue, at(10, 0), "Housing Market Index", "US", 2, "46", "42"),
        EconomicEvent::new(tue, at(8, 30), "CPI", "US", 5, "0.3%", "0.4%").with_metrics(vec![
            EventMetric {
                metric: "CPI - M/M".into(),
                prior: Some("0.2%".into()),
                consensus: Some("0.3%".into()),
                consensus_range: Some("0.2% to 0.4%".into()),
                actual: Some("0.4%".into()),
            },
        ]),
        EconomicEvent::new(tue, at(11, 30), "4-Week Bill Auction", "US", 1, "N/A", "Completed"),
        EconomicEvent::new(wed, at(8, 30), "Housing Starts", "US", 4, "1.360M", SCHEDULED),
        EconomicEvent::new(wed, at(14, 0), "FOMC Minutes", "US", 5, "N/A", SCHEDULED),
        EconomicEvent::new(wed, at(8, 30), "Jobless Claims", "US", 4, "215K", SCHEDULED),
        EconomicEvent::new(wed, ScheduledTime::Tbd, "Fed Governor Speaks", "US", 3, "N/A", SCHEDULED),
    ]
}

pub fn sample_strategies() -> Vec<Strategy> {
    let created = Utc.with_ymd_and_hms(2026, 1, 5, 14, 0, 0).single().unwrap_or_else(Utc::now);
    vec![
        Strategy {
            id: "momentum-breakout".into(),
            name: "Momentum Breakout".into(),
            description: "Buy when price breaks the 20-day high on above-average volume".into(),
            asset_class: AssetClass::Equities,
            sharpe_ratio: 1.85,
            total_return_pct: 24.5,
            max_drawdown_pct: -12.3,
            status: StrategyStatus::Active,
            created_at: created,
        },
        Strategy {
            id: "crypto-mean-reversion".into(),
            name: "Crypto Mean Reversion".into(),
            description: "Fade moves beyond two standard deviations of the 50-period mean".into(),
            asset_class: AssetClass::Crypto,
            sharpe_ratio: 2.31,
            total_return_pct: 41.2,
            max_drawdown_pct: -18.7,
            status: StrategyStatus::Active,
            created_at: created,
        },
        Strategy {
            id: "commodity-carry".into(),
            name: "Commodity Carry".into(),
            description: "Long backwardated futures, short contango".into(),
            asset_class: AssetClass::Commodities,
            sharpe_ratio: 0.72,
            total_return_pct: -3.4,
            max_drawdown_pct: -24.9,
            status: StrategyStatus::Paused,
            created_at: created,
        },
    ]
}
