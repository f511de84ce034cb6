pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::calendar::{CalendarDay, CalendarStats, CalendarUseCase};
use crate::application::portfolio::{PortfolioOverview, PortfolioUseCase};
use crate::application::strategies::{StrategyRow, StrategyUseCase};
use crate::domain::entities::strategy::{NewStrategy, Strategy};
use crate::domain::error::DomainError;
use crate::domain::ports::event_repository::EventRepository;
use crate::domain::ports::holding_repository::HoldingRepository;
use crate::domain::ports::strategy_repository::StrategyRepository;
use crate::domain::values::importance::ImportanceTier;
use crate::infrastructure::memory::event_repo::MemoryEventRepo;
use crate::infrastructure::memory::holding_repo::MemoryHoldingRepo;
use crate::infrastructure::memory::seed;
use crate::infrastructure::memory::strategy_repo::MemoryStrategyRepo;
use crate::infrastructure::snapshot::calendar::load_calendar;
use crate::infrastructure::snapshot::holdings::load_holdings;
use crate::infrastructure::snapshot::strategies::load_strategies;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

pub struct FinDash {
    portfolio_uc: PortfolioUseCase,
    calendar_uc: CalendarUseCase,
    strategy_uc: StrategyUseCase,
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty()).map(PathBuf::from)
}

/// Parse the `FINDASH_DAILY_CHANGE` value. NaN and infinities are rejected
/// along with non-numbers.
pub fn parse_daily_change(raw: &str) -> Result<f64, DomainError> {
    let value = raw.trim().parse::<f64>().map_err(|e| {
        DomainError::InvalidInput(format!("FINDASH_DAILY_CHANGE must be a number, got '{raw}': {e}"))
    })?;
    if !value.is_finite() {
        return Err(DomainError::InvalidInput(format!(
            "FINDASH_DAILY_CHANGE must be finite, got '{raw}'"
        )));
    }
    Ok(value)
}

impl FinDash {
    /// Build from environment configuration. Any source without a configured
    /// snapshot file falls back to the built-in sample data.
    pub fn new() -> Result<Self, DomainError> {
        let daily_change = match std::env::var("FINDASH_DAILY_CHANGE") {
            Ok(raw) => Some(parse_daily_change(&raw)?),
            Err(_) => None,
        };

        let holdings: Arc<dyn HoldingRepository> = match env_path("FINDASH_HOLDINGS_FILE") {
            Some(path) => Arc::new(load_holdings(&path, daily_change)?),
            None => {
                debug!("no holdings file configured, using sample holdings");
                Arc::new(MemoryHoldingRepo::new(
                    seed::sample_holdings(),
                    daily_change.unwrap_or(seed::SAMPLE_DAILY_CHANGE),
                ))
            }
        };

        let events: Arc<dyn EventRepository> = match env_path("FINDASH_CALENDAR_FILE") {
            Some(path) => Arc::new(load_calendar(&path)?),
            None => {
                debug!("no calendar file configured, using sample events");
                Arc::new(MemoryEventRepo::new(seed::sample_events()))
            }
        };

        let strategies: Arc<dyn StrategyRepository> = match env_path("FINDASH_STRATEGIES_FILE") {
            Some(path) => Arc::new(load_strategies(&path)?),
            None => {
                debug!("no strategies file configured, using sample strategies");
                Arc::new(MemoryStrategyRepo::new(seed::sample_strategies()))
            }
        };

        Ok(Self::with_repositories(holdings, events, strategies))
    }

    pub fn with_repositories(
        holdings: Arc<dyn HoldingRepository>,
        events: Arc<dyn EventRepository>,
        strategies: Arc<dyn StrategyRepository>,
    ) -> Self {
        Self {
            portfolio_uc: PortfolioUseCase::new(holdings),
            calendar_uc: CalendarUseCase::new(events),
            strategy_uc: StrategyUseCase::new(strategies),
        }
    }

    pub fn portfolio(&self) -> Result<PortfolioOverview, DomainError> {
        self.portfolio_uc.overview()
    }

    pub fn portfolio_with_reported_total(&self, reported_total: f64) -> Result<PortfolioOverview, DomainError> {
        self.portfolio_uc.overview_with_reported_total(reported_total)
    }

    pub fn calendar_day(&self, date: NaiveDate, min_tier: Option<ImportanceTier>) -> Result<CalendarDay, DomainError> {
        self.calendar_uc.day(date, min_tier)
    }

    pub fn calendar_dates(&self) -> Result<Vec<NaiveDate>, DomainError> {
        self.calendar_uc.dates()
    }

    pub fn calendar_stats(&self) -> Result<CalendarStats, DomainError> {
        self.calendar_uc.stats()
    }

    pub fn strategies(&self) -> Result<Vec<StrategyRow>, DomainError> {
        self.strategy_uc.list()
    }

    pub fn create_strategy(&self, input: NewStrategy) -> Result<Option<Strategy>, DomainError> {
        self.strategy_uc.create(input)
    }
}
