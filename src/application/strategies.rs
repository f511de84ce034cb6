use crate::domain::entities::strategy::{NewStrategy, Strategy};
use crate::domain::error::DomainError;
use crate::domain::ports::strategy_repository::StrategyRepository;
use crate::domain::values::performance_tier::{
    classify_drawdown, classify_return, classify_sharpe, PerformanceTier,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// The three performance tiers of a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyScorecard {
    pub sharpe: PerformanceTier,
    pub total_return: PerformanceTier,
    pub max_drawdown: PerformanceTier,
}

impl StrategyScorecard {
    pub fn for_strategy(strategy: &Strategy) -> Self {
        Self {
            sharpe: classify_sharpe(strategy.sharpe_ratio),
            total_return: classify_return(strategy.total_return_pct),
            max_drawdown: classify_drawdown(strategy.max_drawdown_pct),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StrategyRow {
    #[serde(flatten)]
    pub strategy: Strategy,
    pub scorecard: StrategyScorecard,
}

/// Build a new untested strategy from user input, or `None` when the name is
/// blank. Description defaults to empty and asset class to equities.
pub fn build_strategy(input: NewStrategy) -> Option<Strategy> {
    let name = input.name.trim();
    if name.is_empty() {
        return None;
    }
    Some(Strategy::new(
        name.to_string(),
        input.description.unwrap_or_default(),
        input.asset_class.unwrap_or_default(),
    ))
}

/// Prepend a new strategy to `strategies`. Blank names leave the list
/// untouched and return `None`.
pub fn create_strategy(strategies: &mut Vec<Strategy>, input: NewStrategy) -> Option<&Strategy> {
    let strategy = build_strategy(input)?;
    strategies.insert(0, strategy);
    strategies.first()
}

pub struct StrategyUseCase {
    repo: Arc<dyn StrategyRepository>,
}

impl StrategyUseCase {
    pub fn new(repo: Arc<dyn StrategyRepository>) -> Self {
        Self { repo }
    }

    pub fn list(&self) -> Result<Vec<StrategyRow>, DomainError> {
        Ok(self
            .repo
            .list_strategies()?
            .into_iter()
            .map(|strategy| StrategyRow {
                scorecard: StrategyScorecard::for_strategy(&strategy),
                strategy,
            })
            .collect())
    }

    /// Returns `Ok(None)` when the input is rejected; nothing is stored.
    pub fn create(&self, input: NewStrategy) -> Result<Option<Strategy>, DomainError> {
        match build_strategy(input) {
            Some(strategy) => {
                self.repo.prepend(&strategy)?;
                debug!(id = %strategy.id, name = %strategy.name, "strategy created");
                Ok(Some(strategy))
            }
            None => {
                warn!("rejected strategy with blank name");
                Ok(None)
            }
        }
    }
}
