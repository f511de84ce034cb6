use crate::domain::error::DomainError;
use crate::domain::values::asset_class::AssetClass;
use crate::domain::values::strategy_status::StrategyStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-defined trading rule and its backtest metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub asset_class: AssetClass,
    pub sharpe_ratio: f64,
    pub total_return_pct: f64,
    pub max_drawdown_pct: f64,
    pub status: StrategyStatus,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Input for creating a strategy. Only `name` is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStrategy {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub asset_class: Option<AssetClass>,
}

impl NewStrategy {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Strategy {
    /// A fresh, untested strategy: metrics zeroed, awaiting a backtest.
    pub fn new(name: String, description: String, asset_class: AssetClass) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            description,
            asset_class,
            sharpe_ratio: 0.0,
            total_return_pct: 0.0,
            max_drawdown_pct: 0.0,
            status: StrategyStatus::Backtesting,
            created_at: Utc::now(),
        }
    }

    /// Id and name must be non-blank, metrics finite, and the drawdown
    /// non-positive.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidInput("Strategy id is empty".into()));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidInput(format!("{}: strategy name is empty", self.id)));
        }
        for (field, value) in [
            ("sharpeRatio", self.sharpe_ratio),
            ("totalReturnPct", self.total_return_pct),
            ("maxDrawdownPct", self.max_drawdown_pct),
        ] {
            if !value.is_finite() {
                return Err(DomainError::InvalidInput(format!(
                    "{}: {field} must be a finite number, got {value}",
                    self.id
                )));
            }
        }
        if self.max_drawdown_pct > 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "{}: maxDrawdownPct must be zero or negative, got {}",
                self.id, self.max_drawdown_pct
            )));
        }
        Ok(())
    }

    pub fn is_untested(&self) -> bool {
        self.status == StrategyStatus::Backtesting
            && self.sharpe_ratio == 0.0
            && self.total_return_pct == 0.0
            && self.max_drawdown_pct == 0.0
    }
}
