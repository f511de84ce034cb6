//! Qualitative buckets for strategy performance metrics.
//!
//! | metric        | strong  | moderate       | weak   |
//! |---------------|---------|----------------|--------|
//! | Sharpe ratio  | ≥ 2.0   | [1.0, 2.0)     | < 1.0  |
//! | total return %| ≥ 20    | [0, 20)        | < 0    |
//! | max drawdown %| ≥ -10   | [-20, -10)     | < -20  |
//!
//! Drawdowns are non-positive, so "strong" means least negative. Non-finite
//! inputs fall through to weak.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SHARPE_STRONG: f64 = 2.0;
pub const SHARPE_MODERATE: f64 = 1.0;
pub const RETURN_STRONG_PCT: f64 = 20.0;
pub const RETURN_MODERATE_PCT: f64 = 0.0;
pub const DRAWDOWN_STRONG_PCT: f64 = -10.0;
pub const DRAWDOWN_MODERATE_PCT: f64 = -20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceTier {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerformanceTier::Weak => write!(f, "weak"),
            PerformanceTier::Moderate => write!(f, "moderate"),
            PerformanceTier::Strong => write!(f, "strong"),
        }
    }
}

fn bucket(value: f64, strong_at: f64, moderate_at: f64) -> PerformanceTier {
    if value >= strong_at {
        PerformanceTier::Strong
    } else if value >= moderate_at {
        PerformanceTier::Moderate
    } else {
        PerformanceTier::Weak
    }
}

pub fn classify_sharpe(value: f64) -> PerformanceTier {
    bucket(value, SHARPE_STRONG, SHARPE_MODERATE)
}

pub fn classify_return(value_pct: f64) -> PerformanceTier {
    bucket(value_pct, RETURN_STRONG_PCT, RETURN_MODERATE_PCT)
}

pub fn classify_drawdown(value_pct: f64) -> PerformanceTier {
    bucket(value_pct, DRAWDOWN_STRONG_PCT, DRAWDOWN_MODERATE_PCT)
}
