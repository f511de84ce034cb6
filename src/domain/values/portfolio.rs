//! Portfolio valuation.
//!
//! Per-holding and aggregate market value, cost basis and gain/loss. All
//! functions are pure over a snapshot of holdings.
//!
//! Percentages are `Option<f64>`: `None` means there is no prior cost to
//! measure against (zero cost basis), so the percentage is not meaningful.

use crate::domain::entities::holding::Holding;
use serde::Serialize;
use tracing::warn;

/// Reported totals within this distance of the derived total are treated as
/// consistent.
const TOTAL_DRIFT_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub current_value: f64,
    pub cost_basis: f64,
    pub gain_loss: f64,
    pub gain_loss_pct: Option<f64>,
}

/// Where the portfolio's total market value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalSource {
    /// Sum of the holdings' current values.
    Derived,
    /// Scalar supplied by an external collaborator.
    Reported,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_gain_loss: f64,
    pub total_gain_loss_pct: Option<f64>,
    pub holding_count: usize,
    pub total_source: TotalSource,
}

/// Holdings plus the externally supplied daily change. Owned by the caller;
/// the engine only reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub holdings: Vec<Holding>,
    pub daily_change: f64,
}

/// `numerator / denominator × 100`, or `None` when the denominator is zero or
/// the result is not finite.
fn percent_of(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    let pct = numerator / denominator * 100.0;
    pct.is_finite().then_some(pct)
}

pub fn compute_holding_valuation(holding: &Holding) -> HoldingValuation {
    let current_value = holding.quantity * holding.current_price;
    let cost_basis = holding.quantity * holding.average_cost;
    let gain_loss = current_value - cost_basis;
    HoldingValuation {
        current_value,
        cost_basis,
        gain_loss,
        gain_loss_pct: percent_of(gain_loss, cost_basis),
    }
}

fn summarize(holdings: &[Holding], total_value: f64, total_source: TotalSource) -> PortfolioSummary {
    let total_gain_loss: f64 = holdings
        .iter()
        .map(|h| compute_holding_valuation(h).gain_loss)
        .fold(0.0, |acc, v| acc + v);
    PortfolioSummary {
        total_value,
        total_gain_loss,
        total_gain_loss_pct: percent_of(total_gain_loss, total_value - total_gain_loss),
        holding_count: holdings.len(),
        total_source,
    }
}

/// Summary with `total_value` derived as the sum of current values.
pub fn compute_portfolio_summary(holdings: &[Holding]) -> PortfolioSummary {
    let total_value: f64 = holdings
        .iter()
        .map(|h| compute_holding_valuation(h).current_value)
        .fold(0.0, |acc, v| acc + v);
    summarize(holdings, total_value, TotalSource::Derived)
}

/// Summary using an externally reported total value. Logs a warning when the
/// reported figure disagrees with the holdings.
pub fn compute_portfolio_summary_reported(holdings: &[Holding], reported_total: f64) -> PortfolioSummary {
    let derived = compute_portfolio_summary(holdings).total_value;
    if (reported_total - derived).abs() > TOTAL_DRIFT_TOLERANCE {
        warn!(
            reported = reported_total,
            derived,
            "reported portfolio total disagrees with holdings"
        );
    }
    summarize(holdings, reported_total, TotalSource::Reported)
}

impl Portfolio {
    pub fn new(holdings: Vec<Holding>, daily_change: f64) -> Self {
        Self {
            holdings,
            daily_change,
        }
    }

    pub fn summary(&self) -> PortfolioSummary {
        compute_portfolio_summary(&self.holdings)
    }
}
