use crate::domain::entities::holding::Holding;
use crate::domain::error::DomainError;
use crate::domain::ports::holding_repository::HoldingRepository;
use crate::domain::values::portfolio::{
    compute_holding_valuation, compute_portfolio_summary_reported, HoldingValuation, Portfolio,
    PortfolioSummary,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingRow {
    #[serde(flatten)]
    pub holding: Holding,
    #[serde(flatten)]
    pub valuation: HoldingValuation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioOverview {
    pub summary: PortfolioSummary,
    pub daily_change: f64,
    pub holdings: Vec<HoldingRow>,
}

pub struct PortfolioUseCase {
    repo: Arc<dyn HoldingRepository>,
}

impl PortfolioUseCase {
    pub fn new(repo: Arc<dyn HoldingRepository>) -> Self {
        Self { repo }
    }

    fn snapshot(&self) -> Result<Portfolio, DomainError> {
        Ok(Portfolio::new(self.repo.list_holdings()?, self.repo.daily_change()?))
    }

    /// Overview with the total value derived from the holdings.
    pub fn overview(&self) -> Result<PortfolioOverview, DomainError> {
        let portfolio = self.snapshot()?;
        let summary = portfolio.summary();
        Ok(build_overview(portfolio, summary))
    }

    /// Overview using an externally reported total value.
    pub fn overview_with_reported_total(&self, reported_total: f64) -> Result<PortfolioOverview, DomainError> {
        if !reported_total.is_finite() {
            return Err(DomainError::InvalidInput(format!(
                "Reported total must be finite, got {reported_total}"
            )));
        }
        let portfolio = self.snapshot()?;
        let summary = compute_portfolio_summary_reported(&portfolio.holdings, reported_total);
        Ok(build_overview(portfolio, summary))
    }
}

fn build_overview(portfolio: Portfolio, summary: PortfolioSummary) -> PortfolioOverview {
    let holdings = portfolio
        .holdings
        .into_iter()
        .map(|holding| HoldingRow {
            valuation: compute_holding_valuation(&holding),
            holding,
        })
        .collect();
    PortfolioOverview {
        summary,
        daily_change: portfolio.daily_change,
        holdings,
    }
}
