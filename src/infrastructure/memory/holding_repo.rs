use crate::domain::entities::holding::Holding;
use crate::domain::error::DomainError;
use crate::domain::ports::holding_repository::HoldingRepository;

pub struct MemoryHoldingRepo {
    holdings: Vec<Holding>,
    daily_change: f64,
}

impl MemoryHoldingRepo {
    pub fn new(holdings: Vec<Holding>, daily_change: f64) -> Self {
        Self {
            holdings,
            daily_change,
        }
    }
}

impl HoldingRepository for MemoryHoldingRepo {
    fn list_holdings(&self) -> Result<Vec<Holding>, DomainError> {
        Ok(self.holdings.clone())
    }

    fn daily_change(&self) -> Result<f64, DomainError> {
        Ok(self.daily_change)
    }
}
