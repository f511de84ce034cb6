use crate::domain::entities::holding::Holding;
use crate::domain::error::DomainError;

/// Read access to the caller-owned holdings collection.
pub trait HoldingRepository: Send + Sync {
    fn list_holdings(&self) -> Result<Vec<Holding>, DomainError>;
    /// Externally supplied daily change of the portfolio value.
    fn daily_change(&self) -> Result<f64, DomainError>;
}
