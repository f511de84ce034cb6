use crate::domain::entities::strategy::Strategy;
use crate::domain::error::DomainError;

pub trait StrategyRepository: Send + Sync {
    /// Strategies newest first.
    fn list_strategies(&self) -> Result<Vec<Strategy>, DomainError>;
    /// Insert at the head of the list.
    fn prepend(&self, strategy: &Strategy) -> Result<(), DomainError>;
}
