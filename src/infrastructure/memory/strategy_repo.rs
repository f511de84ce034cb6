use crate::domain::entities::strategy::Strategy;
use crate::domain::error::DomainError;
use crate::domain::ports::strategy_repository::StrategyRepository;
use std::sync::Mutex;

pub struct MemoryStrategyRepo {
    strategies: Mutex<Vec<Strategy>>,
}

impl MemoryStrategyRepo {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self {
            strategies: Mutex::new(strategies),
        }
    }
}

impl StrategyRepository for MemoryStrategyRepo {
    fn list_strategies(&self) -> Result<Vec<Strategy>, DomainError> {
        let strategies = self
            .strategies
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        Ok(strategies.clone())
    }

    fn prepend(&self, strategy: &Strategy) -> Result<(), DomainError> {
        let mut strategies = self
            .strategies
            .lock()
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        strategies.insert(0, strategy.clone());
        Ok(())
    }
}
