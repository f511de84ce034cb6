use crate::domain::entities::strategy::Strategy;
use crate::domain::error::DomainError;
use crate::infrastructure::memory::strategy_repo::MemoryStrategyRepo;
use crate::infrastructure::snapshot::read_file;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Parse a JSON array of strategies. Every record is validated and ids must
/// be unique.
pub fn parse_strategies(json: &str) -> Result<Vec<Strategy>, DomainError> {
    let strategies: Vec<Strategy> =
        serde_json::from_str(json).map_err(|e| DomainError::Parse(format!("Invalid strategies snapshot: {e}")))?;
    let mut ids = HashSet::with_capacity(strategies.len());
    for s in &strategies {
        s.validate()?;
        if !ids.insert(s.id.as_str()) {
            return Err(DomainError::InvalidInput(format!("Duplicate strategy id '{}'", s.id)));
        }
    }
    Ok(strategies)
}

/// Seed the strategy list from a JSON array. Strategies created afterwards
/// live only in memory.
pub fn load_strategies(path: &Path) -> Result<MemoryStrategyRepo, DomainError> {
    let strategies = parse_strategies(&read_file(path)?)?;
    debug!(path = %path.display(), count = strategies.len(), "loaded strategies snapshot");
    Ok(MemoryStrategyRepo::new(strategies))
}
