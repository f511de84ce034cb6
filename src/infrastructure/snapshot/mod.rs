//! Read-only JSON snapshot files standing in for the ingestion, market-data
//! and strategy sources. Each loader returns an in-memory repository.

pub mod calendar;
pub mod holdings;
pub mod strategies;

use crate::domain::error::DomainError;
use std::path::Path;

pub(crate) fn read_file(path: &Path) -> Result<String, DomainError> {
    std::fs::read_to_string(path)
        .map_err(|e| DomainError::Storage(format!("Failed to read {}: {e}", path.display())))
}
