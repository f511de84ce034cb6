use crate::domain::entities::holding::Holding;
use crate::domain::error::DomainError;
use crate::infrastructure::memory::holding_repo::MemoryHoldingRepo;
use crate::infrastructure::snapshot::read_file;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Either `{"dailyChange": 12.5, "holdings": [...]}` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum HoldingsFile {
    Portfolio {
        #[serde(default, rename = "dailyChange")]
        daily_change: f64,
        holdings: Vec<Holding>,
    },
    Bare(Vec<Holding>),
}

pub fn parse_holdings(json: &str) -> Result<(Vec<Holding>, f64), DomainError> {
    let file: HoldingsFile =
        serde_json::from_str(json).map_err(|e| DomainError::Parse(format!("Invalid holdings snapshot: {e}")))?;
    let (holdings, daily_change) = match file {
        HoldingsFile::Portfolio {
            daily_change,
            holdings,
        } => (holdings, daily_change),
        HoldingsFile::Bare(holdings) => (holdings, 0.0),
    };
    let mut symbols = HashSet::with_capacity(holdings.len());
    for h in &holdings {
        h.validate()?;
        if !symbols.insert(h.symbol.trim()) {
            return Err(DomainError::InvalidInput(format!(
                "Duplicate holding symbol '{}'",
                h.symbol
            )));
        }
    }
    Ok((holdings, daily_change))
}

/// Load holdings from `path`. `daily_change_override` replaces the file's
/// daily change when set.
pub fn load_holdings(path: &Path, daily_change_override: Option<f64>) -> Result<MemoryHoldingRepo, DomainError> {
    let (holdings, daily_change) = parse_holdings(&read_file(path)?)?;
    debug!(path = %path.display(), count = holdings.len(), "loaded holdings snapshot");
    Ok(MemoryHoldingRepo::new(
        holdings,
        daily_change_override.unwrap_or(daily_change),
    ))
}
