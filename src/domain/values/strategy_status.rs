use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyStatus {
    Active,
    Backtesting,
    Paused,
}

impl fmt::Display for StrategyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyStatus::Active => write!(f, "active"),
            StrategyStatus::Backtesting => write!(f, "backtesting"),
            StrategyStatus::Paused => write!(f, "paused"),
        }
    }
}

impl FromStr for StrategyStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(StrategyStatus::Active),
            "backtesting" => Ok(StrategyStatus::Backtesting),
            "paused" => Ok(StrategyStatus::Paused),
            _ => Err(format!("Unknown strategy status: {s}")),
        }
    }
}
