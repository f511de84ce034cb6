use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Asset class a strategy trades.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    #[default]
    Equities,
    Crypto,
    Commodities,
    Multi,
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetClass::Equities => write!(f, "equities"),
            AssetClass::Crypto => write!(f, "crypto"),
            AssetClass::Commodities => write!(f, "commodities"),
            AssetClass::Multi => write!(f, "multi"),
        }
    }
}

impl FromStr for AssetClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "equities" | "equity" | "stocks" => Ok(AssetClass::Equities),
            "crypto" => Ok(AssetClass::Crypto),
            "commodities" | "commodity" => Ok(AssetClass::Commodities),
            "multi" | "multi-asset" | "multi_asset" => Ok(AssetClass::Multi),
            _ => Err(format!("Unknown asset class: {s}")),
        }
    }
}
