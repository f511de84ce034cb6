use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentType {
    Stock,
    Crypto,
    Etf,
    Commodity,
}

impl fmt::Display for InstrumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstrumentType::Stock => write!(f, "stock"),
            InstrumentType::Crypto => write!(f, "crypto"),
            InstrumentType::Etf => write!(f, "etf"),
            InstrumentType::Commodity => write!(f, "commodity"),
        }
    }
}

impl FromStr for InstrumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stock" | "equity" => Ok(InstrumentType::Stock),
            "crypto" => Ok(InstrumentType::Crypto),
            "etf" => Ok(InstrumentType::Etf),
            "commodity" => Ok(InstrumentType::Commodity),
            _ => Err(format!("Unknown instrument type: {s}")),
        }
    }
}
