use crate::domain::error::DomainError;
use crate::domain::values::instrument_type::InstrumentType;
use serde::{Deserialize, Serialize};

/// A position in the portfolio. Prices are quoted in the reporting currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    #[serde(rename = "type", alias = "instrumentType")]
    pub instrument_type: InstrumentType,
    pub quantity: f64,
    pub current_price: f64,
    pub average_cost: f64,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        instrument_type: InstrumentType,
        quantity: f64,
        current_price: f64,
        average_cost: f64,
    ) -> Result<Self, DomainError> {
        let holding = Self {
            symbol: symbol.into(),
            name: name.into(),
            instrument_type,
            quantity,
            current_price,
            average_cost,
        };
        holding.validate()?;
        Ok(holding)
    }

    /// Quantity and both prices must be finite and non-negative; the symbol
    /// must be non-empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.symbol.trim().is_empty() {
            return Err(DomainError::InvalidInput("Holding symbol is empty".into()));
        }
        for (field, value) in [
            ("quantity", self.quantity),
            ("currentPrice", self.current_price),
            ("averageCost", self.average_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DomainError::InvalidInput(format!(
                    "{}: {field} must be a non-negative number, got {value}",
                    self.symbol
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert!(Holding::new("AAPL", "Apple Inc.", InstrumentType::Stock, 50.0, 175.25, 165.5).is_ok());
        assert!(Holding::new("AAPL", "Apple Inc.", InstrumentType::Stock, -1.0, 175.25, 165.5).is_err());
        assert!(Holding::new("AAPL", "Apple Inc.", InstrumentType::Stock, 1.0, f64::NAN, 165.5).is_err());
        assert!(Holding::new("  ", "Blank", InstrumentType::Stock, 1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_zero_quantity_allowed() {
        let h = Holding::new("GLD", "SPDR Gold", InstrumentType::Commodity, 0.0, 190.0, 0.0).unwrap();
        assert_eq!(h.quantity, 0.0);
    }

    #[test]
    fn test_deserialize_dashboard_shape() {
        let json = r#"{"symbol":"BTC","name":"Bitcoin","type":"crypto","quantity":0.5,"currentPrice":43250.0,"averageCost":38000.0}"#;
        let h: Holding = serde_json::from_str(json).unwrap();
        assert_eq!(h.instrument_type, InstrumentType::Crypto);
        assert_eq!(h.current_price, 43250.0);
    }
}
