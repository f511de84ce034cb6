use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topic of an economic release, inferred from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Inflation,
    Employment,
    Housing,
    Manufacturing,
    Retail,
    Confidence,
    Speech,
    Auction,
    Energy,
    Trade,
    Gdp,
    Leading,
    Inventory,
    Settlement,
    Income,
    Other,
}

/// Evaluated in order; the first category with a matching keyword wins.
const KEYWORDS: &[(EventCategory, &[&str])] = &[
    (EventCategory::Inflation, &["cpi", "inflation", "pce", "price"]),
    (
        EventCategory::Employment,
        &["employment", "jobless", "payroll", "unemployment", "nonfarm"],
    ),
    (
        EventCategory::Housing,
        &["housing", "home", "starts", "permits", "mortgage"],
    ),
    (
        EventCategory::Manufacturing,
        &[
            "manufacturing",
            "industrial",
            "production",
            "factory",
            "empire",
            "philadelphia",
            "ism",
        ],
    ),
    (EventCategory::Retail, &["retail sales"]),
    (EventCategory::Confidence, &["confidence", "sentiment", "survey"]),
    (EventCategory::Speech, &["speaks", "speech", "testimony", "minutes"]),
    (
        EventCategory::Auction,
        &["auction", "bill", "note", "bond", "treasury", "tips"],
    ),
    (
        EventCategory::Energy,
        &["petroleum", "oil", "gas", "energy", "eia", "rig count"],
    ),
    (
        EventCategory::Trade,
        &["trade", "import", "export", "international capital"],
    ),
    (EventCategory::Gdp, &["gdp", "gross domestic"]),
    (EventCategory::Leading, &["leading", "indicators"]),
    (
        EventCategory::Inventory,
        &["inventory", "inventories", "durable goods"],
    ),
    (EventCategory::Settlement, &["settlement"]),
    (EventCategory::Income, &["personal income", "outlays"]),
];

impl EventCategory {
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|(category, _)| *category)
            .unwrap_or(EventCategory::Other)
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventCategory::Inflation => "inflation",
            EventCategory::Employment => "employment",
            EventCategory::Housing => "housing",
            EventCategory::Manufacturing => "manufacturing",
            EventCategory::Retail => "retail",
            EventCategory::Confidence => "confidence",
            EventCategory::Speech => "speech",
            EventCategory::Auction => "auction",
            EventCategory::Energy => "energy",
            EventCategory::Trade => "trade",
            EventCategory::Gdp => "gdp",
            EventCategory::Leading => "leading",
            EventCategory::Inventory => "inventory",
            EventCategory::Settlement => "settlement",
            EventCategory::Income => "income",
            EventCategory::Other => "other",
        };
        write!(f, "{s}")
    }
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inflation" => Ok(EventCategory::Inflation),
            "employment" => Ok(EventCategory::Employment),
            "housing" => Ok(EventCategory::Housing),
            "manufacturing" => Ok(EventCategory::Manufacturing),
            "retail" => Ok(EventCategory::Retail),
            "confidence" => Ok(EventCategory::Confidence),
            "speech" => Ok(EventCategory::Speech),
            "auction" => Ok(EventCategory::Auction),
            "energy" => Ok(EventCategory::Energy),
            "trade" => Ok(EventCategory::Trade),
            "gdp" => Ok(EventCategory::Gdp),
            "leading" => Ok(EventCategory::Leading),
            "inventory" => Ok(EventCategory::Inventory),
            "settlement" => Ok(EventCategory::Settlement),
            "income" => Ok(EventCategory::Income),
            "other" => Ok(EventCategory::Other),
            _ => Err(format!("Unknown event category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(EventCategory::from_name("CPI"), EventCategory::Inflation);
        assert_eq!(
            EventCategory::from_name("Jobless Claims"),
            EventCategory::Employment
        );
        assert_eq!(
            EventCategory::from_name("Housing Starts and Permits"),
            EventCategory::Housing
        );
        assert_eq!(
            EventCategory::from_name("Empire State Manufacturing Survey"),
            EventCategory::Manufacturing
        );
        assert_eq!(EventCategory::from_name("Retail Sales"), EventCategory::Retail);
        assert_eq!(
            EventCategory::from_name("4-Week Bill Auction"),
            EventCategory::Auction
        );
        assert_eq!(EventCategory::from_name("EIA Petroleum Status Report"), EventCategory::Energy);
        assert_eq!(EventCategory::from_name("GDP"), EventCategory::Gdp);
        assert_eq!(EventCategory::from_name("Baker Hughes Rig Count"), EventCategory::Energy);
        assert_eq!(EventCategory::from_name("Presidents' Day"), EventCategory::Other);
    }

    #[test]
    fn test_first_match_wins() {
        // "PCE Price Index" also contains "price"; both are inflation.
        assert_eq!(
            EventCategory::from_name("Personal Income and Outlays (PCE)"),
            EventCategory::Inflation
        );
        // Survey wording lands in confidence before speech/auction.
        assert_eq!(
            EventCategory::from_name("Consumer Sentiment"),
            EventCategory::Confidence
        );
    }

    #[test]
    fn test_round_trip_display() {
        let c: EventCategory = "gdp".parse().unwrap();
        assert_eq!(c.to_string(), "gdp");
        assert!("weather".parse::<EventCategory>().is_err());
    }
}
