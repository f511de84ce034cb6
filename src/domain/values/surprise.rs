//! Surprise classification for economic releases.
//!
//! Release values are free-form strings ("3.1%", "+0.6%", "225K", "$-70.0B",
//! "N/A", "Scheduled"). Both sides of the comparison are parsed into signed
//! magnitudes; when either side is not numeric the surprise is neutral.
//!
//! [`classify_surprise`] is direction-naive: a higher actual is always
//! positive. For releases where lower is better (unemployment, jobless claims,
//! inflation) use [`Surprise::sentiment`] with the event's [`Polarity`].

use crate::domain::values::event_category::EventCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surprise {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Surprise {
    /// Reading of the surprise once the indicator's direction is taken into
    /// account. Lower-is-better indicators flip positive and negative.
    pub fn sentiment(self, polarity: Polarity) -> Surprise {
        match (polarity, self) {
            (Polarity::LowerIsBetter, Surprise::Positive) => Surprise::Negative,
            (Polarity::LowerIsBetter, Surprise::Negative) => Surprise::Positive,
            (_, s) => s,
        }
    }
}

impl fmt::Display for Surprise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surprise::Positive => write!(f, "positive"),
            Surprise::Negative => write!(f, "negative"),
            Surprise::Neutral => write!(f, "neutral"),
        }
    }
}

impl FromStr for Surprise {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Surprise::Positive),
            "negative" => Ok(Surprise::Negative),
            "neutral" => Ok(Surprise::Neutral),
            _ => Err(format!("Unknown surprise: {s}")),
        }
    }
}

/// Whether a higher reading of an indicator is good news.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

const LOWER_IS_BETTER_NAMES: &[&str] = &["unemployment", "jobless", "claims"];

impl Polarity {
    pub fn for_event(name: &str, category: EventCategory) -> Self {
        let lower = name.to_lowercase();
        if category == EventCategory::Inflation
            || LOWER_IS_BETTER_NAMES.iter().any(|w| lower.contains(w))
        {
            Polarity::LowerIsBetter
        } else {
            Polarity::HigherIsBetter
        }
    }
}

/// Parse a release value into a signed magnitude.
///
/// Accepts an optional sign and `$` in either order, digits with optional
/// thousands separators and decimal point, then an optional unit: `%`, `pp`,
/// `bp`, or a scale suffix `K`/`M`/`B`/`T`. Returns `None` for anything else,
/// including ranges and placeholders such as "N/A".
pub fn parse_release_value(raw: &str) -> Option<f64> {
    let text = raw.replace('\u{a0}', " ");
    let mut rest = text.trim();

    let mut negative = false;
    for _ in 0..2 {
        if let Some(r) = rest.strip_prefix('$') {
            rest = r;
        } else if let Some(r) = rest.strip_prefix('-') {
            negative = !negative;
            rest = r;
        } else if let Some(r) = rest.strip_prefix('+') {
            rest = r;
        }
    }

    let number_len = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
        .unwrap_or(rest.len());
    let (number, unit) = rest.split_at(number_len);
    let number: String = number.chars().filter(|c| *c != ',').collect();
    if !number.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let magnitude: f64 = number.parse().ok()?;

    let scale = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "%" | "pp" | "bp" | "bps" => 1.0,
        "k" => 1e3,
        "m" => 1e6,
        "b" => 1e9,
        "t" => 1e12,
        _ => return None,
    };

    let value = magnitude * scale;
    Some(if negative { -value } else { value })
}

/// Direction of `actual` relative to `forecast`; neutral when either side is
/// not numeric.
pub fn classify_surprise(actual: &str, forecast: &str) -> Surprise {
    match (parse_release_value(actual), parse_release_value(forecast)) {
        (Some(a), Some(f)) => match a.partial_cmp(&f) {
            Some(std::cmp::Ordering::Greater) => Surprise::Positive,
            Some(std::cmp::Ordering::Less) => Surprise::Negative,
            _ => Surprise::Neutral,
        },
        _ => Surprise::Neutral,
    }
}
