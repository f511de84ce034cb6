//! Economic-event importance.
//!
//! Events carry a closed 1–5 impact scale. The dashboard groups them into
//! three tiers: High = {4, 5}, Medium = {3}, Low = {1, 2}. Anything outside
//! the scale is treated as level 1.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const MIN_IMPORTANCE: u8 = 1;
pub const MAX_IMPORTANCE: u8 = 5;

/// Coarse importance bucket, ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportanceTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for ImportanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportanceTier::Low => write!(f, "low"),
            ImportanceTier::Medium => write!(f, "medium"),
            ImportanceTier::High => write!(f, "high"),
        }
    }
}

impl FromStr for ImportanceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(ImportanceTier::Low),
            "medium" | "med" => Ok(ImportanceTier::Medium),
            "high" => Ok(ImportanceTier::High),
            _ => Err(format!("Unknown importance tier: {s}")),
        }
    }
}

/// Display-only decoration for an importance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportanceLabel {
    /// Level 5, market-moving release.
    Hot,
    /// Level 4.
    Warning,
    /// Level 3.
    Medium,
    /// Level 2.
    Low,
    /// Level 1 or unrecognised.
    Default,
}

impl ImportanceLabel {
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            ImportanceLabel::Hot => Some("🔥"),
            ImportanceLabel::Warning => Some("⚠️"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportanceClass {
    pub tier: ImportanceTier,
    pub label: ImportanceLabel,
}

/// Map a raw 1–5 importance level onto its tier and label.
pub fn classify_importance(importance: u8) -> ImportanceClass {
    let (tier, label) = match importance {
        5 => (ImportanceTier::High, ImportanceLabel::Hot),
        4 => (ImportanceTier::High, ImportanceLabel::Warning),
        3 => (ImportanceTier::Medium, ImportanceLabel::Medium),
        2 => (ImportanceTier::Low, ImportanceLabel::Low),
        _ => (ImportanceTier::Low, ImportanceLabel::Default),
    };
    ImportanceClass { tier, label }
}

/// Clamp an arbitrary raw level onto the 1–5 scale; out-of-range becomes 1.
pub fn normalize_importance(raw: i64) -> u8 {
    if (MIN_IMPORTANCE as i64..=MAX_IMPORTANCE as i64).contains(&raw) {
        raw as u8
    } else {
        MIN_IMPORTANCE
    }
}

/// Importance from the calendar markup's CSS classes. When several classes
/// are present the highest level wins.
pub fn importance_from_css_classes<S: AsRef<str>>(classes: &[S]) -> u8 {
    classes
        .iter()
        .map(|c| match c.as_ref() {
            "djstar" => 5,
            "star" => 4,
            "speech" | "delayed" => 3,
            "bullet" => 2,
            _ => MIN_IMPORTANCE,
        })
        .max()
        .unwrap_or(MIN_IMPORTANCE)
}
