//! Economic calendar snapshot, as written by the calendar scraper:
//!
//! ```json
//! {
//!   "scraped_at": "2026-02-16T07:00:00",
//!   "events": [
//!     {"name": "CPI", "time": "8:30 AM ET", "date": "2026-02-17", "importance": 5,
//!      "metrics": [{"metric": "CPI - M/M", "prior": "0.2%", "consensus": "0.3%", "actual": "0.4%"}],
//!      "has_actual": true}
//!   ]
//! }
//! ```
//!
//! A bare array of events is accepted too. Records with an unparseable date
//! are skipped with a warning; duplicates by id keep the first occurrence.

use crate::domain::entities::economic_event::{
    EconomicEvent, EventMetric, COMPLETED, NOT_AVAILABLE, SCHEDULED,
};
use crate::domain::error::DomainError;
use crate::domain::values::importance::importance_from_css_classes;
use crate::domain::values::scheduled_time::{split_event_text, ScheduledTime};
use crate::infrastructure::memory::event_repo::MemoryEventRepo;
use crate::infrastructure::snapshot::read_file;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

const DEFAULT_COUNTRY: &str = "US";

#[derive(Deserialize)]
#[serde(untagged)]
enum CalendarFile {
    Wrapped {
        #[serde(default)]
        scraped_at: Option<String>,
        #[serde(default)]
        events: Vec<SnapshotEvent>,
    },
    Bare(Vec<SnapshotEvent>),
}

#[derive(Deserialize)]
struct SnapshotEvent {
    #[serde(default, alias = "event_id")]
    id: Option<String>,
    name: String,
    #[serde(default)]
    time: String,
    date: String,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    importance: Option<i64>,
    /// Raw CSS classes of the listing, used when `importance` is absent.
    #[serde(default)]
    classes: Vec<String>,
    #[serde(default)]
    forecast: Option<String>,
    #[serde(default)]
    actual: Option<String>,
    #[serde(default)]
    metrics: Vec<SnapshotMetric>,
    #[serde(default)]
    has_actual: bool,
    #[serde(default)]
    event_url: Option<String>,
}

#[derive(Deserialize)]
struct SnapshotMetric {
    #[serde(default, alias = "metric_name")]
    metric: String,
    #[serde(default)]
    prior: Option<String>,
    #[serde(default)]
    consensus: Option<String>,
    #[serde(default)]
    consensus_range: Option<String>,
    #[serde(default)]
    actual: Option<String>,
}

/// The scraper writes missing values as empty strings.
fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.replace('\u{a0}', " ").trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<SnapshotMetric> for EventMetric {
    fn from(m: SnapshotMetric) -> Self {
        EventMetric {
            metric: m.metric,
            prior: non_empty(m.prior),
            consensus: non_empty(m.consensus),
            consensus_range: non_empty(m.consensus_range),
            actual: non_empty(m.actual),
        }
    }
}

impl SnapshotEvent {
    fn into_event(self) -> Result<EconomicEvent, DomainError> {
        let release_date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|e| DomainError::Parse(format!("Invalid event date '{}': {e}", self.date)))?;
        let metrics: Vec<EventMetric> = self.metrics.into_iter().map(EventMetric::from).collect();
        let primary = metrics.first();

        let forecast = non_empty(self.forecast)
            .or_else(|| primary.and_then(|m| m.consensus.clone()))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let actual = non_empty(self.actual)
            .or_else(|| primary.and_then(|m| m.actual.clone()))
            .unwrap_or_else(|| {
                if self.has_actual {
                    COMPLETED.to_string()
                } else {
                    SCHEDULED.to_string()
                }
            });
        let importance = self
            .importance
            .unwrap_or_else(|| i64::from(importance_from_css_classes(self.classes.as_slice())));
        let country = non_empty(self.country).unwrap_or_else(|| DEFAULT_COUNTRY.to_string());

        // Older snapshots keep the time glued to the listing text.
        let (name, scheduled_time) = if self.time.trim().is_empty() {
            split_event_text(&self.name)
        } else {
            (
                self.name.trim().to_string(),
                self.time.parse::<ScheduledTime>().unwrap_or(ScheduledTime::Tbd),
            )
        };

        let mut event = EconomicEvent::new(
            release_date,
            scheduled_time,
            name,
            country,
            importance,
            forecast,
            actual,
        )
        .with_metrics(metrics);
        if let Some(id) = non_empty(self.id) {
            event = event.with_id(id);
        }
        if let Some(url) = non_empty(self.event_url) {
            event = event.with_event_url(url);
        }
        Ok(event)
    }
}

pub fn parse_calendar(json: &str) -> Result<Vec<EconomicEvent>, DomainError> {
    let file: CalendarFile =
        serde_json::from_str(json).map_err(|e| DomainError::Parse(format!("Invalid calendar snapshot: {e}")))?;
    let records = match file {
        CalendarFile::Wrapped { scraped_at, events } => {
            debug!(scraped_at = scraped_at.as_deref().unwrap_or("unknown"), "calendar snapshot");
            events
        }
        CalendarFile::Bare(events) => events,
    };

    let mut events = Vec::with_capacity(records.len());
    for record in records {
        let name = record.name.clone();
        match record.into_event() {
            Ok(event) => events.push(event),
            Err(e) => warn!(event = %name, error = %e, "skipping calendar record"),
        }
    }
    Ok(events)
}

pub fn load_calendar(path: &Path) -> Result<MemoryEventRepo, DomainError> {
    let events = parse_calendar(&read_file(path)?)?;
    debug!(path = %path.display(), count = events.len(), "loaded calendar snapshot");
    Ok(MemoryEventRepo::new(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::surprise::Surprise;

    const SNAPSHOT: &str = r#"{
        "scraped_at": "2026-02-16T07:00:00",
        "total_events": 4,
        "events": [
            {"name": "CPI", "time": "8:30 AM ET", "date": "2026-02-17", "importance": 5,
             "category": "inflation", "fid": "123", "event_url": "https://us.econoday.com/event?fid=123",
             "metrics": [{"metric": "CPI - M/M", "prior": "0.2%", "consensus": "0.3%",
                          "consensus_range": "0.2% to 0.4%", "actual": "0.4%"}],
             "has_actual": true},
            {"name": "Bond Market Settlement", "time": "All Day", "date": "2026-02-17",
             "classes": ["econoevents", "bullet"]},
            {"name": "Retail Sales", "time": "8:30 AM ET", "date": "2026-02-18", "importance": 4,
             "metrics": [{"metric_name": "Retail Sales - M/M", "prior": "0.6%", "consensus": "0.4%", "actual": ""}]},
            {"name": "Broken", "time": "", "date": "Feb 17"}
        ]
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let events = parse_calendar(SNAPSHOT).unwrap();
        assert_eq!(events.len(), 3, "record with bad date is skipped");

        let cpi = &events[0];
        assert_eq!(cpi.id, "econoday_2026-02-17_cpi");
        assert_eq!(cpi.forecast, "0.3%");
        assert_eq!(cpi.actual, "0.4%");
        assert_eq!(cpi.surprise, Surprise::Positive);
        assert_eq!(cpi.sentiment(), Surprise::Negative);
        assert_eq!(cpi.metrics[0].consensus_range.as_deref(), Some("0.2% to 0.4%"));
        assert!(cpi.event_url.is_some());

        let settlement = &events[1];
        assert_eq!(settlement.importance, 2);
        assert_eq!(settlement.scheduled_time, ScheduledTime::AllDay);
        assert_eq!(settlement.forecast, NOT_AVAILABLE);
        assert_eq!(settlement.actual, SCHEDULED);
        assert_eq!(settlement.country, "US");

        let retail = &events[2];
        assert_eq!(retail.forecast, "0.4%");
        assert_eq!(retail.actual, SCHEDULED);
        assert_eq!(retail.metrics[0].actual, None);
        assert_eq!(retail.surprise, Surprise::Neutral);
    }

    #[test]
    fn test_has_actual_without_value_is_completed() {
        let json = r#"[{"name": "Treasury Statement", "time": "2:00 PM ET", "date": "2026-02-18", "has_actual": true}]"#;
        let events = parse_calendar(json).unwrap();
        assert_eq!(events[0].actual, COMPLETED);
        assert_eq!(events[0].surprise, Surprise::Neutral);
    }

    #[test]
    fn test_stored_surprise_is_ignored() {
        let json = r#"[{"name": "Retail Sales", "time": "8:30 AM ET", "date": "2026-02-17",
                        "forecast": "0.4%", "actual": "0.6%", "surprise": "negative"}]"#;
        let events = parse_calendar(json).unwrap();
        assert_eq!(events[0].surprise, Surprise::Positive);
    }

    #[test]
    fn test_explicit_id_kept() {
        let json = r#"[{"event_id": "custom-1", "name": "GDP", "date": "2026-02-26"}]"#;
        let events = parse_calendar(json).unwrap();
        assert_eq!(events[0].id, "custom-1");
        assert_eq!(events[0].scheduled_time, ScheduledTime::Tbd);
    }

    #[test]
    fn test_time_split_from_listing_text() {
        let json = r#"[{"name": "Retail Sales8:30 AM ET", "date": "2026-02-17", "importance": 4}]"#;
        let events = parse_calendar(json).unwrap();
        assert_eq!(events[0].name, "Retail Sales");
        assert_eq!(events[0].scheduled_time, ScheduledTime::at(8, 30).unwrap());
        assert_eq!(events[0].id, "econoday_2026-02-17_retail_sales");
    }
}
