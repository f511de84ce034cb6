use crate::domain::values::event_category::EventCategory;
use crate::domain::values::importance::{classify_importance, normalize_importance, ImportanceClass};
use crate::domain::values::scheduled_time::ScheduledTime;
use crate::domain::values::surprise::{classify_surprise, Polarity, Surprise};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const EVENT_ID_PREFIX: &str = "econoday";
const EVENT_ID_SLUG_LEN: usize = 50;

pub const NOT_AVAILABLE: &str = "N/A";
pub const SCHEDULED: &str = "Scheduled";
pub const COMPLETED: &str = "Completed";

/// One row of a release's detail table (e.g. "CPI - M/M").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventMetric {
    pub metric: String,
    pub prior: Option<String>,
    pub consensus: Option<String>,
    pub consensus_range: Option<String>,
    pub actual: Option<String>,
}

/// A scheduled macroeconomic release.
///
/// `surprise` is always derived from `actual` vs `forecast`; construct through
/// [`EconomicEvent::new`] (or call [`EconomicEvent::refresh_surprise`] after
/// editing either value) to keep it consistent. Events are serialized for
/// display only; snapshots are read through their own record type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EconomicEvent {
    pub id: String,
    pub scheduled_time: ScheduledTime,
    pub release_date: NaiveDate,
    pub name: String,
    pub country: String,
    pub importance: u8,
    pub category: EventCategory,
    pub forecast: String,
    pub actual: String,
    pub surprise: Surprise,
    pub metrics: Vec<EventMetric>,
    pub event_url: Option<String>,
}

impl EconomicEvent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        release_date: NaiveDate,
        scheduled_time: ScheduledTime,
        name: impl Into<String>,
        country: impl Into<String>,
        importance: i64,
        forecast: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let forecast = forecast.into();
        let actual = actual.into();
        Self {
            id: derive_event_id(release_date, &name),
            scheduled_time,
            release_date,
            category: EventCategory::from_name(&name),
            surprise: classify_surprise(&actual, &forecast),
            name,
            country: country.into(),
            importance: normalize_importance(importance),
            forecast,
            actual,
            metrics: Vec::new(),
            event_url: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_metrics(mut self, metrics: Vec<EventMetric>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn with_event_url(mut self, url: impl Into<String>) -> Self {
        self.event_url = Some(url.into());
        self
    }

    pub fn refresh_surprise(&mut self) {
        self.surprise = classify_surprise(&self.actual, &self.forecast);
    }

    pub fn importance_class(&self) -> ImportanceClass {
        classify_importance(self.importance)
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::for_event(&self.name, self.category)
    }

    /// Surprise adjusted for the indicator's direction.
    pub fn sentiment(&self) -> Surprise {
        self.surprise.sentiment(self.polarity())
    }

    pub fn has_actual(&self) -> bool {
        self.metrics.iter().any(|m| m.actual.is_some())
            || !(self.actual.is_empty() || self.actual == SCHEDULED)
    }
}

/// Stable id for a source record that does not carry one:
/// `econoday_<date>_<name slug>`, slug truncated to 50 characters.
pub fn derive_event_id(release_date: NaiveDate, name: &str) -> String {
    let slug: String = name
        .replace(' ', "_")
        .to_lowercase()
        .chars()
        .take(EVENT_ID_SLUG_LEN)
        .collect();
    format!("{EVENT_ID_PREFIX}_{}_{slug}", release_date.format("%Y-%m-%d"))
}
