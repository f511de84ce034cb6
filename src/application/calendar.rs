use crate::domain::entities::economic_event::EconomicEvent;
use crate::domain::error::DomainError;
use crate::domain::ports::event_repository::EventRepository;
use crate::domain::values::importance::{ImportanceClass, ImportanceTier};
use crate::domain::values::surprise::Surprise;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Events released on `date`, in their original relative order. A date with
/// no events yields an empty list.
pub fn filter_events_by_date(events: &[EconomicEvent], date: NaiveDate) -> Vec<EconomicEvent> {
    events
        .iter()
        .filter(|e| e.release_date == date)
        .cloned()
        .collect()
}

/// Display order within a day: scheduled time ascending, then importance
/// descending. Stable, so equal rows keep their input order.
pub fn order_events(events: &[EconomicEvent]) -> Vec<EconomicEvent> {
    let mut ordered = events.to_vec();
    ordered.sort_by(|a, b| {
        a.scheduled_time
            .cmp(&b.scheduled_time)
            .then_with(|| b.importance.cmp(&a.importance))
    });
    ordered
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarRow {
    #[serde(flatten)]
    pub event: EconomicEvent,
    pub importance_class: ImportanceClass,
    /// Surprise adjusted for whether a higher reading is good news.
    pub sentiment: Surprise,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub min_tier: Option<ImportanceTier>,
    pub events: Vec<CalendarRow>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CalendarStats {
    pub total_events: usize,
    pub events_with_metrics: usize,
    pub events_with_actual: usize,
    pub by_date: BTreeMap<NaiveDate, usize>,
    pub by_importance: BTreeMap<u8, usize>,
    pub by_category: BTreeMap<String, usize>,
}

pub struct CalendarUseCase {
    repo: Arc<dyn EventRepository>,
}

impl CalendarUseCase {
    pub fn new(repo: Arc<dyn EventRepository>) -> Self {
        Self { repo }
    }

    pub fn day(&self, date: NaiveDate, min_tier: Option<ImportanceTier>) -> Result<CalendarDay, DomainError> {
        let listed = self.repo.list_events(date)?;
        let mut events = filter_events_by_date(&listed, date);
        if events.len() != listed.len() {
            debug!(
                %date,
                dropped = listed.len() - events.len(),
                "event source returned events for other dates"
            );
        }
        if let Some(tier) = min_tier {
            events.retain(|e| e.importance_class().tier >= tier);
        }

        let events = order_events(&events)
            .into_iter()
            .map(|event| CalendarRow {
                importance_class: event.importance_class(),
                sentiment: event.sentiment(),
                event,
            })
            .collect();

        Ok(CalendarDay {
            date,
            min_tier,
            events,
        })
    }

    /// Distinct release dates, ascending.
    pub fn dates(&self) -> Result<Vec<NaiveDate>, DomainError> {
        let mut dates: Vec<NaiveDate> = self.repo.list_all()?.iter().map(|e| e.release_date).collect();
        dates.sort();
        dates.dedup();
        Ok(dates)
    }

    pub fn stats(&self) -> Result<CalendarStats, DomainError> {
        let events = self.repo.list_all()?;
        let mut stats = CalendarStats {
            total_events: events.len(),
            ..CalendarStats::default()
        };
        for e in &events {
            if !e.metrics.is_empty() {
                stats.events_with_metrics += 1;
            }
            if e.has_actual() {
                stats.events_with_actual += 1;
            }
            *stats.by_date.entry(e.release_date).or_insert(0) += 1;
            *stats.by_importance.entry(e.importance).or_insert(0) += 1;
            *stats.by_category.entry(e.category.to_string()).or_insert(0) += 1;
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::scheduled_time::ScheduledTime;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
    }

    fn event(day: u32, time: ScheduledTime, name: &str, importance: i64) -> EconomicEvent {
        EconomicEvent::new(d(day), time, name, "US", importance, "N/A", "Scheduled")
    }

    fn at(h: u32, m: u32) -> ScheduledTime {
        ScheduledTime::at(h, m).unwrap()
    }

    #[test]
    fn test_filter_keeps_relative_order() {
        let events = vec![
            event(17, at(10, 0), "B", 2),
            event(18, at(8, 30), "X", 5),
            event(17, at(8, 30), "A", 4),
        ];
        let filtered = filter_events_by_date(&events, d(17));
        let names: Vec<&str> = filtered.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let events = vec![event(17, at(10, 0), "B", 2)];
        assert!(filter_events_by_date(&events, d(20)).is_empty());
    }

    #[test]
    fn test_filter_idempotent() {
        let events = vec![event(17, at(10, 0), "B", 2), event(18, at(8, 30), "X", 5)];
        let once = filter_events_by_date(&events, d(17));
        let twice = filter_events_by_date(&once, d(17));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_order_by_time_then_importance() {
        let events = vec![
            event(17, ScheduledTime::Tbd, "Late", 5),
            event(17, at(10, 0), "Ten", 3),
            event(17, at(8, 30), "LowAt830", 2),
            event(17, at(8, 30), "HighAt830", 5),
            event(17, ScheduledTime::AllDay, "Settlement", 1),
        ];
        let names: Vec<String> = order_events(&events).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Settlement", "HighAt830", "LowAt830", "Ten", "Late"]);
    }

    #[test]
    fn test_order_is_stable() {
        let events = vec![event(17, at(9, 0), "First", 3), event(17, at(9, 0), "Second", 3)];
        let names: Vec<String> = order_events(&events).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
