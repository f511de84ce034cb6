use crate::domain::entities::economic_event::EconomicEvent;
use crate::domain::error::DomainError;
use crate::domain::ports::event_repository::EventRepository;
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::warn;

pub struct MemoryEventRepo {
    events: Vec<EconomicEvent>,
}

impl MemoryEventRepo {
    /// Keeps the first event for each id; later duplicates are dropped.
    pub fn new(events: Vec<EconomicEvent>) -> Self {
        let mut seen = HashSet::new();
        let total = events.len();
        let events: Vec<EconomicEvent> = events
            .into_iter()
            .filter(|e| seen.insert(e.id.clone()))
            .collect();
        if events.len() < total {
            warn!(dropped = total - events.len(), "dropped duplicate event ids");
        }
        Self { events }
    }
}

impl EventRepository for MemoryEventRepo {
    fn list_events(&self, date: NaiveDate) -> Result<Vec<EconomicEvent>, DomainError> {
        Ok(self
            .events
            .iter()
            .filter(|e| e.release_date == date)
            .cloned()
            .collect())
    }

    fn list_all(&self) -> Result<Vec<EconomicEvent>, DomainError> {
        Ok(self.events.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::values::scheduled_time::ScheduledTime;

    #[test]
    fn test_dedup_keeps_first() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 17).unwrap();
        let first = EconomicEvent::new(date, ScheduledTime::Tbd, "CPI", "US", 5, "0.3%", "0.4%");
        let dup = EconomicEvent::new(date, ScheduledTime::Tbd, "CPI", "US", 2, "N/A", "Scheduled");
        let repo = MemoryEventRepo::new(vec![first.clone(), dup]);
        let all = repo.list_all().unwrap();
        assert_eq!(all, vec![first]);
    }
}
