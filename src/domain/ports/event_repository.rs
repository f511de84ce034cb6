use crate::domain::entities::economic_event::EconomicEvent;
use crate::domain::error::DomainError;
use chrono::NaiveDate;

/// Read access to economic events supplied by the ingestion side.
///
/// Implementations should return only events whose `release_date` equals
/// `date`, but callers re-filter and must not rely on it.
pub trait EventRepository: Send + Sync {
    fn list_events(&self, date: NaiveDate) -> Result<Vec<EconomicEvent>, DomainError>;
    fn list_all(&self) -> Result<Vec<EconomicEvent>, DomainError>;
}
