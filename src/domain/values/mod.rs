pub mod asset_class;
pub mod event_category;
pub mod importance;
pub mod instrument_type;
pub mod performance_tier;
pub mod portfolio;
pub mod scheduled_time;
pub mod strategy_status;
pub mod surprise;
