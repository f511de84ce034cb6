pub mod economic_event;
pub mod holding;
pub mod strategy;
