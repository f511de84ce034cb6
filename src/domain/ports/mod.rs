pub mod event_repository;
pub mod holding_repository;
pub mod strategy_repository;
