pub mod event_repo;
pub mod holding_repo;
pub mod seed;
pub mod strategy_repo;
