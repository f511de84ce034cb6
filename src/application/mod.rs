pub mod calendar;
pub mod portfolio;
pub mod strategies;
